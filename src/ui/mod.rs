//! Terminal user interface
//!
//! Renders the portfolio page with ratatui: the page model implementing
//! the view seam, the browse loop, and the section widgets.

pub mod browser;
pub mod events;
pub mod page;
pub mod state;
pub mod theme;
pub mod widgets;

pub use page::TuiPage;
pub use state::{AppState, Focus};
pub use theme::Theme;
