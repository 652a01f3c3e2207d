//! Ratatui widgets for the portfolio browser
//!
//! Custom widgets for rendering the page sections.

mod card_grid;
mod filter_bar;
mod help_bar;
mod search_bar;
mod testimonial_rail;

pub use card_grid::CardGrid;
pub use filter_bar::FilterBar;
pub use help_bar::{HelpBar, KeyHint};
pub use search_bar::SearchBar;
pub use testimonial_rail::{DotRow, TestimonialRail};
