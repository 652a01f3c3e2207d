//! Page view abstraction layer
//!
//! Isolates the carousel controller and the search/filter engine from the
//! rendering substrate. The terminal page in `crate::ui` implements
//! [`PageView`]; tests run the same core against [`MockPage`].

pub mod mock;
pub mod traits;
pub mod types;

pub use mock::MockPage;
pub use traits::PageView;
pub use types::{ControlGroup, SearchSlot, Section};
