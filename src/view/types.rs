//! Common types for the page view abstraction layer

use std::fmt;

/// Identifies one of the two duplicated search boxes on the page
///
/// The hero box sits in the page header; the projects box sits above the
/// card grid. Both must always show the same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchSlot {
    /// Search box in the hero header
    Hero,
    /// Search box above the project grid
    Projects,
}

impl SearchSlot {
    /// The counterpart box that mirrors this one
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Hero => Self::Projects,
            Self::Projects => Self::Hero,
        }
    }
}

/// Identifies one of the two duplicated filter button groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlGroup {
    /// Quick-filter buttons in the hero header
    Hero,
    /// Filter buttons above the project grid
    Projects,
}

impl ControlGroup {
    /// Both groups, in page order
    pub const ALL: [Self; 2] = [Self::Hero, Self::Projects];
}

/// A named section of the page, the target of a section scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Hero header
    Hero,
    /// Project grid
    Projects,
    /// Testimonial carousel
    Testimonials,
}

impl Section {
    /// Stable identifier used for display
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Projects => "projects",
            Self::Testimonials => "testimonials",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
