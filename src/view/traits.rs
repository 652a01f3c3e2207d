//! Core trait for the page view abstraction layer

use super::types::{ControlGroup, SearchSlot, Section};
use crate::content::Card;

/// Trait for page view implementations
///
/// This trait abstracts the rendering substrate behind read accessors and
/// write mutators, allowing the carousel controller and the search/filter
/// engine to run unchanged against the terminal page or a mock in tests.
///
/// Every surface is optional: an implementation reports absence through
/// `carousel_present`, zero counts, or `has_search_box`, and callers skip
/// the affected operation silently. No method returns an error.
pub trait PageView {
    // --- carousel surface ---

    /// Whether the testimonial carousel exists on this page
    fn carousel_present(&self) -> bool;

    /// Number of testimonial cards in the carousel track
    fn card_count(&self) -> usize;

    /// Width of the carousel viewport, in cells
    fn container_width(&self) -> u16;

    /// Live-measured width of the card at `index`, in cells
    ///
    /// Returns 0 for an out-of-range index.
    fn card_width(&self, index: usize) -> u16;

    /// Offset of the card at `index` from the start of the track,
    /// including the current track padding
    fn card_offset(&self, index: usize) -> i32;

    /// Apply symmetric inline padding to the carousel track so the first
    /// and last cards can be centered
    fn set_track_padding(&mut self, padding: u16);

    /// Request a smooth horizontal scroll of the carousel track
    ///
    /// The offset may be negative; the substrate clamps it. A later
    /// request supersedes an in-flight one.
    fn scroll_track_to(&mut self, offset: i32);

    /// Number of dot indicators (generated 1:1 with cards)
    fn dot_count(&self) -> usize;

    /// Set the active status of the dot at `index`
    fn set_dot_active(&mut self, index: usize, active: bool);

    // --- project grid surface ---

    /// Number of project cards on the page
    fn project_count(&self) -> usize;

    /// Read the project card at `index`
    fn project(&self, index: usize) -> Option<&Card>;

    /// Set the visibility of the project card at `index`
    fn set_project_visible(&mut self, index: usize, visible: bool);

    // --- search controls ---

    /// Whether the given search box exists on this page
    fn has_search_box(&self, slot: SearchSlot) -> bool;

    /// Current text of the given search box (empty if absent)
    fn search_text(&self, slot: SearchSlot) -> &str;

    /// Set the text of the given search box
    fn set_search_text(&mut self, slot: SearchSlot, text: &str);

    // --- filter control groups ---

    /// Number of filter buttons in the given group (0 if absent)
    fn control_count(&self, group: ControlGroup) -> usize;

    /// Declared filter key of the button at `index` in the given group
    fn control_key(&self, group: ControlGroup, index: usize) -> Option<&str>;

    /// Set the active status of the button at `index` in the given group
    fn set_control_active(&mut self, group: ControlGroup, index: usize, active: bool);

    // --- shared collaborator ---

    /// Scroll the viewport so the section's top sits at the fixed header
    /// offset below the viewport top, smoothly
    fn scroll_to_section(&mut self, section: Section);
}
