//! Mock page view for testing
//!
//! Records every write the core performs, with configurable presence and
//! measurements, so carousel and search/filter behavior can be verified
//! without a terminal.

use super::traits::PageView;
use super::types::{ControlGroup, SearchSlot, Section};
use crate::content::Card;
use std::collections::HashMap;

/// Mock page that records writes from the core components
///
/// A freshly constructed mock has no carousel, no search boxes, no filter
/// groups, and no projects: every operation against it must be a no-op.
/// Surfaces are added through the `with_*` builders.
#[derive(Debug, Default)]
pub struct MockPage {
    /// Project cards on the page
    pub projects: Vec<Card>,
    /// Per-project visibility, written by the engine
    pub visible: Vec<bool>,
    /// Whether the carousel surface exists
    pub has_carousel: bool,
    /// Number of testimonial cards
    pub cards: usize,
    /// Carousel viewport width
    pub container: u16,
    /// Uniform card width reported by measurements
    pub card_w: u16,
    /// Last track padding written
    pub track_padding: u16,
    /// Every track scroll request, in order
    pub track_scrolls: Vec<i32>,
    /// Per-dot active status
    pub dots: Vec<bool>,
    /// Present search boxes and their text
    pub search_boxes: HashMap<SearchSlot, String>,
    /// Present filter groups: (key, active) per button
    pub groups: HashMap<ControlGroup, Vec<(String, bool)>>,
    /// Every section scroll request, in order
    pub section_scrolls: Vec<Section>,
}

impl MockPage {
    /// Create an empty page with every surface absent
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add project cards (all initially visible)
    #[must_use]
    pub fn with_projects(mut self, projects: Vec<Card>) -> Self {
        self.visible = vec![true; projects.len()];
        self.projects = projects;
        self
    }

    /// Add a carousel with `cards` uniformly sized cards and 1:1 dots
    #[must_use]
    pub fn with_carousel(mut self, cards: usize, container: u16, card_w: u16) -> Self {
        self.has_carousel = true;
        self.cards = cards;
        self.container = container;
        self.card_w = card_w;
        self.dots = vec![false; cards];
        self
    }

    /// Add a single (initially empty) search box
    #[must_use]
    pub fn with_search_box(mut self, slot: SearchSlot) -> Self {
        self.search_boxes.insert(slot, String::new());
        self
    }

    /// Add both search boxes
    #[must_use]
    pub fn with_search_boxes(self) -> Self {
        self.with_search_box(SearchSlot::Hero)
            .with_search_box(SearchSlot::Projects)
    }

    /// Add a filter button group with the given keys, all inactive
    #[must_use]
    pub fn with_filters(mut self, group: ControlGroup, keys: &[&str]) -> Self {
        self.groups.insert(
            group,
            keys.iter().map(|k| ((*k).to_string(), false)).collect(),
        );
        self
    }

    /// Indices of dots currently active
    #[must_use]
    pub fn active_dots(&self) -> Vec<usize> {
        self.dots
            .iter()
            .enumerate()
            .filter_map(|(i, &a)| a.then_some(i))
            .collect()
    }

    /// Keys of active buttons in the given group
    #[must_use]
    pub fn active_keys(&self, group: ControlGroup) -> Vec<String> {
        self.groups
            .get(&group)
            .map(|g| {
                g.iter()
                    .filter_map(|(k, a)| a.then(|| k.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Titles of currently visible project cards
    #[must_use]
    pub fn visible_titles(&self) -> Vec<&str> {
        self.projects
            .iter()
            .zip(&self.visible)
            .filter_map(|(card, &v)| v.then_some(card.title.as_str()))
            .collect()
    }

    /// The most recent track scroll request, if any
    #[must_use]
    pub fn last_track_scroll(&self) -> Option<i32> {
        self.track_scrolls.last().copied()
    }
}

impl PageView for MockPage {
    fn carousel_present(&self) -> bool {
        self.has_carousel
    }

    fn card_count(&self) -> usize {
        self.cards
    }

    fn container_width(&self) -> u16 {
        self.container
    }

    fn card_width(&self, index: usize) -> u16 {
        if index < self.cards { self.card_w } else { 0 }
    }

    fn card_offset(&self, index: usize) -> i32 {
        i32::from(self.track_padding) + index as i32 * i32::from(self.card_w)
    }

    fn set_track_padding(&mut self, padding: u16) {
        self.track_padding = padding;
    }

    fn scroll_track_to(&mut self, offset: i32) {
        self.track_scrolls.push(offset);
    }

    fn dot_count(&self) -> usize {
        self.dots.len()
    }

    fn set_dot_active(&mut self, index: usize, active: bool) {
        if let Some(dot) = self.dots.get_mut(index) {
            *dot = active;
        }
    }

    fn project_count(&self) -> usize {
        self.projects.len()
    }

    fn project(&self, index: usize) -> Option<&Card> {
        self.projects.get(index)
    }

    fn set_project_visible(&mut self, index: usize, visible: bool) {
        if let Some(slot) = self.visible.get_mut(index) {
            *slot = visible;
        }
    }

    fn has_search_box(&self, slot: SearchSlot) -> bool {
        self.search_boxes.contains_key(&slot)
    }

    fn search_text(&self, slot: SearchSlot) -> &str {
        self.search_boxes.get(&slot).map_or("", String::as_str)
    }

    fn set_search_text(&mut self, slot: SearchSlot, text: &str) {
        if let Some(existing) = self.search_boxes.get_mut(&slot) {
            text.clone_into(existing);
        }
    }

    fn control_count(&self, group: ControlGroup) -> usize {
        self.groups.get(&group).map_or(0, Vec::len)
    }

    fn control_key(&self, group: ControlGroup, index: usize) -> Option<&str> {
        self.groups
            .get(&group)
            .and_then(|g| g.get(index))
            .map(|(k, _)| k.as_str())
    }

    fn set_control_active(&mut self, group: ControlGroup, index: usize, active: bool) {
        if let Some((_, slot)) = self.groups.get_mut(&group).and_then(|g| g.get_mut(index)) {
            *slot = active;
        }
    }

    fn scroll_to_section(&mut self, section: Section) {
        self.section_scrolls.push(section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_has_no_surfaces() {
        let page = MockPage::new();
        assert!(!page.carousel_present());
        assert_eq!(page.card_count(), 0);
        assert_eq!(page.project_count(), 0);
        assert!(!page.has_search_box(SearchSlot::Hero));
        assert_eq!(page.control_count(ControlGroup::Hero), 0);
    }

    #[test]
    fn test_writes_to_absent_surfaces_are_ignored() {
        let mut page = MockPage::new();
        page.set_dot_active(0, true);
        page.set_project_visible(3, false);
        page.set_search_text(SearchSlot::Projects, "query");
        page.set_control_active(ControlGroup::Hero, 1, true);

        assert!(page.active_dots().is_empty());
        assert!(page.visible.is_empty());
        assert_eq!(page.search_text(SearchSlot::Projects), "");
        assert!(page.active_keys(ControlGroup::Hero).is_empty());
    }

    #[test]
    fn test_card_offset_includes_padding() {
        let mut page = MockPage::new().with_carousel(3, 100, 40);
        assert_eq!(page.card_offset(1), 40);

        page.set_track_padding(30);
        assert_eq!(page.card_offset(0), 30);
        assert_eq!(page.card_offset(2), 110);
    }
}
