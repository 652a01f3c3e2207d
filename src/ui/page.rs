//! Terminal page backing the TUI
//!
//! `TuiPage` owns the portfolio content plus everything the core writes
//! through the view seam: card visibility, control active flags, carousel
//! track geometry, and section scroll requests. The browse loop measures
//! layout into it each frame; the widgets render from it.

use crate::content::{Card, Portfolio, Testimonial};
use crate::view::{ControlGroup, PageView, SearchSlot, Section};

/// Horizontal gap between testimonial cards on the track, in cells
pub const CARD_GAP: u16 = 2;
/// Rows occupied by the hero section
pub const HERO_HEIGHT: u16 = 8;
/// Rows occupied by one project card in the grid
pub const PROJECT_CARD_HEIGHT: u16 = 4;
/// Rows occupied by the testimonial rail (cards plus border)
pub const RAIL_HEIGHT: u16 = 7;

/// The page as the terminal renders it
#[derive(Debug)]
pub struct TuiPage {
    /// Display name for the hero header
    pub name: String,
    /// Tagline shown under the typing headline
    pub tagline: String,
    /// Project cards
    pub projects: Vec<Card>,
    /// Per-project visibility, written by the engine
    pub visible: Vec<bool>,
    /// Testimonial cards
    pub testimonials: Vec<Testimonial>,
    /// Hero quick-filter buttons: (key, active)
    pub hero_filters: Vec<(String, bool)>,
    /// Project-section filter buttons: (key, active)
    pub project_filters: Vec<(String, bool)>,
    /// Hero search box text
    pub hero_search: String,
    /// Projects search box text
    pub projects_search: String,
    /// Carousel dot indicators
    pub dots: Vec<bool>,
    /// Vertical page scroll, in rows
    pub page_scroll: u16,

    // Carousel geometry, re-measured each layout pass
    container: u16,
    card_w: u16,
    track_padding: u16,
    track_scroll: i32,

    // Page geometry, re-measured each layout pass
    header_offset: u16,
    pending_section: Option<Section>,
    section_tops: [u16; 3],
    total_height: u16,
    viewport_height: u16,
}

impl TuiPage {
    /// Build the page from a portfolio document
    ///
    /// Every project starts visible, dots match testimonials 1:1, and the
    /// `"all"` button starts active in both filter groups.
    #[must_use]
    pub fn new(portfolio: Portfolio, header_offset: u16) -> Self {
        let make_group = |keys: Vec<String>| -> Vec<(String, bool)> {
            keys.into_iter().map(|k| (k == "all", k)).map(|(a, k)| (k, a)).collect()
        };

        Self {
            name: portfolio.name,
            tagline: portfolio.tagline,
            visible: vec![true; portfolio.projects.len()],
            dots: vec![false; portfolio.testimonials.len()],
            projects: portfolio.projects,
            testimonials: portfolio.testimonials,
            hero_filters: make_group(portfolio.hero_filters),
            project_filters: make_group(portfolio.project_filters),
            hero_search: String::new(),
            projects_search: String::new(),
            page_scroll: 0,
            container: 0,
            card_w: 0,
            track_padding: 0,
            track_scroll: 0,
            header_offset,
            pending_section: None,
            section_tops: [0; 3],
            total_height: 0,
            viewport_height: 0,
        }
    }

    /// Number of currently visible project cards
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Current track padding, in cells
    #[must_use]
    pub const fn track_padding(&self) -> u16 {
        self.track_padding
    }

    /// Current track scroll, clamped to the track
    #[must_use]
    pub const fn track_scroll(&self) -> i32 {
        self.track_scroll
    }

    /// Testimonial card width from the last layout pass
    #[must_use]
    pub const fn testimonial_card_width(&self) -> u16 {
        self.card_w
    }

    /// Re-measure page and carousel geometry against the viewport, then
    /// resolve any pending section scroll
    ///
    /// Heights depend on current visibility, so this runs every frame
    /// before the widgets draw.
    pub fn layout(&mut self, viewport_width: u16, viewport_height: u16) {
        self.container = viewport_width.saturating_sub(2);
        self.card_w = if self.container == 0 {
            0
        } else {
            self.container.saturating_sub(6).clamp(1, 42).min(self.container)
        };

        #[allow(clippy::cast_possible_truncation)]
        let projects_height =
            5 + self.visible_count() as u16 * PROJECT_CARD_HEIGHT;
        let testimonials_height = RAIL_HEIGHT + 2;

        self.section_tops = [0, HERO_HEIGHT, HERO_HEIGHT + projects_height];
        self.total_height = HERO_HEIGHT + projects_height + testimonials_height;
        self.viewport_height = viewport_height;

        if let Some(section) = self.pending_section.take() {
            let top = self.section_tops[Self::section_index(section)];
            self.page_scroll = top.saturating_sub(self.header_offset);
        }

        let max_scroll = self.total_height.saturating_sub(self.viewport_height);
        self.page_scroll = self.page_scroll.min(max_scroll);
    }

    /// Top row of a section within the virtual page
    #[must_use]
    pub const fn section_top(&self, section: Section) -> u16 {
        self.section_tops[Self::section_index(section)]
    }

    /// Total virtual page height from the last layout pass
    #[must_use]
    pub const fn total_height(&self) -> u16 {
        self.total_height
    }

    /// Scroll the page by a signed number of rows
    pub fn scroll_page_by(&mut self, delta: i16) {
        let max_scroll = self.total_height.saturating_sub(self.viewport_height);
        let next = i32::from(self.page_scroll) + i32::from(delta);
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        {
            self.page_scroll = next.clamp(0, i32::from(max_scroll)) as u16;
        }
    }

    const fn section_index(section: Section) -> usize {
        match section {
            Section::Hero => 0,
            Section::Projects => 1,
            Section::Testimonials => 2,
        }
    }
}

impl PageView for TuiPage {
    fn carousel_present(&self) -> bool {
        !self.testimonials.is_empty()
    }

    fn card_count(&self) -> usize {
        self.testimonials.len()
    }

    fn container_width(&self) -> u16 {
        self.container
    }

    fn card_width(&self, index: usize) -> u16 {
        if index < self.testimonials.len() {
            self.card_w
        } else {
            0
        }
    }

    fn card_offset(&self, index: usize) -> i32 {
        i32::from(self.track_padding) + index as i32 * i32::from(self.card_w + CARD_GAP)
    }

    fn set_track_padding(&mut self, padding: u16) {
        self.track_padding = padding;
    }

    fn scroll_track_to(&mut self, offset: i32) {
        // The track cannot scroll past its start; the far end is handled
        // by clipping during rendering.
        self.track_scroll = offset.max(0);
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

    fn has_search_box(&self, _slot: SearchSlot) -> bool {
        // The terminal page always renders both boxes
        true
    }

    fn search_text(&self, slot: SearchSlot) -> &str {
        match slot {
            SearchSlot::Hero => &self.hero_search,
            SearchSlot::Projects => &self.projects_search,
        }
    }

    fn set_search_text(&mut self, slot: SearchSlot, text: &str) {
        let target = match slot {
            SearchSlot::Hero => &mut self.hero_search,
            SearchSlot::Projects => &mut self.projects_search,
        };
        text.clone_into(target);
    }

    fn control_count(&self, group: ControlGroup) -> usize {
        match group {
            ControlGroup::Hero => self.hero_filters.len(),
            ControlGroup::Projects => self.project_filters.len(),
        }
    }

    fn control_key(&self, group: ControlGroup, index: usize) -> Option<&str> {
        let controls = match group {
            ControlGroup::Hero => &self.hero_filters,
            ControlGroup::Projects => &self.project_filters,
        };
        controls.get(index).map(|(key, _)| key.as_str())
    }

    fn set_control_active(&mut self, group: ControlGroup, index: usize, active: bool) {
        let controls = match group {
            ControlGroup::Hero => &mut self.hero_filters,
            ControlGroup::Projects => &mut self.project_filters,
        };
        if let Some((_, slot)) = controls.get_mut(index) {
            *slot = active;
        }
    }

    fn scroll_to_section(&mut self, section: Section) {
        // Resolved against measured geometry on the next layout pass; a
        // later request supersedes an unresolved one.
        self.pending_section = Some(section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_page() -> TuiPage {
        let portfolio = Portfolio {
            projects: vec![
                Card::new("One", "first").with_tags(&["Automation"]),
                Card::new("Two", "second").with_tags(&["RAG"]),
            ],
            testimonials: vec![
                Testimonial {
                    quote: "Great".to_string(),
                    author: "A".to_string(),
                    role: String::new(),
                },
                Testimonial {
                    quote: "Fine".to_string(),
                    author: "B".to_string(),
                    role: String::new(),
                },
            ],
            hero_filters: vec!["all".to_string(), "web".to_string()],
            project_filters: vec!["all".to_string(), "rag".to_string()],
            ..Portfolio::default()
        };
        TuiPage::new(portfolio, 2)
    }

    #[test]
    fn test_all_starts_active_in_both_groups() {
        let page = make_page();
        assert_eq!(page.hero_filters[0], ("all".to_string(), true));
        assert!(!page.hero_filters[1].1);
        assert_eq!(page.project_filters[0], ("all".to_string(), true));
    }

    #[test]
    fn test_section_scroll_resolves_on_layout() {
        let mut page = make_page();
        page.scroll_to_section(Section::Projects);
        page.layout(80, 10);

        // Projects section top minus the header offset
        assert_eq!(page.page_scroll, HERO_HEIGHT - 2);
    }

    #[test]
    fn test_page_scroll_clamps_to_content() {
        let mut page = make_page();
        page.layout(80, 10);

        page.scroll_page_by(500);
        assert_eq!(
            page.page_scroll,
            page.total_height() - 10
        );

        page.scroll_page_by(-500);
        assert_eq!(page.page_scroll, 0);
    }

    #[test]
    fn test_projects_height_follows_visibility() {
        let mut page = make_page();
        page.layout(80, 10);
        let with_all = page.section_top(Section::Testimonials);

        page.set_project_visible(1, false);
        page.layout(80, 10);
        assert_eq!(
            page.section_top(Section::Testimonials),
            with_all - PROJECT_CARD_HEIGHT
        );
    }

    #[test]
    fn test_card_offset_includes_padding_and_gap() {
        let mut page = make_page();
        page.layout(50, 10);
        page.set_track_padding(4);

        let card = page.testimonial_card_width();
        assert_eq!(page.card_offset(0), 4);
        assert_eq!(page.card_offset(1), 4 + i32::from(card + CARD_GAP));
    }

    #[test]
    fn test_track_scroll_clamps_at_start() {
        let mut page = make_page();
        page.scroll_track_to(-20);
        assert_eq!(page.track_scroll(), 0);

        page.scroll_track_to(15);
        assert_eq!(page.track_scroll(), 15);
    }
}
