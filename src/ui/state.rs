//! Application state for the interactive browser
//!
//! Holds the page, the interaction engines, and the focus cursor, and
//! exposes the operations the event handler calls.

use crate::carousel::CarouselController;
use crate::content::Portfolio;
use crate::search::SearchFilterEngine;
use crate::typing::TypingEffect;
use crate::ui::page::TuiPage;
use crate::ui::theme::Theme;
use crate::view::{ControlGroup, PageView, SearchSlot, Section};

/// Which page element currently receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Search box in the hero section
    HeroSearch,
    /// Quick-filter buttons in the hero section
    HeroFilters,
    /// Search box above the project grid
    ProjectsSearch,
    /// Filter buttons above the project grid
    ProjectsFilters,
    /// Testimonial carousel
    Carousel,
}

impl Focus {
    /// The next focusable element, wrapping from the carousel back to
    /// the hero search box
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::HeroSearch => Self::HeroFilters,
            Self::HeroFilters => Self::ProjectsSearch,
            Self::ProjectsSearch => Self::ProjectsFilters,
            Self::ProjectsFilters => Self::Carousel,
            Self::Carousel => Self::HeroSearch,
        }
    }

    /// The previous focusable element
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::HeroSearch => Self::Carousel,
            Self::HeroFilters => Self::HeroSearch,
            Self::ProjectsSearch => Self::HeroFilters,
            Self::ProjectsFilters => Self::ProjectsSearch,
            Self::Carousel => Self::ProjectsFilters,
        }
    }

    /// Section containing this element, used to keep focus on screen
    #[must_use]
    pub const fn section(self) -> Section {
        match self {
            Self::HeroSearch | Self::HeroFilters => Section::Hero,
            Self::ProjectsSearch | Self::ProjectsFilters => Section::Projects,
            Self::Carousel => Section::Testimonials,
        }
    }
}

/// State of the interactive browser
pub struct AppState {
    /// The rendered page
    pub page: TuiPage,
    /// Search and filter logic
    pub engine: SearchFilterEngine,
    /// Testimonial carousel cursor
    pub carousel: CarouselController,
    /// Rotating headline animation
    pub typing: TypingEffect,
    /// Currently focused element
    pub focus: Focus,
    /// Button cursor within the hero filter row
    pub hero_cursor: usize,
    /// Button cursor within the projects filter row
    pub projects_cursor: usize,
    /// Color theme
    pub theme: Theme,
    /// Set when the user asks to exit
    pub should_quit: bool,
}

impl AppState {
    /// Build the browser state from a portfolio document
    #[must_use]
    pub fn new(portfolio: Portfolio, header_offset: u16) -> Self {
        let typing = TypingEffect::new(portfolio.roles.clone());
        Self {
            page: TuiPage::new(portfolio, header_offset),
            engine: SearchFilterEngine::new(),
            carousel: CarouselController::new(),
            typing,
            focus: Focus::HeroSearch,
            hero_cursor: 0,
            projects_cursor: 0,
            theme: Theme::default(),
            should_quit: false,
        }
    }

    /// Move focus forward, then scroll its section into view
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.page.scroll_to_section(self.focus.section());
    }

    /// Move focus backward, then scroll its section into view
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.page.scroll_to_section(self.focus.section());
    }

    /// Search slot for the focused element, if it is a search box
    #[must_use]
    pub const fn focused_slot(&self) -> Option<SearchSlot> {
        match self.focus {
            Focus::HeroSearch => Some(SearchSlot::Hero),
            Focus::ProjectsSearch => Some(SearchSlot::Projects),
            _ => None,
        }
    }

    /// Control group for the focused element, if it is a filter row
    #[must_use]
    pub const fn focused_group(&self) -> Option<ControlGroup> {
        match self.focus {
            Focus::HeroFilters => Some(ControlGroup::Hero),
            Focus::ProjectsFilters => Some(ControlGroup::Projects),
            _ => None,
        }
    }

    /// Append a character to the focused search box and re-run the search
    pub fn type_char(&mut self, c: char) {
        let Some(slot) = self.focused_slot() else {
            return;
        };
        let mut text = self.page.search_text(slot).to_string();
        text.push(c);
        // The engine only mirrors into the counterpart box; the box being
        // typed into is ours to update.
        self.page.set_search_text(slot, &text);
        self.engine.perform_search(&text, slot, &mut self.page);
    }

    /// Remove the last character from the focused search box and re-run
    /// the search
    pub fn backspace(&mut self) {
        let Some(slot) = self.focused_slot() else {
            return;
        };
        let mut text = self.page.search_text(slot).to_string();
        if text.pop().is_none() {
            return;
        }
        self.page.set_search_text(slot, &text);
        self.engine.perform_search(&text, slot, &mut self.page);
    }

    /// Move the button cursor in the focused filter row, or step the
    /// carousel when it has focus
    pub fn cursor_left(&mut self) {
        match self.focus {
            Focus::HeroFilters => {
                self.hero_cursor = self.hero_cursor.saturating_sub(1);
            }
            Focus::ProjectsFilters => {
                self.projects_cursor = self.projects_cursor.saturating_sub(1);
            }
            Focus::Carousel => self.carousel.go_prev(&mut self.page),
            _ => {}
        }
    }

    /// Mirror of [`cursor_left`](Self::cursor_left)
    pub fn cursor_right(&mut self) {
        match self.focus {
            Focus::HeroFilters => {
                let max = self.page.control_count(ControlGroup::Hero).saturating_sub(1);
                self.hero_cursor = (self.hero_cursor + 1).min(max);
            }
            Focus::ProjectsFilters => {
                let max = self
                    .page
                    .control_count(ControlGroup::Projects)
                    .saturating_sub(1);
                self.projects_cursor = (self.projects_cursor + 1).min(max);
            }
            Focus::Carousel => self.carousel.go_next(&mut self.page),
            _ => {}
        }
    }

    /// Press the filter button under the cursor
    pub fn activate_cursor(&mut self) {
        let Some(group) = self.focused_group() else {
            return;
        };
        let cursor = match group {
            ControlGroup::Hero => self.hero_cursor,
            ControlGroup::Projects => self.projects_cursor,
        };
        let Some(key) = self.page.control_key(group, cursor) else {
            return;
        };
        let key = key.to_string();
        self.engine.apply_filter(&key, group, &mut self.page);
    }

    /// Jump the carousel straight to a card (digit keys)
    pub fn carousel_go_to(&mut self, index: usize) {
        if self.focus == Focus::Carousel && index < self.page.card_count() {
            self.carousel.go_to(index, &mut self.page);
        }
    }
}
