//! Project search and filtering
//!
//! One engine owns both the free-text query and the active category.
//! Each operation re-evaluates visibility over the full card list and
//! writes it unconditionally, so search and filter do not compose: the
//! most recent operation wins. Both duplicated search boxes and both
//! filter button groups are kept in sync on every pass.

pub mod categories;

pub use categories::{KNOWN_CATEGORIES, category_matches};

use crate::content::Card;
use crate::view::{ControlGroup, PageView, SearchSlot, Section};

/// Whether a card matches a normalized (lowercased, trimmed) query
///
/// Substring containment against the title, the description, any tag, or
/// any technology identifier. The empty query matches every card.
#[must_use]
pub fn card_matches_query(card: &Card, term: &str) -> bool {
    card.title.to_lowercase().contains(term)
        || card.description.to_lowercase().contains(term)
        || card.tags.iter().any(|tag| tag.to_lowercase().contains(term))
        || card.tech.iter().any(|tech| tech.to_lowercase().contains(term))
}

/// Search and filter state for the project grid
///
/// Holds the raw query as typed (mirroring copies it verbatim between the
/// two boxes) and the active category key. Defaults to an empty query and
/// the `"all"` category.
#[derive(Debug, Clone)]
pub struct SearchFilterEngine {
    query: String,
    active_category: String,
}

impl Default for SearchFilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchFilterEngine {
    /// Create an engine with an empty query and the `"all"` category
    #[must_use]
    pub fn new() -> Self {
        Self {
            query: String::new(),
            active_category: "all".to_string(),
        }
    }

    /// The raw query as last typed
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The currently active category key
    #[must_use]
    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    /// Re-evaluate card visibility for a typed query
    ///
    /// Normalizes the query (lowercase, trim), shows each card iff it
    /// matches, mirrors the raw value into the counterpart search box when
    /// that box exists, and, for a non-empty query typed in the hero box,
    /// scrolls to the projects section.
    pub fn perform_search(&mut self, raw: &str, origin: SearchSlot, view: &mut impl PageView) {
        raw.clone_into(&mut self.query);
        let term = raw.to_lowercase().trim().to_string();

        for index in 0..view.project_count() {
            let visible = view
                .project(index)
                .is_some_and(|card| card_matches_query(card, &term));
            view.set_project_visible(index, visible);
        }

        let mirror = origin.other();
        if view.has_search_box(mirror) {
            view.set_search_text(mirror, raw);
        }

        if origin == SearchSlot::Hero && !term.is_empty() {
            view.scroll_to_section(Section::Projects);
        }
    }

    /// Re-evaluate card visibility for a clicked filter button
    ///
    /// `"all"` shows every card; any other key runs the category predicate
    /// table against each card's tags. Both button groups are updated so a
    /// button is active iff its key equals the category. A click in the
    /// hero group scrolls to the projects section.
    pub fn apply_filter(&mut self, category: &str, origin: ControlGroup, view: &mut impl PageView) {
        let key = category.trim().to_lowercase();

        for group in ControlGroup::ALL {
            for index in 0..view.control_count(group) {
                let active = view
                    .control_key(group, index)
                    .is_some_and(|k| k.eq_ignore_ascii_case(&key));
                view.set_control_active(group, index, active);
            }
        }

        for index in 0..view.project_count() {
            let visible = view
                .project(index)
                .is_some_and(|card| category_matches(&key, &card.tags));
            view.set_project_visible(index, visible);
        }

        self.active_category = key;

        if origin == ControlGroup::Hero {
            view.scroll_to_section(Section::Projects);
        }
    }
}
