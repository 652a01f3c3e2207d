//! Integration tests for the folio interaction core
//!
//! These tests drive the carousel and the search/filter engine end to end
//! against a mock page, verifying the behavior a user sees: dots following
//! the centered card, project cards appearing and disappearing, both
//! control surfaces staying in sync.

use folio::carousel::CarouselController;
use folio::content::{Card, Portfolio, Testimonial};
use folio::search::SearchFilterEngine;
use folio::ui::AppState;
use folio::view::{ControlGroup, MockPage, SearchSlot, Section};

/// A page resembling the demo portfolio: six projects, four testimonials,
/// both search boxes and both filter rows
fn setup_page() -> MockPage {
    MockPage::default()
        .with_projects(vec![
            Card::new("RAG Pipeline", "Question answering over internal docs")
                .with_tags(&["RAG", "Machine Learning"])
                .with_tech(&["langchain", "qdrant"]),
            Card::new("Price Watcher", "Tracks competitor pricing")
                .with_tags(&["Scraping", "Automation"])
                .with_tech(&["selenium"]),
            Card::new("Defect Lens", "Spots flaws on the assembly line")
                .with_tags(&["Computer Vision", "Deep Learning"])
                .with_tech(&["pytorch"]),
            Card::new("Inbox Agent", "Triages support email")
                .with_tags(&["AI Agent", "Automation"])
                .with_tech(&["langchain"]),
            Card::new("Churn Model", "Predicts subscriber churn")
                .with_tags(&["Machine Learning"])
                .with_tech(&["scikit-learn"]),
            Card::new("Form Filler", "Submits compliance forms")
                .with_tags(&["Automation", "Scraping"])
                .with_tech(&["selenium"]),
        ])
        .with_carousel(4, 100, 40)
        .with_search_boxes()
        .with_filters(ControlGroup::Hero, &["all", "ai", "web", "automation"])
        .with_filters(
            ControlGroup::Projects,
            &["all", "ai", "data", "rag", "cv", "automation", "ai-agent", "web"],
        )
}

#[test]
fn test_carousel_full_cycle_keeps_one_dot() {
    let mut page = setup_page();
    let mut carousel = CarouselController::new();
    carousel.render(&mut page);

    for expected in [1, 2, 3, 0, 1] {
        carousel.go_next(&mut page);
        assert_eq!(carousel.current_index(), expected);
        assert_eq!(page.active_dots(), vec![expected]);
    }

    carousel.go_prev(&mut page);
    carousel.go_prev(&mut page);
    assert_eq!(carousel.current_index(), 3);
    assert_eq!(page.active_dots(), vec![3]);
}

#[test]
fn test_carousel_centers_each_card() {
    let mut page = setup_page();
    let mut carousel = CarouselController::new();

    // container 100, card 40: padding (100/2 - 40/2) = 30
    carousel.render(&mut page);
    assert_eq!(page.track_padding, 30);
    assert_eq!(page.last_track_scroll(), Some(0));

    // card 2 sits at offset 30 + 2*40; centering scrolls to 110 - 50 + 20
    carousel.go_to(2, &mut page);
    assert_eq!(page.last_track_scroll(), Some(80));
}

#[test]
fn test_search_matches_across_all_fields() {
    let mut page = setup_page();
    let mut engine = SearchFilterEngine::new();

    engine.perform_search("SELENIUM", SearchSlot::Projects, &mut page);
    assert_eq!(page.visible_titles(), vec!["Price Watcher", "Form Filler"]);

    engine.perform_search("churn", SearchSlot::Projects, &mut page);
    assert_eq!(page.visible_titles(), vec!["Churn Model"]);

    engine.perform_search("", SearchSlot::Projects, &mut page);
    assert_eq!(page.visible_titles().len(), 6);
}

#[test]
fn test_hero_search_mirrors_and_scrolls() {
    let mut page = setup_page();
    let mut engine = SearchFilterEngine::new();

    engine.perform_search("  Rag ", SearchSlot::Hero, &mut page);

    // The raw text lands in the other box untouched
    assert_eq!(page.search_boxes[&SearchSlot::Projects], "  Rag ");
    assert_eq!(page.visible_titles(), vec!["RAG Pipeline"]);
    assert_eq!(page.section_scrolls, vec![Section::Projects]);

    // Typing in the projects box mirrors back but never scrolls
    engine.perform_search("vision", SearchSlot::Projects, &mut page);
    assert_eq!(page.search_boxes[&SearchSlot::Hero], "vision");
    assert_eq!(page.section_scrolls.len(), 1);
}

#[test]
fn test_filter_categories_map_to_tags() {
    let mut page = setup_page();
    let mut engine = SearchFilterEngine::new();

    engine.apply_filter("ai", ControlGroup::Projects, &mut page);
    assert_eq!(page.visible_titles(), vec!["RAG Pipeline", "Churn Model"]);

    engine.apply_filter("cv", ControlGroup::Projects, &mut page);
    assert_eq!(page.visible_titles(), vec!["Defect Lens"]);

    engine.apply_filter("ai-agent", ControlGroup::Projects, &mut page);
    assert_eq!(
        page.visible_titles(),
        vec!["Price Watcher", "Inbox Agent", "Form Filler"]
    );

    engine.apply_filter("all", ControlGroup::Projects, &mut page);
    assert_eq!(page.visible_titles().len(), 6);
}

#[test]
fn test_filter_click_syncs_both_button_rows() {
    let mut page = setup_page();
    let mut engine = SearchFilterEngine::new();

    engine.apply_filter("automation", ControlGroup::Projects, &mut page);
    assert_eq!(page.active_keys(ControlGroup::Hero), vec!["automation"]);
    assert_eq!(page.active_keys(ControlGroup::Projects), vec!["automation"]);

    // A key the hero row lacks clears the hero row entirely
    engine.apply_filter("rag", ControlGroup::Projects, &mut page);
    assert!(page.active_keys(ControlGroup::Hero).is_empty());
    assert_eq!(page.active_keys(ControlGroup::Projects), vec!["rag"]);
}

#[test]
fn test_hero_filter_always_scrolls_to_projects() {
    let mut page = setup_page();
    let mut engine = SearchFilterEngine::new();

    engine.apply_filter("all", ControlGroup::Hero, &mut page);
    engine.apply_filter("web", ControlGroup::Hero, &mut page);
    assert_eq!(
        page.section_scrolls,
        vec![Section::Projects, Section::Projects]
    );

    engine.apply_filter("web", ControlGroup::Projects, &mut page);
    assert_eq!(page.section_scrolls.len(), 2);
}

#[test]
fn test_search_and_filter_do_not_compose() {
    let mut page = setup_page();
    let mut engine = SearchFilterEngine::new();

    engine.perform_search("selenium", SearchSlot::Projects, &mut page);
    assert_eq!(page.visible_titles(), vec!["Price Watcher", "Form Filler"]);

    // The filter recomputes visibility from scratch; the query text stays
    // in the boxes but no longer constrains anything
    engine.apply_filter("ai", ControlGroup::Projects, &mut page);
    assert_eq!(page.visible_titles(), vec!["RAG Pipeline", "Churn Model"]);
    assert_eq!(page.search_boxes[&SearchSlot::Projects], "selenium");

    // And a new search overwrites the filter result the same way
    engine.perform_search("inbox", SearchSlot::Projects, &mut page);
    assert_eq!(page.visible_titles(), vec!["Inbox Agent"]);
}

#[test]
fn test_page_without_surfaces_is_inert() {
    let mut page = MockPage::default();
    let mut engine = SearchFilterEngine::new();
    let mut carousel = CarouselController::new();

    carousel.go_next(&mut page);
    carousel.render(&mut page);
    engine.perform_search("anything", SearchSlot::Hero, &mut page);
    engine.apply_filter("ai", ControlGroup::Hero, &mut page);

    assert!(page.track_scrolls.is_empty());
    assert!(page.visible_titles().is_empty());
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn test_browser_state_search_journey() {
    let portfolio = Portfolio {
        name: "Demo".to_string(),
        roles: vec!["Engineer".to_string()],
        projects: vec![
            Card::new("Scraper", "collects listings").with_tags(&["Scraping"]),
            Card::new("Assistant", "answers questions").with_tags(&["AI Agent"]),
        ],
        testimonials: vec![Testimonial {
            quote: "Delivered".to_string(),
            author: "Client".to_string(),
            role: "CTO".to_string(),
        }],
        hero_filters: vec!["all".to_string(), "web".to_string()],
        project_filters: vec!["all".to_string(), "web".to_string(), "ai-agent".to_string()],
        ..Portfolio::default()
    };
    let mut state = AppState::new(portfolio, 2);
    state.page.layout(80, 24);

    for c in "agent".chars() {
        state.type_char(c);
    }
    assert_eq!(state.page.hero_search, "agent");
    assert_eq!(state.page.projects_search, "agent");
    assert_eq!(state.page.visible, vec![false, true]);

    for _ in 0..5 {
        state.backspace();
    }
    assert_eq!(state.page.visible_count(), 2);

    state.focus_next();
    state.cursor_right();
    state.activate_cursor();
    assert_eq!(state.page.visible, vec![true, false]);
    let active: Vec<&str> = state
        .page
        .project_filters
        .iter()
        .filter(|(_, on)| *on)
        .map(|(key, _)| key.as_str())
        .collect();
    assert_eq!(active, vec!["web"]);
}
