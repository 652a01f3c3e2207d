//! Interactive full-screen portfolio browser
//!
//! Owns the terminal session and the frame loop: measure the page,
//! draw its sections against the vertical scroll, run the animation
//! timers, and feed events to the state.

use crate::config::FolioConfig;
use crate::content::Portfolio;
use crate::debounce::Debouncer;
use crate::ui::events::{EventResult, poll_and_handle};
use crate::ui::page::{PROJECT_CARD_HEIGHT, RAIL_HEIGHT};
use crate::ui::state::{AppState, Focus};
use crate::ui::widgets::{CardGrid, DotRow, FilterBar, HelpBar, SearchBar, TestimonialRail};
use crate::view::Section;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// How long each polling pass waits before the timers run again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the interactive browser until the user exits
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or an event read
/// fails.
pub fn run(portfolio: Portfolio, config: &FolioConfig) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let mut state = AppState::new(portfolio, config.header_offset);

    let mut resize_debounce = Debouncer::new(config.debounce());
    // One settle pass after the first frame measures real geometry
    let mut settle = Debouncer::new(config.settle());
    settle.trigger();

    let result = run_loop(&mut terminal, &mut state, &mut resize_debounce, &mut settle);
    cleanup_terminal()?;
    result
}

/// Setup terminal for TUI
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Cleanup terminal after TUI
fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut AppState,
    resize_debounce: &mut Debouncer,
    settle: &mut Debouncer,
) -> io::Result<()> {
    let mut next_type = Instant::now();

    loop {
        terminal.draw(|frame| draw(frame, state))?;

        let now = Instant::now();
        if settle.fire_ready(now) || resize_debounce.fire_ready(now) {
            state.carousel.render(&mut state.page);
        }
        if now >= next_type {
            next_type = now + state.typing.tick();
        }

        if poll_and_handle(state, POLL_INTERVAL, resize_debounce)? == EventResult::Quit
            || state.should_quit
        {
            return Ok(());
        }
    }
}

/// Place a leaf widget by its row within the virtual page
///
/// Returns `None` when the leaf is scrolled off screen; the height is
/// clipped at the bottom edge.
fn leaf(body: Rect, virtual_top: u16, height: u16, scroll: u16) -> Option<Rect> {
    let y = i32::from(virtual_top) - i32::from(scroll);
    if y < 0 || y >= i32::from(body.height) {
        return None;
    }
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let y = y as u16;
    Some(Rect {
        x: body.x + 1,
        y: body.y + y,
        width: body.width.saturating_sub(2),
        height: height.min(body.height - y),
    })
}

fn draw(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    if area.height < 2 {
        return;
    }

    let body = Rect {
        height: area.height - 1,
        ..area
    };
    let help_area = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };

    state.page.layout(body.width, body.height);
    let scroll = state.page.page_scroll;

    draw_hero(frame, state, body, scroll);
    draw_projects(frame, state, body, scroll);
    draw_testimonials(frame, state, body, scroll);

    let hints = HelpBar::hints_for(state.focus);
    HelpBar::new(&hints, &state.theme).render(help_area, frame.buffer_mut());
}

fn draw_hero(frame: &mut Frame, state: &AppState, body: Rect, scroll: u16) {
    let page = &state.page;
    let buf = frame.buffer_mut();

    if let Some(slot) = leaf(body, 0, 1, scroll) {
        Paragraph::new(Line::from(Span::styled(
            page.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .render(slot, buf);
    }
    if let Some(slot) = leaf(body, 1, 1, scroll) {
        Paragraph::new(Line::from(vec![
            Span::raw("I am a "),
            Span::styled(state.typing.current(), state.theme.active_style()),
            Span::styled("▌", state.theme.dimmed_style()),
        ]))
        .render(slot, buf);
    }
    if let Some(slot) = leaf(body, 2, 1, scroll) {
        Paragraph::new(Line::from(Span::styled(
            page.tagline.as_str(),
            state.theme.dimmed_style(),
        )))
        .render(slot, buf);
    }
    if let Some(slot) = leaf(body, 4, 3, scroll) {
        SearchBar::new(&page.hero_search, "Search projects...", &state.theme)
            .focused(state.focus == Focus::HeroSearch)
            .render(slot, buf);
    }
    if let Some(slot) = leaf(body, 7, 1, scroll) {
        FilterBar::new(&page.hero_filters, state.hero_cursor, &state.theme)
            .focused(state.focus == Focus::HeroFilters)
            .render(slot, buf);
    }
}

fn draw_projects(frame: &mut Frame, state: &AppState, body: Rect, scroll: u16) {
    let page = &state.page;
    let top = page.section_top(Section::Projects);
    let buf = frame.buffer_mut();

    if let Some(slot) = leaf(body, top, 1, scroll) {
        Paragraph::new(Line::from(Span::styled(
            "Projects",
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .render(slot, buf);
    }
    if let Some(slot) = leaf(body, top + 1, 3, scroll) {
        SearchBar::new(&page.projects_search, "Search projects...", &state.theme)
            .focused(state.focus == Focus::ProjectsSearch)
            .render(slot, buf);
    }
    if let Some(slot) = leaf(body, top + 4, 1, scroll) {
        FilterBar::new(&page.project_filters, state.projects_cursor, &state.theme)
            .focused(state.focus == Focus::ProjectsFilters)
            .render(slot, buf);
    }

    #[allow(clippy::cast_possible_truncation)]
    let grid_height = (page.visible_count() as u16 * PROJECT_CARD_HEIGHT).max(1);
    if let Some(slot) = leaf(body, top + 5, grid_height, scroll) {
        CardGrid::new(&page.projects, &page.visible, PROJECT_CARD_HEIGHT, &state.theme)
            .render(slot, buf);
    }
}

fn draw_testimonials(frame: &mut Frame, state: &AppState, body: Rect, scroll: u16) {
    let page = &state.page;
    let top = page.section_top(Section::Testimonials);
    let buf = frame.buffer_mut();

    if let Some(slot) = leaf(body, top, 1, scroll) {
        Paragraph::new(Line::from(Span::styled(
            "Testimonials",
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .render(slot, buf);
    }
    if let Some(slot) = leaf(body, top + 1, RAIL_HEIGHT, scroll) {
        TestimonialRail::new(
            &page.testimonials,
            page.track_padding(),
            page.testimonial_card_width(),
            page.track_scroll(),
            &state.theme,
        )
        .focused(state.focus == Focus::Carousel)
        .render(slot, buf);
    }
    if let Some(slot) = leaf(body, top + 1 + RAIL_HEIGHT, 1, scroll) {
        DotRow::new(&page.dots, &state.theme).render(slot, buf);
    }
}
