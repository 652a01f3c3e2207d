//! Keyboard and terminal event handling for the browser
//!
//! Polls crossterm with a short timeout so the animation timers keep
//! running, and translates events into [`AppState`] operations.

use crate::debounce::Debouncer;
use crate::ui::state::{AppState, Focus};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// Outcome of one polling pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Nothing happened within the timeout
    Idle,
    /// State changed, redraw on the next frame
    Redraw,
    /// The user asked to exit
    Quit,
}

/// Poll for one event and apply it to the state
///
/// Resize events are not applied directly; they arm `resize_debounce`
/// so the carousel re-centers once the terminal stops changing size.
///
/// # Errors
///
/// Returns an error if reading from the terminal fails.
pub fn poll_and_handle(
    state: &mut AppState,
    timeout: Duration,
    resize_debounce: &mut Debouncer,
) -> io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Idle);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                state.should_quit = true;
                return Ok(EventResult::Quit);
            }

            match key.code {
                KeyCode::Esc => {
                    state.should_quit = true;
                    return Ok(EventResult::Quit);
                }
                KeyCode::Tab => state.focus_next(),
                KeyCode::BackTab => state.focus_prev(),
                KeyCode::Left => state.cursor_left(),
                KeyCode::Right => state.cursor_right(),
                KeyCode::Enter => state.activate_cursor(),
                KeyCode::Up => state.page.scroll_page_by(-1),
                KeyCode::Down => state.page.scroll_page_by(1),
                KeyCode::PageUp => state.page.scroll_page_by(-10),
                KeyCode::PageDown => state.page.scroll_page_by(10),
                KeyCode::Backspace => state.backspace(),
                KeyCode::Char(c) => handle_char(state, c),
                _ => return Ok(EventResult::Idle),
            }
            Ok(EventResult::Redraw)
        }
        Event::Resize(_, _) => {
            resize_debounce.trigger();
            Ok(EventResult::Redraw)
        }
        _ => Ok(EventResult::Idle),
    }
}

fn handle_char(state: &mut AppState, c: char) {
    if state.focused_slot().is_some() {
        state.type_char(c);
        return;
    }

    match c {
        'q' => state.should_quit = true,
        'h' => state.cursor_left(),
        'l' => state.cursor_right(),
        '1'..='9' if state.focus == Focus::Carousel => {
            if let Some(digit) = c.to_digit(10) {
                state.carousel_go_to(digit as usize - 1);
            }
        }
        _ => {}
    }
}
