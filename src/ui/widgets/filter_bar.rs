//! Filter button row widget

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One row of category filter buttons
///
/// Active buttons render in the accent style; when the row has focus
/// the button under the cursor is underlined.
pub struct FilterBar<'a> {
    /// Buttons as (key, active) pairs
    controls: &'a [(String, bool)],
    /// Cursor position within the row
    cursor: usize,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the row has focus
    focused: bool,
}

impl<'a> FilterBar<'a> {
    /// Create a new filter row widget
    #[must_use]
    pub const fn new(controls: &'a [(String, bool)], cursor: usize, theme: &'a Theme) -> Self {
        Self {
            controls,
            cursor,
            theme,
            focused: false,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.controls.len() * 2);

        for (i, (key, active)) in self.controls.iter().enumerate() {
            let mut style = if *active {
                self.theme.active_style()
            } else {
                self.theme.normal_style()
            };
            if self.focused && i == self.cursor {
                style = style.patch(self.theme.cursor_style());
            }

            spans.push(Span::styled(format!("[{key}]"), style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
