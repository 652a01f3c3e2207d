//! Search box widget for the hero and projects sections

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Bordered single-line search box
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Placeholder shown when the query is empty
    placeholder: &'a str,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the widget has focus
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search box widget
    #[must_use]
    pub const fn new(query: &'a str, placeholder: &'a str, theme: &'a Theme) -> Self {
        Self {
            query,
            placeholder,
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

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.query.is_empty() && !self.focused {
            Line::from(Span::styled(self.placeholder, self.theme.dimmed_style()))
        } else {
            let mut spans = vec![Span::raw(self.query)];
            if self.focused {
                spans.push(Span::styled(
                    "│",
                    Style::default().add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            Line::from(spans)
        };

        Paragraph::new(line).render(inner, buf);
    }
}
