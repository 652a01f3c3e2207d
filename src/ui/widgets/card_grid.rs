//! Project card list widget

use crate::content::Card;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Vertical list of visible project cards
///
/// Hidden cards take no space; the grid reflows as the engine toggles
/// visibility, like the project grid collapsing on the page.
pub struct CardGrid<'a> {
    /// All project cards
    cards: &'a [Card],
    /// Per-card visibility flags, parallel to `cards`
    visible: &'a [bool],
    /// Height of one card, in rows
    card_height: u16,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> CardGrid<'a> {
    /// Create a new card grid widget
    #[must_use]
    pub const fn new(
        cards: &'a [Card],
        visible: &'a [bool],
        card_height: u16,
        theme: &'a Theme,
    ) -> Self {
        Self {
            cards,
            visible,
            card_height,
            theme,
        }
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.visible.iter().all(|v| !v) {
            Paragraph::new(Line::from(Span::styled(
                "No matching projects",
                self.theme.dimmed_style(),
            )))
            .render(area, buf);
            return;
        }

        let mut y = area.y;
        for (card, _) in self
            .cards
            .iter()
            .zip(self.visible.iter())
            .filter(|(_, visible)| **visible)
        {
            if y >= area.y + area.height {
                break;
            }

            let slot = Rect {
                x: area.x,
                y,
                width: area.width,
                height: self.card_height.min(area.y + area.height - y),
            };

            let mut lines = vec![
                Line::from(Span::styled(
                    card.title.as_str(),
                    Style::default().add_modifier(ratatui::style::Modifier::BOLD),
                )),
                Line::from(Span::raw(card.description.as_str())),
            ];
            if !card.tags.is_empty() {
                lines.push(Line::from(Span::styled(
                    card.tags.join(", "),
                    self.theme.tag_style(),
                )));
            }
            if !card.tech.is_empty() {
                lines.push(Line::from(Span::styled(
                    card.tech.join(" "),
                    self.theme.tech_style(),
                )));
            }

            Paragraph::new(lines).render(slot, buf);
            y += self.card_height;
        }
    }
}
