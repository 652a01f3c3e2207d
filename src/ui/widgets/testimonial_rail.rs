//! Testimonial carousel widgets

use crate::content::Testimonial;
use crate::ui::page::CARD_GAP;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Horizontal rail of testimonial cards
///
/// Cards sit on a virtual track at `padding + i * (width + gap)`; the
/// rail shifts the track left by `scroll` and draws whatever cards fall
/// fully inside the viewport. Partially visible cards are clipped out
/// so the centered card reads cleanly.
pub struct TestimonialRail<'a> {
    /// All testimonial cards
    testimonials: &'a [Testimonial],
    /// Leading track padding, in cells
    padding: u16,
    /// Card width, in cells
    card_width: u16,
    /// Current track scroll, in cells
    scroll: i32,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the carousel has focus
    focused: bool,
}

impl<'a> TestimonialRail<'a> {
    /// Create a new testimonial rail widget
    #[must_use]
    pub const fn new(
        testimonials: &'a [Testimonial],
        padding: u16,
        card_width: u16,
        scroll: i32,
        theme: &'a Theme,
    ) -> Self {
        Self {
            testimonials,
            padding,
            card_width,
            scroll,
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

impl Widget for TestimonialRail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.card_width == 0 {
            return;
        }

        for (i, testimonial) in self.testimonials.iter().enumerate() {
            let track_x = i32::from(self.padding)
                + i as i32 * i32::from(self.card_width + CARD_GAP)
                - self.scroll;
            if track_x < 0 || track_x + i32::from(self.card_width) > i32::from(area.width) {
                continue;
            }

            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            let slot = Rect {
                x: area.x + track_x as u16,
                y: area.y,
                width: self.card_width,
                height: area.height,
            };

            let border_style = if self.focused {
                self.theme.focused_border_style()
            } else {
                self.theme.border_style()
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style);
            let inner = block.inner(slot);
            block.render(slot, buf);

            let attribution = if testimonial.role.is_empty() {
                format!("— {}", testimonial.author)
            } else {
                format!("— {}, {}", testimonial.author, testimonial.role)
            };
            let lines = vec![
                Line::from(Span::raw(format!("\u{201c}{}\u{201d}", testimonial.quote))),
                Line::from(Span::styled(attribution, self.theme.author_style())),
            ];

            Paragraph::new(lines).wrap(Wrap { trim: true }).render(inner, buf);
        }
    }
}

/// Dot indicator row under the rail, one dot per testimonial
pub struct DotRow<'a> {
    /// Per-dot active flags
    dots: &'a [bool],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> DotRow<'a> {
    /// Create a new dot row widget
    #[must_use]
    pub const fn new(dots: &'a [bool], theme: &'a Theme) -> Self {
        Self { dots, theme }
    }
}

impl Widget for DotRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.dots.len() * 2);
        for active in self.dots {
            let (glyph, style) = if *active {
                ("●", self.theme.active_style())
            } else {
                ("○", self.theme.dimmed_style())
            };
            spans.push(Span::styled(glyph, style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans))
            .centered()
            .render(area, buf);
    }
}
