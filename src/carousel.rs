//! Testimonial carousel controller
//!
//! Owns a current-index cursor over the ordered testimonial cards and
//! keeps the dot indicators and the track scroll position in sync through
//! the injected page view. All operations are silent no-ops when the
//! carousel surface is absent or empty.

use crate::view::PageView;

/// Controller for the testimonial carousel
///
/// Holds only the current index; every measurement is read live from the
/// view on each render so layout changes are picked up on the next pass.
#[derive(Debug, Default)]
pub struct CarouselController {
    current: usize,
}

impl CarouselController {
    /// Create a controller positioned on the first card
    #[must_use]
    pub const fn new() -> Self {
        Self { current: 0 }
    }

    /// The current card index
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Move to the previous card, wrapping to the last from the first
    pub fn go_prev(&mut self, view: &mut impl PageView) {
        if !Self::active(view) {
            return;
        }
        self.current = if self.current > 0 {
            self.current - 1
        } else {
            view.card_count() - 1
        };
        self.render(view);
    }

    /// Move to the next card, wrapping to the first from the last
    pub fn go_next(&mut self, view: &mut impl PageView) {
        if !Self::active(view) {
            return;
        }
        self.current = if self.current < view.card_count() - 1 {
            self.current + 1
        } else {
            0
        };
        self.render(view);
    }

    /// Jump directly to the card behind the clicked dot
    ///
    /// Dots are generated 1:1 with cards, so `index` is taken as-is.
    pub fn go_to(&mut self, index: usize, view: &mut impl PageView) {
        if !Self::active(view) {
            return;
        }
        self.current = index;
        self.render(view);
    }

    /// Re-measure and re-center the current card, then sync the dots
    ///
    /// Pads the track symmetrically so the first and last cards can reach
    /// the center, requests a scroll that centers the current card in the
    /// container, and marks exactly the dot matching the current index
    /// active.
    pub fn render(&self, view: &mut impl PageView) {
        if !Self::active(view) {
            return;
        }

        let container = i32::from(view.container_width());
        let card = i32::from(view.card_width(self.current));

        let side_padding = (container / 2 - card / 2).max(0);
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        view.set_track_padding(side_padding as u16);

        let offset = view.card_offset(self.current);
        view.scroll_track_to(offset - container / 2 + card / 2);

        for index in 0..view.dot_count() {
            view.set_dot_active(index, index == self.current);
        }
    }

    /// Whether the carousel surface exists and has cards
    fn active(view: &impl PageView) -> bool {
        view.carousel_present() && view.card_count() > 0
    }
}
