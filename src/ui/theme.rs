//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the page.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for active controls and the typing headline
    pub accent: Color,
    /// Color for borders
    pub border: Color,
    /// Border color for the focused widget
    pub focus: Color,
    /// Color for dimmed/secondary text
    pub dimmed: Color,
    /// Color for project tags
    pub tag: Color,
    /// Color for technology identifiers
    pub tech: Color,
    /// Color for testimonial authors
    pub author: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            accent: Color::Cyan,
            border: Color::DarkGray,
            focus: Color::Cyan,
            dimmed: Color::DarkGray,
            tag: Color::Magenta,
            tech: Color::Blue,
            author: Color::Green,
        }
    }

    /// Style for active filter buttons and active dots
    #[must_use]
    pub fn active_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for inactive controls
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the control under the focus cursor
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default().add_modifier(Modifier::UNDERLINED)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the focused widget's border
    #[must_use]
    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.focus).add_modifier(Modifier::BOLD)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for tag lists
    #[must_use]
    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.tag)
    }

    /// Style for technology identifier lists
    #[must_use]
    pub fn tech_style(&self) -> Style {
        Style::default().fg(self.tech)
    }

    /// Style for testimonial attribution lines
    #[must_use]
    pub fn author_style(&self) -> Style {
        Style::default().fg(self.author).add_modifier(Modifier::ITALIC)
    }
}
