//! # Theme System
//!
//! Centralized colors for the TUI. Rendering code references theme
//! fields instead of hardcoding `ratatui::style::Color` values, and the
//! active theme can be toggled at runtime between the two built-ins.
//! The selection is persisted in the local store as `"dark"` or
//! `"light"`.

use ratatui::style::Color;

/// All colors used by the UI, grouped by semantic role.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Persisted identifier: `"dark"` or `"light"`.
    pub name: &'static str,

    // -- Background colors --
    /// Main background for panels and modals.
    pub bg: Color,
    /// Raised surface (cards, selected rows).
    pub surface: Color,

    // -- Foreground / text colors --
    /// Primary text.
    pub fg: Color,
    /// Muted/secondary text (hints, separators, footer).
    pub fg_dim: Color,

    // -- Accent colors --
    /// Primary accent: branding, focused borders, selection.
    pub accent: Color,
    /// Secondary accent: highlighted verse text, chips.
    pub secondary: Color,

    // -- Semantic status colors --
    pub success: Color,
    pub error: Color,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Default theme (dark).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The other built-in, for the toggle control.
    pub fn toggled(&self) -> &'static Theme {
        if self.name == "dark" {
            &BUILT_IN_THEMES[1]
        } else {
            &BUILT_IN_THEMES[0]
        }
    }
}

static BUILT_IN_THEMES: [Theme; 2] = [
    // 0 - dark (default)
    Theme {
        name: "dark",
        bg: Color::Rgb(24, 26, 32),
        surface: Color::Rgb(38, 41, 50),
        fg: Color::Rgb(214, 219, 230),
        fg_dim: Color::Rgb(110, 118, 134),
        accent: Color::Rgb(102, 187, 170),
        secondary: Color::Rgb(240, 200, 120),
        success: Color::Rgb(140, 200, 120),
        error: Color::Rgb(235, 110, 110),
    },
    // 1 - light
    Theme {
        name: "light",
        bg: Color::Rgb(250, 248, 243),
        surface: Color::Rgb(236, 232, 222),
        fg: Color::Rgb(44, 48, 56),
        fg_dim: Color::Rgb(130, 130, 124),
        accent: Color::Rgb(0, 121, 107),
        secondary: Color::Rgb(165, 120, 20),
        success: Color::Rgb(56, 142, 60),
        error: Color::Rgb(198, 40, 40),
    },
];
