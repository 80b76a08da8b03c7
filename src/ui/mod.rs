//! # UI Module
//!
//! Terminal user interface: application state and rendering.
//!
//! ## Components
//!
//! - [`App`] - the composition root owning every screen's state
//! - [`mod@render`] - rendering functions for drawing the TUI
//! - [`theme::Theme`] - the dark/light palettes
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                    Header                       │
//! ├─────────────────────────────────────────────────┤
//! │                                                 │
//! │            active screen body                   │
//! │     (home / books / reader / assistant /        │
//! │      estekhara / login / verify / profile)      │
//! │                                                 │
//! │   overlays: drawer, search, welcome, terms,     │
//! │             info, logout confirm, notices       │
//! ├─────────────────────────────────────────────────┤
//! │                    Footer                       │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod render;
pub mod theme;

pub use app::App;
pub use render::render;

/// Replace ASCII digits with Persian digits for display.
pub fn to_persian_digits(input: &str) -> String {
    const PERSIAN: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => PERSIAN[d as usize],
            _ => c,
        })
        .collect()
}
