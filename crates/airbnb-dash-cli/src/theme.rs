//! Color palettes for the dashboard
//!
//! The active palette lives in thread-local storage so widgets can read it
//! without threading a theme through every render call.

use std::cell::Cell;

use ratatui::prelude::Color;

use airbnb_dash_core::ColorScale;

pub use airbnb_dash_core::config::ThemeName;

/// Palette used by every screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Headers, active tab, focused borders
    pub accent: Color,
    /// Selected filter values and bar fills
    pub accent_secondary: Color,
    /// Main text
    pub text: Color,
    /// Hints and inactive items
    pub subtle: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub border: Color,
    /// Background of the cursor row
    pub selection_bg: Color,
    /// Whether charts may use their own color scales
    pub chart_colors: bool,
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Default => Self {
                accent: Color::Rgb(255, 90, 95),
                accent_secondary: Color::Rgb(0, 166, 153),
                text: Color::Rgb(230, 230, 230),
                subtle: Color::Rgb(140, 140, 150),
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                border: Color::Rgb(110, 110, 120),
                selection_bg: Color::Rgb(50, 40, 45),
                chart_colors: true,
            },
            ThemeName::Ocean => Self {
                accent: Color::Rgb(100, 180, 255),
                accent_secondary: Color::Rgb(90, 220, 200),
                text: Color::Rgb(200, 220, 240),
                subtle: Color::Rgb(120, 150, 180),
                success: Color::Rgb(100, 220, 150),
                warning: Color::Rgb(255, 200, 100),
                error: Color::Rgb(255, 100, 100),
                border: Color::Rgb(80, 120, 160),
                selection_bg: Color::Rgb(30, 50, 75),
                chart_colors: true,
            },
            ThemeName::Monochrome => Self {
                accent: Color::White,
                accent_secondary: Color::Rgb(190, 190, 190),
                text: Color::Rgb(220, 220, 220),
                subtle: Color::Rgb(128, 128, 128),
                success: Color::Rgb(200, 200, 200),
                warning: Color::Rgb(200, 200, 200),
                error: Color::Rgb(220, 220, 220),
                border: Color::Rgb(100, 100, 100),
                selection_bg: Color::Rgb(60, 60, 60),
                chart_colors: false,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name(ThemeName::Default)
    }
}

thread_local! {
    static CURRENT: Cell<(ThemeName, Theme)> = Cell::new((ThemeName::Default, Theme::default()));
}

fn current() -> Theme {
    CURRENT.with(|c| c.get().1)
}

/// Switch the active palette
pub fn set_theme(name: ThemeName) {
    CURRENT.with(|c| c.set((name, Theme::from_name(name))));
}

pub fn current_theme_name() -> ThemeName {
    CURRENT.with(|c| c.get().0)
}

pub fn accent() -> Color {
    current().accent
}

pub fn accent_secondary() -> Color {
    current().accent_secondary
}

pub fn text() -> Color {
    current().text
}

pub fn subtle() -> Color {
    current().subtle
}

pub fn success() -> Color {
    current().success
}

pub fn warning() -> Color {
    current().warning
}

pub fn error() -> Color {
    current().error
}

pub fn border() -> Color {
    current().border
}

pub fn selection_bg() -> Color {
    current().selection_bg
}

/// Color for position `t` in `[0, 1]` on a chart's scale
///
/// Monochrome falls back to the secondary accent.
pub fn scale_color(scale: ColorScale, t: f64) -> Color {
    if !current().chart_colors {
        return accent_secondary();
    }
    let (r, g, b) = scale.sample(t);
    Color::Rgb(r, g, b)
}

/// Color for the `i`-th category on a chart's scale
pub fn category_color(scale: ColorScale, i: usize) -> Color {
    if !current().chart_colors {
        return if i % 2 == 0 { text() } else { subtle() };
    }
    let (r, g, b) = scale.categorical(i);
    Color::Rgb(r, g, b)
}
