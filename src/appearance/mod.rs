//! Theme and appearance for the gantry control center.
//!
//! Color palette and layout constants shared by every screen and widget.

use iced::Color;
use std::sync::LazyLock;

// Layout constants
pub const CORNER_RADIUS: f32 = 8.0;
pub const CORNER_RADIUS_SMALL: f32 = 6.0;
pub const CORNER_RADIUS_LARGE: f32 = 12.0;
pub const PADDING_LARGE: u16 = 20;

/// Color palette for the application theme
#[derive(Debug, Clone)]
pub struct Palette {
    // Backgrounds
    pub background: Color,
    pub surface: Color,
    pub card: Color,
    pub card_hover: Color,

    // Text
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Borders
    pub border: Color,

    // Accent
    pub accent: Color,

    // Category colors: dark shade for fills, light shade for text/borders
    pub success: Color,
    pub success_light: Color,
    pub warning: Color,
    pub warning_light: Color,
    pub danger: Color,
    pub danger_light: Color,
}

/// Dark theme palette (zinc scale with a blue accent)
pub static DARK: LazyLock<Palette> = LazyLock::new(|| Palette {
    background: Color::from_rgb(0.035, 0.035, 0.043), // zinc-900
    surface: Color::from_rgb(0.094, 0.094, 0.106),    // zinc-950
    card: Color::from_rgba(0.153, 0.153, 0.165, 0.6), // zinc-800/60
    card_hover: Color::from_rgba(0.153, 0.153, 0.165, 0.8), // zinc-800/80

    text: Color::from_rgb(0.957, 0.957, 0.961), // zinc-100
    text_secondary: Color::from_rgb(0.631, 0.631, 0.667), // zinc-400
    text_muted: Color::from_rgb(0.443, 0.443, 0.475), // zinc-500

    border: Color::from_rgba(0.153, 0.153, 0.165, 0.5), // zinc-800/50

    accent: Color::from_rgb(0.23, 0.51, 0.96), // blue-500

    success: Color::from_rgb(0.13, 0.53, 0.33), // green-600
    success_light: Color::from_rgb(0.34, 0.80, 0.46), // green-400
    warning: Color::from_rgb(0.92, 0.58, 0.0), // amber-500
    warning_light: Color::from_rgb(0.99, 0.78, 0.23), // amber-300
    danger: Color::from_rgb(0.86, 0.25, 0.25), // red-600
    danger_light: Color::from_rgb(0.98, 0.45, 0.45), // red-400
});

/// Lighten a color by the specified amount (0.0 - 1.0)
pub fn lighten(color: Color, amount: f32) -> Color {
    Color {
        r: (color.r + amount).min(1.0),
        g: (color.g + amount).min(1.0),
        b: (color.b + amount).min(1.0),
        a: color.a,
    }
}

/// Get the current palette (currently always dark theme)
pub fn palette() -> &'static Palette {
    &DARK
}
