//! Shared theme constants for the entry widgets
//!
//! Colours and sizes used by the wheel columns, the manual fields and the
//! result panel.

use iced::Color;

/// Window background
pub const BG_DARK: Color = Color::from_rgb(0.12, 0.12, 0.14);

/// Panel and field background
pub const BG_MEDIUM: Color = Color::from_rgb(0.18, 0.18, 0.20);

/// Neutral borders
pub const BORDER_COLOR: Color = Color::from_rgb(0.35, 0.35, 0.40);

pub const TEXT_PRIMARY: Color = Color::from_rgb(0.9, 0.9, 0.9);
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.6, 0.6, 0.65);

/// Wheel items away from the centre band
pub const TEXT_DIM: Color = Color::from_rgb(0.42, 0.42, 0.46);

/// Selection band, focused fields, active tab
pub const ACCENT_COLOR: Color = Color::from_rgb(0.3, 0.7, 0.9);

/// Accent after a valid result (#33CC66)
pub const VALID_COLOR: Color = Color::from_rgb(0.2, 0.8, 0.4);

/// Accent after an invalid result (#CC3333)
pub const INVALID_COLOR: Color = Color::from_rgb(0.8, 0.2, 0.2);

/// Width of one wheel column / manual field
pub const COLUMN_WIDTH: f32 = 48.0;

/// Gap between columns
pub const COLUMN_SPACING: f32 = 6.0;

/// Glyph size of wheel items and field text
pub const SYMBOL_SIZE: f32 = 24.0;

/// Largest rendered barcode image
pub const BARCODE_MAX_WIDTH: f32 = 420.0;

/// Border colour for a field given the result accent
pub fn accent_border(accent: Option<bool>) -> Color {
    match accent {
        Some(true) => VALID_COLOR,
        Some(false) => INVALID_COLOR,
        None => BORDER_COLOR,
    }
}
