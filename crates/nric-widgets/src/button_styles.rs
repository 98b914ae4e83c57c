//! Raised/pressed button styling
//!
//! - Press/release buttons (submit): sink while held, flat while pending
//! - Toggle buttons (mode tabs): stay sunk while their mode is active

use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Vector};

/// Background of an inactive tab
pub const TAB_BG: Color = Color::from_rgb(0.25, 0.25, 0.25);

/// Submit button background
pub const SUBMIT_BG: Color = Color::from_rgb(0.25, 0.5, 0.75);

const RADIUS: f32 = 4.0;

/// How far a button sticks out of the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Depth {
    Raised,
    Sunk,
    Flat,
}

/// Shift every channel towards white (`amount > 0`) or black (`amount < 0`)
fn shade(color: Color, amount: f32) -> Color {
    let channel = |c: f32| {
        if amount >= 0.0 {
            (c + amount).min(1.0)
        } else {
            (c * (1.0 + amount)).max(0.0)
        }
    };
    Color::from_rgb(channel(color.r), channel(color.g), channel(color.b))
}

fn styled(base: Color, depth: Depth) -> Style {
    let (background, border, shadow) = match depth {
        Depth::Raised => (
            base,
            shade(base, 0.1),
            Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
                offset: Vector::new(2.0, 2.0),
                blur_radius: 3.0,
            },
        ),
        Depth::Sunk => (
            shade(base, -0.15),
            shade(base, -0.2),
            Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
                offset: Vector::new(0.5, 0.5),
                blur_radius: 1.0,
            },
        ),
        Depth::Flat => (
            Color::from_rgb(0.2, 0.2, 0.2),
            Color::TRANSPARENT,
            Shadow::default(),
        ),
    };

    Style {
        background: Some(Background::Color(background)),
        text_color: if depth == Depth::Flat {
            Color::from_rgb(0.5, 0.5, 0.5)
        } else {
            Color::WHITE
        },
        border: Border {
            color: border,
            width: if depth == Depth::Flat { 0.0 } else { 1.0 },
            radius: RADIUS.into(),
        },
        shadow,
        snap: false,
    }
}

/// Style function for momentary buttons
///
/// Use with `.style(|_theme, status| press_release_style(status, SUBMIT_BG))`
pub fn press_release_style(status: Status, base_color: Color) -> Style {
    match status {
        Status::Active => styled(base_color, Depth::Raised),
        Status::Hovered => styled(shade(base_color, 0.08), Depth::Raised),
        Status::Pressed => styled(base_color, Depth::Sunk),
        Status::Disabled => styled(base_color, Depth::Flat),
    }
}

/// Style function for toggle buttons
///
/// Use with `.style(move |_theme, status| toggle_style(status, is_active, ACCENT_COLOR))`
pub fn toggle_style(status: Status, is_active: bool, active_color: Color) -> Style {
    match (is_active, status) {
        (_, Status::Disabled) => styled(active_color, Depth::Flat),
        (true, Status::Hovered) => styled(shade(active_color, 0.05), Depth::Sunk),
        (true, _) => styled(active_color, Depth::Sunk),
        (false, Status::Pressed) => styled(TAB_BG, Depth::Sunk),
        (false, Status::Hovered) => styled(shade(TAB_BG, 0.08), Depth::Raised),
        (false, Status::Active) => styled(TAB_BG, Depth::Raised),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_saturates() {
        let lighter = shade(Color::from_rgb(0.95, 0.5, 0.0), 0.1);
        assert_eq!(lighter.r, 1.0);
        assert!((lighter.g - 0.6).abs() < 1e-6);

        let darker = shade(Color::from_rgb(0.5, 0.5, 0.5), -0.2);
        assert!((darker.r - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_active_tab_is_sunk() {
        let active = toggle_style(Status::Active, true, SUBMIT_BG);
        let idle = toggle_style(Status::Active, false, SUBMIT_BG);
        assert!(active.shadow.blur_radius < idle.shadow.blur_radius);
    }

    #[test]
    fn test_pending_submit_is_flat() {
        let style = press_release_style(Status::Disabled, SUBMIT_BG);
        assert_eq!(style.text_color, Color::from_rgb(0.5, 0.5, 0.5));
        assert_eq!(style.border.width, 0.0);
    }
}
