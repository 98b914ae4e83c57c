//! Wheel selector view
//!
//! Each column is three layers:
//!
//! ```text
//! ┌──────┐
//! │  7   │  scrollable: 5 copies of the alphabet, no scrollbar
//! │┌────┐│
//! ││ 8  ││  highlight band at the selection point
//! │└────┘│  + transparent overlay text field on top
//! │  9   │
//! └──────┘
//! ```
//!
//! The view is a pure projection of [`WheelState`]; scroll positions come back
//! through `on_scroll` and are applied by the caller.

use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{column, container, row, scrollable, stack, text, text_input, Space};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

use nric_core::selector::SelectionAnchor;
use nric_core::sync::Synchronizer;
use nric_core::wheel::WheelState;
use nric_core::{FieldRef, SLOT_COUNT};

use crate::ids::{field_id, wheel_scroll_id};
use crate::theme::{
    accent_border, ACCENT_COLOR, BG_MEDIUM, COLUMN_SPACING, COLUMN_WIDTH, SYMBOL_SIZE,
    TEXT_DIM, TEXT_PRIMARY,
};

/// Render all nine wheel columns side by side
pub fn wheel_row<'a, Message: Clone + 'a>(
    sync: &'a Synchronizer,
    accent: Option<bool>,
    on_scroll: impl Fn(usize, f32) -> Message + Clone + 'a,
    on_input: impl Fn(usize, String) -> Message + Clone + 'a,
    on_paste: impl Fn(usize, String) -> Message + Clone + 'a,
) -> Element<'a, Message> {
    let columns: Vec<Element<'a, Message>> = (0..SLOT_COUNT)
        .filter_map(|slot| {
            let wheel = sync.wheel(slot)?;
            Some(wheel_column(
                slot,
                wheel,
                sync.overlay_value(slot),
                accent,
                on_scroll.clone(),
                on_input.clone(),
                on_paste.clone(),
            ))
        })
        .collect();

    row(columns).spacing(COLUMN_SPACING).into()
}

/// Render one wheel column with its band and overlay field
pub fn wheel_column<'a, Message: Clone + 'a>(
    slot: usize,
    wheel: &'a WheelState,
    overlay_value: Option<char>,
    accent: Option<bool>,
    on_scroll: impl Fn(usize, f32) -> Message + 'a,
    on_input: impl Fn(usize, String) -> Message + 'a,
    on_paste: impl Fn(usize, String) -> Message + 'a,
) -> Element<'a, Message> {
    let buffer = wheel.buffer();
    let geometry = buffer.geometry();
    let selected = buffer.selected_buffered_index(wheel.offset());

    let items: Vec<Element<'a, Message>> = buffer
        .items()
        .enumerate()
        .map(|(index, symbol)| {
            let color = if index == selected { TEXT_PRIMARY } else { TEXT_DIM };
            container(text(symbol.to_string()).size(SYMBOL_SIZE).color(color))
                .width(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fixed(geometry.item_height))
                .into()
        })
        .collect();

    let scroller = scrollable(column(items))
        .id(wheel_scroll_id(slot))
        .direction(Direction::Vertical(
            Scrollbar::new().width(0).scroller_width(0),
        ))
        .on_scroll(move |viewport| on_scroll(slot, viewport.absolute_offset().y))
        .width(Length::Fill)
        .height(Length::Fixed(geometry.window_height));

    let band_align = match geometry.anchor {
        SelectionAnchor::Center => alignment::Vertical::Center,
        SelectionAnchor::Top => alignment::Vertical::Top,
    };

    let band = container(
        container(Space::new().width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fixed(geometry.item_height))
            .style(move |_theme: &Theme| band_style(accent)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(geometry.window_height))
    .align_y(band_align);

    let value = overlay_value.map(String::from).unwrap_or_default();
    let overlay = text_input("", &value)
        .id(field_id(FieldRef::overlay(slot)))
        .on_input(move |text| on_input(slot, text))
        .on_paste(move |text| on_paste(slot, text))
        .size(SYMBOL_SIZE)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .style(overlay_input_style);

    let overlay_layer = container(overlay)
        .width(Length::Fill)
        .height(Length::Fixed(geometry.window_height))
        .align_y(band_align);

    container(stack![scroller, band, overlay_layer])
        .width(Length::Fixed(COLUMN_WIDTH))
        .height(Length::Fixed(geometry.window_height))
        .style(column_style)
        .into()
}

fn column_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BG_MEDIUM)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

fn band_style(accent: Option<bool>) -> container::Style {
    let color = match accent {
        Some(_) => accent_border(accent),
        None => ACCENT_COLOR,
    };
    container::Style {
        background: Some(Background::Color(Color { a: 0.12, ..color })),
        border: Border {
            color,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

/// The overlay only shows a caret and selection; the wheel draws the symbol
fn overlay_input_style(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let focused = matches!(status, text_input::Status::Focused { .. });
    text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border {
            color: if focused { ACCENT_COLOR } else { Color::TRANSPARENT },
            width: if focused { 2.0 } else { 0.0 },
            radius: 4.0.into(),
        },
        icon: Color::TRANSPARENT,
        placeholder: Color::TRANSPARENT,
        value: Color::TRANSPARENT,
        selection: Color { a: 0.3, ..ACCENT_COLOR },
    }
}
