//! Manual entry form: one plain text field per slot

use iced::widget::{row, text_input};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

use nric_core::sync::Synchronizer;
use nric_core::{FieldRef, SlotKind, SLOT_COUNT};

use crate::ids::field_id;
use crate::theme::{
    accent_border, ACCENT_COLOR, BG_MEDIUM, COLUMN_SPACING, COLUMN_WIDTH, SYMBOL_SIZE,
    TEXT_DIM, TEXT_PRIMARY,
};

/// Render the nine manual fields
///
/// Empty fields show the slot's placeholder (`@`, `0`, `#`).
pub fn manual_row<'a, Message: Clone + 'a>(
    sync: &'a Synchronizer,
    accent: Option<bool>,
    on_input: impl Fn(usize, String) -> Message + Clone + 'a,
    on_paste: impl Fn(usize, String) -> Message + Clone + 'a,
) -> Element<'a, Message> {
    let fields: Vec<Element<'a, Message>> = (0..SLOT_COUNT)
        .map(|slot| {
            let value = sync.manual_value(slot).map(String::from).unwrap_or_default();
            let on_input = on_input.clone();
            let on_paste = on_paste.clone();

            text_input(SlotKind::of(slot).placeholder(), &value)
                .id(field_id(FieldRef::manual(slot)))
                .on_input(move |text| on_input(slot, text))
                .on_paste(move |text| on_paste(slot, text))
                .size(SYMBOL_SIZE)
                .padding(8)
                .align_x(alignment::Horizontal::Center)
                .width(Length::Fixed(COLUMN_WIDTH))
                .style(move |_theme: &Theme, status| manual_input_style(status, accent))
                .into()
        })
        .collect();

    row(fields).spacing(COLUMN_SPACING).into()
}

fn manual_input_style(status: text_input::Status, accent: Option<bool>) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused { .. } if accent.is_none() => ACCENT_COLOR,
        _ => accent_border(accent),
    };
    text_input::Style {
        background: Background::Color(BG_MEDIUM),
        border: Border {
            color: border_color,
            width: if accent.is_some() { 2.0 } else { 1.0 },
            radius: 4.0.into(),
        },
        icon: TEXT_DIM,
        placeholder: TEXT_DIM,
        value: TEXT_PRIMARY,
        selection: Color { a: 0.3, ..ACCENT_COLOR },
    }
}
