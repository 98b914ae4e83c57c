//! Mode tabs and the submit button

use iced::widget::{button, row, text};
use iced::{Element, Length, Theme};

use nric_core::Mode;

use crate::button_styles::{press_release_style, toggle_style, SUBMIT_BG};
use crate::theme::ACCENT_COLOR;

/// Wheel / Manual tab bar
pub fn mode_tabs<'a, Message: Clone + 'a>(
    active: Mode,
    on_select: impl Fn(Mode) -> Message + 'a,
) -> Element<'a, Message> {
    let tabs: Vec<Element<'a, Message>> = Mode::ALL
        .into_iter()
        .map(|mode| {
            let is_active = mode == active;
            button(text(mode.label()).size(14))
                .on_press(on_select(mode))
                .padding([6, 18])
                .style(move |_theme: &Theme, status| toggle_style(status, is_active, ACCENT_COLOR))
                .into()
        })
        .collect();

    row(tabs).spacing(4).into()
}

/// Submit / repeat button; disabled while a request is pending
pub fn submit_button<'a, Message: Clone + 'a>(
    label: &'a str,
    enabled: bool,
    on_press: Message,
) -> Element<'a, Message> {
    button(
        text(label)
            .size(16)
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center),
    )
    .on_press_maybe(enabled.then_some(on_press))
    .padding([8, 24])
    .width(Length::Fixed(180.0))
    .style(|_theme: &Theme, status| press_release_style(status, SUBMIT_BG))
    .into()
}
