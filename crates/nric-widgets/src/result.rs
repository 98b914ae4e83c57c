//! Result panel: status line and barcode image

use iced::widget::{container, image, text};
use iced::{ContentFit, Element, Length};

use nric_core::validation::{StatusLine, Tone};

use crate::theme::{BARCODE_MAX_WIDTH, INVALID_COLOR, TEXT_SECONDARY, VALID_COLOR};

/// Status message coloured by its tone; empty space when there is none
pub fn status_line<'a, Message: 'a>(status: Option<&'a StatusLine>) -> Element<'a, Message> {
    let Some(status) = status else {
        return text("").size(14).into();
    };

    let color = match status.tone {
        Tone::Valid => VALID_COLOR,
        Tone::Invalid => INVALID_COLOR,
        Tone::Neutral => TEXT_SECONDARY,
    };

    text(status.text.as_str())
        .size(14)
        .color(color)
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .into()
}

/// Barcode image shown in place of the input surface
///
/// While the image is still being fetched a short note is shown instead.
pub fn barcode_panel<'a, Message: 'a>(handle: Option<&image::Handle>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(BARCODE_MAX_WIDTH))
            .content_fit(ContentFit::Contain)
            .into(),
        None => text("Loading barcode...").size(14).color(TEXT_SECONDARY).into(),
    };

    container(content)
        .padding(12)
        .center_x(Length::Fill)
        .into()
}
