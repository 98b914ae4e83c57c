//! Submit / repeat and validation responses

use iced::Task;

use nric_core::validation::{RequestId, ValidationResponse, ValidationResult};

use crate::ui::app::EntryApp;
use crate::ui::message::Message;

pub fn handle_submit_pressed(app: &mut EntryApp) -> Task<Message> {
    if !app.controller.submit_enabled() {
        log::debug!("handle_submit_pressed: Submit disabled, ignoring");
        return Task::none();
    }
    let repeating = app.controller.flow().valid_verdict().is_some();
    let effects = app.controller.press_submit();
    if repeating {
        app.barcode = None;
    }
    app.run_effects(effects)
}

pub fn handle_finished(
    app: &mut EntryApp,
    request: RequestId,
    result: ValidationResult<ValidationResponse>,
) -> Task<Message> {
    if let Err(error) = &result {
        log::warn!("handle_finished: {:?} failed: {}", request, error);
    }
    let effects = app.controller.validation_finished(request, result);
    app.run_effects(effects)
}

pub fn handle_barcode_fetched(
    app: &mut EntryApp,
    request: RequestId,
    result: ValidationResult<Vec<u8>>,
) -> Task<Message> {
    if let Err(error) = &result {
        log::warn!("handle_barcode_fetched: {:?} failed: {}", request, error);
    }
    if let Some(bytes) = app.controller.barcode_fetched(request, result) {
        app.show_barcode(request, bytes);
    }
    Task::none()
}
