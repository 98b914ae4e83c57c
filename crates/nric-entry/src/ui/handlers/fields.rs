//! Overlay and manual field edits, including paste

use iced::Task;

use nric_core::FieldRef;

use crate::ui::app::EntryApp;
use crate::ui::message::Message;

pub fn handle_overlay_input(app: &mut EntryApp, slot: usize, text: String) -> Task<Message> {
    let effects = app.controller.overlay_input(slot, &text);
    app.run_effects(effects)
}

pub fn handle_manual_input(app: &mut EntryApp, slot: usize, text: String) -> Task<Message> {
    let effects = app.controller.manual_input(slot, &text);
    app.run_effects(effects)
}

pub fn handle_paste(app: &mut EntryApp, field: FieldRef, text: String) -> Task<Message> {
    log::debug!("handle_paste: {} chars into {:?}", text.chars().count(), field);
    let effects = app.controller.paste(field, &text);
    app.run_effects(effects)
}
