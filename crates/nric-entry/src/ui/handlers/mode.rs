//! Wheel / Manual tab selection

use iced::Task;

use nric_core::Mode;

use crate::ui::app::EntryApp;
use crate::ui::message::Message;

pub fn handle_select(app: &mut EntryApp, mode: Mode) -> Task<Message> {
    if app.controller.mode() == mode {
        return Task::none();
    }
    app.barcode = None;
    let effects = app.controller.select_mode(mode);
    app.run_effects(effects)
}
