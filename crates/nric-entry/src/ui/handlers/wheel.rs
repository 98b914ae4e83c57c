//! Wheel scroll, settle and suppression timers

use iced::Task;

use nric_core::timer::TimerToken;

use crate::ui::app::EntryApp;
use crate::ui::message::Message;

pub fn handle_scrolled(app: &mut EntryApp, slot: usize, offset: f32) -> Task<Message> {
    let effects = app.controller.wheel_scrolled(slot, offset);
    app.run_effects(effects)
}

pub fn handle_settled(app: &mut EntryApp, slot: usize, token: TimerToken) -> Task<Message> {
    let effects = app.controller.wheel_settled(slot, token);
    app.run_effects(effects)
}

pub fn handle_suppression_elapsed(
    app: &mut EntryApp,
    slot: usize,
    token: TimerToken,
) -> Task<Message> {
    app.controller.suppression_elapsed(slot, token);
    Task::none()
}
