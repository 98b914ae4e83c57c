//! Global keys: Backspace moves back across empty fields, Enter submits

use iced::advanced::widget::operation::focusable;
use iced::event::{self, Event};
use iced::keyboard::{self, key::Named, Key};
use iced::{window, Subscription, Task};

use nric_core::FieldRef;
use nric_widgets::field_for_id;

use crate::ui::app::EntryApp;
use crate::ui::handlers::validation;
use crate::ui::message::Message;

/// Backspace and Enter presses, including those a focused text field captured
pub fn subscription() -> Subscription<Message> {
    event::listen_with(key_filter)
}

fn key_filter(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: key @ Key::Named(Named::Backspace | Named::Enter),
            ..
        }) => Some(Message::KeyPressed(key)),
        _ => None,
    }
}

pub fn handle(app: &mut EntryApp, key: Key) -> Task<Message> {
    match key {
        // Ask the widget tree which field has focus; clicks never reach the core
        Key::Named(Named::Backspace) => iced::advanced::widget::operate(focusable::find_focused())
            .map(|id| Message::BackspaceIn(field_for_id(&id))),
        Key::Named(Named::Enter) => validation::handle_submit_pressed(app),
        _ => Task::none(),
    }
}

/// Backspace in `field`; nothing happens when no entry field is focused
pub fn handle_backspace(app: &mut EntryApp, field: Option<FieldRef>) -> Task<Message> {
    match field {
        Some(field) => {
            let effects = app.controller.backspace(field);
            app.run_effects(effects)
        }
        None => {
            log::debug!("handle_backspace: No entry field focused");
            Task::none()
        }
    }
}
