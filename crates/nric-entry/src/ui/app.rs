//! Main iced application for NRIC entry
//!
//! Owns the core [`EntryController`], the validator used for remote checks and
//! the decoded barcode image. Every message is forwarded to a handler, and the
//! handlers execute the core's effects as iced tasks.

use std::sync::Arc;

use iced::widget::{column, container, image};
use iced::{Alignment, Background, Element, Length, Subscription, Task, Theme};

use nric_core::validation::{HttpValidator, Validator};
use nric_core::{EntryController, FieldRef, Mode};
use nric_widgets::theme::BG_DARK;
use nric_widgets::{
    barcode_panel, manual_row, mode_tabs, status_line, submit_button, wheel_row,
};

use crate::config::{EntryConfig, TimingConfig};
use crate::ui::handlers::{fields, keyboard, mode, validation, wheel};
use crate::ui::message::Message;

/// Application state
pub struct EntryApp {
    pub(crate) controller: EntryController,
    pub(crate) validator: Arc<dyn Validator>,
    pub(crate) timing: TimingConfig,
    /// Decoded barcode of the current valid result, once available
    pub(crate) barcode: Option<image::Handle>,
}

impl EntryApp {
    /// Create the application talking to the configured HTTP endpoint
    pub fn new(config: &EntryConfig) -> (Self, Task<Message>) {
        let validator =
            HttpValidator::new(config.endpoint.url.clone(), config.endpoint.timeout());
        Self::with_validator(config, Arc::new(validator))
    }

    /// Create the application with any validator implementation
    pub fn with_validator(
        config: &EntryConfig,
        validator: Arc<dyn Validator>,
    ) -> (Self, Task<Message>) {
        let mut controller = EntryController::new(config.to_settings());
        let boot = controller.boot();

        let mut app = Self {
            controller,
            validator,
            timing: config.timing.clone(),
            barcode: None,
        };
        let task = app.run_effects(boot);
        (app, task)
    }

    pub fn title(&self) -> String {
        String::from("NRIC Entry")
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::subscription()
    }

    pub fn controller(&self) -> &EntryController {
        &self.controller
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WheelScrolled(slot, offset) => wheel::handle_scrolled(self, slot, offset),
            Message::WheelSettled(slot, token) => wheel::handle_settled(self, slot, token),
            Message::SuppressionElapsed(slot, token) => {
                wheel::handle_suppression_elapsed(self, slot, token)
            }
            Message::OverlayInput(slot, text) => fields::handle_overlay_input(self, slot, text),
            Message::ManualInput(slot, text) => fields::handle_manual_input(self, slot, text),
            Message::FieldPasted(field, text) => fields::handle_paste(self, field, text),
            Message::KeyPressed(key) => keyboard::handle(self, key),
            Message::BackspaceIn(field) => keyboard::handle_backspace(self, field),
            Message::SelectMode(target) => mode::handle_select(self, target),
            Message::SubmitPressed => validation::handle_submit_pressed(self),
            Message::ValidationFinished(request, result) => {
                validation::handle_finished(self, request, result)
            }
            Message::BarcodeFetched(request, result) => {
                validation::handle_barcode_fetched(self, request, result)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let tabs = mode_tabs(self.controller.mode(), Message::SelectMode);

        let surface: Element<'_, Message> = if self.controller.flow().shows_artifact() {
            barcode_panel(self.barcode.as_ref())
        } else {
            self.view_inputs()
        };

        let submit = submit_button(
            self.controller.submit_label(),
            self.controller.submit_enabled(),
            Message::SubmitPressed,
        );

        let content = column![
            tabs,
            surface,
            status_line(self.controller.status()),
            submit,
        ]
        .spacing(20)
        .align_x(Alignment::Center);

        container(content)
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(BG_DARK)),
                ..Default::default()
            })
            .into()
    }

    /// Input surface of the active mode
    fn view_inputs(&self) -> Element<'_, Message> {
        let sync = self.controller.sync();
        let accent = self.controller.field_accent();
        match self.controller.mode() {
            Mode::Wheel => wheel_row(
                sync,
                accent,
                Message::WheelScrolled,
                Message::OverlayInput,
                |slot, text| Message::FieldPasted(FieldRef::overlay(slot), text),
            ),
            Mode::Manual => manual_row(
                sync,
                accent,
                Message::ManualInput,
                |slot, text| Message::FieldPasted(FieldRef::manual(slot), text),
            ),
        }
    }
}
