//! Effect execution
//!
//! The core returns [`Effects`]; this module turns each one into an iced
//! task: widget operations for scrolling and focus, sleeps for the settle and
//! suppression timers, and blocking HTTP calls on tokio's blocking pool.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use iced::widget::image;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Task;

use nric_core::validation::{RequestId, ValidationError, ValidationResult, Validator};
use nric_core::{Effect, Effects, FieldRef};
use nric_widgets::{field_id, wheel_scroll_id};

use crate::ui::app::EntryApp;
use crate::ui::message::Message;

impl EntryApp {
    /// Execute every effect of one core operation, in order
    pub(crate) fn run_effects(&mut self, effects: Effects) -> Task<Message> {
        if effects.is_empty() {
            return Task::none();
        }
        let tasks: Vec<Task<Message>> = effects
            .into_iter()
            .map(|effect| self.run_effect(effect))
            .collect();
        Task::batch(tasks)
    }

    fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScrollWheel {
                slot,
                offset,
                release,
            } => Task::batch([
                scroll_wheel(slot, offset),
                after(self.timing.suppress(), move || {
                    Message::SuppressionElapsed(slot, release)
                }),
            ]),
            Effect::Recenter { slot, offset } => {
                log::debug!("run_effect: Recentering wheel {} to {:.1}", slot, offset);
                scroll_wheel(slot, offset)
            }
            Effect::ArmSettle { slot, token } => {
                after(self.timing.settle(), move || Message::WheelSettled(slot, token))
            }
            Effect::Focus(field) => focus(field),
            Effect::Rejected(error) => {
                log::debug!("run_effect: Input rejected: {}", error);
                Task::none()
            }
            Effect::Submit { request, nric } => {
                self.barcode = None;
                let validator = Arc::clone(&self.validator);
                Task::perform(
                    blocking(move || validator.validate(&nric)),
                    move |result| Message::ValidationFinished(request, result),
                )
            }
            Effect::ShowBarcode { request, bytes } => {
                self.show_barcode(request, bytes);
                Task::none()
            }
            Effect::FetchBarcode { request, url } => {
                log::info!("run_effect: Fetching barcode from {}", url);
                let validator = Arc::clone(&self.validator);
                Task::perform(
                    blocking(move || validator.fetch_image(&url)),
                    move |result| Message::BarcodeFetched(request, result),
                )
            }
        }
    }

    /// Turn barcode bytes into an image handle if the result still wants them
    pub(crate) fn show_barcode(&mut self, request: RequestId, bytes: Vec<u8>) {
        if self.controller.barcode_ready(request) {
            log::info!("show_barcode: {} bytes for {:?}", bytes.len(), request);
            self.barcode = Some(image::Handle::from_bytes(bytes));
        } else {
            log::debug!("show_barcode: Dropping image for {:?}", request);
        }
    }
}

fn scroll_wheel(slot: usize, offset: f32) -> Task<Message> {
    iced::advanced::widget::operate(iced::advanced::widget::operation::scrollable::scroll_to(
        wheel_scroll_id(slot).into(),
        AbsoluteOffset { x: 0.0, y: offset }.into(),
    ))
}

fn focus(field: FieldRef) -> Task<Message> {
    iced::advanced::widget::operate(iced::advanced::widget::operation::focusable::focus(
        field_id(field).into(),
    ))
}

/// Deliver `message` once `delay` has passed
fn after(delay: Duration, message: impl FnOnce() -> Message + Send + 'static) -> Task<Message> {
    Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |_| message(),
    )
}

/// Run a blocking validator call off the UI thread
fn blocking<T, F>(call: F) -> impl Future<Output = ValidationResult<T>>
where
    T: Send + 'static,
    F: FnOnce() -> ValidationResult<T> + Send + 'static,
{
    async move {
        tokio::task::spawn_blocking(call)
            .await
            .unwrap_or_else(|e| {
                Err(ValidationError::Transport(format!(
                    "Request task failed: {}",
                    e
                )))
            })
    }
}
