//! Message types for the entry application

use iced::keyboard;

use nric_core::timer::TimerToken;
use nric_core::validation::{RequestId, ValidationResponse, ValidationResult};
use nric_core::{FieldRef, Mode};

#[derive(Debug, Clone)]
pub enum Message {
    // Wheels
    /// Scroll position of a wheel column changed (absolute y offset)
    WheelScrolled(usize, f32),
    /// Settle timer of a column expired
    WheelSettled(usize, TimerToken),
    /// Echo-suppression window of a column expired
    SuppressionElapsed(usize, TimerToken),

    // Fields
    OverlayInput(usize, String),
    ManualInput(usize, String),
    FieldPasted(FieldRef, String),
    /// Backspace or Enter, seen even when a text field captured it
    KeyPressed(keyboard::Key),
    /// Backspace resolved against the field holding keyboard focus, `None`
    /// when focus is outside the entry fields
    BackspaceIn(Option<FieldRef>),

    // Mode tabs
    SelectMode(Mode),

    // Validation
    SubmitPressed,
    ValidationFinished(RequestId, ValidationResult<ValidationResponse>),
    BarcodeFetched(RequestId, ValidationResult<Vec<u8>>),
}
