//! Identifier validation
//!
//! - [`flow`]: Collecting / Pending / Result state machine with stale-response guard
//! - [`client`]: the [`Validator`] seam and its HTTP implementation
//! - [`wire`]: request/response JSON bodies
//! - [`barcode`]: data-URI and URL barcode references

pub mod barcode;
pub mod client;
pub mod error;
pub mod flow;
pub mod wire;

pub use barcode::BarcodeRef;
pub use client::{HttpValidator, Validator};
pub use error::{LocalInputError, ValidationError, ValidationResult};
pub use flow::{
    Presentation, RequestId, StatusLine, Tone, ValidationFlow, Verdict, PENDING_LABEL,
    REPEAT_LABEL, SERVER_ERROR_MESSAGE, SUBMIT_LABEL,
};
pub use wire::{ValidationRequest, ValidationResponse};
