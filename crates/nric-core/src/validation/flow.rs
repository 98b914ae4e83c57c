//! Validation flow state machine
//!
//! ```text
//! Collecting --submit--> Pending --response--> Result(valid | invalid)
//!      ^                    |                        |
//!      +---- mode switch ---+------ repeat/edit -----+
//! ```
//!
//! Every submission gets a fresh [`RequestId`]. A response is applied only if
//! its id matches the request currently pending, so answers that arrive after
//! a mode switch or a newer submission are dropped.

use super::error::{LocalInputError, ValidationError, ValidationResult};
use super::wire::ValidationResponse;

/// Label of the submit control while collecting input
pub const SUBMIT_LABEL: &str = "Validate";

/// Label of the submit control after a valid result
pub const REPEAT_LABEL: &str = "Repeat";

/// Label of the submit control while a request is in flight
pub const PENDING_LABEL: &str = "Validating...";

/// Message shown for transport or decoding failures
pub const SERVER_ERROR_MESSAGE: &str = "Server error occurred.";

/// Identifies one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

/// Outcome of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub message: String,
    /// Barcode reference, only kept for valid outcomes
    pub barcode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    Collecting,
    Pending { request: RequestId },
    Result { request: RequestId, verdict: Verdict },
}

/// Tone of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Valid,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: Tone,
}

#[derive(Debug, Clone)]
pub struct ValidationFlow {
    presentation: Presentation,
    status: Option<StatusLine>,
    next_request: u64,
}

impl Default for ValidationFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationFlow {
    pub fn new() -> Self {
        Self {
            presentation: Presentation::Collecting,
            status: None,
            next_request: 0,
        }
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.presentation, Presentation::Pending { .. })
    }

    /// Valid verdict currently shown, if any
    pub fn valid_verdict(&self) -> Option<(RequestId, &Verdict)> {
        match &self.presentation {
            Presentation::Result { request, verdict } if verdict.valid => Some((*request, verdict)),
            _ => None,
        }
    }

    /// Text of the submit control
    pub fn submit_label(&self) -> &'static str {
        match &self.presentation {
            Presentation::Pending { .. } => PENDING_LABEL,
            Presentation::Result { verdict, .. } if verdict.valid => REPEAT_LABEL,
            _ => SUBMIT_LABEL,
        }
    }

    /// Whether the submit control accepts presses
    pub fn submit_enabled(&self) -> bool {
        !self.is_pending()
    }

    /// Whether the input surface is replaced by a barcode image
    pub fn shows_artifact(&self) -> bool {
        self.valid_verdict()
            .is_some_and(|(_, verdict)| verdict.barcode.is_some())
    }

    /// Per-field accent after a result: `Some(true)` valid, `Some(false)` invalid
    pub fn field_accent(&self) -> Option<bool> {
        match &self.presentation {
            Presentation::Result { verdict, .. } => Some(verdict.valid),
            _ => None,
        }
    }

    /// Start a submission for a complete identifier
    ///
    /// Returns `None` while another request is pending.
    pub fn begin(&mut self) -> Option<RequestId> {
        if self.is_pending() {
            log::debug!("begin: Submission already pending, ignoring");
            return None;
        }

        self.next_request = self.next_request.wrapping_add(1);
        let request = RequestId(self.next_request);
        self.presentation = Presentation::Pending { request };
        self.status = None;
        Some(request)
    }

    /// Show a local input problem without contacting the endpoint
    pub fn reject_locally(&mut self, error: &LocalInputError) {
        if self.is_pending() {
            return;
        }
        log::debug!("reject_locally: {}", error);
        self.presentation = Presentation::Collecting;
        self.status = Some(StatusLine {
            text: error.to_string(),
            tone: Tone::Invalid,
        });
    }

    /// Apply the answer for `request`
    ///
    /// Returns the new verdict, or `None` when the answer is stale.
    pub fn complete(
        &mut self,
        request: RequestId,
        result: ValidationResult<ValidationResponse>,
    ) -> Option<&Verdict> {
        if self.presentation != (Presentation::Pending { request }) {
            log::debug!("complete: Dropping stale response for {:?}", request);
            return None;
        }

        let verdict = match result {
            Ok(response) => Verdict {
                valid: response.valid,
                message: response.display_message(),
                barcode: if response.valid { response.barcode } else { None },
            },
            Err(error) => {
                log::warn!("complete: Validation request failed: {}", error);
                Verdict {
                    valid: false,
                    message: SERVER_ERROR_MESSAGE.to_string(),
                    barcode: None,
                }
            }
        };

        self.status = Some(StatusLine {
            text: verdict.message.clone(),
            tone: if verdict.valid { Tone::Valid } else { Tone::Invalid },
        });
        self.presentation = Presentation::Result { request, verdict };

        match &self.presentation {
            Presentation::Result { verdict, .. } => Some(verdict),
            _ => None,
        }
    }

    /// Drop the barcode of the current valid verdict, keeping its message
    pub fn discard_artifact(&mut self, request: RequestId, error: &ValidationError) {
        if let Presentation::Result {
            request: current,
            verdict,
        } = &mut self.presentation
        {
            if *current == request && verdict.barcode.is_some() {
                log::warn!("discard_artifact: {}", error);
                verdict.barcode = None;
            }
        }
    }

    /// Leave a valid result and start a new entry
    pub fn repeat(&mut self) -> bool {
        if self.valid_verdict().is_none() {
            return false;
        }
        self.presentation = Presentation::Collecting;
        self.status = None;
        true
    }

    /// An input was edited after a result; the field accents no longer apply
    pub fn touch(&mut self) {
        if matches!(self.presentation, Presentation::Result { .. }) {
            self.presentation = Presentation::Collecting;
        }
    }

    /// Back to a clean Collecting state, abandoning any pending request
    pub fn reset(&mut self) {
        if let Presentation::Pending { request } = self.presentation {
            log::debug!("reset: Abandoning pending request {:?}", request);
        }
        self.presentation = Presentation::Collecting;
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(valid: bool, message: &str, barcode: Option<&str>) -> ValidationResponse {
        ValidationResponse {
            valid,
            message: message.to_string(),
            barcode: barcode.map(str::to_string),
            expected: None,
        }
    }

    #[test]
    fn test_initial_state() {
        let flow = ValidationFlow::new();
        assert_eq!(flow.presentation(), &Presentation::Collecting);
        assert_eq!(flow.submit_label(), SUBMIT_LABEL);
        assert!(flow.submit_enabled());
        assert!(flow.status().is_none());
    }

    #[test]
    fn test_pending_blocks_second_submit() {
        let mut flow = ValidationFlow::new();
        let request = flow.begin().unwrap();
        assert_eq!(flow.submit_label(), PENDING_LABEL);
        assert!(!flow.submit_enabled());
        assert!(flow.begin().is_none());
        assert_eq!(flow.presentation(), &Presentation::Pending { request });
    }

    #[test]
    fn test_valid_with_barcode() {
        let mut flow = ValidationFlow::new();
        let request = flow.begin().unwrap();
        let verdict = flow
            .complete(request, Ok(response(true, "Valid NRIC", Some("data:image/png;base64,UE5H"))))
            .unwrap();
        assert!(verdict.valid);
        assert_eq!(flow.submit_label(), REPEAT_LABEL);
        assert!(flow.shows_artifact());
        assert_eq!(flow.field_accent(), Some(true));
        assert_eq!(flow.status().unwrap().tone, Tone::Valid);
    }

    #[test]
    fn test_valid_without_barcode_keeps_surface() {
        let mut flow = ValidationFlow::new();
        let request = flow.begin().unwrap();
        flow.complete(request, Ok(response(true, "Valid NRIC", None)));
        assert_eq!(flow.submit_label(), REPEAT_LABEL);
        assert!(!flow.shows_artifact());
    }

    #[test]
    fn test_invalid_stays_editable() {
        let mut flow = ValidationFlow::new();
        let request = flow.begin().unwrap();
        let mut answer = response(false, "Invalid NRIC checksum.", Some("ignored"));
        answer.expected = Some("D".to_string());
        flow.complete(request, Ok(answer));

        assert_eq!(flow.submit_label(), SUBMIT_LABEL);
        assert!(!flow.shows_artifact());
        assert_eq!(
            flow.status().unwrap().text,
            "Invalid NRIC checksum. Did you mean ends with D?"
        );
        assert!(flow.begin().is_some());
    }

    #[test]
    fn test_transport_failure_message() {
        let mut flow = ValidationFlow::new();
        let request = flow.begin().unwrap();
        flow.complete(request, Err(ValidationError::Transport("refused".to_string())));
        assert_eq!(flow.status().unwrap().text, SERVER_ERROR_MESSAGE);
        assert_eq!(flow.field_accent(), Some(false));
    }

    #[test]
    fn test_stale_response_dropped_after_reset() {
        let mut flow = ValidationFlow::new();
        let request = flow.begin().unwrap();
        flow.reset();
        assert!(flow
            .complete(request, Ok(response(true, "Valid NRIC", None)))
            .is_none());
        assert_eq!(flow.presentation(), &Presentation::Collecting);
        assert!(flow.status().is_none());
    }

    #[test]
    fn test_older_request_cannot_complete_newer() {
        let mut flow = ValidationFlow::new();
        let first = flow.begin().unwrap();
        flow.reset();
        let second = flow.begin().unwrap();
        assert!(flow.complete(first, Ok(response(true, "old", None))).is_none());
        assert!(flow.complete(second, Ok(response(false, "new", None))).is_some());
        assert_eq!(flow.status().unwrap().text, "new");
    }

    #[test]
    fn test_repeat_only_after_valid() {
        let mut flow = ValidationFlow::new();
        assert!(!flow.repeat());

        let request = flow.begin().unwrap();
        flow.complete(request, Ok(response(true, "Valid NRIC", None)));
        assert!(flow.repeat());
        assert_eq!(flow.presentation(), &Presentation::Collecting);
        assert!(flow.status().is_none());
    }

    #[test]
    fn test_local_rejection() {
        let mut flow = ValidationFlow::new();
        flow.reject_locally(&LocalInputError::incomplete(4));
        assert_eq!(flow.presentation(), &Presentation::Collecting);
        assert!(flow.status().unwrap().text.contains("4/9"));
    }

    #[test]
    fn test_discard_artifact_keeps_message() {
        let mut flow = ValidationFlow::new();
        let request = flow.begin().unwrap();
        flow.complete(request, Ok(response(true, "Valid NRIC", Some("/b.png"))));
        flow.discard_artifact(request, &ValidationError::Status(404));
        assert!(!flow.shows_artifact());
        assert_eq!(flow.submit_label(), REPEAT_LABEL);
        assert_eq!(flow.status().unwrap().text, "Valid NRIC");
    }

    #[test]
    fn test_touch_clears_accent() {
        let mut flow = ValidationFlow::new();
        let request = flow.begin().unwrap();
        flow.complete(request, Ok(response(false, "Invalid", None)));
        flow.touch();
        assert_eq!(flow.field_accent(), None);
        assert_eq!(flow.status().unwrap().text, "Invalid");
    }
}
