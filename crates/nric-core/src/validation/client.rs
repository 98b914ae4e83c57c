//! Remote validation client
//!
//! The [`Validator`] trait is the seam between the entry flow and the network.
//! [`HttpValidator`] is the blocking ureq implementation; callers run it off
//! the UI thread.

use std::io::Read;
use std::time::Duration;

use super::error::{ValidationError, ValidationResult};
use super::wire::{ValidationRequest, ValidationResponse};

/// Upper bound for downloaded barcode images
const MAX_IMAGE_BYTES: u64 = 8 * 1024 * 1024;

/// Something that can check an identifier and fetch barcode images
pub trait Validator: Send + Sync {
    /// Submit a 9-character identifier for validation
    fn validate(&self, nric: &str) -> ValidationResult<ValidationResponse>;

    /// Download barcode image bytes from an absolute URL
    fn fetch_image(&self, url: &str) -> ValidationResult<Vec<u8>>;
}

/// Validator that POSTs JSON to an HTTP endpoint
pub struct HttpValidator {
    endpoint: String,
    agent: ureq::Agent,
}

impl HttpValidator {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            endpoint: endpoint.into(),
            agent,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Validator for HttpValidator {
    fn validate(&self, nric: &str) -> ValidationResult<ValidationResponse> {
        log::info!("validate: POST {} for {}", self.endpoint, nric);

        let body = serde_json::to_string(&ValidationRequest {
            nric: nric.to_string(),
        })
        .map_err(|e| ValidationError::Decode(e.to_string()))?;

        let response = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_string(&body)
            .map_err(map_ureq_error)?;

        let text = response
            .into_string()
            .map_err(|e| ValidationError::Transport(e.to_string()))?;

        let parsed: ValidationResponse =
            serde_json::from_str(&text).map_err(|e| ValidationError::Decode(e.to_string()))?;

        log::info!(
            "validate: {} -> valid={} barcode={}",
            nric,
            parsed.valid,
            parsed.barcode.is_some()
        );
        Ok(parsed)
    }

    fn fetch_image(&self, url: &str) -> ValidationResult<Vec<u8>> {
        log::info!("fetch_image: GET {}", url);

        let response = self.agent.get(url).call().map_err(map_ureq_error)?;

        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(MAX_IMAGE_BYTES)
            .read_to_end(&mut bytes)
            .map_err(|e| ValidationError::Transport(e.to_string()))?;

        if bytes.is_empty() {
            return Err(ValidationError::Barcode("empty image".to_string()));
        }
        Ok(bytes)
    }
}

fn map_ureq_error(error: ureq::Error) -> ValidationError {
    match error {
        ureq::Error::Status(code, _) => ValidationError::Status(code),
        ureq::Error::Transport(transport) => ValidationError::Transport(transport.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_endpoint_is_transport_error() {
        // Port 9 on localhost (discard) is closed on test machines
        let validator = HttpValidator::new("http://127.0.0.1:9/validate", Duration::from_secs(2));
        let err = validator.validate("S1234567D").unwrap_err();
        assert!(matches!(err, ValidationError::Transport(_)));
    }

    #[test]
    fn test_endpoint_accessor() {
        let validator = HttpValidator::new("http://host/validate", Duration::from_secs(1));
        assert_eq!(validator.endpoint(), "http://host/validate");
    }
}
