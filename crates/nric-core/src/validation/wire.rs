//! JSON bodies exchanged with the validation endpoint
//!
//! Request: `{"nric": "S1234567D"}`
//!
//! Response: `{"valid": bool, "message": str, "barcode": str|null, "expected": str?}`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub nric: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub valid: bool,
    #[serde(default)]
    pub message: String,
    /// Data URI or URL of a barcode image, only for valid identifiers
    #[serde(default)]
    pub barcode: Option<String>,
    /// Suggested check letter for identifiers that failed the checksum
    #[serde(default)]
    pub expected: Option<String>,
}

impl ValidationResponse {
    /// Text shown to the user, with the correction hint appended when present
    pub fn display_message(&self) -> String {
        match self.expected.as_deref().map(str::trim) {
            Some(expected) if !self.valid && !expected.is_empty() => {
                format!("{} Did you mean ends with {}?", self.message, expected)
            }
            _ => self.message.clone(),
        }
    }
}
