//! Barcode artifact references
//!
//! A valid response may carry either an inline `data:` URI with base64 image
//! bytes, or a URL (absolute or relative to the endpoint) to fetch them from.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::error::{ValidationError, ValidationResult};

/// Where the image bytes of a barcode come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarcodeRef {
    /// Bytes decoded from a data URI
    Inline { mime: String, bytes: Vec<u8> },
    /// Absolute URL to fetch
    Remote(String),
}

impl BarcodeRef {
    /// Interpret a reference string, resolving relative URLs against `endpoint`
    pub fn parse(reference: &str, endpoint: &str) -> ValidationResult<Self> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(ValidationError::Barcode("empty reference".to_string()));
        }

        match reference.strip_prefix("data:") {
            Some(data) => decode_data_uri(data),
            None => Ok(BarcodeRef::Remote(resolve_url(endpoint, reference))),
        }
    }
}

fn decode_data_uri(data: &str) -> ValidationResult<BarcodeRef> {
    let (header, payload) = data
        .split_once(',')
        .ok_or_else(|| ValidationError::Barcode("data URI without payload".to_string()))?;

    let mime = match header.strip_suffix(";base64") {
        Some(mime) => mime,
        None => {
            return Err(ValidationError::Barcode(format!(
                "unsupported data URI encoding: {}",
                header
            )))
        }
    };

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| ValidationError::Barcode(e.to_string()))?;

    Ok(BarcodeRef::Inline {
        mime: mime.to_string(),
        bytes,
    })
}

/// Resolve `reference` against the endpoint URL
///
/// Absolute URLs pass through; `/path` is joined to the endpoint origin;
/// anything else is joined to the endpoint's directory.
pub fn resolve_url(endpoint: &str, reference: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return reference.to_string();
    }

    let origin_end = endpoint
        .find("://")
        .map(|scheme| {
            let host_start = scheme + 3;
            endpoint[host_start..]
                .find('/')
                .map(|slash| host_start + slash)
                .unwrap_or(endpoint.len())
        })
        .unwrap_or(0);

    if reference.starts_with('/') {
        format!("{}{}", &endpoint[..origin_end], reference)
    } else {
        let path = &endpoint[origin_end..];
        let dir_end = origin_end + path.rfind('/').map(|i| i + 1).unwrap_or(0);
        if dir_end == origin_end {
            format!("{}/{}", &endpoint[..origin_end], reference)
        } else {
            format!("{}{}", &endpoint[..dir_end], reference)
        }
    }
}
