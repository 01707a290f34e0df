use crate::error::{BlobpackError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encode bytes as standard base64 text
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard base64 text back to bytes
///
/// `field` names the offending input in the error so the caller can tell a
/// malformed blob from a malformed key or IV.
pub fn decode(text: &str, field: &'static str) -> Result<Vec<u8>> {
    STANDARD
        .decode(text)
        .map_err(|source| BlobpackError::Encoding { field, source })
}
