use serde::{Deserialize, Serialize};

/// Result of a pack call: the packed blob plus everything needed to unpack it.
///
/// All three fields are standard base64 strings. The struct is a plain value
/// bundle; construction does not validate. Validation happens in
/// [`unpack`](crate::packer::unpack) so that a bundle assembled from external
/// strings (a CLI, a JSON file) fails there with a categorized error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedResult {
    /// Base64-encoded ciphertext
    pub blob: String,
    /// Base64-encoded AES-256 key (32 bytes before encoding)
    pub key: String,
    /// Base64-encoded AES IV (16 bytes before encoding)
    pub iv: String,
}

impl PackedResult {
    pub fn new(blob: String, key: String, iv: String) -> Self {
        Self { blob, key, iv }
    }
}
