use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlobpackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0} is empty")]
    EmptyField(&'static str),

    #[error("Encoding error in {field}: {source}")]
    Encoding {
        field: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    #[error("Invalid key length: {0} bytes. Must be 32")]
    InvalidKeyLength(usize),

    #[error("Invalid IV length: {0} bytes. Must be 16")]
    InvalidIvLength(usize),

    #[error("Cryptographic error: {0}")]
    CryptographicError(String),

    #[error("Compression error: {0}")]
    CompressionError(String),

    #[error("Decompression error: {0}")]
    DecompressionError(String),
}

pub type Result<T> = std::result::Result<T, BlobpackError>;
