use crate::error::{BlobpackError, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Compress data as a gzip stream
///
/// The encoder is fully finished before the output is returned, so the
/// trailing gzip footer (CRC32 + size) is always present. Handing a
/// partially flushed stream to the cipher stage would corrupt decompression
/// on the way back.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| BlobpackError::CompressionError(format!("gzip: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| BlobpackError::CompressionError(format!("gzip: {}", e)))
}

/// Decompress a gzip stream, reading until end-of-stream
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut output = Vec::new();
    decoder
        .read_to_end(&mut output)
        .map_err(|e| BlobpackError::DecompressionError(format!("gzip: {}", e)))?;
    Ok(output)
}
