use crate::bundle::PackedResult;
use crate::error::Result;
use crate::packer::unpack;
use std::path::Path;

/// Options for the unpack command
#[derive(Debug, Clone)]
pub struct UnpackOptions {
    /// Base64-encoded AES key, as printed by pack
    pub key: String,
    /// Base64-encoded AES IV, as printed by pack
    pub iv: String,
}

/// Unpack a blob file using externally supplied key material
///
/// The input file holds the blob as base64 text; surrounding whitespace
/// (an editor-added trailing newline) is tolerated. Writes the recovered
/// bytes to `output` if given, and returns them either way.
pub fn unpack_file(
    input_path: &Path,
    output_path: Option<&Path>,
    options: &UnpackOptions,
) -> Result<Vec<u8>> {
    let blob = std::fs::read_to_string(input_path)?;
    let packed = PackedResult::new(
        blob.trim().to_string(),
        options.key.clone(),
        options.iv.clone(),
    );

    let data = unpack(&packed)?;

    if let Some(path) = output_path {
        std::fs::write(path, &data)?;
    }

    Ok(data)
}

/// Unpack from a JSON bundle written by `pack --bundle`
pub fn unpack_bundle(bundle_path: &Path, output_path: Option<&Path>) -> Result<Vec<u8>> {
    let json = std::fs::read_to_string(bundle_path)?;
    let packed: PackedResult = serde_json::from_str(&json)?;

    let data = unpack(&packed)?;

    if let Some(path) = output_path {
        std::fs::write(path, &data)?;
    }

    Ok(data)
}
