use crate::bundle::PackedResult;
use crate::error::Result;
use crate::packer::pack;
use std::path::{Path, PathBuf};

/// Options for the pack command
#[derive(Debug, Clone, Default)]
pub struct PackOptions {
    /// Also write the full result (blob + key + IV) as JSON to this path
    pub bundle: Option<PathBuf>,
}

/// Pack an input file
///
/// Writes the blob to `output` if given; the caller decides what to do with
/// the returned result otherwise (the binary prints the blob to stdout and
/// the key/IV to stderr, so the blob can be redirected cleanly).
pub fn pack_file(
    input_path: &Path,
    output_path: Option<&Path>,
    options: &PackOptions,
) -> Result<PackedResult> {
    let input_data = std::fs::read(input_path)?;
    let packed = pack(&input_data)?;

    if let Some(path) = output_path {
        std::fs::write(path, packed.blob.as_bytes())?;
    }

    if let Some(path) = &options.bundle {
        let json = serde_json::to_string_pretty(&packed)?;
        std::fs::write(path, json)?;
    }

    Ok(packed)
}
