// Resolution of command-line INPUT arguments into message bytes
//
// Each argument is literal text, a hex string, or a file path depending on
// the flag given to `sirhash hash`.

use anyhow::{Context, Result};
use sirhash_crypto::HashError;
use std::path::Path;

/// How INPUT arguments are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// UTF-8 bytes of the argument itself
    Text,
    /// Hex-decoded bytes of the argument
    Hex,
    /// Contents of the file the argument names
    File,
    /// Argument parsed as JSON: a string or an array of byte values
    Json,
}

/// A message ready to hash, with the label shown next to its digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub label: String,
    pub bytes: Vec<u8>,
}

/// Reads one INPUT argument according to `kind`.
pub fn load(arg: &str, kind: SourceKind) -> Result<Message> {
    let bytes = match kind {
        SourceKind::Text => arg.as_bytes().to_vec(),
        SourceKind::Hex => sirhash_crypto::bytes_from_hex(arg)?,
        SourceKind::File => read_file(Path::new(arg))?,
        SourceKind::Json => json_bytes(arg)?,
    };

    let label = match kind {
        SourceKind::File => Path::new(arg)
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| arg.to_string()),
        _ => arg.to_string(),
    };

    Ok(Message { label, bytes })
}

/// Reads every INPUT argument, stopping at the first failure.
pub fn load_all(args: &[String], kind: SourceKind) -> Result<Vec<Message>> {
    args.iter().map(|arg| load(arg, kind)).collect()
}

fn json_bytes(arg: &str) -> Result<Vec<u8>> {
    let value: serde_json::Value = serde_json::from_str(arg)
        .map_err(|e| HashError::InvalidInput(format!("'{}' is not JSON: {}", arg, e)))?;
    Ok(sirhash_crypto::bytes_from_json(&value)?)
}

pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read '{}'", path.display()))
}
