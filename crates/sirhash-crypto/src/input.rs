// Conversions from loosely typed boundary values into message bytes

use serde_json::Value;

use crate::error::{HashError, Result};

/// Interprets a JSON value as a message.
///
/// - a string is taken as its UTF-8 bytes
/// - an array of integers in `0..=255` is taken as raw bytes
///
/// Anything else is rejected rather than coerced. `sirhash hash --value`
/// feeds its arguments through here; embedding callers that receive
/// untyped payloads can do the same.
///
/// # Errors
/// * `HashError::InvalidInput` - for any other JSON type or an out-of-range element
pub fn bytes_from_json(value: &Value) -> Result<Vec<u8>> {
    match value {
        Value::String(s) => Ok(s.as_bytes().to_vec()),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_u64()
                    .and_then(|n| u8::try_from(n).ok())
                    .ok_or_else(|| {
                        HashError::InvalidInput(format!(
                            "element {} is not a byte (0..=255): {}",
                            i, item
                        ))
                    })
            })
            .collect(),
        other => Err(HashError::InvalidInput(format!(
            "expected a string or an array of bytes, got {}",
            json_type_name(other)
        ))),
    }
}

/// Decodes a hex string (either case, even length) into message bytes.
pub fn bytes_from_hex(s: &str) -> Result<Vec<u8>> {
    hex::decode(s.trim())
        .map_err(|e| HashError::InvalidInput(format!("invalid hex '{}': {}", s, e)))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
