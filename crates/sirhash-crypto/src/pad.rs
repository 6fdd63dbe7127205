// Message padding (FIPS 180-4 section 5.1.1)

use crate::constants::{BLOCK_LEN, LENGTH_FIELD_LEN};
use crate::error::{HashError, Result};

/// Marker byte carrying the single `1` bit appended after the message.
const MARKER: u8 = 0x80;

/// Number of zero bytes to place between the marker and the length field.
///
/// This is `(55 - len) mod 64`, written so the subtraction cannot underflow.
/// Lengths with `len % 64` in `56..64` wrap into an extra block.
fn zero_fill_len(len: usize) -> usize {
    (BLOCK_LEN + 55 - len % BLOCK_LEN) % BLOCK_LEN
}

/// Bit-length of a `len`-byte message as it is written into the length field.
fn bit_len(len: usize) -> Result<u64> {
    u64::try_from(len)
        .ok()
        .and_then(|n| n.checked_mul(8))
        .ok_or(HashError::MessageTooLarge { len })
}

/// Pads a message into a whole number of 64-byte blocks.
///
/// Appends `0x80`, then zero bytes until the length is congruent to 56
/// modulo 64, then the original bit-length as a big-endian `u64`. The output
/// is never empty: an empty message pads to exactly one block.
///
/// # Errors
/// * `HashError::MessageTooLarge` - if `len * 8` overflows the 64-bit field
pub fn pad(message: &[u8]) -> Result<Vec<u8>> {
    let len = message.len();
    let bits = bit_len(len)?;

    let zeros = zero_fill_len(len);
    let mut padded = Vec::with_capacity(len + 1 + zeros + LENGTH_FIELD_LEN);
    padded.extend_from_slice(message);
    padded.push(MARKER);
    padded.resize(padded.len() + zeros, 0);
    padded.extend_from_slice(&bits.to_be_bytes());

    debug_assert_eq!(padded.len() % BLOCK_LEN, 0);
    Ok(padded)
}
