// SHA-256 accumulator: pad, then schedule + compress each block in order

use crate::compress::compress;
use crate::constants::{BLOCK_LEN, DIGEST_LEN, H, K};
use crate::error::{HashError, Result};
use crate::pad::pad;
use crate::schedule::{block_words, expand};
use crate::types::Digest;

/// Computes the SHA-256 digest of `message`.
///
/// The state starts at `H` and each 64-byte block of the padded message is
/// chained onto the state left by the previous block.
///
/// # Errors
/// * `HashError::MessageTooLarge` - if the message bit-length exceeds 64 bits
pub fn hash(message: &[u8]) -> Result<Digest> {
    let padded = pad(message)?;
    tracing::debug!(
        message_len = message.len(),
        padded_len = padded.len(),
        blocks = padded.len() / BLOCK_LEN,
        "hashing message"
    );

    let mut state = H;
    for (index, block) in padded.chunks_exact(BLOCK_LEN).enumerate() {
        tracing::trace!(block = index, "compressing block");
        let block: &[u8; BLOCK_LEN] = block.try_into().map_err(|_| {
            HashError::InvalidInput(format!("block {} is not {} bytes", index, BLOCK_LEN))
        })?;
        let schedule = expand(&block_words(block));
        state = compress(&state, &schedule, &K);
    }

    let mut out = [0u8; DIGEST_LEN];
    for (bytes, word) in out.chunks_exact_mut(4).zip(state) {
        bytes.copy_from_slice(&word.to_be_bytes());
    }
    Ok(Digest::from_bytes(out))
}

/// Computes the SHA-256 digest of `message` as raw bytes.
pub fn digest(message: &[u8]) -> Result<[u8; DIGEST_LEN]> {
    hash(message).map(Digest::into_bytes)
}

/// Computes the SHA-256 hash of the input bytes and returns it as a lowercase hex string.
pub fn sha256_hex(bytes: &[u8]) -> Result<String> {
    hash(bytes).map(|d| d.to_hex())
}
