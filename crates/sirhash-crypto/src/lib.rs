// SirHash Crypto - SHA-256 computed from first principles

pub mod batch;
pub mod compress;
pub mod constants;
pub mod error;
pub mod hash;
pub mod input;
pub mod pad;
pub mod schedule;
pub mod types;

pub use batch::hash_all;
pub use compress::compress;
pub use constants::{BLOCK_LEN, DIGEST_LEN, H, K};
pub use error::{HashError, Result};
pub use hash::{digest, hash, sha256_hex};
pub use input::{bytes_from_hex, bytes_from_json};
pub use pad::pad;
pub use schedule::{block_words, expand};
pub use types::{ArtifactInfo, Digest, DigestReport, HashRef};
