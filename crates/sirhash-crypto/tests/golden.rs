// Golden vector integration test
//
// Validates the hasher against the known-answer vectors in
// fixtures/fips180_vectors.json. Every vector must match exactly.

use serde::Deserialize;
use sirhash_crypto::{digest, hash, sha256_hex, Digest};
use std::fs;

#[derive(Deserialize)]
struct VectorFile {
    vectors: Vec<GoldenVector>,
}

#[derive(Deserialize)]
struct GoldenVector {
    description: String,
    message_utf8: String,
    repeat: usize,
    sha256_hex: String,
}

impl GoldenVector {
    fn message(&self) -> Vec<u8> {
        self.message_utf8.repeat(self.repeat).into_bytes()
    }
}

fn load_golden_vectors() -> Vec<GoldenVector> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../fixtures/fips180_vectors.json");
    let content = fs::read_to_string(path).expect("Failed to read fips180_vectors.json");
    let file: VectorFile =
        serde_json::from_str(&content).expect("Failed to parse fips180_vectors.json");
    file.vectors
}

#[test]
fn test_all_golden_vectors() {
    let vectors = load_golden_vectors();
    assert!(!vectors.is_empty());

    for vector in &vectors {
        let actual = sha256_hex(&vector.message()).expect("hashing should succeed");
        assert_eq!(actual, vector.sha256_hex, "mismatch for {}", vector.description);
    }
}

#[test]
fn test_golden_digests_parse_and_match_bytes() {
    for vector in load_golden_vectors() {
        let expected: Digest = vector.sha256_hex.parse().expect("valid fixture hex");
        let actual = digest(&vector.message()).expect("hashing should succeed");
        assert_eq!(&actual, expected.as_bytes(), "mismatch for {}", vector.description);
    }
}

#[test]
fn test_boundary_vectors_cover_block_edges() {
    let lengths: Vec<usize> = load_golden_vectors()
        .iter()
        .map(|v| v.message().len())
        .collect();
    for edge in [55, 56, 64] {
        assert!(lengths.contains(&edge), "no vector of length {}", edge);
    }
}

#[test]
fn test_hash_returns_32_bytes_for_every_vector() {
    for vector in load_golden_vectors() {
        let d = hash(&vector.message()).expect("hashing should succeed");
        assert_eq!(d.as_bytes().len(), 32);
        assert_eq!(d.to_hex().len(), 64);
    }
}
