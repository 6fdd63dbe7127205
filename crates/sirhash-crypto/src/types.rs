//! Value types produced by the hasher.
//!
//! `Digest` is the 32-byte output; `HashRef`, `ArtifactInfo` and
//! `DigestReport` describe a hashed input for JSON output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::DIGEST_LEN;
use crate::error::HashError;

/// Algorithm label used in `HashRef`.
pub const ALGO_SHA256: &str = "sha-256";

/// A finished 256-bit SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Renders the digest as 64 lowercase hex characters, most significant byte first.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s.trim(), &mut bytes).map_err(|e| {
            HashError::InvalidInput(format!("'{}' is not a 64-character hex digest: {}", s, e))
        })?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Reference to a hash of some content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashRef {
    /// Hash algorithm used, always "sha-256"
    pub algo: String,
    /// Hex-encoded hash value
    pub value: Digest,
}

impl HashRef {
    pub fn sha256(value: Digest) -> Self {
        Self {
            algo: ALGO_SHA256.to_string(),
            value,
        }
    }
}

/// Information about the hashed input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtifactInfo {
    /// Label of the input: a file name, or the literal text
    pub name: String,
    /// Size of the input in bytes
    pub size: u64,
}

/// JSON document describing one hashed input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DigestReport {
    pub hash: HashRef,
    pub artifact: ArtifactInfo,
}

impl DigestReport {
    pub fn new(name: String, size: u64, digest: Digest) -> Self {
        Self {
            hash: HashRef::sha256(digest),
            artifact: ArtifactInfo { name, size },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC_HEX: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn test_digest_hex_roundtrip_accepts_uppercase() {
        let lower: Digest = ABC_HEX.parse().unwrap();
        let upper: Digest = ABC_HEX.to_uppercase().parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(upper.to_string(), ABC_HEX);
        assert_eq!(lower.as_bytes()[0], 0xba);
        assert_eq!(lower.as_bytes()[31], 0xad);
    }

    #[test]
    fn test_digest_parse_rejects_bad_hex() {
        for bad in ["", "abc", &ABC_HEX[..62], "zz7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"] {
            let err = bad.parse::<Digest>().unwrap_err();
            assert!(matches!(err, HashError::InvalidInput(_)), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_report_serialization() {
        let digest: Digest = ABC_HEX.parse().unwrap();
        let report = DigestReport::new("abc".to_string(), 3, digest);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"algo\":\"sha-256\""));
        assert!(json.contains(&format!("\"value\":\"{}\"", ABC_HEX)));
        assert!(json.contains("\"size\":3"));
    }

    #[test]
    fn test_report_deserialization() {
        let json = format!(
            r#"{{
                "hash": {{ "algo": "sha-256", "value": "{}" }},
                "artifact": {{ "name": "abc", "size": 3 }}
            }}"#,
            ABC_HEX
        );

        let report: DigestReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.hash.algo, ALGO_SHA256);
        assert_eq!(report.hash.value.to_hex(), ABC_HEX);
        assert_eq!(report.artifact.name, "abc");
    }

    #[test]
    fn test_report_rejects_malformed_digest() {
        let json = r#"{"hash":{"algo":"sha-256","value":"nothex"},"artifact":{"name":"x","size":0}}"#;
        assert!(serde_json::from_str::<DigestReport>(json).is_err());
    }
}
