//! Canonical hashing with domain separation.
//!
//! Algorithm: SHA-256 over `domain || data`. Every domain prefix is
//! null-terminated so that no prefix is a prefix of another.

use sha2::{Digest, Sha256};

/// Domain prefix for `BridgeState` identity fingerprints.
pub const DOMAIN_BRIDGE_STATE: &[u8] = b"LANTERN::BRIDGE_STATE::V1\0";

/// Domain prefix for serialized search graphs.
pub const DOMAIN_SEARCH_GRAPH: &[u8] = b"LANTERN::SEARCH_GRAPH::V1\0";

/// A SHA-256 content hash.
///
/// Displays as `"sha256:<hex_digest>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    digest: [u8; 32],
}

impl ContentHash {
    /// Always `"sha256"`.
    #[must_use]
    pub fn algorithm(&self) -> &'static str {
        "sha256"
    }

    /// Lowercase hex digest without the algorithm prefix.
    #[must_use]
    pub fn hex_digest(&self) -> String {
        hex::encode(self.digest)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.digest
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm(), self.hex_digest())
    }
}

/// Compute the canonical hash of `data` under `domain`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    ContentHash {
        digest: hasher.finalize().into(),
    }
}
