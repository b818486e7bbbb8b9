//! Content hashes with domain separation.
//!
//! Every digest is SHA-256 over `domain_prefix || payload`, rendered as
//! `"sha256:<lowercase hex>"`. Each prefix is null-terminated so no prefix is
//! a prefix of another.

use sha2::{Digest, Sha256};

/// Algorithm tag for every digest this crate produces.
pub const HASH_ALGORITHM: &str = "sha256";

/// Domain prefix for run report digests.
pub const DOMAIN_RUN_REPORT: &[u8] = b"WAYFIND::RUN_REPORT::V1\0";

/// Domain prefix for run configuration digests.
pub const DOMAIN_RUN_CONFIG: &[u8] = b"WAYFIND::RUN_CONFIG::V1\0";

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"`. The inner string always holds exactly one
/// `:` with non-empty text on both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` on a missing colon, an empty side, or more than one
    /// colon.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 || s[colon + 1..].contains(':') {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 of `domain || data`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let hex = hex::encode(hasher.finalize());
    ContentHash {
        colon: HASH_ALGORITHM.len(),
        full: format!("{HASH_ALGORITHM}:{hex}"),
    }
}
