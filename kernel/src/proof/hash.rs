//! Canonical hashing with domain separation.
//!
//! Algorithm: SHA-256 over `domain_prefix || data`. Every digest is rendered
//! as `"sha256:<hex>"`. Exactly one function, [`canonical_hash`], produces
//! digests; callers pick the domain through [`HashDomain`].

use std::fmt;

use sha2::{Digest, Sha256};

/// Typed domain separator for [`canonical_hash`].
///
/// Each variant maps to a unique, null-terminated byte prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// Inventory fingerprints.
    InventoryState,
    /// Canonical rule catalogue bytes.
    RuleCatalogue,
    /// Canonical plan bytes.
    Plan,
}

impl HashDomain {
    /// All domains in declaration order.
    pub const ALL: &'static [HashDomain] = &[Self::InventoryState, Self::RuleCatalogue, Self::Plan];

    /// The raw domain-separator bytes (null-terminated).
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::InventoryState => b"CRAFTPLAN::INVENTORY_STATE::V1\0",
            Self::RuleCatalogue => b"CRAFTPLAN::RULE_CATALOGUE::V1\0",
            Self::Plan => b"CRAFTPLAN::PLAN::V1\0",
        }
    }
}

/// A content-addressed digest, rendered as `"sha256:<hex>"`.
///
/// Only [`canonical_hash`] constructs one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
}

impl ContentHash {
    /// The full `"sha256:<hex>"` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 of `domain || data`, rendered as `"sha256:<hex>"`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let hex = hex::encode(hasher.finalize());
    ContentHash {
        full: format!("sha256:{hex}"),
    }
}
