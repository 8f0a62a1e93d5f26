//! `InventoryStateV1`: immutable per-item counts in canonical order.
//!
//! # Layout
//!
//! A fixed-length array of `u32` counts, indexed by [`ItemId`]. Every state
//! built from one vocabulary has the same length, so two inventories with the
//! same counts compare and hash identically no matter how they were built.
//!
//! # Immutability
//!
//! There is no mutator. Rule effects build a new state from a copy of the
//! source counts; a state stored in a map or frontier is never touched again.

use std::fmt;

use crate::carrier::vocabulary::{ItemId, ItemVocabularyV1};
use crate::error::ConfigError;
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Immutable inventory snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InventoryStateV1 {
    counts: Box<[u32]>,
}

impl InventoryStateV1 {
    /// Wrap counts that are already in canonical vocabulary order.
    ///
    /// Outside the kernel, states come from [`Self::from_counts`],
    /// [`Self::empty`] or `compile_inventory`, which tie the length to a
    /// vocabulary.
    #[must_use]
    pub(crate) fn new(counts: Vec<u32>) -> Self {
        Self {
            counts: counts.into_boxed_slice(),
        }
    }

    /// An all-zero inventory for `vocab`.
    #[must_use]
    pub fn empty(vocab: &ItemVocabularyV1) -> Self {
        Self::new(vec![0; vocab.len()])
    }

    /// Wrap counts after checking their length against `vocab`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InventoryLength`] if the lengths differ.
    pub fn from_counts(vocab: &ItemVocabularyV1, counts: Vec<u32>) -> Result<Self, ConfigError> {
        if counts.len() != vocab.len() {
            return Err(ConfigError::InventoryLength {
                expected: vocab.len(),
                actual: counts.len(),
            });
        }
        Ok(Self::new(counts))
    }

    /// Count of one item. Panics if `item` is out of range for this state.
    #[must_use]
    pub fn get(&self, item: ItemId) -> u32 {
        self.counts[item.index()]
    }

    /// All counts in canonical order.
    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Number of item slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the state has no item slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Serialize counts to bytes (little-endian `u32` per slot).
    ///
    /// Used for fingerprinting; two states are equal iff their bytes are.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.counts.len() * 4);
        for count in self.counts.iter() {
            buf.extend_from_slice(&count.to_le_bytes());
        }
        buf
    }

    /// Content hash of [`Self::identity_bytes`] under the inventory domain.
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(HashDomain::InventoryState, &self.identity_bytes())
    }

    /// Non-zero counts paired with their item names, in canonical order.
    #[must_use]
    pub fn nonzero<'v>(&self, vocab: &'v ItemVocabularyV1) -> Vec<(&'v str, u32)> {
        vocab
            .ids()
            .zip(self.counts.iter())
            .filter(|(_, &count)| count > 0)
            .map(|(id, &count)| (vocab.name(id), count))
            .collect()
    }

    /// Render with item names, omitting zero counts.
    #[must_use]
    pub fn display<'a>(&'a self, vocab: &'a ItemVocabularyV1) -> InventoryDisplay<'a> {
        InventoryDisplay { state: self, vocab }
    }
}

/// `Display` adapter returned by [`InventoryStateV1::display`].
pub struct InventoryDisplay<'a> {
    state: &'a InventoryStateV1,
    vocab: &'a ItemVocabularyV1,
}

impl fmt::Display for InventoryDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, count)) in self.state.nonzero(self.vocab).into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {count}")?;
        }
        f.write_str("}")
    }
}
