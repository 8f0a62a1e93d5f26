//! Admissibility policies: boolean filters that keep the frontier small.
//!
//! These never reorder the frontier. A rejected candidate is gone for the
//! rest of the search, so tight caps can make a reachable goal unreachable.
//! That trade is accepted: caps bound the explored state space.

use craftplan_kernel::carrier::inventory::InventoryStateV1;
use craftplan_kernel::carrier::vocabulary::{ItemId, ItemVocabularyV1};
use craftplan_kernel::error::ConfigError;

use crate::contract::Admissibility;

/// Admits every candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdmitAll;

impl Admissibility for AdmitAll {
    fn admissible(&self, _candidate: &InventoryStateV1, _source: &InventoryStateV1) -> bool {
        true
    }
}

/// A name-keyed cap, before resolution against a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapRule {
    /// `item` may never exceed `max`.
    Max { item: String, max: u32 },
    /// While `absent` has count 0, `item` may not exceed `max`.
    MaxWhileAbsent {
        item: String,
        absent: String,
        max: u32,
    },
}

impl CapRule {
    /// Shorthand for [`CapRule::Max`].
    #[must_use]
    pub fn max(item: impl Into<String>, max: u32) -> Self {
        Self::Max {
            item: item.into(),
            max,
        }
    }

    /// Shorthand for [`CapRule::MaxWhileAbsent`].
    #[must_use]
    pub fn max_while_absent(item: impl Into<String>, absent: impl Into<String>, max: u32) -> Self {
        Self::MaxWhileAbsent {
            item: item.into(),
            absent: absent.into(),
            max,
        }
    }

    /// Items this cap mentions.
    #[must_use]
    pub fn items(&self) -> Vec<&str> {
        match self {
            Self::Max { item, .. } => vec![item.as_str()],
            Self::MaxWhileAbsent { item, absent, .. } => vec![item.as_str(), absent.as_str()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ConditionalCap {
    item: ItemId,
    absent: ItemId,
    max: u32,
}

/// Count caps compiled against a vocabulary.
///
/// A candidate is admissible iff every unconditional ceiling holds and every
/// conditional ceiling whose trigger item is absent holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapPolicyV1 {
    ceilings: Vec<(ItemId, u32)>,
    conditional: Vec<ConditionalCap>,
}

impl CapPolicyV1 {
    /// Resolve `rules` against `vocab`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownItem`] if a cap names an item outside
    /// `vocab`.
    pub fn compile(vocab: &ItemVocabularyV1, rules: &[CapRule]) -> Result<Self, ConfigError> {
        let mut policy = Self::default();
        for rule in rules {
            match rule {
                CapRule::Max { item, max } => {
                    let item = vocab.resolve(item, "cap policy")?;
                    policy.ceilings.push((item, *max));
                }
                CapRule::MaxWhileAbsent { item, absent, max } => {
                    policy.conditional.push(ConditionalCap {
                        item: vocab.resolve(item, "cap policy")?,
                        absent: vocab.resolve(absent, "cap policy")?,
                        max: *max,
                    });
                }
            }
        }
        Ok(policy)
    }

    /// Number of compiled caps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ceilings.len() + self.conditional.len()
    }

    /// Whether no caps are configured (every candidate is admissible).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Admissibility for CapPolicyV1 {
    fn admissible(&self, candidate: &InventoryStateV1, _source: &InventoryStateV1) -> bool {
        self.ceilings
            .iter()
            .all(|&(item, max)| candidate.get(item) <= max)
            && self
                .conditional
                .iter()
                .all(|cap| candidate.get(cap.absent) > 0 || candidate.get(cap.item) <= cap.max)
    }
}
