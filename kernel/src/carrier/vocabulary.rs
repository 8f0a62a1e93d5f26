//! `ItemVocabularyV1`: the fixed item list and its canonical ordering.
//!
//! Each identifier receives an [`ItemId`] equal to its position in the list
//! supplied at load time. The bijection is enforced at construction time:
//! duplicate or empty identifiers are rejected. Lookups by name happen only
//! during compilation, never while searching.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::ConfigError;

/// Index of an item in its vocabulary.
///
/// Ordered by vocabulary position, which is the canonical order of every
/// inventory built from that vocabulary.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u32);

impl ItemId {
    /// Position of the item in the vocabulary (and in every inventory).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

/// The fixed set of item identifiers for one problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemVocabularyV1 {
    names: Vec<String>,
    index: BTreeMap<String, ItemId>,
}

impl ItemVocabularyV1 {
    /// Build a vocabulary from identifiers in canonical order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyItem`] for an empty identifier,
    /// [`ConfigError::DuplicateItem`] when an identifier repeats, and
    /// [`ConfigError::VocabularyTooLarge`] past `u32::MAX` entries.
    pub fn new<I, S>(items: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        let mut index = BTreeMap::new();

        for (position, item) in items.into_iter().enumerate() {
            let name: String = item.into();
            if name.is_empty() {
                return Err(ConfigError::EmptyItem { position });
            }
            let id = u32::try_from(position).map_err(|_| ConfigError::VocabularyTooLarge {
                len: position + 1,
                max: u32::MAX as usize,
            })?;
            if index.insert(name.clone(), ItemId(id)).is_some() {
                return Err(ConfigError::DuplicateItem { item: name });
            }
            names.push(name);
        }

        Ok(Self { names, index })
    }

    /// Resolve an identifier, attributing failures to `context`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownItem`] if `item` is not in the vocabulary.
    pub fn resolve(&self, item: &str, context: &str) -> Result<ItemId, ConfigError> {
        self.get(item).ok_or_else(|| ConfigError::UnknownItem {
            item: item.to_string(),
            context: context.to_string(),
        })
    }

    /// Look up an identifier without producing an error.
    #[must_use]
    pub fn get(&self, item: &str) -> Option<ItemId> {
        self.index.get(item).copied()
    }

    /// Name of an item. Panics if `id` came from another, larger vocabulary.
    #[must_use]
    pub fn name(&self, id: ItemId) -> &str {
        &self.names[id.index()]
    }

    /// Identifiers in canonical order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Item ids in canonical order.
    // Construction guarantees every position fits in u32.
    #[allow(clippy::cast_possible_truncation)]
    pub fn ids(&self) -> impl ExactSizeIterator<Item = ItemId> {
        (0..self.names.len()).map(|i| ItemId(i as u32))
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the vocabulary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
