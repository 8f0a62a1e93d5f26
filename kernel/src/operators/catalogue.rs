//! `RuleCatalogueV1`: the compiled, ordered rule set for one problem.
//!
//! Built once from [`RuleDefinition`]s and read-only afterwards. The
//! catalogue captures its vocabulary, so the transition generator it hands
//! out needs no global state. Rule order is the order of the definitions and
//! is the order successors are yielded in.
//!
//! Content-addressed via canonical JSON, so reports can bind a plan to the
//! exact catalogue that produced it.

use std::collections::BTreeSet;

use crate::carrier::inventory::InventoryStateV1;
use crate::carrier::vocabulary::{ItemId, ItemVocabularyV1};
use crate::error::ConfigError;
use crate::operators::apply::Successors;
use crate::operators::rule::{CompiledRule, RuleDefinition};
use crate::proof::canon::{canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Compiled rule catalogue.
#[derive(Debug, Clone)]
pub struct RuleCatalogueV1 {
    vocab: ItemVocabularyV1,
    rules: Vec<CompiledRule>,
}

impl RuleCatalogueV1 {
    /// Compile every definition against `vocab`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateRule`] if two definitions share a
    /// name, or any error from [`CompiledRule::compile`].
    pub fn compile(
        vocab: &ItemVocabularyV1,
        definitions: &[RuleDefinition],
    ) -> Result<Self, ConfigError> {
        let mut seen = BTreeSet::new();
        let mut rules = Vec::with_capacity(definitions.len());
        for def in definitions {
            if !seen.insert(def.name.as_str()) {
                return Err(ConfigError::DuplicateRule {
                    name: def.name.clone(),
                });
            }
            rules.push(CompiledRule::compile(def, vocab)?);
        }
        Ok(Self {
            vocab: vocab.clone(),
            rules,
        })
    }

    /// Lazily enumerate every applicable rule on `state`, in catalogue order.
    ///
    /// # Panics
    ///
    /// Panics if `state` was built for a vocabulary of a different length.
    pub fn successors<'a>(&'a self, state: &'a InventoryStateV1) -> Successors<'a> {
        assert_eq!(
            state.len(),
            self.vocab.len(),
            "state does not belong to this catalogue's vocabulary"
        );
        Successors::new(&self.rules, state)
    }

    /// The vocabulary the rules were compiled against.
    #[must_use]
    pub fn vocabulary(&self) -> &ItemVocabularyV1 {
        &self.vocab
    }

    /// Rules in catalogue order.
    #[must_use]
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Look up a rule by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|r| r.name() == name)
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Produce canonical JSON bytes for content-addressing.
    ///
    /// Format: `{"items":[..],"rules":[{"consumes":{..},"cost":"n","name":..,
    /// "produces":{..},"requires":[..]},..]}` with rules in catalogue order.
    /// Costs are decimal strings (see [`crate::operators::cost`]).
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, CanonError> {
        let rules: Vec<serde_json::Value> = self
            .rules
            .iter()
            .map(|rule| {
                let amounts = |pairs: &[(ItemId, u32)]| -> serde_json::Map<String, serde_json::Value> {
                    pairs
                        .iter()
                        .map(|&(item, amount)| (self.vocab.name(item).to_string(), amount.into()))
                        .collect()
                };
                serde_json::json!({
                    "consumes": amounts(rule.consumed()),
                    "cost": rule.cost().to_string(),
                    "name": rule.name(),
                    "produces": amounts(rule.produced()),
                    "requires": rule
                        .required()
                        .iter()
                        .map(|&item| self.vocab.name(item))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();

        let value = serde_json::json!({
            "items": self.vocab.names().collect::<Vec<_>>(),
            "rules": rules,
        });
        canonical_json_bytes(&value)
    }

    /// Content digest of [`Self::canonical_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::RuleCatalogue,
            &self.canonical_bytes()?,
        ))
    }
}
