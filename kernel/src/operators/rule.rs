//! Transition rules: declarative definitions and their compiled form.
//!
//! A [`RuleDefinition`] names items by string. [`CompiledRule::compile`]
//! resolves every name against the vocabulary once, so the precondition and
//! effect run on index-addressed arrays with no lookups or allocation beyond
//! the successor state itself.
//!
//! # Contract
//!
//! - Precondition: every consumed item has at least the consumed amount,
//!   every required item has a strictly positive count, and every produced
//!   amount fits in its slot. A rule that would push a count past `u32::MAX`
//!   is simply not applicable.
//! - Effect: copy, add produced amounts, subtract consumed amounts.
//! - The effect is only reachable through [`CompiledRule::apply`], which
//!   checks the precondition first.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::carrier::inventory::InventoryStateV1;
use crate::carrier::vocabulary::{ItemId, ItemVocabularyV1};
use crate::error::ConfigError;
use crate::operators::cost::Cost;

/// A rule as supplied by a loader, before name resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleDefinition {
    /// Rule name; reported as the action in plans.
    pub name: String,
    /// Items that must be present (count > 0) but are not consumed.
    pub requires: Vec<String>,
    /// Items removed by the rule.
    pub consumes: Vec<(String, u32)>,
    /// Items added by the rule.
    pub produces: Vec<(String, u32)>,
    /// Cost of one application. Must be positive and finite.
    pub cost: f64,
}

impl RuleDefinition {
    /// Start a definition with no requirements or deltas.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: impl Into<f64>) -> Self {
        Self {
            name: name.into(),
            requires: Vec::new(),
            consumes: Vec::new(),
            produces: Vec::new(),
            cost: cost.into(),
        }
    }

    /// Add a required item.
    #[must_use]
    pub fn requires(mut self, item: impl Into<String>) -> Self {
        self.requires.push(item.into());
        self
    }

    /// Add a consumed amount.
    #[must_use]
    pub fn consumes(mut self, item: impl Into<String>, amount: u32) -> Self {
        self.consumes.push((item.into(), amount));
        self
    }

    /// Add a produced amount.
    #[must_use]
    pub fn produces(mut self, item: impl Into<String>, amount: u32) -> Self {
        self.produces.push((item.into(), amount));
        self
    }
}

/// A rule with every item resolved to an [`ItemId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRule {
    name: Arc<str>,
    requires: Box<[ItemId]>,
    consumes: Box<[(ItemId, u32)]>,
    produces: Box<[(ItemId, u32)]>,
    cost: Cost,
}

impl CompiledRule {
    /// Resolve `def` against `vocab`.
    ///
    /// Repeated items keep their last amount; requirement lists are
    /// deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCost`] unless the cost is positive and
    /// finite, and [`ConfigError::UnknownItem`] for any item outside `vocab`.
    pub fn compile(def: &RuleDefinition, vocab: &ItemVocabularyV1) -> Result<Self, ConfigError> {
        let cost = Cost::new(def.cost)
            .filter(|cost| !cost.is_zero())
            .ok_or_else(|| ConfigError::InvalidCost {
                name: def.name.clone(),
                value: def.cost.to_string(),
            })?;

        let context = format!("rule `{}`", def.name);
        let mut requires = def
            .requires
            .iter()
            .map(|item| vocab.resolve(item, &context))
            .collect::<Result<Vec<_>, _>>()?;
        requires.sort_unstable();
        requires.dedup();

        Ok(Self {
            name: Arc::from(def.name.as_str()),
            requires: requires.into_boxed_slice(),
            consumes: resolve_amounts(&def.consumes, vocab, &context)?,
            produces: resolve_amounts(&def.produces, vocab, &context)?,
            cost,
        })
    }

    /// Rule name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared handle to the rule name, cheap to clone into plans.
    #[must_use]
    pub fn shared_name(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    /// Cost of one application.
    #[must_use]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Required items (presence checks).
    #[must_use]
    pub fn required(&self) -> &[ItemId] {
        &self.requires
    }

    /// Consumed `(item, amount)` pairs.
    #[must_use]
    pub fn consumed(&self) -> &[(ItemId, u32)] {
        &self.consumes
    }

    /// Produced `(item, amount)` pairs.
    #[must_use]
    pub fn produced(&self) -> &[(ItemId, u32)] {
        &self.produces
    }

    /// Precondition: enough of every consumed item, a positive count of
    /// every required item, and room for every produced amount.
    #[must_use]
    pub fn is_applicable(&self, state: &InventoryStateV1) -> bool {
        self.consumes
            .iter()
            .all(|&(item, amount)| state.get(item) >= amount)
            && self.requires.iter().all(|&item| state.get(item) > 0)
            && self
                .produces
                .iter()
                .all(|&(item, amount)| state.get(item).checked_add(amount).is_some())
    }

    /// Check the precondition and, if it holds, build the successor state.
    #[must_use]
    pub fn apply(&self, state: &InventoryStateV1) -> Option<InventoryStateV1> {
        if self.is_applicable(state) {
            Some(self.effect(state))
        } else {
            None
        }
    }

    /// Copy, add products, subtract consumption.
    ///
    /// # Panics
    ///
    /// Panics on count overflow or if a count would go negative. Both are
    /// excluded by the precondition, so reaching either is a defect.
    fn effect(&self, state: &InventoryStateV1) -> InventoryStateV1 {
        let mut counts = state.counts().to_vec();
        for &(item, amount) in self.produces.iter() {
            let slot = &mut counts[item.index()];
            *slot = slot.checked_add(amount).unwrap_or_else(|| {
                panic!("rule `{}` overflows count of {item:?}", self.name)
            });
        }
        for &(item, amount) in self.consumes.iter() {
            let slot = &mut counts[item.index()];
            assert!(
                *slot >= amount,
                "rule `{}` drives {item:?} negative: have {}, consume {amount}",
                self.name,
                *slot
            );
            *slot -= amount;
        }
        InventoryStateV1::new(counts)
    }
}

fn resolve_amounts(
    amounts: &[(String, u32)],
    vocab: &ItemVocabularyV1,
    context: &str,
) -> Result<Box<[(ItemId, u32)]>, ConfigError> {
    let mut resolved = BTreeMap::new();
    for (item, amount) in amounts {
        resolved.insert(vocab.resolve(item, context)?, *amount);
    }
    Ok(resolved.into_iter().collect())
}
