//! Reconstructed plans and their canonical form.
//!
//! A plan is the start-to-goal path recovered by walking parent links. Its
//! canonical JSON is byte-stable across runs and processes, so two plans can
//! be compared by digest alone.

use std::sync::Arc;

use serde_json::{json, Map, Value};

use craftplan_kernel::carrier::inventory::InventoryStateV1;
use craftplan_kernel::carrier::vocabulary::ItemVocabularyV1;
use craftplan_kernel::operators::catalogue::RuleCatalogueV1;
use craftplan_kernel::operators::cost::Cost;
use craftplan_kernel::proof::canon::{canonical_json_bytes, CanonError};
use craftplan_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// One plan step: a state and the action that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStepV1 {
    /// Inventory after `action`.
    pub state: InventoryStateV1,
    /// `None` only for the first step (the start state).
    pub action: Option<Arc<str>>,
}

/// Start-to-goal plan with its total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanV1 {
    steps: Vec<PlanStepV1>,
    total_cost: Cost,
}

impl PlanV1 {
    pub(crate) fn new(steps: Vec<PlanStepV1>, total_cost: Cost) -> Self {
        debug_assert!(!steps.is_empty(), "a plan has at least the start state");
        debug_assert!(steps[0].action.is_none());
        Self { steps, total_cost }
    }

    /// Steps in start-to-goal order.
    #[must_use]
    pub fn steps(&self) -> &[PlanStepV1] {
        &self.steps
    }

    /// Sum of rule costs along the plan.
    #[must_use]
    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    /// Number of steps, the start state included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The start state.
    #[must_use]
    pub fn start_state(&self) -> &InventoryStateV1 {
        &self.steps[0].state
    }

    /// The final, goal-satisfying state.
    #[must_use]
    pub fn goal_state(&self) -> &InventoryStateV1 {
        &self.steps[self.steps.len() - 1].state
    }

    /// Action names in order, the start step skipped.
    pub fn actions(&self) -> impl Iterator<Item = &str> + '_ {
        self.steps.iter().filter_map(|s| s.action.as_deref())
    }

    /// Replay the plan against `catalogue` and return the summed cost.
    ///
    /// Returns `None` if an action is unknown, is not applicable to the
    /// previous state, or does not produce the recorded next state.
    #[must_use]
    pub fn replay_cost(&self, catalogue: &RuleCatalogueV1) -> Option<Cost> {
        let mut total = Cost::ZERO;
        for pair in self.steps.windows(2) {
            let rule = catalogue.get(pair[1].action.as_deref()?)?;
            if rule.apply(&pair[0].state)? != pair[1].state {
                return None;
            }
            total = total.saturating_add(rule.cost());
        }
        Some(total)
    }

    /// Plan as a JSON value: `{"steps":[{"action":..,"inventory":{..}}],"total_cost":".."}`.
    ///
    /// Every vocabulary item appears in each inventory, zeros included. The
    /// total cost is a decimal string so the value stays canonicalizable.
    #[must_use]
    pub fn to_json_value(&self, vocab: &ItemVocabularyV1) -> Value {
        let steps: Vec<Value> = self
            .steps
            .iter()
            .map(|step| {
                let inventory: Map<String, Value> = vocab
                    .names()
                    .zip(step.state.counts())
                    .map(|(name, &count)| (name.to_string(), Value::from(count)))
                    .collect();
                json!({
                    "action": step.action.as_deref(),
                    "inventory": inventory,
                })
            })
            .collect();
        json!({
            "steps": steps,
            "total_cost": self.total_cost.to_string(),
        })
    }

    /// Canonical JSON bytes of [`Self::to_json_value`].
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`]; plan values are integers and strings only,
    /// so this does not fail in practice.
    pub fn canonical_bytes(&self, vocab: &ItemVocabularyV1) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value(vocab))
    }

    /// Content digest of the canonical bytes under the plan domain.
    ///
    /// # Errors
    ///
    /// See [`Self::canonical_bytes`].
    pub fn digest(&self, vocab: &ItemVocabularyV1) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(HashDomain::Plan, &self.canonical_bytes(vocab)?))
    }
}
