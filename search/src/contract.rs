//! Search seams: successor enumeration, goal test, admissibility filter.
//!
//! # Contract
//!
//! - `successors` must be deterministic: same state → same transitions in
//!   the same order. It must not keep search bookkeeping.
//! - `is_goal` and `admissible` must be pure functions of their arguments.
//! - `admissible` is a filter, not an estimate: a `false` drops the
//!   candidate for good, even if it was the only way to a goal.

use craftplan_kernel::carrier::goal::GoalV1;
use craftplan_kernel::carrier::inventory::InventoryStateV1;
use craftplan_kernel::operators::apply::{Successors, Transition};
use craftplan_kernel::operators::catalogue::RuleCatalogueV1;

/// Anything that can enumerate the transitions out of a state.
pub trait TransitionGraph {
    /// Lazy, finite iterator of transitions.
    type Successors<'a>: Iterator<Item = Transition>
    where
        Self: 'a;

    /// Enumerate every transition applicable to `state`.
    fn successors<'a>(&'a self, state: &'a InventoryStateV1) -> Self::Successors<'a>;

    /// Number of rules behind the graph, for logging.
    fn rule_count(&self) -> usize;
}

impl TransitionGraph for RuleCatalogueV1 {
    type Successors<'a> = Successors<'a>;

    fn successors<'a>(&'a self, state: &'a InventoryStateV1) -> Successors<'a> {
        RuleCatalogueV1::successors(self, state)
    }

    fn rule_count(&self) -> usize {
        self.len()
    }
}

/// Goal test.
pub trait GoalPredicate {
    /// True iff `state` satisfies the goal.
    fn is_goal(&self, state: &InventoryStateV1) -> bool;
}

impl GoalPredicate for GoalV1 {
    fn is_goal(&self, state: &InventoryStateV1) -> bool {
        self.is_satisfied_by(state)
    }
}

/// Goal test backed by a closure. Built with [`goal_fn`].
#[derive(Debug, Clone, Copy)]
pub struct GoalFn<F>(F);

/// Wrap a closure as a [`GoalPredicate`].
pub fn goal_fn<F>(f: F) -> GoalFn<F>
where
    F: Fn(&InventoryStateV1) -> bool,
{
    GoalFn(f)
}

impl<F> GoalPredicate for GoalFn<F>
where
    F: Fn(&InventoryStateV1) -> bool,
{
    fn is_goal(&self, state: &InventoryStateV1) -> bool {
        (self.0)(state)
    }
}

/// Pruning filter applied to each candidate before it enters the frontier.
pub trait Admissibility {
    /// Whether `candidate`, reached from `source`, may enter the frontier.
    fn admissible(&self, candidate: &InventoryStateV1, source: &InventoryStateV1) -> bool;
}

impl<F> Admissibility for F
where
    F: Fn(&InventoryStateV1, &InventoryStateV1) -> bool,
{
    fn admissible(&self, candidate: &InventoryStateV1, source: &InventoryStateV1) -> bool {
        self(candidate, source)
    }
}
