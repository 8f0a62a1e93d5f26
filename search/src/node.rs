//! Search node records and the frontier ordering key.

use std::sync::Arc;

use craftplan_kernel::carrier::inventory::InventoryStateV1;
use craftplan_kernel::operators::cost::Cost;

/// One discovered state in the node arena.
///
/// Exactly one record exists per distinct state. Relaxation overwrites
/// `g_cost`, `parent_id` and `producing_action` in place; the state itself
/// is never touched after insertion.
#[derive(Debug, Clone)]
pub struct SearchNodeV1 {
    /// Index into the arena. Assigned in discovery order.
    pub node_id: usize,
    /// Best known predecessor (`None` for the start node).
    pub parent_id: Option<usize>,
    /// Full immutable state at this node.
    pub state: InventoryStateV1,
    /// Best known cumulative path cost.
    pub g_cost: Cost,
    /// Rule that produced this node from `parent_id`.
    pub producing_action: Option<Arc<str>>,
    /// Set once the node has been popped with its final cost.
    pub expanded: bool,
}

impl SearchNodeV1 {
    /// The start node: cost 0, no parent, no action.
    #[must_use]
    pub fn root(state: InventoryStateV1) -> Self {
        Self {
            node_id: 0,
            parent_id: None,
            state,
            g_cost: Cost::ZERO,
            producing_action: None,
            expanded: false,
        }
    }
}

/// The frontier ordering key: `(g_cost, creation_order)`.
///
/// Lower cost first; equal costs pop in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrontierKey {
    pub g_cost: Cost,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.g_cost
            .cmp(&other.g_cost)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
