//! Min-priority frontier with lazy deletion.
//!
//! Entries are never removed or decreased in place. A relaxation pushes a
//! fresh entry; the superseded one stays in the heap and is discarded by the
//! caller when popped (see [`crate::search`]).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use craftplan_kernel::operators::cost::Cost;

use crate::node::FrontierKey;

/// A frontier entry: ordering key plus the arena index it refers to.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest cost first).
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node_id: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Uniform-cost frontier.
///
/// Assigns each pushed entry a monotonic `creation_order`, which makes the
/// key a total order: no two entries ever compare equal.
#[derive(Debug, Default)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<FrontierEntry>,
    next_creation_order: u64,
    high_water: u64,
}

impl BestFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `node_id` with priority `g_cost`. Returns the assigned key.
    pub fn push(&mut self, g_cost: Cost, node_id: usize) -> FrontierKey {
        let key = FrontierKey {
            g_cost,
            creation_order: self.next_creation_order,
        };
        self.next_creation_order += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node_id,
        });
        self.high_water = self.high_water.max(self.heap.len() as u64);
        key
    }

    /// Pop the entry with the lowest key.
    #[must_use]
    pub fn pop(&mut self) -> Option<(FrontierKey, usize)> {
        self.heap.pop().map(|e| (e.key.0, e.node_id))
    }

    /// Current frontier size, stale entries included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Total number of entries ever pushed.
    #[must_use]
    pub fn pushed(&self) -> u64 {
        self.next_creation_order
    }
}
