//! `GoalV1`: minimum counts a terminal inventory must reach.

use crate::carrier::inventory::InventoryStateV1;
use crate::carrier::vocabulary::ItemId;

/// Compiled goal: `(item, minimum)` pairs in canonical item order.
///
/// Items not listed are unconstrained. An empty goal accepts every state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GoalV1 {
    minimums: Vec<(ItemId, u32)>,
}

impl GoalV1 {
    /// Build a goal from resolved minimums. Later duplicates of an item
    /// replace earlier ones; pairs are kept sorted by item.
    #[must_use]
    pub fn new(minimums: impl IntoIterator<Item = (ItemId, u32)>) -> Self {
        let mut sorted: Vec<(ItemId, u32)> = Vec::new();
        for (item, minimum) in minimums {
            match sorted.binary_search_by_key(&item, |&(id, _)| id) {
                Ok(pos) => sorted[pos].1 = minimum,
                Err(pos) => sorted.insert(pos, (item, minimum)),
            }
        }
        Self { minimums: sorted }
    }

    /// True iff every listed item meets its minimum.
    #[must_use]
    pub fn is_satisfied_by(&self, state: &InventoryStateV1) -> bool {
        self.minimums
            .iter()
            .all(|&(item, minimum)| state.get(item) >= minimum)
    }

    /// The `(item, minimum)` pairs.
    #[must_use]
    pub fn minimums(&self) -> &[(ItemId, u32)] {
        &self.minimums
    }
}
