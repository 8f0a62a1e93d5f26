//! Compilation boundary: name-keyed inventories and goals to index form.
//!
//! Loaders hand over `(item name, amount)` pairs; this module resolves them
//! against the vocabulary exactly once. Unknown names fail closed with
//! [`ConfigError::UnknownItem`]; there is no auto-allocation.

use crate::carrier::goal::GoalV1;
use crate::carrier::inventory::InventoryStateV1;
use crate::carrier::vocabulary::ItemVocabularyV1;
use crate::error::ConfigError;

/// Build the start state. Items not listed default to 0; a repeated item
/// keeps its last amount.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownItem`] if an item is not in `vocab`.
pub fn compile_inventory<'a, I>(
    vocab: &ItemVocabularyV1,
    initial: I,
) -> Result<InventoryStateV1, ConfigError>
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    let mut counts = vec![0u32; vocab.len()];
    for (name, amount) in initial {
        let id = vocab.resolve(name, "initial inventory")?;
        counts[id.index()] = amount;
    }
    Ok(InventoryStateV1::new(counts))
}

/// Build the goal from minimum counts.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownItem`] if an item is not in `vocab`.
pub fn compile_goal<'a, I>(vocab: &ItemVocabularyV1, goal: I) -> Result<GoalV1, ConfigError>
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    let minimums = goal
        .into_iter()
        .map(|(name, minimum)| Ok((vocab.resolve(name, "goal")?, minimum)))
        .collect::<Result<Vec<_>, ConfigError>>()?;
    Ok(GoalV1::new(minimums))
}
