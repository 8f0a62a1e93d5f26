//! Cap preset for the crafting domain.
//!
//! One of each tool or station is enough, and raw materials beyond a small
//! stock never shorten a plan. The preset also stops plank hoarding before a
//! bench exists.

use tracing::warn;

use craftplan_kernel::carrier::vocabulary::ItemVocabularyV1;
use craftplan_kernel::error::ConfigError;
use craftplan_search::prune::{CapPolicyV1, CapRule};

const TOOLS: &[&str] = &[
    "bench",
    "furnace",
    "iron_axe",
    "iron_pickaxe",
    "stone_axe",
    "stone_pickaxe",
    "wooden_axe",
    "wooden_pickaxe",
    "cart",
];

const MATERIALS: &[(&str, u32)] = &[
    ("coal", 1),
    ("cobble", 10),
    ("ingot", 10),
    ("ore", 1),
    ("plank", 8),
    ("stick", 5),
    ("wood", 2),
];

/// The full preset, by item name.
#[must_use]
pub fn crafting_cap_rules() -> Vec<CapRule> {
    TOOLS
        .iter()
        .map(|&tool| CapRule::max(tool, 1))
        .chain(MATERIALS.iter().map(|&(item, max)| CapRule::max(item, max)))
        .chain(std::iter::once(CapRule::max_while_absent("plank", "bench", 7)))
        .collect()
}

/// Compile the preset against `vocab`, skipping caps on absent items.
///
/// # Errors
///
/// Propagates [`ConfigError`] from [`CapPolicyV1::compile`]; with absent
/// items filtered out this does not happen.
pub fn crafting_caps(vocab: &ItemVocabularyV1) -> Result<CapPolicyV1, ConfigError> {
    let (kept, skipped): (Vec<CapRule>, Vec<CapRule>) = crafting_cap_rules()
        .into_iter()
        .partition(|rule| rule.items().iter().all(|item| vocab.get(item).is_some()));
    for rule in &skipped {
        warn!(?rule, "cap skipped: item not in vocabulary");
    }
    CapPolicyV1::compile(vocab, &kept)
}
