//! Shared helpers for craftplan benchmark suites.

use craftplan_harness::caps::crafting_caps;
use craftplan_harness::problem::{CompiledProblem, CraftingProblemV1};
use craftplan_kernel::carrier::inventory::InventoryStateV1;
use craftplan_search::prune::CapPolicyV1;

const CRAFTING_JSON: &str = include_str!("../../harness/fixtures/crafting.json");

/// The crafting fixture compiled with `goal` as its only target.
///
/// # Panics
///
/// Panics if the embedded fixture is malformed. Benchmark setup failures are
/// fatal.
#[must_use]
pub fn crafting_with_goal(goal: &str, count: u32) -> CompiledProblem {
    let mut problem = CraftingProblemV1::from_json_str(CRAFTING_JSON).expect("fixture parses");
    problem.goal = std::iter::once((goal.to_string(), count)).collect();
    problem.compile().expect("fixture compiles")
}

/// The cap preset for `problem`.
///
/// # Panics
///
/// Panics if the preset cannot be compiled.
#[must_use]
pub fn caps_for(problem: &CompiledProblem) -> CapPolicyV1 {
    crafting_caps(problem.vocabulary()).expect("caps compile")
}

/// A mid-game inventory: bench, wooden pickaxe, some planks and sticks.
///
/// # Panics
///
/// Panics if an item is missing from the fixture vocabulary.
#[must_use]
pub fn mid_game_state(problem: &CompiledProblem) -> InventoryStateV1 {
    craftplan_kernel::carrier::compile::compile_inventory(
        problem.vocabulary(),
        [
            ("bench", 1),
            ("wooden_pickaxe", 1),
            ("plank", 5),
            ("stick", 4),
            ("wood", 1),
            ("cobble", 2),
        ],
    )
    .expect("mid-game items exist")
}
