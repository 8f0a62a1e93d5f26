//! Problem fixtures shared by the lock tests and the `plan_fixture` binary.
//!
//! # Panics
//!
//! Every helper panics on a malformed fixture. These are test-only
//! invariants.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use craftplan_harness::problem::{CompiledProblem, CraftingProblemV1};
use craftplan_kernel::carrier::compile::{compile_goal, compile_inventory};
use craftplan_kernel::carrier::vocabulary::ItemVocabularyV1;
use craftplan_kernel::operators::catalogue::RuleCatalogueV1;
use craftplan_kernel::operators::rule::RuleDefinition;

/// Workspace root (two levels above this crate).
#[must_use]
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("workspace root exists")
        .to_path_buf()
}

/// Absolute path of the crafting fixture.
#[must_use]
pub fn crafting_fixture_path() -> PathBuf {
    workspace_root().join("harness/fixtures/crafting.json")
}

/// The crafting fixture, as written.
#[must_use]
pub fn crafting_problem() -> CraftingProblemV1 {
    CraftingProblemV1::load(&crafting_fixture_path()).expect("crafting fixture loads")
}

/// `problem` with its goal replaced.
#[must_use]
pub fn with_goal(mut problem: CraftingProblemV1, goal: &[(&str, u32)]) -> CraftingProblemV1 {
    problem.goal = goal
        .iter()
        .map(|&(item, count)| (item.to_string(), count))
        .collect::<IndexMap<_, _>>();
    problem
}

/// The two-item plank problem: `{wood: 1}` to `{plank: 4}` in one step.
#[must_use]
pub fn plank_problem() -> CompiledProblem {
    let vocab = ItemVocabularyV1::new(["wood", "plank"]).expect("vocabulary");
    let catalogue = RuleCatalogueV1::compile(
        &vocab,
        &[RuleDefinition::new("make_plank", 1)
            .consumes("wood", 1)
            .produces("plank", 4)],
    )
    .expect("catalogue");
    CompiledProblem {
        start: compile_inventory(&vocab, [("wood", 1)]).expect("start"),
        goal: compile_goal(&vocab, [("plank", 4)]).expect("goal"),
        catalogue,
    }
}
