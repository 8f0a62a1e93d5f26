//! The crafting fixture under the cap preset.

use std::time::Duration;

use craftplan_harness::caps::crafting_caps;
use craftplan_harness::runner::{run, RunConfig};
use craftplan_kernel::operators::cost::Cost;
use craftplan_search::contract::Admissibility;
use craftplan_search::policy::SearchPolicyV1;
use lock_tests::fixtures::{crafting_problem, with_goal};

fn config() -> RunConfig {
    RunConfig {
        policy: SearchPolicyV1::with_budget(Duration::from_secs(30)),
        prune: true,
    }
}

#[test]
fn fixture_compiles_in_document_order() {
    let compiled = crafting_problem().compile().unwrap();
    assert_eq!(compiled.vocabulary().len(), 17);
    assert_eq!(compiled.catalogue.len(), 25);
    assert_eq!(
        compiled.catalogue.rules()[0].name(),
        "craft wooden_pickaxe at bench"
    );
    assert_eq!(
        compiled.catalogue.rules()[24].name(),
        "smelt ore in furnace"
    );
}

#[test]
fn wooden_pickaxe_from_nothing() {
    let compiled = with_goal(crafting_problem(), &[("wooden_pickaxe", 1)])
        .compile()
        .unwrap();
    let report = run(&compiled, &config()).unwrap();
    let plan = report.plan().expect("plan found");

    assert_eq!(plan.total_cost(), Cost::from(18));
    assert_eq!(plan.len(), 10);
    assert_eq!(plan.actions().filter(|a| *a == "punch for wood").count(), 3);
    assert_eq!(plan.actions().filter(|a| *a == "craft plank").count(), 3);
    assert_eq!(plan.actions().last(), Some("craft wooden_pickaxe at bench"));
    assert_eq!(plan.replay_cost(&compiled.catalogue), Some(Cost::from(18)));

    let caps = crafting_caps(compiled.vocabulary()).unwrap();
    for pair in plan.steps().windows(2) {
        assert!(caps.admissible(&pair[1].state, &pair[0].state));
    }
}

#[test]
fn stone_pickaxe_from_nothing() {
    let compiled = crafting_problem().compile().unwrap();
    let report = run(&compiled, &config()).unwrap();
    let plan = report.plan().expect("plan found");

    assert_eq!(plan.total_cost(), Cost::from(31));
    assert_eq!(
        plan.actions()
            .filter(|a| *a == "wooden_pickaxe for cobble")
            .count(),
        3
    );
    assert_eq!(plan.actions().last(), Some("craft stone_pickaxe at bench"));
}

#[test]
fn pruning_keeps_the_optimum_here() {
    let compiled = with_goal(crafting_problem(), &[("wooden_pickaxe", 1)])
        .compile()
        .unwrap();
    let pruned = run(&compiled, &config()).unwrap();
    let unpruned = run(
        &compiled,
        &RunConfig {
            prune: false,
            ..config()
        },
    )
    .unwrap();

    let pruned_cost = pruned.plan().map(|p| p.total_cost());
    let unpruned_cost = unpruned.plan().map(|p| p.total_cost());
    assert_eq!(pruned_cost, Some(Cost::from(18)));
    assert_eq!(unpruned_cost, Some(Cost::from(18)));
    assert!(pruned.stats().discovered <= unpruned.stats().discovered);
}
