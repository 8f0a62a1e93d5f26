//! Searches that end without a plan: exhaustion, pruning, full counts,
//! timeout.

use std::time::{Duration, Instant};

use craftplan_harness::problem::CraftingProblemV1;
use craftplan_harness::runner::{run, RunConfig};
use craftplan_kernel::carrier::compile::{compile_goal, compile_inventory};
use craftplan_kernel::carrier::inventory::InventoryStateV1;
use craftplan_kernel::carrier::vocabulary::ItemVocabularyV1;
use craftplan_kernel::operators::catalogue::RuleCatalogueV1;
use craftplan_kernel::operators::cost::Cost;
use craftplan_kernel::operators::rule::RuleDefinition;
use craftplan_search::error::SearchFailure;
use craftplan_search::policy::SearchPolicyV1;
use craftplan_search::prune::{AdmitAll, CapPolicyV1, CapRule};
use craftplan_search::search::search;

#[test]
fn no_producer_exhausts_long_before_budget() {
    let vocab = ItemVocabularyV1::new(["wood", "stone"]).unwrap();
    let cat = RuleCatalogueV1::compile(
        &vocab,
        &[RuleDefinition::new("burn wood", 1).consumes("wood", 1)],
    )
    .unwrap();
    let start = compile_inventory(&vocab, [("wood", 5)]).unwrap();
    let goal = compile_goal(&vocab, [("stone", 1)]).unwrap();
    let policy = SearchPolicyV1::with_budget(Duration::from_secs(60));

    let began = Instant::now();
    let err = search(&cat, start, &goal, &policy, &AdmitAll).unwrap_err();
    assert!(matches!(err, SearchFailure::FrontierExhausted { .. }), "{err:?}");
    assert!(began.elapsed() < Duration::from_secs(60));
    assert_eq!(err.stats().discovered, 6);
}

#[test]
fn cap_on_the_only_path_makes_goal_unreachable() {
    // Two wood are needed at once for the bench; a wood cap of 1 rejects
    // the only state on the way.
    let vocab = ItemVocabularyV1::new(["wood", "bench"]).unwrap();
    let cat = RuleCatalogueV1::compile(
        &vocab,
        &[
            RuleDefinition::new("punch for wood", 4).produces("wood", 1),
            RuleDefinition::new("craft bench", 1)
                .consumes("wood", 2)
                .produces("bench", 1),
        ],
    )
    .unwrap();
    let goal = compile_goal(&vocab, [("bench", 1)]).unwrap();
    let start = InventoryStateV1::empty(&vocab);
    let policy = SearchPolicyV1::with_budget(Duration::from_secs(10));

    let unpruned = search(&cat, start.clone(), &goal, &policy, &AdmitAll).unwrap();
    assert_eq!(unpruned.total_cost(), Cost::from(9));

    let caps = CapPolicyV1::compile(&vocab, &[CapRule::max("wood", 1)]).unwrap();
    let err = search(&cat, start, &goal, &policy, &caps).unwrap_err();
    assert!(matches!(err, SearchFailure::FrontierExhausted { .. }), "{err:?}");
    assert_eq!(err.stats().pruned, 1);
}

#[test]
fn production_into_a_full_slot_exhausts_instead_of_panicking() {
    let compiled = CraftingProblemV1::from_json_str(
        r#"{
            "Items": ["wood", "stone"],
            "Initial": {"wood": 4294967295},
            "Goal": {"stone": 1},
            "Recipes": {"punch": {"Produces": {"wood": 1}, "Time": 1}}
        }"#,
    )
    .unwrap()
    .compile()
    .unwrap();
    let config = RunConfig {
        policy: SearchPolicyV1::with_budget(Duration::from_secs(10)),
        prune: false,
    };

    let report = run(&compiled, &config).unwrap();
    assert!(
        matches!(report.outcome, Err(SearchFailure::FrontierExhausted { .. })),
        "{:?}",
        report.outcome
    );
    assert_eq!(report.stats().discovered, 1);
}

#[test]
fn unbounded_space_times_out() {
    let vocab = ItemVocabularyV1::new(["wood", "diamond"]).unwrap();
    let cat = RuleCatalogueV1::compile(
        &vocab,
        &[RuleDefinition::new("punch for wood", 1).produces("wood", 1)],
    )
    .unwrap();
    let goal = compile_goal(&vocab, [("diamond", 1)]).unwrap();
    let policy = SearchPolicyV1::with_budget(Duration::from_millis(100));

    let err = search(&cat, InventoryStateV1::empty(&vocab), &goal, &policy, &AdmitAll)
        .unwrap_err();
    assert!(matches!(err, SearchFailure::TimeoutExceeded { .. }), "{err:?}");
    assert!(err.stats().elapsed >= Duration::from_millis(100));
    assert!(err.stats().expansions > 0);
}
