//! Repeated runs produce byte-identical plans.

use craftplan_harness::runner::{run, RunConfig};
use lock_tests::fixtures::{crafting_problem, plank_problem, with_goal};

#[test]
fn plank_plan_bytes_are_stable() {
    let p = plank_problem();
    let a = run(&p, &RunConfig::default()).unwrap();
    let b = run(&p, &RunConfig::default()).unwrap();
    let bytes = |r: &craftplan_harness::runner::RunReport| {
        r.plan().unwrap().canonical_bytes(p.vocabulary()).unwrap()
    };
    assert_eq!(bytes(&a), bytes(&b));
    assert_eq!(
        String::from_utf8(bytes(&a)).unwrap(),
        r#"{"steps":[{"action":null,"inventory":{"plank":0,"wood":1}},{"action":"make_plank","inventory":{"plank":4,"wood":0}}],"total_cost":"1"}"#
    );
}

#[test]
fn crafting_plan_digest_is_stable_in_process() {
    let compiled = with_goal(crafting_problem(), &[("wooden_pickaxe", 1)])
        .compile()
        .unwrap();
    let first = run(&compiled, &RunConfig::default()).unwrap();
    let first = first.outcome.unwrap();
    for _ in 0..3 {
        let again = run(&compiled, &RunConfig::default()).unwrap().outcome.unwrap();
        assert_eq!(again.digest, first.digest);
        assert_eq!(again.plan, first.plan);
        assert_eq!(again.stats.expansions, first.stats.expansions);
    }
}

#[test]
fn catalogue_digest_depends_on_rule_order() {
    let forward = crafting_problem();
    let mut reversed = forward.clone();
    reversed.recipes.reverse();
    let a = forward.compile().unwrap().catalogue.digest().unwrap();
    let b = reversed.compile().unwrap().catalogue.digest().unwrap();
    assert_ne!(a, b);
}
