//! Every applicable rule yields a well-formed successor, over every state of
//! a small grid, for every rule of the crafting fixture.

use craftplan_kernel::carrier::inventory::InventoryStateV1;
use lock_tests::fixtures::crafting_problem;

/// Deterministic xorshift so the sample is the same on every run.
fn next(seed: &mut u64) -> u64 {
    *seed ^= *seed << 13;
    *seed ^= *seed >> 7;
    *seed ^= *seed << 17;
    *seed
}

#[test]
fn applicable_rules_never_underflow() {
    let compiled = crafting_problem().compile().unwrap();
    let width = compiled.vocabulary().len();
    let mut seed = 0x9e37_79b9_7f4a_7c15_u64;

    for _ in 0..2_000 {
        let counts: Vec<u32> = (0..width)
            .map(|_| u32::try_from(next(&mut seed) % 9).unwrap())
            .collect();
        let state = InventoryStateV1::from_counts(compiled.vocabulary(), counts).unwrap();

        for rule in compiled.catalogue.rules() {
            match rule.apply(&state) {
                Some(after) => {
                    assert!(rule.is_applicable(&state));
                    for &(item, amount) in rule.consumed() {
                        assert!(state.get(item) >= amount);
                    }
                    for &item in rule.required() {
                        assert!(state.get(item) > 0);
                    }
                    assert_eq!(after.len(), state.len());
                }
                None => assert!(!rule.is_applicable(&state)),
            }
        }

        let yielded: Vec<&str> = compiled
            .catalogue
            .successors(&state)
            .map(|t| compiled.catalogue.get(&t.action).unwrap().name())
            .collect();
        let expected: Vec<&str> = compiled
            .catalogue
            .rules()
            .iter()
            .filter(|r| r.is_applicable(&state))
            .map(|r| r.name())
            .collect();
        assert_eq!(yielded, expected, "successors follow catalogue order");
    }
}
