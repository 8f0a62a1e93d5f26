//! Configuration errors surface once, at compile time.

use craftplan_harness::error::HarnessError;
use craftplan_harness::problem::CraftingProblemV1;
use craftplan_kernel::error::ConfigError;

fn compile(json: &str) -> Result<(), ConfigError> {
    CraftingProblemV1::from_json_str(json)
        .expect("well-formed JSON")
        .compile()
        .map(|_| ())
}

#[test]
fn unknown_item_in_each_position() {
    let cases = [
        (r#"{"Items":["wood"],"Initial":{"ore":1}}"#, "ore", "initial inventory"),
        (r#"{"Items":["wood"],"Goal":{"ore":1}}"#, "ore", "goal"),
        (
            r#"{"Items":["wood"],"Recipes":{"mine":{"Requires":["pick"],"Time":1}}}"#,
            "pick",
            "rule `mine`",
        ),
        (
            r#"{"Items":["wood"],"Recipes":{"mine":{"Consumes":{"ore":1},"Time":1}}}"#,
            "ore",
            "rule `mine`",
        ),
        (
            r#"{"Items":["wood"],"Recipes":{"mine":{"Produces":{"ore":1},"Time":1}}}"#,
            "ore",
            "rule `mine`",
        ),
    ];
    for (json, item, context) in cases {
        let err = compile(json).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownItem {
                item: item.to_string(),
                context: context.to_string(),
            },
            "{json}"
        );
    }
}

#[test]
fn duplicate_and_empty_items() {
    assert!(matches!(
        compile(r#"{"Items":["wood","wood"]}"#).unwrap_err(),
        ConfigError::DuplicateItem { ref item } if item == "wood"
    ));
    assert!(matches!(
        compile(r#"{"Items":["wood",""]}"#).unwrap_err(),
        ConfigError::EmptyItem { position: 1 }
    ));
}

#[test]
fn zero_cost_rejected() {
    assert!(matches!(
        compile(r#"{"Items":["wood"],"Recipes":{"idle":{"Time":0}}}"#).unwrap_err(),
        ConfigError::InvalidCost { ref name, .. } if name == "idle"
    ));
}

#[test]
fn negative_cost_rejected() {
    assert!(matches!(
        compile(r#"{"Items":["wood"],"Recipes":{"x":{"Time":-2}}}"#).unwrap_err(),
        ConfigError::InvalidCost { ref name, ref value } if name == "x" && value == "-2"
    ));
}

#[test]
fn schema_violations_are_json_errors() {
    for json in [
        r#"{"Initial":{}}"#,
        r#"{"Items":["wood"],"Recipes":{"x":{"Produces":{"wood":1}}}}"#,
        r#"{"Items":["wood"],"Initial":{"wood":-1}}"#,
        r#"{"Items":["wood"],"Recipes":{"x":{"Time":"2"}}}"#,
    ] {
        let err = CraftingProblemV1::from_json_str(json).unwrap_err();
        assert!(matches!(err, HarnessError::Json(_)), "{json}: {err}");
    }
}
