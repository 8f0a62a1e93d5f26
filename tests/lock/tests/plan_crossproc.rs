//! Cross-process determinism: the `plan_fixture` binary prints the same
//! lines whatever the cwd and environment.

use std::process::Command;

use lock_tests::fixtures::{crafting_fixture_path, workspace_root};

fn run_variant(work_dir: &std::path::Path, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_plan_fixture");
    let mut command = Command::new(bin);
    command
        .arg(crafting_fixture_path())
        .arg("wooden_pickaxe")
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin}: {e}"));
    assert!(
        output.status.success(),
        "plan_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn output_is_identical_across_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);
    assert!(baseline.contains("plan_digest=sha256:"), "{baseline}");
    assert!(baseline.contains("total_cost=18\n"), "{baseline}");
    assert!(baseline.contains("steps=10\n"), "{baseline}");

    let tmp = tempfile::tempdir().unwrap();
    assert_eq!(baseline, run_variant(tmp.path(), &[]), "cwd changed output");
    assert_eq!(
        baseline,
        run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]),
        "locale changed output"
    );
    assert_eq!(
        baseline,
        run_variant(&root, &[("TZ", "America/New_York"), ("RUST_LOG", "trace")]),
        "spurious env changed output"
    );
}

#[test]
fn output_matches_in_process_run() {
    use craftplan_harness::runner::{run, RunConfig};
    use lock_tests::fixtures::{crafting_problem, with_goal};

    let compiled = with_goal(crafting_problem(), &[("wooden_pickaxe", 1)])
        .compile()
        .unwrap();
    let report = run(&compiled, &RunConfig::default()).unwrap();
    let digest = report.outcome.unwrap().digest;

    let output = run_variant(&workspace_root(), &[]);
    assert!(
        output.contains(&format!("plan_digest={digest}\n")),
        "in-process digest {digest} not in {output}"
    );
}
