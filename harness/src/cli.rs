//! `craftplan` command line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use craftplan_search::policy::SearchPolicyV1;

use crate::error::Result;
use crate::problem::CraftingProblemV1;
use crate::runner::{run, RunConfig, RunReport};

/// Exit code when no plan is found (timeout or exhaustion).
pub const EXIT_NO_PLAN: u8 = 2;
/// Exit code for unreadable, malformed or inconsistent problems.
pub const EXIT_CONFIG: u8 = 1;

#[derive(Parser, Debug)]
#[command(author, version, about = "Minimum-cost crafting planner", long_about = None)]
pub struct Cli {
    /// Problem file (Items / Initial / Goal / Recipes).
    pub problem: PathBuf,
    /// Wall-clock budget in seconds.
    #[arg(long, default_value_t = 30.0)]
    pub budget: f64,
    /// Search without the crafting cap preset.
    #[arg(long)]
    pub no_prune: bool,
    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Install the fmt subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load, search and print. Returns the rendered report and whether a plan
/// was found.
///
/// # Errors
///
/// Any [`crate::error::HarnessError`], including `Policy` for an invalid
/// `--budget`.
pub fn execute(cli: &Cli) -> Result<(String, bool)> {
    let policy = SearchPolicyV1::from_secs_f64(cli.budget)?;
    let problem = CraftingProblemV1::load(&cli.problem)?.compile()?;
    let config = RunConfig {
        policy,
        prune: !cli.no_prune,
    };
    let report: RunReport = run(&problem, &config)?;
    let rendered = if cli.json {
        let mut text = serde_json::to_string_pretty(&report.to_json_value(problem.vocabulary()))?;
        text.push('\n');
        text
    } else {
        report.render_text(problem.vocabulary())
    };
    Ok((rendered, report.plan().is_some()))
}

/// Binary entry point body.
#[must_use]
pub fn main_with(cli: &Cli) -> ExitCode {
    match execute(cli) {
        Ok((rendered, solved)) => {
            print!("{rendered}");
            if solved {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_NO_PLAN)
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(EXIT_CONFIG)
        }
    }
}
