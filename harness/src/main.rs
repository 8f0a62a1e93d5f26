use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    craftplan_harness::cli::init_tracing();
    let cli = craftplan_harness::cli::Cli::parse();
    craftplan_harness::cli::main_with(&cli)
}
