//! Audiogram analyzer binary.

use std::process::ExitCode;

use audiogram::{Cli, run};
use audiogram_core::LogContext;
use clap::Parser;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let ctx = LogContext::stderr();

    let outcome = run(&ctx, &cli);
    ExitCode::from(outcome.exit_code(cli.strict_exit))
}
