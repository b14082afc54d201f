#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use gramc::cli::args::CliArgs;
use gramc::cli::{driver, reporter::Reporter};

const EXIT_SUCCESS: i32 = 0;
const EXIT_OUTPUT_FAILED: i32 = 1;

fn main() -> Result<()> {
    // Initialize tracing if GRAMC_LOG or RUST_LOG is set (zero cost otherwise).
    gramc::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let result = driver::run(&args, &cwd)?;

    if !result.diagnostics.is_empty() {
        let reporter = Reporter::new(args.pretty || std::io::stderr().is_terminal());
        eprintln!("{}", reporter.render(result.diagnostics.diagnostics()));
    }

    let code = if result.has_errors() {
        EXIT_OUTPUT_FAILED
    } else {
        EXIT_SUCCESS
    };
    std::process::exit(code);
}
