mod commands;
mod output;

use std::process::ExitCode;

use commands::run_cli;

fn main() -> anyhow::Result<ExitCode> {
	run_cli()
}
