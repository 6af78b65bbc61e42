// SPDX-License-Identifier: Apache-2.0

mod cli;
mod config;
mod data;
mod forge;
mod github;
mod http;
mod review;

use crate::{cli::Args, config::Config, github::GitHub, review::Reviewer};
use anyhow::Result;
use clap::Parser as _;
use env_logger::{Builder, Env};
use std::process::ExitCode;

/// The environment variable for configuring logging output.
static LOG_NAME: &str = "BPR_LOG";

/// The environment variable for configuring logging style.
static LOG_STYLE: &str = "BPR_LOG_STYLE";

/// Entry point for the backport reviewer.
///
/// Findings are reported to stdout and do not affect the exit code; only
/// a fatal error (bad arguments, client initialization, an unreviewable
/// single target) exits nonzero.
fn main() -> ExitCode {
	init_log();

	if let Err(error) = go() {
		eprintln!("error: {:?}", error);
		return ExitCode::FAILURE;
	}

	ExitCode::SUCCESS
}

/// Initialize the logger.
fn init_log() {
	let env = Env::new().filter(LOG_NAME).write_style(LOG_STYLE);
	Builder::from_env(env).init();
}

fn go() -> Result<()> {
	// Pick up a `.env` file if present, for the GITHUB_TOKEN variable.
	let _ = dotenv::dotenv();

	let config = Config::from(Args::parse());
	let github = GitHub::new(config.token.as_deref())?;

	Reviewer::new(&github, &config)?.run()
}
