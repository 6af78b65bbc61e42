// SPDX-License-Identifier: Apache-2.0

//! CLI surface for the backport reviewer.

use clap::Parser;

/// Review backport pull requests against their upstream counterparts.
#[derive(Debug, Parser)]
#[command(name = "bpr", about, version)]
pub struct Args {
	/// The repository whose backport PRs should be reviewed.
	#[arg(
		short = 'r',
		long = "repository",
		default_value = "graalvm/graalvm-community-jdk21u"
	)]
	pub repository: String,

	/// The upstream repository the backports are taken from.
	#[arg(
		short = 'u',
		long = "upstream-repository",
		default_value = "oracle/graal"
	)]
	pub upstream_repository: String,

	/// Review a single pull request instead of all open ones.
	#[arg(short = 'p', long = "pr")]
	pub pull_request: Option<u64>,

	/// GitHub token to use when calling the GitHub API.
	///
	/// Falls back to the `GITHUB_TOKEN` environment variable; without
	/// either, requests are made anonymously.
	#[arg(short = 't', long = "token")]
	pub token: Option<String>,
}
