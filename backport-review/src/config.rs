// SPDX-License-Identifier: Apache-2.0

//! Validated run configuration, resolved from CLI flags and environment.

use crate::cli::Args;
use std::env;

/// The environment variable consulted for a GitHub API token when the
/// `--token` flag is not given.
const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Validated configuration for one review run.
#[derive(Debug)]
pub struct Config {
	/// The backport repository under review, as an "owner/name" slug.
	/// Tracking issues are expected to live here too.
	pub repository: String,

	/// The upstream repository backports are taken from.
	pub upstream_repository: String,

	/// Review a single PR instead of all open PRs.
	pub pull_request: Option<u64>,

	/// GitHub API token; anonymous access when absent.
	pub token: Option<String>,
}

impl From<Args> for Config {
	fn from(args: Args) -> Config {
		let token = args.token.or_else(|| env::var(TOKEN_VAR).ok());

		Config {
			repository: args.repository,
			upstream_repository: args.upstream_repository,
			pull_request: args.pull_request,
			token,
		}
	}
}
