// SPDX-License-Identifier: Apache-2.0

//! The read-only query contract the review checks need from a forge.

use crate::data::{Issue, PullRequest};
use anyhow::Result;

/// Read-only queries against a source forge.
///
/// The review logic takes this as an explicit dependency rather than
/// reaching for a shared client handle, so the checks can run against a
/// mock in tests. None of the queries mutate forge state, and all of them
/// are idempotent.
pub trait Forge {
	/// Get all open pull requests in a repository, with their commits.
	fn open_pull_requests(&self, repo: &str) -> Result<Vec<PullRequest>>;

	/// Get a single pull request, with its commits.
	fn pull_request(&self, repo: &str, number: u64) -> Result<PullRequest>;

	/// Get a single issue.
	fn issue(&self, repo: &str, number: u64) -> Result<Issue>;

	/// Fetch the raw unified diff for a pull request.
	fn diff(&self, pr: &PullRequest) -> Result<String>;
}
