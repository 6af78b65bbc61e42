// SPDX-License-Identifier: Apache-2.0

//! Domain types for the forge data consumed by the review checks.
//!
//! These are transient, read-only views; the review logic never writes
//! anything back to the forge.

use url::Url;

/// A pull request, with its commits, as fetched from the forge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
	/// The "owner/name" slug of the repository the PR belongs to.
	pub repo: String,

	/// The PR number within that repository.
	pub number: u64,

	/// The PR description; empty if the PR has none.
	pub body: String,

	/// Commits in the order the forge returns them.
	pub commits: Vec<Commit>,

	/// Where the unified diff for the PR can be fetched.
	pub diff_url: Url,

	/// Where the PR can be viewed.
	pub html_url: Url,
}

/// A single commit on a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
	/// Full 40-character lowercase hex hash.
	pub sha: String,

	/// Full commit message.
	pub message: String,

	/// Where the commit can be viewed; used in findings.
	pub html_url: Url,
}

/// An issue. Only the body is needed, for cross-reference resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
	pub number: u64,
	pub body: String,
}
