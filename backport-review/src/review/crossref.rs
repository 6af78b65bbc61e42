// SPDX-License-Identifier: Apache-2.0

//! Resolution of whether a tracking issue legitimizes a backport.

use crate::{data::Commit, review::provenance::cherry_pick_source};
use anyhow::Result;
use regex::Regex;

/// Outcome of checking the tracking issue against the upstream PR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossRefVerdict {
	/// The issue body links the upstream PR directly.
	PullReference,

	/// The issue references an upstream commit that is cherry-picked into
	/// the backport.
	CommitReference { sha: String },

	/// The backport PR body has no tracking-issue link at all.
	NoTrackingIssue { description: String },

	/// The issue references neither the upstream PR nor a cherry-picked
	/// upstream commit. Carries the issue body for human inspection.
	Unreferenced { body: String },
}

/// Checks tracking-issue bodies against one upstream repository.
pub struct CrossRefResolver {
	/// The upstream "owner/name" slug.
	upstream_repo: String,

	/// Matches `<upstream-repo>/commit/<40-hex>`.
	commit_reference: Regex,
}

impl CrossRefResolver {
	/// Build a resolver for the given upstream repository slug.
	pub fn new(upstream_repo: &str) -> Result<CrossRefResolver> {
		let commit_reference = Regex::new(&format!(
			r"{}/commit/([0-9a-f]{{40}})",
			regex::escape(upstream_repo)
		))?;

		Ok(CrossRefResolver {
			upstream_repo: upstream_repo.to_owned(),
			commit_reference,
		})
	}

	/// Decide whether the tracking issue legitimizes the backport.
	///
	/// Decision order, first hit wins:
	/// 1. the issue body contains the upstream PR link;
	/// 2. the first upstream commit link in the body names a hash some
	///    backport commit cherry-picked (later commit links are not tried);
	/// 3. otherwise the issue does not legitimize the backport.
	pub fn resolve(
		&self,
		issue_body: &str,
		upstream_number: u64,
		backport_commits: &[Commit],
	) -> CrossRefVerdict {
		let pull_link = format!(
			"https://github.com/{}/pull/{}",
			self.upstream_repo, upstream_number
		);

		if issue_body.contains(&pull_link) {
			return CrossRefVerdict::PullReference;
		}

		if let Some(sha) = self.first_commit_reference(issue_body) {
			if is_cherry_picked(sha, backport_commits) {
				return CrossRefVerdict::CommitReference {
					sha: sha.to_owned(),
				};
			}
		}

		CrossRefVerdict::Unreferenced {
			body: issue_body.to_owned(),
		}
	}

	/// The first upstream commit hash referenced in a body, if any.
	fn first_commit_reference<'body>(&self, body: &'body str) -> Option<&'body str> {
		self.commit_reference
			.captures(body)
			.and_then(|captures| captures.get(1))
			.map(|hash| hash.as_str())
	}
}

/// Whether any backport commit's marker names the given upstream hash.
fn is_cherry_picked(sha: &str, backport_commits: &[Commit]) -> bool {
	backport_commits
		.iter()
		.any(|commit| cherry_pick_source(&commit.message) == Some(sha))
}
