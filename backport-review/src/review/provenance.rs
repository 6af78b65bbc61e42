// SPDX-License-Identifier: Apache-2.0

//! Reconciliation of backport commits against upstream commits.
//!
//! Each backport commit should carry the trailing marker `git cherry-pick
//! -x` appends, naming exactly one upstream commit; each upstream commit
//! should be named exactly once.

use crate::data::Commit;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// The trailing marker a `git cherry-pick -x` leaves in a commit message.
static CHERRY_PICK: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\(cherry picked from commit ([0-9a-f]{40})\)").unwrap());

/// Extract the cherry-pick source hash from a commit message, if present.
///
/// Only a full 40-character lowercase hex hash counts; anything shorter,
/// longer, or mixed-case is treated as no reference at all.
pub fn cherry_pick_source(message: &str) -> Option<&str> {
	CHERRY_PICK
		.captures(message)
		.and_then(|captures| captures.get(1))
		.map(|hash| hash.as_str())
}

/// A problem found while reconciling one backport commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvenanceFinding {
	/// The commit message carries no cherry-pick marker.
	NotACherryPick { commit: Url },

	/// The marker references a hash that is not an upstream commit, or one
	/// already consumed by an earlier backport commit.
	UnmatchedUpstream { commit: Url, referenced: String },
}

/// The result of reconciling a backport PR's commits against upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvenanceReport {
	/// Per-commit findings, in backport commit order.
	pub findings: Vec<ProvenanceFinding>,

	/// Upstream hashes no backport commit cherry-picked.
	pub unreferenced: Vec<String>,
}

impl ProvenanceReport {
	/// True when the backport commits with valid markers map one-to-one
	/// onto the full upstream commit multiset.
	pub fn is_match(&self) -> bool {
		self.unreferenced.is_empty()
			&& !self
				.findings
				.iter()
				.any(|finding| matches!(finding, ProvenanceFinding::UnmatchedUpstream { .. }))
	}
}

/// Match each backport commit to an upstream commit via its cherry-pick
/// marker, consuming each upstream hash at most once.
pub fn reconcile(backport: &[Commit], upstream: &[Commit]) -> ProvenanceReport {
	// Multiset of upstream hashes; duplicates keep their multiplicity.
	let mut remaining: Vec<&str> = upstream.iter().map(|commit| commit.sha.as_str()).collect();
	let mut findings = Vec::new();

	for commit in backport {
		match cherry_pick_source(&commit.message) {
			None => findings.push(ProvenanceFinding::NotACherryPick {
				commit: commit.html_url.clone(),
			}),
			Some(referenced) => match remaining.iter().position(|sha| *sha == referenced) {
				Some(index) => {
					remaining.remove(index);
				}
				None => findings.push(ProvenanceFinding::UnmatchedUpstream {
					commit: commit.html_url.clone(),
					referenced: referenced.to_owned(),
				}),
			},
		}
	}

	ProvenanceReport {
		findings,
		unreferenced: remaining.into_iter().map(str::to_owned).collect(),
	}
}
