// SPDX-License-Identifier: Apache-2.0

//! Console rendering of review verdicts.
//!
//! All presentation lives here; the check modules themselves are pure and
//! never print.

use crate::review::{
	PullReview,
	crossref::CrossRefVerdict,
	diff::DiffVerdict,
	provenance::{ProvenanceFinding, ProvenanceReport},
};
use console::Emoji;

/// Marker for a passing check.
const PASS: Emoji = Emoji("✅", "[PASS]");

/// Marker for a failing check.
const FAIL: Emoji = Emoji("❌", "[FAIL]");

/// Print one verdict line per check for a reviewed PR.
pub fn render(review: &PullReview) {
	match review {
		PullReview::UnresolvedUpstream { description } => {
			println!("{} No upstream PR found in:", FAIL);
			println!("{}", description);
		}
		PullReview::Checked {
			diff,
			provenance,
			crossref,
			..
		} => {
			render_diff(diff);
			render_provenance(provenance);
			render_crossref(crossref);
		}
	}
}

/// Print a failure that prevented a PR from being reviewed at all.
pub fn render_failure(error: &anyhow::Error) {
	println!("{} Review failed: {:#}", FAIL, error);
}

fn render_diff(verdict: &DiffVerdict) {
	match verdict {
		DiffVerdict::Match => println!("{} Diffs match.", PASS),
		DiffVerdict::Mismatch { backport, upstream } => {
			println!("{} Diffs do not match!", FAIL);
			println!("PR diff:\n{}", backport);
			println!("Upstream diff:\n{}", upstream);
		}
		DiffVerdict::FetchError { error } => {
			println!("{} Failed to fetch or compare diffs: {}", FAIL, error);
		}
	}
}

fn render_provenance(report: &ProvenanceReport) {
	for finding in &report.findings {
		match finding {
			ProvenanceFinding::NotACherryPick { commit } => {
				println!("{} Commit {} is not a cherry-pick.", FAIL, commit);
			}
			ProvenanceFinding::UnmatchedUpstream { commit, referenced } => {
				println!(
					"{} Commit {} does not reference a valid upstream commit: {}",
					FAIL, commit, referenced
				);
			}
		}
	}

	if report.is_match() {
		println!(
			"{} All backport commits reference valid upstream commits.",
			PASS
		);
	} else if report.unreferenced.is_empty() {
		println!(
			"{} Not every backport commit maps onto a distinct upstream commit.",
			FAIL
		);
	} else {
		println!(
			"{} Some upstream commits were not referenced in the backport PR: {:?}",
			FAIL, report.unreferenced
		);
	}
}

fn render_crossref(verdict: &CrossRefVerdict) {
	match verdict {
		CrossRefVerdict::PullReference => {
			println!("{} Backport issue references upstream PR.", PASS);
		}
		CrossRefVerdict::CommitReference { sha } => {
			println!("{} Backport issue references upstream commit: {}", PASS, sha);
		}
		CrossRefVerdict::NoTrackingIssue { description } => {
			println!("{} No backport issue found in:", FAIL);
			println!("{}", description);
		}
		CrossRefVerdict::Unreferenced { body } => {
			println!("{} Backport issue does not reference upstream PR:", FAIL);
			println!("{}", body);
		}
	}
}
