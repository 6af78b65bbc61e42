// SPDX-License-Identifier: Apache-2.0

//! Extraction of upstream-PR and tracking-issue references from free text.
//!
//! All extraction is anchored to a configured repository slug; a link to
//! any other repository never matches. Absence of a reference is a normal
//! `None`, not an error.

use anyhow::Result;
use regex::Regex;

/// Compiled reference patterns for one upstream/tracking repository pair.
pub struct ReferenceExtractor {
	/// Matches `https://github.com/<upstream>/pull/<digits>`.
	upstream_pull: Regex,

	/// Matches `https://github.com/<tracking>/issues/<digits>`.
	tracking_issue: Regex,
}

impl ReferenceExtractor {
	/// Build the patterns for the given repository slugs.
	pub fn new(upstream_repo: &str, tracking_repo: &str) -> Result<ReferenceExtractor> {
		let upstream_pull = Regex::new(&format!(
			r"https://github\.com/{}/pull/([0-9]+)",
			regex::escape(upstream_repo)
		))?;

		let tracking_issue = Regex::new(&format!(
			r"https://github\.com/{}/issues/([0-9]+)",
			regex::escape(tracking_repo)
		))?;

		Ok(ReferenceExtractor {
			upstream_pull,
			tracking_issue,
		})
	}

	/// Find the upstream PR number in a PR description.
	///
	/// Only the first match in document order is used; further candidate
	/// references are not disambiguated.
	pub fn upstream_pull_number(&self, description: &str) -> Option<u64> {
		first_number(&self.upstream_pull, description)
	}

	/// Find the tracking issue number in a PR description.
	///
	/// Only the first match in document order is used.
	pub fn tracking_issue_number(&self, description: &str) -> Option<u64> {
		first_number(&self.tracking_issue, description)
	}
}

/// The first capture of `pattern` in `text`, parsed as a number.
fn first_number(pattern: &Regex, text: &str) -> Option<u64> {
	pattern.captures(text)?.get(1)?.as_str().parse().ok()
}

#[cfg(test)]
mod test {
	use super::*;

	fn extractor() -> ReferenceExtractor {
		ReferenceExtractor::new("oracle/graal", "graalvm/graalvm-community-jdk21u").unwrap()
	}

	#[test]
	fn finds_upstream_pull_number() {
		let body =
			"This backports https://github.com/oracle/graal/pull/12345 for the next release.";
		assert_eq!(extractor().upstream_pull_number(body), Some(12345));
	}

	#[test]
	fn first_upstream_match_wins() {
		let body = "Combines https://github.com/oracle/graal/pull/100 \
			and https://github.com/oracle/graal/pull/200.";
		assert_eq!(extractor().upstream_pull_number(body), Some(100));
	}

	#[test]
	fn other_repository_never_matches() {
		let body = "See https://github.com/oracle/labs/pull/99 \
			and https://github.com/graalvm/graal/pull/7.";
		assert_eq!(extractor().upstream_pull_number(body), None);
	}

	#[test]
	fn finds_tracking_issue_number() {
		let body = "Fixes https://github.com/graalvm/graalvm-community-jdk21u/issues/321";
		assert_eq!(extractor().tracking_issue_number(body), Some(321));
	}

	#[test]
	fn issue_link_is_not_a_pull_link() {
		let body = "Fixes https://github.com/graalvm/graalvm-community-jdk21u/issues/321";
		assert_eq!(extractor().upstream_pull_number(body), None);
	}

	#[test]
	fn missing_reference_is_none() {
		assert_eq!(extractor().upstream_pull_number("no links here"), None);
		assert_eq!(extractor().tracking_issue_number("no links here"), None);
	}

	#[test]
	fn punctuation_in_slug_is_escaped() {
		// A dot in the slug must not act as a regex wildcard.
		let extractor = ReferenceExtractor::new("some/repo.name", "some/tracker").unwrap();
		let body = "https://github.com/some/repoXname/pull/5";
		assert_eq!(extractor.upstream_pull_number(body), None);
	}
}
