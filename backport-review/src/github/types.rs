// SPDX-License-Identifier: Apache-2.0

//! Wire types for the GitHub REST payloads we consume.
//!
//! Only the fields the review checks actually use are deserialized; the
//! rest of each payload is ignored.

use serde::Deserialize;
use url::Url;

/// A pull request as returned by `GET /repos/{repo}/pulls/{number}` and
/// by the open-PR list endpoint.
#[derive(Debug, Deserialize)]
pub struct RawPullRequest {
	pub number: u64,
	pub body: Option<String>,
	pub diff_url: Url,
	pub html_url: Url,
}

/// One entry of `GET /repos/{repo}/pulls/{number}/commits`.
#[derive(Debug, Deserialize)]
pub struct RawCommit {
	pub sha: String,
	pub html_url: Url,
	pub commit: RawCommitDetail,
}

/// The nested `commit` object carrying the message.
#[derive(Debug, Deserialize)]
pub struct RawCommitDetail {
	pub message: String,
}

/// An issue as returned by `GET /repos/{repo}/issues/{number}`.
#[derive(Debug, Deserialize)]
pub struct RawIssue {
	pub number: u64,
	pub body: Option<String>,
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn parses_pull_request_payload() {
		let payload = r#"{
			"number": 42,
			"state": "open",
			"title": "Backport something",
			"body": "Backport of https://github.com/oracle/graal/pull/12345",
			"diff_url": "https://github.com/graalvm/graalvm-community-jdk21u/pull/42.diff",
			"html_url": "https://github.com/graalvm/graalvm-community-jdk21u/pull/42"
		}"#;

		let pr: RawPullRequest = serde_json::from_str(payload).unwrap();

		assert_eq!(pr.number, 42);
		assert!(pr.body.unwrap().contains("oracle/graal/pull/12345"));
	}

	#[test]
	fn parses_pull_request_with_null_body() {
		let payload = r#"{
			"number": 7,
			"body": null,
			"diff_url": "https://github.com/graalvm/graalvm-community-jdk21u/pull/7.diff",
			"html_url": "https://github.com/graalvm/graalvm-community-jdk21u/pull/7"
		}"#;

		let pr: RawPullRequest = serde_json::from_str(payload).unwrap();

		assert_eq!(pr.body, None);
	}

	#[test]
	fn parses_commit_list_entry() {
		let payload = r#"[{
			"sha": "1df54290d8cd8a0f29d59dbca9a48e9cfc516ab8",
			"html_url": "https://github.com/graalvm/graalvm-community-jdk21u/commit/1df54290d8cd8a0f29d59dbca9a48e9cfc516ab8",
			"commit": {
				"message": "Fix a thing.\n\n(cherry picked from commit 04e2a327c7fbbf2a120bfadebea45e5965a235b4)"
			}
		}]"#;

		let commits: Vec<RawCommit> = serde_json::from_str(payload).unwrap();

		assert_eq!(commits.len(), 1);
		assert_eq!(commits[0].sha, "1df54290d8cd8a0f29d59dbca9a48e9cfc516ab8");
		assert!(commits[0].commit.message.contains("cherry picked"));
	}
}
