// SPDX-License-Identifier: Apache-2.0

//! GitHub implementation of the forge query contract.

mod rest;
mod types;

use crate::{
	data::{Commit, Issue, PullRequest},
	forge::Forge,
	http::authenticated_agent::AuthenticatedAgent,
};
use anyhow::{Context, Result};

/// A GitHub client scoped to one token (or to anonymous access).
pub struct GitHub<'token> {
	agent: AuthenticatedAgent<'token>,
}

impl<'token> GitHub<'token> {
	/// Construct a new client.
	///
	/// Fails if the TLS configuration for the underlying agent cannot be
	/// initialized; that failure is fatal to the whole run.
	pub fn new(token: Option<&'token str>) -> Result<GitHub<'token>> {
		Ok(GitHub {
			agent: AuthenticatedAgent::new(token)
				.context("failed to initialize GitHub client")?,
		})
	}

	/// Turn a raw PR payload into a domain PR by fetching its commits.
	fn complete_pull_request(
		&self,
		repo: &str,
		raw: types::RawPullRequest,
	) -> Result<PullRequest> {
		let commits = rest::pull_request_commits(&self.agent, repo, raw.number)?
			.into_iter()
			.map(|raw| Commit {
				sha: raw.sha,
				message: raw.commit.message,
				html_url: raw.html_url,
			})
			.collect();

		Ok(PullRequest {
			repo: repo.to_owned(),
			number: raw.number,
			body: raw.body.unwrap_or_default(),
			commits,
			diff_url: raw.diff_url,
			html_url: raw.html_url,
		})
	}
}

impl Forge for GitHub<'_> {
	fn open_pull_requests(&self, repo: &str) -> Result<Vec<PullRequest>> {
		rest::open_pull_requests(&self.agent, repo)?
			.into_iter()
			.map(|raw| self.complete_pull_request(repo, raw))
			.collect()
	}

	fn pull_request(&self, repo: &str, number: u64) -> Result<PullRequest> {
		let raw = rest::pull_request(&self.agent, repo, number)?;
		self.complete_pull_request(repo, raw)
	}

	fn issue(&self, repo: &str, number: u64) -> Result<Issue> {
		let raw = rest::issue(&self.agent, repo, number)?;

		Ok(Issue {
			number: raw.number,
			body: raw.body.unwrap_or_default(),
		})
	}

	fn diff(&self, pr: &PullRequest) -> Result<String> {
		rest::diff(&self.agent, pr.diff_url.as_str())
	}
}
