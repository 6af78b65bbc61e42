// SPDX-License-Identifier: Apache-2.0

//! Calls against the GitHub REST API.

use crate::{
	github::types::{RawCommit, RawIssue, RawPullRequest},
	http::authenticated_agent::AuthenticatedAgent,
};
use anyhow::{Context, Result};

/// Base url for the GitHub REST API.
const API_BASE: &str = "https://api.github.com";

/// Page size for paginated list endpoints.
const PER_PAGE: usize = 100;

/// List all open pull requests in a repository.
pub fn open_pull_requests(
	agent: &AuthenticatedAgent<'_>,
	repo: &str,
) -> Result<Vec<RawPullRequest>> {
	let mut pulls = Vec::new();

	for page in 1.. {
		let url = format!(
			"{}/repos/{}/pulls?state=open&per_page={}&page={}",
			API_BASE, repo, PER_PAGE, page
		);
		log::debug!("listing open pull requests [url='{}']", url);

		let batch: Vec<RawPullRequest> = agent
			.get(&url)
			.call()
			.with_context(|| format!("failed to list open pull requests for {}", repo))?
			.into_json()
			.context("unable to parse pull request list")?;

		let last_page = batch.len() < PER_PAGE;
		pulls.extend(batch);

		if last_page {
			break;
		}
	}

	Ok(pulls)
}

/// Get a single pull request.
pub fn pull_request(
	agent: &AuthenticatedAgent<'_>,
	repo: &str,
	number: u64,
) -> Result<RawPullRequest> {
	let url = format!("{}/repos/{}/pulls/{}", API_BASE, repo, number);

	agent
		.get(&url)
		.call()
		.with_context(|| format!("failed to get pull request {}#{}", repo, number))?
		.into_json()
		.context("unable to parse pull request")
}

/// List the commits on a pull request, in the order the forge returns them.
pub fn pull_request_commits(
	agent: &AuthenticatedAgent<'_>,
	repo: &str,
	number: u64,
) -> Result<Vec<RawCommit>> {
	let mut commits = Vec::new();

	for page in 1.. {
		let url = format!(
			"{}/repos/{}/pulls/{}/commits?per_page={}&page={}",
			API_BASE, repo, number, PER_PAGE, page
		);

		let batch: Vec<RawCommit> = agent
			.get(&url)
			.call()
			.with_context(|| format!("failed to list commits for {}#{}", repo, number))?
			.into_json()
			.context("unable to parse commit list")?;

		let last_page = batch.len() < PER_PAGE;
		commits.extend(batch);

		if last_page {
			break;
		}
	}

	Ok(commits)
}

/// Get a single issue.
pub fn issue(agent: &AuthenticatedAgent<'_>, repo: &str, number: u64) -> Result<RawIssue> {
	let url = format!("{}/repos/{}/issues/{}", API_BASE, repo, number);

	agent
		.get(&url)
		.call()
		.with_context(|| format!("failed to get issue {}#{}", repo, number))?
		.into_json()
		.context("unable to parse issue")
}

/// Fetch a raw unified diff.
pub fn diff(agent: &AuthenticatedAgent<'_>, url: &str) -> Result<String> {
	log::trace!("diff url is '{}'", url);

	agent
		.get(url)
		.call()
		.with_context(|| format!("failed to fetch diff from {}", url))?
		.into_string()
		.context("unable to read diff body")
}
