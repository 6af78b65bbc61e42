// SPDX-License-Identifier: Apache-2.0

//! The review orchestrator: sequences the three checks for each PR.

pub mod crossref;
pub mod diff;
pub mod extract;
pub mod provenance;
pub mod report;

use crate::{config::Config, data::PullRequest, forge::Forge};
use anyhow::{Context, Result};
use crossref::{CrossRefResolver, CrossRefVerdict};
use diff::DiffVerdict;
use extract::ReferenceExtractor;
use provenance::ProvenanceReport;

/// The outcome of reviewing one backport pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullReview {
	/// The PR body does not reference an upstream PR. The remaining checks
	/// are meaningless without one, so none of them ran.
	UnresolvedUpstream { description: String },

	/// All three checks ran against the resolved upstream PR.
	Checked {
		upstream_number: u64,
		diff: DiffVerdict,
		provenance: ProvenanceReport,
		crossref: CrossRefVerdict,
	},
}

/// Reviews backport PRs against their upstream counterparts.
pub struct Reviewer<'a, F> {
	forge: &'a F,
	config: &'a Config,
	extractor: ReferenceExtractor,
	resolver: CrossRefResolver,
}

impl<'a, F: Forge> Reviewer<'a, F> {
	/// Construct a reviewer for the configured repository pair.
	pub fn new(forge: &'a F, config: &'a Config) -> Result<Reviewer<'a, F>> {
		let extractor =
			ReferenceExtractor::new(&config.upstream_repository, &config.repository)?;
		let resolver = CrossRefResolver::new(&config.upstream_repository)?;

		Ok(Reviewer {
			forge,
			config,
			extractor,
			resolver,
		})
	}

	/// Review the configured target: one PR, or every open PR.
	///
	/// In all-open mode a failure reviewing one PR is reported and does
	/// not abort the remaining reviews.
	pub fn run(&self) -> Result<()> {
		match self.config.pull_request {
			Some(number) => {
				let pr = self
					.forge
					.pull_request(&self.config.repository, number)
					.with_context(|| format!("failed to fetch PR #{}", number))?;

				report::render(&self.review(&pr)?);
			}
			None => {
				for pr in self.forge.open_pull_requests(&self.config.repository)? {
					println!("Reviewing PR: {}", pr.html_url);

					match self.review(&pr) {
						Ok(review) => report::render(&review),
						Err(error) => {
							log::error!(
								"review of PR #{} failed [err='{:#}']",
								pr.number,
								error
							);
							report::render_failure(&error);
						}
					}
				}
			}
		}

		Ok(())
	}

	/// Run the three checks for one backport PR.
	///
	/// Fails if the resolved upstream PR or the tracking issue cannot be
	/// fetched, which makes the whole review for this PR moot; a missing
	/// diff is only a verdict.
	pub fn review(&self, pr: &PullRequest) -> Result<PullReview> {
		log::debug!("reviewing backport PR [pr='{}#{}']", pr.repo, pr.number);

		let Some(upstream_number) = self.extractor.upstream_pull_number(&pr.body) else {
			return Ok(PullReview::UnresolvedUpstream {
				description: pr.body.clone(),
			});
		};

		let upstream = self
			.forge
			.pull_request(&self.config.upstream_repository, upstream_number)
			.with_context(|| {
				format!(
					"failed to fetch upstream PR {}#{}",
					self.config.upstream_repository, upstream_number
				)
			})?;

		let diff = self.compare_diffs(pr, &upstream);
		let provenance = provenance::reconcile(&pr.commits, &upstream.commits);
		let crossref = self.check_tracking_issue(pr, &upstream)?;

		Ok(PullReview::Checked {
			upstream_number,
			diff,
			provenance,
			crossref,
		})
	}

	/// Fetch both diffs and compare them.
	///
	/// A fetch failure here is a verdict, not an error, since it concerns
	/// only this one check.
	fn compare_diffs(&self, pr: &PullRequest, upstream: &PullRequest) -> DiffVerdict {
		let fetched = self.forge.diff(pr).and_then(|ours| {
			let theirs = self.forge.diff(upstream)?;
			Ok((ours, theirs))
		});

		match fetched {
			Ok((ours, theirs)) => diff::compare(&ours, &theirs),
			Err(error) => DiffVerdict::FetchError {
				error: format!("{:#}", error),
			},
		}
	}

	/// Resolve and check the backport's tracking issue.
	///
	/// A missing tracking-issue link is a verdict; a failure fetching a
	/// linked issue propagates, aborting this PR's review.
	fn check_tracking_issue(
		&self,
		pr: &PullRequest,
		upstream: &PullRequest,
	) -> Result<CrossRefVerdict> {
		let Some(issue_number) = self.extractor.tracking_issue_number(&pr.body) else {
			return Ok(CrossRefVerdict::NoTrackingIssue {
				description: pr.body.clone(),
			});
		};

		let issue = self
			.forge
			.issue(&self.config.repository, issue_number)
			.with_context(|| format!("failed to fetch issue #{}", issue_number))?;

		log::debug!("checking tracking issue [issue='#{}']", issue.number);

		Ok(self
			.resolver
			.resolve(&issue.body, upstream.number, &pr.commits))
	}
}
