// SPDX-License-Identifier: Apache-2.0

//! Pull request collection for a commit range.

use tracing::{debug, instrument};

use crate::github::gateway::RepositoryGateway;
use crate::model::{CommitRange, PullRequest};

/// Looks up the pull requests associated with each commit in `range`.
///
/// Lookups run one commit at a time in commit order, and the result keeps
/// that order. A PR reachable from several commits appears once per commit.
#[instrument(skip(gateway, range), fields(commits = range.len()))]
pub async fn collect_pull_requests(
    gateway: &dyn RepositoryGateway,
    range: &CommitRange,
) -> crate::Result<Vec<PullRequest>> {
    let mut pulls = Vec::new();

    for commit in &range.commits {
        let commit_pulls = gateway.pull_requests_for_commit(&commit.sha).await?;
        debug!(sha = %commit.sha, count = commit_pulls.len(), "Fetched pulls for commit");
        pulls.extend(commit_pulls);
    }

    Ok(pulls)
}
