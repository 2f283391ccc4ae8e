// SPDX-License-Identifier: Apache-2.0

//! Typed access to the GitHub REST endpoints the pipeline needs.
//!
//! [`RepositoryGateway`] is the seam between the release-notes logic and the
//! network. [`OctocrabGateway`] implements it over an authenticated
//! `Octocrab` client scoped to one repository.

use async_trait::async_trait;
use octocrab::Octocrab;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::TagnotesError;
use crate::model::{Commit, CommitRange, NewRelease, PullRequest, Release, ReleaseUpdate};

/// Characters left unescaped in a single URL path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Commits requested per compare page.
const COMPARE_PAGE_SIZE: u8 = 100;

/// Upper bound on compare pages fetched for one range.
const MAX_COMPARE_PAGES: u32 = 100;

/// Repository-scoped GitHub operations.
///
/// Every method maps HTTP 404 to [`TagnotesError::NotFound`]; all other
/// failures surface as [`TagnotesError::GitHub`].
#[async_trait]
pub trait RepositoryGateway: Send + Sync {
    /// Fetches the release for `tag`.
    async fn get_release(&self, tag: &str) -> crate::Result<Release>;

    /// Lists one page of releases, most recent first.
    ///
    /// An empty page marks the end of the listing.
    async fn list_releases(&self, page: u32, per_page: u8) -> crate::Result<Vec<Release>>;

    /// Creates a release.
    async fn create_release(&self, release: &NewRelease) -> crate::Result<Release>;

    /// Updates an existing release.
    async fn update_release(&self, update: &ReleaseUpdate) -> crate::Result<Release>;

    /// Lists the commits reachable from `head` but not from `base`.
    ///
    /// Implementations return the whole range, not a single page.
    async fn compare_commits(&self, base: &str, head: &str) -> crate::Result<CommitRange>;

    /// Lists the pull requests associated with a commit.
    async fn pull_requests_for_commit(&self, sha: &str) -> crate::Result<Vec<PullRequest>>;
}

/// `RepositoryGateway` backed by octocrab.
pub struct OctocrabGateway {
    client: Octocrab,
    owner: String,
    repo: String,
}

impl OctocrabGateway {
    /// Creates a gateway for `owner/repo`.
    pub fn new(client: Octocrab, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    fn route(&self, tail: &str) -> String {
        format!("/repos/{}/{}/{tail}", self.owner, self.repo)
    }
}

/// Percent-encodes a value for use as one path segment.
#[must_use]
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[derive(Serialize)]
struct PageParams {
    per_page: u8,
    page: u32,
}

#[derive(Deserialize)]
struct CompareResponse {
    #[serde(default)]
    total_commits: Option<usize>,
    #[serde(default)]
    commits: Vec<Commit>,
}

#[derive(Deserialize)]
struct PullResponse {
    number: u64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    labels: Vec<LabelResponse>,
    #[serde(default)]
    user: Option<UserResponse>,
    #[serde(default)]
    html_url: Option<String>,
}

#[derive(Deserialize)]
struct LabelResponse {
    name: String,
}

#[derive(Deserialize)]
struct UserResponse {
    login: String,
}

impl From<PullResponse> for PullRequest {
    fn from(pr: PullResponse) -> Self {
        PullRequest {
            number: pr.number,
            title: pr.title.unwrap_or_default(),
            labels: pr.labels.into_iter().map(|l| l.name).collect(),
            author: pr.user.map(|u| u.login).unwrap_or_default(),
            url: pr.html_url.unwrap_or_default(),
        }
    }
}

#[async_trait]
impl RepositoryGateway for OctocrabGateway {
    #[instrument(skip(self), fields(owner = %self.owner, repo = %self.repo))]
    async fn get_release(&self, tag: &str) -> crate::Result<Release> {
        let route = self.route(&format!("releases/tags/{}", encode_segment(tag)));
        self.client
            .get(&route, None::<&()>)
            .await
            .map_err(|e| TagnotesError::from_octocrab(e, format!("release {tag}")))
    }

    #[instrument(skip(self), fields(owner = %self.owner, repo = %self.repo))]
    async fn list_releases(&self, page: u32, per_page: u8) -> crate::Result<Vec<Release>> {
        let route = self.route("releases");
        let params = PageParams { per_page, page };
        let releases: Vec<Release> = self
            .client
            .get(&route, Some(&params))
            .await
            .map_err(|e| TagnotesError::from_octocrab(e, format!("releases page {page}")))?;
        debug!(count = releases.len(), "Fetched release page");
        Ok(releases)
    }

    #[instrument(skip(self, release), fields(owner = %self.owner, repo = %self.repo, tag = %release.tag_name))]
    async fn create_release(&self, release: &NewRelease) -> crate::Result<Release> {
        let route = self.route("releases");
        let resource = format!("repository {}/{}", self.owner, self.repo);
        self.client
            .post(&route, Some(release))
            .await
            .map_err(|e| TagnotesError::from_octocrab(e, resource))
    }

    #[instrument(skip(self, update), fields(owner = %self.owner, repo = %self.repo, id = update.id()))]
    async fn update_release(&self, update: &ReleaseUpdate) -> crate::Result<Release> {
        let route = self.route(&format!("releases/{}", update.id()));
        self.client
            .patch(&route, Some(update))
            .await
            .map_err(|e| TagnotesError::from_octocrab(e, format!("release id {}", update.id())))
    }

    #[instrument(skip(self), fields(owner = %self.owner, repo = %self.repo))]
    async fn compare_commits(&self, base: &str, head: &str) -> crate::Result<CommitRange> {
        // GET /repos/{owner}/{repo}/compare/{base}...{head}
        let route = self.route(&format!(
            "compare/{}...{}",
            encode_segment(base),
            encode_segment(head)
        ));
        let mut commits = Vec::new();
        let mut page = 1;
        loop {
            let params = PageParams {
                per_page: COMPARE_PAGE_SIZE,
                page,
            };
            let comparison: CompareResponse = self
                .client
                .get(&route, Some(&params))
                .await
                .map_err(|e| {
                    TagnotesError::from_octocrab(e, format!("comparison {base}...{head}"))
                })?;
            let fetched = comparison.commits.len();
            commits.extend(comparison.commits);
            debug!(page, fetched, total = ?comparison.total_commits, "Fetched compare page");

            let complete = comparison
                .total_commits
                .is_some_and(|total| commits.len() >= total);
            if complete || fetched < usize::from(COMPARE_PAGE_SIZE) {
                break;
            }
            if page >= MAX_COMPARE_PAGES {
                return Err(TagnotesError::PaginationLimit {
                    listing: "Commit comparison",
                    max_pages: MAX_COMPARE_PAGES,
                });
            }
            page += 1;
        }
        debug!(commits = commits.len(), "Compared references");
        Ok(CommitRange { commits })
    }

    #[instrument(skip(self), fields(owner = %self.owner, repo = %self.repo))]
    async fn pull_requests_for_commit(&self, sha: &str) -> crate::Result<Vec<PullRequest>> {
        let route = self.route(&format!("commits/{}/pulls", encode_segment(sha)));
        let pulls: Vec<PullResponse> = self
            .client
            .get(&route, None::<&()>)
            .await
            .map_err(|e| TagnotesError::from_octocrab(e, format!("commit {sha}")))?;
        Ok(pulls.into_iter().map(PullRequest::from).collect())
    }
}
