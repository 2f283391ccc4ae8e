// SPDX-License-Identifier: Apache-2.0

//! In-memory `RepositoryGateway` for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::TagnotesError;
use crate::github::gateway::RepositoryGateway;
use crate::model::{Commit, CommitRange, NewRelease, PullRequest, Release, ReleaseUpdate};

/// A recorded gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetRelease(String),
    ListReleases(u32),
    Create(NewRelease),
    Update(ReleaseUpdate),
    Compare(String, String),
    Pulls(String),
}

/// Fake repository backed by vectors and maps.
#[derive(Default)]
pub struct FakeGateway {
    /// Releases in listing order (most recent first).
    pub releases: Mutex<Vec<Release>>,
    /// Page size override for listings; `None` honours the requested size.
    pub forced_page_size: Option<usize>,
    /// Never return an empty page.
    pub endless_listing: bool,
    /// Fail `get_release` with a non-404 error.
    pub fail_get_release: bool,
    /// Fail `list_releases` with a 404.
    pub list_not_found: bool,
    /// Commits returned by `compare_commits`, keyed by `base...head`.
    pub comparisons: HashMap<String, Vec<&'static str>>,
    /// Pull requests per commit SHA.
    pub pulls: HashMap<&'static str, Vec<PullRequest>>,
    /// Page number answered with an empty page regardless of content.
    pub empty_page: Option<u32>,
    /// Every call in order.
    pub calls: Mutex<Vec<Call>>,
    pub next_id: Mutex<u64>,
}

impl FakeGateway {
    pub fn with_releases(releases: Vec<Release>) -> Self {
        Self {
            releases: Mutex::new(releases),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Create(_) | Call::Update(_)))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn release(id: u64, tag: &str) -> Release {
    Release {
        id,
        name: Some(tag.to_string()),
        tag_name: tag.to_string(),
        target_commitish: "main".to_string(),
        body: None,
        draft: false,
        prerelease: false,
        html_url: Some(format!("https://github.com/o/r/releases/tag/{tag}")),
    }
}

pub fn pull(number: u64, title: &str, labels: &[&str]) -> PullRequest {
    PullRequest {
        number,
        title: title.to_string(),
        labels: labels.iter().map(ToString::to_string).collect(),
        author: "octocat".to_string(),
        url: format!("https://github.com/o/r/pull/{number}"),
    }
}

#[async_trait]
impl RepositoryGateway for FakeGateway {
    async fn get_release(&self, tag: &str) -> crate::Result<Release> {
        self.record(Call::GetRelease(tag.to_string()));
        if self.fail_get_release {
            return Err(TagnotesError::GitHub {
                message: "Server Error".to_string(),
                status: Some(500),
            });
        }
        self.releases
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.tag_name == tag)
            .cloned()
            .ok_or_else(|| TagnotesError::NotFound {
                resource: format!("release {tag}"),
            })
    }

    async fn list_releases(&self, page: u32, per_page: u8) -> crate::Result<Vec<Release>> {
        self.record(Call::ListReleases(page));
        if self.list_not_found {
            return Err(TagnotesError::NotFound {
                resource: "releases".to_string(),
            });
        }
        let releases = self.releases.lock().unwrap();
        if self.endless_listing {
            return Ok(vec![release(u64::from(page), &format!("other/{page}"))]);
        }
        if self.empty_page == Some(page) {
            return Ok(Vec::new());
        }
        let size = self.forced_page_size.unwrap_or(usize::from(per_page));
        let start = (page as usize - 1) * size;
        Ok(releases.iter().skip(start).take(size).cloned().collect())
    }

    async fn create_release(&self, new: &NewRelease) -> crate::Result<Release> {
        self.record(Call::Create(new.clone()));
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let created = Release {
            id: 1000 + *next_id,
            name: Some(new.name.clone()),
            tag_name: new.tag_name.clone(),
            target_commitish: new
                .target_commitish
                .clone()
                .unwrap_or_else(|| "main".to_string()),
            body: None,
            draft: new.draft,
            prerelease: new.prerelease,
            html_url: Some(format!(
                "https://github.com/o/r/releases/tag/{}",
                new.tag_name
            )),
        };
        self.releases.lock().unwrap().insert(0, created.clone());
        Ok(created)
    }

    async fn update_release(&self, update: &ReleaseUpdate) -> crate::Result<Release> {
        self.record(Call::Update(update.clone()));
        let mut releases = self.releases.lock().unwrap();
        let existing = releases
            .iter_mut()
            .find(|r| r.id == update.id())
            .ok_or_else(|| TagnotesError::NotFound {
                resource: format!("release id {}", update.id()),
            })?;
        existing.name = Some(update.name().to_string());
        existing.body = Some(update.body().to_string());
        existing.target_commitish = update.target_commitish().to_string();
        existing.draft = false;
        existing.prerelease = false;
        Ok(existing.clone())
    }

    async fn compare_commits(&self, base: &str, head: &str) -> crate::Result<CommitRange> {
        self.record(Call::Compare(base.to_string(), head.to_string()));
        let key = format!("{base}...{head}");
        let shas = self
            .comparisons
            .get(&key)
            .ok_or_else(|| TagnotesError::NotFound {
                resource: format!("comparison {key}"),
            })?;
        Ok(CommitRange {
            commits: shas
                .iter()
                .map(|sha| Commit {
                    sha: (*sha).to_string(),
                })
                .collect(),
        })
    }

    async fn pull_requests_for_commit(&self, sha: &str) -> crate::Result<Vec<PullRequest>> {
        self.record(Call::Pulls(sha.to_string()));
        Ok(self.pulls.get(sha).cloned().unwrap_or_default())
    }
}
