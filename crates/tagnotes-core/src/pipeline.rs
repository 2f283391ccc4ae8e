// SPDX-License-Identifier: Apache-2.0

//! End-to-end release-notes publication for one tag.
//!
//! Steps, strictly sequential:
//! 1. Ensure the release exists (create on 404).
//! 2. Resolve the previous release in the same line.
//! 3. Compare the previous tag (or the beginning of history) with the tag.
//! 4. Collect pull requests per commit, filter by label, render.
//! 5. Update the release body.
//!
//! Any failure aborts the run. A failure between steps 1 and 5 can leave a
//! freshly created release with an empty body; re-running fills it in.

use serde::Serialize;
use tracing::{info, instrument};

use crate::changelog::{LabelFilter, render_changelog};
use crate::collector::collect_pull_requests;
use crate::github::gateway::RepositoryGateway;
use crate::model::{NewRelease, PullRequest, Release, Tag};
use crate::range::{CompareBase, expand_range};
use crate::resolver::{PageOptions, find_previous_release};
use crate::upsert::{ensure_release, find_release, publish_notes};

/// Inputs for one publication run.
#[derive(Debug, Clone, bon::Builder)]
pub struct PublishRequest {
    /// Release tag to publish notes for.
    #[builder(into)]
    pub tag: Tag,
    /// Inclusion label; empty includes every pull request.
    #[builder(into, default)]
    pub label: String,
    /// Commitish to create the tag from when the release does not exist.
    pub target: Option<String>,
    /// Discussion category for newly created releases.
    pub discussion_category: Option<String>,
    /// Release listing pagination.
    #[builder(default)]
    pub pages: PageOptions,
    /// Compute the notes without creating or updating anything.
    #[builder(default)]
    pub dry_run: bool,
}

impl PublishRequest {
    fn new_release(&self) -> NewRelease {
        NewRelease::for_tag(&self.tag)
            .with_target(self.target.clone())
            .with_discussion_category(self.discussion_category.clone())
    }
}

/// What happened to the release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishAction {
    /// The release was created, then its notes written.
    Created,
    /// An existing release had its notes rewritten.
    Updated,
    /// Nothing was written.
    DryRun,
}

impl std::fmt::Display for PublishAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublishAction::Created => write!(f, "created"),
            PublishAction::Updated => write!(f, "updated"),
            PublishAction::DryRun => write!(f, "dry run"),
        }
    }
}

/// Result of a publication run.
#[derive(Debug, Clone, Serialize)]
pub struct PublishOutcome {
    /// Release tag.
    pub tag: String,
    /// What happened to the release.
    pub action: PublishAction,
    /// Previous release in the same line, if any.
    pub previous_tag: Option<String>,
    /// Base reference used for the comparison.
    pub compare_base: CompareBase,
    /// Commits in the compared range.
    pub commits: usize,
    /// Pull requests found before filtering.
    pub pulls_collected: usize,
    /// Pull requests included in the notes.
    pub pulls: Vec<PullRequest>,
    /// Inclusion label.
    pub label: String,
    /// Release id, when the release exists.
    pub release_id: Option<u64>,
    /// Release web URL, when known.
    pub release_url: Option<String>,
    /// Rendered release notes.
    pub body: String,
}

struct Notes {
    previous_tag: Option<String>,
    compare_base: CompareBase,
    commits: usize,
    pulls_collected: usize,
    pulls: Vec<PullRequest>,
    body: String,
}

impl PublishOutcome {
    fn new(
        request: &PublishRequest,
        action: PublishAction,
        release: Option<&Release>,
        notes: Notes,
    ) -> Self {
        Self {
            tag: request.tag.to_string(),
            action,
            previous_tag: notes.previous_tag,
            compare_base: notes.compare_base,
            commits: notes.commits,
            pulls_collected: notes.pulls_collected,
            pulls: notes.pulls,
            label: request.label.clone(),
            release_id: release.map(|r| r.id),
            release_url: release.and_then(|r| r.html_url.clone()),
            body: notes.body,
        }
    }
}

/// Publishes label-filtered release notes for `request.tag`.
///
/// With `dry_run` set, no release is created or updated.
#[instrument(skip(gateway, request), fields(tag = %request.tag, label = %request.label, dry_run = request.dry_run))]
pub async fn run(
    gateway: &dyn RepositoryGateway,
    request: &PublishRequest,
) -> crate::Result<PublishOutcome> {
    if request.dry_run {
        return preview(gateway, request).await;
    }

    let ensured = ensure_release(gateway, &request.tag, request.new_release()).await?;
    let notes = build_notes(gateway, request, Some(&ensured.release)).await?;
    let updated = publish_notes(gateway, &ensured.release, &notes.body).await?;

    let action = if ensured.created {
        PublishAction::Created
    } else {
        PublishAction::Updated
    };
    info!(%action, included = notes.pulls.len(), "Published release notes");
    Ok(PublishOutcome::new(request, action, Some(&updated), notes))
}

async fn preview(
    gateway: &dyn RepositoryGateway,
    request: &PublishRequest,
) -> crate::Result<PublishOutcome> {
    let existing = find_release(gateway, &request.tag).await?;
    let notes = build_notes(gateway, request, existing.as_ref()).await?;
    info!(included = notes.pulls.len(), "Computed release notes (dry run)");
    Ok(PublishOutcome::new(
        request,
        PublishAction::DryRun,
        existing.as_ref(),
        notes,
    ))
}

async fn build_notes(
    gateway: &dyn RepositoryGateway,
    request: &PublishRequest,
    release: Option<&Release>,
) -> crate::Result<Notes> {
    let previous = find_previous_release(gateway, &request.tag, request.pages).await?;

    let compare_base = match &previous {
        Some(prev) => CompareBase::Tag(prev.tag_name.clone()),
        None => {
            let commitish = release
                .map(|r| r.target_commitish.clone())
                .or_else(|| request.target.clone())
                .unwrap_or_else(|| request.tag.to_string());
            CompareBase::BeginningOfHistory(commitish)
        }
    };

    let head = release.map_or(request.tag.as_str(), |r| r.tag_name.as_str());
    let range = expand_range(gateway, &compare_base, head).await?;
    let collected = collect_pull_requests(gateway, &range).await?;
    let pulls_collected = collected.len();
    let pulls = LabelFilter::new(request.label.as_str()).apply(collected);
    let body = render_changelog(&pulls);

    Ok(Notes {
        previous_tag: previous.map(|p| p.tag_name),
        compare_base,
        commits: range.len(),
        pulls_collected,
        pulls,
        body,
    })
}
