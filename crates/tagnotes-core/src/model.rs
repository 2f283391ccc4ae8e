// SPDX-License-Identifier: Apache-2.0

//! Domain types shared by the release-notes pipeline.
//!
//! Read models ([`Release`], [`PullRequest`], [`CommitRange`]) mirror what
//! GitHub returns. Write models ([`NewRelease`], [`ReleaseUpdate`]) are what
//! we send back. `ReleaseUpdate` can only be built from a `Release`, so the
//! release id and target commitish always come from the remote resource.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between a release line prefix and the rest of a tag.
pub const TAG_SEPARATOR: char = '/';

/// A release tag such as `v1/2.0.0` or `2.0.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Wraps a tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the tag name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the release line prefix, including the trailing `/`.
    ///
    /// Tags without a `/` have an empty prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        tag_prefix(&self.0)
    }

    /// Returns true if `other` belongs to the same release line.
    ///
    /// Two tags share a line iff their prefixes are equal, so bare tags only
    /// match bare tags.
    #[must_use]
    pub fn same_line(&self, other: &str) -> bool {
        tag_prefix(other) == self.prefix()
    }
}

/// Substring of `tag` up to and including the first `/`, or `""`.
#[must_use]
pub fn tag_prefix(tag: &str) -> &str {
    match tag.find(TAG_SEPARATOR) {
        Some(idx) => &tag[..=idx],
        None => "",
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A release as returned by GitHub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Remote identifier.
    pub id: u64,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Tag name.
    pub tag_name: String,
    /// Branch or commit the tag points at.
    pub target_commitish: String,
    /// Release notes.
    #[serde(default)]
    pub body: Option<String>,
    /// Draft flag.
    #[serde(default)]
    pub draft: bool,
    /// Prerelease flag.
    #[serde(default)]
    pub prerelease: bool,
    /// Web URL of the release.
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Request body for creating a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRelease {
    /// Tag to create the release for.
    pub tag_name: String,
    /// Display name.
    pub name: String,
    /// Commitish to create the tag from when it does not exist yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<String>,
    /// Always false.
    pub draft: bool,
    /// Always false.
    pub prerelease: bool,
    /// Always false; the body is rendered by tagnotes.
    pub generate_release_notes: bool,
    /// Discussion category to open alongside the release.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussion_category_name: Option<String>,
}

impl NewRelease {
    /// Creates a request named after its tag, with draft and prerelease off.
    pub fn for_tag(tag: &Tag) -> Self {
        Self {
            tag_name: tag.as_str().to_string(),
            name: tag.as_str().to_string(),
            target_commitish: None,
            draft: false,
            prerelease: false,
            generate_release_notes: false,
            discussion_category_name: None,
        }
    }

    /// Sets the commitish used when GitHub has to create the tag.
    #[must_use]
    pub fn with_target(mut self, target: Option<String>) -> Self {
        self.target_commitish = target;
        self
    }

    /// Sets the discussion category.
    #[must_use]
    pub fn with_discussion_category(mut self, category: Option<String>) -> Self {
        self.discussion_category_name = category;
        self
    }
}

/// Request body for updating an existing release.
///
/// The id and target commitish are private and only settable through
/// [`ReleaseUpdate::from_release`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseUpdate {
    #[serde(skip)]
    id: u64,
    tag_name: String,
    target_commitish: String,
    name: String,
    body: String,
    draft: bool,
    prerelease: bool,
    generate_release_notes: bool,
}

impl ReleaseUpdate {
    /// Builds an update for `release`, replacing its name and body.
    ///
    /// Draft and prerelease are reset to false.
    pub fn from_release(
        release: &Release,
        name: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: release.id,
            tag_name: release.tag_name.clone(),
            target_commitish: release.target_commitish.clone(),
            name: name.into(),
            body: body.into(),
            draft: false,
            prerelease: false,
            generate_release_notes: false,
        }
    }

    /// Remote id of the release being updated.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Tag of the release being updated.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Target commitish carried over from the existing release.
    #[must_use]
    pub fn target_commitish(&self) -> &str {
        &self.target_commitish
    }

    /// New display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// New release notes.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// A commit referenced by SHA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Commit SHA.
    pub sha: String,
}

/// Ordered commits between two references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRange {
    /// Commits, oldest first as returned by the compare API.
    pub commits: Vec<Commit>,
}

impl CommitRange {
    /// Number of commits in the range.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Returns true if the range has no commits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// A pull request associated with a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number.
    pub number: u64,
    /// PR title.
    pub title: String,
    /// Label names.
    pub labels: Vec<String>,
    /// Author login.
    pub author: String,
    /// Web URL of the PR.
    pub url: String,
}

impl PullRequest {
    /// Returns true if the PR carries a label named exactly `label`.
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(id: u64, tag: &str, target: &str) -> Release {
        Release {
            id,
            name: Some(tag.to_string()),
            tag_name: tag.to_string(),
            target_commitish: target.to_string(),
            body: None,
            draft: true,
            prerelease: true,
            html_url: None,
        }
    }

    #[test]
    fn test_tag_prefix_includes_separator() {
        assert_eq!(Tag::new("v1/2.0.0").prefix(), "v1/");
    }

    #[test]
    fn test_tag_prefix_stops_at_first_separator() {
        assert_eq!(Tag::new("app/v1/2.0.0").prefix(), "app/");
    }

    #[test]
    fn test_bare_tags_have_empty_prefix() {
        for tag in ["1.0.0", "v2", "release-3", ""] {
            assert_eq!(Tag::new(tag).prefix(), "", "tag {tag:?}");
        }
    }

    #[test]
    fn test_same_line_prefixed() {
        let tag = Tag::new("v1/2.1.0");
        assert!(tag.same_line("v1/2.0.0"));
        assert!(!tag.same_line("v2/2.0.0"));
        assert!(!tag.same_line("v10/2.0.0"));
        assert!(!tag.same_line("2.0.0"));
    }

    #[test]
    fn test_same_line_bare_only_matches_bare() {
        let tag = Tag::new("2.1.0");
        assert!(tag.same_line("2.0.0"));
        assert!(tag.same_line("v1.9.0"));
        assert!(!tag.same_line("v1/2.0.0"));
    }

    #[test]
    fn test_release_update_carries_identity() {
        let existing = release(42, "v1/2.0.0", "main");
        let update = ReleaseUpdate::from_release(&existing, "v1/2.0.0", "- notes\n");

        assert_eq!(update.id(), 42);
        assert_eq!(update.target_commitish(), "main");
        assert_eq!(update.tag_name(), "v1/2.0.0");
        assert_eq!(update.body(), "- notes\n");
    }

    #[test]
    fn test_release_update_resets_flags() {
        let existing = release(7, "v1/2.0.0", "main");
        let update = ReleaseUpdate::from_release(&existing, "v1/2.0.0", "");
        let json = serde_json::to_value(&update).unwrap();

        assert_eq!(json["draft"], false);
        assert_eq!(json["prerelease"], false);
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_new_release_omits_unset_optionals() {
        let req = NewRelease::for_tag(&Tag::new("v1/2.0.0"));
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["name"], "v1/2.0.0");
        assert_eq!(json["generate_release_notes"], false);
        assert!(json.get("target_commitish").is_none());
        assert!(json.get("discussion_category_name").is_none());
    }

    #[test]
    fn test_release_deserializes_with_missing_optionals() {
        let json = r#"{"id": 1, "tag_name": "v1", "target_commitish": "main"}"#;
        let release: Release = serde_json::from_str(json).unwrap();
        assert_eq!(release.id, 1);
        assert!(release.name.is_none());
        assert!(!release.draft);
    }

    #[test]
    fn test_has_label_exact_match() {
        let pr = PullRequest {
            number: 1,
            title: "Fix".to_string(),
            labels: vec!["release-note".to_string()],
            author: "octocat".to_string(),
            url: "https://github.com/o/r/pull/1".to_string(),
        };
        assert!(pr.has_label("release-note"));
        assert!(!pr.has_label("Release-Note"));
        assert!(!pr.has_label("release"));
    }
}
