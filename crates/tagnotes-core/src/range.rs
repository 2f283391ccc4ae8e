// SPDX-License-Identifier: Apache-2.0

//! Commit range expansion between a base reference and a release tag.

use std::fmt;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::github::gateway::RepositoryGateway;
use crate::model::CommitRange;

/// Date far enough in the past that `<commitish>@{date}` predates all history.
pub const HISTORY_EPOCH: &str = "1990-01-01";

/// Starting point of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "ref", rename_all = "snake_case")]
pub enum CompareBase {
    /// An earlier release tag.
    Tag(String),
    /// The state of `commitish` before any history, used for the first
    /// release of a line. The comparison then yields every commit reachable
    /// from the head.
    BeginningOfHistory(String),
}

impl CompareBase {
    /// Reference expression sent to the compare endpoint.
    #[must_use]
    pub fn as_ref_expr(&self) -> String {
        match self {
            CompareBase::Tag(tag) => tag.clone(),
            CompareBase::BeginningOfHistory(commitish) => {
                format!("{commitish}@{{{HISTORY_EPOCH}}}")
            }
        }
    }
}

impl fmt::Display for CompareBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_ref_expr())
    }
}

/// Fetches the commits introduced between `base` and `head`.
///
/// A missing reference surfaces as `NotFound` and is not recovered here.
#[instrument(skip(gateway), fields(base = %base, head = %head))]
pub async fn expand_range(
    gateway: &dyn RepositoryGateway,
    base: &CompareBase,
    head: &str,
) -> crate::Result<CommitRange> {
    let range = gateway.compare_commits(&base.as_ref_expr(), head).await?;
    debug!(commits = range.len(), "Expanded commit range");
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, FakeGateway};

    #[test]
    fn test_tag_base_is_tag_name() {
        let base = CompareBase::Tag("v1/2.0.0".to_string());
        assert_eq!(base.as_ref_expr(), "v1/2.0.0");
    }

    #[test]
    fn test_history_base_uses_reflog_date() {
        let base = CompareBase::BeginningOfHistory("main".to_string());
        assert_eq!(base.as_ref_expr(), "main@{1990-01-01}");
        assert_eq!(base.to_string(), "main@{1990-01-01}");
    }

    #[tokio::test]
    async fn test_expand_range_compares_base_and_head() {
        let mut gateway = FakeGateway::default();
        gateway
            .comparisons
            .insert("v1/2.0.0...v1/2.1.0".to_string(), vec!["a1", "b2"]);
        let base = CompareBase::Tag("v1/2.0.0".to_string());

        let range = expand_range(&gateway, &base, "v1/2.1.0").await.unwrap();

        assert_eq!(range.len(), 2);
        assert_eq!(range.commits[0].sha, "a1");
        assert_eq!(
            gateway.calls(),
            vec![Call::Compare("v1/2.0.0".to_string(), "v1/2.1.0".to_string())]
        );
    }

    #[tokio::test]
    async fn test_expand_range_missing_ref_is_not_found() {
        let gateway = FakeGateway::default();
        let base = CompareBase::Tag("v0/0.0.0".to_string());

        let err = expand_range(&gateway, &base, "v1/1.0.0").await.unwrap_err();

        assert!(err.is_not_found());
    }
}
