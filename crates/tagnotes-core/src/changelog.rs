// SPDX-License-Identifier: Apache-2.0

//! Label filtering and changelog rendering.

use std::fmt::Write;

use crate::model::PullRequest;

/// Inclusion filter on pull request labels.
///
/// Matching is exact and case-sensitive. An empty label disables filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFilter {
    label: String,
}

impl LabelFilter {
    /// Creates a filter for `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// The label being matched.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns true if the filter lets every pull request through.
    #[must_use]
    pub fn is_pass_through(&self) -> bool {
        self.label.is_empty()
    }

    /// Returns true if `pull` passes the filter.
    #[must_use]
    pub fn matches(&self, pull: &PullRequest) -> bool {
        self.is_pass_through() || pull.has_label(&self.label)
    }

    /// Keeps the pull requests that pass, preserving order.
    #[must_use]
    pub fn apply(&self, pulls: Vec<PullRequest>) -> Vec<PullRequest> {
        pulls.into_iter().filter(|p| self.matches(p)).collect()
    }
}

/// Renders one `- <title> by @<login> in <url>` line per pull request.
///
/// Returns an empty string for no pull requests.
#[must_use]
pub fn render_changelog(pulls: &[PullRequest]) -> String {
    let mut body = String::new();
    for pull in pulls {
        let _ = writeln!(body, "- {} by @{} in {}", pull.title, pull.author, pull.url);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::pull;

    fn sample() -> Vec<PullRequest> {
        vec![
            pull(1, "Add widgets", &["release-note", "feature"]),
            pull(2, "Bump deps", &["dependencies"]),
            pull(3, "Fix crash", &["release-note"]),
            pull(4, "Refactor", &[]),
        ]
    }

    #[test]
    fn test_filter_keeps_labeled_in_order() {
        let filtered = LabelFilter::new("release-note").apply(sample());
        let numbers: Vec<_> = filtered.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = LabelFilter::new("release-note");
        let once = filter.apply(sample());
        let twice = filter.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let filtered = LabelFilter::new("Release-Note").apply(sample());
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_unknown_label_yields_nothing() {
        let filtered = LabelFilter::new("nope").apply(sample());
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_empty_label_disables_filtering() {
        let filter = LabelFilter::new("");
        assert!(filter.is_pass_through());
        assert_eq!(filter.apply(sample()), sample());
    }

    #[test]
    fn test_empty_label_does_not_require_empty_named_label() {
        let filter = LabelFilter::new("");
        assert!(filter.matches(&pull(9, "Unlabeled", &[])));
        assert!(filter.matches(&pull(10, "Labeled", &["bug"])));
    }

    #[test]
    fn test_render_format() {
        let body = render_changelog(&[pull(1347, "Amazing new feature", &[])]);
        assert_eq!(
            body,
            "- Amazing new feature by @octocat in https://github.com/o/r/pull/1347\n"
        );
    }

    #[test]
    fn test_render_empty_is_empty() {
        assert_eq!(render_changelog(&[]), "");
    }

    #[test]
    fn test_render_is_deterministic() {
        let pulls = sample();
        assert_eq!(render_changelog(&pulls), render_changelog(&pulls));
    }

    #[test]
    fn test_render_one_line_per_pull_in_order() {
        let body = render_changelog(&sample());
        let lines: Vec<_> = body.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("- Add widgets"));
        assert!(lines[3].starts_with("- Refactor"));
        assert!(body.ends_with('\n'));
    }

    #[test]
    fn test_scenario_one_of_three_labeled() {
        let pulls = vec![
            pull(1, "Labeled", &["release-note"]),
            pull(2, "Other", &["chore"]),
            pull(3, "Bare", &[]),
        ];
        let body = render_changelog(&LabelFilter::new("release-note").apply(pulls));
        assert_eq!(body.lines().count(), 1);
        assert!(body.contains("Labeled"));
    }
}
