// SPDX-License-Identifier: Apache-2.0

//! Release notes publication command handler.

use anyhow::{Context, Result};
use tagnotes_core::utils::resolve_repository;
use tagnotes_core::{AppConfig, PublishOutcome, PublishRequest, publish_release_notes};
use tracing::debug;

use crate::cli::PublishArgs;
use crate::provider::CliTokenProvider;

/// Builds the core request from CLI arguments and configuration.
///
/// `--label` overrides `release.label`; paging and the discussion category
/// always come from configuration.
pub fn build_request(args: &PublishArgs, config: &AppConfig) -> PublishRequest {
    let label = args
        .label
        .clone()
        .unwrap_or_else(|| config.release.label.clone());

    PublishRequest::builder()
        .tag(args.tag.as_str())
        .label(label)
        .maybe_target(args.target.clone())
        .maybe_discussion_category(config.release.discussion_category.clone())
        .pages(config.release.page_options())
        .dry_run(args.dry_run)
        .build()
}

/// Publish release notes for the requested tag.
pub async fn run(args: &PublishArgs, config: &AppConfig) -> Result<PublishOutcome> {
    let (owner, repo) = resolve_repository(args.repo.as_deref())?;
    let request = build_request(args, config);
    debug!(owner = %owner, repo = %repo, tag = %request.tag, "Publishing release notes");

    let outcome = publish_release_notes(&CliTokenProvider, &owner, &repo, &request, &config.github)
        .await
        .with_context(|| format!("Failed to publish release notes for {}", args.tag))?;

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(label: Option<&str>) -> PublishArgs {
        PublishArgs {
            tag: "v1/2.0.0".to_string(),
            label: label.map(ToString::to_string),
            repo: None,
            target: Some("main".to_string()),
            dry_run: true,
        }
    }

    #[test]
    fn test_label_falls_back_to_config() {
        let mut config = AppConfig::default();
        config.release.label = "changelog".to_string();

        let request = build_request(&args(None), &config);

        assert_eq!(request.label, "changelog");
        assert_eq!(request.tag.as_str(), "v1/2.0.0");
        assert_eq!(request.target.as_deref(), Some("main"));
        assert!(request.dry_run);
    }

    #[test]
    fn test_label_flag_overrides_config() {
        let mut config = AppConfig::default();
        config.release.label = "changelog".to_string();

        let request = build_request(&args(Some("release-note")), &config);

        assert_eq!(request.label, "release-note");
    }

    #[test]
    fn test_paging_comes_from_config() {
        let mut config = AppConfig::default();
        config.release.page_size = 10;
        config.release.max_pages = 2;
        config.release.discussion_category = Some("Announcements".to_string());

        let request = build_request(&args(None), &config);

        assert_eq!(request.pages.page_size, 10);
        assert_eq!(request.pages.max_pages, 2);
        assert_eq!(request.discussion_category.as_deref(), Some("Announcements"));
    }
}
