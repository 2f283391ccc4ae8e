// SPDX-License-Identifier: Apache-2.0

//! Front-end facing entry points.
//!
//! These functions take care of credential resolution and client creation so
//! a front-end only supplies a `TokenProvider` and the request.

use std::time::Duration;

use tracing::instrument;

use crate::auth::TokenProvider;
use crate::config::GitHubConfig;
use crate::error::TagnotesError;
use crate::github::auth::create_client_with_token;
use crate::github::gateway::OctocrabGateway;
use crate::pipeline::{self, PublishOutcome, PublishRequest};

/// Publishes release notes for `request.tag` in `owner/repo`.
///
/// # Errors
///
/// Returns `TagnotesError::NotAuthenticated` if the provider has no token,
/// or any error raised by the pipeline.
#[instrument(skip(provider, request, github), fields(tag = %request.tag))]
pub async fn publish_release_notes(
    provider: &dyn TokenProvider,
    owner: &str,
    repo: &str,
    request: &PublishRequest,
    github: &GitHubConfig,
) -> crate::Result<PublishOutcome> {
    let token = provider
        .github_token()
        .ok_or(TagnotesError::NotAuthenticated)?;
    let client =
        create_client_with_token(&token, Duration::from_secs(github.api_timeout_seconds))?;
    let gateway = OctocrabGateway::new(client, owner, repo);

    pipeline::run(&gateway, request).await
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    struct NoToken;

    impl TokenProvider for NoToken {
        fn github_token(&self) -> Option<SecretString> {
            None
        }
    }

    #[tokio::test]
    async fn test_publish_without_token_is_not_authenticated() {
        let request = PublishRequest::builder().tag("v1/1.0.0").build();

        let err = publish_release_notes(
            &NoToken,
            "octocat",
            "hello",
            &request,
            &GitHubConfig::default(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, TagnotesError::NotAuthenticated));
    }
}
