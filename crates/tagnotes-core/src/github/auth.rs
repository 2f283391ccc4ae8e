// SPDX-License-Identifier: Apache-2.0

//! GitHub token resolution and client construction.
//!
//! Token resolution priority chain:
//! 1. Environment variable (`GH_TOKEN` or `GITHUB_TOKEN`)
//! 2. GitHub CLI (`gh auth token`)

use std::process::Command;
use std::time::Duration;

use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::error::TagnotesError;

/// Source of the GitHub authentication token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    /// Token from `GH_TOKEN` or `GITHUB_TOKEN` environment variable.
    Environment,
    /// Token from `gh auth token` command.
    GhCli,
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenSource::Environment => write!(f, "environment variable"),
            TokenSource::GhCli => write!(f, "GitHub CLI"),
        }
    }
}

/// Reads a non-empty token from the first set variable in `names`.
fn token_from_env(names: &[&str]) -> Option<SecretString> {
    names.iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .filter(|token| !token.is_empty())
            .map(|token| {
                debug!(variable = name, "Using token from environment");
                SecretString::from(token)
            })
    })
}

/// Attempts to get a token from the GitHub CLI (`gh auth token`).
///
/// Returns `None` if `gh` is missing, not logged in, or prints nothing.
#[instrument]
fn get_token_from_gh_cli() -> Option<SecretString> {
    debug!("Attempting to get token from gh CLI");

    match Command::new("gh").args(["auth", "token"]).output() {
        Ok(output) if output.status.success() => {
            let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if token.is_empty() {
                debug!("gh auth token returned empty output");
                None
            } else {
                Some(SecretString::from(token))
            }
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(status = ?output.status, stderr = %stderr.trim(), "gh auth token failed");
            None
        }
        Err(e) => {
            debug!(error = %e, "Failed to execute gh command");
            None
        }
    }
}

/// Resolves a GitHub token using the priority chain.
///
/// Returns the token and its source, or `None` if no token is found.
#[instrument]
pub fn resolve_token() -> Option<(SecretString, TokenSource)> {
    if let Some(token) = token_from_env(&["GH_TOKEN", "GITHUB_TOKEN"]) {
        return Some((token, TokenSource::Environment));
    }

    if let Some(token) = get_token_from_gh_cli() {
        debug!("Using token from GitHub CLI");
        return Some((token, TokenSource::GhCli));
    }

    debug!("No token found in any source");
    None
}

/// Creates an authenticated Octocrab client using a provided token.
///
/// `timeout` bounds both connecting and reading each response.
///
/// # Errors
///
/// Returns `TagnotesError::GitHub` if the client cannot be built.
#[instrument(skip(token))]
pub fn create_client_with_token(
    token: &SecretString,
    timeout: Duration,
) -> Result<Octocrab, TagnotesError> {
    info!("Creating GitHub client");

    let client = Octocrab::builder()
        .personal_token(token.expose_secret().to_string())
        .set_connect_timeout(Some(timeout))
        .set_read_timeout(Some(timeout))
        .build()?;

    debug!("Created authenticated GitHub client");
    Ok(client)
}
