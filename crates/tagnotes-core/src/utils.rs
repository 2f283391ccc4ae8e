// SPDX-License-Identifier: Apache-2.0

//! Repository detection from the local git checkout.

use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::TagnotesError;
use crate::github::parse_owner_repo;

/// `owner/repo` at the end of an SSH or HTTPS remote, on any host.
static REMOTE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(?:ssh://)?(?:[^@/]+@)?(?:https?://)?[^/:]+[:/]([^/]+)/([^/]+?)(?:\.git)?/?$")
        .ok()
});

fn invalid(message: impl Into<String>) -> TagnotesError {
    TagnotesError::InvalidRepository {
        message: message.into(),
    }
}

/// Parses a git remote URL to extract `owner/repo`.
///
/// Supports SSH (`git@github.com:owner/repo.git`, `ssh://git@host/owner/repo`)
/// and HTTPS (`https://github.com/owner/repo.git`) remotes.
///
/// # Examples
///
/// ```
/// use tagnotes_core::utils::parse_git_remote_url;
///
/// assert_eq!(parse_git_remote_url("git@github.com:owner/repo.git").unwrap(), "owner/repo");
/// assert_eq!(parse_git_remote_url("https://github.com/owner/repo").unwrap(), "owner/repo");
/// ```
///
/// # Errors
///
/// Returns `TagnotesError::InvalidRepository` if no owner and repo can be found.
pub fn parse_git_remote_url(url: &str) -> Result<String, TagnotesError> {
    let url = url.trim();
    REMOTE_PATTERN
        .as_ref()
        .and_then(|re| re.captures(url))
        .and_then(|caps| Some(format!("{}/{}", caps.get(1)?.as_str(), caps.get(2)?.as_str())))
        .ok_or_else(|| invalid(format!("could not parse git remote URL '{url}'")))
}

/// Infers `owner/repo` from `remote.origin.url` of the current checkout.
///
/// # Errors
///
/// Returns `TagnotesError::InvalidRepository` outside a git checkout, without
/// an origin remote, or when the remote cannot be parsed.
pub fn infer_repo_from_git() -> Result<String, TagnotesError> {
    let output = Command::new("git")
        .args(["config", "--get", "remote.origin.url"])
        .output()
        .map_err(|e| invalid(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        return Err(invalid(
            "not in a git repository or no origin remote configured",
        ));
    }

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if url.is_empty() {
        return Err(invalid("no origin remote configured"));
    }

    debug!(url = %url, "Inferred origin remote");
    parse_git_remote_url(&url)
}

/// Resolves the target repository as `(owner, repo)`.
///
/// An explicit `owner/repo` wins; otherwise the origin remote is used.
///
/// # Errors
///
/// Returns `TagnotesError::InvalidRepository` if neither source yields a
/// valid repository.
pub fn resolve_repository(explicit: Option<&str>) -> Result<(String, String), TagnotesError> {
    match explicit {
        Some(repo) => parse_owner_repo(repo),
        None => parse_owner_repo(&infer_repo_from_git()?),
    }
}
