// SPDX-License-Identifier: Apache-2.0

//! Error types for tagnotes.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur during tagnotes operations.
#[derive(Error, Debug)]
pub enum TagnotesError {
    /// The requested GitHub resource does not exist (HTTP 404).
    ///
    /// Kept distinct from [`TagnotesError::GitHub`] so callers can branch on
    /// absence (release lookup, release listing) without inspecting messages.
    #[error("Not found: {resource}")]
    NotFound {
        /// Human-readable description of the missing resource.
        resource: String,
    },

    /// Any other GitHub API failure: network, auth, decode, non-2xx.
    #[error("GitHub API error: {message}")]
    GitHub {
        /// Error message.
        message: String,
        /// HTTP status code, when the failure came from a response.
        status: Option<u16>,
    },

    /// No GitHub token could be resolved.
    #[error(
        "Authentication required - set GH_TOKEN or GITHUB_TOKEN, or log in with `gh auth login`"
    )]
    NotAuthenticated,

    /// Repository could not be determined or is malformed.
    #[error("Invalid repository: {message}")]
    InvalidRepository {
        /// Error message.
        message: String,
    },

    /// A paginated listing did not terminate within its page bound.
    #[error("{listing} did not end after {max_pages} pages")]
    PaginationLimit {
        /// What was being paged through.
        listing: &'static str,
        /// Configured page bound.
        max_pages: u32,
    },

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl TagnotesError {
    /// Classifies an octocrab error, mapping 404 responses to `NotFound`.
    pub fn from_octocrab(err: octocrab::Error, resource: impl Into<String>) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 404 => {
                TagnotesError::NotFound {
                    resource: resource.into(),
                }
            }
            octocrab::Error::GitHub { source, .. } => TagnotesError::GitHub {
                message: github_message(source),
                status: Some(source.status_code.as_u16()),
            },
            _ => TagnotesError::GitHub {
                message: err.to_string(),
                status: None,
            },
        }
    }

    /// Returns true if this error signals a missing resource.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, TagnotesError::NotFound { .. })
    }
}

/// GitHub's response message, followed by any field-level errors.
fn github_message(source: &octocrab::GitHubError) -> String {
    match source.errors.as_deref() {
        Some(errors) if !errors.is_empty() => {
            let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
            format!("{} ({})", source.message, details.join("; "))
        }
        _ => source.message.clone(),
    }
}

impl From<octocrab::Error> for TagnotesError {
    fn from(err: octocrab::Error) -> Self {
        TagnotesError::from_octocrab(err, "GitHub resource")
    }
}

impl From<config::ConfigError> for TagnotesError {
    fn from(err: config::ConfigError) -> Self {
        TagnotesError::Config {
            message: err.to_string(),
        }
    }
}
