// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `TagnotesError` and appends a hint for the
//! failure at hand. Other errors are printed with their context chain.

use anyhow::Error;
use tagnotes_core::TagnotesError;

/// Formats an error for CLI display with helpful hints.
pub fn format_error(error: &Error) -> String {
    let Some(err) = error.downcast_ref::<TagnotesError>() else {
        return format!("{error:#}");
    };

    match err {
        TagnotesError::NotAuthenticated => err.to_string(),
        TagnotesError::NotFound { .. } => format!(
            "{err}\n\nTip: Check that the tag exists and that your token can read the repository."
        ),
        TagnotesError::GitHub {
            status: Some(401 | 403),
            ..
        } => format!(
            "{err}\n\nTip: Your GitHub token needs `contents: write` on the repository."
        ),
        TagnotesError::GitHub {
            status: Some(422), ..
        } => format!(
            "{err}\n\nTip: GitHub rejected the release. If the tag does not exist yet, pass --target."
        ),
        TagnotesError::GitHub { .. } => {
            format!("{err}\n\nTip: Check your internet connection and try again.")
        }
        TagnotesError::InvalidRepository { .. } => {
            format!("{err}\n\nTip: Pass --repo owner/repo or run inside a clone with an origin remote.")
        }
        TagnotesError::PaginationLimit {
            listing: "Release listing",
            ..
        } => format!(
            "{err}\n\nTip: Raise release.max_pages in {}",
            tagnotes_core::config_file_path().display()
        ),
        TagnotesError::PaginationLimit { .. } => format!(
            "{err}\n\nTip: The range is too long to list. Publish an intermediate release first."
        ),
        TagnotesError::Config { .. } => format!(
            "{err}\n\nTip: Check your config file at {}",
            tagnotes_core::config_file_path().display()
        ),
    }
}
