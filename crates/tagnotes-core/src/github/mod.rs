// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Provides authentication, client construction and the repository gateway.

use crate::error::TagnotesError;

pub mod auth;
pub mod gateway;

/// Parses an owner/repo string to extract owner and repo.
///
/// Validates format: exactly one `/`, non-empty parts.
///
/// # Errors
///
/// Returns `TagnotesError::InvalidRepository` if the format is invalid.
pub fn parse_owner_repo(s: &str) -> Result<(String, String), TagnotesError> {
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(TagnotesError::InvalidRepository {
            message: format!("expected owner/repo, got '{s}'"),
        });
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}
