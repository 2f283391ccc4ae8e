// SPDX-License-Identifier: Apache-2.0

//! Token provider abstraction for credential resolution.
//!
//! The core never reads credentials itself. Front-ends implement
//! [`TokenProvider`] over whatever sources they support.

use secrecy::SecretString;

/// Provides the GitHub credential used for API calls.
pub trait TokenProvider: Send + Sync {
    /// Retrieves the GitHub API token.
    ///
    /// Returns `None` if no token is available from any source.
    fn github_token(&self) -> Option<SecretString>;
}
