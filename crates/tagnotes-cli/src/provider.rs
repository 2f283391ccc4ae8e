// SPDX-License-Identifier: Apache-2.0

//! CLI-specific `TokenProvider` implementation.

use secrecy::SecretString;
use tagnotes_core::TokenProvider;
use tracing::debug;

/// CLI implementation of `TokenProvider`.
///
/// Resolves the GitHub token from `GH_TOKEN`, `GITHUB_TOKEN`, then
/// `gh auth token`.
pub struct CliTokenProvider;

impl TokenProvider for CliTokenProvider {
    fn github_token(&self) -> Option<SecretString> {
        if let Some((token, source)) = tagnotes_core::resolve_token() {
            debug!(source = %source, "Resolved GitHub token");
            Some(token)
        } else {
            debug!("No GitHub token found in CLI sources");
            None
        }
    }
}
