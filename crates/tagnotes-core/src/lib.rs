// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Tagnotes Core
//!
//! Core library for tagnotes - label-filtered GitHub release notes per
//! release line.
//!
//! A release line is the set of tags sharing a prefix up to the first `/`
//! (`v1/2.0.0` and `v1/2.1.0` are in line `v1/`). Publishing notes for a tag:
//!
//! 1. creates the release if it does not exist yet,
//! 2. finds the previous release in the same line,
//! 3. compares the two tags and collects the pull requests of each commit,
//! 4. keeps the pull requests carrying the inclusion label,
//! 5. writes one `- <title> by @<login> in <url>` line per pull request into
//!    the release body.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tagnotes_core::{GitHubConfig, PublishRequest, TokenProvider, publish_release_notes};
//! use secrecy::SecretString;
//!
//! struct EnvToken;
//!
//! impl TokenProvider for EnvToken {
//!     fn github_token(&self) -> Option<SecretString> {
//!         std::env::var("GH_TOKEN").ok().map(SecretString::from)
//!     }
//! }
//!
//! # async fn example() -> tagnotes_core::Result<()> {
//! let request = PublishRequest::builder()
//!     .tag("v1/2.0.0")
//!     .label("release-note")
//!     .build();
//!
//! let outcome =
//!     publish_release_notes(&EnvToken, "octocat", "hello", &request, &GitHubConfig::default())
//!         .await?;
//! println!("{}", outcome.body);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`model`] - Tags, releases, commits and pull requests
//! - [`resolver`] - Previous release lookup
//! - [`range`] - Commit range expansion
//! - [`collector`] - Pull request collection
//! - [`changelog`] - Label filtering and rendering
//! - [`upsert`] - Release create-or-update
//! - [`pipeline`] - End-to-end orchestration
//! - [`github`] - GitHub client, auth and gateway
//! - [`config`] - Configuration loading and paths

// ============================================================================
// Authentication
// ============================================================================

pub use auth::TokenProvider;

// ============================================================================
// Error Handling
// ============================================================================

pub use error::TagnotesError;

/// Convenience Result type for tagnotes operations.
///
/// This is equivalent to `std::result::Result<T, TagnotesError>`.
pub type Result<T> = std::result::Result<T, TagnotesError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AppConfig, GitHubConfig, ReleaseConfig, config_dir, config_file_path, load_config,
};

// ============================================================================
// Domain
// ============================================================================

pub use changelog::{LabelFilter, render_changelog};
pub use model::{Commit, CommitRange, NewRelease, PullRequest, Release, ReleaseUpdate, Tag};
pub use pipeline::{PublishAction, PublishOutcome, PublishRequest};
pub use range::CompareBase;
pub use resolver::{PageOptions, find_previous_release};

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::auth::{TokenSource, resolve_token};
pub use github::gateway::{OctocrabGateway, RepositoryGateway};

// ============================================================================
// Facade
// ============================================================================

pub use facade::publish_release_notes;

// ============================================================================
// Modules
// ============================================================================

pub mod auth;
pub mod changelog;
pub mod collector;
pub mod config;
pub mod error;
pub mod facade;
pub mod github;
pub mod model;
pub mod pipeline;
pub mod range;
pub mod resolver;
pub mod upsert;
pub mod utils;

#[cfg(test)]
mod testing;
