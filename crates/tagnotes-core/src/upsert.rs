// SPDX-License-Identifier: Apache-2.0

//! Create-or-update of the release resource.
//!
//! The release is looked up by tag and created only when the lookup answers
//! 404. The changelog is then always written with a separate update that
//! carries the id and target commitish of the release in hand. Draft and
//! prerelease are forced to false on every write; an existing release's
//! flags are not preserved.

use tracing::{debug, info, instrument};

use crate::github::gateway::RepositoryGateway;
use crate::model::{NewRelease, Release, ReleaseUpdate, Tag};

/// A release that is known to exist remotely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsuredRelease {
    /// The release as returned by GitHub.
    pub release: Release,
    /// Whether this invocation created it.
    pub created: bool,
}

/// Looks up the release for `tag`, mapping 404 to `None`.
///
/// Any other failure is returned as-is.
#[instrument(skip(gateway), fields(tag = %tag))]
pub async fn find_release(
    gateway: &dyn RepositoryGateway,
    tag: &Tag,
) -> crate::Result<Option<Release>> {
    match gateway.get_release(tag.as_str()).await {
        Ok(release) => Ok(Some(release)),
        Err(e) if e.is_not_found() => {
            debug!("Release does not exist yet");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Returns the release for `tag`, creating it from `template` if absent.
///
/// The create call is only made after a confirmed 404.
#[instrument(skip(gateway, template), fields(tag = %tag))]
pub async fn ensure_release(
    gateway: &dyn RepositoryGateway,
    tag: &Tag,
    template: NewRelease,
) -> crate::Result<EnsuredRelease> {
    if let Some(release) = find_release(gateway, tag).await? {
        debug!(id = release.id, "Found existing release");
        return Ok(EnsuredRelease {
            release,
            created: false,
        });
    }

    let release = gateway.create_release(&template).await?;
    info!(
        id = release.id,
        target = %release.target_commitish,
        "Created release; body is written by the following update"
    );
    Ok(EnsuredRelease {
        release,
        created: true,
    })
}

/// Writes `body` to `release`, keeping its id and target commitish.
#[instrument(skip(gateway, release, body), fields(id = release.id, tag = %release.tag_name))]
pub async fn publish_notes(
    gateway: &dyn RepositoryGateway,
    release: &Release,
    body: &str,
) -> crate::Result<Release> {
    let update = ReleaseUpdate::from_release(release, release.tag_name.clone(), body);
    let updated = gateway.update_release(&update).await?;
    info!(bytes = body.len(), "Updated release notes");
    Ok(updated)
}
