// SPDX-License-Identifier: Apache-2.0

//! Previous-release resolution within a release line.
//!
//! A release line is the set of tags sharing the prefix before the first `/`
//! (`v1/1.0.0`, `v1/1.1.0`, ...). Bare tags without a `/` form their own
//! line. The previous release is the first release in the listing (most
//! recent first) that belongs to the same line and is not the new tag.

use tracing::{debug, instrument, warn};

use crate::error::TagnotesError;
use crate::github::gateway::RepositoryGateway;
use crate::model::{Release, Tag};

/// Default number of releases requested per page.
pub const DEFAULT_PAGE_SIZE: u8 = 30;

/// Default bound on the number of pages fetched before giving up.
pub const DEFAULT_MAX_PAGES: u32 = 100;

/// Pagination settings for the release listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    /// Releases per page.
    pub page_size: u8,
    /// Maximum number of pages to fetch.
    pub max_pages: u32,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

/// Lazy cursor over the repository's release listing.
///
/// Each call to [`ReleasePages::next_page`] fetches one page. The cursor is
/// finished after the first empty page.
pub struct ReleasePages<'a> {
    gateway: &'a dyn RepositoryGateway,
    options: PageOptions,
    next: u32,
    done: bool,
}

impl<'a> ReleasePages<'a> {
    /// Creates a cursor starting at page 1.
    pub fn new(gateway: &'a dyn RepositoryGateway, options: PageOptions) -> Self {
        Self {
            gateway,
            options,
            next: 1,
            done: false,
        }
    }

    /// Number of pages fetched so far.
    #[must_use]
    pub fn pages_fetched(&self) -> u32 {
        self.next - 1
    }

    /// Fetches the next page, or `None` once the listing has ended.
    ///
    /// Fails with [`TagnotesError::PaginationLimit`] if the listing is still
    /// producing releases after `max_pages` pages.
    pub async fn next_page(&mut self) -> crate::Result<Option<Vec<Release>>> {
        if self.done {
            return Ok(None);
        }
        if self.next > self.options.max_pages {
            warn!(max_pages = self.options.max_pages, "Release listing never ended");
            return Err(TagnotesError::PaginationLimit {
                listing: "Release listing",
                max_pages: self.options.max_pages,
            });
        }

        let page = self
            .gateway
            .list_releases(self.next, self.options.page_size)
            .await?;
        self.next += 1;

        if page.is_empty() {
            self.done = true;
            return Ok(None);
        }
        Ok(Some(page))
    }
}

/// Finds the most recent release in `tag`'s release line, excluding `tag`.
///
/// Returns `Ok(None)` when the line has no earlier release, including when
/// the listing itself answers 404.
#[instrument(skip(gateway), fields(tag = %tag))]
pub async fn find_previous_release(
    gateway: &dyn RepositoryGateway,
    tag: &Tag,
    options: PageOptions,
) -> crate::Result<Option<Release>> {
    let mut pages = ReleasePages::new(gateway, options);

    loop {
        let page = match pages.next_page().await {
            Ok(Some(page)) => page,
            Ok(None) => break,
            Err(e) if e.is_not_found() => {
                debug!("Release listing not found, treating as no previous release");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        if let Some(found) = page
            .into_iter()
            .filter(|r| r.tag_name != tag.as_str())
            .find(|r| tag.same_line(&r.tag_name))
        {
            debug!(previous = %found.tag_name, pages = pages.pages_fetched(), "Resolved previous release");
            return Ok(Some(found));
        }
    }

    debug!(prefix = tag.prefix(), "No previous release in line");
    Ok(None)
}
