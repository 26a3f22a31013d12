//! Preview-access policy: how many pages a reader may see.

use serde::Deserialize;

/// Page cap applied to books that are not available online.
pub const DEFAULT_PREVIEW_PAGE_CAP: u32 = 20;

/// Publisher-side access settings for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PreviewAccess {
    pub available_online: bool,
    /// Publisher-configured preview length. Zero is treated as "not set".
    pub preview_pages: Option<u32>,
}

impl PreviewAccess {
    pub fn limit_for(&self, total_pages: u32) -> u32 {
        visible_page_limit(total_pages, self.available_online, self.preview_pages)
    }
}

/// Number of pages a session may display and navigate to.
///
/// Online books show everything. Otherwise the preview stops at
/// [`DEFAULT_PREVIEW_PAGE_CAP`] pages, or earlier when the publisher asked for a
/// shorter preview. The result never exceeds `total_pages`.
pub fn visible_page_limit(
    total_pages: u32,
    available_online: bool,
    preview_pages_override: Option<u32>,
) -> u32 {
    if available_online {
        return total_pages;
    }
    let cap = match preview_pages_override.filter(|pages| *pages > 0) {
        Some(pages) => pages.min(DEFAULT_PREVIEW_PAGE_CAP),
        None => DEFAULT_PREVIEW_PAGE_CAP,
    };
    total_pages.min(cap)
}
