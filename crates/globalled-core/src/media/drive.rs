//! Cloud-drive share-link rewriting.
//!
//! Drive share links come in a handful of URL shapes, all carrying a file
//! identifier. Extraction tries the recognized shapes in order and the first
//! match wins; from the identifier two candidate direct URLs are derived.

use std::sync::LazyLock;

use regex::Regex;

/// Display-name placeholder suggested for drive media, which carries no
/// usable file name of its own.
pub const DRIVE_DEFAULT_NAME: &str = "IMG-20240131-WA0016.jpg";

/// Share-link shapes, in match priority order: `/file/d/<id>`, `id=<id>`,
/// `/d/<id>`.
static SHARE_LINK_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"/file/d/([a-zA-Z0-9_-]+)").expect("valid share-link pattern"),
        Regex::new(r"id=([a-zA-Z0-9_-]+)").expect("valid share-link pattern"),
        Regex::new(r"/d/([a-zA-Z0-9_-]+)").expect("valid share-link pattern"),
    ]
});

/// File identifier from a share link, or `None` when no shape matches.
#[must_use]
pub fn extract_drive_file_id(share_url: &str) -> Option<&str> {
    SHARE_LINK_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(share_url)
            .and_then(|caps| caps.get(1))
            .map(|id| id.as_str())
    })
}

/// Primary direct-view URL for a drive file.
#[must_use]
pub fn drive_view_url(file_id: &str) -> String {
    format!("https://drive.google.com/uc?export=view&id={file_id}")
}

/// Thumbnail-endpoint URL, tried when the direct-view URL does not load.
#[must_use]
pub fn drive_thumbnail_url(file_id: &str) -> String {
    format!("https://drive.google.com/thumbnail?id={file_id}&sz=w1000")
}
