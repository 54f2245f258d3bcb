//! The four-way media source discriminator.

use crate::ports::StockImage;

/// One user-supplied media input, discriminated by where it came from.
///
/// The editing workflow has a single active source mode at a time; the
/// variants are mutually exclusive inputs to
/// [`MediaResolver::resolve`](super::MediaResolver::resolve).
#[derive(Debug, Clone)]
pub enum MediaSource {
    /// A URL typed by the user, used verbatim.
    Manual {
        url: String,
    },
    /// A cloud-drive share link to be rewritten into a direct URL.
    DriveLink {
        share_url: String,
    },
    /// A candidate picked from stock-photo search results.
    StockPick {
        image: StockImage,
    },
    /// A file chosen from the user's machine, to be persisted through the
    /// storage gateway.
    LocalUpload {
        file_name: String,
        /// Declared MIME type; must start with `image/`.
        content_type: String,
        bytes: Vec<u8>,
    },
}
