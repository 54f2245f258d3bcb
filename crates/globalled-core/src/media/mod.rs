//! Media resolution pipeline.
//!
//! Converts one of four user-supplied inputs (manual URL, cloud-drive share
//! link, stock-photo pick, local file upload) into a renderable
//! [`MediaReference`](crate::domain::MediaReference) before any product is
//! mutated. The [`session`] module wraps the pipeline in a cancellable
//! editing workflow that discards stale async completions.
//!
//! Failure policy, per input class:
//!
//! - Validation problems (empty URL, unrecognized link, wrong file type,
//!   oversized file) are hard errors; nothing resolves.
//! - Reachability problems are advisory ([`ResolutionWarning`]); resolution
//!   still succeeds.
//! - Storage failures degrade to an inline data URL; resolution still
//!   succeeds, with a warning.

pub mod drive;
pub mod resolver;
pub mod session;
pub mod source;
pub mod stock;

#[cfg(test)]
pub(crate) mod testing;

use thiserror::Error;

pub use drive::{DRIVE_DEFAULT_NAME, drive_thumbnail_url, drive_view_url, extract_drive_file_id};
pub use resolver::{MAX_UPLOAD_BYTES, MediaResolver, ResolutionWarning, ResolvedMedia};
pub use session::{MediaSession, ResolveOutcome, SessionToken};
pub use source::MediaSource;
pub use stock::FixedStockLibrary;

/// Validation errors from media resolution and the add-media session.
///
/// Everything here is synchronous input validation; no state changes when
/// one of these is returned. Reachability and storage degradation are not
/// errors, they surface as [`ResolutionWarning`].
#[derive(Debug, Error)]
pub enum MediaError {
    /// Manual and drive sources need a non-empty URL to start from.
    #[error("Media URL must not be empty")]
    EmptyUrl,

    /// None of the recognized share-link shapes matched.
    #[error("Unrecognized drive share link: {url}")]
    InvalidDriveLink {
        /// The link as the user supplied it.
        url: String,
    },

    /// Stock search needs a non-empty query.
    #[error("Search query must not be empty")]
    EmptyQuery,

    /// Uploads accept image payloads only.
    #[error("Not an image upload: {content_type}")]
    NotAnImage {
        /// The declared content type of the rejected file.
        content_type: String,
    },

    /// Upload exceeds the 10 MiB cap.
    #[error("File too large: {size} bytes (limit 10 MiB)")]
    FileTooLarge {
        /// Size of the rejected file in bytes.
        size: usize,
    },

    /// Commit requires both a resolved URL and a display name.
    #[error("Both a resolved URL and a media name are required")]
    MissingFields,

    /// Commit attempted while a resolution is still running.
    #[error("A media resolution is still in flight")]
    ResolutionInFlight,

    /// The operation's token no longer matches the active form.
    #[error("Media session is no longer active")]
    StaleSession,
}
