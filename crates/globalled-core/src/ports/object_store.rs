//! Object storage trait definition.
//!
//! This port defines the interface for the durable blob store that keeps
//! uploaded media files. Implementations own naming, endpoints, and auth.

use async_trait::async_trait;

use super::StorageError;

/// Durable store for uploaded binary files, returning public URLs.
#[async_trait]
pub trait ObjectStorePort: Send + Sync {
    /// Upload a binary payload and return its durable public URL.
    ///
    /// `suggested_name` is the user-facing file name; implementations derive
    /// a collision-free object name from it (keeping the extension) rather
    /// than using it verbatim.
    async fn upload(&self, bytes: &[u8], suggested_name: &str) -> Result<String, StorageError>;

    /// Best-effort removal of a previously uploaded object.
    ///
    /// Callers log failures and never surface them to the user. An
    /// unrecognized `public_url` is a successful no-op. No catalog mutation
    /// path invokes this; it exists for presentation-layer housekeeping.
    async fn delete(&self, public_url: &str) -> Result<(), StorageError>;
}
