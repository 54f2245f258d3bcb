//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the catalog core expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No HTTP client types in any signature
//! - Probing is advisory and therefore infallible (`bool`, never `Err`)
//! - Storage failures are mapped to [`StorageError`] at the adapter boundary

pub mod image_probe;
pub mod object_store;
pub mod stock_images;

use thiserror::Error;

pub use image_probe::ImageProbePort;
pub use object_store::ObjectStorePort;
pub use stock_images::{StockImage, StockImagePort};

/// Domain-facing errors for object storage operations.
///
/// This error type abstracts away the concrete storage service (HTTP status
/// codes, SDK errors) and gives the media pipeline a stable surface to react
/// to. Adapters map their internal errors onto these variants.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage service refused the request (quota, auth, naming).
    #[error("Upload rejected: {0}")]
    Rejected(String),

    /// The storage service could not be reached.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The adapter is misconfigured (missing credentials, bad base URL).
    #[error("Storage configuration error: {0}")]
    Configuration(String),
}
