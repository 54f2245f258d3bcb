#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod catalog;
pub mod domain;
pub mod media;
pub mod ports;

// Re-export commonly used types for convenience
pub use catalog::{CatalogError, CatalogStore};
pub use domain::{
    CATEGORIES, MediaId, MediaKind, MediaReference, NewProduct, Product, ProductId, ProductPatch,
    group_number,
};
pub use media::{
    DRIVE_DEFAULT_NAME, FixedStockLibrary, MAX_UPLOAD_BYTES, MediaError, MediaResolver,
    MediaSession, MediaSource, ResolutionWarning, ResolveOutcome, ResolvedMedia, SessionToken,
    drive_thumbnail_url, drive_view_url, extract_drive_file_id,
};
pub use ports::{ImageProbePort, ObjectStorePort, StockImage, StockImagePort, StorageError};

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
