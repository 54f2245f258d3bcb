//! Object-store port implementation for [`SupabaseStorage`].
//!
//! Maps internal Supabase errors onto the core `StorageError` surface at the
//! boundary.

use async_trait::async_trait;
use globalled_core::{ObjectStorePort, StorageError};

use crate::client::SupabaseStorage;
use crate::error::SupabaseError;

/// Convert an internal [`SupabaseError`] to the core [`StorageError`].
fn map_error(err: SupabaseError) -> StorageError {
    match err {
        SupabaseError::RequestFailed { status, body } => {
            if status >= 500 {
                StorageError::Unavailable(format!("status {status}: {body}"))
            } else {
                StorageError::Rejected(format!("status {status}: {body}"))
            }
        }
        SupabaseError::Configuration { message } => StorageError::Configuration(message),
        SupabaseError::Network(e) => StorageError::Unavailable(e.to_string()),
        SupabaseError::InvalidUrl(e) => StorageError::Configuration(e.to_string()),
    }
}

#[async_trait]
impl ObjectStorePort for SupabaseStorage {
    async fn upload(&self, bytes: &[u8], suggested_name: &str) -> Result<String, StorageError> {
        self.upload(bytes, suggested_name).await.map_err(map_error)
    }

    async fn delete(&self, public_url: &str) -> Result<(), StorageError> {
        self.delete(public_url).await.map_err(map_error)
    }
}
