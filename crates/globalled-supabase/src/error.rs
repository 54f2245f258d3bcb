//! Internal error types for Supabase storage operations.
//!
//! These are mapped to the core `StorageError` at the port boundary.

use thiserror::Error;

/// Result type alias for Supabase storage operations.
pub type SupabaseResult<T> = Result<T, SupabaseError>;

/// Errors related to the Supabase Storage API.
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// The API answered with a non-success HTTP status.
    #[error("Supabase storage request failed with status {status}: {body}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Required configuration is missing or malformed.
    #[error("Supabase configuration error: {message}")]
    Configuration {
        /// What is missing or wrong
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
