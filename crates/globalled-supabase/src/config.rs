//! Public configuration for the Supabase storage client.

use std::time::Duration;

use crate::error::{SupabaseError, SupabaseResult};

/// Bucket used when none is configured.
pub(crate) const DEFAULT_BUCKET: &str = "globalled";

/// Configuration for [`SupabaseStorage`](crate::SupabaseStorage).
///
/// The base URL and service-role key are required; everything else has a
/// default. Use the builder methods to customize.
///
/// # Example
///
/// ```
/// use globalled_supabase::SupabaseConfig;
///
/// let config = SupabaseConfig::new("https://xyzcompany.supabase.co", "service-role-key")
///     .with_bucket("media");
/// ```
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, without a trailing slash
    pub(crate) base_url: String,
    /// Service-role key, sent as both bearer token and apikey header
    pub(crate) service_role_key: String,
    /// Storage bucket name
    pub(crate) bucket: String,
    /// `max-age` seconds sent as the object's cache-control on upload
    pub(crate) cache_control_secs: u32,
    /// Request timeout
    pub(crate) timeout: Duration,
}

impl SupabaseConfig {
    /// Create a configuration with the required credentials and defaults for
    /// the rest.
    #[must_use]
    pub fn new(base_url: impl Into<String>, service_role_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_role_key: service_role_key.into(),
            bucket: DEFAULT_BUCKET.to_string(),
            cache_control_secs: 3600,
            timeout: Duration::from_secs(30),
        }
    }

    /// Read the configuration from `SUPABASE_*` environment variables.
    ///
    /// Either `SUPABASE_URL` or `SUPABASE_PROJECT_REF` must be set, plus
    /// `SUPABASE_SERVICE_ROLE_KEY`. `SUPABASE_BUCKET` overrides the default
    /// bucket.
    pub fn from_env() -> SupabaseResult<Self> {
        let base_url = resolve_base_url(
            std::env::var("SUPABASE_URL").ok(),
            std::env::var("SUPABASE_PROJECT_REF").ok(),
        )?;
        let service_role_key = std::env::var("SUPABASE_SERVICE_ROLE_KEY").map_err(|_| {
            SupabaseError::Configuration {
                message: "SUPABASE_SERVICE_ROLE_KEY is not set".to_string(),
            }
        })?;

        let mut config = Self::new(base_url, service_role_key);
        if let Ok(bucket) = std::env::var("SUPABASE_BUCKET") {
            config.bucket = bucket;
        }
        Ok(config)
    }

    /// Set the storage bucket.
    ///
    /// Defaults to `globalled`.
    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    /// Set the cache-control `max-age` applied to uploaded objects.
    ///
    /// Defaults to 3600 seconds.
    #[must_use]
    pub const fn with_cache_control_secs(mut self, secs: u32) -> Self {
        self.cache_control_secs = secs;
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Pick the base URL from a full URL or a bare project ref.
fn resolve_base_url(
    url: Option<String>,
    project_ref: Option<String>,
) -> SupabaseResult<String> {
    if let Some(url) = url.filter(|value| !value.trim().is_empty()) {
        return Ok(url.trim_end_matches('/').to_string());
    }
    if let Some(project_ref) = project_ref.filter(|value| !value.trim().is_empty()) {
        return Ok(format!("https://{project_ref}.supabase.co"));
    }
    Err(SupabaseError::Configuration {
        message: "set SUPABASE_URL or SUPABASE_PROJECT_REF".to_string(),
    })
}
