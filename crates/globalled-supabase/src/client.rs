//! Supabase Storage HTTP client.
//!
//! Wraps the Storage object API: binary upload into a bucket, public URL
//! derivation, and single-object deletion. Authentication uses the
//! service-role key as both bearer token and `apikey` header.

use url::Url;

use crate::config::SupabaseConfig;
use crate::error::{SupabaseError, SupabaseResult};

/// Client for one Supabase Storage bucket.
pub struct SupabaseStorage {
    client: reqwest::Client,
    config: SupabaseConfig,
}

impl SupabaseStorage {
    /// Create a client from the given configuration.
    #[must_use]
    pub fn new(config: SupabaseConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to create HTTP client");
        Self { client, config }
    }

    /// Create a client configured from `SUPABASE_*` environment variables.
    pub fn from_env() -> SupabaseResult<Self> {
        Ok(Self::new(SupabaseConfig::from_env()?))
    }

    /// Upload a binary payload and return its public URL.
    ///
    /// The object is stored under a fresh collision-free name; the suggested
    /// name only contributes its extension. Uploads never overwrite: the
    /// request carries `x-upsert: false`.
    pub async fn upload(&self, bytes: &[u8], suggested_name: &str) -> SupabaseResult<String> {
        let name = object_name(suggested_name);
        let endpoint = self.object_endpoint(&name)?;

        let response = self
            .authorized(self.client.post(endpoint.as_str()))
            .header("Content-Type", "application/octet-stream")
            .header(
                "cache-control",
                format!("max-age={}", self.config.cache_control_secs),
            )
            .header("x-upsert", "false")
            .body(bytes.to_vec())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SupabaseError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(object = %name, "Uploaded object to Supabase storage");
        Ok(self.public_url(&name))
    }

    /// Delete the object behind a public URL.
    ///
    /// A URL that does not point into this client's bucket is a successful
    /// no-op.
    pub async fn delete(&self, public_url: &str) -> SupabaseResult<()> {
        let Some(object) = self.object_path(public_url) else {
            tracing::debug!(url = %public_url, "URL is not in the bucket, skipping delete");
            return Ok(());
        };
        let endpoint = self.object_endpoint(object)?;

        let response = self
            .authorized(self.client.delete(endpoint.as_str()))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SupabaseError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(object = %object, "Deleted object from Supabase storage");
        Ok(())
    }

    /// Public download URL for an object in the bucket.
    #[must_use]
    pub fn public_url(&self, object: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.config.base_url, self.config.bucket, object
        )
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header(
                "Authorization",
                format!("Bearer {}", self.config.service_role_key),
            )
            .header("apikey", self.config.service_role_key.clone())
    }

    fn object_endpoint(&self, object: &str) -> SupabaseResult<Url> {
        Ok(Url::parse(&format!(
            "{}/storage/v1/object/{}/{}",
            self.config.base_url, self.config.bucket, object
        ))?)
    }

    /// Recover the in-bucket object path from a public URL.
    fn object_path<'a>(&self, public_url: &'a str) -> Option<&'a str> {
        let marker = format!("/{}/", self.config.bucket);
        let (_, path) = public_url.split_once(&marker)?;
        if path.is_empty() { None } else { Some(path) }
    }
}

/// Collision-free object name: millisecond timestamp plus a short random
/// slug, keeping the extension of `suggested_name` when it has one.
fn object_name(suggested_name: &str) -> String {
    let timestamp = chrono::Utc::now().timestamp_millis();
    let id = uuid::Uuid::new_v4().simple().to_string();
    let slug = &id[..6];
    match suggested_name.rsplit_once('.') {
        Some((_, extension)) if !extension.is_empty() => {
            format!("{timestamp}-{slug}.{extension}")
        }
        _ => format!("{timestamp}-{slug}"),
    }
}
