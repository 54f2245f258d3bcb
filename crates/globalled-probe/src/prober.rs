//! HTTP probe implementation.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use globalled_core::ImageProbePort;

use crate::config::ProberConfig;
use crate::sniff;

/// Probes URLs for loadable images over HTTP.
///
/// A probe never errors; anything short of a confirmed image answer is
/// `false`. The configured timeout is a hard bound on the whole probe,
/// body sniffing included.
pub struct HttpImageProber {
    client: reqwest::Client,
    config: ProberConfig,
}

impl HttpImageProber {
    /// Create a prober from the given configuration.
    #[must_use]
    pub fn new(config: ProberConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");
        Self { client, config }
    }

    /// GET the URL and decide whether it serves an image.
    async fn fetch_and_sniff(&self, url: &str) -> bool {
        let mut response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(error = %err, url, "Probe request failed");
                return false;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), url, "Probe got a non-success status");
            return false;
        }

        if response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_image_content_type)
        {
            return true;
        }

        // No usable content type; sniff the leading bytes instead
        match response.chunk().await {
            Ok(Some(chunk)) => {
                let budget = chunk.len().min(self.config.max_probe_bytes);
                sniff::is_image_bytes(&chunk[..budget])
            }
            Ok(None) => false,
            Err(err) => {
                tracing::debug!(error = %err, url, "Probe body read failed");
                false
            }
        }
    }
}

impl Default for HttpImageProber {
    fn default() -> Self {
        Self::new(ProberConfig::default())
    }
}

/// Enforce the hard probe bound. Elapsed time is a `false` verdict.
async fn bounded(url: &str, limit: Duration, check: impl Future<Output = bool> + Send) -> bool {
    match tokio::time::timeout(limit, check).await {
        Ok(verdict) => verdict,
        Err(_) => {
            tracing::debug!(url, "Probe timed out");
            false
        }
    }
}

fn is_image_content_type(value: &str) -> bool {
    value.trim_start().to_ascii_lowercase().starts_with("image/")
}

#[async_trait]
impl ImageProbePort for HttpImageProber {
    async fn probe(&self, url: &str) -> bool {
        bounded(url, self.config.timeout, self.fetch_and_sniff(url)).await
    }
}
