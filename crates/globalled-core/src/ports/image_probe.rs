//! Reachability probe trait definition.

use async_trait::async_trait;

/// Advisory check that a URL currently loads as an image.
///
/// The result only steers which of two candidate URLs is preferred; it never
/// blocks an add-media flow. Timeout and failure are indistinguishable to
/// the caller: both are `false`. Implementations must resolve within their
/// configured bound and must not panic or error.
#[async_trait]
pub trait ImageProbePort: Send + Sync {
    /// True when the URL resolved to image content within the bound.
    async fn probe(&self, url: &str) -> bool;
}
