//! Source-to-reference resolution.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::ports::{ImageProbePort, ObjectStorePort, StockImage, StockImagePort};

use super::MediaError;
use super::drive::{DRIVE_DEFAULT_NAME, drive_thumbnail_url, drive_view_url, extract_drive_file_id};
use super::source::MediaSource;

/// Upload size cap: 10 MiB.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Advisory condition attached to an otherwise successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionWarning {
    /// Neither drive URL candidate probed as loadable; the primary URL was
    /// kept anyway. The preview may not render.
    PreviewUnreachable,
    /// The storage gateway failed and an inline data URL was substituted.
    /// The reference works but is not durable across sessions.
    UploadFallback {
        reason: String,
    },
}

/// A source resolved into a renderable URL.
#[derive(Debug, Clone)]
pub struct ResolvedMedia {
    /// Directly renderable URL.
    pub url: String,
    /// Display-name suggestion, used when the user has not typed a name.
    pub suggested_name: Option<String>,
    /// Advisory warning. Never blocks the commit.
    pub warning: Option<ResolutionWarning>,
}

/// Turns user-supplied sources into renderable media URLs.
///
/// Holds the collaborator ports behind `Arc` so sessions and presentation
/// layers can share one resolver.
#[derive(Clone)]
pub struct MediaResolver {
    store: Arc<dyn ObjectStorePort>,
    probe: Arc<dyn ImageProbePort>,
    stock: Arc<dyn StockImagePort>,
}

impl MediaResolver {
    #[must_use]
    pub fn new(
        store: Arc<dyn ObjectStorePort>,
        probe: Arc<dyn ImageProbePort>,
        stock: Arc<dyn StockImagePort>,
    ) -> Self {
        Self {
            store,
            probe,
            stock,
        }
    }

    /// Resolve one source into a URL plus optional name suggestion.
    ///
    /// Validation failures are errors. Reachability problems and storage
    /// degradation are reported through [`ResolvedMedia::warning`] and do
    /// not fail the resolution.
    pub async fn resolve(&self, source: MediaSource) -> Result<ResolvedMedia, MediaError> {
        match source {
            MediaSource::Manual { url } => Self::resolve_manual(&url),
            MediaSource::DriveLink { share_url } => self.resolve_drive(&share_url).await,
            MediaSource::StockPick { image } => Ok(Self::resolve_stock_pick(image)),
            MediaSource::LocalUpload {
                file_name,
                content_type,
                bytes,
            } => self.resolve_upload(file_name, content_type, bytes).await,
        }
    }

    /// Stock-photo search with the query validated first.
    pub async fn search_stock(&self, query: &str) -> Result<Vec<StockImage>, MediaError> {
        if query.trim().is_empty() {
            return Err(MediaError::EmptyQuery);
        }
        Ok(self.stock.search(query).await)
    }

    fn resolve_manual(url: &str) -> Result<ResolvedMedia, MediaError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(MediaError::EmptyUrl);
        }
        Ok(ResolvedMedia {
            url: url.to_string(),
            suggested_name: None,
            warning: None,
        })
    }

    /// Rewrite a share link and pick the candidate URL that loads.
    ///
    /// Probing is advisory: when both candidates fail, the primary URL is
    /// kept with a [`ResolutionWarning::PreviewUnreachable`] warning rather
    /// than failing the resolution.
    async fn resolve_drive(&self, share_url: &str) -> Result<ResolvedMedia, MediaError> {
        if share_url.trim().is_empty() {
            return Err(MediaError::EmptyUrl);
        }
        let Some(file_id) = extract_drive_file_id(share_url) else {
            return Err(MediaError::InvalidDriveLink {
                url: share_url.to_string(),
            });
        };

        let primary = drive_view_url(file_id);
        if self.probe.probe(&primary).await {
            return Ok(drive_media(primary, None));
        }

        let thumbnail = drive_thumbnail_url(file_id);
        if self.probe.probe(&thumbnail).await {
            tracing::debug!(file_id, "Primary drive URL unreachable, using thumbnail");
            return Ok(drive_media(thumbnail, None));
        }

        tracing::warn!(file_id, "No drive URL candidate is reachable, keeping primary");
        Ok(drive_media(
            primary,
            Some(ResolutionWarning::PreviewUnreachable),
        ))
    }

    fn resolve_stock_pick(image: StockImage) -> ResolvedMedia {
        ResolvedMedia {
            url: image.url,
            suggested_name: Some(image.name),
            warning: None,
        }
    }

    /// Validate and persist an uploaded file.
    ///
    /// Type and size are checked before any gateway call. A gateway failure
    /// degrades to an inline data URL so the workflow stays completable.
    async fn resolve_upload(
        &self,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    ) -> Result<ResolvedMedia, MediaError> {
        if !content_type.starts_with("image/") {
            return Err(MediaError::NotAnImage { content_type });
        }
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(MediaError::FileTooLarge { size: bytes.len() });
        }

        match self.store.upload(&bytes, &file_name).await {
            Ok(public_url) => Ok(ResolvedMedia {
                url: public_url,
                suggested_name: Some(file_name),
                warning: None,
            }),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    file = %file_name,
                    "Upload failed, falling back to an inline data URL"
                );
                let payload = STANDARD.encode(&bytes);
                Ok(ResolvedMedia {
                    url: format!("data:{content_type};base64,{payload}"),
                    suggested_name: Some(file_name),
                    warning: Some(ResolutionWarning::UploadFallback {
                        reason: err.to_string(),
                    }),
                })
            }
        }
    }
}

fn drive_media(url: String, warning: Option<ResolutionWarning>) -> ResolvedMedia {
    ResolvedMedia {
        url,
        suggested_name: Some(DRIVE_DEFAULT_NAME.to_string()),
        warning,
    }
}
