//! Integration tests for the media resolution workflow.
//!
//! These run the full add-media path (resolver, session, and ports)
//! against recording fakes. No network access is required.
//!
//! # What is tested
//!
//! - Drive share-link extraction and the probe-steered URL choice
//! - Stock search filtering with the never-empty fallback
//! - Upload validation order and the data-URL degradation path
//! - Stale completions being discarded after the form is reset
//! - Committed references landing on a product through a media patch

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tokio::sync::Notify;

use globalled_core::{
    CatalogStore, DRIVE_DEFAULT_NAME, FixedStockLibrary, ImageProbePort, MAX_UPLOAD_BYTES,
    MediaError, MediaKind, MediaResolver, MediaSession, MediaSource, ObjectStorePort,
    ProductPatch, ResolutionWarning, ResolveOutcome, StorageError, drive_thumbnail_url,
    drive_view_url, extract_drive_file_id,
};

// ── Fakes ──────────────────────────────────────────────────────────

/// Object store that records suggested names and either succeeds with a
/// fixed public URL or fails with a fixed reason.
struct RecordingStore {
    public_url: Option<String>,
    uploads: Arc<Mutex<Vec<String>>>,
}

impl RecordingStore {
    fn succeeding(public_url: &str) -> Self {
        Self {
            public_url: Some(public_url.to_string()),
            uploads: Arc::default(),
        }
    }

    fn failing() -> Self {
        Self {
            public_url: None,
            uploads: Arc::default(),
        }
    }
}

#[async_trait]
impl ObjectStorePort for RecordingStore {
    async fn upload(&self, _bytes: &[u8], suggested_name: &str) -> Result<String, StorageError> {
        self.uploads.lock().unwrap().push(suggested_name.to_string());
        match &self.public_url {
            Some(url) => Ok(url.clone()),
            None => Err(StorageError::Unavailable("bucket is offline".to_string())),
        }
    }

    async fn delete(&self, _public_url: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Probe that answers from a fixed reachable set and records every URL it
/// was asked about.
struct ScriptedProbe {
    reachable: Vec<String>,
    probed: Arc<Mutex<Vec<String>>>,
}

impl ScriptedProbe {
    fn reachable(urls: &[String]) -> Self {
        Self {
            reachable: urls.to_vec(),
            probed: Arc::default(),
        }
    }

    fn nothing_reachable() -> Self {
        Self::reachable(&[])
    }
}

#[async_trait]
impl ImageProbePort for ScriptedProbe {
    async fn probe(&self, url: &str) -> bool {
        self.probed.lock().unwrap().push(url.to_string());
        self.reachable.iter().any(|candidate| candidate == url)
    }
}

/// Probe that parks until released, for observing in-flight windows.
struct GatedProbe {
    entered: Notify,
    release: Notify,
}

impl GatedProbe {
    fn new() -> Self {
        Self {
            entered: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl ImageProbePort for GatedProbe {
    async fn probe(&self, _url: &str) -> bool {
        self.entered.notify_one();
        self.release.notified().await;
        true
    }
}

// ── Helpers ────────────────────────────────────────────────────────

fn resolver(store: RecordingStore, probe: ScriptedProbe) -> MediaResolver {
    MediaResolver::new(
        Arc::new(store),
        Arc::new(probe),
        Arc::new(FixedStockLibrary::new()),
    )
}

fn upload_source(file_name: &str, content_type: &str, bytes: Vec<u8>) -> MediaSource {
    MediaSource::LocalUpload {
        file_name: file_name.to_string(),
        content_type: content_type.to_string(),
        bytes,
    }
}

// ── Drive link handling ────────────────────────────────────────────

#[test]
fn drive_extraction_matches_known_share_link_shapes() {
    assert_eq!(
        extract_drive_file_id("https://drive.google.com/file/d/ABC123/view?usp=sharing"),
        Some("ABC123")
    );
    assert_eq!(
        extract_drive_file_id("https://drive.google.com/open?id=XYZ789"),
        Some("XYZ789")
    );
    assert_eq!(extract_drive_file_id("https://example.com/photo.jpg"), None);
}

#[tokio::test]
async fn invalid_drive_link_fails_before_any_probe() {
    let probe = ScriptedProbe::nothing_reachable();
    let probed = probe.probed.clone();
    let resolver = resolver(RecordingStore::failing(), probe);

    let err = resolver
        .resolve(MediaSource::DriveLink {
            share_url: "https://example.com/not-drive".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, MediaError::InvalidDriveLink { .. }));
    assert!(probed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn probe_steers_the_drive_url_choice() {
    let thumbnail = drive_thumbnail_url("ABC123");
    let probe = ScriptedProbe::reachable(std::slice::from_ref(&thumbnail));
    let probed = probe.probed.clone();
    let resolver = resolver(RecordingStore::failing(), probe);

    let resolved = resolver
        .resolve(MediaSource::DriveLink {
            share_url: "https://drive.google.com/file/d/ABC123/view".to_string(),
        })
        .await
        .unwrap();

    // Primary was tried first, then the thumbnail won
    assert_eq!(
        probed.lock().unwrap().as_slice(),
        [drive_view_url("ABC123"), thumbnail.clone()]
    );
    assert_eq!(resolved.url, thumbnail);
    assert!(resolved.warning.is_none());
}

#[tokio::test]
async fn unreachable_drive_candidates_keep_primary_with_warning() {
    let resolver = resolver(RecordingStore::failing(), ScriptedProbe::nothing_reachable());

    let resolved = resolver
        .resolve(MediaSource::DriveLink {
            share_url: "https://drive.google.com/file/d/ABC123/view".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(resolved.url, drive_view_url("ABC123"));
    assert_eq!(resolved.warning, Some(ResolutionWarning::PreviewUnreachable));
    assert_eq!(resolved.suggested_name.as_deref(), Some(DRIVE_DEFAULT_NAME));
}

// ── Stock search ───────────────────────────────────────────────────

#[tokio::test]
async fn stock_search_honors_keywords_and_fallback() {
    let resolver = resolver(RecordingStore::failing(), ScriptedProbe::nothing_reachable());

    let keyword_hits = resolver.search_stock("led").await.unwrap();
    assert!(!keyword_hits.is_empty());

    let fallback = resolver.search_stock("xyzzy").await.unwrap();
    assert_eq!(fallback.len(), 3);
    let ids: Vec<&str> = fallback.iter().map(|image| image.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);

    let err = resolver.search_stock("   ").await.unwrap_err();
    assert!(matches!(err, MediaError::EmptyQuery));
}

// ── Upload validation and degradation ──────────────────────────────

#[tokio::test]
async fn oversized_upload_is_rejected_before_the_gateway() {
    let store = RecordingStore::succeeding("https://cdn.example.com/too-big.jpg");
    let uploads = store.uploads.clone();
    let resolver = resolver(store, ScriptedProbe::nothing_reachable());

    let err = resolver
        .resolve(upload_source(
            "too-big.jpg",
            "image/jpeg",
            vec![0; MAX_UPLOAD_BYTES + 1],
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, MediaError::FileTooLarge { .. }));
    assert!(uploads.lock().unwrap().is_empty());
}

#[tokio::test]
async fn gateway_failure_falls_back_to_a_lossless_data_url() {
    let resolver = resolver(RecordingStore::failing(), ScriptedProbe::nothing_reachable());
    let bytes: Vec<u8> = (0..=255).collect();

    let resolved = resolver
        .resolve(upload_source("pattern.png", "image/png", bytes.clone()))
        .await
        .unwrap();

    // Never a stuck/empty state: the fallback URL is present and typed
    let payload = resolved
        .url
        .strip_prefix("data:image/png;base64,")
        .expect("fallback is a typed data URL");
    assert_eq!(STANDARD.decode(payload).unwrap(), bytes);
    assert!(matches!(
        resolved.warning,
        Some(ResolutionWarning::UploadFallback { .. })
    ));
}

// ── Session staleness ──────────────────────────────────────────────

#[tokio::test]
async fn stale_resolution_after_reset_leaves_the_new_form_untouched() {
    let probe = Arc::new(GatedProbe::new());
    let resolver = MediaResolver::new(
        Arc::new(RecordingStore::failing()),
        probe.clone(),
        Arc::new(FixedStockLibrary::new()),
    );
    let session = Arc::new(MediaSession::new(resolver, Vec::new()));

    let first = session.begin();
    let task = tokio::spawn({
        let session = session.clone();
        async move {
            session
                .resolve(
                    first,
                    MediaSource::DriveLink {
                        share_url: "https://drive.google.com/file/d/ABC123/view".to_string(),
                    },
                )
                .await
        }
    });

    probe.entered.notified().await;
    let second = session.begin();
    probe.release.notify_one();

    let outcome = task.await.unwrap().unwrap();
    assert!(matches!(outcome, ResolveOutcome::Stale));

    assert!(session.draft_url().is_none());
    let err = session.commit(second).unwrap_err();
    assert!(matches!(err, MediaError::MissingFields));
}

// ── Full add-media round through the catalog ───────────────────────

#[tokio::test]
async fn committed_media_lands_on_the_product_via_update() {
    let store = CatalogStore::seeded();
    let product = store.list(Some("Avize"))[0].clone();

    let resolver = resolver(
        RecordingStore::succeeding("https://cdn.example.com/avize-detay.jpg"),
        ScriptedProbe::nothing_reachable(),
    );
    let session = MediaSession::new(resolver, product.media.clone());

    let token = session.begin();
    session
        .resolve(
            token,
            upload_source("avize-detay.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0]),
        )
        .await
        .unwrap();
    let committed = session.commit(token).unwrap();
    assert_eq!(committed.kind, MediaKind::Image);
    assert_eq!(committed.name, "avize-detay.jpg");

    let merged = store
        .update(&product.id, ProductPatch::media(session.into_media()))
        .expect("product exists");

    assert_eq!(merged.media.len(), product.media.len() + 1);
    let added = merged.media.last().unwrap();
    assert_eq!(added.url, "https://cdn.example.com/avize-detay.jpg");
    assert_eq!(added.kind, MediaKind::Image);
}
