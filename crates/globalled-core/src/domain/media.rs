//! Media reference types.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for a media reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(String);

impl MediaId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a media reference points at an image or a video.
///
/// All user-added media is [`MediaKind::Image`]; video entries only occur
/// in the seed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A resolved, directly renderable media pointer attached to a product.
///
/// `url` is always usable as-is by the time the reference exists: either a
/// dereferenceable URL or, as a last-resort upload fallback, an inline
/// base64 data URL. Resolution happens before the product is mutated,
/// never after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaReference {
    pub id: MediaId,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    /// Display name shown in the media list.
    pub name: String,
}

impl MediaReference {
    /// Construct an image reference with a fresh identifier.
    #[must_use]
    pub fn image(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: MediaId::generate(),
            kind: MediaKind::Image,
            url: url.into(),
            name: name.into(),
        }
    }
}
