//! Add-media editing session.
//!
//! One session per open edit form. The session owns the product's working
//! media list plus the add-form draft, and guards against async resolutions
//! landing in a form that was reset or closed while they were in flight.
//!
//! # Staleness
//!
//! Every opening of the add form mints a [`SessionToken`] from a generation
//! counter. Async completions carry the token they started under; a
//! completion whose token no longer matches the live generation is discarded
//! without touching the draft. `begin`, `cancel`, and a successful `commit`
//! all advance the generation.

use std::sync::{Mutex, MutexGuard};

use crate::domain::{MediaId, MediaReference};

use super::MediaError;
use super::resolver::{MediaResolver, ResolutionWarning, ResolvedMedia};
use super::source::MediaSource;

/// Identifies one opening of the add-media form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionToken(u64);

/// Result of running a resolution against the session.
#[derive(Debug)]
pub enum ResolveOutcome {
    /// The resolution landed in the current draft.
    Applied(ResolvedMedia),
    /// The form moved on while the resolution was in flight; nothing
    /// changed.
    Stale,
}

/// The add form's working state between `begin` and `commit`/`cancel`.
#[derive(Debug, Default)]
struct Draft {
    url: Option<String>,
    name: String,
    suggested_name: Option<String>,
    warning: Option<ResolutionWarning>,
    busy: bool,
}

struct SessionState {
    /// Bumped on every begin/cancel/commit; tokens from older generations
    /// are stale.
    generation: u64,
    media: Vec<MediaReference>,
    draft: Draft,
}

/// Cancellable add-media workflow over one product's media list.
///
/// The caller lands the final list on the catalog via an update with a
/// `media` patch; the session itself never touches the store.
pub struct MediaSession {
    resolver: MediaResolver,
    state: Mutex<SessionState>,
}

impl MediaSession {
    #[must_use]
    pub fn new(resolver: MediaResolver, initial_media: Vec<MediaReference>) -> Self {
        Self {
            resolver,
            state: Mutex::new(SessionState {
                generation: 0,
                media: initial_media,
                draft: Draft::default(),
            }),
        }
    }

    /// Open (or reopen) the add form with an empty draft.
    ///
    /// Any resolution still in flight for an earlier opening becomes stale.
    pub fn begin(&self) -> SessionToken {
        let mut state = self.lock();
        state.generation += 1;
        state.draft = Draft::default();
        SessionToken(state.generation)
    }

    /// Resolve a source into the draft.
    ///
    /// The draft is busy while the resolver runs; `commit` in that window
    /// fails with [`MediaError::ResolutionInFlight`]. When the form was
    /// reset or closed during the suspension, the completion is discarded
    /// and `Ok(Stale)` is returned; a validation error from a stale
    /// resolution is swallowed the same way.
    pub async fn resolve(
        &self,
        token: SessionToken,
        source: MediaSource,
    ) -> Result<ResolveOutcome, MediaError> {
        {
            let mut state = self.lock();
            if state.generation != token.0 {
                tracing::debug!(token = token.0, "Ignoring resolution for a stale form");
                return Ok(ResolveOutcome::Stale);
            }
            state.draft.busy = true;
        }

        // Suspension point; the lock is not held here
        let resolved = self.resolver.resolve(source).await;

        let mut state = self.lock();
        if state.generation != token.0 {
            tracing::debug!(token = token.0, "Discarding stale resolution");
            return Ok(ResolveOutcome::Stale);
        }
        state.draft.busy = false;
        match resolved {
            Ok(media) => {
                state.draft.url = Some(media.url.clone());
                state.draft.suggested_name = media.suggested_name.clone();
                state.draft.warning = media.warning.clone();
                Ok(ResolveOutcome::Applied(media))
            }
            Err(err) => Err(err),
        }
    }

    /// Record the user-typed display name. Ignored for stale tokens.
    pub fn set_name(&self, token: SessionToken, name: impl Into<String>) {
        let mut state = self.lock();
        if state.generation != token.0 {
            return;
        }
        state.draft.name = name.into();
    }

    /// Append the drafted reference to the working list and close the form.
    ///
    /// Requires a resolved URL and a display name; the user-typed name wins
    /// over the resolver's suggestion. The committed reference is always
    /// [`MediaKind::Image`](crate::domain::MediaKind::Image).
    pub fn commit(&self, token: SessionToken) -> Result<MediaReference, MediaError> {
        let mut state = self.lock();
        if state.generation != token.0 {
            return Err(MediaError::StaleSession);
        }
        if state.draft.busy {
            return Err(MediaError::ResolutionInFlight);
        }

        let Some(url) = state.draft.url.clone() else {
            return Err(MediaError::MissingFields);
        };
        let typed = state.draft.name.trim().to_string();
        let name = if typed.is_empty() {
            state.draft.suggested_name.clone().unwrap_or_default()
        } else {
            typed
        };
        if url.trim().is_empty() || name.is_empty() {
            return Err(MediaError::MissingFields);
        }

        let reference = MediaReference::image(url.trim(), name);
        state.media.push(reference.clone());
        state.generation += 1;
        state.draft = Draft::default();
        tracing::debug!(id = %reference.id, "Committed media reference");
        Ok(reference)
    }

    /// Close the add form, discarding the draft and any in-flight work.
    ///
    /// A stale token is a no-op; the form it belonged to is already gone.
    pub fn cancel(&self, token: SessionToken) {
        let mut state = self.lock();
        if state.generation != token.0 {
            return;
        }
        state.generation += 1;
        state.draft = Draft::default();
        tracing::debug!("Cancelled add-media form");
    }

    /// The working media list as it stands.
    #[must_use]
    pub fn media(&self) -> Vec<MediaReference> {
        self.lock().media.clone()
    }

    /// Remove one reference from the working list by id.
    ///
    /// Returns whether anything was removed. The backing storage object, if
    /// any, is not touched.
    pub fn remove(&self, media_id: &MediaId) -> bool {
        let mut state = self.lock();
        let before = state.media.len();
        state.media.retain(|reference| &reference.id != media_id);
        before != state.media.len()
    }

    /// The draft's resolved URL, for preview rendering.
    #[must_use]
    pub fn draft_url(&self) -> Option<String> {
        self.lock().draft.url.clone()
    }

    /// The advisory warning attached to the current draft, if any.
    #[must_use]
    pub fn draft_warning(&self) -> Option<ResolutionWarning> {
        self.lock().draft.warning.clone()
    }

    /// Consume the session, yielding the final media list for a product
    /// update.
    #[must_use]
    pub fn into_media(self) -> Vec<MediaReference> {
        self.state.into_inner().expect("session lock poisoned").media
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().expect("session lock poisoned")
    }
}
