//! Recording fakes for the collaborator ports, shared by unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::media::MediaResolver;
use crate::media::stock::FixedStockLibrary;
use crate::ports::{ImageProbePort, ObjectStorePort, StorageError};

/// Object-store fake with a fixed outcome and a log of received names.
pub(crate) struct FakeStore {
    outcome: Outcome,
    /// Suggested names received by `upload`, in call order.
    pub(crate) uploads: Arc<Mutex<Vec<String>>>,
}

enum Outcome {
    Succeed(String),
    Fail(String),
}

impl FakeStore {
    pub(crate) fn succeeding(public_url: &str) -> Self {
        Self {
            outcome: Outcome::Succeed(public_url.to_string()),
            uploads: Arc::default(),
        }
    }

    pub(crate) fn failing(reason: &str) -> Self {
        Self {
            outcome: Outcome::Fail(reason.to_string()),
            uploads: Arc::default(),
        }
    }
}

#[async_trait]
impl ObjectStorePort for FakeStore {
    async fn upload(&self, _bytes: &[u8], suggested_name: &str) -> Result<String, StorageError> {
        self.uploads.lock().unwrap().push(suggested_name.to_string());
        match &self.outcome {
            Outcome::Succeed(url) => Ok(url.clone()),
            Outcome::Fail(reason) => Err(StorageError::Unavailable(reason.clone())),
        }
    }

    async fn delete(&self, _public_url: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Probe fake answering from a fixed reachable set, recording every URL.
pub(crate) struct FakeProbe {
    reachable: Vec<String>,
    pub(crate) probed: Arc<Mutex<Vec<String>>>,
}

impl FakeProbe {
    /// A probe for which nothing is reachable.
    pub(crate) fn none() -> Self {
        Self {
            reachable: Vec::new(),
            probed: Arc::default(),
        }
    }

    pub(crate) fn reachable(urls: &[&str]) -> Self {
        Self {
            reachable: urls.iter().map(ToString::to_string).collect(),
            probed: Arc::default(),
        }
    }
}

#[async_trait]
impl ImageProbePort for FakeProbe {
    async fn probe(&self, url: &str) -> bool {
        self.probed.lock().unwrap().push(url.to_string());
        self.reachable.iter().any(|candidate| candidate == url)
    }
}

pub(crate) fn resolver_with(store: FakeStore, probe: FakeProbe) -> MediaResolver {
    MediaResolver::new(
        Arc::new(store),
        Arc::new(probe),
        Arc::new(FixedStockLibrary::new()),
    )
}
