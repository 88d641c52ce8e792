//! Remote persistence of which lights are on.
//!
//! Syncing is best effort: the router spawns [`sync`] after every transition
//! and only logs failures.

mod http;

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use async_trait::async_trait;
use tracing::debug;

use crate::panel::ElementaryGroup;

pub use http::HttpStateStore;

/// Light name -> status, as exchanged with the remote store.
pub type LightStatuses = BTreeMap<String, String>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Request to remote store failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote store at {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Remote store unavailable: {0}")]
    Unavailable(String),
}

/// Trait for remote state store operations
///
/// This trait allows for mocking the remote store for testing purposes
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Read the remote view of every light.
    async fn fetch_all(&self) -> Result<serde_json::Value, StoreError>;

    /// Replace the remote view of every light.
    async fn push_all(&self, statuses: &LightStatuses) -> Result<(), StoreError>;
}

/// Statuses to publish for `active`: lit groups map to `"on"`, unlit groups
/// are left out.
pub fn payload(active: &BTreeSet<ElementaryGroup>) -> LightStatuses {
    active
        .iter()
        .map(|group| (group.to_string(), "on".to_string()))
        .collect()
}

/// Push `active` to the remote store.
///
/// The remote view is fetched first but never merged into what gets pushed.
pub async fn sync(
    store: &dyn StateStore,
    active: &BTreeSet<ElementaryGroup>,
) -> Result<(), StoreError> {
    match store.fetch_all().await {
        Ok(remote) => debug!("Remote store reported {} (discarded)", remote),
        Err(e) => debug!("Remote store read failed: {}", e),
    }

    let statuses = payload(active);
    store.push_all(&statuses).await?;
    debug!("Pushed {} lit groups to remote store", statuses.len());
    Ok(())
}

/// Mock remote store for testing
#[cfg(test)]
pub struct MockStateStore {
    pub remote: serde_json::Value,
    pub fail: bool,
    pushed: tokio::sync::mpsc::UnboundedSender<LightStatuses>,
}

#[cfg(test)]
impl MockStateStore {
    /// Create a mock and the receiver that sees every push
    pub fn new() -> (Self, tokio::sync::mpsc::UnboundedReceiver<LightStatuses>) {
        let (pushed, rx) = tokio::sync::mpsc::unbounded_channel();
        let store = Self {
            remote: serde_json::json!({ "roomLight": "off" }),
            fail: false,
            pushed,
        };
        (store, rx)
    }

    pub fn failing() -> (Self, tokio::sync::mpsc::UnboundedReceiver<LightStatuses>) {
        let (mut store, rx) = Self::new();
        store.fail = true;
        (store, rx)
    }
}

#[cfg(test)]
#[async_trait]
impl StateStore for MockStateStore {
    async fn fetch_all(&self) -> Result<serde_json::Value, StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("mock".to_string()));
        }
        Ok(self.remote.clone())
    }

    async fn push_all(&self, statuses: &LightStatuses) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("mock".to_string()));
        }
        self.pushed.send(statuses.clone()).ok();
        Ok(())
    }
}
