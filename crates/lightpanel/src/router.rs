//! Click routing.
//!
//! The [`EventRouter`] is the single owner of the live [`PanelState`]. It turns
//! raw click ids into [`ToggleId`]s, applies the transition, redraws every
//! renderer and kicks off a remote sync without waiting for it.

use std::str::FromStr;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::panel::toggle;
use crate::panel::PanelState;
use crate::panel::ToggleId;
use crate::render::Renderer;
use crate::store;
use crate::store::StateStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClickError {
    #[error("Click target has no identifier")]
    MissingIdentifier,

    #[error("Unknown identifier: {0}")]
    UnknownIdentifier(String),
}

/// Resolve a raw element id to the control it belongs to.
///
/// Repeated instances of a control carry a numeric suffix (`hallCorner3`),
/// which is dropped.
pub fn resolve(raw: &str) -> Result<ToggleId, ClickError> {
    if raw.is_empty() {
        return Err(ClickError::MissingIdentifier);
    }

    let base = raw.trim_end_matches(|c: char| c.is_ascii_digit());
    ToggleId::from_str(base).map_err(|_| ClickError::UnknownIdentifier(raw.to_string()))
}

pub struct EventRouter {
    state: PanelState,
    renderers: Vec<Box<dyn Renderer>>,
    store: Option<Arc<dyn StateStore>>,
}

impl EventRouter {
    pub fn new() -> Self {
        Self {
            state: PanelState::default(),
            renderers: Vec::new(),
            store: None,
        }
    }

    /// Sync every future transition to `store`.
    pub fn with_store(mut self, store: Arc<dyn StateStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn add_renderer(&mut self, renderer: Box<dyn Renderer>) {
        self.renderers.push(renderer);
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Handle a click on the element with id `id`.
    pub fn click(&mut self, id: &str) -> Option<ToggleId> {
        self.handle_click(id, "")
    }

    /// Handle a click, preferring the id of the element the handler is bound
    /// to and falling back to the element actually clicked.
    ///
    /// Returns the control that was toggled, or `None` if the click was
    /// ignored.
    pub fn handle_click(&mut self, current_target: &str, target: &str) -> Option<ToggleId> {
        let raw = if current_target.is_empty() {
            target
        } else {
            current_target
        };

        match resolve(raw) {
            Ok(id) => {
                self.apply(id);
                Some(id)
            }
            Err(e) => {
                debug!("Ignoring click: {}", e);
                None
            }
        }
    }

    /// Toggle `id` and propagate the new state.
    pub fn apply(&mut self, id: ToggleId) {
        self.state = toggle(&self.state, id);
        info!(
            "Toggled {}: {} groups on, {} edges",
            id,
            self.state.active.len(),
            self.state.edges.len()
        );

        for renderer in &mut self.renderers {
            renderer.render(&self.state);
        }

        // Fire and forget; a later click never waits on this one.
        let _ = self.sync();
    }

    /// Spawn a push of the current state to the remote store.
    ///
    /// Returns `None` when no store is configured or there is no runtime to
    /// run the push on.
    pub fn sync(&self) -> Option<JoinHandle<()>> {
        let remote = self.store.clone()?;

        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!("No async runtime, skipping remote sync");
                return None;
            }
        };

        let active = self.state.active.clone();
        Some(handle.spawn(async move {
            if let Err(e) = store::sync(remote.as_ref(), &active).await {
                warn!("Remote state sync failed: {}", e);
            }
        }))
    }
}

impl Default for EventRouter {
    fn default() -> Self {
        Self::new()
    }
}
