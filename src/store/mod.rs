use crate::{error::Result, form::PodFormState};
use tracing::{info, warn};

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Fixed key the form state is stored under
pub const STATE_KEY: &str = "podGeneratorState";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Saves and restores the form state under [`STATE_KEY`]
pub struct StateStore<S> {
    backend: S,
}

impl<S: KeyValueStore> StateStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn save(&mut self, state: &PodFormState) -> Result<()> {
        let json = serde_json::to_string(state)?;
        self.backend.set(STATE_KEY, &json)?;
        info!("Saved form state for {}", display_name(state));
        Ok(())
    }

    /// Previously saved state. Missing, unreadable or malformed data means "no prior state".
    pub fn load(&self) -> Option<PodFormState> {
        let raw = match self.backend.get(STATE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Could not read saved form state: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<PodFormState>(&raw) {
            Ok(state) => {
                info!("Loaded saved form state for {}", display_name(&state));
                Some(state)
            }
            Err(e) => {
                warn!("Discarding malformed saved form state: {}", e);
                None
            }
        }
    }

    /// Forget the saved state (the "reset form" action)
    pub fn clear(&mut self) -> Result<()> {
        self.backend.remove(STATE_KEY)?;
        info!("Cleared saved form state");
        Ok(())
    }
}

fn display_name(state: &PodFormState) -> &str {
    crate::form::non_blank(&state.pod_name).unwrap_or("<unnamed pod>")
}
