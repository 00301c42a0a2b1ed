use crate::activity::state::{ActivityState, PointerButton};
use crate::store::json_store::JsonStore;

/// Owner of the live snapshot, mirrored to disk on every transition.
pub struct ActivityStore {
    state: ActivityState,
    storage: Option<JsonStore>,
}

impl ActivityStore {
    /// Load the previous snapshot, or start from zero if there is none or it
    /// cannot be read.
    pub fn open(storage: JsonStore) -> Self {
        let state = match storage.load_activity() {
            Ok(Some(state)) => {
                log::info!(
                    "restored activity: {} clicks, {} keys",
                    state.total_clicks(),
                    state.total_keys()
                );
                state
            }
            Ok(None) => {
                log::debug!("no saved activity, starting from zero");
                ActivityState::default()
            }
            Err(err) => {
                log::warn!("failed to load saved activity, starting from zero: {err}");
                ActivityState::default()
            }
        };
        Self {
            state,
            storage: Some(storage),
        }
    }

    /// A store that keeps its snapshot in memory only.
    pub fn in_memory() -> Self {
        Self {
            state: ActivityState::default(),
            storage: None,
        }
    }

    pub fn state(&self) -> &ActivityState {
        &self.state
    }

    pub fn pointer_down(&mut self, button: PointerButton) {
        let next = self.state.with_pointer_down(button);
        self.replace(next);
    }

    pub fn key_down(&mut self, key: &str) {
        let next = self.state.with_key_down(key);
        self.replace(next);
    }

    pub fn reset(&mut self) {
        if self.state.is_empty() {
            log::debug!("reset with nothing counted");
        }
        self.state = ActivityState::default();
        if let Some(ref storage) = self.storage {
            match storage.clear_activity() {
                Ok(()) => log::info!("activity reset"),
                Err(err) => log::warn!("failed to clear saved activity: {err}"),
            }
        }
    }

    fn replace(&mut self, next: ActivityState) {
        if next == self.state {
            return;
        }
        if let Some(ref storage) = self.storage
            && let Err(err) = storage.save_activity(&next)
        {
            log::warn!("failed to save activity: {err}");
        }
        self.state = next;
    }
}
