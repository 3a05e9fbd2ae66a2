//! State store: merge patches into immutable snapshots

use std::sync::Arc;

use tracing::debug;

use super::state::{ApplicationState, Patch};

/// Build the next snapshot: every field present in `patch` replaces the
/// current value wholesale, every other field is carried over.
pub fn merge(current: &ApplicationState, patch: Patch) -> ApplicationState {
    let Patch {
        apod,
        rover_photos,
        selected_rover,
        selected_sol,
        rover_max_sol,
        sol_date,
        rovers_manifest,
    } = patch;

    ApplicationState {
        apod: apod.unwrap_or_else(|| current.apod.clone()),
        rover_photos: rover_photos.unwrap_or_else(|| current.rover_photos.clone()),
        selected_rover: selected_rover.unwrap_or(current.selected_rover),
        selected_sol: selected_sol.unwrap_or(current.selected_sol),
        rover_max_sol: rover_max_sol.unwrap_or(current.rover_max_sol),
        sol_date: sol_date.unwrap_or(current.sol_date),
        rovers_manifest: rovers_manifest.unwrap_or_else(|| current.rovers_manifest.clone()),
        rovers: current.rovers.clone(),
    }
}

/// Holds the current snapshot. The only writer of application state.
#[derive(Debug, Clone)]
pub struct Store {
    state: Arc<ApplicationState>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(ApplicationState::new())
    }
}

impl Store {
    pub fn new(initial: ApplicationState) -> Self {
        Self {
            state: Arc::new(initial),
        }
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    /// Shared handle to the current snapshot
    pub fn snapshot(&self) -> Arc<ApplicationState> {
        Arc::clone(&self.state)
    }

    /// Merge `patch` and replace the snapshot. Returns whether to render.
    pub fn apply(&mut self, patch: Patch) -> bool {
        self.apply_guarded(patch, |_| false)
    }

    /// Like [`apply`](Self::apply), but `skip_render` is evaluated against
    /// the pre-merge snapshot. The snapshot is replaced either way.
    pub fn apply_guarded<F>(&mut self, patch: Patch, skip_render: F) -> bool
    where
        F: FnOnce(&ApplicationState) -> bool,
    {
        let skip = skip_render(&self.state);
        let next = merge(&self.state, patch);
        self.state = Arc::new(next);
        debug!(skip_render = skip, "State patched");
        !skip
    }
}
