//! Remote data the current view is missing
//!
//! The view functions never fetch. After every render the runtime asks
//! [`requirements`] what is absent and hands the answer to the
//! [`FetchScheduler`](crate::services::FetchScheduler).

use std::collections::BTreeSet;
use std::fmt;

use mission_common::{Rover, Sol};

use super::state::ApplicationState;

/// Rover and sol a photo request was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoQuery {
    pub rover: Rover,
    pub sol: Sol,
}

impl PhotoQuery {
    /// Query for whatever the state currently has selected
    pub fn for_state(state: &ApplicationState) -> Option<Self> {
        state.selected_rover.map(|rover| Self {
            rover,
            sol: state.current_sol(),
        })
    }
}

impl fmt::Display for PhotoQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.rover, self.sol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Requirement {
    Manifest,
    ImageOfTheDay,
    Photos(PhotoQuery),
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Manifest => f.write_str("manifest"),
            Requirement::ImageOfTheDay => f.write_str("image-of-the-day"),
            Requirement::Photos(query) => write!(f, "photos {}", query),
        }
    }
}

/// Data the view built from `state` shows a loading indicator for
pub fn requirements(state: &ApplicationState) -> BTreeSet<Requirement> {
    let mut needed = BTreeSet::new();

    // Nothing but the loader renders until the manifest arrives
    if state.rovers_manifest.is_none() {
        needed.insert(Requirement::Manifest);
        return needed;
    }

    match PhotoQuery::for_state(state) {
        Some(query) if !state.rover_photos.is_loaded() => {
            needed.insert(Requirement::Photos(query));
        }
        Some(_) => {}
        None => {
            if state.apod.is_none() {
                needed.insert(Requirement::ImageOfTheDay);
            }
        }
    }

    needed
}
