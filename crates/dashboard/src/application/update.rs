//! Application update logic (Update in Elm architecture)
//!
//! Turns a message into a patch. Applying the patch and rendering is left to
//! the runtime in [`Application`](super::Application).

use tracing::{debug, error, info, instrument};

use super::{
    bindings::Bindings,
    requirements::PhotoQuery,
    state::{ApplicationState, Patch, PhotoSet},
};
use crate::message::{Action, AppMsg, Loaded};

/// Behavior switches for [`update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Drop photo responses for a rover/sol that is no longer selected
    pub discard_stale_photos: bool,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            discard_stale_photos: true,
        }
    }
}

/// What the runtime should do with a message
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Merge into the store
    Patch {
        patch: Patch,
        /// From a fetch, so identical data need not re-render
        from_fetch: bool,
    },
    Ignored,
    Quit,
}

#[instrument(level = "debug", skip(state, bindings, options))]
pub fn update(
    state: &ApplicationState,
    bindings: &Bindings,
    msg: AppMsg,
    options: UpdateOptions,
) -> Outcome {
    match msg {
        AppMsg::User(Action::Quit) => {
            info!("Quit requested");
            Outcome::Quit
        }

        AppMsg::User(action) => match bindings.route(state, &action) {
            Some(patch) => Outcome::Patch {
                patch,
                from_fetch: false,
            },
            None => Outcome::Ignored,
        },

        AppMsg::Loaded(loaded) => loaded_patch(state, loaded, options)
            .map_or(Outcome::Ignored, |patch| Outcome::Patch {
                patch,
                from_fetch: true,
            }),

        AppMsg::FetchFailed { requirement, error } => {
            error!(%requirement, %error, "Fetch failed");
            Outcome::Ignored
        }

        AppMsg::InputClosed => {
            debug!("Input closed");
            Outcome::Ignored
        }
    }
}

fn loaded_patch(state: &ApplicationState, loaded: Loaded, options: UpdateOptions) -> Option<Patch> {
    match loaded {
        Loaded::ImageOfTheDay(image) => Some(Patch::new().apod(Some(image))),
        Loaded::Manifests(manifests) => {
            info!(rovers = manifests.len(), "Manifests loaded");
            Some(Patch::new().rovers_manifest(Some(manifests)))
        }
        Loaded::Photos { query, photos } => {
            if options.discard_stale_photos && PhotoQuery::for_state(state) != Some(query) {
                debug!(%query, "Discarding stale photo response");
                return None;
            }
            info!(%query, count = photos.len(), "Photos loaded");
            Some(Patch::new().rover_photos(PhotoSet::Loaded(photos)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::requirements::Requirement;
    use chrono::NaiveDate;
    use mission_common::{Photo, Rover};

    fn gallery(rover: Rover, sol: u32) -> ApplicationState {
        let mut state = ApplicationState::new();
        state.rovers_manifest = Some(Vec::new());
        state.selected_rover = Some(rover);
        state.selected_sol = Some(sol);
        state.rover_max_sol = 100;
        state.rover_photos = PhotoSet::Pending;
        state
    }

    fn photos_for(rover: Rover, sol: u32) -> AppMsg {
        AppMsg::Loaded(Loaded::Photos {
            query: PhotoQuery { rover, sol },
            photos: vec![Photo {
                id: 1,
                img_src: "http://mars.jpl.nasa.gov/1.jpg".to_string(),
                earth_date: NaiveDate::from_ymd_opt(2015, 5, 30).unwrap(),
            }],
        })
    }

    fn run(state: &ApplicationState, msg: AppMsg, options: UpdateOptions) -> Outcome {
        update(state, &Bindings::for_state(state), msg, options)
    }

    #[test]
    fn test_quit() {
        let state = ApplicationState::new();
        assert_eq!(
            run(&state, AppMsg::User(Action::Quit), UpdateOptions::default()),
            Outcome::Quit
        );
    }

    #[test]
    fn test_matching_photos_are_applied() {
        let state = gallery(Rover::Curiosity, 10);
        match run(&state, photos_for(Rover::Curiosity, 10), UpdateOptions::default()) {
            Outcome::Patch { patch, from_fetch } => {
                assert!(from_fetch);
                assert!(matches!(
                    patch.rover_photos,
                    Some(PhotoSet::Loaded(ref p)) if p.len() == 1
                ));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_stale_photos_are_discarded() {
        let state = gallery(Rover::Curiosity, 11);
        assert_eq!(
            run(&state, photos_for(Rover::Curiosity, 10), UpdateOptions::default()),
            Outcome::Ignored
        );
        assert_eq!(
            run(&state, photos_for(Rover::Spirit, 11), UpdateOptions::default()),
            Outcome::Ignored
        );
    }

    #[test]
    fn test_stale_photos_applied_when_discard_disabled() {
        let state = gallery(Rover::Curiosity, 11);
        let options = UpdateOptions {
            discard_stale_photos: false,
        };
        assert!(matches!(
            run(&state, photos_for(Rover::Spirit, 3), options),
            Outcome::Patch { .. }
        ));
    }

    #[test]
    fn test_fetch_failure_applies_nothing() {
        let state = ApplicationState::new();
        let msg = AppMsg::FetchFailed {
            requirement: Requirement::Manifest,
            error: "connection refused".to_string(),
        };
        assert_eq!(run(&state, msg, UpdateOptions::default()), Outcome::Ignored);
    }

    #[test]
    fn test_user_action_routes_through_bindings() {
        let state = gallery(Rover::Curiosity, 10);
        match run(&state, AppMsg::User(Action::PreviousSol), UpdateOptions::default()) {
            Outcome::Patch { patch, from_fetch } => {
                assert!(!from_fetch);
                assert_eq!(patch.selected_sol, Some(Some(9)));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}
