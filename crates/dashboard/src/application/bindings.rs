//! Which controls the last render produced, and what each one does
//!
//! Rebuilt after every render so an action can only reach a control that is
//! actually on screen.

use tracing::debug;

use super::state::{ApplicationState, Patch, PhotoSet};
use crate::message::Action;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bindings {
    /// Header and roster navigation
    pub rover_nav: bool,
    /// Sol back/forward buttons
    pub sol_nav: bool,
}

impl Bindings {
    pub fn for_state(state: &ApplicationState) -> Self {
        Self {
            rover_nav: state.rovers_manifest.is_some(),
            sol_nav: state.selected_rover.is_some()
                && state.rover_photos != PhotoSet::NotRequested,
        }
    }

    /// Patch for `action`, or `None` when its control is unbound or disabled
    pub fn route(&self, state: &ApplicationState, action: &Action) -> Option<Patch> {
        match action {
            Action::Navigate(value) if self.rover_nav => Some(navigate(state, value)),
            Action::NextSol if self.sol_nav => next_sol(state),
            Action::PreviousSol if self.sol_nav => previous_sol(state),
            Action::Quit => None,
            _ => {
                debug!(?action, "No control bound for action");
                None
            }
        }
    }
}

fn navigate(state: &ApplicationState, value: &str) -> Patch {
    let Some(rover) = state.known_rover(value) else {
        return Patch::new()
            .selected_rover(None)
            .selected_sol(None)
            .rover_photos(PhotoSet::Pending);
    };

    let (max_sol, sol_date) = match state.manifest_for(rover) {
        Some(entry) => (entry.max_sol, Some(entry.max_date)),
        None => (0, None),
    };

    Patch::new()
        .selected_rover(Some(rover))
        .rover_max_sol(max_sol)
        .selected_sol(Some(max_sol))
        .rover_photos(PhotoSet::Pending)
        .sol_date(sol_date)
}

fn next_sol(state: &ApplicationState) -> Option<Patch> {
    let sol = state.current_sol().checked_add(1)?;
    if sol > state.rover_max_sol {
        return None;
    }
    Some(
        Patch::new()
            .selected_sol(Some(sol))
            .rover_photos(PhotoSet::Pending),
    )
}

fn previous_sol(state: &ApplicationState) -> Option<Patch> {
    let sol = state.current_sol().checked_sub(1)?;
    Some(
        Patch::new()
            .selected_sol(Some(sol))
            .rover_photos(PhotoSet::Pending),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::store::merge;
    use chrono::NaiveDate;
    use mission_common::{Rover, RoverManifest};

    fn manifest(name: &str, max_sol: u32) -> RoverManifest {
        RoverManifest {
            name: name.to_string(),
            status: "active".to_string(),
            landing_date: NaiveDate::from_ymd_opt(2012, 8, 6).unwrap(),
            launch_date: NaiveDate::from_ymd_opt(2011, 11, 26).unwrap(),
            max_sol,
            max_date: NaiveDate::from_ymd_opt(2019, 9, 28).unwrap(),
            total_photos: 366206,
        }
    }

    fn dashboard() -> ApplicationState {
        let mut state = ApplicationState::new();
        state.rovers_manifest = Some(vec![manifest("Curiosity", 2540), manifest("Spirit", 2208)]);
        state
    }

    fn gallery(sol: u32, max_sol: u32) -> ApplicationState {
        let mut state = dashboard();
        state.selected_rover = Some(Rover::Curiosity);
        state.selected_sol = Some(sol);
        state.rover_max_sol = max_sol;
        state.rover_photos = PhotoSet::Loaded(Vec::new());
        state
    }

    fn route(state: &ApplicationState, action: Action) -> Option<Patch> {
        Bindings::for_state(state).route(state, &action)
    }

    #[test]
    fn test_navigate_to_rover_jumps_to_latest_sol() {
        let state = dashboard();
        let next = merge(&state, route(&state, Action::Navigate("curiosity".into())).unwrap());

        assert_eq!(next.selected_rover, Some(Rover::Curiosity));
        assert_eq!(next.selected_sol, Some(2540));
        assert_eq!(next.rover_max_sol, 2540);
        assert_eq!(next.rover_photos, PhotoSet::Pending);
        assert_eq!(next.sol_date, NaiveDate::from_ymd_opt(2019, 9, 28));
    }

    #[test]
    fn test_navigate_ignores_case() {
        let state = dashboard();
        let next = merge(&state, route(&state, Action::Navigate("Spirit".into())).unwrap());
        assert_eq!(next.selected_rover, Some(Rover::Spirit));
        assert_eq!(next.rover_max_sol, 2208);
    }

    #[test]
    fn test_navigate_to_unknown_value_returns_to_dashboard() {
        let state = gallery(100, 2540);
        let next = merge(&state, route(&state, Action::Navigate("mars2020".into())).unwrap());

        assert_eq!(next.selected_rover, None);
        assert_eq!(next.selected_sol, None);
        assert_eq!(next.rover_photos, PhotoSet::Pending);
    }

    #[test]
    fn test_navigate_to_rover_missing_from_manifest() {
        let state = dashboard();
        let next = merge(&state, route(&state, Action::Navigate("opportunity".into())).unwrap());
        assert_eq!(next.selected_rover, Some(Rover::Opportunity));
        assert_eq!(next.rover_max_sol, 0);
        assert_eq!(next.selected_sol, Some(0));
        assert_eq!(next.sol_date, None);
    }

    #[test]
    fn test_sol_navigation_steps_by_one() {
        let state = gallery(9, 10);
        let forward = route(&state, Action::NextSol).unwrap();
        assert_eq!(forward.selected_sol, Some(Some(10)));
        assert_eq!(forward.rover_photos, Some(PhotoSet::Pending));

        let back = route(&state, Action::PreviousSol).unwrap();
        assert_eq!(back.selected_sol, Some(Some(8)));
    }

    #[test]
    fn test_disabled_sol_controls_produce_no_patch() {
        assert_eq!(route(&gallery(10, 10), Action::NextSol), None);
        assert_eq!(route(&gallery(0, 10), Action::PreviousSol), None);
    }

    #[test]
    fn test_unbound_controls() {
        let loading = ApplicationState::new();
        assert_eq!(Bindings::for_state(&loading), Bindings::default());
        assert_eq!(route(&loading, Action::Navigate("curiosity".into())), None);

        let state = dashboard();
        assert!(!Bindings::for_state(&state).sol_nav);
        assert_eq!(route(&state, Action::NextSol), None);
    }

    #[test]
    fn test_sol_navigation_bound_while_pending() {
        let mut state = gallery(5, 10);
        state.rover_photos = PhotoSet::Pending;
        assert!(Bindings::for_state(&state).sol_nav);
        assert!(route(&state, Action::NextSol).is_some());
    }
}
