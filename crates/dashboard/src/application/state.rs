//! Application state (Model in Elm architecture)
//!
//! [`ApplicationState`] is never mutated in place. Every transition builds a
//! new snapshot from the previous one and a [`Patch`], see
//! [`merge`](crate::application::store::merge).

use chrono::NaiveDate;
use mission_common::{ApodImage, Photo, Rover, RoverManifest, Sol};

/// Photos for the selected rover and sol
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PhotoSet {
    /// Nothing asked for yet
    #[default]
    NotRequested,
    /// Cleared by navigation; a fetch is due or outstanding
    Pending,
    /// Response received. May be empty.
    Loaded(Vec<Photo>),
}

impl PhotoSet {
    pub fn is_loaded(&self) -> bool {
        matches!(self, PhotoSet::Loaded(_))
    }

    pub fn photos(&self) -> Option<&[Photo]> {
        match self {
            PhotoSet::Loaded(photos) => Some(photos),
            _ => None,
        }
    }
}

/// Core application state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationState {
    /// Astronomy picture of the day
    pub apod: Option<ApodImage>,

    /// Photos for `selected_rover` on `selected_sol`
    pub rover_photos: PhotoSet,

    /// `None` shows the dashboard
    pub selected_rover: Option<Rover>,

    pub selected_sol: Option<Sol>,

    /// Highest sol the selected rover has photos for
    pub rover_max_sol: Sol,

    /// Earth date of `rover_max_sol`
    pub sol_date: Option<NaiveDate>,

    pub rovers_manifest: Option<Vec<RoverManifest>>,

    /// Fixed roster in navigation order
    pub rovers: Vec<Rover>,
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationState {
    /// State at load: nothing fetched, dashboard view, sol 0
    pub fn new() -> Self {
        Self {
            apod: None,
            rover_photos: PhotoSet::NotRequested,
            selected_rover: None,
            selected_sol: Some(0),
            rover_max_sol: 0,
            sol_date: None,
            rovers_manifest: None,
            rovers: Rover::ALL.to_vec(),
        }
    }

    /// Resolve a `data-value` against the roster, ignoring case
    pub fn known_rover(&self, value: &str) -> Option<Rover> {
        Rover::parse(value).filter(|rover| self.rovers.contains(rover))
    }

    /// Manifest entry for `rover`, if the manifest has been loaded
    pub fn manifest_for(&self, rover: Rover) -> Option<&RoverManifest> {
        self.rovers_manifest
            .as_ref()?
            .iter()
            .find(|entry| entry.describes(rover))
    }

    /// Sol the gallery is showing
    pub fn current_sol(&self) -> Sol {
        self.selected_sol.unwrap_or(0)
    }
}

/// Partial state. Present fields overwrite on merge, absent ones are kept.
///
/// Nullable state fields use a nested `Option`: `Some(None)` clears the
/// field, `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    pub apod: Option<Option<ApodImage>>,
    pub rover_photos: Option<PhotoSet>,
    pub selected_rover: Option<Option<Rover>>,
    pub selected_sol: Option<Option<Sol>>,
    pub rover_max_sol: Option<Sol>,
    pub sol_date: Option<Option<NaiveDate>>,
    pub rovers_manifest: Option<Option<Vec<RoverManifest>>>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apod(mut self, apod: Option<ApodImage>) -> Self {
        self.apod = Some(apod);
        self
    }

    pub fn rover_photos(mut self, photos: PhotoSet) -> Self {
        self.rover_photos = Some(photos);
        self
    }

    pub fn selected_rover(mut self, rover: Option<Rover>) -> Self {
        self.selected_rover = Some(rover);
        self
    }

    pub fn selected_sol(mut self, sol: Option<Sol>) -> Self {
        self.selected_sol = Some(sol);
        self
    }

    pub fn rover_max_sol(mut self, sol: Sol) -> Self {
        self.rover_max_sol = Some(sol);
        self
    }

    pub fn sol_date(mut self, date: Option<NaiveDate>) -> Self {
        self.sol_date = Some(date);
        self
    }

    pub fn rovers_manifest(mut self, manifest: Option<Vec<RoverManifest>>) -> Self {
        self.rovers_manifest = Some(manifest);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// True when applying this patch to `state` would change nothing
    pub fn is_noop_for(&self, state: &ApplicationState) -> bool {
        fn same<T: PartialEq>(patched: &Option<T>, current: &T) -> bool {
            patched.as_ref().map_or(true, |value| value == current)
        }

        same(&self.apod, &state.apod)
            && same(&self.rover_photos, &state.rover_photos)
            && same(&self.selected_rover, &state.selected_rover)
            && same(&self.selected_sol, &state.selected_sol)
            && same(&self.rover_max_sol, &state.rover_max_sol)
            && same(&self.sol_date, &state.sol_date)
            && same(&self.rovers_manifest, &state.rovers_manifest)
    }
}
