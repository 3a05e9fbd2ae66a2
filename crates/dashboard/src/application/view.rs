//! Application view logic (View in Elm architecture)

use tracing::debug;

use crate::{
    application::state::ApplicationState,
    components::{
        gallery::GalleryProps, render_footer, render_gallery, render_header,
        render_image_of_the_day, render_loader, render_rovers,
    },
};

/// Render the complete document body for `state`
pub fn render_app(state: &ApplicationState) -> String {
    let Some(manifest) = state.rovers_manifest.as_deref() else {
        debug!("Manifest not loaded, rendering loader");
        return render_loader();
    };

    let body = match GalleryProps::from_state(state) {
        Some(props) => render_gallery(&props),
        None => format!(
            "{}{}",
            render_image_of_the_day(state.apod.as_ref()),
            render_rovers(Some(manifest)),
        ),
    };

    format!(
        "{}\n<main role=\"main\">{}\n</main>{}",
        render_header(&state.rovers, state.selected_rover),
        body,
        render_footer(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::state::PhotoSet;
    use chrono::NaiveDate;
    use mission_common::{ApodImage, MediaType, Photo, Rover, RoverManifest};

    fn manifest() -> Vec<RoverManifest> {
        vec![RoverManifest {
            name: "Curiosity".to_string(),
            status: "active".to_string(),
            landing_date: NaiveDate::from_ymd_opt(2012, 8, 6).unwrap(),
            launch_date: NaiveDate::from_ymd_opt(2011, 11, 26).unwrap(),
            max_sol: 2540,
            max_date: NaiveDate::from_ymd_opt(2019, 9, 28).unwrap(),
            total_photos: 366206,
        }]
    }

    fn dashboard() -> ApplicationState {
        let mut state = ApplicationState::new();
        state.rovers_manifest = Some(manifest());
        state.apod = Some(ApodImage {
            media_type: MediaType::Image,
            url: "https://apod.nasa.gov/apod/image/m31.jpg".to_string(),
            title: "Andromeda".to_string(),
            explanation: "A galaxy".to_string(),
        });
        state
    }

    #[test]
    fn test_loader_until_manifest_arrives() {
        let markup = render_app(&ApplicationState::new());
        assert_eq!(markup, render_loader());
        assert!(!markup.contains("rover-nav"));
    }

    #[test]
    fn test_dashboard_shows_image_and_roster() {
        let markup = render_app(&dashboard());
        assert!(markup.contains("Andromeda"));
        assert!(markup.contains("The Rovers Of Mars"));
        assert!(markup.contains("&copy;"));
        assert!(!markup.contains("nextSol"));
    }

    #[test]
    fn test_dashboard_without_image_shows_loader_for_it() {
        let mut state = dashboard();
        state.apod = None;
        let markup = render_app(&state);
        assert!(markup.contains("sk-circle"));
        assert!(markup.contains("The Rovers Of Mars"));
    }

    #[test]
    fn test_selected_rover_shows_gallery() {
        let mut state = dashboard();
        state.selected_rover = Some(Rover::Curiosity);
        state.selected_sol = Some(2540);
        state.rover_max_sol = 2540;
        state.rover_photos = PhotoSet::Loaded(vec![Photo {
            id: 7,
            img_src: "http://mars.jpl.nasa.gov/7.jpg".to_string(),
            earth_date: NaiveDate::from_ymd_opt(2019, 9, 28).unwrap(),
        }]);

        let markup = render_app(&state);
        assert!(markup.contains("data-key=\"7\""));
        assert!(!markup.contains("Andromeda"));
        assert!(!markup.contains("The Rovers Of Mars"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut state = dashboard();
        assert_eq!(render_app(&state), render_app(&state));

        state.selected_rover = Some(Rover::Curiosity);
        state.rover_photos = PhotoSet::Pending;
        assert_eq!(render_app(&state), render_app(&state));
    }
}
