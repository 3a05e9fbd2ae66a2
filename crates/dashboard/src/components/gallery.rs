use chrono::NaiveDate;
use mission_common::{Photo, Rover, Sol};

use super::loader::render_loader;
use crate::{
    application::state::{ApplicationState, PhotoSet},
    utils::markup::{disabled_attr, escape_html},
};

/// Everything the gallery view reads from the state
#[derive(Debug, Clone, Copy)]
pub struct GalleryProps<'a> {
    pub rover: Rover,
    pub sol: Sol,
    pub max_sol: Sol,
    pub sol_date: Option<NaiveDate>,
    pub photos: &'a PhotoSet,
}

impl<'a> GalleryProps<'a> {
    pub fn from_state(state: &'a ApplicationState) -> Option<Self> {
        Some(Self {
            rover: state.selected_rover?,
            sol: state.current_sol(),
            max_sol: state.rover_max_sol,
            sol_date: state.sol_date,
            photos: &state.rover_photos,
        })
    }

    /// Forward navigation would pass the newest sol
    pub fn at_max_sol(&self) -> bool {
        self.sol.saturating_add(1) > self.max_sol
    }

    /// Sols never go below zero
    pub fn at_first_sol(&self) -> bool {
        self.sol == 0
    }
}

/// Photo grid for the selected rover and sol with sol navigation
pub fn render_gallery(props: &GalleryProps<'_>) -> String {
    let Some(photos) = props.photos.photos() else {
        return render_loader();
    };

    format!(
        r#"
<div class="container gallery">
    <div class="row">
        <h2>Rover "{rover}" photos of Sol {sol}{date}</h2>
    </div>
    <div class="row">{grid}
    </div>
    <div class="btn-group float-right" role="group" aria-label="Sol navigation">{nav}
    </div>
</div>"#,
        rover = props.rover.as_str(),
        sol = props.sol,
        date = render_date(props),
        grid = render_grid(photos),
        nav = render_sol_nav(props),
    )
}

fn render_date(props: &GalleryProps<'_>) -> String {
    match props.sol_date {
        Some(date) if props.sol == props.max_sol => format!(" ({})", date),
        _ => String::new(),
    }
}

fn render_grid(photos: &[Photo]) -> String {
    if photos.is_empty() {
        return r#"
        <p class="no-photos">No photos found for this sol.</p>"#
            .to_string();
    }

    photos
        .iter()
        .map(|photo| {
            let src = escape_html(&photo.img_src);
            format!(
                r#"
        <a href="{src}" data-toggle="lightbox" data-gallery="gallery" class="col-md-4 margin10" data-key="{id}">
            <img src="{src}" class="img-fluid rounded" alt="Taken {date}">
        </a>"#,
                src = src,
                id = photo.id,
                date = photo.earth_date,
            )
        })
        .collect()
}

fn render_sol_nav(props: &GalleryProps<'_>) -> String {
    let next_label = if props.at_max_sol() {
        "Max Sol".to_string()
    } else {
        format!("Sol {}", props.sol.saturating_add(1))
    };
    let previous_label = if props.at_first_sol() {
        "First Sol".to_string()
    } else {
        format!("Sol {}", props.sol - 1)
    };

    format!(
        r#"
        <button type="button" id="nextSol" class="btn btn-secondary"{}>{}</button>
        <button type="button" id="previousSol" class="btn btn-secondary"{}>{}</button>"#,
        disabled_attr(props.at_max_sol()),
        next_label,
        disabled_attr(props.at_first_sol()),
        previous_label,
    )
}
