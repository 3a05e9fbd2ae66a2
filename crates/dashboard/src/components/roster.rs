use mission_common::RoverManifest;

use crate::utils::markup::escape_html;

const ACTIVE_ROVER_IMAGE: &str = "assets/img/rover-active.png";
const INACTIVE_ROVER_IMAGE: &str = "assets/img/rover-inactive.png";

/// One summary panel per rover, each with a button selecting that rover.
///
/// Renders nothing without a manifest; the top-level view never calls it in
/// that case.
pub fn render_rovers(manifest: Option<&[RoverManifest]>) -> String {
    let Some(entries) = manifest else {
        return String::new();
    };

    let panels: String = entries.iter().map(render_panel).collect();

    format!(
        r#"
<div class="container marketing">
    <div class="text-align-center">
        <h2>The Rovers Of Mars</h2>
    </div>
    <hr />
    <div class="row">{}
    </div>
</div>"#,
        panels
    )
}

fn render_panel(rover: &RoverManifest) -> String {
    let name = escape_html(&rover.name);
    let (badge, image) = if rover.is_active() {
        ("<span class=\"onlineColor\">Online</span>", ACTIVE_ROVER_IMAGE)
    } else {
        ("Offline", INACTIVE_ROVER_IMAGE)
    };

    format!(
        r#"
        <div class="col-lg-4 table-responsive">
            <table class="table table-dark">
                <thead>
                    <tr class="bg-light">
                        <th class="rover-title">{name} is {badge}</th>
                        <th><img class="img-thumbnail rounded" src="{image}" alt="rover image" width="140" height="140"></th>
                    </tr>
                    <tr>
                        <th scope="col">Name</th>
                        <th scope="col">{name}</th>
                    </tr>
                </thead>
                <tbody>
                    <tr><td>Landing Date</td><td>{landing}</td></tr>
                    <tr><td>Launch Date</td><td>{launch}</td></tr>
                    <tr><td>Status</td><td>{status}</td></tr>
                    <tr><td>Total Sol</td><td>{max_sol}</td></tr>
                    <tr><td>Total Photos</td><td>{total_photos}</td></tr>
                    <tr>
                        <td></td>
                        <td><button type="button" class="btn btn-link rover-nav" data-value="{value}">View Photos &raquo;</button></td>
                    </tr>
                </tbody>
            </table>
        </div>"#,
        name = name,
        badge = badge,
        image = image,
        landing = rover.landing_date,
        launch = rover.launch_date,
        status = escape_html(&rover.status),
        max_sol = rover.max_sol,
        total_photos = rover.total_photos,
        value = escape_html(&rover.name.to_lowercase()),
    )
}
