use mission_common::Rover;

use crate::utils::markup::active_class;

/// Navigation bar: a "Dashboard" entry plus one entry per rover.
///
/// Every entry lives inside the `rover-nav` list and carries a `data-value`.
/// The dashboard entry's value names no rover, so routing falls back to the
/// dashboard.
pub fn render_header(rovers: &[Rover], selected: Option<Rover>) -> String {
    let entries: String = rovers
        .iter()
        .map(|rover| {
            format!(
                r#"
                <li class="nav-item mt-2 mt-md-0">
                    <a class="nav-link{}" data-value="{}">{}</a>
                </li>"#,
                active_class(selected == Some(*rover)),
                rover.as_str(),
                rover.display_name(),
            )
        })
        .collect();

    format!(
        r##"
<header>
    <nav class="navbar navbar-expand-md fixed-top navbar-dark bg-secondary">
        <a class="navbar-brand" href="#">Mission Mars</a>
        <div class="collapse navbar-collapse" id="navbarCollapse">
            <ul class="navbar-nav mr-auto rover-nav">
                <li class="nav-item{}">
                    <a class="nav-link" href="#" data-value="dashboard">Dashboard</a>
                </li>{}
            </ul>
        </div>
    </nav>
</header>"##,
        active_class(selected.is_none()),
        entries,
    )
}
