//! View components
//!
//! Each component is a pure function from a slice of application state to a
//! markup string. None of them fetch: missing data renders the
//! [`loader`](loader::render_loader) and is picked up by the requirements pass.

pub mod apod;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod loader;
pub mod roster;

pub use apod::render_image_of_the_day;
pub use footer::render_footer;
pub use gallery::render_gallery;
pub use header::render_header;
pub use loader::render_loader;
pub use roster::render_rovers;
