//! # Mission Mars dashboard
//!
//! State/render loop for the rover dashboard. The rendered document is a pure
//! projection of an immutable [`ApplicationState`](application::ApplicationState):
//!
//! - **State**: a single snapshot, replaced wholesale by merging a patch
//! - **View**: pure functions from a snapshot to markup
//! - **Requirements**: what the rendered view is still missing, fetched by the
//!   [`FetchScheduler`](services::FetchScheduler) and fed back as messages
//! - **Bindings**: which controls the last render produced and the patch each
//!   one yields
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use mission_dashboard::{Application, FileSurface, HttpGateway, UpdateOptions};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let gateway = Arc::new(HttpGateway::new("http://localhost:3000")?);
//!     let surface = FileSurface::new("public/dashboard.html");
//!     let mut app = Application::new(gateway, surface, UpdateOptions::default());
//!     app.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

pub mod application;
pub mod components;
pub mod error;
pub mod input;
pub mod message;
pub mod services;
pub mod surface;
pub mod utils;

// Re-export main types for convenience
pub use application::{Application, ApplicationState, UpdateOptions};
pub use error::{ClientError, Error, Result};
pub use message::{Action, AppMsg};
pub use services::{DataGateway, HttpGateway};
pub use surface::{FileSurface, MemorySurface, Surface};
