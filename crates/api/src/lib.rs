//! # Mission Mars Gateway
//!
//! A thin HTTP proxy in front of NASA's public APIs. It exists so the NASA API
//! key stays on the server: clients call the gateway, the gateway appends the
//! key and forwards the upstream JSON body untouched.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │   REST Endpoints    │ <- /apod, /roverData/manifests, /photos/{rover}/{sol}
//! ├─────────────────────┤
//! │   Static Files      │ <- everything else, from the public directory
//! ├─────────────────────┤
//! │    NASA Client      │ <- api_key injection, status mapping
//! └─────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Upstream failures are logged and answered with `502 Bad Gateway` and an
//! [`ErrorResponse`](mission_common::ErrorResponse) body. Unknown rovers are
//! rejected with `400` before any upstream call is made.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod upstream;

pub use error::{GatewayError, GatewayResult};
pub use server::{AppState, MissionServer};
pub use upstream::{ApiKey, NasaClient};
