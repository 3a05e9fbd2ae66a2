//! Common types and utilities shared by the gateway and the dashboard

pub mod types;
pub mod config;
pub mod error;
pub mod telemetry;

pub use types::*;
pub use config::*;
pub use error::*;
pub use telemetry::*;
