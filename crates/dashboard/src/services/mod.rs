//! Services: remote data access and fetch scheduling
//!
//! Nothing here touches application state; results travel back to the
//! runtime as [`AppMsg`](crate::message::AppMsg)s.

pub mod gateway;
pub mod scheduler;

pub use gateway::{DataGateway, HttpGateway};
pub use scheduler::FetchScheduler;
