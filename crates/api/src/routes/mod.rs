//! Route handlers for the gateway endpoints

pub mod apod;
pub mod health;
pub mod manifests;
pub mod photos;
