//! Utility functions and helpers

pub mod markup;

pub use markup::*;
