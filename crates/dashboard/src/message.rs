//! Application message types
//!
//! Every state change goes through one of these. User actions come from the
//! input reader, everything else from fetch tasks.

use std::str::FromStr;

use mission_common::{ApodImage, Photo, RoverManifest};

use crate::application::requirements::{PhotoQuery, Requirement};

/// A UI action, keyed by the control that raised it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Navigation entry clicked; carries its `data-value`
    Navigate(String),
    NextSol,
    PreviousSol,
    Quit,
}

/// Text that names no action
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("empty command")]
pub struct EmptyCommand;

impl FromStr for Action {
    type Err = EmptyCommand;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let command = input.trim();
        if command.is_empty() {
            return Err(EmptyCommand);
        }

        Ok(match command.to_ascii_lowercase().as_str() {
            "next" | "n" => Action::NextSol,
            "prev" | "previous" | "p" => Action::PreviousSol,
            "quit" | "q" | "exit" => Action::Quit,
            "dashboard" | "home" => Action::Navigate("dashboard".to_string()),
            _ => Action::Navigate(command.to_string()),
        })
    }
}

/// Result of a completed fetch
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded {
    ImageOfTheDay(ApodImage),
    Manifests(Vec<RoverManifest>),
    Photos {
        /// Selection the request was issued for
        query: PhotoQuery,
        photos: Vec<Photo>,
    },
}

impl Loaded {
    /// Requirement this response satisfies
    pub fn requirement(&self) -> Requirement {
        match self {
            Loaded::ImageOfTheDay(_) => Requirement::ImageOfTheDay,
            Loaded::Manifests(_) => Requirement::Manifest,
            Loaded::Photos { query, .. } => Requirement::Photos(*query),
        }
    }
}

/// Main application messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    User(Action),
    Loaded(Loaded),
    FetchFailed {
        requirement: Requirement,
        error: String,
    },
    /// The input stream reached end of file
    InputClosed,
}
