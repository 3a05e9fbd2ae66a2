//! Error handling for the dashboard
//!
//! Fetch failures never reach the user as errors: the scheduler logs them and
//! the view keeps showing its loader. These types surface from the client
//! layer and from writing the rendered document.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the dashboard's error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// Writing the rendered document failed
    #[error("Failed to write rendered document to '{path}'")]
    Render {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Gateway client errors
#[derive(Error, Debug)]
pub enum ClientError {
    /// Gateway unreachable
    #[error("Failed to connect to gateway at '{url}'")]
    ConnectionFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Gateway answered with a non-success status
    #[error("HTTP request failed: GET {url} -> {status}{}", reason_suffix(.message))]
    HttpError {
        url: String,
        status: u16,
        /// `error` field of the gateway's error body, when it sent one
        message: Option<String>,
    },

    /// Response body did not match the expected shape
    #[error("Failed to parse response from '{endpoint}'")]
    ParseError {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response parsed but lacked a field the view needs
    #[error("Response from '{endpoint}' has no '{field}'")]
    MissingField {
        endpoint: String,
        field: &'static str,
    },

    #[error("Invalid gateway URL: {0}")]
    Url(#[from] url::ParseError),
}

fn reason_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|reason| format!(": {}", reason))
        .unwrap_or_default()
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(|u| u.to_string()).unwrap_or_default();
        if let Some(status) = err.status() {
            ClientError::HttpError {
                url,
                status: status.as_u16(),
                message: None,
            }
        } else if err.is_decode() {
            ClientError::ParseError {
                endpoint: url,
                source: err,
            }
        } else {
            ClientError::ConnectionFailed { url, source: err }
        }
    }
}
