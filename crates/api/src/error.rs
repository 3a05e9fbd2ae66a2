use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mission_common::ErrorResponse;
use thiserror::Error;
use tracing::error;

/// Failures while serving a proxied request
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The upstream could not be reached or the body could not be read
    #[error("Upstream request to '{endpoint}' failed: {source}")]
    Upstream {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-success status
    #[error("Upstream '{endpoint}' returned {status}")]
    UpstreamStatus { endpoint: String, status: u16 },

    /// The upstream body was not JSON
    #[error("Upstream '{endpoint}' returned malformed JSON: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Rover name outside the fixed roster
    #[error("Unknown rover: {0}")]
    UnknownRover(String),

    #[error("Invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),
}

impl GatewayError {
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::Upstream { .. } => "UPSTREAM_UNAVAILABLE",
            GatewayError::UpstreamStatus { .. } => "UPSTREAM_STATUS",
            GatewayError::Decode { .. } => "UPSTREAM_DECODE",
            GatewayError::UnknownRover(_) => "UNKNOWN_ROVER",
            GatewayError::Url(_) => "UPSTREAM_URL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::UnknownRover(_) => StatusCode::BAD_REQUEST,
            GatewayError::Url(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!(error = %self, code = self.code(), status = %status, "Gateway request failed");

        let body = ErrorResponse {
            error: self.to_string(),
            code: Some(self.code().to_string()),
        };
        (status, Json(body)).into_response()
    }
}

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;
