use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::upstream::UpstreamError;

/// Failures reported by the relay endpoints.
///
/// Every variant renders as a plain-text body so the frontend can show it
/// verbatim after an `Error: ` prefix.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Missing required fields")]
    InvalidRequest,

    #[error("Failed to fetch languages: {0}")]
    UpstreamUnavailable(String),

    /// Upstream rejected the translation; carries its raw error text
    #[error("{0}")]
    UpstreamTranslation(String),

    #[error("Translation failed: {0}")]
    RelayFailure(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidRequest => StatusCode::BAD_REQUEST,
            RelayError::UpstreamUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::UpstreamTranslation(_) => StatusCode::BAD_GATEWAY,
            RelayError::RelayFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn from_languages_error(err: UpstreamError) -> Self {
        RelayError::UpstreamUnavailable(err.to_string())
    }

    pub fn from_translate_error(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status { body, .. } => RelayError::UpstreamTranslation(body),
            UpstreamError::Transport(e) => RelayError::RelayFailure(e.to_string()),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Relay request failed ({}): {}", status, self);
        } else {
            warn!("Rejected relay request ({}): {}", status, self);
        }
        (status, self.to_string()).into_response()
    }
}
