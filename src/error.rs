use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub const EMAIL_REQUIRED: &str = "Email query parameter is required";
pub const SERVICE_URL_MISSING: &str =
    "Appointment service URL is not defined in the environment variables";

/// Failures a relayed request can end in. Each one becomes exactly one
/// plain-text response through [`RelayError::status_code`].
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Configuration(String),

    #[error("{message}")]
    Authentication {
        status: Option<u16>,
        message: String,
    },

    #[error("{message}")]
    Downstream {
        status: Option<u16>,
        message: String,
    },
}

impl RelayError {
    pub fn missing_email() -> Self {
        RelayError::Validation(EMAIL_REQUIRED.to_string())
    }

    pub fn missing_service_url() -> Self {
        RelayError::Configuration(SERVICE_URL_MISSING.to_string())
    }

    /// Status reported by a failed upstream response, or 500 when there is none.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Validation(_) => StatusCode::BAD_REQUEST,
            RelayError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::Authentication { status, .. } | RelayError::Downstream { status, .. } => {
                status
                    .and_then(|code| StatusCode::from_u16(code).ok())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

/// Message axios-style clients report for a non-2xx response.
pub fn status_message(status: u16) -> String {
    format!("Request failed with status code {}", status)
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

pub type RelayResult<T> = Result<T, RelayError>;
