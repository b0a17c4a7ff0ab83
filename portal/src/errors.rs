// portal/src/errors.rs

use std::io;

use thiserror::Error;

/// Generic text shown when a mutation never got an answer from the API.
pub const NETWORK_ERROR_MESSAGE: &str = "A network error occurred.";
/// Longer variant used by the patient login and registration forms.
pub const NETWORK_ERROR_RETRY_MESSAGE: &str = "A network error occurred. Please try again.";

/// Failure of a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status and an `error` body.
    /// Displays the server's text verbatim.
    #[error("{message}")]
    Application { status: u16, message: String },
    /// The server answered non-2xx without a readable `error` body
    /// (an HTML error page, an empty 404, a proxy 502).
    #[error("HTTP {status}")]
    Status { status: u16 },
    /// No usable response: connection refused, DNS, TLS, and the like.
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered but the body was not the JSON we expected.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the server answered with a non-2xx status, readable body or not.
    pub fn is_status_failure(&self) -> bool {
        matches!(self, ApiError::Application { .. } | ApiError::Status { .. })
    }

    /// Line shown under a form after a failed submission. Only a server
    /// `error` text is shown; everything else gets `network_text`.
    pub fn form_message(&self, network_text: &str) -> String {
        match self {
            ApiError::Application { message, .. } => format!("Error: {}", message),
            _ => network_text.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// A type alias for a `Result` that returns an `ApiError` on failure.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure to read or persist local storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("local storage is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("local storage lock poisoned")]
    Poisoned,
}

pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_show_server_text_verbatim_on_forms() {
        let err = ApiError::Application { status: 409, message: "Email already exists".into() };
        assert_eq!(err.form_message(NETWORK_ERROR_MESSAGE), "Error: Email already exists");
        assert_eq!(err.to_string(), "Email already exists");
    }

    #[test]
    fn should_use_generic_text_for_transport_failures() {
        assert_eq!(ApiError::Transport("refused".into()).form_message(NETWORK_ERROR_MESSAGE), NETWORK_ERROR_MESSAGE);
        assert_eq!(ApiError::Decode("eof".into()).form_message(NETWORK_ERROR_MESSAGE), NETWORK_ERROR_MESSAGE);
        assert_eq!(
            ApiError::Status { status: 502 }.form_message(NETWORK_ERROR_RETRY_MESSAGE),
            NETWORK_ERROR_RETRY_MESSAGE
        );
    }

    #[test]
    fn should_count_bodyless_errors_as_status_failures() {
        assert!(ApiError::Status { status: 500 }.is_status_failure());
        assert!(ApiError::Application { status: 404, message: "nope".into() }.is_status_failure());
        assert!(!ApiError::Decode("eof".into()).is_status_failure());
        assert!(!ApiError::Transport("refused".into()).is_status_failure());
    }
}
