//! Unified SDK error types.

use thiserror::Error;

/// The single message shown to an admin when a backend call fails.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Notice error: {0}")]
    Notice(#[from] crate::domain::notice::NoticeError),
}

impl SdkError {
    /// Text to surface to the admin.
    ///
    /// Validation problems are shown as-is (they describe the form input).
    /// Every other failure, transport or server-side, collapses into
    /// [`GENERIC_FAILURE_MESSAGE`]; the detailed error is for logs.
    pub fn user_message(&self) -> String {
        match self {
            SdkError::Validation(msg) => msg.clone(),
            SdkError::Auth(AuthError::NotAuthenticated) => {
                "Your session has expired. Please log in again.".to_string()
            }
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Whether the backend rejected our token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            SdkError::Http(HttpError::Unauthorized) | SdkError::Auth(AuthError::NotAuthenticated)
        )
    }
}

impl From<crate::shared::AmountError> for SdkError {
    fn from(err: crate::shared::AmountError) -> Self {
        SdkError::Validation(err.to_string())
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid response body: {0}")]
    InvalidResponse(String),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Token is empty")]
    EmptyToken,
}
