// Rust guideline compliant 2026-10-18

//! Error handling for buildboard application services.

use buildboard_core::validation::FieldErrors;
use buildboard_core::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and envelope output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested document was not found.
    NotFound,
    /// A submitted form failed validation.
    ValidationError,
    /// The request included invalid inputs.
    InvalidInput,
    /// Configuration could not be loaded.
    ConfigError,
    /// The operation needs a signed-in user.
    NotSignedIn,
    /// The authentication provider rejected a request.
    AuthError,
    /// IO failure while reading or writing data.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
}

/// Failure reported by an authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} ({code})")]
pub struct AuthError {
    /// Provider error code, e.g. `auth/popup-blocked`.
    pub code: String,
    /// Provider message.
    pub message: String,
}

impl AuthError {
    /// Creates an auth error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Returns the Danish message shown for a failed sign-in.
    #[must_use]
    pub fn sign_in_message(&self) -> &'static str {
        let code = self.code.strip_prefix("auth/").unwrap_or(&self.code);
        match code {
            "popup-closed-by-user" | "cancelled-popup-request" => "Login blev annulleret",
            "popup-blocked" => "Popup blev blokeret af browseren",
            _ => "Der opstod en fejl under login",
        }
    }
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// A submitted form did not pass its rule set.
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    /// No user is signed in.
    #[error("Not signed in")]
    NotSignedIn,

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from the authentication provider.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error not represented by core errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::NotSignedIn => ErrorCode::NotSignedIn,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Auth(_) => ErrorCode::AuthError,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Json(_) => ErrorCode::JsonError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::InvalidDocument(_) => ErrorCode::ValidationError,
                CoreError::InvalidValue { .. } => ErrorCode::InvalidInput,
                CoreError::InvalidConfig(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Validation(errors) => Some(serde_json::json!({ "fields": errors })),
            AppError::Auth(auth) => Some(serde_json::json!({
                "code": auth.code,
                "message": auth.sign_in_message(),
            })),
            AppError::Core(CoreError::InvalidValue { kind, value }) => Some(serde_json::json!({
                "kind": kind,
                "value": value,
            })),
            _ => None,
        }
    }
}
