use summit_core::{Action, ValidationError};
use thiserror::Error;

/// Errors are cloneable so a deduplicated fetch can hand the same failure
/// to every caller that joined it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortalError {
    #[error("Missing base URL")]
    MissingBaseUrl,

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Validation failed: {}", format_fields(.errors))]
    Validation { errors: Vec<ValidationError> },

    #[error("Action \"{action}\" is not allowed while status is \"{status}\"")]
    ActionNotAllowed {
        action: Action,
        status: &'static str,
    },

    #[error("Client closed")]
    Closed,
}

fn format_fields(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<reqwest::Error> for PortalError {
    fn from(err: reqwest::Error) -> Self {
        PortalError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
