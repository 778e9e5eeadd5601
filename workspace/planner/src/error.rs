use thiserror::Error;

/// Failure talking to the backend: the request never completed or the body
/// could not be decoded.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error types for the planner
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// The request failed before a usable body arrived
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The history endpoint answered with a non-ok status
    #[error("History unavailable: {0}")]
    History(String),

    /// The backend reported success but left out a required field
    #[error("Incomplete response: missing {0}")]
    IncompleteResponse(&'static str),
}

/// Type alias for Result with PlannerError
pub type Result<T> = std::result::Result<T, PlannerError>;
