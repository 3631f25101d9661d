use thiserror::Error;

/// Errors produced by the fleet core.
///
/// Database failures are wrapped as [`FleetError::Internal`] at the call
/// site so the message names the operation that failed, not just the
/// driver-level cause.
#[derive(Error, Debug)]
pub enum FleetError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, FleetError>;
