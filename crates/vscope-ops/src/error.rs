//! Error types for scope operations.

use thiserror::Error;

/// Error type for scope operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Frame geometry or buffer validation failed.
    #[error(transparent)]
    Frame(#[from] vscope_core::Error),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for scope operations.
pub type OpsResult<T> = Result<T, OpsError>;
