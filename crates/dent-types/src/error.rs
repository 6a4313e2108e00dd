//! Error types for the dent engine.
//!
//! All crates return `DentResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the dent engine.
#[derive(Debug, Error)]
pub enum DentError {
    /// No source geometry was supplied to the simulator.
    #[error("Missing geometry: no source mesh was supplied")]
    MissingGeometry,

    /// Geometry is present but its vertex data cannot be read.
    #[error("Unreadable geometry: {0}")]
    UnreadableGeometry(String),

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DentError {
    /// Returns true for errors raised while initializing a simulator from
    /// source geometry.
    pub fn is_init_error(&self) -> bool {
        matches!(
            self,
            DentError::MissingGeometry | DentError::UnreadableGeometry(_)
        )
    }
}

/// Convenience alias for `Result<T, DentError>`.
pub type DentResult<T> = Result<T, DentError>;
