//! Error types for the ccux CLI.
//!
//! Uses thiserror for derive macros and keeps messages user-actionable.

use crate::exit_codes;
use std::path::Path;
use thiserror::Error;

/// Main error type for ccux operations.
///
/// Each variant maps to an exit code in [`exit_codes`].
#[derive(Error, Debug)]
pub enum CcuxError {
    /// Invalid arguments, missing files, or an unusable project directory.
    #[error("{0}")]
    UserError(String),

    /// Generated output failed HTML validation.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// The external generator failed, timed out, or could not be started.
    #[error("{0}")]
    GeneratorError(String),

    /// Filesystem operation failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl CcuxError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CcuxError::UserError(_) => exit_codes::USER_ERROR,
            CcuxError::Io { .. } => exit_codes::USER_ERROR,
            CcuxError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            CcuxError::GeneratorError(_) => exit_codes::GENERATOR_FAILURE,
        }
    }

    /// Wrap an I/O error with the action and path it happened on.
    pub fn io(action: &str, path: &Path, source: std::io::Error) -> Self {
        CcuxError::Io {
            context: format!("failed to {} '{}'", action, path.display()),
            source,
        }
    }
}

/// Result type alias for ccux operations.
pub type Result<T> = std::result::Result<T, CcuxError>;
