/**
Error types for the vpi-bridge command
*/
use thiserror::Error;
use vpi_bridge::MarshalError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot marshal {text:?} (code {code}): {source}")]
    Marshal {
        text: String,
        code: i32,
        #[source]
        source: MarshalError,
    },
}

/// Result type for command operations
pub type CliResult<T> = Result<T, CliError>;
