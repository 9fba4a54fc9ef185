/**
Header output - writes generated declarations where the host build expects them

This module handles:
- Validating the requested output path
- Writing the header to disk
*/
use crate::error::{CliError, CliResult};
use std::fs;
use std::path::Path;
use tracing::info;

/// Validate an output path
///
/// Rejects paths that:
/// - Are empty
/// - Start with '-' (almost certainly a mistyped flag)
/// - Contain '..' (directory traversal)
fn validate_path(path: &str) -> CliResult<()> {
    if path.is_empty() {
        return Err(CliError::InvalidPath {
            path: path.to_string(),
            reason: "path is empty",
        });
    }

    if path.starts_with('-') {
        return Err(CliError::InvalidPath {
            path: path.to_string(),
            reason: "cannot start with '-'",
        });
    }

    let path_obj = Path::new(path);
    for component in path_obj.components() {
        if component.as_os_str() == ".." {
            return Err(CliError::InvalidPath {
                path: path.to_string(),
                reason: "cannot contain '..'",
            });
        }
    }

    Ok(())
}

/// Write `header` to `path`
pub fn write_header(path: &str, header: &str) -> CliResult<()> {
    validate_path(path)?;

    fs::write(path, header).map_err(|source| CliError::Write {
        path: path.to_string(),
        source,
    })?;

    info!(path, bytes = header.len(), "wrote header");
    Ok(())
}
