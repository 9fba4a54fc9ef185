/**
Marshalling diagnostics - show what a host string looks like on the C side
*/
use crate::error::{CliError, CliResult};
use vpi_bridge::ForeignBuffer;

/// Marshal `text` and render its bytes, terminator included, as hex
pub fn hex_dump(text: &str) -> CliResult<String> {
    let buffer = ForeignBuffer::new(text).map_err(|source| CliError::Marshal {
        text: text.to_string(),
        code: source.code(),
        source,
    })?;

    let bytes: Vec<String> = buffer
        .as_bytes_with_nul()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect();

    Ok(bytes.join(" "))
}
