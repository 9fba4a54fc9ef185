/// vpi-bridge tooling
///
/// Helpers behind the `vpi-bridge` command:
/// - C header generation for a chosen platform
/// - Marshalling diagnostics for host strings
/// - Output path validation
pub mod dump;
pub mod error;
pub mod output;
pub mod platform;

pub use dump::hex_dump;
pub use error::{CliError, CliResult};
pub use output::write_header;
pub use platform::PlatformArg;
