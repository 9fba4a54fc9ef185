/*!
VPI Bridge - C entry points for driving a Verilog simulator from a host language

Built as a VPI module: the simulator loads it, calls `vlog_startup_routines`
to bind itself, and host code then drives it through the exported shims.

The host binding calls the shims; the shims call the simulator's own vpi_*
functions. Strings cross the boundary as call-scoped, null-terminated
buffers (see `marshal`).
*/

pub mod abi;
pub mod header;
pub mod kernel;
pub mod marshal;
pub mod shim;

#[cfg(test)]
mod scripted;

// Re-export main types
pub use kernel::{ControlOp, KernelError, SimulationKernel, VpiKernel};
pub use marshal::{ForeignBuffer, MarshalError, with_foreign};
pub use shim::{vpi_bridge_init, vpi_bridge_message, vpi_finish, vpi_stop};

/// C header for the platform this crate was built for
pub const C_HEADER: &str = include_str!(concat!(env!("OUT_DIR"), "/vpi_bridge.h"));
