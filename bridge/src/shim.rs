/*!
Call Shims - the C entry points the host binding calls

Every shim runs synchronously inside a kernel callback. None of them may
unwind into the caller. The kernel is resolved once when the module is
loaded; after that the control shims only read the binding.
*/

use crate::kernel::{self, ControlOp, SimulationKernel};
use crate::marshal::{self, MarshalResult, with_foreign};
use tracing::{debug, error, info};

/// Ask `kernel` to finish the simulation
///
/// Scheduled events drain before the kernel stops. A second request after
/// that has no defined effect.
pub fn request_finish(kernel: &dyn SimulationKernel) {
    info!("forwarding finish request to simulation kernel");
    kernel.control(ControlOp::Finish);
}

/// Ask `kernel` to pause at the interactive prompt
pub fn request_stop(kernel: &dyn SimulationKernel) {
    info!("forwarding stop request to simulation kernel");
    kernel.control(ControlOp::Stop);
}

/// Print `text` through `kernel`
pub fn send_message(kernel: &dyn SimulationKernel, text: &str) -> MarshalResult<()> {
    with_foreign(text, |buf| kernel.print(buf))
}

/// Bind the simulator this module is loaded in
///
/// Returns 0, or a negative `KernelError` code. Runs from
/// `vlog_startup_routines`; hosts that load the bridge another way call it
/// before any other shim.
#[unsafe(no_mangle)]
pub extern "C" fn vpi_bridge_init() -> i32 {
    match kernel::bind_process() {
        Ok(()) => 0,
        Err(err) => {
            error!(%err, "simulation kernel not bound");
            err.code()
        }
    }
}

extern "C" fn bridge_startup() {
    vpi_bridge_init();
}

/// Null-terminated table the simulator walks when it loads a VPI module
#[unsafe(no_mangle)]
#[allow(non_upper_case_globals)]
pub static vlog_startup_routines: [Option<extern "C" fn()>; 2] =
    [Some(bridge_startup as extern "C" fn()), None];

/// Request termination of the active simulation.
///
/// There is no return channel: if no kernel is reachable the request is
/// dropped and an error is logged.
#[unsafe(no_mangle)]
pub extern "C" fn vpi_finish() {
    if let Err(err) = kernel::with_kernel(request_finish) {
        error!(%err, "finish request dropped");
    }
}

/// Request an interactive stop of the active simulation.
#[unsafe(no_mangle)]
pub extern "C" fn vpi_stop() {
    if let Err(err) = kernel::with_kernel(request_stop) {
        error!(%err, "stop request dropped");
    }
}

/// Print a host string through the simulator
///
/// Returns 0 on success, otherwise a negative code from `MarshalError` or
/// `KernelError`.
///
/// # Safety
/// `text` must point to `len` readable bytes, or be null with `len == 0`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vpi_bridge_message(text: *const u8, len: usize) -> i32 {
    let text = match unsafe { marshal::from_raw_parts(text, len) } {
        Ok(text) => text,
        Err(err) => {
            debug!(%err, "message rejected");
            return err.code();
        }
    };

    match with_foreign(text, |buf| kernel::with_kernel(|k| k.print(buf))) {
        Ok(Ok(())) => 0,
        Ok(Err(err)) => {
            error!(%err, "message dropped");
            err.code()
        }
        Err(err) => {
            debug!(%err, "message rejected");
            err.code()
        }
    }
}
