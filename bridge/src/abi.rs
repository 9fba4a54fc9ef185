/*!
VPI ABI Declarations - C-compatible types shared with the simulation kernel

These mirror `vpi_user.h`. Values MUST stay in sync with the kernel header:
- PLI_INT32: 32-bit signed (int)
- PLI_BYTE8: char
- vpiStop / vpiFinish: operation codes for vpi_control
*/

#![allow(non_camel_case_types)]

use std::os::raw::{c_char, c_int};

pub type PLI_INT32 = c_int;
pub type PLI_BYTE8 = c_char;

/// vpi_control operation: pause and hand control to the interactive prompt
pub const VPI_STOP: PLI_INT32 = 66;
/// vpi_control operation: finish the simulation
pub const VPI_FINISH: PLI_INT32 = 67;

/// Diagnostic level passed as the first variadic argument of stop/finish.
/// 0 prints nothing, matching `$finish(0)`.
pub const DIAGNOSTIC_SILENT: PLI_INT32 = 0;

/// `PLI_INT32 vpi_control(PLI_INT32 operation, ...)`
pub type VpiControlFn = unsafe extern "C" fn(operation: PLI_INT32, ...) -> PLI_INT32;

/// `PLI_INT32 vpi_printf(PLI_BYTE8 *format, ...)`
pub type VpiPrintfFn = unsafe extern "C" fn(format: *const PLI_BYTE8, ...) -> PLI_INT32;

/// Symbol names as looked up in the process image (null-terminated)
pub const VPI_CONTROL_SYMBOL: &[u8] = b"vpi_control\0";
pub const VPI_PRINTF_SYMBOL: &[u8] = b"vpi_printf\0";
