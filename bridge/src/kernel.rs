/*!
Kernel Binding - where control requests and messages actually go

The simulator owns every vpi_* entry point. When the bridge is loaded as a
VPI module those symbols already live in the process image, so they are
looked up there instead of being linked at build time.

A kernel is bound at most once per process, at module load time
(`vlog_startup_routines`) or by the host before the first shim runs.
Shims only read the binding.
*/

use crate::abi::{
    self, DIAGNOSTIC_SILENT, PLI_INT32, VPI_CONTROL_SYMBOL, VPI_PRINTF_SYMBOL, VpiControlFn,
    VpiPrintfFn,
};
use std::ffi::CStr;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, info};

#[cfg(unix)]
use libloading::os::unix::Library;
#[cfg(windows)]
use libloading::os::windows::Library;

/// Operations accepted by `vpi_control`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlOp {
    Stop,
    Finish,
}

impl ControlOp {
    pub fn code(self) -> PLI_INT32 {
        match self {
            ControlOp::Stop => abi::VPI_STOP,
            ControlOp::Finish => abi::VPI_FINISH,
        }
    }
}

#[derive(Debug, Error)]
pub enum KernelError {
    #[error("simulation kernel symbol `{symbol}` not found in process")]
    SymbolMissing {
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },

    #[error("a simulation kernel is already bound")]
    AlreadyBound,

    #[error("no simulation kernel is available")]
    Unavailable,
}

impl KernelError {
    /// Status code returned across the C boundary
    pub fn code(&self) -> i32 {
        match self {
            KernelError::Unavailable => -5,
            KernelError::SymbolMissing { .. } => -6,
            KernelError::AlreadyBound => -7,
        }
    }
}

pub type KernelResult<T> = Result<T, KernelError>;

/// The simulator side of the bridge
///
/// Implementations forward synchronously and must not block. Neither call
/// has a way to report kernel-side failure.
pub trait SimulationKernel {
    fn control(&self, op: ControlOp);

    /// Print a message; `text` is only valid for the duration of the call
    fn print(&self, text: &CStr);
}

/// Kernel reached through the vpi_* symbols of the running simulator
pub struct VpiKernel {
    control: VpiControlFn,
    printf: VpiPrintfFn,
    // Keeps the process handle open for as long as the pointers are used
    _image: Library,
}

impl VpiKernel {
    /// Resolve the kernel's entry points from the current process
    pub fn from_process() -> KernelResult<Self> {
        let image = process_image()?;

        let control = unsafe { lookup::<VpiControlFn>(&image, VPI_CONTROL_SYMBOL)? };
        let printf = unsafe { lookup::<VpiPrintfFn>(&image, VPI_PRINTF_SYMBOL)? };

        debug!("resolved vpi_control and vpi_printf from process image");
        Ok(Self {
            control,
            printf,
            _image: image,
        })
    }
}

impl SimulationKernel for VpiKernel {
    fn control(&self, op: ControlOp) {
        unsafe {
            (self.control)(op.code(), DIAGNOSTIC_SILENT);
        }
    }

    fn print(&self, text: &CStr) {
        unsafe {
            (self.printf)(c"%s".as_ptr(), text.as_ptr());
        }
    }
}

#[cfg(unix)]
fn process_image() -> KernelResult<Library> {
    Ok(Library::this())
}

#[cfg(windows)]
fn process_image() -> KernelResult<Library> {
    Library::this().map_err(|source| KernelError::SymbolMissing {
        symbol: "<process image>",
        source,
    })
}

/// # Safety
/// `T` must be the exact function pointer type of the symbol.
unsafe fn lookup<T: Copy>(image: &Library, symbol: &'static [u8]) -> KernelResult<T> {
    let name = symbol_name(symbol);
    match unsafe { image.get::<T>(symbol) } {
        Ok(found) => Ok(*found),
        Err(source) => Err(KernelError::SymbolMissing {
            symbol: name,
            source,
        }),
    }
}

fn symbol_name(symbol: &'static [u8]) -> &'static str {
    let trimmed = symbol.strip_suffix(b"\0").unwrap_or(symbol);
    std::str::from_utf8(trimmed).unwrap_or("<non-utf8 symbol>")
}

type BoundKernel = Box<dyn SimulationKernel + Send + Sync>;

/// Write-once home for the process's kernel
pub struct KernelSlot {
    bound: OnceLock<BoundKernel>,
}

impl KernelSlot {
    pub const fn new() -> Self {
        Self {
            bound: OnceLock::new(),
        }
    }

    pub fn bind(&self, kernel: BoundKernel) -> KernelResult<()> {
        self.bound
            .set(kernel)
            .map_err(|_| KernelError::AlreadyBound)?;

        debug!("simulation kernel bound");
        Ok(())
    }

    /// Resolve the simulator's entry points and bind them
    pub fn bind_process(&self) -> KernelResult<()> {
        if self.bound.get().is_some() {
            return Err(KernelError::AlreadyBound);
        }

        let kernel = VpiKernel::from_process()?;
        self.bind(Box::new(kernel))?;

        info!("bound simulation kernel from process image");
        Ok(())
    }

    /// The bound kernel. Never resolves or allocates.
    pub fn get(&self) -> Option<&(dyn SimulationKernel + Send + Sync)> {
        self.bound.get().map(|kernel| kernel.as_ref())
    }
}

impl Default for KernelSlot {
    fn default() -> Self {
        Self::new()
    }
}

static KERNEL: KernelSlot = KernelSlot::new();

/// Bind the process-wide kernel. Must happen before any shim runs.
pub fn bind(kernel: BoundKernel) -> KernelResult<()> {
    KERNEL.bind(kernel)
}

/// Bind the process-wide kernel to the simulator this module is loaded in
pub fn bind_process() -> KernelResult<()> {
    KERNEL.bind_process()
}

/// Run `f` against the process-wide kernel
pub fn with_kernel<R>(f: impl FnOnce(&dyn SimulationKernel) -> R) -> KernelResult<R> {
    match KERNEL.get() {
        Some(kernel) => Ok(f(kernel)),
        None => Err(KernelError::Unavailable),
    }
}
