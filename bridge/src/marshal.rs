/*!
String Marshalling - host strings to call-scoped C buffers

A `ForeignBuffer` owns the null-terminated copy of a host string and is
dropped before the call that created it returns. Code outside this module
only sees the buffer through `with_foreign`, whose closure cannot keep the
`&CStr` it is given.
*/

use std::ffi::{CStr, CString};
use std::marker::PhantomData;
use std::os::raw::c_char;
use thiserror::Error;
use tracing::debug;

/// Reasons a host string cannot cross the C boundary.
///
/// Each variant has a stable negative code, which is what C callers see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarshalError {
    #[error("string contains a null byte at offset {position}")]
    InteriorNul { position: usize },

    #[error("string of {len} bytes does not fit in an address-width buffer")]
    TooLong { len: usize },

    #[error("string is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },

    #[error("null pointer passed for a non-empty string")]
    NullPointer,
}

impl MarshalError {
    pub fn code(&self) -> i32 {
        match self {
            MarshalError::InteriorNul { .. } => -1,
            MarshalError::TooLong { .. } => -2,
            MarshalError::InvalidUtf8 { .. } => -3,
            MarshalError::NullPointer => -4,
        }
    }
}

pub type MarshalResult<T> = Result<T, MarshalError>;

/// Validate a string length and return the buffer size including terminator
///
/// Rust allocations are capped at `isize::MAX` bytes, so that is the bound.
pub fn check_length(len: usize) -> MarshalResult<usize> {
    len.checked_add(1)
        .filter(|size| *size <= isize::MAX as usize)
        .ok_or(MarshalError::TooLong { len })
}

/// Null-terminated copy of a host string, tied to the borrow it came from
#[derive(Debug)]
pub struct ForeignBuffer<'host> {
    bytes: CString,
    _host: PhantomData<&'host str>,
}

impl<'host> ForeignBuffer<'host> {
    pub fn new(text: &'host str) -> MarshalResult<Self> {
        check_length(text.len())?;

        let bytes = CString::new(text).map_err(|e| {
            let err = MarshalError::InteriorNul {
                position: e.nul_position(),
            };
            debug!(%err, "rejected host string");
            err
        })?;

        #[cfg(test)]
        tests::track_acquire();

        Ok(Self {
            bytes,
            _host: PhantomData,
        })
    }

    pub fn as_c_str(&self) -> &CStr {
        &self.bytes
    }

    /// Pointer valid until this buffer is dropped
    pub fn as_ptr(&self) -> *const c_char {
        self.bytes.as_ptr()
    }

    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.bytes.as_bytes_with_nul()
    }

    /// Length excluding the terminator
    pub fn len(&self) -> usize {
        self.bytes.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for ForeignBuffer<'_> {
    fn drop(&mut self) {
        #[cfg(test)]
        tests::track_release();
    }
}

/// Marshal `text` and hand the buffer to `f` for exactly one call
///
/// The buffer is released when `f` returns or unwinds. Nothing is produced
/// if `text` cannot be marshalled.
pub fn with_foreign<R>(text: &str, f: impl FnOnce(&CStr) -> R) -> MarshalResult<R> {
    let buffer = ForeignBuffer::new(text)?;
    Ok(f(buffer.as_c_str()))
}

/// Borrow a UTF-8 string handed over the C boundary as pointer and length
///
/// A null pointer is accepted only with a zero length (the empty string).
/// Lengths that leave no room for a terminator are rejected before the
/// pointer is touched.
///
/// # Safety
/// If `ptr` is non-null and `len` passes `check_length`, `ptr` must point
/// to `len` readable bytes that stay valid and unmodified for `'a`.
pub unsafe fn from_raw_parts<'a>(ptr: *const u8, len: usize) -> MarshalResult<&'a str> {
    check_length(len)?;

    if ptr.is_null() {
        return if len == 0 {
            Ok("")
        } else {
            Err(MarshalError::NullPointer)
        };
    }

    let bytes = unsafe { std::slice::from_raw_parts(ptr, len) };
    std::str::from_utf8(bytes).map_err(|e| MarshalError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })
}
