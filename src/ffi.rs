//! C ABI entry points for linking the writer into non-Rust code.
//!
//! This crate builds as an rlib only. To hand these symbols to a C linker,
//! depend on it with the `ffi` feature from a crate built as `staticlib`;
//! the unmangled `rawout_*` functions are carried into that archive.

use core::slice;

use crate::{line, raw};

/// Build a span from a C pointer/length pair. Null reads as empty.
///
/// # Safety
/// A non-null `buf` must point to at least `len` readable bytes that stay
/// valid for `'a`.
unsafe fn span<'a>(buf: *const u8, len: usize) -> &'a [u8] {
    if buf.is_null() {
        &[]
    } else {
        // SAFETY: Caller guarantees buf is valid for len bytes.
        unsafe { slice::from_raw_parts(buf, len) }
    }
}

/// Write `len` bytes at `buf` to standard output with one kernel request.
/// Returns the number of bytes written; 0 on error or for a null `buf`.
///
/// # Safety
/// A non-null `buf` must point to at least `len` readable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rawout_write(buf: *const u8, len: usize) -> usize {
    // SAFETY: Forwarded from the caller.
    raw::write_raw(unsafe { span(buf, len) })
}

/// Write `len` bytes at `buf` followed by a newline to standard output.
/// A null `buf` writes just the newline.
///
/// # Safety
/// A non-null `buf` must point to at least `len` readable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rawout_write_line(buf: *const u8, len: usize) {
    // SAFETY: Forwarded from the caller.
    line::write_line(unsafe { span(buf, len) });
}
