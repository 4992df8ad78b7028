//! Allocation-free writes to standard output that go straight to the kernel.
//!
//! [`write_raw`] issues exactly one write request and reports how many bytes
//! the kernel took. [`write_line`] appends a newline, joining payload and
//! terminator on the stack so that short lines cost a single request.
//!
//! Nothing here buffers, locks or allocates, so both calls are reentrant.

#![cfg_attr(not(test), no_std)]

mod line;
mod platform;
mod raw;

#[cfg(feature = "ffi")]
pub mod ffi;

#[cfg(feature = "log")]
pub mod logger;

pub use line::{SCRATCH_CAPACITY, write_line, write_line_to};
pub use raw::{RawWrite, Stdout, write_raw};
