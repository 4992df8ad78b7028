use crate::platform::syscall;

/// A destination that accepts one write request at a time.
///
/// `write_raw` submits `buf` once and returns how many bytes were accepted,
/// always in `0..=buf.len()`. A short count is the only failure signal;
/// implementors never retry.
pub trait RawWrite {
    fn write_raw(&mut self, buf: &[u8]) -> usize;
}

/// The process's standard output, written straight through the kernel.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stdout;

impl RawWrite for Stdout {
    #[inline(always)]
    fn write_raw(&mut self, buf: &[u8]) -> usize {
        submit(buf, |ptr, len| {
            // SAFETY: ptr/len come from a live slice.
            unsafe { syscall::sys_write_stdout(ptr, len) }
        })
    }
}

/// Write `buf` to standard output with exactly one kernel request.
///
/// Returns the number of bytes the kernel accepted. Errors collapse to 0;
/// partial writes are not retried.
#[inline(always)]
pub fn write_raw(buf: &[u8]) -> usize {
    Stdout.write_raw(buf)
}

/// Hand `buf` to `kernel` unless it is empty, and clamp the raw result.
#[inline(always)]
pub(crate) fn submit(buf: &[u8], kernel: impl FnOnce(*const u8, usize) -> isize) -> usize {
    if buf.is_empty() {
        return 0;
    }
    clamp(kernel(buf.as_ptr(), buf.len()), buf.len())
}

/// Map a raw kernel result into `0..=requested`.
#[inline(always)]
fn clamp(ret: isize, requested: usize) -> usize {
    match usize::try_from(ret) {
        Ok(written) => written.min(requested),
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_request_skips_kernel() {
        let mut calls = 0;
        let written = submit(&[], |_, _| {
            calls += 1;
            1
        });
        assert_eq!(written, 0);
        assert_eq!(calls, 0);
    }

    #[test]
    fn full_write_reports_length() {
        let buf = b"abcdefghij";
        let written = submit(buf, |ptr, len| {
            assert_eq!(ptr, buf.as_ptr());
            assert_eq!(len, 10);
            len as isize
        });
        assert_eq!(written, 10);
    }

    #[test]
    fn short_write_is_reported_as_is() {
        assert_eq!(submit(b"abcdefghij", |_, _| 4), 4);
    }

    #[test]
    fn kernel_error_maps_to_zero() {
        // -EBADF, -EPIPE, and the Darwin/Windows -1 sentinel.
        for errno in [-9_isize, -32, -1, isize::MIN] {
            assert_eq!(submit(b"abc", |_, _| errno), 0);
        }
    }

    #[test]
    fn overlong_result_is_clamped() {
        assert_eq!(submit(b"abc", |_, _| 7), 3);
    }
}
