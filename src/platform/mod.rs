pub mod syscall;

/// Handle-based console writes, kept free of kernel32 so the mapping from
/// `WriteFile` results to byte counts can be exercised on any host.
#[cfg(any(windows, test))]
pub mod console {
    use core::ffi::c_void;

    pub type Handle = *mut c_void;

    pub const INVALID_HANDLE_VALUE: Handle = -1_isize as Handle;

    /// Issue one handle write of `len` bytes through `write`.
    ///
    /// `write` gets the handle, the length clamped to `u32::MAX` and the
    /// out-parameter for the transferred count, and returns a Win32 `BOOL`.
    /// An invalid or null handle reports 0 without calling `write`; a `FALSE`
    /// return reports 0 whatever the out-parameter says.
    pub fn write_handle(
        handle: Handle,
        len: usize,
        write: impl FnOnce(Handle, u32, &mut u32) -> i32,
    ) -> isize {
        if handle == INVALID_HANDLE_VALUE || handle.is_null() {
            return 0;
        }

        let len = u32::try_from(len).unwrap_or(u32::MAX);
        let mut written: u32 = 0;
        if write(handle, len, &mut written) == 0 {
            0
        } else {
            written as isize
        }
    }

}

#[cfg(windows)]
#[allow(non_snake_case)]
mod kernel32 {
    use core::ffi::c_void;

    use super::console::Handle;

    /// `(DWORD)-11`
    pub const STD_OUTPUT_HANDLE: u32 = -11_i32 as u32;

    #[link(name = "kernel32")]
    unsafe extern "system" {
        pub fn GetStdHandle(std_handle: u32) -> Handle;
        pub fn WriteFile(
            file: Handle,
            buffer: *const u8,
            bytes_to_write: u32,
            bytes_written: *mut u32,
            overlapped: *mut c_void,
        ) -> i32;
    }
}
