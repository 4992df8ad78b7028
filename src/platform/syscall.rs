//! Kernel entry points for writing to standard output.
//!
//! Exactly one `sys_write_stdout` is compiled in, picked by target OS and
//! architecture. The asm branches never go through a C library; targets
//! without one fall back to the most primitive descriptor write available.
//!
//! Every branch returns the raw kernel result: a byte count on success and a
//! negative value on failure. Clamping happens one layer up.

/// Standard output descriptor on every POSIX-like asm branch.
#[cfg(any(
    all(
        any(target_os = "linux", target_os = "android"),
        any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "arm")
    ),
    all(
        target_os = "macos",
        any(target_arch = "x86_64", target_arch = "aarch64")
    ),
))]
const STDOUT_FILENO: usize = 1;

#[cfg(all(
    any(target_os = "linux", target_os = "android"),
    target_arch = "x86_64"
))]
const SYS_WRITE: usize = 1;

// BSD syscall class (2 << 24) | SYS_write.
#[cfg(all(target_os = "macos", target_arch = "x86_64"))]
const SYS_WRITE: usize = 0x200_0004;

#[cfg(all(
    any(target_os = "linux", target_os = "android"),
    target_arch = "aarch64"
))]
const SYS_WRITE: usize = 64;

#[cfg(all(target_os = "macos", target_arch = "aarch64"))]
const SYS_WRITE: usize = 4;

#[cfg(all(
    any(target_os = "linux", target_os = "android"),
    target_arch = "arm"
))]
const SYS_WRITE: usize = 4;

/// Write `len` bytes at `buf` to standard output with one `syscall`.
/// Returns the number of bytes written, or a negative errno on failure.
///
/// # Safety
/// `buf` must point to at least `len` readable bytes.
#[cfg(all(
    any(target_os = "linux", target_os = "android"),
    target_arch = "x86_64"
))]
#[inline(always)]
pub unsafe fn sys_write_stdout(buf: *const u8, len: usize) -> isize {
    let ret: usize;
    // SAFETY: Caller guarantees buf points to len readable bytes. The
    // kernel clobbers rcx (return rip) and r11 (saved rflags).
    unsafe {
        core::arch::asm!(
            "syscall",
            inlateout("rax") SYS_WRITE => ret,
            in("rdi") STDOUT_FILENO,
            in("rsi") buf,
            in("rdx") len,
            lateout("rcx") _,
            lateout("r11") _,
            options(nostack, readonly),
        );
    }
    ret as isize
}

/// Write `len` bytes at `buf` to standard output with one `syscall`.
///
/// XNU reports failure through the carry flag with a positive errno in rax,
/// so the carry case is folded into -1 here.
///
/// # Safety
/// `buf` must point to at least `len` readable bytes.
#[cfg(all(target_os = "macos", target_arch = "x86_64"))]
#[inline(always)]
pub unsafe fn sys_write_stdout(buf: *const u8, len: usize) -> isize {
    let ret: usize;
    // SAFETY: Caller guarantees buf points to len readable bytes. The
    // kernel clobbers rcx and r11, and zeroes rdx as the second return value.
    unsafe {
        core::arch::asm!(
            "syscall",
            "jnc 2f",
            "mov rax, -1",
            "2:",
            inlateout("rax") SYS_WRITE => ret,
            in("rdi") STDOUT_FILENO,
            in("rsi") buf,
            inlateout("rdx") len => _,
            lateout("rcx") _,
            lateout("r11") _,
            options(nostack, readonly),
        );
    }
    ret as isize
}

/// Write `len` bytes at `buf` to standard output with `svc #0`.
/// Returns the number of bytes written, or a negative errno on failure.
///
/// # Safety
/// `buf` must point to at least `len` readable bytes.
#[cfg(all(
    any(target_os = "linux", target_os = "android"),
    target_arch = "aarch64"
))]
#[inline(always)]
pub unsafe fn sys_write_stdout(buf: *const u8, len: usize) -> isize {
    let ret: usize;
    // SAFETY: Caller guarantees buf points to len readable bytes. Only x0
    // is written back by the kernel.
    unsafe {
        core::arch::asm!(
            "svc #0",
            inlateout("x0") STDOUT_FILENO => ret,
            in("x1") buf,
            in("x2") len,
            in("x8") SYS_WRITE,
            options(nostack, readonly),
        );
    }
    ret as isize
}

/// Write `len` bytes at `buf` to standard output with `svc #0x80`.
///
/// Like the x86_64 variant, a set carry flag means x0 holds an errno;
/// `csinv` turns that into -1.
///
/// # Safety
/// `buf` must point to at least `len` readable bytes.
#[cfg(all(target_os = "macos", target_arch = "aarch64"))]
#[inline(always)]
pub unsafe fn sys_write_stdout(buf: *const u8, len: usize) -> isize {
    let ret: usize;
    // SAFETY: Caller guarantees buf points to len readable bytes. XNU may
    // write a second return value into x1.
    unsafe {
        core::arch::asm!(
            "svc #0x80",
            "csinv x0, x0, xzr, cc",
            inlateout("x0") STDOUT_FILENO => ret,
            inlateout("x1") buf => _,
            in("x2") len,
            in("x16") SYS_WRITE,
            options(nostack, readonly),
        );
    }
    ret as isize
}

/// Write `len` bytes at `buf` to standard output with `svc #0` (EABI).
/// Returns the number of bytes written, or a negative errno on failure.
///
/// r7 carries the syscall number but doubles as the Thumb frame pointer,
/// which the compiler refuses as an operand, so it is swapped in and out
/// inside the asm block.
///
/// # Safety
/// `buf` must point to at least `len` readable bytes.
#[cfg(all(
    any(target_os = "linux", target_os = "android"),
    target_arch = "arm"
))]
#[inline(always)]
pub unsafe fn sys_write_stdout(buf: *const u8, len: usize) -> isize {
    let ret: usize;
    // SAFETY: Caller guarantees buf points to len readable bytes. r7 is
    // restored before the block ends.
    unsafe {
        core::arch::asm!(
            "mov {saved}, r7",
            "mov r7, {nr}",
            "svc #0",
            "mov r7, {saved}",
            nr = in(reg) SYS_WRITE,
            saved = out(reg) _,
            inlateout("r0") STDOUT_FILENO => ret,
            in("r1") buf,
            in("r2") len,
            options(nostack, readonly),
        );
    }
    ret as isize
}

/// Write `len` bytes at `buf` to the console's standard output handle.
///
/// Reports 0 if the process has no usable stdout handle or `WriteFile`
/// fails. Requests above `u32::MAX` bytes are truncated to a short write.
///
/// # Safety
/// `buf` must point to at least `len` readable bytes.
#[cfg(windows)]
#[inline(always)]
pub unsafe fn sys_write_stdout(buf: *const u8, len: usize) -> isize {
    use super::console::write_handle;
    use super::kernel32::{GetStdHandle, STD_OUTPUT_HANDLE, WriteFile};

    // SAFETY: GetStdHandle has no preconditions.
    let handle = unsafe { GetStdHandle(STD_OUTPUT_HANDLE) };
    write_handle(handle, len, |handle, len, written| {
        // SAFETY: write_handle only calls this with a live stdout handle and
        // len clamped to the caller's span; written outlives the call.
        unsafe { WriteFile(handle, buf, len, written, core::ptr::null_mut()) }
    })
}

/// Write `len` bytes at `buf` to standard output through `write(2)`.
/// Returns the number of bytes written, or -1 on failure.
///
/// # Safety
/// `buf` must point to at least `len` readable bytes.
#[cfg(not(any(
    windows,
    all(
        any(target_os = "linux", target_os = "android"),
        any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "arm")
    ),
    all(
        target_os = "macos",
        any(target_arch = "x86_64", target_arch = "aarch64")
    ),
)))]
#[inline(always)]
pub unsafe fn sys_write_stdout(buf: *const u8, len: usize) -> isize {
    // SAFETY: Caller guarantees buf points to len readable bytes.
    unsafe { libc::write(libc::STDOUT_FILENO, buf.cast(), len) as isize }
}
