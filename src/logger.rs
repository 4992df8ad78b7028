//! A `log` backend that prints records straight to standard output.
//!
//! Records are rendered as `[LEVEL] target: message` on the stack and
//! handed to the line writer, so logging never allocates or locks. A record
//! that fits in `SCRATCH_CAPACITY` bytes reaches the kernel as one request.

use core::fmt::{self, Write};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::line::{SCRATCH_CAPACITY, write_line_to};
use crate::raw::{RawWrite, Stdout};

static LOGGER: StdoutLogger = StdoutLogger;

/// Install the stdout logger and set the global maximum level.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

pub struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            write_record(&mut Stdout, record);
        }
    }

    fn flush(&self) {}
}

/// Render one record as a single line on `out`.
pub fn write_record<W: RawWrite + ?Sized>(out: &mut W, record: &Record) {
    let mut line = LineFormatter::new(out);
    // LineFormatter never fails; an error here can only come from a
    // user Display impl, and whatever was rendered so far still goes out.
    let _ = write!(
        line,
        "[{}] {}: {}",
        record.level(),
        record.target(),
        record.args()
    );
    line.finish();
}

/// `fmt::Write` adapter that accumulates text in a stack buffer.
///
/// The buffer keeps one byte in reserve so `finish` always takes the single
/// request path of the line writer. Text that outgrows it is spilled to
/// `out` in buffer-sized requests.
pub struct LineFormatter<'a, W: RawWrite + ?Sized> {
    out: &'a mut W,
    buf: [u8; SCRATCH_CAPACITY - 1],
    len: usize,
}

impl<'a, W: RawWrite + ?Sized> LineFormatter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self {
            out,
            buf: [0; SCRATCH_CAPACITY - 1],
            len: 0,
        }
    }

    /// Emit whatever is buffered, terminated by a newline.
    pub fn finish(self) {
        write_line_to(self.out, &self.buf[..self.len]);
    }

    fn spill(&mut self) {
        self.out.write_raw(&self.buf[..self.len]);
        self.len = 0;
    }
}

impl<W: RawWrite + ?Sized> Write for LineFormatter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut bytes = s.as_bytes();
        while !bytes.is_empty() {
            if self.len == self.buf.len() {
                self.spill();
            }
            let take = bytes.len().min(self.buf.len() - self.len);
            self.buf[self.len..self.len + take].copy_from_slice(&bytes[..take]);
            self.len += take;
            bytes = &bytes[take..];
        }
        Ok(())
    }
}
