use crate::raw::{RawWrite, Stdout};

/// Size of the stack buffer used to join a payload with its newline.
///
/// Payloads up to `SCRATCH_CAPACITY - 1` bytes go out in one request.
pub const SCRATCH_CAPACITY: usize = 256;

/// Write `buf` followed by `\n` to standard output.
#[inline(always)]
pub fn write_line(buf: &[u8]) {
    write_line_to(&mut Stdout, buf);
}

/// Write `buf` followed by `\n` to `out`, using as few requests as possible.
///
/// A payload that fits the scratch buffer together with its newline is sent
/// as a single request. Anything longer is sent as two: the payload, then
/// the newline. The newline is sent even if the payload write came up short.
#[inline(always)]
pub fn write_line_to<W: RawWrite + ?Sized>(out: &mut W, buf: &[u8]) {
    let len = buf.len();
    if len < SCRATCH_CAPACITY {
        let mut scratch = [0u8; SCRATCH_CAPACITY];
        scratch[..len].copy_from_slice(buf);
        scratch[len] = b'\n';
        out.write_raw(&scratch[..=len]);
    } else {
        out.write_raw(buf);
        out.write_raw(b"\n");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records every request and accepts it in full (or up to `limit`).
    #[derive(Default)]
    pub struct Recorder {
        pub writes: Vec<Vec<u8>>,
        pub limit: Option<usize>,
    }

    impl RawWrite for Recorder {
        fn write_raw(&mut self, buf: &[u8]) -> usize {
            self.writes.push(buf.to_vec());
            self.limit.map_or(buf.len(), |limit| limit.min(buf.len()))
        }
    }

    fn with_newline(payload: &[u8]) -> Vec<u8> {
        let mut line = payload.to_vec();
        line.push(b'\n');
        line
    }

    #[test]
    fn short_payload_is_one_request() {
        let mut out = Recorder::default();
        write_line_to(&mut out, b"hello");
        assert_eq!(out.writes, [b"hello\n".to_vec()]);
    }

    #[test]
    fn empty_payload_writes_bare_newline() {
        let mut out = Recorder::default();
        write_line_to(&mut out, b"");
        assert_eq!(out.writes, [b"\n".to_vec()]);
    }

    #[test]
    fn payload_filling_scratch_takes_fast_path() {
        let payload = [b'a'; SCRATCH_CAPACITY - 1];
        let mut out = Recorder::default();
        write_line_to(&mut out, &payload);
        assert_eq!(out.writes.len(), 1);
        assert_eq!(out.writes[0].len(), SCRATCH_CAPACITY);
        assert_eq!(out.writes[0], with_newline(&payload));
    }

    #[test]
    fn payload_at_capacity_takes_slow_path() {
        let payload = [b'b'; SCRATCH_CAPACITY];
        let mut out = Recorder::default();
        write_line_to(&mut out, &payload);
        assert_eq!(out.writes, [payload.to_vec(), b"\n".to_vec()]);
    }

    #[test]
    fn long_payload_is_passed_through() {
        let payload: Vec<u8> = (0..4096u32).map(|i| (i % 251) as u8).collect();
        let mut out = Recorder::default();
        write_line_to(&mut out, &payload);
        assert_eq!(out.writes.len(), 2);
        assert_eq!(out.writes[0], payload);
        assert_eq!(out.writes[1], b"\n");
    }

    #[test]
    fn short_first_write_still_sends_newline() {
        let payload = [b'c'; 1000];
        let mut out = Recorder {
            limit: Some(10),
            ..Recorder::default()
        };
        write_line_to(&mut out, &payload);
        assert_eq!(out.writes.len(), 2);
        assert_eq!(out.writes[0].len(), 1000);
        assert_eq!(out.writes[1], b"\n");
    }

    #[test]
    fn bytes_are_opaque() {
        let payload = [0x00, 0xff, b'\n', 0xc3, 0x28];
        let mut out = Recorder::default();
        write_line_to(&mut out, &payload);
        assert_eq!(out.writes, [with_newline(&payload)]);
    }
}
