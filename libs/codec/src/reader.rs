//! # Record Reader - fixed-width record extraction
//!
//! Pulls whole records out of a byte stream. Bytes are read into a scratch
//! buffer and viewed as a slice of wire structs via `zerocopy::Ref`, so the
//! only per-field work is the byte-order conversion in
//! [`WireRecord::decode`].
//!
//! ## End of stream
//!
//! - clean EOF on a record boundary: the batch is short, nothing else
//! - EOF inside a record: the partial tail is never decoded; its length is
//!   kept in [`RecordReader::trailing_bytes`] and logged
//! - I/O error: surfaced as [`DecodeError::Io`] (`Interrupted` is retried)

use crate::error::{DecodeError, DecodeResult};
use dukas_types::WireRecord;
use std::io::{self, Read};
use tracing::warn;
use zerocopy::Ref;

/// Whole-record reader over any byte source
pub struct RecordReader<R> {
    inner: R,
    scratch: Vec<u8>,
    bytes_read: u64,
    trailing_bytes: usize,
    exhausted: bool,
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            scratch: Vec::new(),
            bytes_read: 0,
            trailing_bytes: 0,
            exhausted: false,
        }
    }

    /// Fill `window` with raw bytes, returning how many were available
    ///
    /// Used by the format probe, which needs the undecoded bytes so it can
    /// reinterpret them under either layout.
    pub fn read_window(&mut self, window: &mut [u8]) -> DecodeResult<usize> {
        if self.exhausted {
            return Ok(0);
        }
        let got = fill(&mut self.inner, window)
            .map_err(|e| DecodeError::io("reading probe window", e))?;
        self.bytes_read += got as u64;
        if got < window.len() {
            self.exhausted = true;
        }
        Ok(got)
    }

    /// Read up to `count` whole records of layout `W`, appending to `out`
    ///
    /// Returns the number of records appended. Anything less than `count`
    /// means the stream is finished.
    pub fn read_batch<W: WireRecord>(
        &mut self,
        count: usize,
        out: &mut Vec<W::Tick>,
    ) -> DecodeResult<usize> {
        if self.exhausted || count == 0 {
            return Ok(0);
        }

        let want = count * W::SIZE;
        self.scratch.resize(want, 0);
        let got = fill(&mut self.inner, &mut self.scratch[..want])
            .map_err(|e| DecodeError::io("reading records", e))?;
        self.bytes_read += got as u64;

        if got < want {
            self.exhausted = true;
        }

        let whole = got / W::SIZE;
        let tail = got % W::SIZE;
        if tail != 0 {
            self.trailing_bytes += tail;
            warn!(
                record_size = W::SIZE,
                trailing = tail,
                offset = self.bytes_read - tail as u64,
                "Stream ends inside a record, ignoring partial tail"
            );
        }

        let records = Ref::<_, [W]>::new_slice_unaligned(&self.scratch[..whole * W::SIZE])
            .ok_or_else(|| {
                DecodeError::io(
                    "viewing record batch",
                    io::Error::new(io::ErrorKind::InvalidData, "misaligned record batch"),
                )
            })?;
        out.extend(records.iter().map(W::decode));

        Ok(whole)
    }

    /// Total bytes consumed from the source so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Bytes of an incomplete final record that were dropped
    pub fn trailing_bytes(&self) -> usize {
        self.trailing_bytes
    }
}

/// Read until `buf` is full or the source reports end of stream
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dukas_types::{CompactTick, CompactWire, LegacyTick, LegacyWire};
    use std::io::Cursor;
    use zerocopy::AsBytes;

    fn compact(ts_ms: u32) -> CompactTick {
        CompactTick {
            ts_ms,
            ask: 123_470,
            bid: 123_450,
            ask_qty: 1.0,
            bid_qty: 2.0,
        }
    }

    fn compact_stream(n: u32) -> Vec<u8> {
        (0..n)
            .flat_map(|i| CompactWire::encode(&compact(i * 100)).as_bytes().to_vec())
            .collect()
    }

    /// Hands out at most `chunk` bytes per read call
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        chunk: usize,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.chunk.min(buf.len()).min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    struct Failing;

    impl Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    #[test]
    fn test_reads_whole_batches() {
        let mut reader = RecordReader::new(Cursor::new(compact_stream(5)));
        let mut out = Vec::new();

        assert_eq!(reader.read_batch::<CompactWire>(2, &mut out).unwrap(), 2);
        assert_eq!(reader.read_batch::<CompactWire>(2, &mut out).unwrap(), 2);
        assert_eq!(reader.read_batch::<CompactWire>(2, &mut out).unwrap(), 1);
        assert_eq!(reader.read_batch::<CompactWire>(2, &mut out).unwrap(), 0);

        let stamps: Vec<u32> = out.iter().map(|t| t.ts_ms).collect();
        assert_eq!(stamps, vec![0, 100, 200, 300, 400]);
        assert_eq!(reader.trailing_bytes(), 0);
        assert_eq!(reader.bytes_read(), 100);
    }

    #[test]
    fn test_partial_tail_is_not_exposed() {
        let mut data = compact_stream(2);
        data.extend_from_slice(&[0xAA; 7]);
        let mut reader = RecordReader::new(Cursor::new(data));
        let mut out = Vec::new();

        assert_eq!(reader.read_batch::<CompactWire>(8, &mut out).unwrap(), 2);
        assert_eq!(out.len(), 2);
        assert_eq!(reader.trailing_bytes(), 7);
        assert_eq!(reader.read_batch::<CompactWire>(8, &mut out).unwrap(), 0);
    }

    #[test]
    fn test_short_reads_are_reassembled() {
        let tick = LegacyTick {
            ts_ms: 42,
            ask: 1.5,
            bid: 1.25,
            ask_qty: 3.0,
            bid_qty: 4.0,
        };
        let data = LegacyWire::encode(&tick).as_bytes().to_vec();
        let mut reader = RecordReader::new(Trickle {
            data,
            pos: 0,
            chunk: 3,
        });
        let mut out = Vec::new();

        assert_eq!(reader.read_batch::<LegacyWire>(1, &mut out).unwrap(), 1);
        assert_eq!(out[0], tick);
    }

    #[test]
    fn test_io_errors_are_distinct_from_eof() {
        let mut reader = RecordReader::new(Failing);
        let mut out: Vec<CompactTick> = Vec::new();

        let err = reader.read_batch::<CompactWire>(1, &mut out).unwrap_err();
        assert!(matches!(err, DecodeError::Io { .. }));
        assert!(err.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_window_reports_available_bytes() {
        let mut reader = RecordReader::new(Cursor::new(vec![1u8; 25]));
        let mut window = [0u8; 40];

        assert_eq!(reader.read_window(&mut window).unwrap(), 25);
        assert_eq!(reader.read_window(&mut window).unwrap(), 0);
    }
}
