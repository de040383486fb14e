//! Stream helper: whole records over any byte source or sink.
//!
//! [`RecordStream`] wraps a [`Read`] or [`Write`] and moves records
//! across it one packed image at a time. Reads are all-or-nothing: a
//! source that ends before a full record reports "no record" and
//! leaves the destination untouched, so fixed-size journals can be
//! consumed with a plain `while` loop.

use std::io::{ErrorKind, Read, Write};

use crate::error::StreamError;
use crate::record::Record;

/// Reads and writes whole records over a wrapped byte stream.
///
/// The wrapper owns the stream; [`RecordStream::into_inner`] gives it
/// back. A scratch buffer is reused across reads, so steady-state
/// reading does not allocate.
#[derive(Debug)]
pub struct RecordStream<T> {
    inner: T,
    scratch: Vec<u8>,
}

impl<T> RecordStream<T> {
    /// Wraps a byte stream.
    #[must_use]
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            scratch: Vec::new(),
        }
    }

    /// Returns a reference to the wrapped stream.
    #[must_use]
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Returns a mutable reference to the wrapped stream.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Unwraps the stream.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Read> RecordStream<T> {
    /// Reads exactly one record's worth of bytes and unpacks them
    /// into `record`.
    ///
    /// Returns `Ok(true)` when a full record was read, `Ok(false)`
    /// when the source ended first. On `Ok(false)` the record keeps
    /// its previous values; bytes of a partial trailing record are
    /// consumed, not pushed back.
    ///
    /// # Errors
    /// Returns [`StreamError::Io`] for any failure other than end of
    /// stream.
    pub fn read_into(&mut self, record: &mut Record) -> Result<bool, StreamError> {
        let size = record.size();
        self.scratch.resize(size, 0);
        match self.inner.read_exact(&mut self.scratch) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                tracing::trace!(expected = size, "stream ended before a full record");
                return Ok(false);
            }
            Err(e) => return Err(StreamError::Io(e)),
        }
        record.unpack(&self.scratch)?;
        Ok(true)
    }
}

impl<T: Write> RecordStream<T> {
    /// Packs `record` and writes the bytes to the sink.
    ///
    /// Returns the number of bytes written, which is always the
    /// record's packed size.
    ///
    /// # Errors
    /// Returns [`StreamError::Pack`] when the record cannot be
    /// packed, [`StreamError::Io`] when the sink fails.
    pub fn write(&mut self, record: &Record) -> Result<usize, StreamError> {
        let bytes = record.pack()?;
        self.inner.write_all(&bytes)?;
        tracing::trace!(bytes = bytes.len(), "record written");
        Ok(bytes.len())
    }

    /// Flushes the wrapped sink.
    ///
    /// # Errors
    /// Returns [`StreamError::Io`] when the sink fails.
    pub fn flush(&mut self) -> Result<(), StreamError> {
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferropack_core::{PackError, Value};
    use ferropack_schema::{FieldSpec, Layout, LayoutBuilder};
    use std::io::Cursor;

    fn header_layout() -> Layout {
        LayoutBuilder::new()
            .field("id", FieldSpec::uint32().with_default(0u32))
            .field("flag", FieldSpec::uint8().with_default(1u8))
            .field("tag", FieldSpec::bytes(4).unwrap().with_default(b"none"))
            .compile()
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let layout = header_layout();
        let mut stream = RecordStream::new(Cursor::new(Vec::new()));

        for id in [1u32, 2, 3] {
            let mut record = Record::new(&layout);
            record.set("id", id).unwrap();
            assert_eq!(stream.write(&record).unwrap(), 9);
        }
        stream.flush().unwrap();
        stream.get_mut().set_position(0);

        let mut record = Record::new(&layout);
        let mut seen = Vec::new();
        while stream.read_into(&mut record).unwrap() {
            seen.push(record.get("id").unwrap().cloned());
        }
        assert_eq!(
            seen,
            vec![
                Some(Value::Uint(1)),
                Some(Value::Uint(2)),
                Some(Value::Uint(3))
            ]
        );
    }

    #[test]
    fn test_short_read_reports_no_record() {
        let layout = header_layout();
        // Five of the nine bytes a record needs.
        let mut stream = RecordStream::new(Cursor::new(vec![1u8, 2, 3, 4, 5]));

        let mut record = Record::new(&layout);
        record.set("id", 7u32).unwrap();

        assert!(!stream.read_into(&mut record).unwrap());
        // The destination record is untouched.
        assert_eq!(record.get("id").unwrap(), Some(&Value::Uint(7)));
        assert_eq!(record.get("flag").unwrap(), Some(&Value::Uint(1)));
    }

    #[test]
    fn test_read_from_empty_source() {
        let layout = header_layout();
        let mut stream = RecordStream::new(Cursor::new(Vec::new()));
        let mut record = Record::new(&layout);
        assert!(!stream.read_into(&mut record).unwrap());
    }

    #[test]
    fn test_trailing_partial_record() {
        let layout = header_layout();
        let mut source = Vec::new();
        let mut record = Record::new(&layout);
        record.set("id", 5u32).unwrap();
        source.extend_from_slice(&record.pack().unwrap());
        source.extend_from_slice(&[0xAB, 0xCD]);

        let mut stream = RecordStream::new(Cursor::new(source));
        let mut dst = Record::new(&layout);
        assert!(stream.read_into(&mut dst).unwrap());
        assert_eq!(dst.get("id").unwrap(), Some(&Value::Uint(5)));
        assert!(!stream.read_into(&mut dst).unwrap());
        assert_eq!(dst.get("id").unwrap(), Some(&Value::Uint(5)));
    }

    #[test]
    fn test_write_propagates_pack_errors() {
        let layout = LayoutBuilder::new().field("x", FieldSpec::uint8()).compile();
        let record = Record::new(&layout);
        let mut stream = RecordStream::new(Cursor::new(Vec::new()));
        assert!(matches!(
            stream.write(&record).unwrap_err(),
            StreamError::Pack(PackError::UnsetField { .. })
        ));
    }

    #[test]
    fn test_read_propagates_io_errors() {
        struct BrokenReader;

        impl Read for BrokenReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("wire cut"))
            }
        }

        let layout = header_layout();
        let mut stream = RecordStream::new(BrokenReader);
        let mut record = Record::new(&layout);
        assert!(matches!(
            stream.read_into(&mut record).unwrap_err(),
            StreamError::Io(_)
        ));
    }

    #[test]
    fn test_inner_access() {
        let mut stream = RecordStream::new(Cursor::new(vec![1u8, 2]));
        assert_eq!(stream.get_ref().get_ref().len(), 2);
        stream.get_mut().set_position(1);
        let inner = stream.into_inner();
        assert_eq!(inner.position(), 1);
    }
}
