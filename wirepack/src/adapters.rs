//! Cursor adapters for `std::io` channels.

use alloc::{string::ToString, vec::Vec};
use std::io::{BufRead, BufReader, Read, Write};

use crate::{ByteReader, ByteWriter, DecodeError, EncodeError};

// READ ADAPTER
// ================================================================================================

/// Adapts any [std::io::Read] into a [ByteReader] channel.
///
/// In particular, this covers things like [std::fs::File], sockets, and standard input. The
/// adapter buffers the underlying reader; buffering is a property of the channel and does not
/// change the strictly-forward, exact-count contract the cursor relies on.
pub struct ReadAdapter<R: Read> {
    reader: BufReader<R>,
    // scratch space backing the slices handed out by `read_slice`
    scratch: Vec<u8>,
}

impl<R: Read> ReadAdapter<R> {
    /// Creates a new [ByteReader] adapter for the given implementation of [std::io::Read].
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            scratch: Vec::new(),
        }
    }

    /// Unwraps the adapter, returning the underlying reader.
    ///
    /// Bytes the adapter has buffered but not yet handed out are discarded.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

impl<R: Read> ByteReader for ReadAdapter<R> {
    fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let mut buf = [0u8; 1];
        self.reader.read_exact(&mut buf).map_err(map_read_error)?;
        Ok(buf[0])
    }

    fn read_slice(&mut self, len: usize) -> Result<&[u8], DecodeError> {
        self.scratch.resize(len, 0);
        self.reader.read_exact(&mut self.scratch).map_err(map_read_error)?;
        Ok(&self.scratch)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut buf = [0u8; N];
        self.reader.read_exact(&mut buf).map_err(map_read_error)?;
        Ok(buf)
    }

    /// Only the buffered portion of the input can be inspected without consuming it, so this
    /// answers optimistically once the buffer is non-empty; the subsequent read surfaces the
    /// failure if the bytes never arrive.
    fn check_eor(&mut self, num_bytes: usize) -> Result<(), DecodeError> {
        if num_bytes == 0 || self.reader.buffer().len() >= num_bytes {
            return Ok(());
        }
        match self.reader.fill_buf() {
            Ok([]) => Err(DecodeError::EndOfStream),
            Ok(_) => Ok(()),
            Err(err) => Err(map_read_error(err)),
        }
    }

    fn has_more_bytes(&mut self) -> bool {
        self.reader.fill_buf().map(|buf| !buf.is_empty()).unwrap_or(false)
    }
}

fn map_read_error(err: std::io::Error) -> DecodeError {
    match err.kind() {
        std::io::ErrorKind::UnexpectedEof => DecodeError::EndOfStream,
        _ => DecodeError::Io(err.to_string()),
    }
}

// WRITE ADAPTER
// ================================================================================================

/// Adapts any [std::io::Write] into a [ByteWriter] channel.
pub struct WriteAdapter<W: Write> {
    writer: W,
}

impl<W: Write> WriteAdapter<W> {
    /// Creates a new [ByteWriter] adapter for the given implementation of [std::io::Write].
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> Result<(), EncodeError> {
        self.writer.flush().map_err(|err| EncodeError::Io(err.to_string()))
    }

    /// Unwraps the adapter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ByteWriter for WriteAdapter<W> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        self.writer.write_all(bytes).map_err(|err| EncodeError::Io(err.to_string()))
    }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use std::io::Cursor;

    use assert_matches::assert_matches;

    use super::{ReadAdapter, WriteAdapter};
    use crate::{ByteReader, ByteWriter, DecodeError};

    #[test]
    fn read_adapter_empty() {
        let mut adapter = ReadAdapter::new(std::io::empty());
        assert!(!adapter.has_more_bytes());
        assert_matches!(adapter.check_eor(1), Err(DecodeError::EndOfStream));
        assert_matches!(adapter.read_u8(), Err(DecodeError::EndOfStream));
        assert_matches!(adapter.read_slice(1), Err(DecodeError::EndOfStream));
        assert!(adapter.read_slice(0).unwrap().is_empty());
        assert_eq!(adapter.read_array::<0>().unwrap(), [] as [u8; 0]);
    }

    #[test]
    fn read_adapter_decodes_like_a_slice() {
        let mut encoded = Vec::new();
        encoded.write_var_u32(300).unwrap();
        encoded.write_string("hello").unwrap();
        encoded.write_u64(0xdeadbeef).unwrap();

        let mut adapter = ReadAdapter::new(Cursor::new(encoded));
        assert_eq!(adapter.read_var_u32().unwrap(), 300);
        assert_eq!(adapter.read_string().unwrap(), "hello");
        assert_eq!(adapter.read_u64().unwrap(), 0xdeadbeef);
        assert!(!adapter.has_more_bytes());
    }

    #[test]
    fn read_adapter_truncated_payload_fails() {
        // prefix claims 4 bytes, channel holds 1
        let mut adapter = ReadAdapter::new(Cursor::new(vec![0x04u8, 0x61]));
        assert_matches!(adapter.read_string(), Err(DecodeError::EndOfStream));
    }

    #[test]
    fn write_adapter_roundtrip_through_file() {
        let path = std::env::temp_dir().join("wirepack_write_adapter_roundtrip.bin");

        {
            let file = std::fs::File::create(&path).unwrap();
            let mut writer = WriteAdapter::new(file);
            writer.write_string("on disk").unwrap();
            writer.write_var_i64(-42).unwrap();
            writer.write_f64(6.25).unwrap();
            writer.flush().unwrap();
        }

        let file = std::fs::File::open(&path).unwrap();
        let mut reader = ReadAdapter::new(file);
        assert_eq!(reader.read_string().unwrap(), "on disk");
        assert_eq!(reader.read_var_i64().unwrap(), -42);
        assert_eq!(reader.read_f64().unwrap(), 6.25);
        assert!(!reader.has_more_bytes());
    }
}
