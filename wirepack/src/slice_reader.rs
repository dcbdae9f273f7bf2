//! In-memory channel implementation for the reader cursor.

use crate::{ByteReader, DecodeError};

// SLICE READER
// ================================================================================================

/// Implements [ByteReader] for a slice of bytes.
///
/// This is the channel of choice for decoding data that is already in memory; it works without
/// the `std` feature. For channels backed by [std::io::Read], see
/// [ReadAdapter](crate::ReadAdapter).
pub struct SliceReader<'a> {
    source: &'a [u8],
    pos: usize,
}

impl<'a> SliceReader<'a> {
    /// Creates a new slice reader positioned at the start of the specified slice.
    pub fn new(source: &'a [u8]) -> Self {
        SliceReader { source, pos: 0 }
    }

    /// Returns the number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes remaining in the slice.
    pub fn remaining(&self) -> usize {
        self.source.len() - self.pos
    }
}

impl ByteReader for SliceReader<'_> {
    fn read_u8(&mut self) -> Result<u8, DecodeError> {
        self.check_eor(1)?;
        let result = self.source[self.pos];
        self.pos += 1;
        Ok(result)
    }

    fn read_slice(&mut self, len: usize) -> Result<&[u8], DecodeError> {
        self.check_eor(len)?;
        let result = &self.source[self.pos..self.pos + len];
        self.pos += len;
        Ok(result)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        self.check_eor(N)?;
        let mut result = [0_u8; N];
        result.copy_from_slice(&self.source[self.pos..self.pos + N]);
        self.pos += N;
        Ok(result)
    }

    fn check_eor(&mut self, num_bytes: usize) -> Result<(), DecodeError> {
        if num_bytes > self.remaining() {
            return Err(DecodeError::EndOfStream);
        }
        Ok(())
    }

    fn has_more_bytes(&mut self) -> bool {
        self.pos < self.source.len()
    }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::SliceReader;
    use crate::{ByteReader, DecodeError};

    #[test]
    fn reads_advance_the_position() {
        let data = [1u8, 2, 3, 4, 5, 6];
        let mut reader = SliceReader::new(&data);

        assert_eq!(reader.read_u8().unwrap(), 1);
        assert_eq!(reader.position(), 1);

        assert_eq!(reader.read_slice(2).unwrap(), &[2, 3]);
        assert_eq!(reader.position(), 3);

        assert_eq!(reader.read_array::<3>().unwrap(), [4, 5, 6]);
        assert_eq!(reader.position(), 6);
        assert_eq!(reader.remaining(), 0);
        assert!(!reader.has_more_bytes());
    }

    #[test]
    fn empty_slice_read_fails() {
        let mut reader = SliceReader::new(&[]);
        assert_matches!(reader.read_u8(), Err(DecodeError::EndOfStream));
        assert_matches!(reader.read_slice(1), Err(DecodeError::EndOfStream));
        assert!(reader.read_slice(0).unwrap().is_empty());
    }

    #[test]
    fn failed_read_does_not_advance() {
        let data = [1u8, 2];
        let mut reader = SliceReader::new(&data);
        assert_matches!(reader.read_slice(3), Err(DecodeError::EndOfStream));
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_slice(2).unwrap(), &[1, 2]);
    }

    #[test]
    fn check_eor_does_not_consume() {
        let data = [1u8, 2];
        let mut reader = SliceReader::new(&data);
        reader.check_eor(2).unwrap();
        assert_matches!(reader.check_eor(3), Err(DecodeError::EndOfStream));
        assert_eq!(reader.position(), 0);
    }
}
