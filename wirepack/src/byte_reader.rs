//! Reader-side cursor: the [ByteReader] trait.

use alloc::{string::String, vec::Vec};

use crate::{
    DecodeError, Deserializable,
    varint::{MAX_VAR_U32_BYTES, MAX_VAR_U64_BYTES, zigzag_decode_i32, zigzag_decode_i64},
};

// BYTE READER TRAIT
// ================================================================================================

/// Defines how values are decoded from a sequential byte channel.
///
/// The required methods are the channel contract: deliver exactly the requested number of bytes
/// or fail with [DecodeError::EndOfStream]. All decode operations are provided on top of them.
///
/// Whenever data is read using any of the `read_*` functions, the cursor advances past the
/// consumed bytes. If an error occurs, the cursor is not rolled back to the state prior to the
/// call; the decode pass must be abandoned.
pub trait ByteReader {
    // REQUIRED METHODS
    // --------------------------------------------------------------------------------------------

    /// Returns a single byte read from `self`.
    ///
    /// # Errors
    /// Returns a [DecodeError] if the channel is exhausted.
    fn read_u8(&mut self) -> Result<u8, DecodeError>;

    /// Returns a slice of exactly `len` bytes read from `self`.
    ///
    /// # Errors
    /// Returns a [DecodeError] if fewer than `len` bytes remain in the channel.
    fn read_slice(&mut self, len: usize) -> Result<&[u8], DecodeError>;

    /// Returns a byte array of length `N` read from `self`.
    ///
    /// # Errors
    /// Returns a [DecodeError] if fewer than `N` bytes remain in the channel.
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError>;

    /// Checks whether at least `num_bytes` more bytes can be read from `self`.
    ///
    /// Channels that cannot answer without consuming input (e.g. a socket) may respond
    /// optimistically; the subsequent read still fails if the bytes never arrive.
    fn check_eor(&mut self, num_bytes: usize) -> Result<(), DecodeError>;

    /// Returns true if there are more bytes left to be read from `self`.
    fn has_more_bytes(&mut self) -> bool;

    // FIXED-WIDTH PRIMITIVES
    // --------------------------------------------------------------------------------------------

    /// Returns a bool value read from `self` consuming 1 byte from the channel.
    ///
    /// # Errors
    /// Returns a [DecodeError] if the byte is neither 0 nor 1.
    fn read_bool(&mut self) -> Result<bool, DecodeError> {
        let byte = self.read_u8()?;
        match byte {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(DecodeError::InvalidValue(format!("{byte} is not a boolean value"))),
        }
    }

    /// Returns a u16 value read from `self` in little-endian byte order.
    fn read_u16(&mut self) -> Result<u16, DecodeError> {
        let bytes = self.read_array::<2>()?;
        Ok(u16::from_le_bytes(bytes))
    }

    /// Returns a u32 value read from `self` in little-endian byte order.
    fn read_u32(&mut self) -> Result<u32, DecodeError> {
        let bytes = self.read_array::<4>()?;
        Ok(u32::from_le_bytes(bytes))
    }

    /// Returns a u64 value read from `self` in little-endian byte order.
    fn read_u64(&mut self) -> Result<u64, DecodeError> {
        let bytes = self.read_array::<8>()?;
        Ok(u64::from_le_bytes(bytes))
    }

    /// Returns an i8 value read from `self`.
    fn read_i8(&mut self) -> Result<i8, DecodeError> {
        Ok(self.read_u8()? as i8)
    }

    /// Returns an i16 value read from `self` in little-endian two's-complement form.
    fn read_i16(&mut self) -> Result<i16, DecodeError> {
        let bytes = self.read_array::<2>()?;
        Ok(i16::from_le_bytes(bytes))
    }

    /// Returns an i32 value read from `self` in little-endian two's-complement form.
    fn read_i32(&mut self) -> Result<i32, DecodeError> {
        let bytes = self.read_array::<4>()?;
        Ok(i32::from_le_bytes(bytes))
    }

    /// Returns an i64 value read from `self` in little-endian two's-complement form.
    fn read_i64(&mut self) -> Result<i64, DecodeError> {
        let bytes = self.read_array::<8>()?;
        Ok(i64::from_le_bytes(bytes))
    }

    // VARIABLE-LENGTH INTEGERS
    // --------------------------------------------------------------------------------------------

    /// Returns a u32 value read from `self` in base-128 varint form.
    ///
    /// Decoding accumulates 7-bit groups, least-significant first, until a byte with the
    /// continuation bit clear is read. Non-minimal encodings are accepted as long as the value
    /// fits 32 bits.
    ///
    /// # Errors
    /// Returns a [DecodeError] if the channel is exhausted before the varint terminates, or if
    /// the encoding extends past 5 bytes or carries bits beyond the 32-bit range.
    fn read_var_u32(&mut self) -> Result<u32, DecodeError> {
        let mut value = 0u32;
        for shift in (0..MAX_VAR_U32_BYTES as u32 * 7).step_by(7) {
            let byte = self.read_u8()?;
            let group = u32::from(byte & 0x7f);
            // the fifth group has room for 4 bits only
            if shift == 28 && group > 0x0f {
                return Err(DecodeError::VarintOverflow { width: 32 });
            }
            value |= group << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(DecodeError::VarintOverflow { width: 32 })
    }

    /// Returns a u64 value read from `self` in base-128 varint form.
    ///
    /// # Errors
    /// Returns a [DecodeError] if the channel is exhausted before the varint terminates, or if
    /// the encoding extends past 10 bytes or carries bits beyond the 64-bit range.
    fn read_var_u64(&mut self) -> Result<u64, DecodeError> {
        let mut value = 0u64;
        for shift in (0..MAX_VAR_U64_BYTES as u32 * 7).step_by(7) {
            let byte = self.read_u8()?;
            let group = u64::from(byte & 0x7f);
            // the tenth group has room for a single bit only
            if shift == 63 && group > 0x01 {
                return Err(DecodeError::VarintOverflow { width: 64 });
            }
            value |= group << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(DecodeError::VarintOverflow { width: 64 })
    }

    /// Returns an i32 value read from `self` in zigzag varint form.
    fn read_var_i32(&mut self) -> Result<i32, DecodeError> {
        Ok(zigzag_decode_i32(self.read_var_u32()?))
    }

    /// Returns an i64 value read from `self` in zigzag varint form.
    fn read_var_i64(&mut self) -> Result<i64, DecodeError> {
        Ok(zigzag_decode_i64(self.read_var_u64()?))
    }

    // FLOATING POINT
    // --------------------------------------------------------------------------------------------

    /// Returns an f32 value read from `self` as a little-endian IEEE-754 bit pattern.
    fn read_f32(&mut self) -> Result<f32, DecodeError> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Returns an f64 value read from `self` as a little-endian IEEE-754 bit pattern.
    fn read_f64(&mut self) -> Result<f64, DecodeError> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    // STRINGS AND BYTES
    // --------------------------------------------------------------------------------------------

    /// Returns a byte vector of the specified length read from `self`, without a length prefix.
    fn read_vec(&mut self, len: usize) -> Result<Vec<u8>, DecodeError> {
        let data = self.read_slice(len)?;
        Ok(data.to_vec())
    }

    /// Returns a length-prefixed byte vector read from `self`.
    ///
    /// The declared length is trusted: if the channel holds fewer bytes than the prefix claims,
    /// the read fails with [DecodeError::EndOfStream].
    fn read_prefixed_bytes(&mut self) -> Result<Vec<u8>, DecodeError> {
        let len = self.read_var_u32()? as usize;
        self.read_vec(len)
    }

    /// Returns a length-prefixed UTF-8 string read from `self`.
    ///
    /// # Errors
    /// Returns a [DecodeError] if the payload is shorter than its prefix claims or is not
    /// valid UTF-8.
    fn read_string(&mut self) -> Result<String, DecodeError> {
        let data = self.read_prefixed_bytes()?;
        String::from_utf8(data).map_err(|_| DecodeError::InvalidUtf8)
    }

    // STRUCTURED TRAVERSAL
    // --------------------------------------------------------------------------------------------

    /// Reads a count-prefixed sequence of elements from `self`.
    ///
    /// The element count is decoded as a u32 varint and reported to `on_len` (useful for
    /// pre-allocating a destination container) before any element is read. `f` is then invoked
    /// exactly once per element with ascending indices starting at 0; each invocation must
    /// consume exactly one element's encoding from the position the previous one left off.
    ///
    /// # Errors
    /// Returns the first error produced by the count decode or by `f`; remaining elements are
    /// not visited.
    fn read_sequence<L, F>(&mut self, on_len: L, mut f: F) -> Result<(), DecodeError>
    where
        Self: Sized,
        L: FnOnce(usize),
        F: FnMut(&mut Self, usize) -> Result<(), DecodeError>,
    {
        let count = self.read_var_u32()? as usize;
        on_len(count);
        for i in 0..count {
            f(self, i)?;
        }
        Ok(())
    }

    /// Reads a count-prefixed sequence of `(string key, value)` pairs from `self`.
    ///
    /// For each pair, the key is decoded as a length-prefixed string and handed to `f`, which
    /// must consume exactly one value's encoding before returning. Keys are delivered in wire
    /// order; they are not required to be unique or sorted, and any merge policy for duplicate
    /// keys belongs to the caller.
    fn read_object<F>(&mut self, mut f: F) -> Result<(), DecodeError>
    where
        Self: Sized,
        F: FnMut(&mut Self, &str) -> Result<(), DecodeError>,
    {
        let count = self.read_var_u32()? as usize;
        for _ in 0..count {
            let key = self.read_string()?;
            f(self, &key)?;
        }
        Ok(())
    }

    // CAPABILITY PROTOCOL
    // --------------------------------------------------------------------------------------------

    /// Reads a deserializable value from `self`.
    fn read<D>(&mut self) -> Result<D, DecodeError>
    where
        Self: Sized,
        D: Deserializable,
    {
        D::read_from(self)
    }

    /// Reads `num_elements` deserializable values from `self` into a vector.
    fn read_many<D>(&mut self, num_elements: usize) -> Result<Vec<D>, DecodeError>
    where
        Self: Sized,
        D: Deserializable,
    {
        let mut result = Vec::with_capacity(num_elements);
        for _ in 0..num_elements {
            result.push(D::read_from(self)?);
        }
        Ok(result)
    }
}

// TESTS
// ================================================================================================
