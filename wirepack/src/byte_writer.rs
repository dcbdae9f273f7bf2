//! Writer-side cursor: the [ByteWriter] trait.

use alloc::vec::Vec;

use crate::{
    EncodeError, Serializable,
    varint::{zigzag_encode_i32, zigzag_encode_i64},
};

// BYTE WRITER TRAIT
// ================================================================================================

/// Defines how values are encoded into a sequential byte channel.
///
/// The single required method is the channel contract: persist all of the provided bytes or
/// fail. All encode operations are provided on top of it. The cursor advances strictly forward;
/// after a failure the channel contents are unspecified and the encode pass must be abandoned.
pub trait ByteWriter {
    // REQUIRED METHODS
    // --------------------------------------------------------------------------------------------

    /// Writes all of `bytes` into `self`, without any framing.
    ///
    /// # Errors
    /// Returns an [EncodeError] if the channel cannot persist the bytes.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), EncodeError>;

    // FIXED-WIDTH PRIMITIVES
    // --------------------------------------------------------------------------------------------

    /// Writes a single byte into `self`.
    fn write_u8(&mut self, value: u8) -> Result<(), EncodeError> {
        self.write_bytes(&[value])
    }

    /// Writes a bool value into `self` as a single byte, 0 or 1.
    fn write_bool(&mut self, value: bool) -> Result<(), EncodeError> {
        self.write_u8(value as u8)
    }

    /// Writes a u16 value into `self` in little-endian byte order.
    fn write_u16(&mut self, value: u16) -> Result<(), EncodeError> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a u32 value into `self` in little-endian byte order.
    fn write_u32(&mut self, value: u32) -> Result<(), EncodeError> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a u64 value into `self` in little-endian byte order.
    fn write_u64(&mut self, value: u64) -> Result<(), EncodeError> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes an i8 value into `self`.
    fn write_i8(&mut self, value: i8) -> Result<(), EncodeError> {
        self.write_u8(value as u8)
    }

    /// Writes an i16 value into `self` in little-endian two's-complement form.
    fn write_i16(&mut self, value: i16) -> Result<(), EncodeError> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes an i32 value into `self` in little-endian two's-complement form.
    fn write_i32(&mut self, value: i32) -> Result<(), EncodeError> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes an i64 value into `self` in little-endian two's-complement form.
    fn write_i64(&mut self, value: i64) -> Result<(), EncodeError> {
        self.write_bytes(&value.to_le_bytes())
    }

    // VARIABLE-LENGTH INTEGERS
    // --------------------------------------------------------------------------------------------

    /// Writes a u32 value into `self` in base-128 varint form.
    ///
    /// The encoding is canonical: it uses the minimum number of bytes, and zero encodes as a
    /// single zero byte.
    fn write_var_u32(&mut self, value: u32) -> Result<(), EncodeError> {
        let mut value = value;
        loop {
            let mut byte = (value & 0x7f) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            self.write_u8(byte)?;
            if value == 0 {
                return Ok(());
            }
        }
    }

    /// Writes a u64 value into `self` in base-128 varint form.
    fn write_var_u64(&mut self, value: u64) -> Result<(), EncodeError> {
        let mut value = value;
        loop {
            let mut byte = (value & 0x7f) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            self.write_u8(byte)?;
            if value == 0 {
                return Ok(());
            }
        }
    }

    /// Writes an i32 value into `self` in zigzag varint form, so that small magnitudes of
    /// either sign take the fewest bytes.
    fn write_var_i32(&mut self, value: i32) -> Result<(), EncodeError> {
        self.write_var_u32(zigzag_encode_i32(value))
    }

    /// Writes an i64 value into `self` in zigzag varint form.
    fn write_var_i64(&mut self, value: i64) -> Result<(), EncodeError> {
        self.write_var_u64(zigzag_encode_i64(value))
    }

    // FLOATING POINT
    // --------------------------------------------------------------------------------------------

    /// Writes an f32 value into `self` as a little-endian IEEE-754 bit pattern.
    fn write_f32(&mut self, value: f32) -> Result<(), EncodeError> {
        self.write_u32(value.to_bits())
    }

    /// Writes an f64 value into `self` as a little-endian IEEE-754 bit pattern.
    fn write_f64(&mut self, value: f64) -> Result<(), EncodeError> {
        self.write_u64(value.to_bits())
    }

    // STRINGS AND BYTES
    // --------------------------------------------------------------------------------------------

    /// Writes a length-prefixed byte slice into `self`.
    ///
    /// # Errors
    /// Returns [EncodeError::LengthOverflow] if the byte length does not fit the u32 prefix
    /// domain; in that case nothing is written.
    fn write_prefixed_bytes(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        let len = length_prefix(bytes.len())?;
        self.write_var_u32(len)?;
        self.write_bytes(bytes)
    }

    /// Writes a length-prefixed UTF-8 string into `self`.
    fn write_string(&mut self, value: &str) -> Result<(), EncodeError> {
        self.write_prefixed_bytes(value.as_bytes())
    }

    // STRUCTURED TRAVERSAL
    // --------------------------------------------------------------------------------------------

    /// Writes a count-prefixed sequence of elements into `self`.
    ///
    /// The count is written as a u32 varint, then `f` is invoked exactly once per index in
    /// ascending order; each invocation must emit exactly one element's encoding.
    ///
    /// # Errors
    /// Returns [EncodeError::LengthOverflow] if the count does not fit the u32 prefix domain
    /// (nothing is written), or the first error produced by `f`.
    fn write_sequence<F>(&mut self, count: usize, mut f: F) -> Result<(), EncodeError>
    where
        Self: Sized,
        F: FnMut(&mut Self, usize) -> Result<(), EncodeError>,
    {
        let count32 = length_prefix(count)?;
        self.write_var_u32(count32)?;
        for i in 0..count {
            f(self, i)?;
        }
        Ok(())
    }

    /// Writes a count-prefixed sequence of `(string key, value)` pairs into `self`.
    ///
    /// Pairs are written in the order given; keys are not deduplicated or sorted.
    fn write_object<K, V, F>(&mut self, entries: &[(K, V)], mut f: F) -> Result<(), EncodeError>
    where
        Self: Sized,
        K: AsRef<str>,
        F: FnMut(&mut Self, &V) -> Result<(), EncodeError>,
    {
        let count = length_prefix(entries.len())?;
        self.write_var_u32(count)?;
        for (key, value) in entries {
            self.write_string(key.as_ref())?;
            f(self, value)?;
        }
        Ok(())
    }

    // CAPABILITY PROTOCOL
    // --------------------------------------------------------------------------------------------

    /// Writes a serializable value into `self`.
    fn write<S: Serializable>(&mut self, value: S) -> Result<(), EncodeError> {
        value.write_into(self)
    }

    /// Writes a count-prefixed sequence of serializable values into `self`, using the same
    /// framing as [Self::write_sequence].
    fn write_many<S: Serializable>(&mut self, elements: &[S]) -> Result<(), EncodeError> {
        let count = length_prefix(elements.len())?;
        self.write_var_u32(count)?;
        for element in elements {
            element.write_into(self)?;
        }
        Ok(())
    }
}

// HELPERS
// ================================================================================================

/// Converts a byte length or element count into the u32 prefix domain, reserving the maximum
/// u32 value as a sentinel.
fn length_prefix(len: usize) -> Result<u32, EncodeError> {
    if len as u64 >= u32::MAX as u64 {
        return Err(EncodeError::LengthOverflow { len });
    }
    Ok(len as u32)
}

// BYTE WRITER IMPLEMENTATIONS
// ================================================================================================

impl ByteWriter for Vec<u8> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

// TESTS
// ================================================================================================
