//! The capability protocol: [Serializable] and [Deserializable].

use alloc::{string::String, vec::Vec};

use crate::{
    ByteReader, ByteWriter, DecodeError, EncodeError, SliceReader,
    varint::var_u64_len,
};

// SERIALIZABLE TRAIT
// ================================================================================================

/// Defines how to serialize `Self` into bytes.
///
/// Together with [Deserializable], this is the codec's only form of polymorphism: a type
/// implementing both can be carried by the generic array and object framing without the codec
/// knowing its shape. The two implementations must be mutual inverses for round trips to hold.
pub trait Serializable {
    /// Serializes `self` and writes the resulting bytes into the `target`.
    fn write_into<W: ByteWriter + ?Sized>(&self, target: &mut W) -> Result<(), EncodeError>;

    /// Serializes `self` into a vector of bytes.
    fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut target = Vec::with_capacity(self.get_size_hint());
        self.write_into(&mut target)?;
        Ok(target)
    }

    /// Returns an estimate of how many bytes are needed to represent self.
    ///
    /// The default implementation returns zero.
    fn get_size_hint(&self) -> usize {
        0
    }
}

// DESERIALIZABLE TRAIT
// ================================================================================================

/// Defines how to deserialize `Self` from bytes.
pub trait Deserializable: Sized {
    /// Reads a sequence of bytes from the provided `source`, attempts to deserialize these
    /// bytes into `Self`, and returns the result.
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DecodeError>;

    /// Attempts to deserialize the provided `bytes` into `Self`.
    ///
    /// Note: if `bytes` contains more data than needed to deserialize `self`, no error is
    /// returned.
    fn read_from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = SliceReader::new(bytes);
        Self::read_from(&mut reader)
    }
}

// IMPLEMENTATIONS
// ================================================================================================

impl<T: Serializable> Serializable for &T {
    fn write_into<W: ByteWriter + ?Sized>(&self, target: &mut W) -> Result<(), EncodeError> {
        (*self).write_into(target)
    }

    fn get_size_hint(&self) -> usize {
        (*self).get_size_hint()
    }
}

impl Serializable for () {
    fn write_into<W: ByteWriter + ?Sized>(&self, _target: &mut W) -> Result<(), EncodeError> {
        Ok(())
    }
}

impl Deserializable for () {
    fn read_from<R: ByteReader>(_source: &mut R) -> Result<Self, DecodeError> {
        Ok(())
    }
}

impl Serializable for bool {
    fn write_into<W: ByteWriter + ?Sized>(&self, target: &mut W) -> Result<(), EncodeError> {
        target.write_bool(*self)
    }

    fn get_size_hint(&self) -> usize {
        1
    }
}

impl Deserializable for bool {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DecodeError> {
        source.read_bool()
    }
}

macro_rules! impl_fixed_width {
    ($($ty:ty => ($write:ident, $read:ident)),* $(,)?) => {
        $(
            impl Serializable for $ty {
                fn write_into<W: ByteWriter + ?Sized>(
                    &self,
                    target: &mut W,
                ) -> Result<(), EncodeError> {
                    target.$write(*self)
                }

                fn get_size_hint(&self) -> usize {
                    core::mem::size_of::<$ty>()
                }
            }

            impl Deserializable for $ty {
                fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DecodeError> {
                    source.$read()
                }
            }
        )*
    };
}

impl_fixed_width! {
    u8 => (write_u8, read_u8),
    u16 => (write_u16, read_u16),
    u32 => (write_u32, read_u32),
    u64 => (write_u64, read_u64),
    i8 => (write_i8, read_i8),
    i16 => (write_i16, read_i16),
    i32 => (write_i32, read_i32),
    i64 => (write_i64, read_i64),
    f32 => (write_f32, read_f32),
    f64 => (write_f64, read_f64),
}

impl Serializable for String {
    fn write_into<W: ByteWriter + ?Sized>(&self, target: &mut W) -> Result<(), EncodeError> {
        target.write_string(self)
    }

    fn get_size_hint(&self) -> usize {
        var_u64_len(self.len() as u64) + self.len()
    }
}

impl Deserializable for String {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DecodeError> {
        source.read_string()
    }
}

impl<T: Serializable> Serializable for Option<T> {
    fn write_into<W: ByteWriter + ?Sized>(&self, target: &mut W) -> Result<(), EncodeError> {
        match self {
            Some(value) => {
                target.write_bool(true)?;
                value.write_into(target)
            },
            None => target.write_bool(false),
        }
    }

    fn get_size_hint(&self) -> usize {
        1 + self.as_ref().map_or(0, |value| value.get_size_hint())
    }
}

impl<T: Deserializable> Deserializable for Option<T> {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DecodeError> {
        if source.read_bool()? {
            Ok(Some(T::read_from(source)?))
        } else {
            Ok(None)
        }
    }
}

impl<T: Serializable> Serializable for Vec<T> {
    fn write_into<W: ByteWriter + ?Sized>(&self, target: &mut W) -> Result<(), EncodeError> {
        target.write_many(self)
    }

    fn get_size_hint(&self) -> usize {
        var_u64_len(self.len() as u64)
            + self.iter().map(Serializable::get_size_hint).sum::<usize>()
    }
}

impl<T: Deserializable> Deserializable for Vec<T> {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DecodeError> {
        let count = source.read_var_u32()? as usize;
        source.read_many(count)
    }
}

// fixed-size arrays carry no length prefix; the length is known from the type
impl<T: Serializable, const N: usize> Serializable for [T; N] {
    fn write_into<W: ByteWriter + ?Sized>(&self, target: &mut W) -> Result<(), EncodeError> {
        for item in self {
            item.write_into(target)?;
        }
        Ok(())
    }

    fn get_size_hint(&self) -> usize {
        self.iter().map(Serializable::get_size_hint).sum()
    }
}

impl<T: Deserializable, const N: usize> Deserializable for [T; N] {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DecodeError> {
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::read_from(source)?);
        }
        match items.try_into() {
            Ok(array) => Ok(array),
            Err(_) => unreachable!("vector length is N by construction"),
        }
    }
}

// TESTS
// ================================================================================================
