//! Compact binary serialization over sequential byte channels.
//!
//! Two cursor traits sit directly on top of a byte channel: [ByteReader] decodes primitive and
//! composite values from a byte source, and [ByteWriter] encodes them into a byte sink. Both
//! advance strictly forward; neither buffers nor looks ahead. The required methods of each trait
//! are the channel contract (deliver or persist exactly the requested bytes, or fail), and every
//! decode/encode operation is provided on top of them.
//!
//! The wire grammar is not self-describing: apart from the explicit length prefixes used by
//! strings, byte vectors, arrays, and objects, no value carries a type tag. Callers must read
//! values in exactly the order and with exactly the types they were written.
//!
//! The [Serializable]/[Deserializable] trait pair lets user-defined types plug into the array
//! and object framing without the codec knowing their shape.

#![no_std]

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
mod adapters;
mod byte_reader;
mod byte_writer;
mod errors;
mod proptest_tests;
mod slice_reader;
mod traits;
mod varint;

// RE-EXPORTS
// ================================================================================================

#[cfg(feature = "std")]
pub use adapters::{ReadAdapter, WriteAdapter};
pub use byte_reader::ByteReader;
pub use byte_writer::ByteWriter;
pub use errors::{DecodeError, EncodeError};
pub use slice_reader::SliceReader;
pub use traits::{Deserializable, Serializable};
pub use varint::{
    var_u32_len, var_u64_len, zigzag_decode_i32, zigzag_decode_i64, zigzag_encode_i32,
    zigzag_encode_i64,
};
