//! Binary engine.
//!
//! # Wire format
//!
//! * Numbers are written little-endian at their natural width, regardless of
//!   host byte order.
//! * `bool` is 1 byte, `0` or `1`. `char` is its `u32` value.
//! * Sequences (arrays, slices, `Vec`s) are a `u32` element count followed by
//!   the elements back-to-back, with no padding. Sequences of numbers are
//!   copied as a single block.
//! * Strings are encoded like a sequence of bytes (count + UTF-8 bytes, no
//!   terminator).
//! * Records and tuples are their fields back-to-back in declaration order,
//!   with no count or type tags.
//!
//! The format is not self-describing. Deserializer must request the same
//! types serializer wrote.
//!
//! # Errors
//!
//! There is no recoverable error path. Reading past end of input is a
//! precondition violation and panics.

mod deserializer;
mod serializer;
pub use deserializer::BinaryDeserializer;
pub use serializer::BinarySerializer;

use crate::{CountingOutput, Serialize, Serializer};

/// Get the exact number of bytes serializing `value` with a
/// [`BinarySerializer`] would produce.
///
/// Serializes into a [`CountingOutput`], so performs no allocation.
pub fn serialized_size_of<T: Serialize + ?Sized>(value: &T) -> usize {
	let mut serializer = BinarySerializer::new(CountingOutput::new());
	serializer.serialize_value(value);
	serializer.position()
}
