use std::fmt::Display;

use crate::{FieldVisitor, ForEachField, Output, Scalar, Serialize, Serializer};

/// Serializer producing the binary wire format.
///
/// See [module docs](crate::binary) for a description of the format.
///
/// # Example
///
/// ```
/// use ser_refl::{BinarySerializer, Serializer};
///
/// let mut ser = BinarySerializer::new(Vec::new());
/// ser.serialize_value(&vec![1u16, 2]);
/// assert_eq!(ser.into_output(), [2, 0, 0, 0, 1, 0, 2, 0]);
/// ```
pub struct BinarySerializer<O: Output = Vec<u8>> {
	output: O,
	// Only used on big-endian hosts, for byte-swapping bulk copies
	scratch: Vec<u8>,
}

impl<O: Output> BinarySerializer<O> {
	/// Create new serializer writing to `output`.
	#[inline]
	pub fn new(output: O) -> Self {
		Self {
			output,
			scratch: Vec::new(),
		}
	}

	/// Get reference to output.
	#[inline]
	pub fn output(&self) -> &O {
		&self.output
	}

	/// Consume serializer and return output.
	#[inline]
	pub fn into_output(self) -> O {
		self.output
	}

	/// Get number of bytes written so far.
	#[inline]
	pub fn position(&self) -> usize {
		self.output.len()
	}

	/// Clear output, ready to serialize another value.
	#[inline]
	pub fn reset(&mut self) {
		self.output.clear();
	}

	/// Write sequence length as `u32`.
	#[inline]
	fn write_len(&mut self, len: usize) {
		assert!(
			len <= u32::MAX as usize,
			"Sequence of {} elements exceeds maximum length `u32::MAX`",
			len
		);
		(len as u32).write_le(&mut self.output);
	}
}

impl<O: Output> Serializer for BinarySerializer<O> {
	#[inline]
	fn serialize_scalar<T: Scalar>(&mut self, value: T) {
		value.write_le(&mut self.output);
	}

	/// Write count, then all values as a single block.
	#[inline]
	fn serialize_scalar_slice<T: Scalar>(&mut self, values: &[T]) {
		self.write_len(values.len());
		let bytes = T::slice_as_le_bytes(values, &mut self.scratch);
		self.output.write_bytes(bytes);
	}

	#[inline]
	fn serialize_bool(&mut self, value: bool) {
		self.output.write_bytes(&[value as u8]);
	}

	#[inline]
	fn serialize_char(&mut self, value: char) {
		(value as u32).write_le(&mut self.output);
	}

	#[inline]
	fn serialize_str(&mut self, value: &str) {
		self.write_len(value.len());
		self.output.write_bytes(value.as_bytes());
	}

	fn serialize_seq<T: Serialize>(&mut self, values: &[T]) {
		self.write_len(values.len());
		for value in values {
			value.serialize(self);
		}
	}

	/// Fields are written back-to-back with no count prefix.
	#[inline]
	fn serialize_record<R: ForEachField + ?Sized>(&mut self, record: &R) {
		record.for_each_field(&mut FieldWriter { serializer: self });
	}

	#[inline]
	fn serialize_tuple<R: ForEachField + ?Sized>(&mut self, tuple: &R) {
		tuple.for_each_field(&mut FieldWriter { serializer: self });
	}

	/// Custom values are written as their text representation, encoded like a
	/// string.
	fn serialize_display<T: Display + ?Sized>(&mut self, value: &T) {
		let text = value.to_string();
		self.serialize_str(&text);
	}
}

struct FieldWriter<'s, O: Output> {
	serializer: &'s mut BinarySerializer<O>,
}

impl<'s, O: Output> FieldVisitor for FieldWriter<'s, O> {
	#[inline]
	fn visit_field<T: Serialize + ?Sized>(&mut self, _name: &'static str, value: &T) {
		value.serialize(self.serializer);
	}
}
