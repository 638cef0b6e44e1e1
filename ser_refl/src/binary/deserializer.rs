use std::{mem, str, str::FromStr};

use crate::{
	Deserialize, Deserializer, FieldVisitorMut, ForEachFieldMut, InputCursor, Scalar,
};

/// Deserializer for the binary wire format.
///
/// Reads exactly the bytes a [`BinarySerializer`](crate::BinarySerializer)
/// writes for the same type. There is no recoverable error path: input which
/// is truncated, or was written for a different type, is a precondition
/// violation. Truncation panics.
pub struct BinaryDeserializer<'de> {
	input: InputCursor<'de>,
}

impl<'de> BinaryDeserializer<'de> {
	/// Create new deserializer reading from `bytes`.
	#[inline]
	pub fn new(bytes: &'de [u8]) -> Self {
		Self {
			input: InputCursor::new(bytes),
		}
	}

	/// Get current position in input.
	#[inline]
	pub fn position(&self) -> usize {
		self.input.pos()
	}

	/// Get number of bytes not yet read.
	#[inline]
	pub fn remaining(&self) -> usize {
		self.input.remaining()
	}

	/// Move back to start of input.
	#[inline]
	pub fn reset(&mut self) {
		self.input.reset();
	}

	#[inline]
	fn read_len(&mut self) -> usize {
		u32::read_le(self.input.read(mem::size_of::<u32>())) as usize
	}

	/// Read a length-prefixed string, borrowing from input.
	fn read_str(&mut self) -> &'de str {
		let len = self.read_len();
		let bytes = self.input.read(len);
		match str::from_utf8(bytes) {
			Ok(s) => s,
			Err(err) => {
				debug_assert!(false, "Invalid UTF-8 in string: {}", err);
				log::error!("invalid UTF-8 in string at byte {}: {}", self.input.pos() - len, err);
				""
			}
		}
	}
}

impl<'de> Deserializer<'de> for BinaryDeserializer<'de> {
	#[inline]
	fn deserialize_scalar<T: Scalar>(&mut self, value: &mut T) {
		*value = T::read_le(self.input.read(T::WIDTH));
	}

	fn deserialize_scalar_vec<T: Scalar>(&mut self, values: &mut Vec<T>) {
		let len = self.read_len();
		let bytes = self.input.read(len * T::WIDTH);
		values.clear();
		values.resize(len, T::default());
		T::fill_from_le_bytes(values, bytes);
	}

	fn deserialize_scalar_array<T: Scalar>(&mut self, values: &mut [T]) {
		let len = self.read_len();
		debug_assert_eq!(len, values.len(), "Array length mismatch");
		let bytes = self.input.read(len * T::WIDTH);
		let filled = len.min(values.len());
		T::fill_from_le_bytes(&mut values[..filled], bytes);
	}

	#[inline]
	fn deserialize_bool(&mut self, value: &mut bool) {
		*value = self.input.read(1)[0] != 0;
	}

	fn deserialize_char(&mut self, value: &mut char) {
		let code = u32::read_le(self.input.read(mem::size_of::<u32>()));
		match char::from_u32(code) {
			Some(c) => *value = c,
			None => {
				debug_assert!(false, "Invalid char {:#x}", code);
				log::error!("invalid char {:#x} at byte {}", code, self.input.pos() - 4);
			}
		}
	}

	#[inline]
	fn deserialize_string(&mut self, value: &mut String) {
		let s = self.read_str();
		value.clear();
		value.push_str(s);
	}

	#[inline]
	fn deserialize_str(&mut self) -> Option<&'de str> {
		Some(self.read_str())
	}

	fn deserialize_vec<T: Deserialize<'de> + Default>(&mut self, values: &mut Vec<T>) {
		let len = self.read_len();
		values.clear();
		// Don't trust `len` for allocation. Input may be corrupt.
		values.reserve(len.min(self.input.remaining()));
		for _ in 0..len {
			let mut value = T::default();
			value.deserialize(self);
			values.push(value);
		}
	}

	fn deserialize_array<T: Deserialize<'de>>(&mut self, values: &mut [T]) {
		let len = self.read_len();
		debug_assert_eq!(len, values.len(), "Array length mismatch");
		for value in values.iter_mut().take(len) {
			value.deserialize(self);
		}
	}

	#[inline]
	fn deserialize_record<R: ForEachFieldMut<'de>>(&mut self, record: &mut R) {
		record.for_each_field_mut(&mut FieldReader { deserializer: self });
	}

	#[inline]
	fn deserialize_tuple<R: ForEachFieldMut<'de>>(&mut self, tuple: &mut R) {
		tuple.for_each_field_mut(&mut FieldReader { deserializer: self });
	}

	fn deserialize_from_str<T: FromStr>(&mut self, value: &mut T) {
		let text = self.read_str();
		match text.parse() {
			Ok(parsed) => *value = parsed,
			Err(_) => {
				debug_assert!(false, "Malformed custom value `{}`", text);
				log::error!("malformed custom value `{}` at byte {}", text, self.input.pos());
			}
		}
	}
}

struct FieldReader<'d, 'de> {
	deserializer: &'d mut BinaryDeserializer<'de>,
}

impl<'d, 'de> FieldVisitorMut<'de> for FieldReader<'d, 'de> {
	#[inline]
	fn visit_field<T: Deserialize<'de>>(&mut self, _name: &'static str, value: &mut T) {
		value.deserialize(self.deserializer);
	}
}
