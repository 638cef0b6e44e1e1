use std::str::FromStr;

use crate::{ForEachFieldMut, Scalar};

/// Trait for types which can be deserialized.
///
/// Deserialization happens in place. If input is malformed, a text
/// deserializer leaves the value (or the parts of it which failed to parse)
/// as it was, so deserializing into a `Default` value leaves failed fields
/// default-initialized.
///
/// `'de` is the lifetime of the input. Types which borrow from input
/// (e.g. `&str`) can only be deserialized for as long as input lives.
pub trait Deserialize<'de> {
	/// Deserialize into this value.
	fn deserialize<D: Deserializer<'de>>(&mut self, deserializer: &mut D);

	/// Deserialize a sequence into a `Vec` of this type, replacing its contents.
	///
	/// Scalars override this to take the bulk copy path.
	#[inline]
	fn deserialize_vec<D: Deserializer<'de>>(vec: &mut Vec<Self>, deserializer: &mut D)
	where Self: Sized + Default {
		deserializer.deserialize_vec(vec);
	}

	/// Deserialize a sequence into a fixed-size slice of this type.
	///
	/// Scalars override this to take the bulk copy path.
	#[inline]
	fn deserialize_slice<D: Deserializer<'de>>(slice: &mut [Self], deserializer: &mut D)
	where Self: Sized {
		deserializer.deserialize_array(slice);
	}
}

/// Deserializers implement this trait.
///
/// Mirror of [`Serializer`](crate::Serializer). Each method must read exactly
/// what the matching `Serializer` method writes.
pub trait Deserializer<'de>: Sized {
	/// Deserialize into a value.
	///
	/// The entry point for deserializing, which user will call.
	#[inline]
	fn deserialize_value<T: Deserialize<'de>>(&mut self, value: &mut T) {
		value.deserialize(self);
	}

	fn deserialize_scalar<T: Scalar>(&mut self, value: &mut T);

	/// Deserialize a sequence of fixed-width numbers into a `Vec`.
	#[inline]
	fn deserialize_scalar_vec<T: Scalar>(&mut self, values: &mut Vec<T>) {
		self.deserialize_vec(values);
	}

	/// Deserialize a sequence of fixed-width numbers into a fixed-size slice.
	#[inline]
	fn deserialize_scalar_array<T: Scalar>(&mut self, values: &mut [T]) {
		self.deserialize_array(values);
	}

	fn deserialize_bool(&mut self, value: &mut bool);

	fn deserialize_char(&mut self, value: &mut char);

	fn deserialize_string(&mut self, value: &mut String);

	/// Deserialize a string slice borrowed directly from input.
	///
	/// Returns `None` if no string could be read.
	fn deserialize_str(&mut self) -> Option<&'de str>;

	/// Deserialize a sequence into a `Vec`, replacing its contents.
	fn deserialize_vec<T: Deserialize<'de> + Default>(&mut self, values: &mut Vec<T>);

	/// Deserialize a sequence into a fixed-size slice.
	fn deserialize_array<T: Deserialize<'de>>(&mut self, values: &mut [T]);

	/// Deserialize a record by visiting its fields.
	fn deserialize_record<R: ForEachFieldMut<'de>>(&mut self, record: &mut R);

	/// Deserialize a tuple by visiting its elements.
	fn deserialize_tuple<R: ForEachFieldMut<'de>>(&mut self, tuple: &mut R);

	/// Deserialize a value of a custom type via its `FromStr` implementation.
	fn deserialize_from_str<T: FromStr>(&mut self, value: &mut T);
}
