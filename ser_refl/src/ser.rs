use std::fmt::Display;

use crate::{Category, ForEachField, Scalar};

/// Trait for types which can be serialized.
///
/// Each impl routes the value to exactly one [`Serializer`] method, according
/// to its [`Category`].
pub trait Serialize {
	/// Category of this type.
	const CATEGORY: Category;

	/// Serialize this value.
	fn serialize<S: Serializer>(&self, serializer: &mut S);

	/// Serialize a slice of values of this type as a sequence.
	///
	/// Scalars override this to take the bulk copy path.
	#[inline]
	fn serialize_slice<S: Serializer>(slice: &[Self], serializer: &mut S)
	where Self: Sized {
		serializer.serialize_seq(slice);
	}
}

/// Serializers implement this trait.
///
/// There is one method for each [`Category`].
pub trait Serializer: Sized {
	/// Serialize a value and everything it contains.
	///
	/// The entry point for serializing, which user will call.
	#[inline]
	fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) {
		value.serialize(self);
	}

	/// Serialize a fixed-width number.
	fn serialize_scalar<T: Scalar>(&mut self, value: T);

	/// Serialize a sequence of fixed-width numbers.
	///
	/// Output must be the same as `serialize_seq` would produce, but
	/// serializer may use a faster method to produce it.
	#[inline]
	fn serialize_scalar_slice<T: Scalar>(&mut self, values: &[T]) {
		self.serialize_seq(values);
	}

	fn serialize_bool(&mut self, value: bool);

	fn serialize_char(&mut self, value: char);

	fn serialize_str(&mut self, value: &str);

	/// Serialize a sequence (fixed-size array, slice or `Vec`).
	fn serialize_seq<T: Serialize>(&mut self, values: &[T]);

	/// Serialize a record by visiting its fields.
	fn serialize_record<R: ForEachField + ?Sized>(&mut self, record: &R);

	/// Serialize a tuple by visiting its elements.
	fn serialize_tuple<R: ForEachField + ?Sized>(&mut self, tuple: &R);

	/// Serialize a value of a custom type via its `Display` representation.
	fn serialize_display<T: Display + ?Sized>(&mut self, value: &T);
}
