use crate::{Deserialize, Serialize};

/// Reflection descriptor for a record type.
///
/// Usually implemented with `#[derive(Reflect)]`, which also implements
/// [`ForEachField`], [`ForEachFieldMut`], [`Serialize`] and [`Deserialize`].
///
/// Serializers never inspect a record's layout. They only see the ordered
/// sequence of `(name, value)` pairs the visitation methods produce.
pub trait Reflect {
	/// Name of the type, as printed before a struct instance when
	/// `TextSerializerParams::struct_type_names` is enabled.
	const TYPE_NAME: &'static str;

	/// Names of fields, in declaration order.
	///
	/// Length must equal the number of `visit_field` calls made by
	/// [`ForEachField::for_each_field`] and [`ForEachFieldMut::for_each_field_mut`],
	/// and names must be passed to the visitor in this order.
	const FIELD_NAMES: &'static [&'static str];
}

/// Visit all fields of a record for serialization.
pub trait ForEachField: Reflect {
	fn for_each_field<V: FieldVisitor>(&self, visitor: &mut V);
}

/// Visit all fields of a record for deserialization.
pub trait ForEachFieldMut<'de>: Reflect {
	fn for_each_field_mut<V: FieldVisitorMut<'de>>(&mut self, visitor: &mut V);
}

/// Visitor passed to [`ForEachField::for_each_field`].
pub trait FieldVisitor {
	fn visit_field<T: Serialize + ?Sized>(&mut self, name: &'static str, value: &T);
}

/// Visitor passed to [`ForEachFieldMut::for_each_field_mut`].
pub trait FieldVisitorMut<'de> {
	fn visit_field<T: Deserialize<'de>>(&mut self, name: &'static str, value: &mut T);
}
