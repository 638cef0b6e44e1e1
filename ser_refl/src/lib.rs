// Derived impls refer to `::ser_refl`, including the ones used inside this crate
extern crate self as ser_refl;

#[cfg(feature = "derive")]
pub use ser_refl_derive::Reflect;

mod reflect;
pub use reflect::{FieldVisitor, FieldVisitorMut, ForEachField, ForEachFieldMut, Reflect};

mod category;
pub use category::{Category, TypeFlags};

mod ser;
pub use ser::{Serialize, Serializer};

mod de;
pub use de::{Deserialize, Deserializer};

pub mod scalar;
pub use scalar::Scalar;

pub mod input;
pub mod output;
pub use input::InputCursor;
pub use output::{CountingOutput, Output};

pub mod binary;
pub use binary::{serialized_size_of, BinaryDeserializer, BinarySerializer};

pub mod text;
pub use text::{
	DataLanguageParams, Diagnostic, DiagnosticLog, TextDeserializer, TextSerializer,
	TextSerializerParams,
};

mod impls;

/// Serialize a value to the binary wire format.
///
/// Output buffer is pre-sized with [`serialized_size_of`], so it is allocated
/// exactly once.
pub fn serialize_binary<T: Serialize + ?Sized>(value: &T) -> Vec<u8> {
	let capacity = serialized_size_of(value);
	let mut serializer = BinarySerializer::new(Vec::with_capacity(capacity));
	serializer.serialize_value(value);
	serializer.into_output()
}

/// Deserialize a value from the binary wire format.
///
/// The binary format is not self-describing. `T` must be the type which was
/// serialized. Truncated input is a precondition violation and panics.
pub fn deserialize_binary<'de, T>(bytes: &'de [u8]) -> T
where T: Deserialize<'de> + Default {
	let mut value = T::default();
	let mut deserializer = BinaryDeserializer::new(bytes);
	deserializer.deserialize_value(&mut value);
	value
}

/// Serialize a value to text in the notation described by `grammar`,
/// formatted according to `params`.
pub fn to_text<T: Serialize + ?Sized>(
	value: &T,
	grammar: DataLanguageParams,
	params: TextSerializerParams,
) -> String {
	let mut serializer = TextSerializer::new(Vec::new(), grammar, params);
	serializer.serialize_value(value);
	serializer.into_string()
}

/// Deserialize a value from text in the notation described by `grammar`.
///
/// Parsing never aborts. Returns the (possibly partially populated) value
/// along with the log of diagnostics. The value is only trustworthy if the log
/// is empty. Anything other than whitespace and comments after the value is
/// logged too.
pub fn from_text<'de, T>(text: &'de str, grammar: DataLanguageParams) -> (T, DiagnosticLog)
where T: Deserialize<'de> + Default {
	let mut value = T::default();
	let mut deserializer = TextDeserializer::new(text, grammar);
	deserializer.deserialize_value(&mut value);
	deserializer.end();
	(value, deserializer.take_log())
}
