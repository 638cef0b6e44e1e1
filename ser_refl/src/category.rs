use bitflags::bitflags;

/// Category of a serializable type.
///
/// This is a closed set. A type with no category has no `Serialize` impl,
/// so attempting to serialize it is a compile-time error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
	/// Fixed-width number
	Scalar,
	Bool,
	Char,
	String,
	/// Array or vec of anything other than records
	Sequence,
	/// Array or vec of records
	RecordSequence,
	/// Struct with a reflection descriptor
	Record,
	/// Tuple or tuple struct
	Tuple,
	/// Type printed via `Display` and parsed via `FromStr`
	Custom,
}

impl Category {
	/// Get category of a sequence with elements of category `element`.
	pub const fn sequence_of(element: Category) -> Category {
		match element {
			Category::Record => Category::RecordSequence,
			_ => Category::Sequence,
		}
	}

	/// Get flag for this category, as used in `TextSerializerParams`.
	///
	/// Booleans share the `NUMBER` flag.
	pub const fn flag(self) -> TypeFlags {
		match self {
			Category::Scalar | Category::Bool => TypeFlags::NUMBER,
			Category::Char => TypeFlags::CHAR,
			Category::String => TypeFlags::STRING,
			Category::Sequence => TypeFlags::ARRAY,
			Category::RecordSequence => TypeFlags::STRUCT_ARRAY,
			Category::Record => TypeFlags::STRUCT,
			Category::Tuple => TypeFlags::TUPLE,
			Category::Custom => TypeFlags::CUSTOM,
		}
	}
}

bitflags! {
	/// Set of type categories, used for per-category formatting policy.
	#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
	pub struct TypeFlags: u8 {
		const NUMBER       = 1 << 0;
		const CHAR         = 1 << 1;
		const STRING       = 1 << 2;
		const ARRAY        = 1 << 3;
		const STRUCT       = 1 << 4;
		const TUPLE        = 1 << 5;
		/// Array whose elements are records
		const STRUCT_ARRAY = 1 << 6;
		const CUSTOM       = 1 << 7;
	}
}
