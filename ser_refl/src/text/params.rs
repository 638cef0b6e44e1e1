use crate::TypeFlags;

/// Formatting policy for [`TextSerializer`](crate::TextSerializer).
///
/// Has no effect on what the deserializer accepts, except that field names are
/// only printed where this (or the grammar) asks for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextSerializerParams {
	/// Print type name before each struct instance, e.g. `Point{1, 2}`
	pub struct_type_names: bool,
	/// Print field names for fields whose value is of these categories.
	/// Grammars with `require_field_assignments` print names regardless.
	pub field_assignments: TypeFlags,
	/// Print assignment operators in their spaced form
	pub use_assignment_spaces: bool,
	/// Put each element on its own line, for collections of these categories.
	/// Keyed by the enclosing collection: struct fields by `STRUCT`, tuple
	/// elements by `TUPLE`, array elements by `ARRAY`, or `STRUCT_ARRAY` if
	/// the elements are records.
	pub value_per_line: TypeFlags,
	/// Indentation token, printed once per nesting level
	pub tab: &'static str,
	pub line_ending: &'static str,
}

impl TextSerializerParams {
	pub const VERBOSE: Self = Self {
		struct_type_names: false,
		field_assignments: TypeFlags::all(),
		use_assignment_spaces: true,
		value_per_line: TypeFlags::STRUCT.union(TypeFlags::TUPLE).union(TypeFlags::STRUCT_ARRAY),
		tab: "\t",
		line_ending: "\n",
	};

	pub const VERBOSE_NO_SPACES: Self = Self {
		use_assignment_spaces: false,
		..Self::VERBOSE
	};

	pub const COMPACT: Self = Self {
		struct_type_names: false,
		field_assignments: TypeFlags::empty(),
		use_assignment_spaces: true,
		value_per_line: TypeFlags::STRUCT_ARRAY,
		tab: "\t",
		line_ending: "\n",
	};

	pub const COMPACT_SINGLE_LINE: Self = Self {
		struct_type_names: false,
		field_assignments: TypeFlags::empty(),
		use_assignment_spaces: true,
		value_per_line: TypeFlags::empty(),
		tab: "",
		line_ending: "",
	};

	/// All presets, with names.
	pub const PRESETS: [(&'static str, Self); 4] = [
		("VERBOSE", Self::VERBOSE),
		("VERBOSE_NO_SPACES", Self::VERBOSE_NO_SPACES),
		("COMPACT", Self::COMPACT),
		("COMPACT_SINGLE_LINE", Self::COMPACT_SINGLE_LINE),
	];
}

impl Default for TextSerializerParams {
	fn default() -> Self {
		Self::VERBOSE
	}
}
