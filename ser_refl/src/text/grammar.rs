/// Token set describing a text notation.
///
/// Engine hard-codes no tokens. Everything it prints or expects comes from
/// here.
///
/// Empty tokens are never printed and always match when parsing, so e.g. a
/// grammar with an empty `field_separator` puts nothing between fields.
///
/// Assignment operators may include surrounding spaces. The spaced form is
/// printed when [`TextSerializerParams::use_assignment_spaces`] is set, the
/// trimmed form otherwise. Parsing always expects the trimmed form.
///
/// [`TextSerializerParams::use_assignment_spaces`]: crate::TextSerializerParams::use_assignment_spaces
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DataLanguageParams {
	/// Printed before a field name which precedes its value
	pub left_field_name_begin_quote: &'static str,
	/// Printed after a field name which precedes its value
	pub left_field_name_end_quote: &'static str,
	/// Printed before a field name which follows its value
	pub right_field_name_begin_quote: &'static str,
	/// Printed after a field name which follows its value
	pub right_field_name_end_quote: &'static str,
	/// Between field name and value
	pub left_assignment_operator: &'static str,
	/// Between value and field name, when name is printed after value
	pub right_assignment_operator: &'static str,
	pub field_separator: &'static str,
	pub struct_instance_opening: &'static str,
	pub struct_instance_closing: &'static str,
	pub tuple_opening: &'static str,
	pub tuple_closing: &'static str,
	pub array_opening: &'static str,
	pub array_closing: &'static str,
	pub array_element_separator: &'static str,
	pub string_quote: &'static str,
	pub char_quote: &'static str,
	pub one_line_comment_beginning: &'static str,
	pub multi_line_comment_beginning: &'static str,
	pub multi_line_comment_ending: &'static str,
	/// Literals for `false` and `true`, in that order
	pub false_true_names: [&'static str; 2],
	pub decimal_separator: char,
	/// Print field name again after value, e.g. `<x>1</x>`
	pub add_field_name_after_value: bool,
	/// Field names are printed and expected for every field, regardless of
	/// `TextSerializerParams::field_assignments`
	pub require_field_assignments: bool,
}

impl DataLanguageParams {
	/// C struct initializer: `{.x = 1, .name = "abc", .list = {1, 2}}`.
	///
	/// Field names are optional.
	pub const C_STRUCT_INITIALIZER: Self = Self {
		left_field_name_begin_quote: ".",
		left_field_name_end_quote: "",
		right_field_name_begin_quote: "",
		right_field_name_end_quote: "",
		left_assignment_operator: " = ",
		right_assignment_operator: "",
		field_separator: ",",
		struct_instance_opening: "{",
		struct_instance_closing: "}",
		tuple_opening: "{",
		tuple_closing: "}",
		array_opening: "{",
		array_closing: "}",
		array_element_separator: ",",
		string_quote: "\"",
		char_quote: "'",
		one_line_comment_beginning: "//",
		multi_line_comment_beginning: "/*",
		multi_line_comment_ending: "*/",
		false_true_names: ["false", "true"],
		decimal_separator: '.',
		add_field_name_after_value: false,
		require_field_assignments: false,
	};

	/// JSON: `{"x": 1, "name": "abc", "list": [1, 2]}`.
	///
	/// Tuples are printed as arrays. `char`s as single-character strings.
	pub const JSON: Self = Self {
		left_field_name_begin_quote: "\"",
		left_field_name_end_quote: "\"",
		right_field_name_begin_quote: "",
		right_field_name_end_quote: "",
		left_assignment_operator: ": ",
		right_assignment_operator: "",
		field_separator: ",",
		struct_instance_opening: "{",
		struct_instance_closing: "}",
		tuple_opening: "[",
		tuple_closing: "]",
		array_opening: "[",
		array_closing: "]",
		array_element_separator: ",",
		string_quote: "\"",
		char_quote: "\"",
		one_line_comment_beginning: "",
		multi_line_comment_beginning: "",
		multi_line_comment_ending: "",
		false_true_names: ["false", "true"],
		decimal_separator: '.',
		add_field_name_after_value: false,
		require_field_assignments: true,
	};

	/// JSON with unquoted, optional field names and comments:
	/// `{x: 1, name: "abc", list: [1, 2]}`.
	pub const JSON_LIKE_NO_QUOTES: Self = Self {
		left_field_name_begin_quote: "",
		left_field_name_end_quote: "",
		right_field_name_begin_quote: "",
		right_field_name_end_quote: "",
		left_assignment_operator: ": ",
		right_assignment_operator: "",
		field_separator: ",",
		struct_instance_opening: "{",
		struct_instance_closing: "}",
		tuple_opening: "[",
		tuple_closing: "]",
		array_opening: "[",
		array_closing: "]",
		array_element_separator: ",",
		string_quote: "\"",
		char_quote: "'",
		one_line_comment_beginning: "//",
		multi_line_comment_beginning: "/*",
		multi_line_comment_ending: "*/",
		false_true_names: ["false", "true"],
		decimal_separator: '.',
		add_field_name_after_value: false,
		require_field_assignments: false,
	};

	/// Subset of XML:
	/// `<struct><x>1</x><name>"abc"</name><list><array>1 2</array></list></struct>`.
	pub const XML_SUBSET: Self = Self {
		left_field_name_begin_quote: "<",
		left_field_name_end_quote: ">",
		right_field_name_begin_quote: "</",
		right_field_name_end_quote: ">",
		left_assignment_operator: "",
		right_assignment_operator: "",
		field_separator: "",
		struct_instance_opening: "<struct>",
		struct_instance_closing: "</struct>",
		tuple_opening: "<tuple>",
		tuple_closing: "</tuple>",
		array_opening: "<array>",
		array_closing: "</array>",
		array_element_separator: "",
		string_quote: "\"",
		char_quote: "'",
		one_line_comment_beginning: "",
		multi_line_comment_beginning: "<!--",
		multi_line_comment_ending: "-->",
		false_true_names: ["false", "true"],
		decimal_separator: '.',
		add_field_name_after_value: true,
		require_field_assignments: true,
	};

	/// All presets, with names.
	pub const PRESETS: [(&'static str, Self); 4] = [
		("C_STRUCT_INITIALIZER", Self::C_STRUCT_INITIALIZER),
		("JSON", Self::JSON),
		("JSON_LIKE_NO_QUOTES", Self::JSON_LIKE_NO_QUOTES),
		("XML_SUBSET", Self::XML_SUBSET),
	];

	/// Closing tokens of all collection kinds.
	#[inline]
	pub(crate) fn closings(&self) -> [&'static str; 3] {
		[self.struct_instance_closing, self.tuple_closing, self.array_closing]
	}

	/// Opening tokens of all collection kinds.
	#[inline]
	pub(crate) fn openings(&self) -> [&'static str; 3] {
		[self.struct_instance_opening, self.tuple_opening, self.array_opening]
	}
}

impl Default for DataLanguageParams {
	fn default() -> Self {
		Self::JSON
	}
}
