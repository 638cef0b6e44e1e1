use std::{
	fmt::{Display, Write},
	mem,
};

use crate::{
	Category, DataLanguageParams, FieldVisitor, ForEachField, Output, Scalar, Serialize,
	Serializer, TextSerializerParams, TypeFlags,
};

/// Serializer producing text in the notation described by a
/// [`DataLanguageParams`], laid out according to a [`TextSerializerParams`].
///
/// # Example
///
/// ```
/// use ser_refl::{DataLanguageParams, Reflect, TextSerializerParams, to_text};
///
/// #[derive(Reflect, Default)]
/// struct Point {
/// 	x: i32,
/// 	y: i32,
/// }
///
/// let text = to_text(
/// 	&Point { x: 1, y: -2 },
/// 	DataLanguageParams::JSON,
/// 	TextSerializerParams::COMPACT_SINGLE_LINE,
/// );
/// assert_eq!(text, r#"{"x": 1, "y": -2}"#);
/// ```
pub struct TextSerializer<O: Output = Vec<u8>> {
	output: O,
	grammar: DataLanguageParams,
	params: TextSerializerParams,
	nesting_level: usize,
	scratch: String,
}

impl<O: Output> TextSerializer<O> {
	/// Create new serializer writing to `output`.
	pub fn new(output: O, grammar: DataLanguageParams, params: TextSerializerParams) -> Self {
		Self {
			output,
			grammar,
			params,
			nesting_level: 0,
			scratch: String::new(),
		}
	}

	#[inline]
	pub fn output(&self) -> &O {
		&self.output
	}

	#[inline]
	pub fn into_output(self) -> O {
		self.output
	}

	#[inline]
	pub fn grammar(&self) -> &DataLanguageParams {
		&self.grammar
	}

	#[inline]
	pub fn params(&self) -> &TextSerializerParams {
		&self.params
	}

	/// Get current nesting level. 0 outside any struct, tuple or array.
	#[inline]
	pub fn nesting_level(&self) -> usize {
		self.nesting_level
	}

	/// Clear output and nesting level, ready to serialize another value.
	pub fn reset(&mut self) {
		self.output.clear();
		self.nesting_level = 0;
	}

	#[inline]
	fn write(&mut self, token: &str) {
		if !token.is_empty() {
			self.output.write_str(token);
		}
	}

	/// Write contents of scratch buffer, filled by `fill`.
	fn write_with_scratch<F: FnOnce(&mut String)>(&mut self, fill: F) {
		let mut scratch = mem::take(&mut self.scratch);
		scratch.clear();
		fill(&mut scratch);
		self.write(&scratch);
		self.scratch = scratch;
	}

	fn new_line(&mut self) {
		self.write(self.params.line_ending);
		for _ in 0..self.nesting_level {
			self.write(self.params.tab);
		}
	}

	#[inline]
	fn begin_collection(&mut self, opening: &'static str) {
		self.write(opening);
		self.nesting_level += 1;
	}

	/// Write whatever comes before an element of a collection.
	///
	/// Separator goes between elements, never before first.
	fn element_prefix(&mut self, index: usize, separator: &'static str, per_line: bool) {
		if index > 0 {
			self.write(separator);
		}
		if per_line {
			self.new_line();
		} else if index > 0 {
			self.write(" ");
		}
	}

	fn end_collection(&mut self, closing: &'static str, count: usize, per_line: bool) {
		debug_assert!(self.nesting_level > 0);
		self.nesting_level -= 1;
		if per_line && count > 0 {
			self.new_line();
		}
		self.write(closing);
	}

	#[inline]
	fn is_per_line(&self, category: Category) -> bool {
		self.params.value_per_line.contains(category.flag())
	}

	fn write_assignment_operator(&mut self, operator: &'static str) {
		if self.params.use_assignment_spaces {
			self.write(operator);
		} else {
			self.write(operator.trim());
		}
	}

	fn write_field_name(&mut self, name: &str, begin_quote: &'static str, end_quote: &'static str) {
		self.write(begin_quote);
		self.write(name);
		self.write(end_quote);
	}

	fn write_fields<R: ForEachField + ?Sized>(&mut self, record: &R, flags: TypeFlags, named: bool) {
		let per_line = self.params.value_per_line.intersects(flags);
		let mut writer = FieldWriter {
			serializer: self,
			index: 0,
			per_line,
			named,
		};
		record.for_each_field(&mut writer);
		let count = writer.index;
		debug_assert_eq!(count, R::FIELD_NAMES.len());

		let closing = if named {
			self.grammar.struct_instance_closing
		} else {
			self.grammar.tuple_closing
		};
		self.end_collection(closing, count, per_line);
	}
}

impl TextSerializer<Vec<u8>> {
	/// Consume serializer and return output as a `String`.
	pub fn into_string(self) -> String {
		// Only `str`s are ever written, so output is always valid UTF-8
		String::from_utf8(self.output)
			.unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
	}
}

impl<O: Output> Serializer for TextSerializer<O> {
	fn serialize_scalar<T: Scalar>(&mut self, value: T) {
		let decimal_separator = self.grammar.decimal_separator;
		self.write_with_scratch(|out| value.write_text(decimal_separator, out));
	}

	#[inline]
	fn serialize_bool(&mut self, value: bool) {
		self.write(self.grammar.false_true_names[value as usize]);
	}

	fn serialize_char(&mut self, value: char) {
		let quote = self.grammar.char_quote;
		self.write(quote);
		self.write(value.encode_utf8(&mut [0; 4]));
		self.write(quote);
	}

	/// Strings are printed between quotes as they are. There is no escaping.
	fn serialize_str(&mut self, value: &str) {
		let quote = self.grammar.string_quote;
		self.write(quote);
		self.write(value);
		self.write(quote);
	}

	fn serialize_seq<T: Serialize>(&mut self, values: &[T]) {
		let per_line = self.is_per_line(Category::sequence_of(T::CATEGORY));
		let separator = self.grammar.array_element_separator;

		self.begin_collection(self.grammar.array_opening);
		for (index, value) in values.iter().enumerate() {
			self.element_prefix(index, separator, per_line);
			value.serialize(self);
		}
		self.end_collection(self.grammar.array_closing, values.len(), per_line);
	}

	fn serialize_record<R: ForEachField + ?Sized>(&mut self, record: &R) {
		log::trace!("serializing `{}` at nesting level {}", R::TYPE_NAME, self.nesting_level);
		if self.params.struct_type_names {
			self.write(R::TYPE_NAME);
		}
		self.begin_collection(self.grammar.struct_instance_opening);
		self.write_fields(record, TypeFlags::STRUCT, true);
	}

	fn serialize_tuple<R: ForEachField + ?Sized>(&mut self, tuple: &R) {
		self.begin_collection(self.grammar.tuple_opening);
		self.write_fields(tuple, TypeFlags::TUPLE, false);
	}

	fn serialize_display<T: Display + ?Sized>(&mut self, value: &T) {
		self.write_with_scratch(|out| {
			// Writing to a `String` cannot fail
			let _ = write!(out, "{}", value);
		});
	}
}

struct FieldWriter<'s, O: Output> {
	serializer: &'s mut TextSerializer<O>,
	index: usize,
	per_line: bool,
	/// `false` for tuple elements, which never have names
	named: bool,
}

impl<'s, O: Output> FieldVisitor for FieldWriter<'s, O> {
	fn visit_field<T: Serialize + ?Sized>(&mut self, name: &'static str, value: &T) {
		let ser = &mut *self.serializer;
		let grammar = ser.grammar;

		ser.element_prefix(self.index, grammar.field_separator, self.per_line);
		self.index += 1;

		let print_name = self.named
			&& (grammar.require_field_assignments
				|| ser.params.field_assignments.contains(T::CATEGORY.flag()));

		if print_name {
			ser.write_field_name(
				name,
				grammar.left_field_name_begin_quote,
				grammar.left_field_name_end_quote,
			);
			ser.write_assignment_operator(grammar.left_assignment_operator);
		}

		value.serialize(ser);

		if print_name && grammar.add_field_name_after_value {
			ser.write_assignment_operator(grammar.right_assignment_operator);
			ser.write_field_name(
				name,
				grammar.right_field_name_begin_quote,
				grammar.right_field_name_end_quote,
			);
		}
	}
}
