use std::str::FromStr;

use crate::{
	DataLanguageParams, Deserialize, Deserializer, Diagnostic, DiagnosticLog, FieldVisitorMut,
	ForEachFieldMut, InputCursor, Scalar,
};

/// Maximum length of the "found" token quoted in diagnostics, in chars
const MAX_FOUND_LEN: usize = 32;

/// Lenient recursive-descent deserializer for text in the notation described
/// by a [`DataLanguageParams`].
///
/// Never aborts. Each problem found is appended to a [`DiagnosticLog`] and
/// parsing carries on: a failed match consumes no input, so the caller can
/// try an alternative, and a field or element which fails to parse is skipped
/// up to the next separator, leaving the value it was reading into unchanged.
///
/// After a top-level [`deserialize_value`](Deserializer::deserialize_value)
/// call, check [`log`](TextDeserializer::log) is empty to know the result is
/// trustworthy.
///
/// Any formatting produced by [`TextSerializer`](crate::TextSerializer) with
/// the same grammar is accepted, with or without optional field names.
/// Named fields must appear in declaration order.
pub struct TextDeserializer<'de> {
	input: InputCursor<'de>,
	text: &'de str,
	grammar: DataLanguageParams,
	nesting_level: usize,
	line: usize,
	log: DiagnosticLog,
}

/// Saved position, for backing out of a failed match.
#[derive(Clone, Copy, Debug)]
struct Checkpoint {
	pos: usize,
	line: usize,
}

impl<'de> TextDeserializer<'de> {
	/// Create new deserializer reading from `text`.
	pub fn new(text: &'de str, grammar: DataLanguageParams) -> Self {
		Self {
			input: InputCursor::new(text.as_bytes()),
			text,
			grammar,
			nesting_level: 0,
			line: 1,
			log: DiagnosticLog::new(),
		}
	}

	/// Get diagnostics logged so far.
	#[inline]
	pub fn log(&self) -> &DiagnosticLog {
		&self.log
	}

	/// Take diagnostics logged so far, leaving log empty.
	#[inline]
	pub fn take_log(&mut self) -> DiagnosticLog {
		std::mem::take(&mut self.log)
	}

	#[inline]
	pub fn grammar(&self) -> &DataLanguageParams {
		&self.grammar
	}

	/// Get current line number (1-based).
	#[inline]
	pub fn line(&self) -> usize {
		self.line
	}

	/// Get current byte offset in input.
	#[inline]
	pub fn position(&self) -> usize {
		self.input.pos()
	}

	/// Get current nesting level. 0 outside any struct, tuple or array.
	#[inline]
	pub fn nesting_level(&self) -> usize {
		self.nesting_level
	}

	/// Move back to start of input and clear log.
	pub fn reset(&mut self) {
		self.input.reset();
		self.line = 1;
		self.nesting_level = 0;
		self.log.clear();
	}

	/// Check only whitespace and comments remain in input.
	///
	/// If not, logs a diagnostic and returns `false`.
	pub fn end(&mut self) -> bool {
		self.skip_whitespace_and_comments();
		if self.input.is_empty() {
			true
		} else {
			self.report_unexpected("end of input".to_string());
			false
		}
	}

	#[inline]
	fn checkpoint(&self) -> Checkpoint {
		Checkpoint {
			pos: self.input.pos(),
			line: self.line,
		}
	}

	#[inline]
	fn restore(&mut self, checkpoint: Checkpoint) {
		self.input.set_pos(checkpoint.pos);
		self.line = checkpoint.line;
	}

	/// Get remaining input.
	#[inline]
	fn rest(&self) -> &'de str {
		&self.text[self.input.pos()..]
	}

	#[inline]
	fn starts_with(&self, token: &str) -> bool {
		!token.is_empty() && self.input.starts_with(token.as_bytes())
	}

	/// Advance `len` bytes, counting lines.
	/// `len` must be on a char boundary.
	fn consume(&mut self, len: usize) {
		let consumed = &self.rest()[..len];
		self.line += consumed.bytes().filter(|&b| b == b'\n').count();
		self.input.advance(len);
	}

	fn advance_char(&mut self) {
		if let Some(c) = self.rest().chars().next() {
			self.consume(c.len_utf8());
		}
	}

	/// Get the token at current position, up to the next whitespace,
	/// for quoting in diagnostics.
	fn found_token(&self) -> String {
		let rest = self.rest();
		if rest.is_empty() {
			return "end of input".to_string();
		}
		let token = rest.split(char::is_whitespace).next().unwrap_or(rest);
		let mut found: String = token.chars().take(MAX_FOUND_LEN).collect();
		if found.len() < token.len() {
			found.push_str("...");
		}
		found
	}

	fn report(&mut self, diagnostic: Diagnostic) {
		self.log.push(diagnostic);
	}

	/// Log that `expected` was expected at current position.
	fn report_unexpected(&mut self, expected: String) {
		let diagnostic = Diagnostic::UnexpectedToken {
			line: self.line,
			offset: self.input.pos(),
			found: self.found_token(),
			expected,
		};
		self.report(diagnostic);
	}

	/// Skip whitespace and comments.
	///
	/// Multi-line comments nest, so `/* a /* b */ c */` is one comment.
	pub fn skip_whitespace_and_comments(&mut self) {
		let grammar = self.grammar;
		loop {
			let rest = self.rest();
			let whitespace_len = rest.len() - rest.trim_start().len();
			self.consume(whitespace_len);

			if self.starts_with(grammar.one_line_comment_beginning) {
				let rest = self.rest();
				let len = rest.find('\n').unwrap_or(rest.len());
				self.consume(len);
			} else if self.starts_with(grammar.multi_line_comment_beginning) {
				let start = self.checkpoint();
				self.consume(grammar.multi_line_comment_beginning.len());
				let closed = self.skip_recursive_block(
					grammar.multi_line_comment_beginning,
					grammar.multi_line_comment_ending,
				);
				if !closed {
					self.report(Diagnostic::Unterminated {
						line: start.line,
						offset: start.pos,
						what: "comment",
					});
				}
			} else {
				break;
			}
		}
	}

	/// Skip to end of a block whose `opening` token has already been consumed,
	/// counting nested blocks.
	///
	/// Returns `false` if input ends before block is closed, in which case all
	/// remaining input has been consumed.
	pub fn skip_recursive_block(&mut self, opening: &str, closing: &str) -> bool {
		let mut depth = 1usize;
		while !self.input.is_empty() {
			if self.starts_with(closing) {
				self.consume(closing.len());
				depth -= 1;
				if depth == 0 {
					return true;
				}
			} else if self.starts_with(opening) {
				self.consume(opening.len());
				depth += 1;
			} else {
				self.advance_char();
			}
		}
		false
	}

	/// Consume `token` if it's next in input, after whitespace and comments.
	///
	/// Logs nothing. Returns `false` if `token` is not next, having consumed
	/// only whitespace and comments. An empty token always matches.
	pub fn try_consume(&mut self, token: &str) -> bool {
		if token.is_empty() {
			return true;
		}
		self.skip_whitespace_and_comments();
		if self.starts_with(token) {
			self.consume(token.len());
			true
		} else {
			false
		}
	}

	/// Like `try_consume`, but only matches whole words: `true` does not match
	/// start of `trueish`.
	fn try_consume_word(&mut self, word: &str) -> bool {
		let checkpoint = self.checkpoint();
		if !self.try_consume(word) {
			return false;
		}
		match self.rest().chars().next() {
			Some(c) if is_ident_char(c) => {
				self.restore(checkpoint);
				false
			}
			_ => true,
		}
	}

	/// Check if `token` is next in input, without consuming it.
	fn peek(&mut self, token: &str) -> bool {
		self.skip_whitespace_and_comments();
		self.starts_with(token)
	}

	/// Consume `token`, or log a diagnostic if it's not next in input.
	///
	/// Whitespace and comments before `token` are consumed whether it matches
	/// or not, and stay consumed on failure. Position is then at the offending
	/// token, which is where the diagnostic points, and nothing of it has been
	/// consumed, so caller can attempt an alternative. Skipping is not undone,
	/// as skipping an unterminated comment again would log it twice.
	pub fn expect(&mut self, token: &str) -> bool {
		if self.try_consume(token) {
			true
		} else {
			self.report_unexpected(format!("`{}`", token));
			false
		}
	}

	/// Consume the first of `tokens` which is next in input, and return its
	/// index. If none is, log a diagnostic listing all of them and return
	/// `None`, consuming no input.
	pub fn expect_one_of(&mut self, tokens: &[&str]) -> Option<usize> {
		if let Some(index) = tokens.iter().position(|token| self.try_consume(token)) {
			return Some(index);
		}
		let expected = tokens
			.iter()
			.map(|token| format!("`{}`", token))
			.collect::<Vec<_>>()
			.join(" or ");
		self.report_unexpected(format!("one of {}", expected));
		None
	}

	/// Read an identifier. Returns `None` and consumes nothing if there isn't one.
	fn read_identifier(&mut self) -> Option<&'de str> {
		self.skip_whitespace_and_comments();
		let rest = self.rest();
		match rest.chars().next() {
			Some(c) if c.is_alphabetic() || c == '_' => {}
			_ => return None,
		}
		let len = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
		self.consume(len);
		Some(&rest[..len])
	}

	/// Read a field name, which ends at `end_quote` (not consumed), or at end
	/// of identifier if `end_quote` is empty.
	fn read_field_name(&mut self, end_quote: &str) -> Option<&'de str> {
		if end_quote.is_empty() {
			return self.read_identifier();
		}
		let rest = self.rest();
		let len = rest.find(end_quote)?;
		let name = &rest[..len];
		if name.is_empty() || name.contains(char::is_whitespace) {
			return None;
		}
		self.consume(len);
		Some(name)
	}

	/// Read a literal (number, or custom value), up to first char which can't
	/// be part of one. Logs a diagnostic if there is no literal.
	fn read_literal(&mut self, kind: &str) -> Option<(Checkpoint, &'de str)> {
		self.skip_whitespace_and_comments();
		let start = self.checkpoint();
		let decimal_separator = self.grammar.decimal_separator;
		let rest = self.rest();
		let len = rest
			.find(|c: char| {
				!(c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == decimal_separator)
			})
			.unwrap_or(rest.len());
		if len == 0 {
			self.report_unexpected(kind.to_string());
			return None;
		}
		self.consume(len);
		Some((start, &rest[..len]))
	}

	fn report_malformed(&mut self, at: Checkpoint, kind: &'static str, found: &str) {
		self.report(Diagnostic::MalformedLiteral {
			line: at.line,
			offset: at.pos,
			kind,
			found: found.to_string(),
		});
	}

	/// Read text between a pair of `quote` tokens.
	fn read_quoted(&mut self, quote: &str, what: &'static str) -> Option<&'de str> {
		self.skip_whitespace_and_comments();
		let start = self.checkpoint();
		if !self.expect(quote) {
			return None;
		}
		let rest = self.rest();
		let found = if quote.is_empty() {
			rest.find(char::is_whitespace)
		} else {
			rest.find(quote)
		};
		match found {
			Some(len) => {
				self.consume(len);
				self.consume(quote.len());
				Some(&rest[..len])
			}
			None => {
				self.restore(start);
				self.report(Diagnostic::Unterminated {
					line: start.line,
					offset: start.pos,
					what,
				});
				None
			}
		}
	}

	/// Skip forward to the next of `targets`, or to a closing token, at the
	/// current bracket depth. Nothing is consumed from the token skipped to.
	///
	/// Quoted strings, chars and comments are skipped whole, so tokens inside
	/// them are ignored. Used to get back on track after a parse failure.
	fn skip_to(&mut self, targets: &[&str]) {
		let grammar = self.grammar;
		let openings = grammar.openings();
		let closings = grammar.closings();
		let quotes = [grammar.string_quote, grammar.char_quote];

		let mut depth = 0usize;
		loop {
			self.skip_whitespace_and_comments();
			if self.input.is_empty() {
				return;
			}

			if let Some(closing) = closings.iter().find(|token| self.starts_with(token)) {
				if depth == 0 {
					return;
				}
				depth -= 1;
				self.consume(closing.len());
			} else if depth == 0 && targets.iter().any(|token| self.starts_with(token)) {
				return;
			} else if let Some(opening) = openings.iter().find(|token| self.starts_with(token)) {
				depth += 1;
				self.consume(opening.len());
			} else if let Some(quote) = quotes.iter().find(|token| self.starts_with(token)) {
				self.consume(quote.len());
				let rest = self.rest();
				let len = rest.find(quote).map_or(rest.len(), |len| len + quote.len());
				self.consume(len);
			} else {
				self.advance_char();
			}
		}
	}

	/// Consume a struct's opening token, optionally preceded by its type name.
	///
	/// Logs a diagnostic if type name is present and is not `type_name`.
	pub fn struct_instance_definition_begin(&mut self, type_name: &'static str) -> bool {
		let opening = self.grammar.struct_instance_opening;
		if !opening.is_empty() {
			self.skip_whitespace_and_comments();
			let start = self.checkpoint();
			if let Some(name) = self.read_identifier() {
				if self.try_consume(opening) {
					if name != type_name {
						self.report(Diagnostic::UnexpectedToken {
							line: start.line,
							offset: start.pos,
							found: name.to_string(),
							expected: format!("type name `{}`", type_name),
						});
					}
					self.nesting_level += 1;
					return true;
				}
				self.restore(start);
			}
		}
		self.begin_collection(opening)
	}

	fn begin_collection(&mut self, opening: &str) -> bool {
		if self.expect(opening) {
			self.nesting_level += 1;
			true
		} else {
			false
		}
	}

	/// Consume closing token. If it's not next, skip to it.
	fn end_collection(&mut self, closing: &str) {
		self.nesting_level = self.nesting_level.saturating_sub(1);
		if !self.expect(closing) {
			self.skip_to(&[]);
			self.try_consume(closing);
		}
	}

	/// Read field name and assignment operator preceding a field's value.
	///
	/// If names are optional, looks ahead quietly first and reads nothing if
	/// there's no name. A name which is present but differs from `expected`
	/// is logged, and the value is still read into this field.
	///
	/// Returns whether a name was read.
	fn field_name_prefix(&mut self, expected: &'static str, required: bool) -> bool {
		let grammar = self.grammar;
		let operator = grammar.left_assignment_operator.trim();

		if !required {
			self.skip_whitespace_and_comments();
			let start = self.checkpoint();
			let present = self.try_consume(grammar.left_field_name_begin_quote)
				&& self.read_field_name(grammar.left_field_name_end_quote).is_some()
				&& self.try_consume(grammar.left_field_name_end_quote)
				&& self.try_consume(operator);
			self.restore(start);
			if !present {
				return false;
			}
		}

		if !self.expect(grammar.left_field_name_begin_quote) {
			return false;
		}
		self.read_field_name_checked(expected, grammar.left_field_name_end_quote);
		self.expect(grammar.left_field_name_end_quote);
		self.expect(operator);
		true
	}

	/// Read field name and assignment operator following a field's value.
	fn field_name_suffix(&mut self, expected: &'static str) {
		let grammar = self.grammar;
		self.expect(grammar.right_assignment_operator.trim());
		if !self.expect(grammar.right_field_name_begin_quote) {
			return;
		}
		self.read_field_name_checked(expected, grammar.right_field_name_end_quote);
		self.expect(grammar.right_field_name_end_quote);
	}

	fn read_field_name_checked(&mut self, expected: &'static str, end_quote: &str) {
		let start = self.checkpoint();
		match self.read_field_name(end_quote) {
			Some(name) if name == expected => {}
			Some(name) => self.report(Diagnostic::UnexpectedField {
				line: start.line,
				offset: start.pos,
				found: name.to_string(),
				expected,
			}),
			None => self.report_unexpected(format!("field name `{}`", expected)),
		}
	}

	/// Read fields of a struct or tuple, whose opening token has been consumed.
	fn read_fields<R: ForEachFieldMut<'de>>(&mut self, record: &mut R, named: bool) {
		let closing = if named {
			self.grammar.struct_instance_closing
		} else {
			self.grammar.tuple_closing
		};

		let mut reader = FieldReader {
			deserializer: self,
			index: 0,
			missing: 0,
			named,
			closing,
		};
		record.for_each_field_mut(&mut reader);

		if reader.missing > 0 {
			let missing = reader.missing;
			self.report(Diagnostic::MissingFields {
				line: self.line,
				offset: self.input.pos(),
				type_name: R::TYPE_NAME,
				missing,
			});
		}
		self.end_collection(closing);
	}

	/// Read elements of an array, whose opening token has been consumed,
	/// until closing token.
	///
	/// `read_element` is called with index of each element. It returns `false`
	/// to stop reading. Remaining elements are then skipped.
	fn read_elements<F>(&mut self, mut read_element: F)
	where F: FnMut(&mut Self, usize) -> bool {
		let separator = self.grammar.array_element_separator;
		let closing = self.grammar.array_closing;

		let mut index = 0;
		loop {
			if self.peek(closing) || self.input.is_empty() {
				break;
			}

			if index > 0 {
				self.skip_whitespace_and_comments();
				let mut at = self.checkpoint();
				if !self.expect(separator) {
					self.skip_to(&[separator]);
					at = self.checkpoint();
					if !self.try_consume(separator) {
						break;
					}
				}
				// Separator goes between elements, never after last
				if !separator.is_empty() && self.peek(closing) {
					self.report(Diagnostic::UnexpectedToken {
						line: at.line,
						offset: at.pos,
						found: separator.to_string(),
						expected: "array element".to_string(),
					});
					break;
				}
			}

			let start = self.input.pos();
			let errors_before = self.log.len();
			if !read_element(self, index) {
				self.skip_to(&[]);
				break;
			}
			index += 1;

			// Without a separator, next element starts wherever the failed one stopped
			if self.log.len() > errors_before && !separator.is_empty() {
				self.skip_to(&[separator]);
			}
			// No progress is possible
			if self.input.pos() == start {
				self.skip_to(&[]);
				break;
			}
		}

		self.end_collection(closing);
	}
}

impl<'de> Deserializer<'de> for TextDeserializer<'de> {
	fn deserialize_scalar<T: Scalar>(&mut self, value: &mut T) {
		let decimal_separator = self.grammar.decimal_separator;
		if let Some((start, literal)) = self.read_literal(T::NAME) {
			match T::parse_text(literal, decimal_separator) {
				Some(parsed) => *value = parsed,
				None => self.report_malformed(start, T::NAME, literal),
			}
		}
	}

	fn deserialize_bool(&mut self, value: &mut bool) {
		let [false_name, true_name] = self.grammar.false_true_names;
		if self.try_consume_word(false_name) {
			*value = false;
		} else if self.try_consume_word(true_name) {
			*value = true;
		} else if let Some((start, literal)) = self.read_literal("bool") {
			self.report_malformed(start, "bool", literal);
		}
	}

	fn deserialize_char(&mut self, value: &mut char) {
		let start = self.checkpoint();
		if let Some(text) = self.read_quoted(self.grammar.char_quote, "char") {
			let mut chars = text.chars();
			match (chars.next(), chars.next()) {
				(Some(c), None) => *value = c,
				_ => self.report_malformed(start, "char", text),
			}
		}
	}

	fn deserialize_string(&mut self, value: &mut String) {
		if let Some(text) = self.read_quoted(self.grammar.string_quote, "string") {
			value.clear();
			value.push_str(text);
		}
	}

	/// Borrows directly from input.
	fn deserialize_str(&mut self) -> Option<&'de str> {
		self.read_quoted(self.grammar.string_quote, "string")
	}

	fn deserialize_vec<T: Deserialize<'de> + Default>(&mut self, values: &mut Vec<T>) {
		if !self.begin_collection(self.grammar.array_opening) {
			return;
		}
		values.clear();
		self.read_elements(|deserializer, _index| {
			let mut value = T::default();
			value.deserialize(deserializer);
			values.push(value);
			true
		});
	}

	/// Elements beyond length of array are logged and skipped.
	/// If input has fewer elements, remaining elements are left unchanged.
	fn deserialize_array<T: Deserialize<'de>>(&mut self, values: &mut [T]) {
		if !self.begin_collection(self.grammar.array_opening) {
			return;
		}
		let capacity = values.len();
		self.read_elements(|deserializer, index| match values.get_mut(index) {
			Some(value) => {
				value.deserialize(deserializer);
				true
			}
			None => {
				deserializer.skip_whitespace_and_comments();
				deserializer.report(Diagnostic::TooManyElements {
					line: deserializer.line,
					offset: deserializer.input.pos(),
					capacity,
				});
				false
			}
		});
	}

	fn deserialize_record<R: ForEachFieldMut<'de>>(&mut self, record: &mut R) {
		log::trace!("deserializing `{}` at line {}", R::TYPE_NAME, self.line);
		if self.struct_instance_definition_begin(R::TYPE_NAME) {
			self.read_fields(record, true);
		}
	}

	fn deserialize_tuple<R: ForEachFieldMut<'de>>(&mut self, tuple: &mut R) {
		if self.begin_collection(self.grammar.tuple_opening) {
			self.read_fields(tuple, false);
		}
	}

	fn deserialize_from_str<T: FromStr>(&mut self, value: &mut T) {
		if let Some((start, literal)) = self.read_literal("custom") {
			match literal.parse() {
				Ok(parsed) => *value = parsed,
				Err(_) => self.report_malformed(start, "custom", literal),
			}
		}
	}
}

struct FieldReader<'d, 'de> {
	deserializer: &'d mut TextDeserializer<'de>,
	index: usize,
	/// Number of fields not read because struct closed early
	missing: usize,
	/// `false` for tuple elements, which never have names
	named: bool,
	closing: &'static str,
}

impl<'d, 'de> FieldVisitorMut<'de> for FieldReader<'d, 'de> {
	fn visit_field<T: Deserialize<'de>>(&mut self, name: &'static str, value: &mut T) {
		let de = &mut *self.deserializer;
		let grammar = de.grammar;
		let separator = grammar.field_separator;

		if self.missing > 0 || de.peek(self.closing) {
			self.missing += 1;
			return;
		}

		// Separator goes between fields, never before first
		if self.index > 0 && !de.expect(separator) {
			de.skip_to(&[separator]);
			if !de.try_consume(separator) {
				self.missing += 1;
				return;
			}
		}
		self.index += 1;

		let errors_before = de.log.len();
		let has_name =
			self.named && de.field_name_prefix(name, grammar.require_field_assignments);

		value.deserialize(de);

		let name_after_value = has_name && grammar.add_field_name_after_value;
		if de.log.len() > errors_before {
			let name_begin = if name_after_value {
				grammar.right_field_name_begin_quote
			} else {
				""
			};
			de.skip_to(&[separator, name_begin]);
		}
		if name_after_value {
			de.field_name_suffix(name);
		}
	}
}

#[inline]
fn is_ident_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_'
}
