use std::{fmt, slice};

use thiserror::Error;

/// A recoverable problem found while deserializing text.
///
/// `line` is 1-based. `offset` is the byte offset into input.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
	#[error("line {line}, offset {offset}: expected {expected}, found `{found}`")]
	UnexpectedToken {
		line: usize,
		offset: usize,
		found: String,
		expected: String,
	},

	#[error("line {line}, offset {offset}: malformed {kind} literal `{found}`")]
	MalformedLiteral {
		line: usize,
		offset: usize,
		kind: &'static str,
		found: String,
	},

	#[error("line {line}, offset {offset}: expected field `{expected}`, found field `{found}`")]
	UnexpectedField {
		line: usize,
		offset: usize,
		found: String,
		expected: &'static str,
	},

	#[error("line {line}, offset {offset}: `{type_name}` closed with {missing} field(s) missing")]
	MissingFields {
		line: usize,
		offset: usize,
		type_name: &'static str,
		missing: usize,
	},

	#[error("line {line}, offset {offset}: too many elements for array of length {capacity}")]
	TooManyElements {
		line: usize,
		offset: usize,
		capacity: usize,
	},

	#[error("line {line}, offset {offset}: unterminated {what}")]
	Unterminated {
		line: usize,
		offset: usize,
		what: &'static str,
	},
}

impl Diagnostic {
	/// Get line number this diagnostic refers to.
	pub fn line(&self) -> usize {
		match *self {
			Diagnostic::UnexpectedToken { line, .. }
			| Diagnostic::MalformedLiteral { line, .. }
			| Diagnostic::UnexpectedField { line, .. }
			| Diagnostic::MissingFields { line, .. }
			| Diagnostic::TooManyElements { line, .. }
			| Diagnostic::Unterminated { line, .. } => line,
		}
	}

	/// Get byte offset this diagnostic refers to.
	pub fn offset(&self) -> usize {
		match *self {
			Diagnostic::UnexpectedToken { offset, .. }
			| Diagnostic::MalformedLiteral { offset, .. }
			| Diagnostic::UnexpectedField { offset, .. }
			| Diagnostic::MissingFields { offset, .. }
			| Diagnostic::TooManyElements { offset, .. }
			| Diagnostic::Unterminated { offset, .. } => offset,
		}
	}
}

/// Ordered log of diagnostics accumulated by a
/// [`TextDeserializer`](crate::TextDeserializer).
///
/// An empty log means input was well-formed. `Display` renders a transcript
/// with one diagnostic per line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticLog {
	entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
	#[inline]
	pub fn new() -> Self {
		Self {
			entries: Vec::new(),
		}
	}

	#[inline]
	pub fn push(&mut self, diagnostic: Diagnostic) {
		log::debug!("{}", diagnostic);
		self.entries.push(diagnostic);
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[inline]
	pub fn iter(&self) -> slice::Iter<'_, Diagnostic> {
		self.entries.iter()
	}

	#[inline]
	pub fn as_slice(&self) -> &[Diagnostic] {
		&self.entries
	}

	#[inline]
	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// Convert to `Ok(value)` if log is empty, or `Err(self)` if not.
	pub fn into_result<T>(self, value: T) -> Result<T, Self> {
		if self.is_empty() {
			Ok(value)
		} else {
			Err(self)
		}
	}
}

impl fmt::Display for DiagnosticLog {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (index, diagnostic) in self.entries.iter().enumerate() {
			if index > 0 {
				writeln!(f)?;
			}
			write!(f, "{}", diagnostic)?;
		}
		Ok(())
	}
}

impl std::error::Error for DiagnosticLog {}

impl<'a> IntoIterator for &'a DiagnosticLog {
	type Item = &'a Diagnostic;
	type IntoIter = slice::Iter<'a, Diagnostic>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}
