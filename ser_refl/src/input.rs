//! Input cursor.

/// Cursor over a borrowed input buffer.
///
/// Just an index into the buffer, so position can be saved and restored
/// freely. Text deserializer relies on this to back out of a failed match
/// without consuming input.
///
/// Slices returned by [`read`](InputCursor::read) borrow from the buffer, not
/// the cursor, so they live as long as the buffer does.
#[derive(Clone, Copy, Debug)]
pub struct InputCursor<'de> {
	buf: &'de [u8],
	pos: usize,
}

impl<'de> InputCursor<'de> {
	#[inline]
	pub fn new(buf: &'de [u8]) -> Self {
		Self { buf, pos: 0 }
	}

	/// Get current position in buffer.
	#[inline]
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Set position in buffer.
	///
	/// `pos` must not be beyond end of buffer.
	#[inline]
	pub fn set_pos(&mut self, pos: usize) {
		debug_assert!(pos <= self.buf.len());
		self.pos = pos;
	}

	/// Move position back to start of buffer.
	#[inline]
	pub fn reset(&mut self) {
		self.pos = 0;
	}

	/// Get number of bytes remaining.
	#[inline]
	pub fn remaining(&self) -> usize {
		self.buf.len() - self.pos
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.pos == self.buf.len()
	}

	/// Get all remaining bytes, without consuming them.
	#[inline]
	pub fn rest(&self) -> &'de [u8] {
		&self.buf[self.pos..]
	}

	/// Get whole buffer.
	#[inline]
	pub fn buf(&self) -> &'de [u8] {
		self.buf
	}

	/// Read `len` bytes and advance past them.
	///
	/// Reading past end of input is a precondition violation.
	/// Panics if fewer than `len` bytes remain.
	#[inline]
	pub fn read(&mut self, len: usize) -> &'de [u8] {
		debug_assert!(
			len <= self.remaining(),
			"Attempted to read {} bytes with only {} remaining",
			len,
			self.remaining()
		);
		let bytes = &self.buf[self.pos..self.pos + len];
		self.pos += len;
		bytes
	}

	/// Get next `len` bytes without consuming them.
	/// Returns `None` if fewer than `len` bytes remain.
	#[inline]
	pub fn peek(&self, len: usize) -> Option<&'de [u8]> {
		self.rest().get(..len)
	}

	/// Get next byte without consuming it.
	#[inline]
	pub fn peek_byte(&self) -> Option<u8> {
		self.buf.get(self.pos).copied()
	}

	/// Check if remaining input starts with `bytes`.
	#[inline]
	pub fn starts_with(&self, bytes: &[u8]) -> bool {
		self.rest().starts_with(bytes)
	}

	/// Advance position by `len` bytes.
	#[inline]
	pub fn advance(&mut self, len: usize) {
		debug_assert!(len <= self.remaining());
		self.pos += len;
	}

	/// Move position back by `len` bytes.
	#[inline]
	pub fn rewind(&mut self, len: usize) {
		debug_assert!(len <= self.pos);
		self.pos -= len;
	}
}
