//! Output cursors.

/// Trait for sequential byte sinks which serializers write to.
///
/// `Vec<u8>` implements this trait, as does [`CountingOutput`], which discards
/// bytes and only counts them.
///
/// A serializer can also write to an output owned elsewhere by taking a
/// `&mut O`.
pub trait Output {
	/// Write bytes to output.
	fn write_bytes(&mut self, bytes: &[u8]);

	/// Write a string to output.
	#[inline]
	fn write_str(&mut self, s: &str) {
		self.write_bytes(s.as_bytes());
	}

	/// Get number of bytes written so far.
	fn len(&self) -> usize;

	/// Discard all bytes written so far.
	fn clear(&mut self);

	/// Reserve capacity for at least `additional` more bytes.
	///
	/// Outputs without a backing buffer can ignore this.
	#[inline]
	#[allow(unused_variables)]
	fn reserve(&mut self, additional: usize) {}
}

impl Output for Vec<u8> {
	#[inline]
	fn write_bytes(&mut self, bytes: &[u8]) {
		self.extend_from_slice(bytes);
	}

	#[inline]
	fn len(&self) -> usize {
		Vec::len(self)
	}

	#[inline]
	fn clear(&mut self) {
		Vec::clear(self);
	}

	#[inline]
	fn reserve(&mut self, additional: usize) {
		Vec::reserve(self, additional);
	}
}

impl<O: Output + ?Sized> Output for &mut O {
	#[inline]
	fn write_bytes(&mut self, bytes: &[u8]) {
		(**self).write_bytes(bytes);
	}

	#[inline]
	fn len(&self) -> usize {
		(**self).len()
	}

	#[inline]
	fn clear(&mut self) {
		(**self).clear();
	}

	#[inline]
	fn reserve(&mut self, additional: usize) {
		(**self).reserve(additional);
	}
}

/// Output which discards bytes, but tracks how many would have been written.
///
/// Used to calculate the exact size of output before serializing for real,
/// without performing any I/O or allocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountingOutput {
	len: usize,
}

impl CountingOutput {
	#[inline]
	pub fn new() -> Self {
		Self { len: 0 }
	}
}

impl Output for CountingOutput {
	#[inline]
	fn write_bytes(&mut self, bytes: &[u8]) {
		self.len += bytes.len();
	}

	#[inline]
	fn len(&self) -> usize {
		self.len
	}

	#[inline]
	fn clear(&mut self) {
		self.len = 0;
	}
}
