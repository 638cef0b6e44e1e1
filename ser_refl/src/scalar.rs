//! Fixed-width numeric types.

use std::{fmt::Write, mem, slice};

use crate::{Deserialize, Output, Serialize};

mod private {
	pub trait Sealed {}
}

/// Trait for fixed-width numeric types.
///
/// Sealed. Only implemented for `u8`-`u128`, `i8`-`i128`, `f32` and `f64`.
/// All of these are valid for any bit pattern and contain no padding, which
/// the bulk copy methods rely on.
pub trait Scalar:
	private::Sealed + Copy + Default + Serialize + for<'de> Deserialize<'de> + 'static
{
	/// Name of type, for use in diagnostics
	const NAME: &'static str;

	/// Size of type in bytes
	const WIDTH: usize = mem::size_of::<Self>();

	/// Write value to `out` as little-endian bytes.
	fn write_le<O: Output + ?Sized>(self, out: &mut O);

	/// Read value from little-endian bytes.
	///
	/// Panics if `bytes` is shorter than [`WIDTH`](Scalar::WIDTH).
	fn read_le(bytes: &[u8]) -> Self;

	/// Append text representation of value to `out`, using `decimal_separator`
	/// in place of `.`.
	fn write_text(self, decimal_separator: char, out: &mut String);

	/// Parse value from text representation, using `decimal_separator`
	/// in place of `.`.
	fn parse_text(text: &str, decimal_separator: char) -> Option<Self>;

	/// Get slice of values as little-endian bytes.
	///
	/// On little-endian hosts, this is a zero-cost view of the slice.
	/// On big-endian hosts, bytes are swapped into `buf` and `buf` is returned.
	#[inline]
	fn slice_as_le_bytes<'a>(values: &'a [Self], buf: &'a mut Vec<u8>) -> &'a [u8] {
		if cfg!(target_endian = "little") {
			// SAFETY: `Scalar` is sealed and only implemented for primitive numbers,
			// which have no padding bytes, so all bytes of the slice are initialized
			unsafe { slice::from_raw_parts(values.as_ptr().cast::<u8>(), mem::size_of_val(values)) }
		} else {
			buf.clear();
			buf.reserve(mem::size_of_val(values));
			for &value in values {
				value.write_le(buf);
			}
			buf.as_slice()
		}
	}

	/// Fill slice of values from little-endian bytes.
	///
	/// Panics if `bytes` is shorter than the slice.
	#[inline]
	fn fill_from_le_bytes(values: &mut [Self], bytes: &[u8]) {
		let bytes = &bytes[..mem::size_of_val(values)];
		if cfg!(target_endian = "little") {
			// SAFETY: `bytes` has been sliced to exactly the size of `values`.
			// `Scalar` is sealed and only implemented for primitive numbers,
			// which are valid for any bit pattern.
			// Destination is `u8`, so source needs no particular alignment.
			unsafe {
				std::ptr::copy_nonoverlapping(
					bytes.as_ptr(),
					values.as_mut_ptr().cast::<u8>(),
					bytes.len(),
				);
			}
		} else {
			for (value, chunk) in values.iter_mut().zip(bytes.chunks_exact(Self::WIDTH)) {
				*value = Self::read_le(chunk);
			}
		}
	}
}

macro_rules! impl_int {
	($ty:ty) => {
		impl private::Sealed for $ty {}

		impl Scalar for $ty {
			const NAME: &'static str = stringify!($ty);

			#[inline]
			fn write_le<O: Output + ?Sized>(self, out: &mut O) {
				out.write_bytes(&self.to_le_bytes());
			}

			#[inline]
			fn read_le(bytes: &[u8]) -> Self {
				let mut buf = [0u8; mem::size_of::<$ty>()];
				buf.copy_from_slice(&bytes[..mem::size_of::<$ty>()]);
				<$ty>::from_le_bytes(buf)
			}

			#[inline]
			fn write_text(self, _decimal_separator: char, out: &mut String) {
				// Writing to a `String` cannot fail
				let _ = write!(out, "{}", self);
			}

			#[inline]
			fn parse_text(text: &str, _decimal_separator: char) -> Option<Self> {
				text.parse().ok()
			}
		}
	};
}

impl_int!(u8);
impl_int!(u16);
impl_int!(u32);
impl_int!(u64);
impl_int!(u128);

impl_int!(i8);
impl_int!(i16);
impl_int!(i32);
impl_int!(i64);
impl_int!(i128);

macro_rules! impl_float {
	($ty:ty, $significant_digits:literal) => {
		impl private::Sealed for $ty {}

		impl Scalar for $ty {
			const NAME: &'static str = stringify!($ty);

			#[inline]
			fn write_le<O: Output + ?Sized>(self, out: &mut O) {
				out.write_bytes(&self.to_le_bytes());
			}

			#[inline]
			fn read_le(bytes: &[u8]) -> Self {
				let mut buf = [0u8; mem::size_of::<$ty>()];
				buf.copy_from_slice(&bytes[..mem::size_of::<$ty>()]);
				<$ty>::from_le_bytes(buf)
			}

			#[inline]
			fn write_text(self, decimal_separator: char, out: &mut String) {
				write_significant(f64::from(self), $significant_digits, decimal_separator, out);
			}

			fn parse_text(text: &str, decimal_separator: char) -> Option<Self> {
				if decimal_separator == '.' {
					text.parse().ok()
				} else {
					if text.contains('.') {
						return None;
					}
					text.replace(decimal_separator, ".").parse().ok()
				}
			}
		}
	};
}

impl_float!(f32, 7);
impl_float!(f64, 15);

/// Write float with `digits` significant digits, in the manner of C's `%g`.
///
/// Fixed notation is used when the decimal exponent is in `-4..digits`,
/// otherwise scientific notation with at least 2 exponent digits.
/// Trailing zeros in the fraction are removed.
pub(crate) fn write_significant(value: f64, digits: usize, decimal_separator: char, out: &mut String) {
	debug_assert!(digits > 0);

	if value.is_nan() {
		out.push_str("nan");
		return;
	}
	if value.is_infinite() {
		out.push_str(if value < 0.0 { "-inf" } else { "inf" });
		return;
	}
	if value == 0.0 {
		out.push_str(if value.is_sign_negative() { "-0" } else { "0" });
		return;
	}

	// Exponent after rounding to `digits` significant digits
	let scientific = format!("{:.*e}", digits - 1, value);
	let (mantissa, exponent) = match scientific.split_once('e') {
		Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
		None => (scientific.as_str(), 0),
	};

	let start = out.len();
	if exponent < -4 || exponent >= digits as i32 {
		out.push_str(trim_fraction(mantissa));
		let sign = if exponent < 0 { '-' } else { '+' };
		let _ = write!(out, "e{}{:02}", sign, exponent.unsigned_abs());
	} else {
		let decimals = (digits as i32 - 1 - exponent) as usize;
		let fixed = format!("{:.*}", decimals, value);
		out.push_str(trim_fraction(&fixed));
	}

	if decimal_separator != '.' {
		let formatted = out.split_off(start);
		out.push_str(&formatted.replace('.', decimal_separator.encode_utf8(&mut [0; 4])));
	}
}

fn trim_fraction(num: &str) -> &str {
	if num.contains('.') {
		num.trim_end_matches('0').trim_end_matches('.')
	} else {
		num
	}
}
