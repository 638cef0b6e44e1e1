use crate::{Category, Deserialize, Deserializer, Serialize, Serializer};

// Sequences of scalars take the bulk path
macro_rules! impl_scalar {
	($ty:ty) => {
		impl Serialize for $ty {
			const CATEGORY: Category = Category::Scalar;

			#[inline]
			fn serialize<S: Serializer>(&self, serializer: &mut S) {
				serializer.serialize_scalar(*self);
			}

			#[inline]
			fn serialize_slice<S: Serializer>(slice: &[Self], serializer: &mut S) {
				serializer.serialize_scalar_slice(slice);
			}
		}

		impl<'de> Deserialize<'de> for $ty {
			#[inline]
			fn deserialize<D: Deserializer<'de>>(&mut self, deserializer: &mut D) {
				deserializer.deserialize_scalar(self);
			}

			#[inline]
			fn deserialize_vec<D: Deserializer<'de>>(vec: &mut Vec<Self>, deserializer: &mut D) {
				deserializer.deserialize_scalar_vec(vec);
			}

			#[inline]
			fn deserialize_slice<D: Deserializer<'de>>(slice: &mut [Self], deserializer: &mut D) {
				deserializer.deserialize_scalar_array(slice);
			}
		}
	};
}

impl_scalar!(u8);
impl_scalar!(u16);
impl_scalar!(u32);
impl_scalar!(u64);
impl_scalar!(u128);

impl_scalar!(i8);
impl_scalar!(i16);
impl_scalar!(i32);
impl_scalar!(i64);
impl_scalar!(i128);

impl_scalar!(f32);
impl_scalar!(f64);

impl Serialize for bool {
	const CATEGORY: Category = Category::Bool;

	#[inline]
	fn serialize<S: Serializer>(&self, serializer: &mut S) {
		serializer.serialize_bool(*self);
	}
}

impl<'de> Deserialize<'de> for bool {
	#[inline]
	fn deserialize<D: Deserializer<'de>>(&mut self, deserializer: &mut D) {
		deserializer.deserialize_bool(self);
	}
}

impl Serialize for char {
	const CATEGORY: Category = Category::Char;

	#[inline]
	fn serialize<S: Serializer>(&self, serializer: &mut S) {
		serializer.serialize_char(*self);
	}
}

impl<'de> Deserialize<'de> for char {
	#[inline]
	fn deserialize<D: Deserializer<'de>>(&mut self, deserializer: &mut D) {
		deserializer.deserialize_char(self);
	}
}
