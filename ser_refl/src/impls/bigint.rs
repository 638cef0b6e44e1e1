use num_bigint::{BigInt, BigUint};

use crate::{Category, Deserialize, Deserializer, Serialize, Serializer};

// Big integers have no fixed width, so they go through their decimal
// representation in both engines
macro_rules! impl_big_int {
	($ty:ty) => {
		impl Serialize for $ty {
			const CATEGORY: Category = Category::Custom;

			#[inline]
			fn serialize<S: Serializer>(&self, serializer: &mut S) {
				serializer.serialize_display(self);
			}
		}

		impl<'de> Deserialize<'de> for $ty {
			#[inline]
			fn deserialize<D: Deserializer<'de>>(&mut self, deserializer: &mut D) {
				deserializer.deserialize_from_str(self);
			}
		}
	};
}

impl_big_int!(BigUint);
impl_big_int!(BigInt);
