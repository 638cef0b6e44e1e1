use crate::{
	Category, Deserialize, Deserializer, FieldVisitor, FieldVisitorMut, ForEachField,
	ForEachFieldMut, Reflect, Serialize, Serializer,
};

// Elements are named by their index
macro_rules! impl_tuple {
	($($index:tt $ty:ident),+) => {
		impl<$($ty),+> Reflect for ($($ty,)+) {
			const TYPE_NAME: &'static str = "tuple";
			const FIELD_NAMES: &'static [&'static str] = &[$(stringify!($index)),+];
		}

		impl<$($ty: Serialize),+> ForEachField for ($($ty,)+) {
			#[inline]
			fn for_each_field<V: FieldVisitor>(&self, visitor: &mut V) {
				$(visitor.visit_field(stringify!($index), &self.$index);)+
			}
		}

		impl<'de, $($ty: Deserialize<'de>),+> ForEachFieldMut<'de> for ($($ty,)+) {
			#[inline]
			fn for_each_field_mut<V: FieldVisitorMut<'de>>(&mut self, visitor: &mut V) {
				$(visitor.visit_field(stringify!($index), &mut self.$index);)+
			}
		}

		impl<$($ty: Serialize),+> Serialize for ($($ty,)+) {
			const CATEGORY: Category = Category::Tuple;

			#[inline]
			fn serialize<S: Serializer>(&self, serializer: &mut S) {
				serializer.serialize_tuple(self);
			}
		}

		impl<'de, $($ty: Deserialize<'de>),+> Deserialize<'de> for ($($ty,)+) {
			#[inline]
			fn deserialize<__D: Deserializer<'de>>(&mut self, deserializer: &mut __D) {
				deserializer.deserialize_tuple(self);
			}
		}
	};
}

impl_tuple!(0 A);
impl_tuple!(0 A, 1 B);
impl_tuple!(0 A, 1 B, 2 C);
impl_tuple!(0 A, 1 B, 2 C, 3 D);
impl_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
impl_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I);
impl_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J);
impl_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K);
impl_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K, 11 L);
