use crate::{Category, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize + ?Sized> Serialize for &T {
	const CATEGORY: Category = T::CATEGORY;

	#[inline]
	fn serialize<S: Serializer>(&self, serializer: &mut S) {
		(**self).serialize(serializer);
	}
}

impl<T: Serialize + ?Sized> Serialize for Box<T> {
	const CATEGORY: Category = T::CATEGORY;

	#[inline]
	fn serialize<S: Serializer>(&self, serializer: &mut S) {
		(**self).serialize(serializer);
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Box<T> {
	#[inline]
	fn deserialize<D: Deserializer<'de>>(&mut self, deserializer: &mut D) {
		(**self).deserialize(deserializer);
	}
}

impl<T: Serialize> Serialize for [T] {
	const CATEGORY: Category = Category::sequence_of(T::CATEGORY);

	#[inline]
	fn serialize<S: Serializer>(&self, serializer: &mut S) {
		T::serialize_slice(self, serializer);
	}
}

impl<T: Serialize, const N: usize> Serialize for [T; N] {
	const CATEGORY: Category = Category::sequence_of(T::CATEGORY);

	#[inline]
	fn serialize<S: Serializer>(&self, serializer: &mut S) {
		T::serialize_slice(self, serializer);
	}
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for [T; N] {
	#[inline]
	fn deserialize<D: Deserializer<'de>>(&mut self, deserializer: &mut D) {
		T::deserialize_slice(self, deserializer);
	}
}

impl<T: Serialize> Serialize for Vec<T> {
	const CATEGORY: Category = Category::sequence_of(T::CATEGORY);

	#[inline]
	fn serialize<S: Serializer>(&self, serializer: &mut S) {
		T::serialize_slice(self, serializer);
	}
}

impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for Vec<T> {
	#[inline]
	fn deserialize<D: Deserializer<'de>>(&mut self, deserializer: &mut D) {
		T::deserialize_vec(self, deserializer);
	}
}

impl Serialize for str {
	const CATEGORY: Category = Category::String;

	#[inline]
	fn serialize<S: Serializer>(&self, serializer: &mut S) {
		serializer.serialize_str(self);
	}
}

impl Serialize for String {
	const CATEGORY: Category = Category::String;

	#[inline]
	fn serialize<S: Serializer>(&self, serializer: &mut S) {
		serializer.serialize_str(self);
	}
}

impl<'de> Deserialize<'de> for String {
	#[inline]
	fn deserialize<D: Deserializer<'de>>(&mut self, deserializer: &mut D) {
		deserializer.deserialize_string(self);
	}
}

// Borrows from input, so input must outlive the `&str`
impl<'de: 'a, 'a> Deserialize<'de> for &'a str {
	#[inline]
	fn deserialize<D: Deserializer<'de>>(&mut self, deserializer: &mut D) {
		if let Some(s) = deserializer.deserialize_str() {
			*self = s;
		}
	}
}
