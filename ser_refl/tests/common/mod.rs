mod game_data;
pub use game_data::generate_data as generate_game_data;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Test {
	Primitives,
	Arrays,
	Tuples,
	BoxedValues,
	NestedStructs,
	VecOfPrimitives,
	VecOfVecs,
	VecOfStructs,
	Strings,
	Chars,
	TupleStruct,
	UnitStruct,
	RenamedField,
	GenericStruct,
	BigInts,
	GameData,
}

macro_rules! tests {
	($test_round_trip:ident) => {
		#[test]
		fn primitives() {
			#[derive(Reflect, Default, Debug, PartialEq)]
			struct Foo {
				u8: u8,
				u16: u16,
				u32: u32,
				u64: u64,
				u128: u128,
				i8: i8,
				i16: i16,
				i32: i32,
				i64: i64,
				i128: i128,
				f32: f32,
				f64: f64,
				bool: bool,
				char: char,
			}

			let input = Foo {
				u8: 0x01,
				u16: 0x0203,
				u32: 0x04050607,
				u64: 0x08090a0b0c0d0e0f,
				u128: 0x101112131415161718191a1b1c1d1e1f,
				i8: -0x01,
				i16: -0x0203,
				i32: i32::MIN,
				i64: i64::MAX,
				i128: -0x101112131415161718191a1b1c1d1e1f,
				f32: -12.75,
				f64: 0.1,
				bool: true,
				char: 'c',
			};
			$test_round_trip(&input, Test::Primitives, 0);
		}

		#[test]
		fn arrays() {
			#[derive(Reflect, Default, Debug, PartialEq)]
			struct Foo {
				empty: [u8; 0],
				single: [u8; 1],
				double: [u16; 2],
				triple: [u32; 3],
			}

			let input = Foo {
				empty: [],
				single: [0x01],
				double: [0x0203, 0x0405],
				triple: [0x06070809, 0x0a0b0c0d, 0x0e0f1011],
			};
			$test_round_trip(&input, Test::Arrays, 0);
		}

		#[test]
		fn tuples() {
			#[derive(Reflect, Default, Debug, PartialEq)]
			struct Foo {
				one: (u8,),
				two: (u16, u32),
				three: (bool, char, String),
				nested: ((u8, i8), (String,)),
			}

			let input = Foo {
				one: (1,),
				two: (2, 3),
				three: (false, 'x', "abc".to_string()),
				nested: ((4, -5), ("xy".to_string(),)),
			};
			$test_round_trip(&input, Test::Tuples, 0);
		}

		#[test]
		fn boxed_values() {
			#[derive(Reflect, Default, Debug, PartialEq)]
			struct Foo {
				num: Box<u32>,
				str: Box<String>,
				array: Box<[u8; 2]>,
			}

			let input = Foo {
				num: Box::new(0x01020304),
				str: Box::new("hello".to_string()),
				array: Box::new([5, 6]),
			};
			$test_round_trip(&input, Test::BoxedValues, 0);
		}

		#[test]
		fn nested_structs() {
			#[derive(Reflect, Default, Debug, PartialEq)]
			struct Inner {
				a: u8,
				b: bool,
			}

			#[derive(Reflect, Default, Debug, PartialEq)]
			struct Outer {
				id: u16,
				inner: Inner,
				tail: i64,
			}

			let input = Outer {
				id: 100,
				inner: Inner { a: 7, b: true },
				tail: -1,
			};
			$test_round_trip(&input, Test::NestedStructs, 0);
		}

		#[test]
		fn vec_of_primitives() {
			#[derive(Reflect, Default, Debug, PartialEq)]
			struct Foo {
				vec: Vec<u32>,
			}

			let inputs = [vec![], vec![7], vec![1, 2, 3, 4, 5]];
			for (test_num, vec) in inputs.into_iter().enumerate() {
				$test_round_trip(&Foo { vec }, Test::VecOfPrimitives, test_num);
			}
		}

		#[test]
		fn vec_of_vecs() {
			#[derive(Reflect, Default, Debug, PartialEq)]
			struct Foo {
				vecs: Vec<Vec<u16>>,
			}

			let input = Foo {
				vecs: vec![vec![], vec![1], vec![2, 3]],
			};
			$test_round_trip(&input, Test::VecOfVecs, 0);
		}

		#[test]
		fn vec_of_structs() {
			#[derive(Reflect, Default, Debug, PartialEq)]
			struct Point {
				x: i32,
				y: i32,
			}

			#[derive(Reflect, Default, Debug, PartialEq)]
			struct Line {
				points: Vec<Point>,
			}

			let input = Line {
				points: vec![
					Point { x: 1, y: 2 },
					Point { x: -3, y: 4 },
					Point { x: 5, y: -6 },
				],
			};
			$test_round_trip(&input, Test::VecOfStructs, 0);
		}

		#[test]
		fn strings() {
			#[derive(Reflect, Default, Debug, PartialEq)]
			struct Foo {
				empty: String,
				single: String,
				words: String,
				unicode: String,
			}

			let input = Foo {
				empty: String::new(),
				single: "a".to_string(),
				words: "hello world".to_string(),
				unicode: "héllo".to_string(),
			};
			$test_round_trip(&input, Test::Strings, 0);
		}

		#[test]
		fn chars() {
			#[derive(Reflect, Default, Debug, PartialEq)]
			struct Foo {
				ascii: char,
				accented: char,
				symbol: char,
			}

			let input = Foo {
				ascii: 'a',
				accented: 'é',
				symbol: '∑',
			};
			$test_round_trip(&input, Test::Chars, 0);
		}

		#[test]
		fn tuple_struct() {
			#[derive(Reflect, Default, Debug, PartialEq)]
			struct Pair(u32, String);

			#[derive(Reflect, Default, Debug, PartialEq)]
			struct Foo {
				pair: Pair,
			}

			let input = Foo {
				pair: Pair(7, "seven".to_string()),
			};
			$test_round_trip(&input, Test::TupleStruct, 0);
		}

		#[test]
		fn unit_struct() {
			#[derive(Reflect, Default, Debug, PartialEq)]
			struct Marker;

			#[derive(Reflect, Default, Debug, PartialEq)]
			struct Foo {
				marker: Marker,
				value: u8,
			}

			let input = Foo {
				marker: Marker,
				value: 1,
			};
			$test_round_trip(&input, Test::UnitStruct, 0);
		}

		#[test]
		fn renamed_field() {
			#[derive(Reflect, Default, Debug, PartialEq)]
			struct Foo {
				#[reflect(rename = "type")]
				kind: u8,
				#[reflect(skip)]
				cache: usize,
				name: String,
			}

			let input = Foo {
				kind: 3,
				cache: 0,
				name: "abc".to_string(),
			};
			$test_round_trip(&input, Test::RenamedField, 0);
		}

		#[test]
		fn generic_struct() {
			#[derive(Reflect, Default, Debug, PartialEq)]
			struct Wrapper<T> {
				value: T,
				list: Vec<T>,
			}

			let input = Wrapper::<u16> {
				value: 1,
				list: vec![2, 3],
			};
			$test_round_trip(&input, Test::GenericStruct, 0);
		}

		#[test]
		fn big_ints() {
			use num_bigint::{BigInt, BigUint};

			#[derive(Reflect, Default, Debug, PartialEq)]
			struct Foo {
				small: BigUint,
				negative: BigInt,
			}

			let input = Foo {
				small: BigUint::from(123u32),
				negative: "-98765432109876543210".parse().unwrap(),
			};
			$test_round_trip(&input, Test::BigInts, 0);
		}

		#[test]
		fn game_data() {
			let input = generate_game_data();
			$test_round_trip(&input, Test::GameData, 0);
		}
	};
}

pub(crate) use tests;
