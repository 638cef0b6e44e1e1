// Shape based on https://github.com/djkoloski/rust_serialization_benchmark

use std::{array, ops};

use rand::Rng;
use rand_pcg::Lcg64Xsh32;
use ser_refl::Reflect;

#[derive(Reflect, Clone, Default, Debug, PartialEq)]
pub struct Item {
	pub count: i8,
	pub slot: u8,
	pub id: String,
}

impl Generate for Item {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		const IDS: [&str; 8] = [
			"dirt",
			"stone",
			"pickaxe",
			"sand",
			"gravel",
			"shovel",
			"chestplate",
			"steak",
		];
		Self {
			count: rng.gen(),
			slot: rng.gen(),
			id: IDS[rng.gen_range(0..IDS.len())].to_string(),
		}
	}
}

#[derive(Reflect, Clone, Copy, Default, Debug, PartialEq)]
pub struct Abilities {
	pub walk_speed: f32,
	pub fly_speed: f32,
	pub may_fly: bool,
	pub flying: bool,
	pub invulnerable: bool,
	pub may_build: bool,
	pub instabuild: bool,
}

impl Generate for Abilities {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		Self {
			walk_speed: f32::generate(rng),
			fly_speed: f32::generate(rng),
			may_fly: rng.gen_bool(0.5),
			flying: rng.gen_bool(0.5),
			invulnerable: rng.gen_bool(0.5),
			may_build: rng.gen_bool(0.5),
			instabuild: rng.gen_bool(0.5),
		}
	}
}

#[derive(Reflect, Clone, Default, Debug, PartialEq)]
pub struct Entity {
	pub id: String,
	pub pos: (f64, f64, f64),
	pub motion: (f64, f64, f64),
	pub rotation: (f32, f32),
	pub fall_distance: f32,
	pub fire: u16,
	pub air: u16,
	pub on_ground: bool,
	pub no_gravity: bool,
	pub invulnerable: bool,
	pub portal_cooldown: i32,
	pub uuid: [u32; 4],
	/// Empty if entity has no custom name
	pub custom_name: String,
	pub custom_name_visible: bool,
	pub silent: bool,
	pub glowing: bool,
}

impl Generate for Entity {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		const IDS: [&str; 8] = [
			"cow", "sheep", "zombie", "skeleton", "spider", "creeper", "parrot", "bee",
		];
		const CUSTOM_NAMES: [&str; 8] = [
			"rainbow", "princess", "steve", "johnny", "missy", "coward", "fairy", "howard",
		];

		Self {
			id: IDS[rng.gen_range(0..IDS.len())].to_string(),
			pos: <(f64, f64, f64) as Generate>::generate(rng),
			motion: <(f64, f64, f64) as Generate>::generate(rng),
			rotation: <(f32, f32) as Generate>::generate(rng),
			fall_distance: f32::generate(rng),
			fire: rng.gen(),
			air: rng.gen(),
			on_ground: rng.gen_bool(0.5),
			no_gravity: rng.gen_bool(0.5),
			invulnerable: rng.gen_bool(0.5),
			portal_cooldown: rng.gen(),
			uuid: <[u32; 4] as Generate>::generate(rng),
			custom_name: if rng.gen_bool(0.5) {
				CUSTOM_NAMES[rng.gen_range(0..CUSTOM_NAMES.len())].to_string()
			} else {
				String::new()
			},
			custom_name_visible: rng.gen_bool(0.5),
			silent: rng.gen_bool(0.5),
			glowing: rng.gen_bool(0.5),
		}
	}
}

#[derive(Reflect, Clone, Default, Debug, PartialEq)]
pub struct RecipeBook {
	pub recipes: Vec<String>,
	pub to_be_displayed: Vec<String>,
	pub is_filtering_craftable: bool,
	pub is_gui_open: bool,
	pub is_furnace_filtering_craftable: bool,
	pub is_furnace_gui_open: bool,
}

impl Generate for RecipeBook {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		const RECIPES: [&str; 8] = [
			"pickaxe",
			"torch",
			"bow",
			"crafting table",
			"furnace",
			"shears",
			"arrow",
			"tnt",
		];
		const MAX_RECIPES: usize = 30;
		const MAX_DISPLAYED_RECIPES: usize = 10;
		Self {
			recipes: generate_vec::<_, ()>(rng, 0..MAX_RECIPES)
				.iter()
				.map(|_| RECIPES[rng.gen_range(0..RECIPES.len())].to_string())
				.collect(),
			to_be_displayed: generate_vec::<_, ()>(rng, 0..MAX_DISPLAYED_RECIPES)
				.iter()
				.map(|_| RECIPES[rng.gen_range(0..RECIPES.len())].to_string())
				.collect(),
			is_filtering_craftable: rng.gen_bool(0.5),
			is_gui_open: rng.gen_bool(0.5),
			is_furnace_filtering_craftable: rng.gen_bool(0.5),
			is_furnace_gui_open: rng.gen_bool(0.5),
		}
	}
}

#[derive(Reflect, Clone, Default, Debug, PartialEq)]
pub struct Player {
	pub game_type: u8,
	pub previous_game_type: u8,
	pub score: i64,
	pub dimension: String,
	pub selected_item_slot: u32,
	pub selected_item: Item,
	pub spawn_x: i64,
	pub spawn_y: i64,
	pub spawn_z: i64,
	pub sleep_timer: u16,
	pub food_exhaustion_level: f32,
	pub food_saturation_level: f32,
	pub xp_level: u32,
	pub xp_p: f32,
	pub xp_total: i32,
	pub xp_seed: i128,
	pub inventory: Vec<Item>,
	pub ender_items: Vec<Item>,
	pub abilities: Abilities,
	pub root_vehicle: ([u32; 4], Entity),
	/// Zero, one or two entities
	pub shoulder_entities: Vec<Entity>,
	pub seen_credits: bool,
	pub recipe_book: RecipeBook,
}

impl Generate for Player {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		const DIMENSIONS: [&str; 3] = ["overworld", "nether", "end"];
		const GAME_TYPES: u8 = 4;
		const MAX_ITEMS: usize = 40;
		const MAX_ENDER_ITEMS: usize = 27;
		Self {
			game_type: rng.gen_range(0..GAME_TYPES),
			previous_game_type: rng.gen_range(0..GAME_TYPES),
			score: rng.gen(),
			dimension: DIMENSIONS[rng.gen_range(0..DIMENSIONS.len())].to_string(),
			selected_item_slot: rng.gen(),
			selected_item: Item::generate(rng),
			spawn_x: rng.gen(),
			spawn_y: rng.gen(),
			spawn_z: rng.gen(),
			sleep_timer: rng.gen(),
			food_exhaustion_level: f32::generate(rng),
			food_saturation_level: f32::generate(rng),
			xp_level: rng.gen(),
			xp_p: f32::generate(rng),
			xp_total: rng.gen(),
			xp_seed: rng.gen(),
			inventory: generate_vec(rng, 0..MAX_ITEMS),
			ender_items: generate_vec(rng, 0..MAX_ENDER_ITEMS),
			abilities: Abilities::generate(rng),
			root_vehicle: <([u32; 4], Entity) as Generate>::generate(rng),
			shoulder_entities: generate_vec(rng, 0..3),
			seen_credits: rng.gen_bool(0.5),
			recipe_book: RecipeBook::generate(rng),
		}
	}
}

#[derive(Reflect, Clone, Default, Debug, PartialEq)]
pub struct Players {
	pub players: Vec<Player>,
}

pub trait Generate {
	fn generate<R: Rng>(rng: &mut R) -> Self;
}

impl Generate for () {
	fn generate<R: Rng>(_: &mut R) -> Self {}
}

macro_rules! impl_generate {
	($ty:ty) => {
		impl Generate for $ty {
			fn generate<R: Rng>(rng: &mut R) -> Self {
				rng.gen()
			}
		}
	};
}

impl_generate!(u8);
impl_generate!(u16);
impl_generate!(u32);
impl_generate!(u64);
impl_generate!(i32);
impl_generate!(i64);

// Floats are multiples of a power of 2 with few significant digits,
// so text output reproduces them exactly
macro_rules! impl_generate_float {
	($ty:ty, $divisor:literal) => {
		impl Generate for $ty {
			fn generate<R: Rng>(rng: &mut R) -> Self {
				rng.gen_range(-4000i32..4000) as $ty / $divisor
			}
		}
	};
}

impl_generate_float!(f32, 4.0);
impl_generate_float!(f64, 8.0);

macro_rules! impl_tuple {
	() => {};
	($first:ident, $($rest:ident,)*) => {
		impl<$first: Generate, $($rest: Generate,)*> Generate for ($first, $($rest,)*) {
			fn generate<R: Rng>(rng: &mut R) -> Self {
				($first::generate(rng), $($rest::generate(rng),)*)
			}
		}

		impl_tuple!($($rest,)*);
	};
}

impl_tuple!(T0, T1, T2,);

impl<T: Generate, const N: usize> Generate for [T; N] {
	fn generate<R: Rng>(rng: &mut R) -> Self {
		array::from_fn(|_| T::generate(rng))
	}
}

fn generate_vec<R: Rng, T: Generate>(rng: &mut R, range: ops::Range<usize>) -> Vec<T> {
	let len = rng.gen_range(range);
	let mut result = Vec::with_capacity(len);
	for _ in 0..len {
		result.push(T::generate(rng));
	}
	result
}

pub fn generate_data() -> Players {
	const STATE: u64 = 3141592653;
	const STREAM: u64 = 5897932384;

	let mut rng = Lcg64Xsh32::new(STATE, STREAM);

	const PLAYERS: usize = 100;
	Players {
		players: generate_vec::<_, Player>(&mut rng, PLAYERS..PLAYERS + 1),
	}
}
