use proc_macro2::TokenStream;
use syn::{parse_macro_input, Data, DeriveInput};

mod structs;
use structs::derive_struct;

/// Derive reflection descriptor and `Serialize` / `Deserialize` impls.
///
/// Structs with named fields are records. Tuple structs are tuples.
/// Unit structs are records with no fields.
///
/// Field attributes:
///
/// * `#[reflect(rename = "name")]` - use `name` in place of field's name.
/// * `#[reflect(skip)]` - omit field. It is not serialized, and is left
///   untouched when deserializing.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn reflect(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	reflect_impl(input).into()
}

fn reflect_impl(input: DeriveInput) -> TokenStream {
	match input.data {
		Data::Struct(data) => derive_struct(data, input.ident, input.generics),
		Data::Enum(_) => panic!("Deriving `Reflect` on enums not supported"),
		Data::Union(_) => panic!("Deriving `Reflect` on unions not supported"),
	}
}
