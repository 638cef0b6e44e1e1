use std::collections::HashSet;

use proc_macro2::{Span, TokenStream, TokenTree};
use quote::{quote, ToTokens};
use syn::{
	parse_quote, DataStruct, Field, Fields, GenericParam, Generics, Ident, Index, Lifetime,
	LifetimeDef, Lit, Meta, MetaNameValue, NestedMeta, Type,
};

/// Field which is visited by reflection
struct VisitedField {
	/// Name passed to visitor
	name: String,
	/// `self.#accessor`
	accessor: TokenStream,
	ty: Type,
}

pub fn derive_struct(data: DataStruct, ident: Ident, generics: Generics) -> TokenStream {
	let is_tuple = matches!(data.fields, Fields::Unnamed(_));
	let (fields, category) = match data.fields {
		Fields::Named(fields) => (
			get_visited_fields(fields.named.into_iter().enumerate()),
			quote!(::ser_refl::Category::Record),
		),
		Fields::Unnamed(fields) => (
			get_visited_fields(fields.unnamed.into_iter().enumerate()),
			quote!(::ser_refl::Category::Tuple),
		),
		Fields::Unit => (vec![], quote!(::ser_refl::Category::Record)),
	};

	let type_name = ident.to_string();
	let names: Vec<&str> = fields.iter().map(|field| field.name.as_str()).collect();
	let accessors: Vec<&TokenStream> = fields.iter().map(|field| &field.accessor).collect();

	// Only field types which involve a type param need a bound.
	// Bounding other types is redundant, and would overflow for recursive types.
	let type_params: HashSet<String> = generics
		.type_params()
		.map(|param| param.ident.to_string())
		.collect();
	let bounded_types: Vec<&Type> = fields
		.iter()
		.map(|field| &field.ty)
		.filter(|ty| uses_type_params(ty.to_token_stream(), &type_params))
		.collect();

	let mut ser_generics = generics.clone();
	{
		let where_clause = ser_generics.make_where_clause();
		for ty in &bounded_types {
			where_clause
				.predicates
				.push(parse_quote!(#ty: ::ser_refl::Serialize));
		}
	}

	let de_lifetime = Lifetime::new("'__de", Span::call_site());
	let mut de_generics = generics.clone();
	{
		// `'__de` must outlive all the struct's lifetimes, so fields can borrow from input
		let mut de_lifetime_def = LifetimeDef::new(de_lifetime.clone());
		de_lifetime_def
			.bounds
			.extend(generics.lifetimes().map(|def| def.lifetime.clone()));
		de_generics
			.params
			.insert(0, GenericParam::Lifetime(de_lifetime_def));

		let where_clause = de_generics.make_where_clause();
		for ty in &bounded_types {
			where_clause
				.predicates
				.push(parse_quote!(#ty: ::ser_refl::Deserialize<#de_lifetime>));
		}
	}

	let (plain_impl_generics, type_generics, plain_where_clause) = generics.split_for_impl();
	let (ser_impl_generics, _, ser_where_clause) = ser_generics.split_for_impl();
	let (de_impl_generics, _, de_where_clause) = de_generics.split_for_impl();

	let (serialize_method, deserialize_method) = if is_tuple {
		(quote!(serialize_tuple), quote!(deserialize_tuple))
	} else {
		(quote!(serialize_record), quote!(deserialize_record))
	};

	quote! {
		#[automatically_derived]
		impl #plain_impl_generics ::ser_refl::Reflect for #ident #type_generics #plain_where_clause {
			const TYPE_NAME: &'static str = #type_name;
			const FIELD_NAMES: &'static [&'static str] = &[#(#names),*];
		}

		#[automatically_derived]
		impl #ser_impl_generics ::ser_refl::ForEachField for #ident #type_generics #ser_where_clause {
			#[allow(unused_variables)]
			fn for_each_field<__V: ::ser_refl::FieldVisitor>(&self, visitor: &mut __V) {
				#(visitor.visit_field(#names, &self.#accessors);)*
			}
		}

		#[automatically_derived]
		impl #de_impl_generics ::ser_refl::ForEachFieldMut<#de_lifetime> for #ident #type_generics #de_where_clause {
			#[allow(unused_variables)]
			fn for_each_field_mut<__V: ::ser_refl::FieldVisitorMut<#de_lifetime>>(&mut self, visitor: &mut __V) {
				#(visitor.visit_field(#names, &mut self.#accessors);)*
			}
		}

		#[automatically_derived]
		impl #ser_impl_generics ::ser_refl::Serialize for #ident #type_generics #ser_where_clause {
			const CATEGORY: ::ser_refl::Category = #category;

			#[inline]
			fn serialize<__S: ::ser_refl::Serializer>(&self, serializer: &mut __S) {
				serializer.#serialize_method(self);
			}
		}

		#[automatically_derived]
		impl #de_impl_generics ::ser_refl::Deserialize<#de_lifetime> for #ident #type_generics #de_where_clause {
			#[inline]
			fn deserialize<__D: ::ser_refl::Deserializer<#de_lifetime>>(&mut self, deserializer: &mut __D) {
				deserializer.#deserialize_method(self);
			}
		}
	}
}

fn get_visited_fields(fields: impl Iterator<Item = (usize, Field)>) -> Vec<VisitedField> {
	fields
		.filter_map(|(index, field)| {
			let options = get_field_options(&field);
			if options.skip {
				return None;
			}

			let (default_name, accessor) = match &field.ident {
				Some(ident) => (ident.to_string(), quote!(#ident)),
				None => {
					let index = Index::from(index);
					(index.index.to_string(), quote!(#index))
				}
			};
			// Raw identifiers are printed without `r#`
			let default_name = default_name
				.strip_prefix("r#")
				.map(str::to_string)
				.unwrap_or(default_name);

			Some(VisitedField {
				name: options.rename.unwrap_or(default_name),
				accessor,
				ty: field.ty,
			})
		})
		.collect()
}

#[derive(Default)]
struct FieldOptions {
	rename: Option<String>,
	skip: bool,
}

fn get_field_options(field: &Field) -> FieldOptions {
	let mut options = FieldOptions::default();

	let metas = field
		.attrs
		.iter()
		.filter(|attr| attr.path.is_ident("reflect"))
		.map(|attr| attr.parse_meta().expect("Malformed `#[reflect]` attribute"));

	for meta in metas {
		let nested = match meta {
			Meta::List(list) => list.nested,
			_ => panic!("`#[reflect]` needs options e.g. `#[reflect(skip)]`"),
		};

		for item in nested {
			match item {
				NestedMeta::Meta(Meta::Path(path)) if path.is_ident("skip") => {
					options.skip = true;
				}
				NestedMeta::Meta(Meta::NameValue(MetaNameValue {
					path,
					lit: Lit::Str(name),
					..
				})) if path.is_ident("rename") => {
					if options.rename.is_some() {
						panic!("Cannot have more than 1 `rename` option on a field");
					}
					options.rename = Some(name.value());
				}
				_ => panic!("Unknown `#[reflect]` option. Expected `skip` or `rename = \"...\"`"),
			}
		}
	}

	options
}

/// Check if a type mentions any of `type_params`.
fn uses_type_params(tokens: TokenStream, type_params: &HashSet<String>) -> bool {
	if type_params.is_empty() {
		return false;
	}
	tokens.into_iter().any(|token| match token {
		TokenTree::Ident(ident) => type_params.contains(&ident.to_string()),
		TokenTree::Group(group) => uses_type_params(group.stream(), type_params),
		_ => false,
	})
}
