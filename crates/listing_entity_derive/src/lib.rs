use proc_macro::TokenStream;
use quote::quote;
use std::collections::HashSet;
use syn::{
    Expr, ExprLit, Fields, Ident, ItemStruct, Lit, Meta, Path, Token, parse_macro_input, parse_str,
    punctuated::Punctuated,
};

/// Options accepted by `#[listing_entity(...)]`.
struct ListingEntityArgs {
    traits_path: Path,
    searchable: Option<Ident>,
}

impl Default for ListingEntityArgs {
    fn default() -> Self {
        Self {
            traits_path: parse_str("crate::db::dao::base_traits")
                .expect("default traits path should parse"),
            searchable: None,
        }
    }
}

/// Adds the `id`, `created_at` and `updated_at` columns every directory
/// record carries and wires the model into the DAO traits.
///
/// `searchable = "name"` additionally wires name search. The struct must
/// then carry a `name_key` field holding the folded form of `name`.
#[proc_macro_attribute]
pub fn listing_entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr with Punctuated<Meta, Token![,]>::parse_terminated);
    let mut config = ListingEntityArgs::default();
    if let Err(err) = apply_args(&mut config, args) {
        return err.to_compile_error().into();
    }

    let mut input = parse_macro_input!(item as ItemStruct);
    let fields = match &mut input.fields {
        Fields::Named(fields) => fields,
        _ => {
            return syn::Error::new_spanned(
                input,
                "listing_entity requires a struct with named fields",
            )
            .to_compile_error()
            .into();
        }
    };

    let existing: HashSet<String> = fields
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref().map(|ident| ident.to_string()))
        .collect();

    for reserved in ["id", "created_at", "updated_at"] {
        if existing.contains(reserved) {
            return syn::Error::new_spanned(
                &input.ident,
                format!("listing_entity generates `{reserved}`; remove it from the struct"),
            )
            .to_compile_error()
            .into();
        }
    }

    if let Some(column) = config.searchable.as_ref()
        && !existing.contains(&column.to_string())
    {
        return syn::Error::new_spanned(
            column,
            format!("searchable column `{column}` is not a field of this model"),
        )
        .to_compile_error()
        .into();
    }

    if let Some(column) = config.searchable.as_ref() {
        let key = format!("{column}_key");
        if !existing.contains(&key) {
            return syn::Error::new_spanned(
                column,
                format!("searchable column `{column}` needs a `{key}` field holding its folded form"),
            )
            .to_compile_error()
            .into();
        }
    }

    let mut generated: Punctuated<syn::Field, Token![,]> = Punctuated::new();
    generated.push(syn::parse_quote! {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: uuid::Uuid
    });
    generated.push(syn::parse_quote! {
        #[sea_orm(default_expr = "Expr::current_timestamp()")]
        pub created_at: sea_orm::entity::prelude::DateTimeWithTimeZone
    });
    generated.push(syn::parse_quote! {
        #[sea_orm(default_expr = "Expr::current_timestamp()")]
        pub updated_at: sea_orm::entity::prelude::DateTimeWithTimeZone
    });
    generated.extend(fields.named.iter().cloned());
    fields.named = generated;

    let traits_path = config.traits_path;
    let search_impl = config.searchable.map(|column| {
        let variant = Ident::new(&upper_camel(&column.to_string()), column.span());
        let key_variant = Ident::new(&upper_camel(&format!("{column}_key")), column.span());
        quote! {
            impl #traits_path::HasNameColumn for Entity {
                fn name_column() -> Column {
                    Column::#variant
                }

                fn name_key_column() -> Column {
                    Column::#key_variant
                }
            }
        }
    });

    let expanded = quote! {
        #input

        impl #traits_path::HasIdActiveModel for ActiveModel {
            fn set_id(&mut self, id: uuid::Uuid) {
                self.id = sea_orm::ActiveValue::Set(id);
            }
        }

        impl #traits_path::TimestampedActiveModel for ActiveModel {
            fn set_created_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone) {
                self.created_at = sea_orm::ActiveValue::Set(ts);
            }

            fn set_updated_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone) {
                self.updated_at = sea_orm::ActiveValue::Set(ts);
            }
        }

        impl #traits_path::HasCreatedAtColumn for Entity {
            fn created_at_column() -> Column {
                Column::CreatedAt
            }
        }

        #search_impl
    };

    expanded.into()
}

fn apply_args(
    config: &mut ListingEntityArgs,
    args: Punctuated<Meta, Token![,]>,
) -> Result<(), syn::Error> {
    for meta in args {
        let Meta::NameValue(name_value) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "expected name-value pair, e.g. searchable = \"name\"",
            ));
        };

        let Some(ident) = name_value.path.get_ident() else {
            return Err(syn::Error::new_spanned(
                name_value.path,
                "expected simple identifier for attribute key",
            ));
        };

        let value = match name_value.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(lit_str),
                ..
            }) => lit_str,
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "expected string literal for attribute value",
                ));
            }
        };

        match ident.to_string().as_str() {
            "traits" => {
                config.traits_path = value.parse::<Path>().map_err(|err| {
                    syn::Error::new(value.span(), format!("invalid traits path: {err}"))
                })?;
            }
            "searchable" => {
                config.searchable = Some(Ident::new(&value.value(), value.span()));
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    ident,
                    "unknown listing_entity attribute key",
                ));
            }
        }
    }

    Ok(())
}

// sea-orm names `Column` variants after the field in UpperCamelCase.
fn upper_camel(field: &str) -> String {
    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
