use crate::BuildError;
use dbgen_schema::{
    key::{HashKey, KEY_SEPARATOR, SortKey, TIMESTAMP_LAYOUT},
    node::Model,
};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Ident;

/// Header written above every rendered model.
pub const GENERATED_HEADER: &str = "// Code generated by dbgen. DO NOT EDIT.\n";

/// Render the key accessor impl for one validated model.
///
/// Non-temporal key values go through `ToString`; temporal sort keys are
/// formatted with `TIMESTAMP_LAYOUT` and so need a chrono-style `format`.
pub fn render(model: &Model) -> Result<TokenStream, BuildError> {
    let ty = ident(model, model.name())?;
    let entity_type = model.entity_type();
    let id = ident(model, model.id_field_name())?;

    let mut accessors = quote!();
    for (index, hash, sort) in model.index_keys() {
        let n = index.number();

        let hash_fn = format_ident!("gsi{n}_hash_key");
        let sort_fn = format_ident!("gsi{n}_sort_key");
        let hash_expr = hash_expr(model, &hash)?;
        let sort_expr = sort_expr(model, &sort)?;
        let hash_doc = format!(" Hash key of `gsi{n}`.");
        let sort_doc = format!(" Sort key of `gsi{n}`.");

        accessors.extend(quote! {
            #[doc = #hash_doc]
            #[must_use]
            pub fn #hash_fn(&self) -> ::std::string::String {
                #hash_expr
            }

            #[doc = #sort_doc]
            #[must_use]
            pub fn #sort_fn(&self) -> ::std::string::String {
                #sort_expr
            }
        });
    }

    Ok(quote! {
        #[automatically_derived]
        impl #ty {
            /// Entity discriminator shared by every key of this type.
            pub const ENTITY_TYPE: &'static str = #entity_type;

            #[must_use]
            pub const fn entity_type(&self) -> &'static str {
                Self::ENTITY_TYPE
            }

            /// Primary key value.
            #[must_use]
            pub fn primary_key(&self) -> ::std::string::String {
                ::std::string::ToString::to_string(&self.#id)
            }

            #accessors
        }
    })
}

fn hash_expr(model: &Model, hash: &HashKey) -> Result<TokenStream, BuildError> {
    Ok(match hash {
        HashKey::Discriminator { .. } => quote! {
            ::std::string::ToString::to_string(Self::ENTITY_TYPE)
        },
        HashKey::Namespaced { field, .. } => {
            let field = ident(model, field)?;
            let template = format!("{{}}{KEY_SEPARATOR}{{}}");

            quote! {
                ::std::format!(#template, Self::ENTITY_TYPE, self.#field)
            }
        }
    })
}

fn sort_expr(model: &Model, sort: &SortKey) -> Result<TokenStream, BuildError> {
    let field = ident(model, &sort.field)?;

    Ok(if sort.temporal {
        quote! {
            ::std::string::ToString::to_string(&self.#field.format(#TIMESTAMP_LAYOUT))
        }
    } else {
        quote! {
            ::std::string::ToString::to_string(&self.#field)
        }
    })
}

// keywords come back as raw identifiers
fn ident(model: &Model, name: &str) -> Result<Ident, BuildError> {
    syn::parse_str::<Ident>(name)
        .or_else(|_| syn::parse_str::<Ident>(&format!("r#{name}")))
        .map_err(|_| BuildError::Ident {
            type_name: model.name().to_string(),
            name: name.to_string(),
        })
}

///
/// TESTS
///
