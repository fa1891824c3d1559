//! `#[derive(KeySchema)]`: compile-time validation of `#[dbgen(...)]` keys.
//!
//! The derive registers the `dbgen` helper attribute and checks the type's
//! key schema while compiling. It emits nothing on success; the accessors
//! come from `dbgen_build::build!` or the `dbgen` binary.

use proc_macro::TokenStream;

mod key_schema;

#[proc_macro_derive(KeySchema, attributes(dbgen))]
pub fn derive_key_schema(input: TokenStream) -> TokenStream {
    key_schema::derive_key_schema(input.into()).into()
}
