use dbgen_build::{
    config::TypeConfig,
    discover::declaration,
    schema::{annotation::Interpreter, build::build_model, error::SchemaError},
};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Data, DeriveInput, Error, Fields, ext::IdentExt};

// derive_key_schema
pub fn derive_key_schema(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match check(&input) {
        Ok(()) => quote!(),
        Err(err) => err.to_compile_error(),
    }
}

fn check(input: &DeriveInput) -> Result<(), Error> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(
            &input.ident,
            "KeySchema can only be derived for structs",
        ));
    };
    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "KeySchema cannot be derived for generic types",
        ));
    }

    let decl = declaration(&input.ident, &data.fields, &TypeConfig::default());

    build_model(&Interpreter::default(), &decl)
        .map(|_| ())
        .map_err(|err| Error::new_spanned(culprit(input, &data.fields, &err), err.to_string()))
}

// the field the error is about, falling back to the type name
fn culprit(input: &DeriveInput, fields: &Fields, err: &SchemaError) -> TokenStream {
    let field = match err {
        SchemaError::FieldShape { position, .. } => fields.iter().nth(*position),
        SchemaError::DuplicateDirective { field, .. } => fields
            .iter()
            .find(|f| f.ident.as_ref().is_some_and(|i| i.unraw() == field)),
        SchemaError::MissingId { .. } | SchemaError::DanglingHash { .. } => None,
    };

    field.map_or_else(
        || input.ident.to_token_stream(),
        ToTokens::to_token_stream,
    )
}

///
/// TESTS
///
