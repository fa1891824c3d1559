//! Discovery: Rust source to raw `TypeDeclaration`s.
//!
//! Every top-level struct is a candidate; structs inside `mod` blocks
//! (test fixtures included) are left alone. Each outer attribute on a field becomes one raw annotation
//! token `path:contents` with whitespace removed, so `#[dbgen(id, gsi2h)]`
//! reads as `dbgen:id,gsi2h` and `#[dbgen = "id"]` as `dbgen:"id"`.

use crate::BuildError;
use dbgen_config::TypeConfig;
use dbgen_schema::declaration::{FieldDeclaration, TypeDeclaration, TypeDescriptor};
use quote::ToTokens;
use syn::{AttrStyle, Attribute, Fields, Generics, Ident, Item, Meta, Type, ext::IdentExt};
use tracing::debug;

/// Parse `source` and collect every candidate struct in source order.
pub fn discover(
    file_name: &str,
    source: &str,
    types: &TypeConfig,
) -> Result<Vec<TypeDeclaration>, BuildError> {
    let file = syn::parse_file(source).map_err(|source| BuildError::Parse {
        file: file_name.to_string(),
        source,
    })?;

    file.items
        .iter()
        .filter_map(|item| match item {
            Item::Struct(item) => Some(item),
            _ => None,
        })
        .map(|item| {
            reject_generics(file_name, &item.ident, &item.generics)?;

            Ok(declaration(&item.ident, &item.fields, types))
        })
        .collect()
}

// accessors are rendered as `impl Name`, which a generic type cannot take
fn reject_generics(file_name: &str, ident: &Ident, generics: &Generics) -> Result<(), BuildError> {
    if generics.params.is_empty() {
        Ok(())
    } else {
        Err(BuildError::Generic {
            file: file_name.to_string(),
            type_name: ident.unraw().to_string(),
        })
    }
}

/// Build the raw declaration for one struct.
#[must_use]
pub fn declaration(ident: &Ident, fields: &Fields, types: &TypeConfig) -> TypeDeclaration {
    let name = ident.unraw().to_string();
    let fields = fields
        .iter()
        .map(|field| FieldDeclaration {
            names: field.ident.iter().map(|i| i.unraw().to_string()).collect(),
            ty: descriptor(&field.ty, types),
            annotations: field.attrs.iter().filter_map(annotation_token).collect(),
        })
        .collect::<Vec<_>>();

    debug!(type_name = %name, fields = fields.len(), "discovered type");

    TypeDeclaration { name, fields }
}

fn descriptor(ty: &Type, types: &TypeConfig) -> TypeDescriptor {
    TypeDescriptor {
        text: ty.to_token_stream().to_string(),
        timestamp: type_path(ty).is_some_and(|path| types.is_timestamp(&path)),
    }
}

/// `a::b::C<T>` as `a::b::C`; `None` for anything but a plain path type.
#[must_use]
pub fn type_path(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(path) if path.qself.is_none() => Some(
            path.path
                .segments
                .iter()
                .map(|segment| segment.ident.to_string())
                .collect::<Vec<_>>()
                .join("::"),
        ),
        Type::Group(group) => type_path(&group.elem),
        Type::Paren(paren) => type_path(&paren.elem),
        _ => None,
    }
}

/// One raw token per outer attribute; inner attributes carry no field meaning.
#[must_use]
pub fn annotation_token(attr: &Attribute) -> Option<String> {
    if !matches!(attr.style, AttrStyle::Outer) {
        return None;
    }

    let path = attr.path().to_token_stream().to_string();
    let contents = match &attr.meta {
        Meta::Path(_) => String::new(),
        Meta::List(list) => list.tokens.to_string(),
        Meta::NameValue(nv) => nv.value.to_token_stream().to_string(),
    };

    Some(format!("{}:{}", strip_whitespace(&path), strip_whitespace(&contents)))
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

///
/// TESTS
///
