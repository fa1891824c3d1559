//! Model assembly: one accumulator per type declaration.
//!
//! Fields are pushed in declaration order; the first field carrying a
//! directive becomes its holder and a second one is an error. `finish`
//! freezes the accumulator into a `Model` after the pairing checks.

mod validate;

#[cfg(test)]
mod tests;

use crate::{
    annotation::Interpreter,
    declaration::TypeDeclaration,
    directive::Directive,
    error::SchemaError,
    node::{Field, Model},
};
use std::collections::BTreeMap;
use tracing::debug;

///
/// ModelBuilder
///

#[derive(Debug)]
pub struct ModelBuilder {
    type_name: String,
    holders: BTreeMap<Directive, Field>,
}

impl ModelBuilder {
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            holders: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Record `field` as holder of each directive it carries.
    pub fn push(&mut self, field: Field) -> Result<(), SchemaError> {
        // vocabulary order, so the first clash reported is the earliest kind
        for directive in Directive::ALL.into_iter().filter(|d| field.has(*d)) {
            if let Some(holder) = self.holders.get(&directive) {
                return Err(SchemaError::DuplicateDirective {
                    type_name: self.type_name.clone(),
                    directive,
                    field: field.name().to_string(),
                    holder: holder.name().to_string(),
                });
            }
        }

        for &directive in field.directives() {
            self.holders.insert(directive, field.clone());
        }

        Ok(())
    }

    /// Current holder of a directive.
    #[must_use]
    pub fn holder(&self, directive: Directive) -> Option<&Field> {
        self.holders.get(&directive)
    }

    /// Validate and freeze into a `Model`.
    pub fn finish(self) -> Result<Model, SchemaError> {
        validate::finish(self.type_name, self.holders)
    }
}

/// Interpret and validate a single type declaration.
pub fn build_model(
    interpreter: &Interpreter,
    decl: &TypeDeclaration,
) -> Result<Model, SchemaError> {
    let mut builder = ModelBuilder::new(&decl.name);

    for (position, field_decl) in decl.fields.iter().enumerate() {
        if let Some(field) = interpreter.interpret(&decl.name, position, field_decl)? {
            builder.push(field)?;
        }
    }

    let model = builder.finish()?;
    debug!(
        type_name = model.name(),
        indexes = model.active_indexes().count(),
        "model built"
    );

    Ok(model)
}

/// Build every declaration, stopping at the first failure.
///
/// Either every model comes back or none does.
pub fn build_models(
    interpreter: &Interpreter,
    decls: &[TypeDeclaration],
) -> Result<Vec<Model>, SchemaError> {
    decls
        .iter()
        .map(|decl| build_model(interpreter, decl))
        .collect()
}
