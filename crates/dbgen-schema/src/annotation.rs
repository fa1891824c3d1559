//! Annotation interpreter: raw field tokens to a `Field`.
//!
//! A token is recognised when it reads `<namespace>:<value>[,<value>...]`.
//! Values are compared case-sensitively once surrounding `"` are trimmed.
//! Unrecognised tokens and unknown values are tolerated and dropped.

use crate::{
    TAG_KEY,
    declaration::FieldDeclaration,
    directive::{Directive, DirectiveSet},
    error::SchemaError,
    node::Field,
};
use tracing::debug;

/// Value that removes a field from the key schema altogether.
pub const IGNORE: &str = "ignore";

///
/// Interpreter
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Interpreter {
    namespace: String,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(TAG_KEY)
    }
}

impl Interpreter {
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Interpret one field of `type_name`.
    ///
    /// Returns `Ok(None)` for an ignored field. `position` is the zero-based
    /// field index and only feeds error context.
    pub fn interpret(
        &self,
        type_name: &str,
        position: usize,
        decl: &FieldDeclaration,
    ) -> Result<Option<Field>, SchemaError> {
        let [name] = decl.names.as_slice() else {
            return Err(SchemaError::FieldShape {
                type_name: type_name.to_string(),
                position,
                names: decl.names.len(),
            });
        };

        // ignore wins before any directive is looked at
        if self.values(&decl.annotations).any(|value| value == IGNORE) {
            debug!(type_name, field = %name, "field ignored");
            return Ok(None);
        }

        let mut directives = DirectiveSet::new();
        for value in self.values(&decl.annotations) {
            match value.parse::<Directive>() {
                Ok(directive) => {
                    directives.insert(directive);
                }
                Err(_) => debug!(type_name, field = %name, value, "unknown annotation value"),
            }
        }

        Ok(Some(Field::new(name.clone(), directives, decl.ty.timestamp)))
    }

    // every value of every recognised token, in source order
    fn values<'a>(&'a self, tokens: &'a [String]) -> impl Iterator<Item = &'a str> + 'a {
        tokens
            .iter()
            .filter_map(|token| self.token_values(token))
            .flat_map(|values| values.split(',').map(|v| v.trim_matches('"')))
    }

    fn token_values<'a>(&self, token: &'a str) -> Option<&'a str> {
        let mut parts = token.split(':');
        let key = parts.next()?;
        let values = parts.next()?;

        (key == self.namespace).then_some(values)
    }
}

///
/// TESTS
///
