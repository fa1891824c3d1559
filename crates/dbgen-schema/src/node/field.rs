use crate::directive::{Directive, DirectiveSet};
use serde::Serialize;
use std::ops::Not;

///
/// Field
///
/// A field that survived interpretation: its name, the directives it holds
/// and whether its declared type is a timestamp.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Field {
    name: String,

    #[serde(skip_serializing_if = "DirectiveSet::is_empty")]
    directives: DirectiveSet,

    #[serde(skip_serializing_if = "Not::not")]
    temporal: bool,
}

impl Field {
    #[must_use]
    pub const fn new(name: String, directives: DirectiveSet, temporal: bool) -> Self {
        Self {
            name,
            directives,
            temporal,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn directives(&self) -> &DirectiveSet {
        &self.directives
    }

    #[must_use]
    pub fn has(&self, directive: Directive) -> bool {
        self.directives.contains(&directive)
    }

    /// Only affects how a sort key is rendered, never validation.
    #[must_use]
    pub const fn is_temporal(&self) -> bool {
        self.temporal
    }
}
