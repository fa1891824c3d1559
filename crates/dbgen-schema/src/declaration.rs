//! Raw type declarations as handed over by discovery.
//!
//! Nothing here is validated; the interpreter and builder decide what a
//! declaration means.

///
/// TypeDeclaration
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TypeDeclaration {
    pub name: String,
    pub fields: Vec<FieldDeclaration>,
}

impl TypeDeclaration {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, field: FieldDeclaration) -> Self {
        self.fields.push(field);
        self
    }
}

///
/// FieldDeclaration
///
/// `names` holds every name the host declaration binds. Positional fields
/// bind none and grouped declarations (`a, b: T`) bind several; both are
/// rejected by the interpreter.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldDeclaration {
    pub names: Vec<String>,
    pub ty: TypeDescriptor,
    pub annotations: Vec<String>,
}

impl FieldDeclaration {
    #[must_use]
    pub fn named(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            names: vec![name.into()],
            ty,
            annotations: Vec::new(),
        }
    }

    /// Attach one raw annotation token.
    #[must_use]
    pub fn annotate(mut self, token: impl Into<String>) -> Self {
        self.annotations.push(token.into());
        self
    }

    /// Attach every whitespace-delimited token of a whole tag string.
    #[must_use]
    pub fn tag(mut self, tag: &str) -> Self {
        self.annotations.extend(split_tag(tag).map(ToString::to_string));
        self
    }
}

///
/// TypeDescriptor
///
/// The declared type as text, plus the one classification the core cares
/// about. Discovery owns the timestamp decision.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TypeDescriptor {
    pub text: String,
    pub timestamp: bool,
}

impl TypeDescriptor {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: false,
        }
    }

    #[must_use]
    pub fn timestamp(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: true,
        }
    }
}

/// Split a whole tag string into its raw tokens, in source order.
pub fn split_tag(tag: &str) -> impl Iterator<Item = &str> {
    tag.split_whitespace()
}
