use crate::directive::{Directive, GsiIndex};
use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Every way a type declaration can fail to yield a key schema. All of these
/// are structural and deterministic; none is worth retrying.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("{type_name}: field #{position} must declare exactly one name, found {names}")]
    FieldShape {
        type_name: String,
        position: usize,
        names: usize,
    },

    #[error("{type_name}: duplicate {directive} on field '{field}' (already held by '{holder}')")]
    DuplicateDirective {
        type_name: String,
        directive: Directive,
        field: String,
        holder: String,
    },

    #[error("{type_name}: id was not specified")]
    MissingId { type_name: String },

    #[error("{type_name}: cannot specify {hash} without {sort}", hash = .index.hash_directive(), sort = .index.sort_directive())]
    DanglingHash { type_name: String, index: GsiIndex },
}

impl SchemaError {
    /// Name of the type the error was raised for.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::FieldShape { type_name, .. }
            | Self::DuplicateDirective { type_name, .. }
            | Self::MissingId { type_name }
            | Self::DanglingHash { type_name, .. } => type_name,
        }
    }

    /// Directive the error is about, when there is one.
    #[must_use]
    pub const fn directive(&self) -> Option<Directive> {
        match self {
            Self::DuplicateDirective { directive, .. } => Some(*directive),
            Self::MissingId { .. } => Some(Directive::Id),
            Self::DanglingHash { index, .. } => Some(Directive::Hash(*index)),
            Self::FieldShape { .. } => None,
        }
    }
}

///
/// KeyError
///
/// Raised when a key derivation is evaluated against a record that cannot
/// satisfy it.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum KeyError {
    #[error("no value for key field '{field}'")]
    MissingValue { field: String },

    #[error("sort key field '{field}' is a timestamp but its value is not")]
    NotTimestamp { field: String },
}
