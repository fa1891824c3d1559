//! Index-key schema extraction for single-table storage designs.
//!
//! Type declarations come in from discovery, each field's annotations are
//! interpreted into directives, and a per-type builder assembles a validated
//! [`Model`](node::Model): one primary id plus up to five secondary indexes
//! (`gsi2`..`gsi6`), each with an optional hash field and a sort field.

pub mod annotation;
pub mod build;
pub mod declaration;
pub mod directive;
pub mod error;
pub mod key;
pub mod node;

/// Annotation namespace recognised unless configured otherwise.
pub const TAG_KEY: &str = "dbgen";

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        TAG_KEY,
        annotation::Interpreter,
        build::{ModelBuilder, build_model, build_models},
        declaration::{FieldDeclaration, TypeDeclaration, TypeDescriptor, split_tag},
        directive::{Directive, DirectiveSet, GsiIndex},
        error::{KeyError, SchemaError},
        key::{HashKey, KeySource, KeyValue, SortKey},
        node::{Field, Model, SecondaryIndex},
    };
}
