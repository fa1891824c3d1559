//! Key-derivation descriptions for secondary indexes.
//!
//! A `Model` describes how each active index derives its hash and sort key
//! values. Renderers turn these descriptions into code; `evaluate` applies
//! the same rules to an in-memory record so the rules themselves stay
//! testable without generated code.

use crate::error::KeyError;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::{
    collections::{BTreeMap, HashMap},
    fmt::{self, Display},
};

/// Separator between the entity discriminator and a hash field value.
pub const KEY_SEPARATOR: char = '.';

/// strftime layout for temporal sort keys: `YYYY-MM-DDTHH:mm:ss`, no zone.
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S";

///
/// KeyValue
///
/// Runtime value of a key field. Each scalar kind has exactly one string
/// form; nothing falls back to an implicit conversion.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeyValue {
    Text(String),
    Int(i64),
    Uint(u64),
    Bool(bool),
    Timestamp(NaiveDateTime),
}

impl Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(v) => f.write_str(v),
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Timestamp(v) => write!(f, "{}", v.format(TIMESTAMP_LAYOUT)),
        }
    }
}

impl From<&str> for KeyValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for KeyValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<i64> for KeyValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for KeyValue {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<bool> for KeyValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<NaiveDateTime> for KeyValue {
    fn from(v: NaiveDateTime) -> Self {
        Self::Timestamp(v)
    }
}

///
/// KeySource
///
/// Anything that can produce a field's runtime value by name.
///

pub trait KeySource {
    fn key_value(&self, field: &str) -> Option<KeyValue>;
}

impl KeySource for BTreeMap<String, KeyValue> {
    fn key_value(&self, field: &str) -> Option<KeyValue> {
        self.get(field).cloned()
    }
}

impl<S: std::hash::BuildHasher> KeySource for HashMap<String, KeyValue, S> {
    fn key_value(&self, field: &str) -> Option<KeyValue> {
        self.get(field).cloned()
    }
}

///
/// HashKey
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HashKey {
    /// Sort-only index: the hash value is the discriminator itself.
    Discriminator { entity_type: String },

    /// `<discriminator>.<field value>`.
    Namespaced { entity_type: String, field: String },
}

impl HashKey {
    #[must_use]
    pub fn entity_type(&self) -> &str {
        match self {
            Self::Discriminator { entity_type } | Self::Namespaced { entity_type, .. } => {
                entity_type
            }
        }
    }

    /// Field contributing to the hash value, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Discriminator { .. } => None,
            Self::Namespaced { field, .. } => Some(field),
        }
    }

    pub fn evaluate(&self, source: &impl KeySource) -> Result<String, KeyError> {
        match self {
            Self::Discriminator { entity_type } => Ok(entity_type.clone()),
            Self::Namespaced { entity_type, field } => {
                let value = source
                    .key_value(field)
                    .ok_or_else(|| KeyError::MissingValue {
                        field: field.clone(),
                    })?;

                Ok(format!("{entity_type}{KEY_SEPARATOR}{value}"))
            }
        }
    }
}

///
/// SortKey
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SortKey {
    pub field: String,
    pub temporal: bool,
}

impl SortKey {
    pub fn evaluate(&self, source: &impl KeySource) -> Result<String, KeyError> {
        let value = source
            .key_value(&self.field)
            .ok_or_else(|| KeyError::MissingValue {
                field: self.field.clone(),
            })?;

        match (self.temporal, &value) {
            (true, KeyValue::Timestamp(ts)) => Ok(ts.format(TIMESTAMP_LAYOUT).to_string()),
            (true, _) => Err(KeyError::NotTimestamp {
                field: self.field.clone(),
            }),
            (false, _) => Ok(value.to_string()),
        }
    }
}

///
/// TESTS
///
