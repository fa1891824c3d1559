use crate::{
    directive::{Directive, GsiIndex},
    key::{HashKey, SortKey},
    node::Field,
};
use serde::Serialize;

///
/// Model
///
/// Validated key schema for one type. Only the builder can construct one,
/// so every `Model` in circulation satisfies:
///
/// - exactly one id field
/// - no index has a hash field without a sort field
/// - no directive is held by more than one field
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Model {
    name: String,
    id: Field,
    indexes: [SecondaryIndex; 5],
}

impl Model {
    pub(crate) const fn new(name: String, id: Field, indexes: [SecondaryIndex; 5]) -> Self {
        Self { name, id, indexes }
    }

    /// Declared type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entity discriminator: the type name in lowercase.
    #[must_use]
    pub fn entity_type(&self) -> String {
        self.name.to_lowercase()
    }

    #[must_use]
    pub const fn id(&self) -> &Field {
        &self.id
    }

    #[must_use]
    pub fn id_field_name(&self) -> &str {
        self.id.name()
    }

    #[must_use]
    pub const fn index(&self, index: GsiIndex) -> &SecondaryIndex {
        &self.indexes[index.slot()]
    }

    #[must_use]
    pub const fn indexes(&self) -> &[SecondaryIndex; 5] {
        &self.indexes
    }

    /// An index is active once it has a sort field.
    #[must_use]
    pub const fn has_index(&self, index: GsiIndex) -> bool {
        self.index(index).is_active()
    }

    /// Whether the index hash key includes a field value.
    #[must_use]
    pub const fn has_index_hash(&self, index: GsiIndex) -> bool {
        self.index(index).hash.is_some()
    }

    pub fn active_indexes(&self) -> impl Iterator<Item = &SecondaryIndex> {
        self.indexes.iter().filter(|ix| ix.is_active())
    }

    /// The field recorded against a directive, if any.
    #[must_use]
    pub fn holder(&self, directive: Directive) -> Option<&Field> {
        match directive {
            Directive::Id => Some(&self.id),
            Directive::Hash(index) => self.index(index).hash.as_ref(),
            Directive::Sort(index) => self.index(index).sort.as_ref(),
        }
    }

    #[must_use]
    pub fn hash_key(&self, index: GsiIndex) -> Option<HashKey> {
        let ix = self.index(index);

        ix.is_active().then(|| self.hash_of(ix))
    }

    #[must_use]
    pub fn sort_key(&self, index: GsiIndex) -> Option<SortKey> {
        self.index(index).sort.as_ref().map(sort_of)
    }

    /// Hash and sort key of every active index, in ascending index order.
    pub fn index_keys(&self) -> impl Iterator<Item = (GsiIndex, HashKey, SortKey)> + '_ {
        self.indexes.iter().filter_map(|ix| {
            let sort = ix.sort.as_ref()?;

            Some((ix.index, self.hash_of(ix), sort_of(sort)))
        })
    }

    fn hash_of(&self, ix: &SecondaryIndex) -> HashKey {
        let entity_type = self.entity_type();

        match &ix.hash {
            Some(field) => HashKey::Namespaced {
                entity_type,
                field: field.name().to_string(),
            },
            None => HashKey::Discriminator { entity_type },
        }
    }
}

fn sort_of(field: &Field) -> SortKey {
    SortKey {
        field: field.name().to_string(),
        temporal: field.is_temporal(),
    }
}

///
/// SecondaryIndex
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SecondaryIndex {
    pub index: GsiIndex,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<Field>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Field>,
}

impl SecondaryIndex {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.sort.is_some()
    }
}
