use crate::{
    directive::{Directive, GsiIndex},
    error::SchemaError,
    node::{Field, Model, SecondaryIndex},
};
use std::collections::BTreeMap;

// Post-scan checks (one id, no hash field without a sort field), then freeze.
pub(super) fn finish(
    type_name: String,
    mut holders: BTreeMap<Directive, Field>,
) -> Result<Model, SchemaError> {
    let Some(id) = holders.remove(&Directive::Id) else {
        return Err(SchemaError::MissingId { type_name });
    };

    // sort without hash is fine: the discriminator stands in for the hash
    if let Some(index) = GsiIndex::ALL.into_iter().find(|index| {
        holders.contains_key(&index.hash_directive())
            && !holders.contains_key(&index.sort_directive())
    }) {
        return Err(SchemaError::DanglingHash { type_name, index });
    }

    let indexes = GsiIndex::ALL.map(|index| SecondaryIndex {
        index,
        hash: holders.remove(&index.hash_directive()),
        sort: holders.remove(&index.sort_directive()),
    });

    Ok(Model::new(type_name, id, indexes))
}
