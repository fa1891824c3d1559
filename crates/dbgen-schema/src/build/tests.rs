use crate::prelude::*;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn text(name: &str) -> FieldDeclaration {
    FieldDeclaration::named(name, TypeDescriptor::plain("String"))
}

fn build(decl: &TypeDeclaration) -> Result<Model, SchemaError> {
    build_model(&Interpreter::default(), decl)
}

fn user() -> TypeDeclaration {
    TypeDeclaration::new("User")
        .field(text("ID").tag(r#"dbgen:"id""#))
        .field(text("Email"))
        .field(
            FieldDeclaration::named("CreatedAt", TypeDescriptor::timestamp("DateTime<Utc>"))
                .tag(r#"dbgen:"gsi2s""#),
        )
}

//
// scenarios
//

#[test]
fn user_with_sort_only_index() {
    let model = build(&user()).expect("valid");

    assert_eq!(model.name(), "User");
    assert_eq!(model.id_field_name(), "ID");
    assert!(model.has_index(GsiIndex::Gsi2));
    assert!(!model.has_index_hash(GsiIndex::Gsi2));

    let sort = model.sort_key(GsiIndex::Gsi2).expect("active");
    assert_eq!(sort.field, "CreatedAt");
    assert!(sort.temporal);

    let hash = model.hash_key(GsiIndex::Gsi2).expect("active");
    assert_eq!(
        hash.evaluate(&BTreeMap::<String, KeyValue>::new()),
        Ok("user".to_string())
    );

    for index in [GsiIndex::Gsi3, GsiIndex::Gsi4, GsiIndex::Gsi5, GsiIndex::Gsi6] {
        assert!(!model.has_index(index));
        assert_eq!(model.hash_key(index), None);
        assert_eq!(model.sort_key(index), None);
    }
}

#[test]
fn order_with_dangling_hash() {
    let decl = TypeDeclaration::new("Order")
        .field(text("ID").tag("dbgen:id"))
        .field(text("CustomerID").tag("dbgen:gsi2h"));

    assert_eq!(
        build(&decl),
        Err(SchemaError::DanglingHash {
            type_name: "Order".to_string(),
            index: GsiIndex::Gsi2,
        })
    );
}

#[test]
fn item_with_two_ids() {
    let decl = TypeDeclaration::new("Item")
        .field(text("ID").tag("dbgen:id"))
        .field(text("Sku").tag("dbgen:id"));

    assert_eq!(
        build(&decl),
        Err(SchemaError::DuplicateDirective {
            type_name: "Item".to_string(),
            directive: Directive::Id,
            field: "Sku".to_string(),
            holder: "ID".to_string(),
        })
    );
}

//
// rules
//

#[test]
fn missing_id_is_rejected() {
    let decl = TypeDeclaration::new("Note").field(text("Body").tag("dbgen:gsi2s"));

    let err = build(&decl).expect_err("no id");
    assert_eq!(
        err,
        SchemaError::MissingId {
            type_name: "Note".to_string()
        }
    );
    assert_eq!(err.to_string(), "Note: id was not specified");
}

#[test]
fn empty_type_is_missing_id() {
    assert!(matches!(
        build(&TypeDeclaration::new("Unit")),
        Err(SchemaError::MissingId { .. })
    ));
}

#[test]
fn one_field_may_hold_several_directives() {
    let decl = TypeDeclaration::new("Account")
        .field(text("ID").tag(r#"dbgen:"id,gsi3h""#))
        .field(text("Region").tag("dbgen:gsi3s"));

    let model = build(&decl).expect("valid");
    assert_eq!(model.id_field_name(), "ID");
    assert_eq!(model.holder(Directive::Hash(GsiIndex::Gsi3)).map(Field::name), Some("ID"));
    assert_eq!(
        model.hash_key(GsiIndex::Gsi3),
        Some(HashKey::Namespaced {
            entity_type: "account".to_string(),
            field: "ID".to_string(),
        })
    );
}

#[test]
fn namespaced_hash_key_evaluates_against_a_record() {
    let decl = TypeDeclaration::new("Order")
        .field(text("ID").tag("dbgen:id"))
        .field(text("CustomerID").tag("dbgen:gsi4h"))
        .field(text("Total").tag("dbgen:gsi4s"));
    let model = build(&decl).expect("valid");

    let row: BTreeMap<String, KeyValue> = [
        ("CustomerID".to_string(), KeyValue::from("c-1")),
        ("Total".to_string(), KeyValue::Uint(1250)),
    ]
    .into_iter()
    .collect();

    let hash = model.hash_key(GsiIndex::Gsi4).expect("active");
    let sort = model.sort_key(GsiIndex::Gsi4).expect("active");
    assert_eq!(hash.evaluate(&row), Ok("order.c-1".to_string()));
    assert_eq!(sort.evaluate(&row), Ok("1250".to_string()));
}

#[test]
fn ignored_field_counts_for_nothing() {
    let decl = TypeDeclaration::new("Doc")
        .field(text("Shadow").tag(r#"dbgen:"id,gsi2h,gsi2s,ignore""#))
        .field(text("ID").tag("dbgen:id"));

    let model = build(&decl).expect("ignored field must not collide");
    assert_eq!(model.id_field_name(), "ID");
    assert_eq!(model.active_indexes().count(), 0);

    let only_ignored = TypeDeclaration::new("Doc").field(text("ID").tag(r#"dbgen:"id,ignore""#));
    assert!(matches!(build(&only_ignored), Err(SchemaError::MissingId { .. })));
}

#[test]
fn duplicates_are_caught_per_directive() {
    for index in GsiIndex::ALL {
        for directive in [index.hash_directive(), index.sort_directive()] {
            let tag = format!("dbgen:{directive}");
            let decl = TypeDeclaration::new("T")
                .field(text("ID").tag("dbgen:id"))
                .field(text("A").tag(&tag))
                .field(text("B").tag(&tag));

            let err = build(&decl).expect_err("duplicate");
            assert_eq!(err.directive(), Some(directive), "{err}");
            assert!(err.to_string().contains(&format!("duplicate {directive}")));
        }
    }
}

#[test]
fn first_duplicate_follows_vocabulary_order() {
    let decl = TypeDeclaration::new("T")
        .field(text("ID").tag("dbgen:id"))
        .field(text("a").tag(r#"dbgen:"gsi3h,gsi2s""#))
        .field(text("b").tag(r#"dbgen:"gsi3h,gsi2s""#));

    let err = build(&decl).expect_err("duplicate");
    assert_eq!(err.directive(), Some(Directive::Sort(GsiIndex::Gsi2)));
    assert_eq!(err.to_string(), "T: duplicate gsi2s on field 'b' (already held by 'a')");
}

#[test]
fn index_keys_cover_exactly_the_active_indexes() {
    let decl = TypeDeclaration::new("Order")
        .field(text("ID").tag("dbgen:id"))
        .field(text("Customer").tag("dbgen:gsi3h"))
        .field(text("Total").tag(r#"dbgen:"gsi3s,gsi5s""#));
    let model = build(&decl).expect("valid");

    let keys: Vec<_> = model.index_keys().collect();
    let indexes: Vec<GsiIndex> = keys.iter().map(|(index, ..)| *index).collect();
    assert_eq!(indexes, [GsiIndex::Gsi3, GsiIndex::Gsi5]);

    for (index, hash, sort) in keys {
        assert_eq!(model.hash_key(index), Some(hash));
        assert_eq!(model.sort_key(index), Some(sort));
    }
}

#[test]
fn shape_error_aborts_the_type() {
    let decl = TypeDeclaration::new("Pair")
        .field(text("ID").tag("dbgen:id"))
        .field(FieldDeclaration::default());

    assert!(matches!(
        build(&decl),
        Err(SchemaError::FieldShape { position: 1, names: 0, .. })
    ));
}

#[test]
fn batch_fails_atomically() {
    let bad = TypeDeclaration::new("Order")
        .field(text("ID").tag("dbgen:id"))
        .field(text("CustomerID").tag("dbgen:gsi2h"));
    let decls = [user(), bad, user()];

    let err = build_models(&Interpreter::default(), &decls).expect_err("batch must fail");
    assert_eq!(err.type_name(), "Order");

    let ok = build_models(&Interpreter::default(), &[user(), user()]).expect("valid batch");
    assert_eq!(ok.len(), 2);
}

#[test]
fn builder_tracks_holders_incrementally() {
    let mut builder = ModelBuilder::new("User");
    builder
        .push(Field::new("ID".to_string(), [Directive::Id].into(), false))
        .expect("first id");

    assert_eq!(builder.holder(Directive::Id).map(Field::name), Some("ID"));
    let second = builder.push(Field::new("Other".to_string(), [Directive::Id].into(), false));
    assert!(second.is_err());

    let model = builder.finish().expect("valid");
    assert_eq!(model.id_field_name(), "ID");
}

#[test]
fn model_serializes_directives_as_text() {
    let json = serde_json::to_value(build(&user()).expect("valid")).expect("serialize");

    assert_eq!(json["name"], "User");
    assert_eq!(json["id"]["directives"][0], "id");
    assert_eq!(json["indexes"][0]["index"], "gsi2");
    assert_eq!(json["indexes"][0]["sort"]["temporal"], true);
}

//
// properties
//

// An annotated field: optional ignore plus any subset of directives.
fn arb_field() -> impl Strategy<Value = (bool, Vec<Directive>)> {
    (
        prop::bool::weighted(0.2),
        prop::sample::subsequence(Directive::ALL.to_vec(), 0..=3),
    )
}

fn arb_decl() -> impl Strategy<Value = TypeDeclaration> {
    prop::collection::vec(arb_field(), 0..8).prop_map(|fields| {
        fields
            .into_iter()
            .enumerate()
            .fold(TypeDeclaration::new("Prop"), |decl, (i, (ignore, dirs))| {
                let mut values: Vec<String> = dirs.iter().map(ToString::to_string).collect();
                if ignore {
                    values.push("ignore".to_string());
                }
                let tag = format!(r#"dbgen:"{}""#, values.join(","));

                decl.field(text(&format!("F{i}")).tag(&tag))
            })
    })
}

proptest! {
    #[test]
    fn extraction_is_idempotent(decl in arb_decl()) {
        prop_assert_eq!(build(&decl), build(&decl.clone()));
    }

    #[test]
    fn ignored_fields_never_hold_directives(decl in arb_decl()) {
        let without_ignored = TypeDeclaration {
            name: decl.name.clone(),
            fields: decl
                .fields
                .iter()
                .filter(|f| !f.annotations.iter().any(|a| a.contains("ignore")))
                .cloned()
                .collect(),
        };

        // dropping ignored fields up front must not change the outcome
        prop_assert_eq!(build(&decl), build(&without_ignored));
    }

    #[test]
    fn hash_without_sort_always_dangles(
        n in 2u8..=6,
        others in prop::collection::vec(2u8..=6, 0..4),
    ) {
        let index = GsiIndex::from_number(n).expect("in range");
        let mut decl = TypeDeclaration::new("T")
            .field(text("ID").tag("dbgen:id"))
            .field(text("H").tag(&format!("dbgen:{}", index.hash_directive())));

        // fully paired indexes elsewhere never mask the dangling one
        let others: std::collections::BTreeSet<u8> =
            others.into_iter().filter(|o| *o != n).collect();
        for (i, other) in others.into_iter().enumerate() {
            let other = GsiIndex::from_number(other).expect("in range");
            decl = decl
                .field(text(&format!("OH{i}")).tag(&format!("dbgen:{}", other.hash_directive())))
                .field(text(&format!("OS{i}")).tag(&format!("dbgen:{}", other.sort_directive())));
        }

        prop_assert_eq!(
            build(&decl),
            Err(SchemaError::DanglingHash { type_name: "T".to_string(), index })
        );
    }

    #[test]
    fn sort_only_index_is_active_without_hash(n in 2u8..=6) {
        let index = GsiIndex::from_number(n).expect("in range");
        let decl = TypeDeclaration::new("T")
            .field(text("ID").tag("dbgen:id"))
            .field(text("S").tag(&format!("dbgen:{}", index.sort_directive())));

        let model = build(&decl).expect("valid");
        prop_assert!(model.has_index(index));
        prop_assert!(!model.has_index_hash(index));
        prop_assert_eq!(
            model.hash_key(index),
            Some(HashKey::Discriminator { entity_type: "t".to_string() })
        );
    }
}
