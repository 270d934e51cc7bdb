mod common;

use common::index;
use ddlkit::prelude::*;
use ddlkit::{ListItem, normalize_by};
use serde_json::json;

fn names(idx: &Index) -> Vec<&str> {
    idx.field_names()
}

#[test]
fn duplicates_keep_first_occurrence() {
    assert_eq!(names(&index("idx", vec!["id", "name", "id"])), ["id", "name"]);
}

#[test]
fn comma_string_equals_list() {
    assert_eq!(
        index("idx", "id, name").fields(),
        index("idx", vec!["id", "name"]).fields()
    );
}

#[test]
fn mixed_records_and_nesting() {
    let input: ListInput<FieldSpec> = ListInput::Many(vec![
        ListItem::from("id, name"),
        ListItem::from(vec![FieldSpec::prefixed("title", 10), FieldSpec::bare("id")]),
        ListItem::from(FieldSpec::prefixed("name", 4)),
    ]);

    let idx = index("idx", input);
    assert_eq!(idx.fields_with_lengths(), ["id", "name", "title(10)"]);
}

#[test]
fn normalizing_canonical_fields_is_identity() {
    let idx = index("idx", "email, id, email, title");
    let again = index("idx", idx.fields().to_vec());
    assert_eq!(again.fields(), idx.fields());
}

#[test]
fn permutations_of_duplicates_are_deterministic() {
    let inputs = [
        vec!["id", "name", "id", "email"],
        vec!["id", "id", "name", "email"],
        vec!["id", "name", "email", "name"],
    ];
    for input in inputs {
        assert_eq!(names(&index("idx", input)), ["id", "name", "email"]);
    }
}

#[test]
fn empty_input_clears() {
    let mut idx = index("idx", "id, name");
    idx.set_fields(Vec::<&str>::new());
    assert_eq!(idx.field_count(), 0);

    idx.set_fields("id");
    idx.set_fields(ListInput::Unset);
    assert!(idx.fields().is_empty());
}

#[test]
fn options_share_the_normalizer() {
    let idx = Index::new("idx").with_options(json!([
        "USING BTREE, COMMENT 'x'",
        ["USING BTREE"],
        {"where": "deleted_at IS NULL"},
        {"where": "deleted_at IS NULL"}
    ]));

    assert_eq!(
        idx.options(),
        [
            json!("USING BTREE"),
            json!("COMMENT 'x'"),
            json!({"where": "deleted_at IS NULL"})
        ]
    );
    assert_eq!(idx.option_count(), 3);
}

#[test]
fn custom_identity_projection() {
    let upper = normalize_by(ListInput::from("id, ID, Name, name"), |f: &FieldSpec| {
        f.name().to_uppercase()
    });
    assert_eq!(upper, vec![FieldSpec::bare("id"), FieldSpec::bare("Name")]);
}
