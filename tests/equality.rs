mod common;

use common::{index, users_table};
use ddlkit::prelude::*;
use serde_json::json;

#[test]
fn field_order_does_not_matter() {
    let a = index("idx", "id, name, email").with_options("USING BTREE");
    let b = index("idx", "email, id, name").with_options("USING BTREE");
    assert!(a.equals(&b));
    assert!(b.equals(&a));
}

#[test]
fn extra_field_is_detected() {
    let a = index("idx", "id, name");
    let b = index("idx", "id, name, email");
    assert!(!a.equals(&b));
    assert!(!b.equals(&a));
}

#[test]
fn unnamed_index_matches_index_named_after_leading_field() {
    let unnamed = index("", "id, email").unique();
    let named_id = index("id", "id, email").unique();
    let named_other = index("other_name", "id, email").unique();

    assert!(unnamed.equals(&named_id));
    assert!(named_id.equals(&unnamed));
    assert!(!unnamed.equals(&named_other));
    assert!(!named_other.equals(&unnamed));
}

#[test]
fn case_insensitive_names_and_fields() {
    let a = index("Users_Email", "Email, ID");
    let b = index("users_email", "email, id");
    let ci = CompareOptions::new(true, false);

    assert!(!a.equals(&b));
    assert!(a.equals_with(&b, ci));
    assert!(b.equals_with(&a, ci));
}

#[test]
fn ignore_index_names_only_skips_names() {
    let ignore = CompareOptions::default().ignore_index_names();
    let a = index("users_email_idx", "email").unique();
    let b = index("uq_users_email", "email").unique();

    assert!(!a.equals(&b));
    assert!(a.equals_with(&b, ignore));

    assert!(!a.equals_with(&index("uq_users_email", "email"), ignore));
    assert!(!a.equals_with(&index("uq_users_email", "email, id").unique(), ignore));
    assert!(
        !a.equals_with(
            &index("uq_users_email", "email")
                .unique()
                .with_options("USING HASH"),
            ignore
        )
    );
}

#[test]
fn prefix_lengths_participate() {
    let a = index("idx", vec![FieldSpec::prefixed("title", 10), FieldSpec::bare("id")]);
    let b = index("idx", vec![FieldSpec::bare("id"), FieldSpec::prefixed("title", 10)]);
    let c = index("idx", vec![FieldSpec::bare("id"), FieldSpec::bare("title")]);

    assert!(a.equals(&b));
    assert!(!a.equals(&c));
}

#[test]
fn options_compare_structurally() {
    let a = index("idx", "id").with_options(json!([{"with": {"fillfactor": 70}}, "CONCURRENTLY"]));
    let b = index("idx", "id").with_options(json!(["CONCURRENTLY", {"with": {"fillfactor": 70.0}}]));
    assert!(a.equals(&b));
}

#[test]
fn extra_metadata_participates() {
    let mut a = index("idx", "id");
    let b = index("idx", "id");
    a.set_extra([("comment", "lookup")]);
    assert!(!a.equals(&b));

    a.remove_extra("comment");
    assert!(a.equals(&b));
}

#[test]
fn table_attachment_is_not_compared() {
    let users = users_table();
    let attached = index("idx", "email").with_table(&users);
    assert!(attached.equals(&index("idx", "email")));
}

#[test]
fn introspected_index_matches_declared_one() {
    let users = users_table();
    Table::add_index(&users, index("", "email, name").unique());

    let introspected = index("email", "email, name").with_type(IndexType::Unique);
    let declared = users.indices();
    assert!(declared[0].equals(&introspected));
}
