#![allow(dead_code)]

use ddlkit::prelude::*;

/// `users(id, name, email, title)`
pub fn users_table() -> TableRef {
    Table::new("users")
        .with_field(Field::new("id", "INTEGER"))
        .with_field(Field::new("name", "VARCHAR(100)"))
        .with_field(Field::new("email", "VARCHAR(255)"))
        .with_field(Field::new("title", "TEXT"))
        .into_ref()
}

pub fn index(name: &str, fields: impl Into<ListInput<FieldSpec>>) -> Index {
    Index::new(name).with_fields(fields)
}
