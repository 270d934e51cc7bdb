//! Tables and their ownership of indexes
//!
//! A [`Table`] is shared through a [`TableRef`]. Indexes attached to it keep a
//! [`TableWeakRef`] back to the table, so an index never keeps its table alive
//! and resolves to "no table" once the table is dropped.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use crate::field::Field;
use crate::index::Index;
use crate::object::{EntityKind, ObjectBase, SchemaObject};

pub type TableRef = Rc<Table>;
pub type TableWeakRef = Weak<Table>;

/// A database table
#[derive(Debug)]
pub struct Table {
    base: ObjectBase,

    /// Name of the table
    name: String,

    /// The table's fields, unique by name
    fields: Vec<Field>,

    /// Indexes owned by this table
    indices: RefCell<Vec<Index>>,
}

impl Table {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: ObjectBase::new(Self::KIND),
            name: name.into(),
            fields: vec![],
            indices: RefCell::new(vec![]),
        }
    }

    /// Add a field, returning the table
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.add_field(field);
        self
    }

    /// Add a field; a field with the same name is replaced in place
    pub fn add_field(&mut self, field: Field) {
        match self.fields.iter_mut().find(|f| f.name() == field.name()) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    /// Move the table behind a shared reference so indexes can attach to it
    #[must_use]
    pub fn into_ref(self) -> TableRef {
        Rc::new(self)
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(Field::name).collect()
    }

    /// Attach `index` to `table` and take ownership of it
    pub fn add_index(table: &TableRef, mut index: Index) {
        index.set_table(table);
        table.indices.borrow_mut().push(index);
    }

    #[must_use]
    pub fn indices(&self) -> Ref<'_, [Index]> {
        Ref::map(self.indices.borrow(), Vec::as_slice)
    }

    #[must_use]
    pub fn get_index(&self, name: &str) -> Option<Ref<'_, Index>> {
        Ref::filter_map(self.indices.borrow(), |indices| {
            indices.iter().find(|index| index.name() == name)
        })
        .ok()
    }

    /// Remove the named index and hand it back detached
    pub fn drop_index(&self, name: &str) -> Option<Index> {
        let mut indices = self.indices.borrow_mut();
        let pos = indices.iter().position(|index| index.name() == name)?;
        let mut index = indices.remove(pos);
        index.detach();
        Some(index)
    }
}

impl SchemaObject for Table {
    const KIND: EntityKind = EntityKind::Table;

    fn base(&self) -> &ObjectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> TableRef {
        Table::new("users")
            .with_field(Field::new("id", "INTEGER"))
            .with_field(Field::new("email", "TEXT"))
            .into_ref()
    }

    #[test]
    fn test_field_lookup() {
        let table = users();
        assert_eq!(table.get_field("email").map(Field::data_type), Some("TEXT"));
        assert!(table.get_field("missing").is_none());
        assert_eq!(table.field_names(), ["id", "email"]);
    }

    #[test]
    fn test_add_field_replaces_same_name() {
        let table = Table::new("users")
            .with_field(Field::new("id", "INTEGER"))
            .with_field(Field::new("id", "BIGINT"));
        assert_eq!(table.fields().len(), 1);
        assert_eq!(table.fields()[0].data_type(), "BIGINT");
    }

    #[test]
    fn test_add_and_drop_index() {
        let table = users();
        Table::add_index(&table, Index::new("users_email_idx").with_fields("email"));

        assert_eq!(table.indices().len(), 1);
        let attached = table.get_index("users_email_idx").unwrap();
        assert!(Rc::ptr_eq(&attached.table().unwrap(), &table));
        drop(attached);

        let dropped = table.drop_index("users_email_idx").unwrap();
        assert!(dropped.table().is_none());
        assert!(table.indices().is_empty());
        assert!(table.drop_index("users_email_idx").is_none());
    }

    #[test]
    fn test_index_does_not_keep_table_alive() {
        let table = users();
        let index = Index::new("idx").with_fields("id").with_table(&table);
        assert!(index.table().is_some());

        drop(table);
        assert!(index.table().is_none());
    }
}
