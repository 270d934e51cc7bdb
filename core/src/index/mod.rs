//! Index definitions
//!
//! An [`Index`] is a named, typed, ordered set of fields of its owning table,
//! plus opaque option tokens (method hints, partial-index predicates) and
//! dialect-specific metadata. Field and option lists accept any
//! [`ListInput`] shape and are normalized on assignment.
//!
//! # Examples
//!
//! ```
//! use ddlkit_core::{Field, FieldSpec, Index, IndexType, Table};
//!
//! let users = Table::new("users")
//!     .with_field(Field::new("id", "INTEGER"))
//!     .with_field(Field::new("title", "TEXT"))
//!     .into_ref();
//!
//! let mut index = Index::new("users_title_idx")
//!     .with_fields(vec![FieldSpec::bare("id"), FieldSpec::prefixed("title", 10)]);
//! index.set_type("unique").unwrap();
//! index.set_table(&users);
//!
//! assert_eq!(index.index_type(), Some(IndexType::Unique));
//! assert_eq!(index.fields_with_lengths(), ["id", "title(10)"]);
//! assert!(index.is_valid());
//! ```

mod config;
mod equality;

pub use config::IndexConfig;
pub use equality::CompareOptions;

use std::rc::{Rc, Weak};

use ddlkit_types::{FieldSpec, IndexType, ListInput, normalize, normalize_by};
use serde_json::Value;

use crate::error::{Result, ValidationError};
use crate::object::{EntityKind, ObjectBase, SchemaObject};
use crate::table::{TableRef, TableWeakRef};
use crate::trace::{trace_invalid_index, trace_rejected_type};

/// A database index definition
#[derive(Clone, Debug)]
pub struct Index {
    base: ObjectBase,

    /// Index name, empty when the index is unnamed
    name: String,

    /// Indexed fields, unique by name, in first-occurrence order
    fields: Vec<FieldSpec>,

    /// Option tokens, unique by value
    options: Vec<Value>,

    /// `None` only after an explicit empty assignment
    ty: Option<IndexType>,

    /// The owning table; never keeps it alive
    table: TableWeakRef,
}

impl Index {
    /// Create an unattached `NORMAL` index with no fields
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: ObjectBase::new(Self::KIND),
            name: name.into(),
            fields: vec![],
            options: vec![],
            ty: Some(IndexType::Normal),
            table: Weak::new(),
        }
    }

    /// Set the fields, returning the index
    #[must_use]
    pub fn with_fields(mut self, fields: impl Into<ListInput<FieldSpec>>) -> Self {
        self.set_fields(fields);
        self
    }

    /// Set the options, returning the index
    #[must_use]
    pub fn with_options(mut self, options: impl Into<ListInput<Value>>) -> Self {
        self.set_options(options);
        self
    }

    /// Set the index type, returning the index
    #[must_use]
    pub fn with_type(mut self, ty: IndexType) -> Self {
        self.ty = Some(ty);
        self
    }

    /// Make this a unique index
    #[must_use]
    pub fn unique(self) -> Self {
        self.with_type(IndexType::Unique)
    }

    /// Attach to `table`, returning the index
    #[must_use]
    pub fn with_table(mut self, table: &TableRef) -> Self {
        self.set_table(table);
        self
    }

    // -------------------------------------------------------------------------
    // Name
    // -------------------------------------------------------------------------

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Reset the name to empty, making the index unnamed
    pub fn clear_name(&mut self) {
        self.name.clear();
    }

    // -------------------------------------------------------------------------
    // Fields
    // -------------------------------------------------------------------------

    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Replace the field list; empty input clears it
    pub fn set_fields(&mut self, fields: impl Into<ListInput<FieldSpec>>) {
        self.fields = normalize_by(fields.into(), |f: &FieldSpec| f.name().to_string());
    }

    #[inline]
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Field names, without prefix lengths
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(FieldSpec::name).collect()
    }

    /// Field entries rendered as `name` or `name(prefix_length)`
    #[must_use]
    pub fn fields_with_lengths(&self) -> Vec<String> {
        self.fields.iter().map(ToString::to_string).collect()
    }

    /// Name of the leading field, or `""` when there are no fields
    #[must_use]
    pub fn first_field_name(&self) -> &str {
        self.fields.first().map_or("", FieldSpec::name)
    }

    // -------------------------------------------------------------------------
    // Options
    // -------------------------------------------------------------------------

    #[inline]
    #[must_use]
    pub fn options(&self) -> &[Value] {
        &self.options
    }

    /// Replace the option list; empty input clears it
    pub fn set_options(&mut self, options: impl Into<ListInput<Value>>) {
        self.options = normalize(options.into());
    }

    #[inline]
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    // -------------------------------------------------------------------------
    // Type
    // -------------------------------------------------------------------------

    /// The index type; `None` only after an explicit empty assignment
    #[inline]
    #[must_use]
    pub fn index_type(&self) -> Option<IndexType> {
        self.ty
    }

    /// The canonical type name, `""` when unset
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.ty.as_ref().map_or("", IndexType::as_str)
    }

    /// Set the type from text in any letter case
    ///
    /// An empty string is stored as an unset type without validation.
    pub fn set_type(&mut self, value: &str) -> Result<()> {
        if value.is_empty() {
            self.ty = None;
            return Ok(());
        }
        match value.parse::<IndexType>() {
            Ok(ty) => {
                self.ty = Some(ty);
                Ok(())
            }
            Err(err) => {
                trace_rejected_type!(self.name, value);
                Err(err.into())
            }
        }
    }

    pub fn set_index_type(&mut self, ty: IndexType) {
        self.ty = Some(ty);
    }

    // -------------------------------------------------------------------------
    // Table
    // -------------------------------------------------------------------------

    /// The owning table, if attached and still alive
    #[must_use]
    pub fn table(&self) -> Option<TableRef> {
        self.table.upgrade()
    }

    pub fn set_table(&mut self, table: &TableRef) {
        self.table = Rc::downgrade(table);
    }

    /// Forget the owning table
    pub fn detach(&mut self) {
        self.table = Weak::new();
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Check the index against its owning table
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let table = self.table().ok_or(ValidationError::NoTable)?;

        if self.fields.is_empty() {
            return Err(ValidationError::NoFields);
        }

        if let Some(missing) = self
            .fields
            .iter()
            .find(|field| table.get_field(field.name()).is_none())
        {
            return Err(ValidationError::MissingField {
                field: missing.name().to_string(),
                table: table.name().to_string(),
            });
        }

        Ok(())
    }

    /// Like [`validate`](Self::validate), recording the failure message
    /// instead of returning it. See [`SchemaObject::last_error`].
    pub fn is_valid(&self) -> bool {
        match self.validate() {
            Ok(()) => true,
            Err(err) => {
                let message = err.to_string();
                trace_invalid_index!(self.name, message);
                self.base.error(message)
            }
        }
    }
}

impl Default for Index {
    fn default() -> Self {
        Self::new("")
    }
}

impl SchemaObject for Index {
    const KIND: EntityKind = EntityKind::Index;

    fn base(&self) -> &ObjectBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }
}
