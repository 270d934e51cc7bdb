//! Index construction from named options
//!
//! [`IndexConfig`] collects the recognized construction options. With the
//! `serde` feature it deserializes from JSON-like input where names may be
//! `null` and list attributes take any accepted shape:
//!
//! ```ignore
//! let config: IndexConfig = serde_json::from_value(json!({
//!     "name": "posts_title_idx",
//!     "fields": ["id", {"name": "title", "prefix_length": 10}],
//!     "type": "unique",
//!     "options": "USING BTREE"
//! }))?;
//! let index = Index::from_config(config)?;
//! ```

#[cfg(feature = "serde")]
use ddlkit_types::serde_helpers::{field_input, string_or_null, value_input};
use ddlkit_types::{FieldSpec, IndexType, ListInput};
use serde_json::Value;

use super::Index;
use crate::error::Result;
use crate::object::{Extra, SchemaObject};
use crate::table::TableRef;

/// Named options accepted when constructing an [`Index`]
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndexConfig {
    /// Index name; absent or `null` means unnamed
    #[cfg_attr(feature = "serde", serde(deserialize_with = "string_or_null"))]
    pub name: String,

    #[cfg_attr(feature = "serde", serde(deserialize_with = "field_input"))]
    pub fields: ListInput<FieldSpec>,

    /// Index type in any letter case; `None` keeps the `NORMAL` default
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub index_type: Option<String>,

    #[cfg_attr(feature = "serde", serde(deserialize_with = "value_input"))]
    pub options: ListInput<Value>,

    /// Dialect-specific metadata
    pub extra: Extra,

    /// Owning table; set programmatically
    #[cfg_attr(feature = "serde", serde(skip))]
    pub table: Option<TableRef>,
}

impl IndexConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    #[must_use]
    pub fn fields(self, fields: impl Into<ListInput<FieldSpec>>) -> Self {
        Self {
            fields: fields.into(),
            ..self
        }
    }

    #[must_use]
    pub fn index_type(self, ty: impl Into<String>) -> Self {
        Self {
            index_type: Some(ty.into()),
            ..self
        }
    }

    #[must_use]
    pub fn options(self, options: impl Into<ListInput<Value>>) -> Self {
        Self {
            options: options.into(),
            ..self
        }
    }

    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn table(self, table: &TableRef) -> Self {
        Self {
            table: Some(TableRef::clone(table)),
            ..self
        }
    }
}

impl Index {
    /// Build an index through the same setters used after construction
    pub fn from_config(config: IndexConfig) -> Result<Self> {
        let mut index = Index::new(config.name);
        index.set_fields(config.fields);
        index.set_options(config.options);

        match config.index_type {
            Some(ty) => index.set_type(&ty)?,
            None => index.set_index_type(IndexType::default()),
        }

        if let Some(table) = &config.table {
            index.set_table(table);
        }

        index.set_extra(config.extra);
        Ok(index)
    }
}

impl TryFrom<IndexConfig> for Index {
    type Error = crate::error::IndexError;

    fn try_from(config: IndexConfig) -> Result<Self> {
        Index::from_config(config)
    }
}
