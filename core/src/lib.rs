//! Schema objects for ddlkit
//!
//! - [`Index`] - index definitions, validity checks and structural equivalence
//! - [`Table`] / [`Field`] - the owning side of an index
//! - [`ObjectBase`] / [`SchemaObject`] - metadata and error state shared by all objects
//! - [`compare`] - deep structural equality for option and metadata values
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `serde` - Deserialize [`IndexConfig`] from JSON-like input
//! - `tracing` - Emit `tracing` events from validation and comparison

mod trace;

pub mod compare;
pub mod error;
mod field;
mod index;
mod object;
mod table;

pub use error::{IndexError, Result, ValidationError};
pub use field::Field;
pub use index::{CompareOptions, Index, IndexConfig};
pub use object::{EntityKind, Extra, ObjectBase, SchemaObject};
pub use table::{Table, TableRef, TableWeakRef};

pub use ddlkit_types::{FieldSpec, IndexType, ListInput, ListItem};
pub use serde_json::Value;

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{
        CompareOptions, Field, FieldSpec, Index, IndexConfig, IndexType, ListInput, SchemaObject,
        Table, TableRef,
    };
}
