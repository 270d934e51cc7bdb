//! Shared value types for ddlkit schema objects
//!
//! This crate provides the leaf types consumed by `ddlkit-core`:
//!
//! - [`ListInput`] / [`normalize_by`] - canonicalization of list-valued attributes
//! - [`FieldSpec`] - an indexed field, optionally limited to a leading prefix
//! - [`IndexType`] - the recognized kinds of index
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `serde` - Enable serde serialization/deserialization

mod field_spec;
mod index_type;
mod list_attr;
pub mod serde_helpers;

pub use field_spec::{FieldSpec, FieldSpecError};
pub use index_type::{IndexType, IndexTypeParseError};
pub use list_attr::{ListEntry, ListInput, ListItem, normalize, normalize_by};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{FieldSpec, IndexType, ListInput, ListItem};
}
