//! # ddlkit
//!
//! Schema modeling primitives for database index definitions.
//!
//! ## Quick Start
//!
//! ```rust
//! use ddlkit::prelude::*;
//!
//! let users = Table::new("users")
//!     .with_field(Field::new("id", "INTEGER"))
//!     .with_field(Field::new("email", "VARCHAR(255)"))
//!     .into_ref();
//!
//! // Written by hand, unnamed
//! let declared = Index::new("").with_fields("id, email").with_table(&users);
//! assert!(declared.is_valid());
//!
//! // Read back from a database that named it after its leading column
//! let introspected = Index::new("id").with_fields(vec!["id", "email"]);
//! assert!(declared.equals(&introspected));
//! ```
//!
//! ## Features
//!
//! | Feature   | Enables                                         |
//! |-----------|-------------------------------------------------|
//! | `std`     | Standard library support (default)              |
//! | `serde`   | Deserializing [`IndexConfig`] and value types   |
//! | `tracing` | `tracing` events from validation and comparison |

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for index operations
pub use ddlkit_core::Result;

pub use ddlkit_core::{
    CompareOptions, EntityKind, Extra, Field, Index, IndexConfig, ObjectBase, SchemaObject, Table,
    TableRef, TableWeakRef,
};
pub use ddlkit_types::{FieldSpec, IndexType, ListInput, ListItem, normalize, normalize_by};
pub use serde_json::Value;

/// Error types
pub mod error {
    pub use ddlkit_core::error::{IndexError, ValidationError};
    pub use ddlkit_types::{FieldSpecError, IndexTypeParseError};
}

/// Deep structural equality for option and metadata values
pub use ddlkit_core::compare;

/// Leaf value types: list normalization, field specs and index types
pub use ddlkit_types as types;

/// Prelude module for commonly used types
pub mod prelude {
    pub use ddlkit_core::prelude::*;
    pub use ddlkit_core::Value;
}
