use ddlkit_types::IndexTypeParseError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The index type is not one of the recognized values
    #[error("Invalid index type: '{value}'")]
    InvalidType { value: String },
}

impl From<IndexTypeParseError> for IndexError {
    fn from(err: IndexTypeParseError) -> Self {
        IndexError::InvalidType { value: err.value }
    }
}

/// Reasons an index is not valid against its owning table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The index is not attached to a live table
    #[error("No table")]
    NoTable,

    /// The index has an empty field list
    #[error("No fields")]
    NoFields,

    /// An indexed field cannot be resolved on the table
    #[error("Field '{field}' does not exist in table '{table}'")]
    MissingField { field: String, table: String },
}

/// Result type for index operations
pub type Result<T> = std::result::Result<T, IndexError>;
