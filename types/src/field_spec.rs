//! Indexed field specification
//!
//! An index entry is either a bare field name or a field name limited to a
//! leading prefix of the stored value (MySQL-style prefix indexes). Identity is
//! always the field name, whichever variant carries it.

use serde_json::Value;

/// A single entry of an index's field list
///
/// # Examples
///
/// ```
/// use ddlkit_types::FieldSpec;
///
/// let id = FieldSpec::bare("id");
/// let title = FieldSpec::prefixed("title", 10);
///
/// assert_eq!(id.to_string(), "id");
/// assert_eq!(title.to_string(), "title(10)");
/// assert_eq!(title.name(), "title");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldSpec {
    /// The whole field is indexed
    Bare(String),
    /// Only the first `prefix_length` characters are indexed
    Prefixed {
        /// Field name
        name: String,
        /// Number of leading characters indexed
        prefix_length: u32,
    },
}

impl FieldSpec {
    /// Create a bare field entry
    #[must_use]
    pub fn bare(name: impl Into<String>) -> Self {
        FieldSpec::Bare(name.into())
    }

    /// Create a prefix-limited field entry
    #[must_use]
    pub fn prefixed(name: impl Into<String>, prefix_length: u32) -> Self {
        FieldSpec::Prefixed {
            name: name.into(),
            prefix_length,
        }
    }

    /// Get the field name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            FieldSpec::Bare(name) | FieldSpec::Prefixed { name, .. } => name,
        }
    }

    /// Get the prefix length, if any
    #[inline]
    #[must_use]
    pub fn prefix_length(&self) -> Option<u32> {
        match self {
            FieldSpec::Bare(_) => None,
            FieldSpec::Prefixed { prefix_length, .. } => Some(*prefix_length),
        }
    }

    /// Build a field entry from a JSON-like value
    ///
    /// Strings become bare entries, scalars are used by their text, and
    /// records need a string `name` with an optional integer `prefix_length`.
    pub fn from_value(value: &Value) -> Result<Self, FieldSpecError> {
        match value {
            Value::String(name) => Ok(FieldSpec::Bare(name.clone())),
            Value::Number(n) => Ok(FieldSpec::Bare(n.to_string())),
            Value::Bool(b) => Ok(FieldSpec::Bare(b.to_string())),
            Value::Object(record) => {
                let Some(name) = record.get("name").and_then(Value::as_str) else {
                    return Err(FieldSpecError::new(value));
                };
                match record.get("prefix_length") {
                    None | Some(Value::Null) => Ok(FieldSpec::bare(name)),
                    Some(len) => len
                        .as_u64()
                        .and_then(|len| u32::try_from(len).ok())
                        .map(|len| FieldSpec::prefixed(name, len))
                        .ok_or_else(|| FieldSpecError::new(value)),
                }
            }
            Value::Null | Value::Array(_) => Err(FieldSpecError::new(value)),
        }
    }
}

impl core::fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldSpec::Bare(name) => f.write_str(name),
            FieldSpec::Prefixed {
                name,
                prefix_length,
            } => write!(f, "{}({})", name, prefix_length),
        }
    }
}

impl From<&str> for FieldSpec {
    fn from(name: &str) -> Self {
        FieldSpec::Bare(name.to_string())
    }
}

impl From<String> for FieldSpec {
    fn from(name: String) -> Self {
        FieldSpec::Bare(name)
    }
}

impl From<(&str, u32)> for FieldSpec {
    fn from((name, prefix_length): (&str, u32)) -> Self {
        FieldSpec::prefixed(name, prefix_length)
    }
}

/// Error returned when a value cannot describe an index field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpecError {
    /// The rejected value, rendered as JSON
    pub found: String,
}

impl FieldSpecError {
    fn new(value: &Value) -> Self {
        Self {
            found: value.to_string(),
        }
    }
}

impl core::fmt::Display for FieldSpecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid index field: {}", self.found)
    }
}

impl std::error::Error for FieldSpecError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_spec_accessors() {
        let id = FieldSpec::bare("id");
        assert_eq!(id.name(), "id");
        assert_eq!(id.prefix_length(), None);

        let title = FieldSpec::from(("title", 10));
        assert_eq!(title.name(), "title");
        assert_eq!(title.prefix_length(), Some(10));
    }

    #[test]
    fn test_field_spec_display() {
        assert_eq!(FieldSpec::from("id").to_string(), "id");
        assert_eq!(FieldSpec::prefixed("body", 255).to_string(), "body(255)");
    }

    #[test]
    fn test_field_spec_from_value() {
        assert_eq!(
            FieldSpec::from_value(&json!("id")).unwrap(),
            FieldSpec::bare("id")
        );
        assert_eq!(
            FieldSpec::from_value(&json!({"name": "title", "prefix_length": 10})).unwrap(),
            FieldSpec::prefixed("title", 10)
        );
        assert_eq!(
            FieldSpec::from_value(&json!({"name": "title"})).unwrap(),
            FieldSpec::bare("title")
        );
    }

    #[test]
    fn test_field_spec_from_value_rejects() {
        assert!(FieldSpec::from_value(&json!(null)).is_err());
        assert!(FieldSpec::from_value(&json!({"prefix_length": 3})).is_err());

        let err = FieldSpec::from_value(&json!({"name": "a", "prefix_length": -1})).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"invalid index field: {"name":"a","prefix_length":-1}"#
        );
    }
}
