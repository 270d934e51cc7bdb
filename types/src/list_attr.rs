//! List-valued attribute normalization
//!
//! Index fields and index options both accept loosely shaped input: nothing, a
//! single value, a comma-delimited string, a list, or a list mixing scalars,
//! records and nested lists. [`normalize_by`] turns any of these into a
//! canonical ordered sequence with duplicates removed.
//!
//! ```text
//! "id, name"                 -> [id, name]
//! ["id", "name", "id"]       -> [id, name]
//! [["id", "name"], "email"]  -> [id, name, email]
//! ```

use std::collections::HashSet;
use std::hash::Hash;

use serde_json::Value;

use crate::field_spec::{FieldSpec, FieldSpecError};

/// An element type that can appear in a list-valued attribute
pub trait ListEntry: Sized {
    /// Split a comma-delimited entry into its trimmed, non-empty parts
    ///
    /// Returns `None` when the entry is not delimited text and must be kept
    /// as-is.
    fn split_delimited(&self) -> Option<Vec<Self>>;
}

impl ListEntry for FieldSpec {
    fn split_delimited(&self) -> Option<Vec<Self>> {
        match self {
            FieldSpec::Bare(text) => Some(split_text(text).map(FieldSpec::bare).collect()),
            FieldSpec::Prefixed { .. } => None,
        }
    }
}

impl ListEntry for Value {
    fn split_delimited(&self) -> Option<Vec<Self>> {
        match self {
            Value::String(text) => Some(split_text(text).map(Value::from).collect()),
            _ => None,
        }
    }
}

fn split_text(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(str::trim).filter(|part| !part.is_empty())
}

/// One element of a list input: a single entry or a nested list
#[derive(Clone, Debug, PartialEq)]
pub enum ListItem<T> {
    Entry(T),
    Nested(Vec<T>),
}

/// Raw input accepted by a list-valued attribute
#[derive(Clone, Debug, PartialEq)]
pub enum ListInput<T> {
    /// No value; normalizes to an empty list
    Unset,
    /// A single entry, possibly comma-delimited text
    Single(T),
    /// A list of entries and nested lists
    Many(Vec<ListItem<T>>),
}

impl<T> Default for ListInput<T> {
    fn default() -> Self {
        ListInput::Unset
    }
}

impl<T> ListInput<T> {
    /// Returns `true` if the input carries no entries at all
    #[must_use]
    pub fn is_unset(&self) -> bool {
        match self {
            ListInput::Unset => true,
            ListInput::Single(_) => false,
            ListInput::Many(items) => items.is_empty(),
        }
    }

    fn into_flat(self) -> Vec<T> {
        match self {
            ListInput::Unset => Vec::new(),
            ListInput::Single(entry) => vec![entry],
            ListInput::Many(items) => items
                .into_iter()
                .flat_map(|item| match item {
                    ListItem::Entry(entry) => vec![entry],
                    ListItem::Nested(entries) => entries,
                })
                .collect(),
        }
    }
}

/// Normalize a list input, deduplicating by the projected identity key
///
/// Delimited text is split, one level of nesting is flattened, and the first
/// occurrence of each key wins. Relative order is preserved.
///
/// # Examples
///
/// ```
/// use ddlkit_types::{FieldSpec, ListInput, normalize_by};
///
/// let fields = normalize_by(ListInput::from("id, name, id"), |f: &FieldSpec| {
///     f.name().to_string()
/// });
/// assert_eq!(fields, vec![FieldSpec::bare("id"), FieldSpec::bare("name")]);
/// ```
pub fn normalize_by<T, K, F>(input: ListInput<T>, key: F) -> Vec<T>
where
    T: ListEntry,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for entry in input.into_flat() {
        let parts = match entry.split_delimited() {
            Some(parts) => parts,
            None => vec![entry],
        };
        for part in parts {
            if seen.insert(key(&part)) {
                out.push(part);
            }
        }
    }

    out
}

/// Normalize a list of opaque values, deduplicating by value
///
/// Strings are keyed by their text and every other value by its JSON rendering,
/// so `"1"` and `1` stay distinct.
pub fn normalize(input: ListInput<Value>) -> Vec<Value> {
    normalize_by(input, |value| match value {
        Value::String(text) => (true, text.clone()),
        other => (false, other.to_string()),
    })
}

// =============================================================================
// Conversions
// =============================================================================

impl From<FieldSpec> for ListItem<FieldSpec> {
    fn from(entry: FieldSpec) -> Self {
        ListItem::Entry(entry)
    }
}

impl From<&str> for ListItem<FieldSpec> {
    fn from(entry: &str) -> Self {
        ListItem::Entry(FieldSpec::from(entry))
    }
}

impl From<String> for ListItem<FieldSpec> {
    fn from(entry: String) -> Self {
        ListItem::Entry(FieldSpec::from(entry))
    }
}

impl<E: Into<FieldSpec>> From<Vec<E>> for ListItem<FieldSpec> {
    fn from(entries: Vec<E>) -> Self {
        ListItem::Nested(entries.into_iter().map(Into::into).collect())
    }
}

impl From<Value> for ListItem<Value> {
    fn from(entry: Value) -> Self {
        ListItem::Entry(entry)
    }
}

impl From<&str> for ListItem<Value> {
    fn from(entry: &str) -> Self {
        ListItem::Entry(Value::from(entry))
    }
}

impl From<String> for ListItem<Value> {
    fn from(entry: String) -> Self {
        ListItem::Entry(Value::from(entry))
    }
}

impl<E: Into<Value>> From<Vec<E>> for ListItem<Value> {
    fn from(entries: Vec<E>) -> Self {
        ListItem::Nested(entries.into_iter().map(Into::into).collect())
    }
}

impl<T, E: Into<ListItem<T>>> From<Vec<E>> for ListInput<T> {
    fn from(items: Vec<E>) -> Self {
        ListInput::Many(items.into_iter().map(Into::into).collect())
    }
}

impl<T, E: Into<ListItem<T>>, const N: usize> From<[E; N]> for ListInput<T> {
    fn from(items: [E; N]) -> Self {
        ListInput::Many(items.into_iter().map(Into::into).collect())
    }
}

impl<T> From<Option<ListInput<T>>> for ListInput<T> {
    fn from(input: Option<ListInput<T>>) -> Self {
        input.unwrap_or_default()
    }
}

impl From<&str> for ListInput<FieldSpec> {
    fn from(text: &str) -> Self {
        ListInput::Single(FieldSpec::from(text))
    }
}

impl From<String> for ListInput<FieldSpec> {
    fn from(text: String) -> Self {
        ListInput::Single(FieldSpec::from(text))
    }
}

impl From<FieldSpec> for ListInput<FieldSpec> {
    fn from(entry: FieldSpec) -> Self {
        ListInput::Single(entry)
    }
}

impl From<&str> for ListInput<Value> {
    fn from(text: &str) -> Self {
        ListInput::Single(Value::from(text))
    }
}

impl From<String> for ListInput<Value> {
    fn from(text: String) -> Self {
        ListInput::Single(Value::from(text))
    }
}

/// JSON `null` is unset, arrays are lists (arrays inside them are nested
/// lists) and any other value is a single entry.
impl From<Value> for ListInput<Value> {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ListInput::Unset,
            Value::Array(items) => ListInput::Many(
                items
                    .into_iter()
                    .filter(|item| !item.is_null())
                    .map(|item| match item {
                        Value::Array(nested) => ListItem::Nested(nested),
                        other => ListItem::Entry(other),
                    })
                    .collect(),
            ),
            other => ListInput::Single(other),
        }
    }
}

/// Same shape rules as the `Value` conversion, with each entry read through
/// [`FieldSpec::from_value`].
impl TryFrom<Value> for ListInput<FieldSpec> {
    type Error = FieldSpecError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match ListInput::<Value>::from(value) {
            ListInput::Unset => Ok(ListInput::Unset),
            ListInput::Single(entry) => FieldSpec::from_value(&entry).map(ListInput::Single),
            ListInput::Many(items) => items
                .iter()
                .map(|item| match item {
                    ListItem::Entry(entry) => FieldSpec::from_value(entry).map(ListItem::Entry),
                    ListItem::Nested(entries) => entries
                        .iter()
                        .filter(|entry| !entry.is_null())
                        .map(FieldSpec::from_value)
                        .collect::<Result<Vec<_>, _>>()
                        .map(ListItem::Nested),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(ListInput::Many),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(input: impl Into<ListInput<FieldSpec>>) -> Vec<String> {
        normalize_by(input.into(), |f: &FieldSpec| f.name().to_string())
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        assert_eq!(fields(vec!["id", "name", "id"]), ["id", "name"]);
        assert_eq!(fields(vec!["b", "a", "b", "c", "a"]), ["b", "a", "c"]);
    }

    #[test]
    fn test_comma_string_matches_list() {
        assert_eq!(fields("id, name"), fields(vec!["id", "name"]));
        assert_eq!(fields(vec!["id ,name", "email"]), ["id", "name", "email"]);
        assert_eq!(fields(" id ,, "), ["id"]);
    }

    #[test]
    fn test_nested_lists_flatten_one_level() {
        let input: ListInput<FieldSpec> = ListInput::Many(vec![
            ListItem::from(vec!["id", "name"]),
            ListItem::from("email"),
            ListItem::from(vec!["name"]),
        ]);
        assert_eq!(fields(input), ["id", "name", "email"]);
    }

    #[test]
    fn test_records_deduplicate_by_name() {
        let input: ListInput<FieldSpec> = ListInput::from(vec![
            FieldSpec::bare("id"),
            FieldSpec::prefixed("title", 10),
            FieldSpec::bare("title"),
            FieldSpec::prefixed("id", 4),
        ]);
        assert_eq!(fields(input), ["id", "title(10)"]);
    }

    #[test]
    fn test_unset_and_empty_clear() {
        assert!(fields(ListInput::Unset).is_empty());
        assert!(fields(Vec::<&str>::new()).is_empty());
        assert!(fields("").is_empty());
        assert!(ListInput::<FieldSpec>::from(None).is_unset());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_by(ListInput::from("a, b, a, c"), |f: &FieldSpec| {
            f.name().to_string()
        });
        let twice = normalize_by(ListInput::from(once.clone()), |f: &FieldSpec| {
            f.name().to_string()
        });
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_values() {
        let options = normalize(ListInput::from(json!(["USING BTREE", "1", 1, ["1", true]])));
        assert_eq!(options, vec![json!("USING BTREE"), json!("1"), json!(1), json!(true)]);

        assert_eq!(
            normalize(ListInput::from("a,b")),
            vec![json!("a"), json!("b")]
        );
        assert!(normalize(ListInput::from(json!(null))).is_empty());
    }

    #[test]
    fn test_field_input_from_json() {
        let input = ListInput::<FieldSpec>::try_from(json!([
            "id, name",
            {"name": "title", "prefix_length": 10},
            ["email", null]
        ]))
        .unwrap();
        assert_eq!(fields(input), ["id", "name", "title(10)", "email"]);

        assert!(ListInput::<FieldSpec>::try_from(json!([{"size": 1}])).is_err());
    }
}
