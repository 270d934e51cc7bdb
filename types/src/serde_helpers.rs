//! Serde helpers for loosely shaped configuration input
//!
//! Index configuration is often hand-written or produced by introspection, so
//! names may arrive as `null` and list attributes in any of the shapes accepted
//! by [`ListInput`](crate::ListInput).

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, de::Error as _};
#[cfg(feature = "serde")]
use serde_json::Value;

#[cfg(feature = "serde")]
use crate::{FieldSpec, ListInput};

/// Deserialize an optional string, mapping `null` to the empty string
#[cfg(feature = "serde")]
pub fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Deserialize any accepted field-list shape into a [`ListInput`]
#[cfg(feature = "serde")]
pub fn field_input<'de, D>(deserializer: D) -> Result<ListInput<FieldSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    ListInput::try_from(value).map_err(D::Error::custom)
}

/// Deserialize any accepted option-list shape into a [`ListInput`]
#[cfg(feature = "serde")]
pub fn value_input<'de, D>(deserializer: D) -> Result<ListInput<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(ListInput::from(value))
}
