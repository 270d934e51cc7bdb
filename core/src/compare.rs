//! Deep structural equality for option lists and metadata bags
//!
//! Values are compared by content, not by representation: objects compare by
//! key set and per-key value, arrays element-wise, and numbers by numeric value
//! so `1` and `1.0` are equal.

use serde_json::{Number, Value};

use crate::object::Extra;

/// Compare two values structurally
///
/// # Examples
///
/// ```
/// use ddlkit_core::compare::values_equal;
/// use serde_json::json;
///
/// assert!(values_equal(&json!({"a": [1, 2.0]}), &json!({"a": [1.0, 2]})));
/// assert!(!values_equal(&json!("1"), &json!(1)));
/// ```
#[must_use]
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| values_equal(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, a)| b.get(key).is_some_and(|b| values_equal(a, b)))
        }
        _ => false,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Compare two value collections as multisets, ignoring order
#[must_use]
pub fn unordered_equal(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut matched = vec![false; b.len()];
    a.iter().all(|a| {
        let hit = b
            .iter()
            .enumerate()
            .position(|(i, b)| !matched[i] && values_equal(a, b));
        match hit {
            Some(i) => {
                matched[i] = true;
                true
            }
            None => false,
        }
    })
}

/// Compare two metadata bags key by key
#[must_use]
pub fn extra_equal(a: &Extra, b: &Extra) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|(key, a)| b.get(key).is_some_and(|b| values_equal(a, b)))
}
