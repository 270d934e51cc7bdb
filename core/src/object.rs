//! Behavior shared by every schema object
//!
//! Schema objects compose an [`ObjectBase`] rather than inheriting from one. The
//! base carries the object's kind, an open bag of dialect-specific metadata, and
//! the last error recorded by a non-fatal check such as `Index::is_valid`.

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde_json::Value;

/// Dialect-specific metadata attached to a schema object
pub type Extra = BTreeMap<String, Value>;

/// Discriminates the kinds of schema objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Table,
    Field,
    Index,
}

impl EntityKind {
    /// Get the plural string representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "tables",
            Self::Field => "fields",
            Self::Index => "indexes",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State shared by every schema object
#[derive(Clone, Debug)]
pub struct ObjectBase {
    kind: EntityKind,
    extra: Extra,
    error: RefCell<Option<String>>,
}

impl ObjectBase {
    /// Create an empty base for an object of the given kind
    #[must_use]
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            extra: Extra::new(),
            error: RefCell::new(None),
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn extra(&self) -> &Extra {
        &self.extra
    }

    /// Merge key/value pairs into the metadata bag; later values win
    pub fn set_extra<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.extra
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    pub fn remove_extra(&mut self, key: &str) -> Option<Value> {
        self.extra.remove(key)
    }

    pub fn clear_extra(&mut self) {
        self.extra.clear();
    }

    /// Record `message` as the last error and return `false`
    ///
    /// Lets checks report a failure without aborting:
    ///
    /// ```ignore
    /// return self.base.error("No fields");
    /// ```
    pub fn error(&self, message: impl Into<String>) -> bool {
        *self.error.borrow_mut() = Some(message.into());
        false
    }

    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    /// Generic equality shared by all objects: identity, then kind
    #[must_use]
    pub fn equals(&self, other: &ObjectBase) -> bool {
        std::ptr::eq(self, other) || self.kind == other.kind
    }
}

/// A schema object built on an [`ObjectBase`]
///
/// The provided methods expose the base's metadata and error state on the
/// object itself.
pub trait SchemaObject {
    /// The kind every instance of this object reports
    const KIND: EntityKind;

    fn base(&self) -> &ObjectBase;

    fn base_mut(&mut self) -> &mut ObjectBase;

    fn extra(&self) -> &Extra {
        self.base().extra()
    }

    fn extra_value(&self, key: &str) -> Option<&Value> {
        self.base().extra().get(key)
    }

    fn set_extra<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.base_mut().set_extra(pairs);
    }

    fn remove_extra(&mut self, key: &str) -> Option<Value> {
        self.base_mut().remove_extra(key)
    }

    fn clear_extra(&mut self) {
        self.base_mut().clear_extra();
    }

    /// The message recorded by the most recent failed check
    fn last_error(&self) -> Option<String> {
        self.base().last_error()
    }
}
