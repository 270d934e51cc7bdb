//! Structural equivalence of index definitions
//!
//! Two indexes are equivalent when they describe the same database object:
//! the same type, the same set of fields (order-independent, prefix lengths
//! included), the same options and the same metadata. Names are reconciled
//! with the convention that an unnamed index is implicitly named after its
//! leading field, so a hand-written index matches one read back from a
//! database that auto-named it.

use std::borrow::Cow;

use hashbrown::HashMap;

use super::Index;
use crate::compare;
use crate::trace::trace_index_mismatch;

/// Policies for [`Index::equals_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompareOptions {
    /// Compare index and field names without regard to letter case
    pub case_insensitive: bool,
    /// Skip the name check entirely
    pub ignore_index_names: bool,
}

impl CompareOptions {
    #[must_use]
    pub const fn new(case_insensitive: bool, ignore_index_names: bool) -> Self {
        Self {
            case_insensitive,
            ignore_index_names,
        }
    }

    #[must_use]
    pub const fn case_insensitive(self) -> Self {
        Self {
            case_insensitive: true,
            ..self
        }
    }

    #[must_use]
    pub const fn ignore_index_names(self) -> Self {
        Self {
            ignore_index_names: true,
            ..self
        }
    }

    fn fold<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if self.case_insensitive {
            Cow::Owned(name.to_uppercase())
        } else {
            Cow::Borrowed(name)
        }
    }

    fn same_name(&self, a: &str, b: &str) -> bool {
        self.fold(a) == self.fold(b)
    }
}

impl Index {
    /// Case-sensitive equivalence, names included
    #[must_use]
    pub fn equals(&self, other: &Index) -> bool {
        self.equals_with(other, CompareOptions::default())
    }

    /// Equivalence under the given comparison policies
    ///
    /// # Examples
    ///
    /// ```
    /// use ddlkit_core::{CompareOptions, Index};
    ///
    /// let written = Index::new("").with_fields("id, email");
    /// let introspected = Index::new("id").with_fields("id, email");
    /// assert!(written.equals(&introspected));
    ///
    /// let renamed = Index::new("ID").with_fields("EMAIL, ID");
    /// assert!(!introspected.equals(&renamed));
    /// assert!(introspected.equals_with(&renamed, CompareOptions::default().case_insensitive()));
    /// ```
    #[must_use]
    pub fn equals_with(&self, other: &Index, options: CompareOptions) -> bool {
        match self.first_mismatch(other, options) {
            None => true,
            Some(check) => {
                trace_index_mismatch!(self.name, check);
                false
            }
        }
    }

    /// Name of the first failing check, in evaluation order
    fn first_mismatch(&self, other: &Index, options: CompareOptions) -> Option<&'static str> {
        if !self.base.equals(&other.base) {
            return Some("base");
        }
        if !options.ignore_index_names && !self.names_match(other, options) {
            return Some("name");
        }
        if self.ty != other.ty {
            return Some("type");
        }
        if !self.fields_match(other, options) {
            return Some("fields");
        }
        if !compare::unordered_equal(&self.options, &other.options) {
            return Some("options");
        }
        if !compare::extra_equal(self.base.extra(), other.base.extra()) {
            return Some("extra");
        }
        None
    }

    /// An unnamed index matches one whose name is its own leading field,
    /// checked in both directions; otherwise names must agree.
    fn names_match(&self, other: &Index, options: CompareOptions) -> bool {
        let implicit = (self.name.is_empty()
            && options.same_name(&other.name, other.first_field_name()))
            || (other.name.is_empty() && options.same_name(&self.name, self.first_field_name()));

        implicit || options.same_name(&self.name, &other.name)
    }

    /// Order-independent field comparison, prefix lengths included
    fn fields_match(&self, other: &Index, options: CompareOptions) -> bool {
        let mut remaining: HashMap<Cow<'_, str>, Option<u32>> = other
            .fields
            .iter()
            .map(|field| (options.fold(field.name()), field.prefix_length()))
            .collect();

        for field in &self.fields {
            match remaining.remove(&*options.fold(field.name())) {
                Some(len) if len == field.prefix_length() => {}
                _ => return false,
            }
        }

        remaining.is_empty()
    }
}
