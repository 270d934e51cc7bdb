//! Tracing utilities for schema object validation and comparison.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level event naming the first check that made two indexes differ.
///
/// ```ignore
/// trace_index_mismatch!(self.name(), "fields");
/// ```
macro_rules! trace_index_mismatch {
    ($index:expr, $check:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(index = %$index, check = $check, "ddlkit.index.mismatch");
        #[cfg(not(feature = "tracing"))]
        let _ = (&$index, &$check);
    };
}

/// Emit a debug-level event for a failed validity check.
macro_rules! trace_invalid_index {
    ($index:expr, $reason:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(index = %$index, reason = %$reason, "ddlkit.index.invalid");
        #[cfg(not(feature = "tracing"))]
        let _ = (&$index, &$reason);
    };
}

/// Emit a warn-level event for a rejected index type value.
macro_rules! trace_rejected_type {
    ($index:expr, $value:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(index = %$index, value = %$value, "ddlkit.index.rejected_type");
        #[cfg(not(feature = "tracing"))]
        let _ = (&$index, &$value);
    };
}

pub(crate) use {trace_index_mismatch, trace_invalid_index, trace_rejected_type};
