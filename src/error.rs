use thiserror::Error;

use crate::value::Kind;

/// Reasons a strict lookup can fail.
///
/// Only the strict accessors ([`Bundle::try_get`](crate::Bundle::try_get)
/// and [`Bundle::expect_kind`](crate::Bundle::expect_kind)) surface these;
/// the typed getters fall back to a default value instead of erroring.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BundleError {
    /// The requested key has no mapping at all.
    #[error("key `{0}` not found in bundle")]
    KeyNotFound(String),
    /// The key is mapped, but to an explicit null value.
    #[error("key `{0}` holds an explicit null")]
    NullValue(String),
    /// The key is mapped to a value of a different shape.
    #[error("key `{key}` holds a {found} value, expected {expected}")]
    KindMismatch {
        key: String,
        expected: Kind,
        found: Kind,
    },
}
