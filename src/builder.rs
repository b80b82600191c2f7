use crate::bundle::Bundle;
use crate::value::{IntoShared, Value};

/// Chainable construction for [`Bundle`].
///
/// Every putter forwards to the wrapped bundle and hands the builder
/// back, so a bundle can be assembled in a single expression and
/// finished with [`build`](BundleBuilder::build):
///
/// ```
/// use bundlemap::BundleBuilder;
///
/// let bundle = BundleBuilder::new()
///     .put_boolean("x", true)
///     .put_int("y", 1)
///     .put_string("z", "a")
///     .build();
///
/// assert_eq!(bundle.len(), 3);
/// ```
///
/// A builder holds nothing besides the bundle it is assembling. Seed it
/// from an existing bundle with
/// [`from_bundle`](BundleBuilder::from_bundle) to start from a copy of
/// that bundle's mappings.
#[derive(Debug, Clone, Default)]
pub struct BundleBuilder {
    bundle: Bundle,
}

impl BundleBuilder {
    /// Creates a builder around a new, empty bundle.
    pub fn new() -> Self {
        Self {
            bundle: Bundle::new(),
        }
    }

    /// Creates a builder around an empty bundle pre-sized for `capacity`
    /// entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bundle: Bundle::with_capacity(capacity),
        }
    }

    /// Creates a builder seeded with a copy of `bundle`'s mappings.
    ///
    /// The copy is shallow in the usual way: array, list, and nested
    /// values stay shared with the original.
    pub fn from_bundle(bundle: &Bundle) -> Self {
        Self {
            bundle: bundle.clone(),
        }
    }

    /// Finishes the chain and hands over the built bundle.
    pub fn build(self) -> Bundle {
        self.bundle
    }

    /// Inserts a raw value; see [`Bundle::put`].
    pub fn put(mut self, key: impl Into<String>, value: impl Into<Option<Value>>) -> Self {
        self.bundle.put(key, value);
        self
    }

    /// Copies every mapping from `other` in; see [`Bundle::put_all`].
    pub fn put_all(mut self, other: &Bundle) -> Self {
        self.bundle.put_all(other);
        self
    }

    /// Inserts a boolean under `key`.
    pub fn put_boolean(mut self, key: impl Into<String>, value: bool) -> Self {
        self.bundle.put_boolean(key, value);
        self
    }

    /// Inserts a byte under `key`.
    pub fn put_byte(mut self, key: impl Into<String>, value: u8) -> Self {
        self.bundle.put_byte(key, value);
        self
    }

    /// Inserts a char under `key`.
    pub fn put_char(mut self, key: impl Into<String>, value: char) -> Self {
        self.bundle.put_char(key, value);
        self
    }

    /// Inserts a double under `key`.
    pub fn put_double(mut self, key: impl Into<String>, value: f64) -> Self {
        self.bundle.put_double(key, value);
        self
    }

    /// Inserts a float under `key`.
    pub fn put_float(mut self, key: impl Into<String>, value: f32) -> Self {
        self.bundle.put_float(key, value);
        self
    }

    /// Inserts an int under `key`.
    pub fn put_int(mut self, key: impl Into<String>, value: i32) -> Self {
        self.bundle.put_int(key, value);
        self
    }

    /// Inserts a long under `key`.
    pub fn put_long(mut self, key: impl Into<String>, value: i64) -> Self {
        self.bundle.put_long(key, value);
        self
    }

    /// Inserts a short under `key`.
    pub fn put_short(mut self, key: impl Into<String>, value: i16) -> Self {
        self.bundle.put_short(key, value);
        self
    }

    /// Inserts a string under `key`.
    pub fn put_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.bundle.put_string(key, value);
        self
    }

    /// Inserts a boolean array under `key`.
    pub fn put_boolean_array(
        mut self,
        key: impl Into<String>,
        value: impl IntoShared<Vec<bool>>,
    ) -> Self {
        self.bundle.put_boolean_array(key, value);
        self
    }

    /// Inserts a byte array under `key`.
    pub fn put_byte_array(mut self, key: impl Into<String>, value: impl IntoShared<Vec<u8>>) -> Self {
        self.bundle.put_byte_array(key, value);
        self
    }

    /// Inserts a char array under `key`.
    pub fn put_char_array(
        mut self,
        key: impl Into<String>,
        value: impl IntoShared<Vec<char>>,
    ) -> Self {
        self.bundle.put_char_array(key, value);
        self
    }

    /// Inserts a double array under `key`.
    pub fn put_double_array(
        mut self,
        key: impl Into<String>,
        value: impl IntoShared<Vec<f64>>,
    ) -> Self {
        self.bundle.put_double_array(key, value);
        self
    }

    /// Inserts a float array under `key`.
    pub fn put_float_array(
        mut self,
        key: impl Into<String>,
        value: impl IntoShared<Vec<f32>>,
    ) -> Self {
        self.bundle.put_float_array(key, value);
        self
    }

    /// Inserts an int array under `key`.
    pub fn put_int_array(mut self, key: impl Into<String>, value: impl IntoShared<Vec<i32>>) -> Self {
        self.bundle.put_int_array(key, value);
        self
    }

    /// Inserts a long array under `key`.
    pub fn put_long_array(
        mut self,
        key: impl Into<String>,
        value: impl IntoShared<Vec<i64>>,
    ) -> Self {
        self.bundle.put_long_array(key, value);
        self
    }

    /// Inserts a short array under `key`.
    pub fn put_short_array(
        mut self,
        key: impl Into<String>,
        value: impl IntoShared<Vec<i16>>,
    ) -> Self {
        self.bundle.put_short_array(key, value);
        self
    }

    /// Inserts a string array under `key`.
    pub fn put_string_array(
        mut self,
        key: impl Into<String>,
        value: impl IntoShared<Vec<String>>,
    ) -> Self {
        self.bundle.put_string_array(key, value);
        self
    }

    /// Inserts an int list under `key`.
    pub fn put_int_list(mut self, key: impl Into<String>, value: impl IntoShared<Vec<i32>>) -> Self {
        self.bundle.put_int_list(key, value);
        self
    }

    /// Inserts a string list under `key`.
    pub fn put_string_list(
        mut self,
        key: impl Into<String>,
        value: impl IntoShared<Vec<String>>,
    ) -> Self {
        self.bundle.put_string_list(key, value);
        self
    }

    /// Inserts a nested bundle under `key`.
    pub fn put_bundle(mut self, key: impl Into<String>, value: impl IntoShared<Bundle>) -> Self {
        self.bundle.put_bundle(key, value);
        self
    }
}
