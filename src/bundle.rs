use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::BundleError;
use crate::value::{IntoShared, Kind, SharedBundle, SharedVec, Value};

/// A heterogeneous map of string keys to typed values.
///
/// A `Bundle` can hold values of many shapes at once (primitive scalars,
/// strings, per-scalar arrays, int/string lists, and nested bundles) and
/// hands them back through typed getters that never fail: a missing key,
/// an explicit null, or a value of another kind all degrade to the
/// getter's default instead of erroring.
///
/// # Examples
///
/// ```
/// use bundlemap::Bundle;
///
/// let mut bundle = Bundle::new();
/// bundle.put_string("title", "report");
/// bundle.put_int("page", 4);
///
/// assert_eq!(bundle.get_string("title"), Some("report"));
/// assert_eq!(bundle.get_int("page"), 4);
///
/// // Absent or mismatched keys fall back instead of erroring.
/// assert_eq!(bundle.get_int("missing"), 0);
/// assert_eq!(bundle.get_int_or("missing", 42), 42);
/// assert_eq!(bundle.get_string("page"), None);
/// ```
///
/// When the reason for a failed lookup matters, the strict accessors
/// [`try_get`](Bundle::try_get) and [`expect_kind`](Bundle::expect_kind)
/// report it as a [`BundleError`] instead of defaulting.
///
/// Cloning a bundle copies the key mapping itself, but array, list, and
/// nested-bundle values are shared with the clone (see [`SharedVec`]):
/// mutating a shared array is visible through both bundles, while adding
/// or removing keys in the clone is not.
///
/// `Bundle` offers no concurrency contract. Shared payloads are
/// reference-counted cells, so the type is not `Send` or `Sync`.
#[derive(Clone, Default, PartialEq)]
pub struct Bundle {
    entries: HashMap<String, Option<Value>>,
}

impl Bundle {
    /// Creates a new, empty bundle.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates an empty bundle pre-sized for `capacity` entries.
    ///
    /// The bundle grows as needed; the capacity is only a hint.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of mappings in this bundle.
    ///
    /// An explicit null still counts as a mapping.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if this bundle holds no mappings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every mapping from this bundle.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns true if `key` is mapped in this bundle, even to an
    /// explicit null.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over the keys mapped in this bundle, in no particular
    /// order. Keys are unique by construction.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Removes any mapping for `key`.
    ///
    /// Returns whether a mapping was removed; removing an absent key is a
    /// no-op.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Inserts a raw value, replacing any existing mapping for `key`.
    ///
    /// Passing `None` records an explicit null: the key stays present
    /// (`contains_key` is true, it counts toward [`len`](Bundle::len))
    /// but holds no value.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Option<Value>>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Copies every mapping from `other` into this bundle, with `other`'s
    /// values winning on overlapping keys.
    ///
    /// Array, list, and nested values come across shared, not copied.
    pub fn put_all(&mut self, other: &Bundle) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Returns the raw value mapped to `key`, if there is one.
    ///
    /// A missing key and an explicit null both yield `None`; use
    /// [`try_get`](Bundle::try_get) to tell them apart.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).and_then(Option::as_ref)
    }

    /// Strict lookup, distinguishing the ways a [`get`](Bundle::get) can
    /// come up empty.
    ///
    /// # Errors
    ///
    /// - [`BundleError::KeyNotFound`] if `key` has no mapping
    /// - [`BundleError::NullValue`] if `key` is mapped to an explicit null
    pub fn try_get(&self, key: &str) -> Result<&Value, BundleError> {
        match self.entries.get(key) {
            None => Err(BundleError::KeyNotFound(key.to_string())),
            Some(None) => Err(BundleError::NullValue(key.to_string())),
            Some(Some(value)) => Ok(value),
        }
    }

    /// Strict lookup that also checks the stored value's shape.
    ///
    /// # Errors
    ///
    /// Everything [`try_get`](Bundle::try_get) returns, plus
    /// [`BundleError::KindMismatch`] if the value is not of the
    /// `expected` kind.
    pub fn expect_kind(&self, key: &str, expected: Kind) -> Result<&Value, BundleError> {
        let value = self.try_get(key)?;
        let found = value.kind();
        if found == expected {
            Ok(value)
        } else {
            Err(BundleError::KindMismatch {
                key: key.to_string(),
                expected,
                found,
            })
        }
    }

    // Typed getters. Scalars default to the kind's zero value; strings,
    // arrays, lists, and nested bundles default to `None`.

    /// Returns the boolean for `key`, or `false`.
    pub fn get_boolean(&self, key: &str) -> bool {
        self.get_boolean_or(key, false)
    }

    /// Returns the boolean for `key`, or `default`.
    pub fn get_boolean_or(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(Value::Boolean(v)) => *v,
            _ => default,
        }
    }

    /// Returns the byte for `key`, or `0`.
    pub fn get_byte(&self, key: &str) -> u8 {
        self.get_byte_or(key, 0)
    }

    /// Returns the byte for `key`, or `default`.
    pub fn get_byte_or(&self, key: &str, default: u8) -> u8 {
        match self.get(key) {
            Some(Value::Byte(v)) => *v,
            _ => default,
        }
    }

    /// Returns the char for `key`, or `'\0'`.
    pub fn get_char(&self, key: &str) -> char {
        self.get_char_or(key, '\0')
    }

    /// Returns the char for `key`, or `default`.
    pub fn get_char_or(&self, key: &str, default: char) -> char {
        match self.get(key) {
            Some(Value::Char(v)) => *v,
            _ => default,
        }
    }

    /// Returns the double for `key`, or `0.0`.
    pub fn get_double(&self, key: &str) -> f64 {
        self.get_double_or(key, 0.0)
    }

    /// Returns the double for `key`, or `default`.
    pub fn get_double_or(&self, key: &str, default: f64) -> f64 {
        match self.get(key) {
            Some(Value::Double(v)) => *v,
            _ => default,
        }
    }

    /// Returns the float for `key`, or `0.0`.
    pub fn get_float(&self, key: &str) -> f32 {
        self.get_float_or(key, 0.0)
    }

    /// Returns the float for `key`, or `default`.
    pub fn get_float_or(&self, key: &str, default: f32) -> f32 {
        match self.get(key) {
            Some(Value::Float(v)) => *v,
            _ => default,
        }
    }

    /// Returns the int for `key`, or `0`.
    pub fn get_int(&self, key: &str) -> i32 {
        self.get_int_or(key, 0)
    }

    /// Returns the int for `key`, or `default`.
    pub fn get_int_or(&self, key: &str, default: i32) -> i32 {
        match self.get(key) {
            Some(Value::Int(v)) => *v,
            _ => default,
        }
    }

    /// Returns the long for `key`, or `0`.
    pub fn get_long(&self, key: &str) -> i64 {
        self.get_long_or(key, 0)
    }

    /// Returns the long for `key`, or `default`.
    pub fn get_long_or(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            Some(Value::Long(v)) => *v,
            _ => default,
        }
    }

    /// Returns the short for `key`, or `0`.
    pub fn get_short(&self, key: &str) -> i16 {
        self.get_short_or(key, 0)
    }

    /// Returns the short for `key`, or `default`.
    pub fn get_short_or(&self, key: &str, default: i16) -> i16 {
        match self.get(key) {
            Some(Value::Short(v)) => *v,
            _ => default,
        }
    }

    /// Returns the string for `key`, or `None`.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(Value::String(v)) => Some(v),
            _ => None,
        }
    }

    /// Returns the string for `key`, or `default`.
    pub fn get_string_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_string(key).unwrap_or(default)
    }

    /// Returns the boolean array for `key`, or `None`.
    pub fn get_boolean_array(&self, key: &str) -> Option<SharedVec<bool>> {
        match self.get(key) {
            Some(Value::BooleanArray(v)) => Some(Rc::clone(v)),
            _ => None,
        }
    }

    /// Returns the byte array for `key`, or `None`.
    pub fn get_byte_array(&self, key: &str) -> Option<SharedVec<u8>> {
        match self.get(key) {
            Some(Value::ByteArray(v)) => Some(Rc::clone(v)),
            _ => None,
        }
    }

    /// Returns the char array for `key`, or `None`.
    pub fn get_char_array(&self, key: &str) -> Option<SharedVec<char>> {
        match self.get(key) {
            Some(Value::CharArray(v)) => Some(Rc::clone(v)),
            _ => None,
        }
    }

    /// Returns the double array for `key`, or `None`.
    pub fn get_double_array(&self, key: &str) -> Option<SharedVec<f64>> {
        match self.get(key) {
            Some(Value::DoubleArray(v)) => Some(Rc::clone(v)),
            _ => None,
        }
    }

    /// Returns the float array for `key`, or `None`.
    pub fn get_float_array(&self, key: &str) -> Option<SharedVec<f32>> {
        match self.get(key) {
            Some(Value::FloatArray(v)) => Some(Rc::clone(v)),
            _ => None,
        }
    }

    /// Returns the int array for `key`, or `None`.
    ///
    /// The returned handle aliases the stored array; mutations through it
    /// are visible to every bundle sharing the value.
    pub fn get_int_array(&self, key: &str) -> Option<SharedVec<i32>> {
        match self.get(key) {
            Some(Value::IntArray(v)) => Some(Rc::clone(v)),
            _ => None,
        }
    }

    /// Returns the long array for `key`, or `None`.
    pub fn get_long_array(&self, key: &str) -> Option<SharedVec<i64>> {
        match self.get(key) {
            Some(Value::LongArray(v)) => Some(Rc::clone(v)),
            _ => None,
        }
    }

    /// Returns the short array for `key`, or `None`.
    pub fn get_short_array(&self, key: &str) -> Option<SharedVec<i16>> {
        match self.get(key) {
            Some(Value::ShortArray(v)) => Some(Rc::clone(v)),
            _ => None,
        }
    }

    /// Returns the string array for `key`, or `None`.
    pub fn get_string_array(&self, key: &str) -> Option<SharedVec<String>> {
        match self.get(key) {
            Some(Value::StringArray(v)) => Some(Rc::clone(v)),
            _ => None,
        }
    }

    /// Returns the int list for `key`, or `None`.
    ///
    /// Lists and arrays are distinct kinds: a value stored with
    /// [`put_int_array`](Bundle::put_int_array) is not found here.
    pub fn get_int_list(&self, key: &str) -> Option<SharedVec<i32>> {
        match self.get(key) {
            Some(Value::IntList(v)) => Some(Rc::clone(v)),
            _ => None,
        }
    }

    /// Returns the string list for `key`, or `None`.
    pub fn get_string_list(&self, key: &str) -> Option<SharedVec<String>> {
        match self.get(key) {
            Some(Value::StringList(v)) => Some(Rc::clone(v)),
            _ => None,
        }
    }

    /// Returns the nested bundle for `key`, or `None`.
    pub fn get_bundle(&self, key: &str) -> Option<SharedBundle> {
        match self.get(key) {
            Some(Value::Bundle(v)) => Some(Rc::clone(v)),
            _ => None,
        }
    }

    // Typed putters. Each replaces any existing mapping for the key,
    // whatever its kind.

    /// Inserts a boolean under `key`.
    pub fn put_boolean(&mut self, key: impl Into<String>, value: bool) {
        self.put(key, Value::Boolean(value));
    }

    /// Inserts a byte under `key`.
    pub fn put_byte(&mut self, key: impl Into<String>, value: u8) {
        self.put(key, Value::Byte(value));
    }

    /// Inserts a char under `key`.
    pub fn put_char(&mut self, key: impl Into<String>, value: char) {
        self.put(key, Value::Char(value));
    }

    /// Inserts a double under `key`.
    pub fn put_double(&mut self, key: impl Into<String>, value: f64) {
        self.put(key, Value::Double(value));
    }

    /// Inserts a float under `key`.
    pub fn put_float(&mut self, key: impl Into<String>, value: f32) {
        self.put(key, Value::Float(value));
    }

    /// Inserts an int under `key`.
    pub fn put_int(&mut self, key: impl Into<String>, value: i32) {
        self.put(key, Value::Int(value));
    }

    /// Inserts a long under `key`.
    pub fn put_long(&mut self, key: impl Into<String>, value: i64) {
        self.put(key, Value::Long(value));
    }

    /// Inserts a short under `key`.
    pub fn put_short(&mut self, key: impl Into<String>, value: i16) {
        self.put(key, Value::Short(value));
    }

    /// Inserts a string under `key`.
    pub fn put_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.put(key, Value::String(value.into()));
    }

    /// Inserts a boolean array under `key`.
    ///
    /// Accepts either an owned `Vec` or an already-shared cell; see
    /// [`IntoShared`].
    pub fn put_boolean_array(&mut self, key: impl Into<String>, value: impl IntoShared<Vec<bool>>) {
        self.put(key, Value::BooleanArray(value.into_shared()));
    }

    /// Inserts a byte array under `key`.
    pub fn put_byte_array(&mut self, key: impl Into<String>, value: impl IntoShared<Vec<u8>>) {
        self.put(key, Value::ByteArray(value.into_shared()));
    }

    /// Inserts a char array under `key`.
    pub fn put_char_array(&mut self, key: impl Into<String>, value: impl IntoShared<Vec<char>>) {
        self.put(key, Value::CharArray(value.into_shared()));
    }

    /// Inserts a double array under `key`.
    pub fn put_double_array(&mut self, key: impl Into<String>, value: impl IntoShared<Vec<f64>>) {
        self.put(key, Value::DoubleArray(value.into_shared()));
    }

    /// Inserts a float array under `key`.
    pub fn put_float_array(&mut self, key: impl Into<String>, value: impl IntoShared<Vec<f32>>) {
        self.put(key, Value::FloatArray(value.into_shared()));
    }

    /// Inserts an int array under `key`.
    pub fn put_int_array(&mut self, key: impl Into<String>, value: impl IntoShared<Vec<i32>>) {
        self.put(key, Value::IntArray(value.into_shared()));
    }

    /// Inserts a long array under `key`.
    pub fn put_long_array(&mut self, key: impl Into<String>, value: impl IntoShared<Vec<i64>>) {
        self.put(key, Value::LongArray(value.into_shared()));
    }

    /// Inserts a short array under `key`.
    pub fn put_short_array(&mut self, key: impl Into<String>, value: impl IntoShared<Vec<i16>>) {
        self.put(key, Value::ShortArray(value.into_shared()));
    }

    /// Inserts a string array under `key`.
    pub fn put_string_array(&mut self, key: impl Into<String>, value: impl IntoShared<Vec<String>>) {
        self.put(key, Value::StringArray(value.into_shared()));
    }

    /// Inserts an int list under `key`.
    pub fn put_int_list(&mut self, key: impl Into<String>, value: impl IntoShared<Vec<i32>>) {
        self.put(key, Value::IntList(value.into_shared()));
    }

    /// Inserts a string list under `key`.
    pub fn put_string_list(&mut self, key: impl Into<String>, value: impl IntoShared<Vec<String>>) {
        self.put(key, Value::StringList(value.into_shared()));
    }

    /// Inserts a nested bundle under `key`.
    pub fn put_bundle(&mut self, key: impl Into<String>, value: impl IntoShared<Bundle>) {
        self.put(key, Value::Bundle(value.into_shared()));
    }
}

/// Identity string only; contents are deliberately not dumped, and the
/// format carries no stability contract.
impl fmt::Debug for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bundle@{:p}", self)
    }
}
