use bundlemap::{Bundle, BundleError, Kind, Value};

fn put_a_lot(bundle: &mut Bundle) {
    bundle.put_boolean("boolVal", true);
    bundle.put_byte("byteVal", 1);
    bundle.put_char("charVal", 'X');
    bundle.put_double("doubleVal", f64::MAX);
    bundle.put_float("floatVal", f32::MAX);
    bundle.put_int("intVal", i32::MAX);
    bundle.put_long("longVal", i64::MAX);
    bundle.put_short("shortVal", i16::MAX);
    bundle.put_string("stringVal", "YAY Bundle!");
}

#[test]
fn test_put_get() {
    let mut bundle = Bundle::new();
    bundle.put_boolean("testBool1", true);

    assert!(bundle.get_boolean("testBool1"));
    assert!(bundle.contains_key("testBool1"));
}

#[test]
fn test_get_default_for_missing_key() {
    let mut bundle = Bundle::new();
    bundle.put_boolean("testBool2", true);

    assert!(bundle.get_boolean_or("unrealKey", true));
    assert_eq!(bundle.get_int_or("unrealKey", 42), 42);
    assert_eq!(bundle.get_string("unrealKey"), None);
    assert_eq!(bundle.get_string_or("unrealKey", "fallback"), "fallback");
}

#[test]
fn test_size() {
    let mut bundle = Bundle::new();
    put_a_lot(&mut bundle);

    assert_eq!(bundle.len(), 9);
}

#[test]
fn test_every_scalar_round_trips() {
    let mut bundle = Bundle::new();
    put_a_lot(&mut bundle);

    assert!(bundle.get_boolean("boolVal"));
    assert_eq!(bundle.get_byte("byteVal"), 1);
    assert_eq!(bundle.get_char("charVal"), 'X');
    assert_eq!(bundle.get_double("doubleVal"), f64::MAX);
    assert_eq!(bundle.get_float("floatVal"), f32::MAX);
    assert_eq!(bundle.get_int("intVal"), i32::MAX);
    assert_eq!(bundle.get_long("longVal"), i64::MAX);
    assert_eq!(bundle.get_short("shortVal"), i16::MAX);
    assert_eq!(bundle.get_string("stringVal"), Some("YAY Bundle!"));
}

#[test]
fn test_remove() {
    let mut bundle = Bundle::new();
    put_a_lot(&mut bundle);

    assert!(bundle.remove("stringVal"));
    assert_eq!(bundle.get_string("stringVal"), None);
    assert!(!bundle.contains_key("stringVal"));
    assert_eq!(bundle.len(), 8);

    // Removing an absent key is a no-op.
    assert!(!bundle.remove("stringVal"));
    assert_eq!(bundle.len(), 8);
}

#[test]
fn test_zero_defaults_on_empty_bundle() {
    let bundle = Bundle::new();

    assert!(!bundle.get_boolean("k"));
    assert_eq!(bundle.get_byte("k"), 0);
    assert_eq!(bundle.get_char("k"), '\0');
    assert_eq!(bundle.get_double("k"), 0.0);
    assert_eq!(bundle.get_float("k"), 0.0);
    assert_eq!(bundle.get_int("k"), 0);
    assert_eq!(bundle.get_long("k"), 0);
    assert_eq!(bundle.get_short("k"), 0);
    assert_eq!(bundle.get_string("k"), None);
    assert!(bundle.get_int_array("k").is_none());
    assert!(bundle.get_string_list("k").is_none());
    assert!(bundle.get_bundle("k").is_none());
}

#[test]
fn test_wrong_kind_falls_back_to_default() {
    let mut bundle = Bundle::new();
    bundle.put_int("number", 7);

    assert_eq!(bundle.get_string("number"), None);
    assert!(!bundle.get_boolean("number"));
    assert_eq!(bundle.get_long_or("number", -1), -1);
    assert!(bundle.get_int_array("number").is_none());

    // The right kind still comes back.
    assert_eq!(bundle.get_int("number"), 7);
}

#[test]
fn test_arrays_and_lists_are_distinct_kinds() {
    let mut bundle = Bundle::new();
    bundle.put_int_array("nums", vec![1, 2, 3]);
    bundle.put_string_list("names", vec!["a".to_string(), "b".to_string()]);

    assert!(bundle.get_int_list("nums").is_none());
    assert!(bundle.get_string_array("names").is_none());

    assert_eq!(bundle.get_int_array("nums").unwrap().borrow().len(), 3);
    assert_eq!(bundle.get_string_list("names").unwrap().borrow().len(), 2);
}

#[test]
fn test_explicit_null() {
    let mut bundle = Bundle::new();
    bundle.put("reserved", None);

    assert!(bundle.contains_key("reserved"));
    assert_eq!(bundle.len(), 1);
    assert!(bundle.get("reserved").is_none());
    assert_eq!(bundle.get_string("reserved"), None);
    assert_eq!(bundle.get_int_or("reserved", 9), 9);
    assert_eq!(
        bundle.try_get("reserved"),
        Err(BundleError::NullValue("reserved".to_string()))
    );

    assert!(bundle.remove("reserved"));
    assert_eq!(
        bundle.try_get("reserved"),
        Err(BundleError::KeyNotFound("reserved".to_string()))
    );
}

#[test]
fn test_strict_lookups() {
    let mut bundle = Bundle::new();
    bundle.put_string("name", "abc");

    assert_eq!(bundle.try_get("name"), Ok(&Value::String("abc".to_string())));
    assert_eq!(
        bundle.try_get("nope"),
        Err(BundleError::KeyNotFound("nope".to_string()))
    );

    assert!(bundle.expect_kind("name", Kind::String).is_ok());
    assert_eq!(
        bundle.expect_kind("name", Kind::Int),
        Err(BundleError::KindMismatch {
            key: "name".to_string(),
            expected: Kind::Int,
            found: Kind::String,
        })
    );
}

#[test]
fn test_error_display() {
    let key_not_found = BundleError::KeyNotFound("k".to_string());
    let null_value = BundleError::NullValue("k".to_string());
    let kind_mismatch = BundleError::KindMismatch {
        key: "k".to_string(),
        expected: Kind::Int,
        found: Kind::StringList,
    };

    assert_eq!(format!("{}", key_not_found), "key `k` not found in bundle");
    assert_eq!(format!("{}", null_value), "key `k` holds an explicit null");
    assert_eq!(
        format!("{}", kind_mismatch),
        "key `k` holds a string list value, expected int"
    );

    assert!(format!("{:?}", key_not_found).contains("KeyNotFound"));
}

#[test]
fn test_clear_and_is_empty() {
    let mut bundle = Bundle::new();
    assert!(bundle.is_empty());

    put_a_lot(&mut bundle);
    assert!(!bundle.is_empty());

    bundle.clear();
    assert_eq!(bundle.len(), 0);
    assert!(bundle.is_empty());
    assert_eq!(bundle.keys().count(), 0);
    assert!(!bundle.contains_key("boolVal"));
}

#[test]
fn test_keys() {
    let mut bundle = Bundle::new();
    bundle.put_int("a", 1);
    bundle.put_int("b", 2);
    bundle.put_int("a", 3); // overwrite, not a new key

    let mut keys: Vec<&str> = bundle.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_put_overwrites_across_kinds() {
    let mut bundle = Bundle::new();
    bundle.put_int("slot", 5);
    bundle.put_string("slot", "five");

    assert_eq!(bundle.len(), 1);
    assert_eq!(bundle.get_int("slot"), 0);
    assert_eq!(bundle.get_string("slot"), Some("five"));
}

#[test]
fn test_put_all_copies_and_overwrites() {
    let mut target = Bundle::new();
    target.put_int("shared", 1);
    target.put_string("only_target", "t");

    let mut source = Bundle::new();
    source.put_int("shared", 2);
    source.put_boolean("only_source", true);

    target.put_all(&source);

    assert_eq!(target.len(), 3);
    assert_eq!(target.get_int("shared"), 2);
    assert_eq!(target.get_string("only_target"), Some("t"));
    assert!(target.get_boolean("only_source"));

    // The source is untouched.
    assert_eq!(source.len(), 2);
}

#[test]
fn test_clone_copies_mappings() {
    let mut bundle = Bundle::new();
    put_a_lot(&mut bundle);

    let copy = bundle.clone();
    assert_eq!(copy.len(), bundle.len());
    assert_eq!(copy, bundle);
    assert_eq!(copy.get_string("stringVal"), Some("YAY Bundle!"));
}

#[test]
fn test_clone_shares_array_values() {
    let mut bundle = Bundle::new();
    bundle.put_int_array("nums", vec![1, 2, 3]);

    let mut copy = bundle.clone();

    // Mutating the array through the copy is visible in the original.
    copy.get_int_array("nums").unwrap().borrow_mut().push(4);
    assert_eq!(bundle.get_int_array("nums").unwrap().borrow().len(), 4);

    // Key mappings stay independent.
    copy.put_int("extra", 1);
    copy.remove("nums");
    assert!(!bundle.contains_key("extra"));
    assert!(bundle.contains_key("nums"));
}

#[test]
fn test_shared_array_between_bundles() {
    let mut first = Bundle::new();
    first.put_string_array("tags", vec!["red".to_string()]);

    let shared = first.get_string_array("tags").unwrap();
    let mut second = Bundle::new();
    second.put_string_array("tags", shared);

    second
        .get_string_array("tags")
        .unwrap()
        .borrow_mut()
        .push("blue".to_string());

    let seen_by_first = first.get_string_array("tags").unwrap();
    assert_eq!(*seen_by_first.borrow(), vec!["red".to_string(), "blue".to_string()]);
}

#[test]
fn test_nested_bundles() {
    let mut inner = Bundle::new();
    inner.put_int("depth", 1);

    let mut outer = Bundle::new();
    outer.put_bundle("inner", inner);

    let handle = outer.get_bundle("inner").unwrap();
    assert_eq!(handle.borrow().get_int("depth"), 1);

    // Mutations through the handle are visible on the next lookup.
    handle.borrow_mut().put_int("depth", 2);
    assert_eq!(outer.get_bundle("inner").unwrap().borrow().get_int("depth"), 2);
}

#[test]
fn test_with_capacity_and_default() {
    let sized = Bundle::with_capacity(16);
    assert!(sized.is_empty());

    let defaulted: Bundle = Default::default();
    assert!(defaulted.is_empty());
    assert_eq!(defaulted, Bundle::new());
}
