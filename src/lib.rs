//! # bundlemap
//!
//! A heterogeneous key-value bundle with typed accessors and a chainable
//! builder.
//!
//! `bundlemap` provides a single map abstraction that can hold values of
//! many known shapes (boolean, the numeric scalars, char, string,
//! per-scalar arrays, int/string lists, and nested bundles) under string
//! keys, with type-safe retrieval that falls back to a default when a key
//! is absent or holds a value of another kind.
//!
//! ## Key Features
//!
//! - **Typed accessors**: one getter/putter pair per supported kind
//! - **Default fallback**: getters never fail; a missing key, an explicit
//!   null, or a kind mismatch all degrade to the kind's default
//! - **Strict lookups on the side**: `try_get` and `expect_kind` report
//!   *why* a lookup failed, for callers that want errors instead
//! - **Chainable builder**: assemble a bundle in one expression
//! - **Shallow clones**: cloning copies the key mapping but shares array,
//!   list, and nested-bundle values
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use bundlemap::Bundle;
//!
//! let mut bundle = Bundle::new();
//!
//! // Store values of different kinds under string keys
//! bundle.put_boolean("enabled", true);
//! bundle.put_int("retries", 3);
//! bundle.put_string("name", "worker-1");
//! bundle.put_int_array("ports", vec![8080, 8081]);
//!
//! // Retrieve them with typed getters
//! assert!(bundle.get_boolean("enabled"));
//! assert_eq!(bundle.get_int("retries"), 3);
//! assert_eq!(bundle.get_string("name"), Some("worker-1"));
//! assert_eq!(bundle.get_int_array("ports").unwrap().borrow().len(), 2);
//!
//! // Lookups that can't be satisfied fall back instead of erroring
//! assert_eq!(bundle.get_int("missing"), 0);
//! assert_eq!(bundle.get_int_or("missing", 42), 42);
//! assert_eq!(bundle.get_string("retries"), None); // wrong kind
//! ```
//!
//! ### Chained Construction
//!
//! ```rust
//! use bundlemap::BundleBuilder;
//!
//! let extras = BundleBuilder::new()
//!     .put_string("document", "quarterly.pdf")
//!     .put_int("page", 4)
//!     .put_boolean("read_only", true)
//!     .build();
//!
//! assert_eq!(extras.len(), 3);
//! assert_eq!(extras.get_string("document"), Some("quarterly.pdf"));
//! ```
//!
//! ### Shared Values Across Clones
//!
//! Cloning a bundle copies the mapping but not the contained arrays,
//! lists, or nested bundles; those stay shared:
//!
//! ```rust
//! use bundlemap::Bundle;
//!
//! let mut original = Bundle::new();
//! original.put_int_array("hits", vec![1, 2, 3]);
//!
//! let mut copy = original.clone();
//!
//! // Mutating the array through the copy is visible in the original...
//! copy.get_int_array("hits").unwrap().borrow_mut().push(4);
//! assert_eq!(original.get_int_array("hits").unwrap().borrow().len(), 4);
//!
//! // ...but the key mappings themselves are independent.
//! copy.put_int("only_in_copy", 1);
//! assert!(!original.contains_key("only_in_copy"));
//! ```
//!
//! ### Strict Lookups
//!
//! ```rust
//! use bundlemap::{Bundle, BundleError, Kind};
//!
//! let mut bundle = Bundle::new();
//! bundle.put_string("name", "worker-1");
//! bundle.put("reserved", None); // key present, explicit null
//!
//! match bundle.try_get("nonexistent") {
//!     Err(BundleError::KeyNotFound(key)) => println!("no mapping for {}", key),
//!     other => panic!("unexpected: {:?}", other),
//! }
//!
//! assert!(matches!(
//!     bundle.try_get("reserved"),
//!     Err(BundleError::NullValue(_))
//! ));
//! assert!(matches!(
//!     bundle.expect_kind("name", Kind::Int),
//!     Err(BundleError::KindMismatch { .. })
//! ));
//! ```
//!
//! ## Thread Safety
//!
//! `Bundle` is a single-threaded type. Shared payloads are
//! reference-counted cells (`Rc<RefCell<_>>`), so bundles are neither
//! `Send` nor `Sync`; there is no locking and no concurrency contract.

mod builder;
mod bundle;
mod error;
mod value;

pub use builder::BundleBuilder;
pub use bundle::Bundle;
pub use error::BundleError;
pub use value::{IntoShared, Kind, SharedBundle, SharedVec, Value};
