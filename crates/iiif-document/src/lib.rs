//! Insertion-ordered JSON document store for IIIF Presentation resources.
//!
//! Every IIIF resource (manifest, sequence, canvas, ...) is a JSON-LD object
//! whose key order is meaningful to humans reading the output and is expected
//! to survive a parse/serialize round-trip. This crate provides the storage
//! layer that guarantees it.
//!
//! # Types
//!
//! - [`OrderedDocument`] -- owned, order-preserving `String -> Value` mapping
//! - [`DocumentStore`] -- map behaviours (get/set/delete, positional insert,
//!   bulk merge, filtering) provided on top of any type exposing a backing map
//!
//! # Design Rules
//!
//! 1. Iteration always yields entries in insertion order.
//! 2. Overwriting an existing key keeps its original position.
//! 3. Deleting a key never reorders the remaining entries.
//! 4. Keys are unique; positional inserts refuse keys that already exist.

pub mod document;
pub mod error;
pub mod traits;

pub use document::OrderedDocument;
pub use error::{DocumentError, DocumentResult};
pub use traits::DocumentStore;

/// Re-exported so downstream crates agree on the value type.
pub use serde_json::{Map, Value};
