use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::traits::DocumentStore;

/// An owned, insertion-ordered JSON object.
///
/// Serializes transparently as the underlying JSON object, so the key order
/// seen on output is exactly the order in which keys were first set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedDocument {
    entries: Map<String, Value>,
}

impl OrderedDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self { entries: Map::new() }
    }

    /// Consume the document and return the backing map.
    pub fn into_map(self) -> Map<String, Value> {
        self.entries
    }
}

impl DocumentStore for OrderedDocument {
    fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }

    fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.entries
    }
}

impl From<Map<String, Value>> for OrderedDocument {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

impl From<OrderedDocument> for Map<String, Value> {
    fn from(doc: OrderedDocument) -> Self {
        doc.entries
    }
}

impl From<OrderedDocument> for Value {
    fn from(doc: OrderedDocument) -> Self {
        Value::Object(doc.entries)
    }
}

impl FromIterator<(String, Value)> for OrderedDocument {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for OrderedDocument {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a OrderedDocument {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocumentError;
    use proptest::prelude::*;
    use serde_json::json;

    fn abc() -> OrderedDocument {
        let mut doc = OrderedDocument::new();
        doc.set("a", 1);
        doc.set("b", 2);
        doc.set("c", 3);
        doc
    }

    fn keys_of(doc: &OrderedDocument) -> Vec<&str> {
        doc.keys().map(String::as_str).collect()
    }

    // -----------------------------------------------------------------------
    // Basic map semantics
    // -----------------------------------------------------------------------

    #[test]
    fn missing_key_reads_as_none() {
        let doc = OrderedDocument::new();
        assert!(doc.get("label").is_none());
        assert!(!doc.has_key("label"));
        assert!(doc.is_empty());
    }

    #[test]
    fn set_appends_new_keys_in_order() {
        let doc = abc();
        assert_eq!(keys_of(&doc), vec!["a", "b", "c"]);
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn overwrite_keeps_original_position() {
        let mut doc = abc();
        let previous = doc.set("a", "first");
        assert_eq!(previous, Some(json!(1)));
        assert_eq!(keys_of(&doc), vec!["a", "b", "c"]);
        assert_eq!(doc.get("a"), Some(&json!("first")));
    }

    #[test]
    fn delete_keeps_remaining_order() {
        let mut doc = abc();
        assert_eq!(doc.delete("b"), Some(json!(2)));
        assert_eq!(keys_of(&doc), vec!["a", "c"]);
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut doc = abc();
        assert_eq!(doc.delete("zzz"), None);
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn fetch_missing_is_error() {
        let doc = abc();
        assert_eq!(doc.fetch("b"), Ok(&json!(2)));
        assert_eq!(
            doc.fetch("nope"),
            Err(DocumentError::KeyNotFound("nope".into()))
        );
    }

    #[test]
    fn value_lookups() {
        let doc = abc();
        assert!(doc.has_value(&json!(3)));
        assert!(!doc.has_value(&json!(4)));
        assert_eq!(doc.key_of(&json!(2)), Some("b"));
        assert_eq!(doc.position("c"), Some(2));
    }

    #[test]
    fn get_or_insert_materializes_once() {
        let mut doc = OrderedDocument::new();
        doc.get_or_insert_with("metadata", || json!([]));
        assert_eq!(doc.get("metadata"), Some(&json!([])));

        doc.set("metadata", json!([{"label": "x"}]));
        let existing = doc.get_or_insert_with("metadata", || json!([]));
        assert_eq!(existing, &json!([{"label": "x"}]));
    }

    // -----------------------------------------------------------------------
    // Bulk and positional operations
    // -----------------------------------------------------------------------

    #[test]
    fn merge_overwrites_in_place_and_appends() {
        let mut doc = abc();
        let other = json!({"b": "two", "d": 4});
        let Value::Object(other) = other else {
            unreachable!()
        };
        doc.merge(other);
        assert_eq!(keys_of(&doc), vec!["a", "b", "c", "d"]);
        assert_eq!(doc.get("b"), Some(&json!("two")));
    }

    #[test]
    fn insert_at_positions() {
        let mut doc = abc();
        doc.insert_at(0, "first", 0).unwrap();
        doc.insert_at(4, "last", 9).unwrap();
        doc.insert_at(2, "middle", 5).unwrap();
        assert_eq!(keys_of(&doc), vec!["first", "a", "middle", "b", "c", "last"]);
    }

    #[test]
    fn insert_at_rejects_bad_index_and_duplicates() {
        let mut doc = abc();
        assert_eq!(
            doc.insert_at(5, "x", 0),
            Err(DocumentError::IndexOutOfBounds { index: 5, len: 3 })
        );
        assert_eq!(
            doc.insert_at(0, "b", 0),
            Err(DocumentError::DuplicateKey("b".into()))
        );
        assert_eq!(keys_of(&doc), vec!["a", "b", "c"]);
    }

    #[test]
    fn insert_relative_to_existing_key() {
        let mut doc = abc();
        doc.insert_before("b", "before_b", 0).unwrap();
        doc.insert_after("c", "after_c", 0).unwrap();
        assert_eq!(keys_of(&doc), vec!["a", "before_b", "b", "c", "after_c"]);

        assert_eq!(
            doc.insert_after("missing", "k", 0),
            Err(DocumentError::KeyNotFound("missing".into()))
        );
    }

    #[test]
    fn filtering_preserves_order() {
        let mut doc = abc();
        let odd = doc.select(|_, v| v.as_i64().is_some_and(|n| n % 2 == 1));
        assert_eq!(keys_of(&odd), vec!["a", "c"]);

        doc.delete_if(|k, _| k == "a");
        assert_eq!(keys_of(&doc), vec!["b", "c"]);

        doc.retain(|k, _| k == "c");
        assert_eq!(keys_of(&doc), vec!["c"]);
    }

    #[test]
    fn shift_removes_first_entry() {
        let mut doc = abc();
        assert_eq!(doc.shift(), Some(("a".to_string(), json!(1))));
        assert_eq!(keys_of(&doc), vec!["b", "c"]);

        doc.clear();
        assert_eq!(doc.shift(), None);
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    #[test]
    fn serializes_in_insertion_order() {
        let mut doc = OrderedDocument::new();
        doc.set("@id", "http://example.org/iiif/book1/manifest");
        doc.set("@type", "sc:Manifest");
        doc.set("label", "Book 1");
        let text = serde_json::to_string(&doc).unwrap();
        assert_eq!(
            text,
            r#"{"@id":"http://example.org/iiif/book1/manifest","@type":"sc:Manifest","label":"Book 1"}"#
        );
    }

    #[test]
    fn deserialized_nested_objects_keep_order() {
        let doc: OrderedDocument =
            serde_json::from_str(r#"{"z":1,"service":{"profile":"p","@id":"i"},"a":2}"#).unwrap();
        assert_eq!(keys_of(&doc), vec!["z", "service", "a"]);
        let nested: Vec<&String> = doc.get("service").unwrap().as_object().unwrap().keys().collect();
        assert_eq!(nested, vec!["profile", "@id"]);
    }

    proptest! {
        #[test]
        fn iteration_follows_insertion_order(
            keys in proptest::collection::hash_set("[a-z@]{1,8}", 0..24)
        ) {
            let keys: Vec<String> = keys.into_iter().collect();
            let mut doc = OrderedDocument::new();
            for (i, key) in keys.iter().enumerate() {
                doc.set(key.clone(), i);
            }
            let seen: Vec<&String> = doc.keys().collect();
            prop_assert_eq!(seen, keys.iter().collect::<Vec<_>>());
        }

        #[test]
        fn delete_preserves_relative_order(
            keys in proptest::collection::hash_set("[a-z]{1,6}", 1..24),
            victim in any::<prop::sample::Index>()
        ) {
            let keys: Vec<String> = keys.into_iter().collect();
            let mut doc: OrderedDocument =
                keys.iter().map(|k| (k.clone(), Value::Null)).collect();
            let removed = victim.get(&keys).clone();
            doc.delete(&removed);
            let expected: Vec<&String> = keys.iter().filter(|k| **k != removed).collect();
            prop_assert_eq!(doc.keys().collect::<Vec<_>>(), expected);
        }
    }
}
