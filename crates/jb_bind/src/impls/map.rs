use alloc::collections::BTreeMap;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;

use indexmap::IndexMap;

use crate::{Mapping, impl_json_mapping};

// Member order follows iteration order: sorted for `BTreeMap`, insertion order
// for `IndexMap`, unspecified for hash maps.

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    #[inline]
    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    #[inline]
    fn append(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    #[inline]
    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    #[inline]
    fn append(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> Mapping for IndexMap<K, V, S> {
    type Key = K;
    type Value = V;

    #[inline]
    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    #[inline]
    fn append(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    #[inline]
    fn prepend(&mut self, key: K, value: V) {
        self.shift_insert(0, key, value);
    }
}

impl_json_mapping!(impl<K, V> BTreeMap<K, V>);
impl_json_mapping!(impl<K, V, S> HashMap<K, V, S>);
impl_json_mapping!(impl<K, V, S> IndexMap<K, V, S>);

#[cfg(feature = "hashbrown")]
impl<K: Eq + Hash, V, S: BuildHasher> Mapping for hashbrown::HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    #[inline]
    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    #[inline]
    fn append(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

#[cfg(feature = "hashbrown")]
impl_json_mapping!(impl<K, V, S> hashbrown::HashMap<K, V, S>);

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use std::collections::HashMap;

    use indexmap::IndexMap;
    use serde_json::json;

    use crate::{
        Category, Context, FromJson, IssueKind, Prepend, from_json, from_json_with_issues,
        read_mapping, to_json,
    };

    #[test]
    fn insertion_order_round_trips() {
        let mut map = IndexMap::new();
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);

        let text = to_json(&map);
        assert_eq!(text, r#"{"a":1,"b":2}"#);

        let back: IndexMap<String, i32> = from_json(&text).unwrap();
        assert_eq!(back.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(back, map);

        let reversed: IndexMap<String, i32> = from_json(r#"{"z": 0, "y": 1}"#).unwrap();
        assert_eq!(reversed.keys().collect::<Vec<_>>(), ["z", "y"]);
    }

    #[test]
    fn nested_values() {
        let text = r#"{"odd": [1, 3], "even": [2]}"#;
        let map: HashMap<String, Vec<u8>> = from_json(text).unwrap();
        assert_eq!(map["odd"], [1, 3]);
        assert_eq!(map["even"], [2]);
        assert_eq!(HashMap::<String, Vec<u8>>::DE_CATEGORY, Category::Object);
    }

    #[test]
    fn invalid_keys_are_skipped() {
        let (map, issues) =
            from_json_with_issues::<BTreeMap<i32, bool>>(r#"{"1": true, "one": false}"#).unwrap();
        assert_eq!(map.len(), 1);
        assert!(map[&1]);
        assert_eq!(issues[0].path, "$.one");
        assert!(matches!(issues[0].kind, IssueKind::InvalidKey { .. }));
    }

    #[test]
    fn array_is_not_an_object() {
        let (map, issues) = from_json_with_issues::<BTreeMap<String, i32>>("[1]").unwrap();
        assert!(map.is_empty());
        assert_eq!(issues[0].to_string(), "$: expected an object, got an array");
    }

    #[test]
    fn prepend_policy() {
        let mut cx = Context::new();
        let mut map: IndexMap<String, u8> = IndexMap::new();
        map.from_json(&json!({"keep": 0}), &mut cx);
        read_mapping::<Prepend, _>(&json!({"a": 1, "b": 2}), &mut map, &mut cx);
        assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "a", "keep"]);
    }
}
