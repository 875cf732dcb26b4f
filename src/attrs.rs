// Copyright 2014-2017 The arbor Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! An insertion-ordered attribute map.
//!
//! Attribute order is significant: serialization must reproduce it, and the
//! tree builder's "same attributes" comparisons (the Noah's Ark clause) are
//! defined over it. Both tag tokens and elements use this map.
//!
//! Names are stored as the tokenizer produced them: lowercased for HTML, with
//! any foreign-content case adjustment (`definitionURL`, `xlink:href`, ...)
//! applied by the tree builder before the element is created.

use std::fmt;

use indexmap::IndexMap;

/// String-keyed map which iterates in insertion order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AttrMap {
    map: IndexMap<String, String>,
}

impl AttrMap {
    pub fn new() -> AttrMap {
        AttrMap::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(|v| &**v)
    }

    /// Insert a value for `name`. If the name is already present its value is
    /// replaced but it keeps its original position in the ordering.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.map.insert(name.into(), value.into());
    }

    /// Remove `name`, shifting later attributes down to preserve order.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.map.shift_remove(name)
    }

    /// The position of `name` in insertion order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.map.get_index_of(name)
    }

    /// Insert at a specific position. An existing entry with the same name is
    /// moved to that position.
    pub fn insert_at(&mut self, index: usize, name: impl Into<String>, value: impl Into<String>) {
        self.map.shift_insert(index, name.into(), value.into());
    }

    /// Rename a key in place, keeping its position and value.
    ///
    /// Used for foreign-content attribute adjustment. No-op if `from` is
    /// absent; if `to` already exists the original spelling wins.
    pub fn rename(&mut self, from: &str, to: &str) {
        if from == to || self.map.contains_key(to) {
            return;
        }
        if let Some(index) = self.map.get_index_of(from) {
            let (_, value) = self.map.shift_remove_index(index).expect("index just found");
            self.map.shift_insert(index, to.to_string(), value);
        }
    }

    pub fn get_at(&self, index: usize) -> Option<(&str, &str)> {
        self.map.get_index(index).map(|(k, v)| (&**k, &**v))
    }

    pub fn first(&self) -> Option<(&str, &str)> {
        self.get_at(0)
    }

    pub fn last(&self) -> Option<(&str, &str)> {
        self.map.last().map(|(k, v)| (&**k, &**v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (&**k, &**v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(|k| &**k)
    }
}

impl fmt::Debug for AttrMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> AttrMap {
        AttrMap {
            map: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::AttrMap;

    fn sample() -> AttrMap {
        let mut map = AttrMap::new();
        map.insert("id", "x");
        map.insert("class", "a b");
        map.insert("href", "#");
        map
    }

    #[test]
    fn preserves_insertion_order() {
        let map = sample();
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, ["id", "class", "href"]);
        assert_eq!(map.first(), Some(("id", "x")));
        assert_eq!(map.last(), Some(("href", "#")));
    }

    #[test]
    fn update_keeps_index() {
        let mut map = sample();
        map.insert("id", "y");
        assert_eq!(map.index_of("id"), Some(0));
        assert_eq!(map.get("id"), Some("y"));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn index_of_is_stable() {
        let map = sample();
        for i in 0..map.len() {
            let (key, _) = map.get_at(i).unwrap();
            assert_eq!(map.index_of(key), Some(i));
        }
    }

    #[test]
    fn remove_shifts_down() {
        let mut map = sample();
        map.remove("class");
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, ["id", "href"]);
        assert_eq!(map.index_of("href"), Some(1));
    }

    #[test]
    fn insert_at_moves_existing() {
        let mut map = sample();
        map.insert_at(0, "href", "#top");
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, ["href", "id", "class"]);
        assert_eq!(map.get("href"), Some("#top"));
    }

    #[test]
    fn rename_keeps_position_and_value() {
        let mut map = sample();
        map.rename("class", "definitionURL");
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, ["id", "definitionURL", "href"]);
        assert_eq!(map.get("definitionURL"), Some("a b"));
    }

    #[test]
    fn equality_ignores_order() {
        let a = sample();
        let mut b = AttrMap::new();
        b.insert("href", "#");
        b.insert("id", "x");
        b.insert("class", "a b");
        assert_eq!(a, b);
    }
}
