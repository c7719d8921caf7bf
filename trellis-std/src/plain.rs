//! Plain-path index.
//!
//! Routes without parameters that are not static paths never enter the
//! trie. They live in a single hash map keyed by the full normalized path,
//! so resolving them costs one lookup however large the trie grows.

use crate::{leaf::LeafData, path};
use std::collections::HashMap;
use trellis_core::{RouteResult, Router};

/// A `HashMap` from literal path to leaf data.
#[derive(Debug)]
pub struct PlainRouteIndex<H> {
    map: HashMap<String, LeafData<H>>,
}

impl<H> Default for PlainRouteIndex<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> PlainRouteIndex<H> {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// The entry for `path`, created if missing.
    ///
    /// The key is normalized the same way request paths are.
    pub fn leaf_or_insert(&mut self, path: &str) -> &mut LeafData<H> {
        self.map.entry(path::normalize(path).to_string()).or_default()
    }

    /// The entry for an already normalized path.
    pub fn get(&self, path: &str) -> Option<&LeafData<H>> {
        self.map.get(path)
    }

    /// Get the number of routes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<H: Send + Sync> Router<str, LeafData<H>> for PlainRouteIndex<H> {
    fn route(&self, key: &str) -> RouteResult<'_, LeafData<H>> {
        match self.get(key) {
            Some(v) => RouteResult::Matched(v),
            None => RouteResult::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_route() {
        let mut index: PlainRouteIndex<()> = PlainRouteIndex::new();
        index.leaf_or_insert("/health");
        index.leaf_or_insert("/about/");

        assert_eq!(index.len(), 2);
        assert!(index.contains("/health"));
        assert!(index.contains("/about"));
        assert!(!index.contains("/about/"));
        assert!(!index.route("/missing").is_matched());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut index: PlainRouteIndex<()> = PlainRouteIndex::new();
        index.leaf_or_insert("/a");
        index.leaf_or_insert("/a");
        assert_eq!(index.len(), 1);
    }
}
