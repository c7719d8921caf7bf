//! Segment trie for templated and mounted routes.
//!
//! Each node maps a literal path segment, or the reserved [`WILDCARD`] key,
//! to a child node. Templated segments are stored under the wildcard, so
//! `/users/{id}` and `/users/{name}` share the node `/ -> users -> *`.
//!
//! # Lookup Order
//!
//! At every level the descent tries, in order:
//!
//! 1. the literal child for the segment,
//! 2. the wildcard child (capturing the segment),
//! 3. the current leaf, if it is a mount with a prefix (stopping there).
//!
//! There is no backtracking: once a step is taken an earlier alternative is
//! never revisited.

use crate::{leaf::LeafData, path};
use std::collections::HashMap;
use trellis_core::WILDCARD;

/// A node in the segment trie.
#[derive(Debug)]
pub struct Node<H> {
    children: HashMap<String, Node<H>>,
    leaf: Option<LeafData<H>>,
}

impl<H> Default for Node<H> {
    fn default() -> Self {
        Self {
            children: HashMap::new(),
            leaf: None,
        }
    }
}

impl<H> Node<H> {
    /// Create a new empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// The child stored under `segment`. Never creates nodes.
    pub fn child(&self, segment: &str) -> Option<&Node<H>> {
        self.children.get(segment)
    }

    /// The wildcard child, if any templated route passes through here.
    pub fn wildcard(&self) -> Option<&Node<H>> {
        self.children.get(WILDCARD)
    }

    /// The child stored under `segment`, created if missing.
    ///
    /// Only registration calls this.
    pub fn child_or_insert(&mut self, segment: &str) -> &mut Node<H> {
        self.children.entry(segment.to_string()).or_default()
    }

    /// The leaf data, if a route ends at this node.
    pub fn leaf(&self) -> Option<&LeafData<H>> {
        self.leaf.as_ref()
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Outcome of walking a request path down the trie.
#[derive(Debug)]
pub struct Descent<'t, 'p, H> {
    /// The node the walk ended on.
    pub node: &'t Node<H>,
    /// Segment values consumed by wildcard children, in order.
    pub captured: Vec<&'p str>,
    /// Set when the walk stopped early at a mount; the prefix to strip.
    pub mount_prefix: Option<&'t str>,
}

/// A trie of path segments.
///
/// # Example
///
/// ```rust
/// use trellis_std::trie::SegmentTrie;
///
/// let mut trie: SegmentTrie<u8> = SegmentTrie::new();
/// trie.leaf_or_insert("/users/*/posts/*");
///
/// let descent = trie.descend("/users/42/posts/7").unwrap();
/// assert_eq!(descent.captured, ["42", "7"]);
/// assert!(descent.node.leaf().is_some());
/// assert!(trie.descend("/users/42/comments").is_none());
/// ```
#[derive(Debug)]
pub struct SegmentTrie<H> {
    root: Node<H>,
    size: usize,
}

impl<H> Default for SegmentTrie<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> SegmentTrie<H> {
    /// Create a new empty trie.
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            size: 0,
        }
    }

    /// The leaf for a wildcard-rewritten path, created along with any
    /// missing nodes.
    pub fn leaf_or_insert(&mut self, path: &str) -> &mut LeafData<H> {
        let mut node = &mut self.root;
        for segment in path::segments(path) {
            node = node.child_or_insert(segment);
        }
        if node.leaf.is_none() {
            self.size += 1;
        }
        node.leaf.get_or_insert_with(LeafData::default)
    }

    /// Walk a normalized request path.
    ///
    /// Returns `None` when a segment matches neither a literal nor a
    /// wildcard child and no mount can take over.
    pub fn descend<'t, 'p>(&'t self, path: &'p str) -> Option<Descent<'t, 'p, H>> {
        let mut node = &self.root;
        let mut captured = Vec::new();

        for segment in path::segments(path) {
            if let Some(child) = node.child(segment) {
                node = child;
                continue;
            }

            if let Some(child) = node.wildcard() {
                captured.push(segment);
                node = child;
                continue;
            }

            if let Some(prefix) = node.leaf().and_then(LeafData::mount_prefix) {
                return Some(Descent {
                    node,
                    captured,
                    mount_prefix: Some(prefix),
                });
            }

            return None;
        }

        Some(Descent {
            node,
            captured,
            mount_prefix: None,
        })
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the trie has no leaves.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The root node (above the `/` component).
    pub fn root(&self) -> &Node<H> {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::{PathTemplate, RouteKind};

    fn mount_at(trie: &mut SegmentTrie<&'static str>, path: &str) {
        trie.leaf_or_insert(path)
            .configure(
                PathTemplate::parse(path).unwrap(),
                RouteKind::Mount("mount"),
                true,
            )
            .unwrap();
    }

    #[test]
    fn test_new_trie_is_empty() {
        let trie: SegmentTrie<()> = SegmentTrie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.root().child_count(), 0);
    }

    #[test]
    fn test_insert_shares_prefixes() {
        let mut trie: SegmentTrie<()> = SegmentTrie::new();
        trie.leaf_or_insert("/users/*");
        trie.leaf_or_insert("/users/*/posts");
        trie.leaf_or_insert("/users/*");

        assert_eq!(trie.len(), 2);
        let users = trie.root().child("/").and_then(|n| n.child("users")).unwrap();
        assert_eq!(users.child_count(), 1);
    }

    #[test]
    fn test_literal_beats_wildcard() {
        let mut trie: SegmentTrie<()> = SegmentTrie::new();
        trie.leaf_or_insert("/users/*");
        trie.leaf_or_insert("/users/me");

        let descent = trie.descend("/users/me").unwrap();
        assert!(descent.captured.is_empty());

        let descent = trie.descend("/users/42").unwrap();
        assert_eq!(descent.captured, ["42"]);
    }

    #[test]
    fn test_descend_does_not_create_nodes() {
        let mut trie: SegmentTrie<()> = SegmentTrie::new();
        trie.leaf_or_insert("/a/b");

        assert!(trie.descend("/a/c").is_none());
        let a = trie.root().child("/").and_then(|n| n.child("a")).unwrap();
        assert_eq!(a.child_count(), 1);
        assert!(a.child("c").is_none());
    }

    #[test]
    fn test_intermediate_node_has_no_leaf() {
        let mut trie: SegmentTrie<()> = SegmentTrie::new();
        trie.leaf_or_insert("/a/*/c");

        let descent = trie.descend("/a/b").unwrap();
        assert!(descent.node.leaf().is_none());
    }

    #[test]
    fn test_mount_stops_descent() {
        let mut trie = SegmentTrie::new();
        mount_at(&mut trie, "/assets");

        let descent = trie.descend("/assets/js/app.js").unwrap();
        assert_eq!(descent.mount_prefix, Some("/assets"));
        assert!(descent.node.leaf().is_some());
    }

    #[test]
    fn test_wildcard_beats_mount() {
        let mut trie = SegmentTrie::new();
        mount_at(&mut trie, "/files");
        trie.leaf_or_insert("/files/*");

        let descent = trie.descend("/files/report").unwrap();
        assert_eq!(descent.mount_prefix, None);
        assert_eq!(descent.captured, ["report"]);
    }
}
