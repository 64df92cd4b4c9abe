// Copyright (c) 2026 Lanai Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Node implementation for the Lanai Trie.
//!
//! A node owns a segment of the key (not the full path from the root) and its
//! children, keyed by the first `char` of each child's segment. Insertion
//! consumes the node and hands back whatever should occupy its slot in the
//! parent, which is either the same node or a freshly split parent.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::error::{TrieError, TrieResult};

/// A node in the Lanai Trie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Key fragment consumed between the parent and this node. Empty only for the root.
    segment: String,

    /// Children keyed by the first character of their segment
    children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    /// Creates an empty root node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a childless node holding `segment`.
    pub(crate) fn leaf(segment: &str) -> Self {
        Self::with_children(segment, BTreeMap::new())
    }

    fn with_children(segment: &str, children: BTreeMap<char, TrieNode>) -> Self {
        Self {
            segment: segment.to_owned(),
            children,
        }
    }

    /// The key fragment owned by this node.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Iterates over the children in ascending order of their first character.
    pub fn children(&self) -> impl Iterator<Item = &TrieNode> + '_ {
        self.children.values()
    }

    /// Returns the child whose segment starts with `first`, if any.
    pub fn child(&self, first: char) -> Option<&TrieNode> {
        self.children.get(&first)
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(TrieNode::node_count).sum::<usize>()
    }

    /// Inserts `key` below this node and returns the node that should replace
    /// this one in its parent.
    ///
    /// # Arguments
    ///
    /// * `key` - The remainder of the key still to be placed, starting at this node.
    ///
    /// # Returns
    ///
    /// Either `self` (possibly with updated children) or a new split parent
    /// that adopts `self` under a shortened segment.
    pub fn insert(mut self, key: &str) -> TrieNode {
        if key.is_empty() {
            return self;
        }

        let common = common_prefix_len(&self.segment, key);

        // Same length and fully matched: the key is already present
        if key.len() == self.segment.len() && common == key.len() {
            return self;
        }

        if common != 0 && common < self.segment.len() {
            return self.split(common, key);
        }

        let rest = &key[common..];
        let Some(first) = rest.chars().next() else {
            return self;
        };

        match self.children.remove(&first) {
            Some(child) => {
                trace!(segment = %self.segment, next = %first, "descending into child");
                self.children.insert(first, child.insert(rest));
            }
            None => {
                trace!(segment = %self.segment, leaf = %rest, "attaching leaf");
                self.children.insert(first, TrieNode::leaf(rest));
            }
        }

        self
    }

    /// Splits this node after `common` bytes of its segment.
    ///
    /// The old children map is moved under the re-keyed node, never copied.
    fn split(self, common: usize, key: &str) -> TrieNode {
        let TrieNode { segment, children } = self;
        let (head, tail) = segment.split_at(common);
        debug!(segment = %segment, head = %head, tail = %tail, "splitting node");

        let mut parent = TrieNode::leaf(head);
        parent.attach(TrieNode::with_children(tail, children));

        let rest = &key[common..];
        if !rest.is_empty() {
            parent.attach(TrieNode::leaf(rest));
        }

        parent
    }

    fn attach(&mut self, node: TrieNode) {
        if let Some(first) = node.segment.chars().next() {
            self.children.insert(first, node);
        }
    }

    /// Locates the node at which `prefix` is fully consumed.
    ///
    /// The returned node's own segment may extend past the end of `prefix`;
    /// this is a prefix-subtree lookup, not an exact membership check.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::PrefixNotFound`] when no path accounts for all of `prefix`.
    pub fn get(&self, prefix: &str) -> TrieResult<&TrieNode> {
        self.locate(prefix, None).ok_or_else(|| {
            debug!(prefix = %prefix, "prefix not found");
            TrieError::PrefixNotFound(prefix.to_owned())
        })
    }

    /// Like [`TrieNode::get`], but also appends the segments of every node
    /// walked past (excluding the returned node) to `path`.
    pub(crate) fn get_with_path(&self, prefix: &str, path: &mut String) -> TrieResult<&TrieNode> {
        self.locate(prefix, Some(path))
            .ok_or_else(|| TrieError::PrefixNotFound(prefix.to_owned()))
    }

    fn locate<'a>(&'a self, query: &str, mut path: Option<&mut String>) -> Option<&'a TrieNode> {
        let common = common_prefix_len(&self.segment, query);
        let rest = &query[common..];

        let Some(first) = rest.chars().next() else {
            return Some(self);
        };

        // The query diverged inside this segment
        if common < self.segment.len() {
            return None;
        }

        let child = self.children.get(&first)?;
        if let Some(path) = path.as_deref_mut() {
            path.push_str(&self.segment);
        }
        child.locate(rest, path)
    }

    /// Appends the full key of every leaf below this node to `out`.
    ///
    /// `path` holds the key accumulated above this node and is restored
    /// before returning.
    pub(crate) fn collect_leaves(&self, path: &mut String, out: &mut Vec<String>) {
        let mark = path.len();
        path.push_str(&self.segment);

        if self.is_leaf() {
            // An empty root has no keys to report
            if !path.is_empty() {
                out.push(path.clone());
            }
        } else {
            for child in self.children.values() {
                child.collect_leaves(path, out);
            }
        }

        path.truncate(mark);
    }
}

/// Byte length of the longest common leading run of `a` and `b`.
///
/// Compares whole `char`s, so the result is always a char boundary in both strings.
pub(crate) fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(c, _)| c.len_utf8())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(node: &TrieNode) -> Vec<&str> {
        node.children().map(TrieNode::segment).collect()
    }

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(common_prefix_len("prefix", "preload"), 3);
        assert_eq!(common_prefix_len("", "abc"), 0);
        assert_eq!(common_prefix_len("abc", "abc"), 3);
        assert_eq!(common_prefix_len("abc", "xyz"), 0);
        // Multi-byte characters report byte offsets on char boundaries
        assert_eq!(common_prefix_len("café", "cafés"), 5);
        assert_eq!(common_prefix_len("café", "cafe"), 3);
    }

    #[test]
    fn test_insert_into_root() {
        let root = TrieNode::new().insert("prefix");
        assert_eq!(root.segment(), "");
        assert_eq!(segments(&root), vec!["prefix"]);
        assert!(root.child('p').unwrap().is_leaf());
    }

    #[test]
    fn test_insert_empty_is_noop() {
        let root = TrieNode::new().insert("");
        assert!(root.is_leaf());

        let root = root.insert("abc");
        let again = root.clone().insert("");
        assert_eq!(root, again);
    }

    #[test]
    fn test_split_preserves_children() {
        let root = TrieNode::new()
            .insert("johnny")
            .insert("johnson")
            .insert("jo");

        let jo = root.child('j').unwrap();
        assert_eq!(jo.segment(), "jo");
        let hn = jo.child('h').unwrap();
        assert_eq!(hn.segment(), "hn");
        assert_eq!(segments(hn), vec!["ny", "son"]);
    }

    #[test]
    fn test_split_strict_prefix() {
        let node = TrieNode::leaf("johnny").insert("john");
        assert_eq!(node.segment(), "john");
        assert_eq!(segments(&node), vec!["ny"]);
    }

    #[test]
    fn test_same_length_sibling_is_not_dropped() {
        let root = TrieNode::new().insert("abc").insert("abd");
        let ab = root.child('a').unwrap();
        assert_eq!(ab.segment(), "ab");
        assert_eq!(segments(ab), vec!["c", "d"]);
        assert!(root.get("abd").is_ok());
    }

    #[test]
    fn test_get_returns_partially_consumed_node() {
        let root = TrieNode::new().insert("prefix");
        let node = root.get("pre").unwrap();
        assert_eq!(node.segment(), "prefix");
    }

    #[test]
    fn test_get_empty_query_returns_self() {
        let root = TrieNode::new().insert("abc");
        assert_eq!(root.get("").unwrap().segment(), "");
    }

    #[test]
    fn test_get_diverging_inside_segment_fails() {
        let root = TrieNode::new().insert("prefix").insert("prexy");
        assert!(root.get("prex").is_ok());
        assert_eq!(
            root.get("px"),
            Err(TrieError::PrefixNotFound("px".to_string()))
        );
    }

    #[test]
    fn test_get_with_path() {
        let root = TrieNode::new().insert("prefix").insert("preload");
        let mut path = String::new();
        let node = root.get_with_path("prel", &mut path).unwrap();
        assert_eq!(node.segment(), "load");
        assert_eq!(path, "pre");
    }

    #[test]
    fn test_collect_leaves() {
        let root = TrieNode::new()
            .insert("prefix")
            .insert("preload")
            .insert("suffix");
        let mut path = String::new();
        let mut out = Vec::new();
        root.collect_leaves(&mut path, &mut out);
        assert_eq!(out, vec!["prefix", "preload", "suffix"]);
        assert!(path.is_empty());
    }

    #[test]
    fn test_node_count() {
        let root = TrieNode::new().insert("prefix").insert("preload");
        // root, "pre", "fix", "load"
        assert_eq!(root.node_count(), 4);
    }
}
