// Copyright (c) 2026 Lanai Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Lanai Trie: a compressed prefix trie over strings.
//!
//! Each edge carries a string fragment rather than a single character, so
//! chains of single-child nodes collapse into one node. The trie is a set of
//! keys: there are no associated values and no deletion.
//!
//! # Features
//!
//! - Node splitting that keeps every sibling's first character unique.
//! - Prefix-subtree lookup: find the node at which a query is fully consumed.
//! - Leaf enumeration below a prefix for autocomplete-style listings.
//! - A serializable structural projection for debugging and tests.
//!
//! # Example
//!
//! ```
//! use lanai_lib::data_structures::lanai_trie::{LanaiTrie, TrieError};
//!
//! let mut trie = LanaiTrie::new();
//! trie.add("prefix");
//! trie.add("preload");
//!
//! // "pre" is shared, so the root has a single child
//! let pre = trie.search("pre").unwrap();
//! assert_eq!(pre.segment(), "pre");
//!
//! assert!(matches!(trie.search("notexists"), Err(TrieError::PrefixNotFound(_))));
//! assert_eq!(trie.completions("pre").unwrap(), vec!["prefix", "preload"]);
//! ```
//!
//! # Concurrency
//!
//! The trie is plain owned data. Reads take `&self` and writes take
//! `&mut self`; callers sharing a trie across threads wrap it in a lock.

mod error;
mod node;
mod projection;

use std::fmt;
use std::io::Write;

pub use error::{TrieError, TrieResult};
pub use node::TrieNode;
pub use projection::{TrieObject, DEFAULT_INDENT};

/// A compressed prefix trie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanaiTrie {
    /// Root node. Its segment is always empty.
    root: TrieNode,
}

impl LanaiTrie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key` to the trie.
    ///
    /// Adding a key that is already present, or the empty string, leaves the
    /// trie unchanged.
    pub fn add<K: AsRef<str>>(&mut self, key: K) {
        let root = std::mem::take(&mut self.root);
        self.root = root.insert(key.as_ref());
    }

    /// Returns the node at which `prefix` is fully consumed.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::PrefixNotFound`] when no stored key starts with `prefix`.
    pub fn search<P: AsRef<str>>(&self, prefix: P) -> TrieResult<&TrieNode> {
        self.root.get(prefix.as_ref())
    }

    /// Returns `true` if some stored key starts with `prefix`.
    pub fn contains_prefix<P: AsRef<str>>(&self, prefix: P) -> bool {
        self.search(prefix).is_ok()
    }

    /// Lists the full key of every leaf below `prefix`.
    ///
    /// Keys that were absorbed as a split parent (e.g. `"john"` after
    /// `"johnny"`) are interior nodes and are not listed.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::PrefixNotFound`] when no stored key starts with `prefix`.
    pub fn completions<P: AsRef<str>>(&self, prefix: P) -> TrieResult<Vec<String>> {
        let mut path = String::new();
        let node = self.root.get_with_path(prefix.as_ref(), &mut path)?;

        let mut out = Vec::new();
        node.collect_leaves(&mut path, &mut out);
        Ok(out)
    }

    /// The root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Returns `true` if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Projects the whole trie into a [`TrieObject`].
    pub fn to_object(&self) -> TrieObject {
        self.root.to_object()
    }

    /// Prints the projection as JSON to standard output.
    pub fn print(&self) {
        let stdout = std::io::stdout();
        if let Err(e) = self.print_to(stdout.lock(), DEFAULT_INDENT) {
            tracing::warn!(error = %e, "failed to print trie");
        }
    }

    /// Writes the projection as JSON to `writer`.
    pub fn print_to<W: Write>(&self, writer: W, indent: usize) -> serde_json::Result<()> {
        self.to_object().write_json(writer, indent)
    }
}

impl fmt::Display for LanaiTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_object().to_json(DEFAULT_INDENT).map_err(|_| fmt::Error)?;
        f.write_str(json.trim_end())
    }
}

impl<K: AsRef<str>> Extend<K> for LanaiTrie {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

impl<K: AsRef<str>> FromIterator<K> for LanaiTrie {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
