//! Data structures for Lanai.
//!
//! All implementations are safe Rust built on owned data; sharing across
//! threads is left to the caller.

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{LanaiTrie, TrieError, TrieNode, TrieObject, TrieResult};
