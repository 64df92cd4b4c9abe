// Copyright (c) 2026 Lanai Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Error types for the Lanai Trie.

/// Errors that can occur in Lanai Trie operations.
///
/// Insertion never fails, so lookup is the only source of errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum TrieError {
    /// No path from the root accounts for the whole query.
    #[error("prefix not in the tree: '{0}'")]
    PrefixNotFound(String),
}

/// Result type for Lanai Trie operations
pub type TrieResult<T> = std::result::Result<T, TrieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrieError::PrefixNotFound("notexists".to_string());
        assert_eq!(err.to_string(), "prefix not in the tree: 'notexists'");
    }

    #[test]
    fn test_error_equality() {
        let err1 = TrieError::PrefixNotFound("abc".to_string());
        let err2 = TrieError::PrefixNotFound("abc".to_string());
        let err3 = TrieError::PrefixNotFound("abd".to_string());

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
