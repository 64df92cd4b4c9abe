//! Lanai Library
//!
//! A compressed prefix trie over strings together with the configuration,
//! error handling and input plumbing used by the `lanai` binary.
//!
//! # Architecture
//!
//! - [`data_structures::lanai_trie`] holds the trie itself and has no
//!   dependency on the rest of the crate beyond logging.
//! - [`config`], [`error`] and [`input`] make up the ambient layer that the
//!   command-line front end is built from.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod input;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lanai.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
