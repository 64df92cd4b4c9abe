//! Output configuration module.
//!
//! Controls how trie projections are rendered by the command-line front end.

use super::{ConfigResult, Validate};
use crate::data_structures::lanai_trie::DEFAULT_INDENT;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest accepted indentation width.
const MAX_INDENT: usize = 16;

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Spaces per nesting level in printed projections
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

impl Validate for OutputConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.indent == 0 || self.indent > MAX_INDENT {
            return Err(ConfigError::ValueOutOfRange {
                key: "output.indent".to_string(),
                message: format!("must be between 1 and {MAX_INDENT}"),
            });
        }

        Ok(())
    }
}
