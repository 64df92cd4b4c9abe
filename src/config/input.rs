//! Input configuration module.
//!
//! Controls how plain-text word lists are split into keys. JSON word lists
//! are taken verbatim.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Input configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    /// Whether to strip surrounding whitespace from each line
    pub trim: bool,

    /// Whether to drop lines that are empty after trimming
    pub skip_blank_lines: bool,

    /// Lines starting with this marker are ignored
    pub comment_prefix: Option<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            trim: true,
            skip_blank_lines: true,
            comment_prefix: Some("#".to_string()),
        }
    }
}

impl Validate for InputConfig {
    fn validate(&self) -> ConfigResult<()> {
        if matches!(self.comment_prefix.as_deref(), Some("")) {
            return Err(ConfigError::ValidationError(
                "comment_prefix must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
