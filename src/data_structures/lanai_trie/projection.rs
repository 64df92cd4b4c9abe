// Copyright (c) 2026 Lanai Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Structural projection of a trie for display and debugging.

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::node::TrieNode;

/// Default indentation used when rendering a projection as JSON.
pub const DEFAULT_INDENT: usize = 2;

/// Plain nested view of a node and its descendants.
///
/// Children appear in the same order the node enumerates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieObject {
    /// The node's own segment
    pub segment: String,

    /// Projections of the node's children
    pub children: Vec<TrieObject>,
}

impl TrieObject {
    /// Renders the projection as pretty-printed JSON.
    ///
    /// # Arguments
    ///
    /// * `indent` - Number of spaces per nesting level.
    pub fn to_json(&self, indent: usize) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        self.write_json(&mut buf, indent)?;
        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Writes the projection as pretty-printed JSON followed by a newline.
    pub fn write_json<W: Write>(&self, mut writer: W, indent: usize) -> serde_json::Result<()> {
        let indent = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
        self.serialize(&mut ser)?;
        writer.write_all(b"\n").map_err(serde_json::Error::io)
    }
}

impl From<&TrieNode> for TrieObject {
    fn from(node: &TrieNode) -> Self {
        Self {
            segment: node.segment().to_owned(),
            children: node.children().map(TrieObject::from).collect(),
        }
    }
}

impl TrieNode {
    /// Projects this node and its subtree into a [`TrieObject`].
    pub fn to_object(&self) -> TrieObject {
        TrieObject::from(self)
    }
}
