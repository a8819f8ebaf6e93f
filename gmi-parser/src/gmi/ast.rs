//! AST definitions for the gemtext format
//!
//!     This module provides the document tree produced by the AST builder. Unlike richer
//!     markup formats, gemtext has no nesting: the document is a flat, ordered sequence of
//!     block nodes, one level deep. Order is significant and preserved exactly as the blocks
//!     were encountered in the source.
//!
//! Nodes and Aggregation
//!
//!     Header and paragraph lines map 1:1 to nodes. The three remaining kinds are
//!     aggregates: a maximal run of consecutive link lines folds into one `Links` node, a
//!     run of list elements into one `List` node, and a run of verbatim blocks into one
//!     `Quote` node (in practice one fenced block per run, but the model supports several).
//!
//!     Nodes live only for the duration of one conversion call; the renderer holds a
//!     read-only view and produces no nodes itself.

/// One entry of a `Links` node.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LinkEntry {
    /// Link destination, never contains whitespace
    pub target: String,
    /// Visible link text, may legitimately be empty
    pub title: String,
}

/// A block in the flat document tree.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    /// Heading, folded 1:1 from a header token
    Header { level: usize, title: String },

    /// Paragraph, folded 1:1 from a paragraph token
    #[serde(rename = "p")]
    Paragraph { content: String },

    /// A maximal run of consecutive link lines
    Links { links: Vec<LinkEntry> },

    /// A maximal run of consecutive list element lines
    List { elements: Vec<String> },

    /// A maximal run of consecutive verbatim blocks
    Quote { content: Vec<String> },
}

/// The root of the document tree: a flat, ordered node sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over the nodes in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
