//! Tiptap output tree
//!
//! The transform produces either a bare string or a tree node. A tree node
//! serializes as the heterogeneous JSON array Tiptap consumes:
//! `[tag, {attributes...}, ...children]`. The attribute object is always
//! present, even when empty, so every serialized array has length >= 2.

use indexmap::IndexMap;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::node::Number;

/// Attribute map of a tree node, in insertion order.
pub type Attributes = IndexMap<String, AttrValue>;

/// Result of transforming one input node.
#[derive(Debug, Clone, PartialEq)]
pub enum TiptapResult {
    /// Raw text content; also the rendering of comments and doctypes
    /// (both empty).
    Text(String),
    /// An element-like node.
    Tree(TiptapTree),
}

/// A tree node: tag, attributes and transformed children.
#[derive(Debug, Clone, PartialEq)]
pub struct TiptapTree {
    pub tag: String,
    pub attributes: Attributes,
    pub children: Vec<TiptapResult>,
}

/// An attribute value. Booleanish attributes keep their boolean form,
/// numeric properties keep their numeric form; everything else is a string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    String(String),
    Number(Number),
    Bool(bool),
}

impl TiptapTree {
    /// A tree node with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        TiptapTree {
            tag: tag.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }
}

impl TiptapResult {
    /// The tree node, if this result is one.
    pub fn as_tree(&self) -> Option<&TiptapTree> {
        match self {
            TiptapResult::Tree(tree) => Some(tree),
            TiptapResult::Text(_) => None,
        }
    }

    /// The text content, if this result is a bare string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TiptapResult::Text(value) => Some(value),
            TiptapResult::Tree(_) => None,
        }
    }
}

impl From<TiptapTree> for TiptapResult {
    fn from(tree: TiptapTree) -> Self {
        TiptapResult::Tree(tree)
    }
}

impl Serialize for TiptapResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TiptapResult::Text(value) => serializer.serialize_str(value),
            TiptapResult::Tree(tree) => tree.serialize(serializer),
        }
    }
}

impl Serialize for TiptapTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(2 + self.children.len()))?;
        seq.serialize_element(&self.tag)?;
        seq.serialize_element(&self.attributes)?;
        for child in &self.children {
            seq.serialize_element(child)?;
        }
        seq.end()
    }
}
