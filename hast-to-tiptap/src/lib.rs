//! hast-to-tiptap: transform hast syntax trees into Tiptap's document model
//!
//! This library provides:
//! - A serde data model for hast input trees (root/element/text/comment/
//!   doctype plus a fallback for unknown kinds)
//! - The transformation itself: node-kind dispatch, HTML/SVG namespace
//!   inference, and property→attribute resolution
//! - Pre-built HTML and SVG attribute schema tables
//! - The nested-array output representation, serializable as
//!   `[tag, {attributes}, ...children]`
//!
//! Parsing markup text into the input tree is out of scope; an upstream
//! parser produces it. The output is a plain value, not a live tree.

pub mod namespace;
pub mod node;
pub mod schema;
pub mod transform;
pub mod tree;

pub use node::{Comment, Element, ListValue, Node, NodeKind, Number, PropValue, Properties, Root, Text};
pub use schema::{Info, Schema};
pub use transform::{to_tiptap, OnVisit, Options, TransformError};
pub use tree::{AttrValue, Attributes, TiptapResult, TiptapTree};
