//! hast input tree model
//!
//! The transform consumes the tree produced by an upstream markup parser:
//! nodes tagged root/element/text/comment/doctype, each carrying a property
//! map and a child list. Trees deserialize from hast JSON
//! (`{"type": "element", "tagName": "div", "properties": {...}, "children": [...]}`);
//! unknown `type` strings never fail, they fall back to [`Node::Other`] and
//! are handled like elements.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;
use strum_macros::EnumString;

/// Property map of an element, in insertion order.
///
/// Order is observable: properties are resolved into output attributes in
/// the order they appear here.
pub type Properties = IndexMap<String, PropValue>;

/// Discriminant of a [`Node`], parsed from the hast `type` field.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    Root,
    Element,
    Text,
    Comment,
    Doctype,
    /// Any unrecognized kind, keeping the original string.
    #[strum(default)]
    Other(String),
}

/// A node of the input tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawNode")]
pub enum Node {
    Root(Root),
    Element(Element),
    Text(Text),
    Comment(Comment),
    Doctype,
    /// Unknown kind. Transformed like an element, honoring whatever
    /// element-shaped fields the node carries.
    Other { kind: String, element: Element },
}

/// The document root. Only ever valid at the top of a tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Root {
    pub children: Vec<Node>,
}

/// An element with optional tag name, properties and children.
///
/// All fields default when absent: the tag name falls back to `div` (or `g`
/// inside SVG) during transformation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag_name: Option<String>,
    pub properties: Properties,
    pub children: Vec<Node>,
}

/// A text node. Transformation is the identity on `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub value: String,
}

/// A comment. Content is discarded by the transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub value: String,
}

/// A property value as found on an element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<ListValue>),
}

/// One entry of a list-valued property (class lists, accept lists, ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListValue {
    Number(Number),
    String(String),
}

/// A numeric value, keeping integers distinct from floats so that integer
/// attributes serialize without a fractional part. `Float(f64::NAN)` is a
/// valid input value and drives an omission rule in the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Node {
    /// A root node with the given children.
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root(Root { children })
    }

    /// A text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text { value: value.into() })
    }

    /// A comment node.
    pub fn comment(value: impl Into<String>) -> Self {
        Node::Comment(Comment { value: value.into() })
    }

    /// The kind discriminant of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Root(_) => NodeKind::Root,
            Node::Element(_) => NodeKind::Element,
            Node::Text(_) => NodeKind::Text,
            Node::Comment(_) => NodeKind::Comment,
            Node::Doctype => NodeKind::Doctype,
            Node::Other { kind, .. } => NodeKind::Other(kind.clone()),
        }
    }
}

impl Element {
    /// An element with the given tag name and no properties or children.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Element {
            tag_name: Some(tag_name.into()),
            ..Element::default()
        }
    }

    /// Add a property, keeping insertion order.
    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl PropValue {
    /// Truthiness following the host-language rules the attribute table is
    /// written against: empty strings, `false`, zero, NaN, null and empty
    /// lists are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Null => false,
            PropValue::Bool(b) => *b,
            PropValue::Number(n) => n.is_truthy(),
            PropValue::String(s) => !s.is_empty(),
            PropValue::List(items) => !items.is_empty(),
        }
    }

    /// Coerce a truthy value to its string form; `None` for falsy values.
    /// Lists join with a bare comma, matching the host-language default
    /// stringification. Used for the root's `xmlns` inference.
    pub fn to_non_empty_string(&self) -> Option<String> {
        if !self.is_truthy() {
            return None;
        }
        let rendered = match self {
            PropValue::Bool(_) => "true".to_string(),
            PropValue::Number(n) => n.to_string(),
            PropValue::String(s) => s.clone(),
            PropValue::List(items) => items
                .iter()
                .map(ListValue::to_string)
                .collect::<Vec<_>>()
                .join(","),
            PropValue::Null => unreachable!("null is falsy"),
        };
        if rendered.is_empty() {
            None
        } else {
            Some(rendered)
        }
    }
}

impl Number {
    pub fn is_truthy(self) -> bool {
        match self {
            Number::Int(i) => i != 0,
            Number::Float(f) => f != 0.0 && !f.is_nan(),
        }
    }

    pub fn is_nan(self) -> bool {
        matches!(self, Number::Float(f) if f.is_nan())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}

impl fmt::Display for ListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListValue::Number(n) => write!(f, "{n}"),
            ListValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::String(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::String(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Number(Number::Int(value))
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(Number::Float(value))
    }
}

impl From<Vec<&str>> for PropValue {
    fn from(values: Vec<&str>) -> Self {
        PropValue::List(
            values
                .into_iter()
                .map(|v| ListValue::String(v.to_string()))
                .collect(),
        )
    }
}

/// Loose hast JSON shape. All fields optional; extra fields (`position`,
/// `data`, ...) are ignored.
#[derive(Deserialize)]
struct RawNode {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(rename = "tagName", default)]
    tag_name: Option<String>,
    #[serde(default)]
    properties: Option<Properties>,
    #[serde(default)]
    children: Option<Vec<Node>>,
    #[serde(default)]
    value: Option<String>,
}

impl RawNode {
    fn into_element(self) -> Element {
        Element {
            tag_name: self.tag_name,
            properties: self.properties.unwrap_or_default(),
            children: self.children.unwrap_or_default(),
        }
    }
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        // Infallible: the Other variant catches every unrecognized string.
        let kind = NodeKind::from_str(&raw.kind)
            .unwrap_or_else(|_| NodeKind::Other(raw.kind.clone()));
        match kind {
            NodeKind::Root => Node::Root(Root {
                children: raw.children.unwrap_or_default(),
            }),
            NodeKind::Element => Node::Element(raw.into_element()),
            NodeKind::Text => Node::Text(Text {
                value: raw.value.unwrap_or_default(),
            }),
            NodeKind::Comment => Node::Comment(Comment {
                value: raw.value.unwrap_or_default(),
            }),
            NodeKind::Doctype => Node::Doctype,
            NodeKind::Other(kind) => Node::Other {
                kind,
                element: raw.into_element(),
            },
        }
    }
}
