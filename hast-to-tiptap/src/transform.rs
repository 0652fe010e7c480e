//! hast → Tiptap transformation
//!
//! ## Data flow
//! ```text
//! hast Node → dispatch by kind → build [tag, attrs] → append children → hook
//! ```
//!
//! The traversal is depth-first and post-order: a node's result is finished
//! (children included) before the observation hook sees it. Instead of
//! native recursion the walk runs on an explicit frame stack, so input
//! depth is bounded by the heap, not the call stack.
//!
//! Namespace handling: a root with an `html` element child infers the
//! namespace for the whole tree (unless the caller forced one); an `svg`
//! tag inside an unset or HTML namespace switches the subtree to SVG. The
//! active namespace picks the schema set used to resolve properties into
//! attributes.

use thiserror::Error;

use crate::namespace;
use crate::node::{Element, Node, PropValue, Root};
use crate::schema::Schema;
use crate::tree::{AttrValue, Attributes, TiptapResult, TiptapTree};

/// Observation hook: called with each original node and its finished
/// result, deepest nodes first.
pub type OnVisit<'a> = Box<dyn FnMut(&Node, &TiptapResult) + 'a>;

/// Configuration for [`to_tiptap`].
#[derive(Default)]
pub struct Options<'a> {
    /// Forces the namespace for the whole run, skipping root inference.
    pub namespace: Option<String>,
    /// Post-order observation hook.
    pub on_visit: Option<OnVisit<'a>>,
}

impl<'a> Options<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_on_visit(mut self, hook: impl FnMut(&Node, &TiptapResult) + 'a) -> Self {
        self.on_visit = Some(Box::new(hook));
        self
    }
}

/// Errors surfaced by the transform.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// A scalar result was asked to host more than one child. A single
    /// string cannot carry children, so the input is malformed; the run
    /// aborts before any of those children is transformed.
    #[error("cannot attach {children} children to a scalar result")]
    StructuralMismatch { children: usize },
}

/// Per-level context. Immutable: every frame derives its own copy instead
/// of mutating a shared record.
#[derive(Debug, Clone, Default)]
struct Context {
    /// Namespace requested by the caller or decided at the root.
    namespace: Option<String>,
    /// Namespace in effect at the current tree position.
    implied_namespace: Option<String>,
}

/// Transform a hast tree into a Tiptap result.
pub fn to_tiptap(node: &Node, options: Options<'_>) -> Result<TiptapResult, TransformError> {
    let Options {
        namespace,
        mut on_visit,
    } = options;
    let ctx = Context {
        namespace,
        implied_namespace: None,
    };
    transform(node, ctx, &mut on_visit)
}

/// The work-stack walk. Each frame owns a node's partial result and the
/// context its children inherit; finished results bubble into the parent
/// frame, and the hook fires as each frame closes.
fn transform(
    node: &Node,
    ctx: Context,
    on_visit: &mut Option<OnVisit<'_>>,
) -> Result<TiptapResult, TransformError> {
    let mut stack = vec![Frame::begin(node, ctx)?];

    loop {
        let top = stack.last_mut().expect("stack is non-empty until the root closes");
        if top.next < top.children.len() {
            let children = top.children;
            let child = &children[top.next];
            top.next += 1;
            let child_ctx = top.child_ctx.clone();
            stack.push(Frame::begin(child, child_ctx)?);
            continue;
        }

        let frame = stack.pop().expect("just observed a top frame");
        let result = frame.pending.finish();
        if let Some(hook) = on_visit.as_mut() {
            hook(frame.node, &result);
        }
        match stack.last_mut() {
            Some(parent) => parent.append(result),
            None => return Ok(result),
        }
    }
}

/// One level of the walk.
struct Frame<'a> {
    node: &'a Node,
    pending: Pending,
    children: &'a [Node],
    next: usize,
    child_ctx: Context,
}

/// A node's partial result while its children are being transformed.
enum Pending {
    /// A tree under construction; completed children append to it.
    Tree(TiptapTree),
    /// A scalar; at most one child may replace it.
    Scalar {
        built: TiptapResult,
        replacement: Option<TiptapResult>,
    },
}

impl<'a> Frame<'a> {
    /// Dispatch on node kind. Total: unrecognized kinds take the element
    /// path with whatever element-shaped fields they carry.
    fn begin(node: &'a Node, ctx: Context) -> Result<Frame<'a>, TransformError> {
        let (pending, children, child_ctx): (Pending, &[Node], Context) = match node {
            Node::Root(root) => (
                Pending::Tree(TiptapTree::new("div")),
                root.children.as_slice(),
                root_context(root, &ctx),
            ),
            Node::Element(element) | Node::Other { element, .. } => {
                let (tree, child_ctx) = build_element(element, &ctx);
                (Pending::Tree(tree), element.children.as_slice(), child_ctx)
            }
            Node::Text(text) => (
                Pending::Scalar {
                    built: TiptapResult::Text(text.value.clone()),
                    replacement: None,
                },
                &[],
                ctx,
            ),
            Node::Comment(_) | Node::Doctype => (
                Pending::Scalar {
                    built: TiptapResult::Text(String::new()),
                    replacement: None,
                },
                &[],
                ctx,
            ),
        };

        append_precheck(&pending, children)?;

        Ok(Frame {
            node,
            pending,
            children,
            next: 0,
            child_ctx,
        })
    }

    /// Attach a finished child result.
    fn append(&mut self, result: TiptapResult) {
        match &mut self.pending {
            Pending::Tree(tree) => tree.children.push(result),
            Pending::Scalar { replacement, .. } => *replacement = Some(result),
        }
    }
}

impl Pending {
    fn finish(self) -> TiptapResult {
        match self {
            Pending::Tree(tree) => TiptapResult::Tree(tree),
            Pending::Scalar { built, replacement } => replacement.unwrap_or(built),
        }
    }
}

/// The appender contract: a tree hosts any number of children, a scalar at
/// most one (its replacement). Checked before any child is transformed.
fn append_precheck(pending: &Pending, children: &[Node]) -> Result<(), TransformError> {
    match pending {
        Pending::Scalar { .. } if children.len() > 1 => Err(TransformError::StructuralMismatch {
            children: children.len(),
        }),
        _ => Ok(()),
    }
}

/// Decide the namespace below a root. The first `html` element child
/// decides (its `xmlns`, else the HTML namespace); later matches never
/// override, and a caller-forced namespace skips the scan entirely.
fn root_context(root: &Root, ctx: &Context) -> Context {
    let mut namespace = ctx.namespace.clone();
    if namespace.is_none() {
        for child in &root.children {
            if let Node::Element(element) = child {
                if element.tag_name.as_deref() == Some("html") {
                    namespace = Some(
                        element
                            .properties
                            .get("xmlns")
                            .and_then(PropValue::to_non_empty_string)
                            .unwrap_or_else(|| namespace::HTML.to_string()),
                    );
                    break;
                }
            }
        }
    }
    Context {
        namespace: namespace.clone(),
        implied_namespace: namespace,
    }
}

/// Build an element's `[tag, attrs]` pair and the context its children
/// inherit.
fn build_element(element: &Element, ctx: &Context) -> (TiptapTree, Context) {
    let mut implied = ctx
        .implied_namespace
        .clone()
        .or_else(|| ctx.namespace.clone());

    let tag = element.tag_name.clone().unwrap_or_else(|| {
        match implied.as_deref() {
            Some(ns) if namespace::is_svg(ns) => "g",
            _ => "div",
        }
        .to_string()
    });

    // An `svg` tag inside an unset or HTML namespace switches the subtree
    // to SVG. No switch back exists.
    if tag == "svg" && implied.as_deref().map_or(true, namespace::is_html) {
        implied = Some(namespace::SVG.to_string());
    }

    let schema = match implied.as_deref() {
        Some(ns) if namespace::is_svg(ns) => Schema::svg(),
        _ => Schema::html(),
    };

    let mut tree = TiptapTree::new(tag);
    for (name, value) in &element.properties {
        resolve_property(&mut tree.attributes, schema, name, value);
    }

    let child_ctx = Context {
        implied_namespace: implied,
        ..ctx.clone()
    };
    (tree, child_ctx)
}

/// Resolve one source property into zero or one output attribute. The rule
/// order is load-bearing; first match wins.
fn resolve_property(attributes: &mut Attributes, schema: &Schema, name: &str, value: &PropValue) {
    let info = schema.find(name);

    // Lists flatten to a single string before the rules run.
    let joined;
    let value = match value {
        PropValue::List(items) => {
            let separator = if info.comma_separated() { ", " } else { " " };
            joined = PropValue::String(
                items
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(separator),
            );
            &joined
        }
        other => other,
    };

    let attribute = info.attribute();

    if info.boolean() || (info.overloaded_boolean() && matches!(value, PropValue::Bool(_))) {
        // Presence-only: the empty string when set, nothing when not.
        if value.is_truthy() {
            attributes.insert(attribute.to_string(), AttrValue::String(String::new()));
        } else {
            attributes.shift_remove(attribute);
        }
    } else if info.booleanish() {
        // Always rendered; the value keeps its form, `false` included.
        match attr_value(value) {
            Some(rendered) => {
                attributes.insert(attribute.to_string(), rendered);
            }
            None => {
                attributes.shift_remove(attribute);
            }
        }
    } else if matches!(value, PropValue::Bool(true)) {
        attributes.insert(attribute.to_string(), AttrValue::String(String::new()));
    } else if matches!(value, PropValue::String(_))
        || matches!(value, PropValue::Number(n) if !n.is_nan())
    {
        // Strings (empty included) and numbers (zero included) render
        // unchanged; NaN falls through to omission.
        if let Some(rendered) = attr_value(value) {
            attributes.insert(attribute.to_string(), rendered);
        }
    } else {
        // false, null, NaN: no attribute, and any entry an earlier property
        // resolved onto this name goes away.
        attributes.shift_remove(attribute);
    }
}

/// An attribute value in the output's form, if representable.
fn attr_value(value: &PropValue) -> Option<AttrValue> {
    match value {
        PropValue::String(s) => Some(AttrValue::String(s.clone())),
        PropValue::Number(n) => Some(AttrValue::Number(*n)),
        PropValue::Bool(b) => Some(AttrValue::Bool(*b)),
        PropValue::Null => None,
        // Flattened before the rules run.
        PropValue::List(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform_str(node: &Node) -> String {
        serde_json::to_string(&to_tiptap(node, Options::new()).unwrap()).unwrap()
    }

    #[test]
    fn test_empty_root() {
        assert_eq!(transform_str(&Node::root(vec![])), r#"["div",{}]"#);
    }

    #[test]
    fn test_text_identity() {
        assert_eq!(
            to_tiptap(&Node::text("hello world"), Options::new()).unwrap(),
            TiptapResult::Text("hello world".to_string())
        );
    }

    #[test]
    fn test_comment_and_doctype_discarded() {
        assert_eq!(transform_str(&Node::comment("after")), r#""""#);
        assert_eq!(transform_str(&Node::Doctype), r#""""#);
    }

    #[test]
    fn test_element_defaults() {
        let node: Node = Element::default().into();
        assert_eq!(transform_str(&node), r#"["div",{}]"#);

        let result = to_tiptap(
            &node,
            Options::new().with_namespace(namespace::SVG),
        )
        .unwrap();
        assert_eq!(result.as_tree().unwrap().tag, "g");
    }

    #[test]
    fn test_unknown_kind_behaves_like_element() {
        let node = Node::Other {
            kind: "something-else".to_string(),
            element: Element::default(),
        };
        assert_eq!(transform_str(&node), r#"["div",{}]"#);

        let node = Node::Other {
            kind: "something-else".to_string(),
            element: Element {
                children: vec![Node::text("value")],
                ..Element::default()
            },
        };
        assert_eq!(transform_str(&node), r#"["div",{},"value"]"#);
    }

    #[test]
    fn test_svg_tag_switches_namespace() {
        let node: Node = Element::new("svg")
            .with_child(Element::default())
            .into();
        let result = to_tiptap(&node, Options::new()).unwrap();
        let tree = result.as_tree().unwrap();
        assert_eq!(tree.tag, "svg");
        // The child defaults to `g`, proving the subtree is SVG now.
        assert_eq!(tree.children[0].as_tree().unwrap().tag, "g");
    }

    #[test]
    fn test_no_svg_switch_inside_foreign_namespace() {
        let node: Node = Element::new("svg").with_child(Element::default()).into();
        let result = to_tiptap(
            &node,
            Options::new().with_namespace("http://example.com"),
        )
        .unwrap();
        // Foreign namespace: no upgrade, children default to div.
        let tree = result.as_tree().unwrap();
        assert_eq!(tree.children[0].as_tree().unwrap().tag, "div");
    }

    #[test]
    fn test_root_infers_namespace_from_first_html_child() {
        let node = Node::root(vec![
            Element::new("html")
                .with_prop("xmlns", namespace::SVG)
                .with_child(Element::default())
                .into(),
            Element::new("html")
                .with_prop("xmlns", "http://example.com")
                .into(),
        ]);
        let result = to_tiptap(&node, Options::new()).unwrap();
        let tree = result.as_tree().unwrap();
        assert_eq!(tree.tag, "div");
        assert_eq!(tree.children.len(), 2);
        // First html child won: the whole subtree is SVG, so the nameless
        // element defaults to `g`. Had the second child won, it would be
        // a foreign namespace and the default would be `div`.
        let html = tree.children[0].as_tree().unwrap();
        assert_eq!(html.children[0].as_tree().unwrap().tag, "g");

        let node = Node::root(vec![Element::new("html").into()]);
        assert_eq!(transform_str(&node), r#"["div",{},["html",{}]]"#);
    }

    #[test]
    fn test_forced_namespace_skips_inference() {
        let node = Node::root(vec![Element::new("html")
            .with_prop("xmlns", namespace::SVG)
            .with_child(Element::default())
            .into()]);
        let result = to_tiptap(
            &node,
            Options::new().with_namespace("http://example.com"),
        )
        .unwrap();
        let html = result.as_tree().unwrap().children[0].as_tree().unwrap();
        // Inference skipped: the inner default stays div, not g.
        assert_eq!(html.children[0].as_tree().unwrap().tag, "div");
    }

    #[test]
    fn test_boolean_attributes() {
        let node: Node = Element::new("input")
            .with_prop("disabled", true)
            .with_prop("value", "foo")
            .into();
        assert_eq!(
            transform_str(&node),
            r#"["input",{"disabled":"","value":"foo"}]"#
        );

        let node: Node = Element::new("div")
            .with_prop("allowFullScreen", false)
            .into();
        assert_eq!(transform_str(&node), r#"["div",{}]"#);
    }

    #[test]
    fn test_overloaded_boolean() {
        let node: Node = Element::new("a").with_prop("download", true).into();
        assert_eq!(transform_str(&node), r#"["a",{"download":""}]"#);

        let node: Node = Element::new("a").with_prop("download", false).into();
        assert_eq!(transform_str(&node), r#"["a",{}]"#);

        // Non-boolean value: the overload renders it as a plain value.
        let node: Node = Element::new("a").with_prop("download", "file.txt").into();
        assert_eq!(transform_str(&node), r#"["a",{"download":"file.txt"}]"#);
    }

    #[test]
    fn test_booleanish_attributes() {
        let node: Node = Element::new("div").with_prop("ariaChecked", true).into();
        assert_eq!(transform_str(&node), r#"["div",{"aria-checked":true}]"#);

        let node: Node = Element::new("div").with_prop("ariaChecked", false).into();
        assert_eq!(transform_str(&node), r#"["div",{"aria-checked":false}]"#);

        let node: Node = Element::new("div").with_prop("ariaChecked", "mixed").into();
        assert_eq!(transform_str(&node), r#"["div",{"aria-checked":"mixed"}]"#);
    }

    #[test]
    fn test_numeric_edge_values() {
        let node: Node = Element::new("div").with_prop("dataTest", 0i64).into();
        assert_eq!(transform_str(&node), r#"["div",{"data-test":0}]"#);

        let node: Node = Element::new("div").with_prop("dataTest", f64::NAN).into();
        assert_eq!(transform_str(&node), r#"["div",{}]"#);

        let node: Node = Element::new("div").with_prop("dataTest", "").into();
        assert_eq!(transform_str(&node), r#"["div",{"data-test":""}]"#);
    }

    #[test]
    fn test_list_joining() {
        let node: Node = Element::new("div")
            .with_prop("className", vec!["foo", "bar"])
            .into();
        assert_eq!(transform_str(&node), r#"["div",{"class":"foo bar"}]"#);

        let node: Node = Element::new("input")
            .with_prop("type", "file")
            .with_prop("accept", vec!["image/*", ".doc"])
            .into();
        assert_eq!(
            transform_str(&node),
            r#"["input",{"type":"file","accept":"image/*, .doc"}]"#
        );
    }

    #[test]
    fn test_hook_fires_post_order() {
        let node: Node = Element::new("html")
            .with_child(Element::new("title").with_child(Node::text("Hi")))
            .into();

        let mut calls: Vec<(String, String)> = Vec::new();
        {
            let options = Options::new().with_on_visit(|node, result| {
                let tag = match node {
                    Node::Element(element) => element.tag_name.clone().unwrap_or_default(),
                    Node::Text(text) => text.value.clone(),
                    _ => String::new(),
                };
                calls.push((tag, serde_json::to_string(result).unwrap()));
            });
            to_tiptap(&node, options).unwrap();
        }

        assert_eq!(
            calls,
            vec![
                ("Hi".to_string(), r#""Hi""#.to_string()),
                ("title".to_string(), r#"["title",{},"Hi"]"#.to_string()),
                (
                    "html".to_string(),
                    r#"["html",{},["title",{},"Hi"]]"#.to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_scalar_rejects_multiple_children() {
        let pending = Pending::Scalar {
            built: TiptapResult::Text("x".to_string()),
            replacement: None,
        };
        let children = vec![Node::text("a"), Node::text("b")];
        assert_eq!(
            append_precheck(&pending, &children),
            Err(TransformError::StructuralMismatch { children: 2 })
        );
    }

    #[test]
    fn test_scalar_single_child_replaces() {
        let pending = Pending::Scalar {
            built: TiptapResult::Text("x".to_string()),
            replacement: None,
        };
        assert!(append_precheck(&pending, &[Node::text("a")]).is_ok());

        let doctype = Node::Doctype;
        let mut frame = Frame {
            node: &doctype,
            pending,
            children: &[],
            next: 0,
            child_ctx: Context::default(),
        };
        frame.append(TiptapResult::Text("y".to_string()));
        assert_eq!(
            frame.pending.finish(),
            TiptapResult::Text("y".to_string())
        );
    }

    #[test]
    fn test_later_property_can_remove_earlier_attribute() {
        // Two property spellings resolve onto the same attribute name; the
        // second one's falsy value deletes the first one's entry.
        let node: Node = Element::new("input")
            .with_prop("readOnly", true)
            .with_prop("readonly", false)
            .into();
        assert_eq!(transform_str(&node), r#"["input",{}]"#);
    }

    #[test]
    fn test_deep_tree_does_not_overflow_the_stack() {
        let mut node: Node = Element::new("span").with_child(Node::text("leaf")).into();
        for _ in 0..50_000 {
            node = Element::new("div").with_child(node).into();
        }
        let result = to_tiptap(&node, Options::new()).unwrap();
        assert_eq!(result.as_tree().unwrap().tag, "div");

        // Dismantle both trees iteratively; recursive drop glue would
        // itself overflow the stack at this depth.
        let mut nodes = vec![node];
        while let Some(node) = nodes.pop() {
            match node {
                Node::Root(mut root) => nodes.append(&mut root.children),
                Node::Element(mut element) | Node::Other { element: mut element, .. } => {
                    nodes.append(&mut element.children)
                }
                _ => {}
            }
        }
        let mut results = vec![result];
        while let Some(result) = results.pop() {
            if let TiptapResult::Tree(mut tree) = result {
                results.append(&mut tree.children);
            }
        }
    }
}
