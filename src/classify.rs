//! Markup classifier: parsed HTML → component tree.
//!
//! Walks a DOM body depth-first and maps every node into the closed set of
//! component kinds. Fidelity is preferred over decomposability: anything the
//! classifier cannot safely take apart (form controls, scripts, embedded
//! media) becomes a `RawMarkup` leaf carrying its outer HTML verbatim, so no
//! markup is ever lost. Classification itself never fails — only completely
//! empty input is rejected up front.

use html5ever::parse_document;
use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use tracing::debug;

use crate::component::{ComponentNode, ComponentTree, Props, ROOT_ID};
use crate::error::{EngineError, EngineResult};
use crate::tailwind::resolve_classes;

/// Tags whose all-text children collapse into a single `Text` node.
const TEXT_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "span", "strong", "em", "b", "i", "u", "small",
    "li", "blockquote", "pre", "code", "figcaption",
];

/// Tags preserved verbatim: form controls plus embedded content the tree
/// model cannot represent structurally.
const RAW_TAGS: &[&str] = &[
    "input", "select", "textarea", "form", "label", "script", "style", "audio", "canvas",
    "svg", "iframe", "object", "embed",
];

/// Class fragments that mark an anchor as a button affordance.
const BUTTON_CLASS_HINTS: &[&str] = &["btn", "button", "cta"];

/// Parses an HTML document and classifies its body into a component tree.
///
/// Empty or blank input is the one rejected condition; malformed markup is
/// absorbed by the HTML parser's own recovery.
pub fn classify_document(html: &str) -> EngineResult<ComponentTree> {
    if html.trim().is_empty() {
        return Err(EngineError::EmptyDocument);
    }
    debug!(bytes = html.len(), "classifying document");

    let dom: RcDom = parse_document(RcDom::default(), Default::default()).one(html);
    let body = find_element(&dom.document, "body").ok_or(EngineError::EmptyDocument)?;
    Ok(classify_body(&body))
}

/// Classifies an already-parsed document body. Never fails: worst case every
/// child degrades to a `RawMarkup` leaf.
pub fn classify_body(body: &Handle) -> ComponentTree {
    let mut tree = ComponentTree::new();
    classify_children(body, ROOT_ID, &mut tree);
    debug!(nodes = tree.len(), "classified body");
    tree
}

fn classify_children(parent: &Handle, parent_id: &str, tree: &mut ComponentTree) {
    for child in parent.children.borrow().iter() {
        classify_node(child, parent_id, tree);
    }
}

fn classify_node(node: &Handle, parent_id: &str, tree: &mut ComponentTree) {
    match &node.data {
        NodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            if text.trim().is_empty() {
                return;
            }
            attach(
                tree,
                parent_id,
                Props::Text {
                    text: normalize_text(&text),
                    tag: "span".to_string(),
                },
                "",
            );
        }
        NodeData::Element { .. } => classify_element(node, parent_id, tree),
        // Comments, doctypes and processing instructions carry nothing editable.
        _ => {}
    }
}

fn classify_element(node: &Handle, parent_id: &str, tree: &mut ComponentTree) {
    let Some(tag) = node_name(node) else { return };
    let class_attr = node_attr(node, "class").unwrap_or_default();

    match tag.as_str() {
        "img" => {
            attach(
                tree,
                parent_id,
                Props::Image {
                    src: node_attr(node, "src").unwrap_or_default(),
                    alt: node_attr(node, "alt"),
                },
                &class_attr,
            );
        }
        "button" => {
            attach(
                tree,
                parent_id,
                Props::Button {
                    text: text_content(node),
                    href: None,
                },
                &class_attr,
            );
        }
        "a" if has_button_class(&class_attr) => {
            attach(
                tree,
                parent_id,
                Props::Button {
                    text: text_content(node),
                    href: node_attr(node, "href"),
                },
                &class_attr,
            );
        }
        "a" => {
            let id = attach(
                tree,
                parent_id,
                Props::Link {
                    href: node_attr(node, "href"),
                },
                &class_attr,
            );
            classify_children(node, &id, tree);
        }
        "video" => match video_source(node) {
            Some(src) => {
                attach(tree, parent_id, Props::Video { src }, &class_attr);
            }
            None => attach_raw(tree, parent_id, node),
        },
        "hr" => {
            attach(tree, parent_id, Props::Divider {}, &class_attr);
        }
        t if RAW_TAGS.contains(&t) => attach_raw(tree, parent_id, node),
        t if TEXT_TAGS.contains(&t) && all_text_children(node) => {
            attach(
                tree,
                parent_id,
                Props::Text {
                    text: text_content(node),
                    tag: t.to_string(),
                },
                &class_attr,
            );
        }
        // div, sectioning tags, and text-carrying tags with mixed children.
        t => {
            let id = attach(
                tree,
                parent_id,
                Props::Container {
                    tag: Some(t.to_string()),
                },
                &class_attr,
            );
            classify_children(node, &id, tree);
        }
    }
}

/// Builds a node with resolved styles and attaches it under `parent_id`.
fn attach(tree: &mut ComponentTree, parent_id: &str, props: Props, class_attr: &str) -> String {
    let id = tree.next_id();
    let mut node = ComponentNode::new(id.clone(), props);
    if !class_attr.trim().is_empty() {
        let resolved = resolve_classes(class_attr);
        node.style = resolved.style;
        node.responsive_styles = resolved.responsive_styles;
        node.unrecognized_classes = resolved.unrecognized_classes;
    }
    tree.attach(parent_id, node)
        .expect("parent id was minted by this walk");
    id
}

/// Attaches a verbatim-markup leaf. The class attribute stays inside the
/// stored markup, untouched by the style resolver.
fn attach_raw(tree: &mut ComponentTree, parent_id: &str, node: &Handle) {
    let id = tree.next_id();
    let leaf = ComponentNode::new(id, Props::RawMarkup { html: outer_html(node) });
    tree.attach(parent_id, leaf)
        .expect("parent id was minted by this walk");
}

// ─── DOM helpers ─────────────────────────────────────────────────────────────

fn node_name(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

fn node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

fn find_element(node: &Handle, name: &str) -> Option<Handle> {
    if node_name(node).as_deref() == Some(name) {
        return Some(node.clone());
    }
    for child in node.children.borrow().iter() {
        if let Some(found) = find_element(child, name) {
            return Some(found);
        }
    }
    None
}

/// Concatenated, whitespace-normalized text of all descendant text nodes.
fn text_content(node: &Handle) -> String {
    let mut parts: Vec<String> = Vec::new();
    collect_text(node, &mut parts);
    parts.join(" ").split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(node: &Handle, parts: &mut Vec<String>) {
    match &node.data {
        NodeData::Text { contents } => parts.push(contents.borrow().to_string()),
        NodeData::Element { .. } | NodeData::Document => {
            for child in node.children.borrow().iter() {
                collect_text(child, parts);
            }
        }
        _ => {}
    }
}

fn all_text_children(node: &Handle) -> bool {
    node.children
        .borrow()
        .iter()
        .all(|child| matches!(child.data, NodeData::Text { .. }))
}

fn has_button_class(class_attr: &str) -> bool {
    class_attr
        .split_whitespace()
        .any(|token| BUTTON_CLASS_HINTS.iter().any(|hint| token.contains(hint)))
}

fn video_source(node: &Handle) -> Option<String> {
    if let Some(src) = node_attr(node, "src") {
        if !src.is_empty() {
            return Some(src);
        }
    }
    node.children
        .borrow()
        .iter()
        .filter(|child| node_name(child).as_deref() == Some("source"))
        .find_map(|child| node_attr(child, "src"))
}

/// Serializes a node's outer HTML, element included.
fn outer_html(node: &Handle) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    let handle = SerializableHandle::from(node.clone());
    if serialize(&mut buf, &handle, opts).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
