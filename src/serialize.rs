//! Tree serializer: component tree → HTML markup.
//!
//! Emission is depth-first pre-order over the `children` lists. Node-id
//! integrity is validated up front — a dangling child reference or a cycle
//! aborts the whole serialization, since half a page is worse than none.

use std::collections::HashSet;

use tracing::debug;

use crate::component::{ComponentNode, ComponentTree, Props};
use crate::error::{EngineError, EngineResult};
use crate::style::{Breakpoint, StyleProps};
use crate::tailwind::style_to_classes;

/// Void elements that may not carry an end tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Serializes the tree to HTML at the desktop breakpoint.
pub fn serialize_tree(tree: &ComponentTree) -> EngineResult<String> {
    validate_integrity(tree)?;
    debug!(nodes = tree.len(), "serializing tree");

    let root = tree
        .get(tree.root_id())
        .ok_or_else(|| EngineError::MissingNode {
            id: tree.root_id().to_string(),
        })?;

    let mut out = String::new();
    for child in &root.children {
        emit_node(tree, child, &mut out, 0)?;
    }
    Ok(out)
}

/// Resolves the style a renderer should apply at `breakpoint`.
///
/// Starts from the node's desktop style; the tablet override replaces its
/// fields wholesale for tablet and mobile, and the mobile override replaces
/// again on top for mobile. Fields absent from an override inherit from the
/// previous step — the mirror image of the resolver's mobile-first cascade.
pub fn resolve_effective_style(node: &ComponentNode, breakpoint: Breakpoint) -> StyleProps {
    let mut style = node.style.clone();
    let Some(responsive) = &node.responsive_styles else {
        return style;
    };
    if matches!(breakpoint, Breakpoint::Tablet | Breakpoint::Mobile) {
        if let Some(tablet) = &responsive.tablet {
            style.apply_override(tablet);
        }
    }
    if breakpoint == Breakpoint::Mobile {
        if let Some(mobile) = &responsive.mobile {
            style.apply_override(mobile);
        }
    }
    style
}

/// Walks every reachable node once, rejecting dangling child references and
/// cycles before any markup is produced.
fn validate_integrity(tree: &ComponentTree) -> EngineResult<()> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut stack = vec![tree.root_id().to_string()];

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            return Err(EngineError::CycleDetected { id: current });
        }
        let node = tree
            .get(&current)
            .expect("only existing ids are pushed onto the stack");
        for child in &node.children {
            if tree.get(child).is_none() {
                return Err(EngineError::DanglingChild {
                    id: current.clone(),
                    child: child.clone(),
                });
            }
            stack.push(child.clone());
        }
    }
    Ok(())
}

fn emit_node(tree: &ComponentTree, id: &str, out: &mut String, depth: usize) -> EngineResult<()> {
    let node = tree
        .get(id)
        .ok_or_else(|| EngineError::MissingNode { id: id.to_string() })?;
    let indent = "  ".repeat(depth);

    match &node.props {
        Props::RawMarkup { html } => {
            out.push_str(&indent);
            out.push_str(html.trim());
            out.push('\n');
        }
        Props::Text { text, tag } => {
            let attrs = attribute_string(node);
            out.push_str(&format!(
                "{}<{}{}>{}</{}>\n",
                indent,
                tag,
                attrs,
                escape_text(text),
                tag
            ));
        }
        Props::Button { text, href } => {
            let attrs = attribute_string(node);
            match href {
                Some(href) => out.push_str(&format!(
                    "{}<a href=\"{}\"{}>{}</a>\n",
                    indent,
                    escape_attr(href),
                    attrs,
                    escape_text(text)
                )),
                None => out.push_str(&format!(
                    "{}<button{}>{}</button>\n",
                    indent,
                    attrs,
                    escape_text(text)
                )),
            }
        }
        Props::Image { src, alt } => {
            let attrs = attribute_string(node);
            let alt_attr = alt
                .as_ref()
                .map(|a| format!(" alt=\"{}\"", escape_attr(a)))
                .unwrap_or_default();
            out.push_str(&format!(
                "{}<img src=\"{}\"{}{} />\n",
                indent,
                escape_attr(src),
                alt_attr,
                attrs
            ));
        }
        Props::Link { href } => {
            let attrs = attribute_string(node);
            let href_attr = href
                .as_ref()
                .map(|h| format!(" href=\"{}\"", escape_attr(h)))
                .unwrap_or_default();
            out.push_str(&format!("{}<a{}{}>\n", indent, href_attr, attrs));
            for child in &node.children {
                emit_node(tree, child, out, depth + 1)?;
            }
            out.push_str(&format!("{}</a>\n", indent));
        }
        Props::Video { src } => {
            let attrs = attribute_string(node);
            out.push_str(&format!(
                "{}<video src=\"{}\" controls{}></video>\n",
                indent,
                escape_attr(src),
                attrs
            ));
        }
        Props::Divider {} => {
            let attrs = attribute_string(node);
            out.push_str(&format!("{}<hr{} />\n", indent, attrs));
        }
        Props::Container { tag } => {
            emit_block(tree, node, tag.as_deref().unwrap_or("div"), out, depth)?;
        }
        Props::Row {} | Props::Column {} | Props::Grid { .. } | Props::Hero {} | Props::Card {} => {
            emit_block(tree, node, "div", out, depth)?;
        }
        Props::Navbar {} => emit_block(tree, node, "nav", out, depth)?,
        Props::Footer {} => emit_block(tree, node, "footer", out, depth)?,
    }
    Ok(())
}

fn emit_block(
    tree: &ComponentTree,
    node: &ComponentNode,
    tag: &str,
    out: &mut String,
    depth: usize,
) -> EngineResult<()> {
    let indent = "  ".repeat(depth);
    let attrs = attribute_string(node);

    if node.children.is_empty() && VOID_TAGS.contains(&tag) {
        out.push_str(&format!("{}<{}{} />\n", indent, tag, attrs));
        return Ok(());
    }

    out.push_str(&format!("{}<{}{}>\n", indent, tag, attrs));
    for child in &node.children {
        emit_node(tree, child, out, depth + 1)?;
    }
    out.push_str(&format!("{}</{}>\n", indent, tag));
    Ok(())
}

/// Rebuilds the class (and, when needed, inline style) attributes.
///
/// The unrecognized remainder comes first and structured-derived tokens
/// after it, so in CSS terms the structured value wins when both touch the
/// same property.
fn attribute_string(node: &ComponentNode) -> String {
    let emitted = style_to_classes(&node.style, node.responsive_styles.as_ref());

    let mut classes: Vec<String> = Vec::new();
    if !node.unrecognized_classes.is_empty() {
        classes.push(node.unrecognized_classes.clone());
    }
    classes.extend(emitted.classes);

    let mut out = String::new();
    if !classes.is_empty() {
        out.push_str(&format!(" class=\"{}\"", escape_attr(&classes.join(" "))));
    }
    if !emitted.inline.is_empty() {
        let css: Vec<String> = emitted
            .inline
            .iter()
            .map(|(prop, value)| format!("{}: {}", prop, value))
            .collect();
        out.push_str(&format!(" style=\"{}\"", escape_attr(&css.join("; "))));
    }
    out
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ComponentTree, Props, ROOT_ID};
    use crate::style::{BoxSpacing, ResponsiveStyles};

    #[test]
    fn serializes_nested_blocks_in_order() {
        let mut tree = ComponentTree::new();
        let section = tree
            .insert(ROOT_ID, Props::Container { tag: Some("section".to_string()) })
            .unwrap();
        tree.insert(
            &section,
            Props::Text {
                text: "First".to_string(),
                tag: "h1".to_string(),
            },
        )
        .unwrap();
        tree.insert(
            &section,
            Props::Text {
                text: "Second".to_string(),
                tag: "p".to_string(),
            },
        )
        .unwrap();

        let html = serialize_tree(&tree).unwrap();
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(html.contains("<section>"));
        assert!(first < second);
    }

    #[test]
    fn button_emits_anchor_when_href_present() {
        let mut tree = ComponentTree::new();
        tree.insert(
            ROOT_ID,
            Props::Button {
                text: "Go".to_string(),
                href: Some("/go".to_string()),
            },
        )
        .unwrap();
        let html = serialize_tree(&tree).unwrap();
        assert!(html.contains("<a href=\"/go\">Go</a>"));

        let mut tree = ComponentTree::new();
        tree.insert(
            ROOT_ID,
            Props::Button {
                text: "Go".to_string(),
                href: None,
            },
        )
        .unwrap();
        let html = serialize_tree(&tree).unwrap();
        assert!(html.contains("<button>Go</button>"));
    }

    #[test]
    fn raw_markup_passes_through_verbatim() {
        let mut tree = ComponentTree::new();
        tree.insert(
            ROOT_ID,
            Props::RawMarkup {
                html: "<input type=\"text\" name=\"q\">".to_string(),
            },
        )
        .unwrap();
        let html = serialize_tree(&tree).unwrap();
        assert!(html.contains("<input type=\"text\" name=\"q\">"));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut tree = ComponentTree::new();
        tree.insert(
            ROOT_ID,
            Props::Text {
                text: "a < b & c".to_string(),
                tag: "p".to_string(),
            },
        )
        .unwrap();
        let html = serialize_tree(&tree).unwrap();
        assert!(html.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn class_attribute_merges_unrecognized_and_structured() {
        let mut tree = ComponentTree::new();
        let id = tree
            .insert(ROOT_ID, Props::Container { tag: None })
            .unwrap();
        let node = tree.get_mut(&id).unwrap();
        node.style.padding = Some(BoxSpacing::all("4"));
        node.unrecognized_classes = "rotate-45".to_string();

        let html = serialize_tree(&tree).unwrap();
        assert!(html.contains("class=\"rotate-45 p-4\""));
    }

    #[test]
    fn dangling_child_is_fatal() {
        let mut tree = ComponentTree::new();
        let id = tree
            .insert(ROOT_ID, Props::Container { tag: None })
            .unwrap();
        tree.get_mut(&id).unwrap().children.push("ghost".to_string());

        let err = serialize_tree(&tree).unwrap_err();
        assert_eq!(
            err,
            EngineError::DanglingChild {
                id,
                child: "ghost".to_string()
            }
        );
    }

    #[test]
    fn cycle_is_fatal() {
        let mut tree = ComponentTree::new();
        let outer = tree.insert(ROOT_ID, Props::Container { tag: None }).unwrap();
        let inner = tree.insert(&outer, Props::Container { tag: None }).unwrap();
        tree.get_mut(&inner).unwrap().children.push(outer.clone());

        let err = serialize_tree(&tree).unwrap_err();
        assert!(matches!(err, EngineError::CycleDetected { .. }));
    }

    #[test]
    fn effective_style_resolves_breakpoints_downward() {
        let mut node = ComponentNode::new("n-1".to_string(), Props::Container { tag: None });
        node.style.padding = Some(BoxSpacing::all("2"));
        node.style.color = Some("white".to_string());
        node.responsive_styles = Some(ResponsiveStyles {
            tablet: Some(StyleProps {
                padding: Some(BoxSpacing::all("4")),
                ..Default::default()
            }),
            mobile: Some(StyleProps {
                padding: Some(BoxSpacing::all("8")),
                ..Default::default()
            }),
        });

        let desktop = resolve_effective_style(&node, Breakpoint::Desktop);
        assert_eq!(desktop.padding, Some(BoxSpacing::all("2")));

        let tablet = resolve_effective_style(&node, Breakpoint::Tablet);
        assert_eq!(tablet.padding, Some(BoxSpacing::all("4")));
        // Fields absent from the override inherit from desktop.
        assert_eq!(tablet.color.as_deref(), Some("white"));

        let mobile = resolve_effective_style(&node, Breakpoint::Mobile);
        assert_eq!(mobile.padding, Some(BoxSpacing::all("8")));
        assert_eq!(mobile.color.as_deref(), Some("white"));
    }

    #[test]
    fn navbar_and_footer_use_semantic_tags() {
        let mut tree = ComponentTree::new();
        tree.insert(ROOT_ID, Props::Navbar {}).unwrap();
        tree.insert(ROOT_ID, Props::Footer {}).unwrap();
        let html = serialize_tree(&tree).unwrap();
        assert!(html.contains("<nav>"));
        assert!(html.contains("<footer>"));
    }

    #[test]
    fn inline_style_for_animation_only() {
        let mut tree = ComponentTree::new();
        let id = tree.insert(ROOT_ID, Props::Container { tag: None }).unwrap();
        tree.get_mut(&id).unwrap().style.animation = Some("pulse 2s infinite".to_string());
        let html = serialize_tree(&tree).unwrap();
        assert!(html.contains("style=\"animation: pulse 2s infinite\""));
    }
}
