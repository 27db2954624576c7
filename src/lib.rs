//! # pagetree
//!
//! Bidirectional transformation engine between raw HTML+utility-class markup
//! and a structured, editable component tree.
//!
//! ## Components
//! - **Markup classifier** — walks a parsed HTML body and maps every node
//!   into a closed set of component kinds, preserving anything it cannot
//!   decompose as verbatim markup
//! - **Style-token resolver** — parses utility-class strings into canonical
//!   structured style with responsive breakpoint overrides
//! - **Tree serializer** — regenerates HTML from the tree so edits
//!   round-trip without visual drift
//! - **Multi-document segmenter** — splits one AI response into named page
//!   documents
//!
//! ## Example — classify and re-serialize
//! ```ignore
//! use pagetree::{classify_html, serialize_tree};
//!
//! let html = r#"
//! <section class="p-8 md:p-4">
//!   <h1 class="text-xl font-bold">Welcome</h1>
//!   <a class="btn-primary" href="/start">Get started</a>
//! </section>
//! "#;
//!
//! let tree = classify_html(html)?;
//! let markup = serialize_tree(&tree)?;
//! ```
//!
//! ## Example — ingest a multi-page AI response
//! ```ignore
//! use pagetree::segment_response;
//!
//! let pages = segment_response("<!-- page: about -->\n<p>Hello</p>");
//! assert_eq!(pages[0].path, "about.html");
//! ```
//!
//! All transformations are pure and synchronous: each call operates on its
//! own inputs and returns a new value, so concurrent editing sessions never
//! contend on shared state.

pub mod classify;
pub mod component;
pub mod document;
pub mod error;
pub mod segment;
pub mod serialize;
pub mod style;
pub mod tailwind;

// --- Core types ---
pub use component::{ComponentKind, ComponentNode, ComponentTree, Props, ROOT_ID};
pub use document::PageDocument;
pub use error::{EngineError, EngineResult};
pub use style::{BoxSpacing, Breakpoint, ResponsiveStyles, StyleProps};
pub use tailwind::{ResolvedClasses, EmittedStyle};

/// Classifies an HTML document's body into a component tree.
pub fn classify_html(html: &str) -> EngineResult<ComponentTree> {
    classify::classify_document(html)
}

/// Serializes a component tree back to HTML at the desktop breakpoint.
pub fn serialize_tree(tree: &ComponentTree) -> EngineResult<String> {
    serialize::serialize_tree(tree)
}

/// Resolves the style a renderer should apply to `node` at `breakpoint`.
pub fn resolve_effective_style(node: &ComponentNode, breakpoint: Breakpoint) -> StyleProps {
    serialize::resolve_effective_style(node, breakpoint)
}

/// Resolves a utility-class attribute string into structured style.
pub fn resolve_classes(class_attr: &str) -> ResolvedClasses {
    tailwind::resolve_classes(class_attr)
}

/// Splits an AI response into named page documents (empty when no page
/// markers are present).
pub fn segment_response(response: &str) -> Vec<PageDocument> {
    segment::segment(response)
}

/// Single-document fallback extraction for marker-less responses.
pub fn extract_single_document(response: &str) -> Option<String> {
    segment::extract_single_document(response)
}
