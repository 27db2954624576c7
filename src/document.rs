use serde::{Deserialize, Serialize};

/// A named HTML document within a multi-page project.
///
/// The path always resolves to a `.html`-suffixed identifier; the content is
/// raw markup. Documents are created by the segmenter (or by the editor for a
/// blank project) and rewritten whenever a page is re-serialized — this core
/// never deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDocument {
    pub path: String,
    pub content: String,
}

impl PageDocument {
    /// Builds a document, normalizing a bare name by appending `.html`.
    pub fn new(name: &str, content: impl Into<String>) -> Self {
        Self {
            path: normalize_path(name),
            content: content.into(),
        }
    }
}

/// Appends `.html` when the name lacks the suffix.
pub fn normalize_path(name: &str) -> String {
    let name = name.trim();
    if name.ends_with(".html") {
        name.to_string()
    } else {
        format!("{}.html", name)
    }
}
