//! Multi-document segmenter: one AI response → zero or more named pages.
//!
//! The generation pipeline emits pages separated by a literal marker
//! convention, `<!-- page: <name-or-path> -->`. A response without markers
//! yields an empty list — callers then fall back to
//! [`extract_single_document`].

use std::sync::OnceLock;

use regex::Regex;

use crate::document::PageDocument;

fn marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<!--\s*page:\s*(.*?)\s*-->").expect("valid marker pattern"))
}

fn fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)```[a-zA-Z]*[ \t]*\r?\n(.*?)```").expect("valid fence pattern")
    })
}

/// Splits a response into named page documents.
///
/// Each marker starts a page whose content runs until the next marker or the
/// end of the text. Names are normalized to `.html`; wrapping code fences are
/// stripped; pages with an empty name or an empty stripped body are
/// discarded. No markers means an empty list, never an error.
pub fn segment(response: &str) -> Vec<PageDocument> {
    let markers: Vec<(usize, usize, &str)> = marker_re()
        .captures_iter(response)
        .map(|caps| {
            let whole = caps.get(0).expect("capture 0 is the whole match");
            let name = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
            (whole.start(), whole.end(), name)
        })
        .collect();

    if markers.is_empty() {
        return Vec::new();
    }

    let mut pages = Vec::new();
    for (i, &(_, content_start, name)) in markers.iter().enumerate() {
        let content_end = markers
            .get(i + 1)
            .map(|next| next.0)
            .unwrap_or(response.len());
        let body = strip_code_fences(&response[content_start..content_end]);
        if name.is_empty() || body.is_empty() {
            continue;
        }
        pages.push(PageDocument::new(name, body));
    }
    pages
}

/// Fallback extraction when the caller expects exactly one document and the
/// response carries no page markers.
///
/// Prefers a fenced code block; otherwise treats text that opens with an
/// angle bracket as markup. Fragments missing a document/body wrapper are
/// scaffolded into a minimal full document shell.
pub fn extract_single_document(response: &str) -> Option<String> {
    if let Some(caps) = fence_re().captures(response) {
        let content = caps
            .get(1)
            .map(|m| m.as_str().trim())
            .unwrap_or_default();
        if !content.is_empty() {
            return Some(scaffold_document(content));
        }
    }

    let trimmed = response.trim();
    if trimmed.starts_with('<') {
        return Some(scaffold_document(trimmed));
    }
    None
}

/// Removes a wrapping triple-backtick fence, with or without an `html`
/// language tag (case-insensitive). Content that is not fenced comes back
/// trimmed but otherwise untouched.
fn strip_code_fences(content: &str) -> String {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed.to_string();
    };

    // The fence line may carry a language tag; anything else is not a fence.
    let rest = match rest.find('\n') {
        Some(i) => {
            let tag = rest[..i].trim();
            if tag.is_empty() || tag.eq_ignore_ascii_case("html") {
                &rest[i + 1..]
            } else {
                return trimmed.to_string();
            }
        }
        None => return trimmed.to_string(),
    };

    let rest = rest.trim_end();
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim().to_string()
}

/// Wraps a markup fragment in a minimal document shell; full documents pass
/// through unchanged.
fn scaffold_document(content: &str) -> String {
    let lower = content.to_lowercase();
    if lower.contains("<html") || lower.contains("<body") {
        return content.to_string();
    }
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n</head>\n<body>\n{}\n</body>\n</html>\n",
        content
    )
}
