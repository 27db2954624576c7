//! Token regeneration: structured style → utility class tokens.
//!
//! The inverse of the cascade: unprefixed tokens carry the mobile-effective
//! value, `md:` tokens the tablet fields that differ from mobile, and `lg:`
//! tokens the desktop fields that differ from tablet. Re-resolving the
//! emitted tokens reproduces the stored style exactly, which is what keeps
//! serialized markup round-trippable.

use crate::style::{BoxSpacing, ResponsiveStyles, StyleProps, TextDecoration};

use super::registry::{is_bare_size, is_bare_spacing, BASE_SCALE};

/// Class tokens plus inline CSS declarations for properties that have no
/// utility-token form (currently only the animation descriptor).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmittedStyle {
    pub classes: Vec<String>,
    pub inline: Vec<(String, String)>,
}

/// Regenerates the utility tokens for a node's style and responsive
/// overrides.
pub fn style_to_classes(style: &StyleProps, responsive: Option<&ResponsiveStyles>) -> EmittedStyle {
    let desktop = style.clone();
    let mut tablet = desktop.clone();
    let mut mobile;
    match responsive {
        Some(r) => {
            if let Some(t) = &r.tablet {
                tablet.apply_override(t);
            }
            mobile = tablet.clone();
            if let Some(m) = &r.mobile {
                mobile.apply_override(m);
            }
        }
        None => mobile = tablet.clone(),
    }

    let mut classes = tokens_for(&mobile, "");
    classes.extend(tokens_for(&tablet.diff_from(&mobile), "md:"));
    classes.extend(tokens_for(&desktop.diff_from(&tablet), "lg:"));

    let mut inline = Vec::new();
    if let Some(animation) = &desktop.animation {
        inline.push(("animation".to_string(), animation.clone()));
    }

    EmittedStyle { classes, inline }
}

/// Tokens for every defined field of a (possibly partial) style, each
/// carrying the given breakpoint prefix.
fn tokens_for(style: &StyleProps, prefix: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut push = |token: String| out.push(format!("{}{}", prefix, token));

    if let Some(padding) = &style.padding {
        for token in spacing_tokens("p", padding) {
            push(token);
        }
    }
    if let Some(margin) = &style.margin {
        for token in spacing_tokens("m", margin) {
            push(token);
        }
    }
    if let Some(w) = &style.width {
        push(format!("w-{}", size_value(w)));
    }
    if let Some(h) = &style.height {
        push(format!("h-{}", size_value(h)));
    }
    if let Some(c) = &style.color {
        push(format!("text-{}", c));
    }
    if let Some(c) = &style.background_color {
        push(format!("bg-{}", c));
    }
    if let Some(url) = &style.background_image {
        push(format!("bg-[url({})]", url));
    }
    if let Some(s) = &style.font_size {
        push(format!("text-{}", s));
    }
    if let Some(w) = &style.font_weight {
        push(format!("font-{}", w));
    }
    if let Some(a) = &style.text_align {
        push(format!("text-{}", a.as_str()));
    }
    if let Some(d) = &style.text_decoration {
        push(
            match d {
                TextDecoration::Underline => "underline",
                TextDecoration::LineThrough => "line-through",
                TextDecoration::None => "no-underline",
            }
            .to_string(),
        );
    }
    if let Some(w) = &style.border_width {
        if w == "1" {
            push("border".to_string());
        } else {
            push(format!("border-{}", w));
        }
    }
    if let Some(s) = &style.border_style {
        push(format!("border-{}", s.as_str()));
    }
    if let Some(c) = &style.border_color {
        push(format!("border-{}", c));
    }
    if let Some(r) = &style.border_radius {
        if r == BASE_SCALE {
            push("rounded".to_string());
        } else {
            push(format!("rounded-{}", r));
        }
    }
    if let Some(s) = &style.box_shadow {
        if s == BASE_SCALE {
            push("shadow".to_string());
        } else {
            push(format!("shadow-{}", s));
        }
    }

    out
}

/// Collapses a four-sided record back into the fewest shorthand tokens:
/// `p-*` when uniform, `px-*`/`py-*` for matching axes, per-side otherwise.
fn spacing_tokens(prefix: &str, spacing: &BoxSpacing) -> Vec<String> {
    if spacing.is_uniform() {
        let value = spacing.top.as_deref().expect("uniform implies defined");
        return vec![format!("{}-{}", prefix, spacing_value(value))];
    }

    let mut out = Vec::new();

    let vertical_pair = spacing.top.is_some() && spacing.top == spacing.bottom;
    if vertical_pair {
        let value = spacing.top.as_deref().expect("checked above");
        out.push(format!("{}y-{}", prefix, spacing_value(value)));
    } else {
        if let Some(v) = &spacing.top {
            out.push(format!("{}t-{}", prefix, spacing_value(v)));
        }
        if let Some(v) = &spacing.bottom {
            out.push(format!("{}b-{}", prefix, spacing_value(v)));
        }
    }

    let horizontal_pair = spacing.left.is_some() && spacing.left == spacing.right;
    if horizontal_pair {
        let value = spacing.left.as_deref().expect("checked above");
        out.push(format!("{}x-{}", prefix, spacing_value(value)));
    } else {
        if let Some(v) = &spacing.right {
            out.push(format!("{}r-{}", prefix, spacing_value(v)));
        }
        if let Some(v) = &spacing.left {
            out.push(format!("{}l-{}", prefix, spacing_value(v)));
        }
    }

    out
}

fn spacing_value(value: &str) -> String {
    if is_bare_spacing(value) {
        value.to_string()
    } else {
        format!("[{}]", value)
    }
}

fn size_value(value: &str) -> String {
    if is_bare_size(value) {
        value.to_string()
    } else {
        format!("[{}]", value)
    }
}
