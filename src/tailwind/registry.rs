//! Single-token parser: one utility class → one structured declaration.
//!
//! A token the parser does not recognise yields `None` and is preserved by
//! the caller in the unrecognized-classes output, never silently dropped.

use crate::style::{BorderStyle, TextAlign, TextDecoration};

/// Which sides a spacing shorthand touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingSides {
    All,
    X,
    Y,
    Top,
    Right,
    Bottom,
    Left,
}

impl SpacingSides {
    /// Specificity rank: a more specific token always beats a broader one,
    /// regardless of the order they appear in the class string.
    pub fn rank(self) -> u8 {
        match self {
            SpacingSides::All => 0,
            SpacingSides::X | SpacingSides::Y => 1,
            _ => 2,
        }
    }

    /// Indices into a `[top, right, bottom, left]` record.
    pub fn indices(self) -> &'static [usize] {
        match self {
            SpacingSides::All => &[0, 1, 2, 3],
            SpacingSides::X => &[1, 3],
            SpacingSides::Y => &[0, 2],
            SpacingSides::Top => &[0],
            SpacingSides::Right => &[1],
            SpacingSides::Bottom => &[2],
            SpacingSides::Left => &[3],
        }
    }
}

/// A spacing shorthand with the sides it applies to.
#[derive(Debug, Clone, PartialEq)]
pub struct SpacingDecl {
    pub sides: SpacingSides,
    pub value: String,
}

/// One parsed utility token's structured effect.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Padding(SpacingDecl),
    Margin(SpacingDecl),
    Width(String),
    Height(String),
    TextColor(String),
    BackgroundColor(String),
    BackgroundImage(String),
    FontSize(String),
    FontWeight(String),
    TextAlign(TextAlign),
    TextDecoration(TextDecoration),
    BorderWidth(String),
    BorderStyle(BorderStyle),
    BorderColor(String),
    BorderRadius(String),
    BoxShadow(String),
}

/// Minimal named-color set. Anything outside it stays unrecognized so the
/// original class token survives round-tripping untouched.
pub const NAMED_COLORS: &[&str] = &[
    "black",
    "white",
    "gray",
    "red",
    "orange",
    "yellow",
    "green",
    "teal",
    "blue",
    "indigo",
    "purple",
    "pink",
    "transparent",
];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl",
];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const RADIUS_SCALES: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];

const SHADOW_SCALES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];

/// Scale value used when a token carries no explicit suffix (`rounded`,
/// `shadow`). Re-emitted as the bare token.
pub const BASE_SCALE: &str = "base";

// ─── Public parser ───────────────────────────────────────────────────────────

/// Parses a single (breakpoint-stripped) utility token.
pub fn parse_token(token: &str) -> Option<Declaration> {
    resolve_spacing(token)
        .or_else(|| resolve_sizing(token))
        .or_else(|| resolve_text(token))
        .or_else(|| resolve_font_weight(token))
        .or_else(|| resolve_decoration(token))
        .or_else(|| resolve_background(token))
        .or_else(|| resolve_border(token))
        .or_else(|| resolve_radius(token))
        .or_else(|| resolve_shadow(token))
}

// ─── Spacing ─────────────────────────────────────────────────────────────────

fn resolve_spacing(token: &str) -> Option<Declaration> {
    let (is_padding, rest) = if let Some(r) = token.strip_prefix('p') {
        (true, r)
    } else if let Some(r) = token.strip_prefix('m') {
        (false, r)
    } else {
        return None;
    };

    let (sides, val_str) = if let Some(v) = rest.strip_prefix("x-") {
        (SpacingSides::X, v)
    } else if let Some(v) = rest.strip_prefix("y-") {
        (SpacingSides::Y, v)
    } else if let Some(v) = rest.strip_prefix("t-") {
        (SpacingSides::Top, v)
    } else if let Some(v) = rest.strip_prefix("r-") {
        (SpacingSides::Right, v)
    } else if let Some(v) = rest.strip_prefix("b-") {
        (SpacingSides::Bottom, v)
    } else if let Some(v) = rest.strip_prefix("l-") {
        (SpacingSides::Left, v)
    } else if let Some(v) = rest.strip_prefix('-') {
        (SpacingSides::All, v)
    } else {
        return None;
    };

    let value = spacing_value(val_str)?;
    let decl = SpacingDecl { sides, value };
    Some(if is_padding {
        Declaration::Padding(decl)
    } else {
        Declaration::Margin(decl)
    })
}

/// Accepts a numeric scale step ("4", "0.5"), the literal "px", or a
/// bracketed CSS length ("[13px]"). Bracketed literals are stored unwrapped.
fn spacing_value(val: &str) -> Option<String> {
    if val == "px" {
        return Some(val.to_string());
    }
    if is_scale_number(val) {
        return Some(val.to_string());
    }
    bracketed(val).map(str::to_string)
}

/// True when a stored spacing value can be emitted without brackets.
pub(crate) fn is_bare_spacing(val: &str) -> bool {
    val == "px" || is_scale_number(val)
}

/// True when a stored sizing value can be emitted without brackets.
pub(crate) fn is_bare_size(val: &str) -> bool {
    matches!(val, "full" | "auto" | "screen" | "min" | "max" | "fit")
        || is_scale_number(val)
        || is_fraction(val)
}

fn is_scale_number(val: &str) -> bool {
    !val.is_empty()
        && val.chars().all(|c| c.is_ascii_digit() || c == '.')
        && val.parse::<f64>().is_ok()
}

fn bracketed(val: &str) -> Option<&str> {
    let inner = val.strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() {
        None
    } else {
        Some(inner)
    }
}

// ─── Sizing ──────────────────────────────────────────────────────────────────

fn resolve_sizing(token: &str) -> Option<Declaration> {
    if let Some(v) = token.strip_prefix("w-") {
        return sizing_value(v).map(Declaration::Width);
    }
    if let Some(v) = token.strip_prefix("h-") {
        return sizing_value(v).map(Declaration::Height);
    }
    None
}

fn sizing_value(val: &str) -> Option<String> {
    if is_bare_size(val) {
        return Some(val.to_string());
    }
    bracketed(val).map(str::to_string)
}

fn is_fraction(val: &str) -> bool {
    let Some((num, den)) = val.split_once('/') else {
        return false;
    };
    num.parse::<u32>().is_ok() && den.parse::<u32>().is_ok()
}

// ─── Typography & text color ─────────────────────────────────────────────────

fn resolve_text(token: &str) -> Option<Declaration> {
    let val = token.strip_prefix("text-")?;

    let align = match val {
        "left" => Some(TextAlign::Left),
        "center" => Some(TextAlign::Center),
        "right" => Some(TextAlign::Right),
        "justify" => Some(TextAlign::Justify),
        _ => None,
    };
    if let Some(a) = align {
        return Some(Declaration::TextAlign(a));
    }

    if FONT_SIZES.contains(&val) {
        return Some(Declaration::FontSize(val.to_string()));
    }

    if NAMED_COLORS.contains(&val) {
        return Some(Declaration::TextColor(val.to_string()));
    }

    None
}

fn resolve_font_weight(token: &str) -> Option<Declaration> {
    let val = token.strip_prefix("font-")?;
    if FONT_WEIGHTS.contains(&val) {
        Some(Declaration::FontWeight(val.to_string()))
    } else {
        None
    }
}

fn resolve_decoration(token: &str) -> Option<Declaration> {
    let deco = match token {
        "underline" => TextDecoration::Underline,
        "line-through" => TextDecoration::LineThrough,
        "no-underline" => TextDecoration::None,
        _ => return None,
    };
    Some(Declaration::TextDecoration(deco))
}

// ─── Background ──────────────────────────────────────────────────────────────

fn resolve_background(token: &str) -> Option<Declaration> {
    let val = token.strip_prefix("bg-")?;

    if NAMED_COLORS.contains(&val) {
        return Some(Declaration::BackgroundColor(val.to_string()));
    }

    // bg-[url(https://...)] — external image literal
    let inner = bracketed(val)?;
    let url = inner.strip_prefix("url(")?.strip_suffix(')')?;
    if url.is_empty() {
        None
    } else {
        Some(Declaration::BackgroundImage(url.to_string()))
    }
}

// ─── Border ──────────────────────────────────────────────────────────────────

fn resolve_border(token: &str) -> Option<Declaration> {
    if token == "border" {
        return Some(Declaration::BorderWidth("1".to_string()));
    }
    let val = token.strip_prefix("border-")?;

    let style = match val {
        "solid" => Some(BorderStyle::Solid),
        "dashed" => Some(BorderStyle::Dashed),
        "dotted" => Some(BorderStyle::Dotted),
        "double" => Some(BorderStyle::Double),
        "none" => Some(BorderStyle::None),
        _ => None,
    };
    if let Some(s) = style {
        return Some(Declaration::BorderStyle(s));
    }

    if NAMED_COLORS.contains(&val) {
        return Some(Declaration::BorderColor(val.to_string()));
    }

    if is_scale_number(val) {
        return Some(Declaration::BorderWidth(val.to_string()));
    }

    None
}

// ─── Radius & shadow ─────────────────────────────────────────────────────────

fn resolve_radius(token: &str) -> Option<Declaration> {
    if token == "rounded" {
        return Some(Declaration::BorderRadius(BASE_SCALE.to_string()));
    }
    let val = token.strip_prefix("rounded-")?;
    if RADIUS_SCALES.contains(&val) {
        Some(Declaration::BorderRadius(val.to_string()))
    } else {
        None
    }
}

fn resolve_shadow(token: &str) -> Option<Declaration> {
    if token == "shadow" {
        return Some(Declaration::BoxShadow(BASE_SCALE.to_string()));
    }
    let val = token.strip_prefix("shadow-")?;
    if SHADOW_SCALES.contains(&val) {
        Some(Declaration::BoxShadow(val.to_string()))
    } else {
        None
    }
}
