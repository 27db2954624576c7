use serde::{Deserialize, Serialize};

/// Named viewport tier.
///
/// `Desktop` is the largest tier and the one every node's top-level style is
/// resolved against. Smaller tiers are reached through `responsive_styles`
/// overrides applied on top of the desktop value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

/// Four-sided spacing record used for padding and margin.
///
/// Values are utility scale steps ("4") or literal CSS lengths carried over
/// from bracketed tokens ("13px"). Shorthand tokens are collapsed into
/// per-side values at resolution time, so this record is always canonical.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxSpacing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
}

impl BoxSpacing {
    /// All four sides set to the same value.
    pub fn all(value: &str) -> Self {
        Self {
            top: Some(value.to_string()),
            right: Some(value.to_string()),
            bottom: Some(value.to_string()),
            left: Some(value.to_string()),
        }
    }

    /// True when every side shares the same defined value.
    pub fn is_uniform(&self) -> bool {
        self.top.is_some()
            && self.top == self.right
            && self.right == self.bottom
            && self.bottom == self.left
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDecoration {
    None,
    Underline,
    #[serde(rename = "line-through")]
    LineThrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Dashed,
    Dotted,
    Double,
    None,
}

impl BorderStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
            BorderStyle::Double => "double",
            BorderStyle::None => "none",
        }
    }
}

/// Structured style properties for a component node.
///
/// On a node, this struct always holds the desktop-resolved value for every
/// property it defines; smaller breakpoints live in [`ResponsiveStyles`].
/// Every field is optional and compared field-by-field when deciding whether
/// a responsive override needs to be emitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<BoxSpacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<BoxSpacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_style: Option<BorderStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<String>,
}

impl StyleProps {
    pub fn is_empty(&self) -> bool {
        *self == StyleProps::default()
    }

    /// Replaces every field that `overlay` defines with the overlay's value.
    ///
    /// This is wholesale field replacement: an overlay `padding` replaces the
    /// entire four-sided record, never individual sides. Fields absent from
    /// the overlay are left untouched.
    pub fn apply_override(&mut self, overlay: &StyleProps) {
        if overlay.padding.is_some() {
            self.padding = overlay.padding.clone();
        }
        if overlay.margin.is_some() {
            self.margin = overlay.margin.clone();
        }
        if overlay.width.is_some() {
            self.width = overlay.width.clone();
        }
        if overlay.height.is_some() {
            self.height = overlay.height.clone();
        }
        if overlay.color.is_some() {
            self.color = overlay.color.clone();
        }
        if overlay.background_color.is_some() {
            self.background_color = overlay.background_color.clone();
        }
        if overlay.background_image.is_some() {
            self.background_image = overlay.background_image.clone();
        }
        if overlay.font_size.is_some() {
            self.font_size = overlay.font_size.clone();
        }
        if overlay.font_weight.is_some() {
            self.font_weight = overlay.font_weight.clone();
        }
        if overlay.text_align.is_some() {
            self.text_align = overlay.text_align;
        }
        if overlay.text_decoration.is_some() {
            self.text_decoration = overlay.text_decoration;
        }
        if overlay.border_width.is_some() {
            self.border_width = overlay.border_width.clone();
        }
        if overlay.border_style.is_some() {
            self.border_style = overlay.border_style;
        }
        if overlay.border_color.is_some() {
            self.border_color = overlay.border_color.clone();
        }
        if overlay.border_radius.is_some() {
            self.border_radius = overlay.border_radius.clone();
        }
        if overlay.box_shadow.is_some() {
            self.box_shadow = overlay.box_shadow.clone();
        }
        if overlay.animation.is_some() {
            self.animation = overlay.animation.clone();
        }
    }

    /// Returns the fields of `self` that are defined and differ from `base`.
    ///
    /// Used to emit minimal responsive overrides: a breakpoint variant only
    /// carries the fields where its resolved value diverges from the
    /// next-larger breakpoint.
    pub fn diff_from(&self, base: &StyleProps) -> StyleProps {
        let mut out = StyleProps::default();
        if self.padding.is_some() && self.padding != base.padding {
            out.padding = self.padding.clone();
        }
        if self.margin.is_some() && self.margin != base.margin {
            out.margin = self.margin.clone();
        }
        if self.width.is_some() && self.width != base.width {
            out.width = self.width.clone();
        }
        if self.height.is_some() && self.height != base.height {
            out.height = self.height.clone();
        }
        if self.color.is_some() && self.color != base.color {
            out.color = self.color.clone();
        }
        if self.background_color.is_some() && self.background_color != base.background_color {
            out.background_color = self.background_color.clone();
        }
        if self.background_image.is_some() && self.background_image != base.background_image {
            out.background_image = self.background_image.clone();
        }
        if self.font_size.is_some() && self.font_size != base.font_size {
            out.font_size = self.font_size.clone();
        }
        if self.font_weight.is_some() && self.font_weight != base.font_weight {
            out.font_weight = self.font_weight.clone();
        }
        if self.text_align.is_some() && self.text_align != base.text_align {
            out.text_align = self.text_align;
        }
        if self.text_decoration.is_some() && self.text_decoration != base.text_decoration {
            out.text_decoration = self.text_decoration;
        }
        if self.border_width.is_some() && self.border_width != base.border_width {
            out.border_width = self.border_width.clone();
        }
        if self.border_style.is_some() && self.border_style != base.border_style {
            out.border_style = self.border_style;
        }
        if self.border_color.is_some() && self.border_color != base.border_color {
            out.border_color = self.border_color.clone();
        }
        if self.border_radius.is_some() && self.border_radius != base.border_radius {
            out.border_radius = self.border_radius.clone();
        }
        if self.box_shadow.is_some() && self.box_shadow != base.box_shadow {
            out.box_shadow = self.box_shadow.clone();
        }
        if self.animation.is_some() && self.animation != base.animation {
            out.animation = self.animation.clone();
        }
        out
    }
}

/// Per-breakpoint style overrides for a node.
///
/// Each variant is a *fully resolved* partial style for its breakpoint, not a
/// delta relative to sub-field state: the consumer applies it by wholesale
/// field replacement. A variant is omitted when it is identical to the
/// next-larger breakpoint's resolved value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponsiveStyles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tablet: Option<StyleProps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<StyleProps>,
}

impl ResponsiveStyles {
    pub fn is_empty(&self) -> bool {
        self.tablet.is_none() && self.mobile.is_none()
    }
}
