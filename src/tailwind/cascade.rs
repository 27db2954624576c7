//! Breakpoint routing and cascade resolution.
//!
//! Tokens are parsed mobile-first (unprefixed and `sm:` tokens form the base,
//! `md:` layers tablet on top, `lg:` layers desktop on top of that) but the
//! exported style is stored desktop-first: the top-level style is the fully
//! desktop-resolved value, and `responsive_styles` carries the tablet/mobile
//! values only where they differ from the next-larger breakpoint. The
//! serializer applies overrides in the mirror-image direction; the two sides
//! form one invariant, covered by a shared round-trip test.

use crate::style::{BoxSpacing, ResponsiveStyles, StyleProps};

use super::registry::{parse_token, Declaration, SpacingDecl};

/// Output of resolving a class attribute string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedClasses {
    /// Desktop-resolved structured style.
    pub style: StyleProps,
    /// Tablet/mobile overrides, present only where they differ.
    pub responsive_styles: Option<ResponsiveStyles>,
    /// Tokens the parser could not model, verbatim and prefix included.
    pub unrecognized_classes: String,
}

/// Resolves a whitespace-separated class attribute string.
pub fn resolve_classes(class_attr: &str) -> ResolvedClasses {
    let mut mobile_decls: Vec<Declaration> = Vec::new();
    let mut tablet_decls: Vec<Declaration> = Vec::new();
    let mut desktop_decls: Vec<Declaration> = Vec::new();
    let mut unrecognized: Vec<&str> = Vec::new();

    for token in class_attr.split_whitespace() {
        let (bucket, base) = route_token(token);
        match parse_token(base) {
            Some(decl) => match bucket {
                Bucket::Mobile => mobile_decls.push(decl),
                Bucket::Tablet => tablet_decls.push(decl),
                Bucket::Desktop => desktop_decls.push(decl),
            },
            // The full original token survives, breakpoint prefix included.
            None => unrecognized.push(token),
        }
    }

    let mobile = apply_layer(&StyleProps::default(), &mobile_decls);
    let tablet = apply_layer(&mobile, &tablet_decls);
    let desktop = apply_layer(&tablet, &desktop_decls);

    let tablet_override = tablet.diff_from(&desktop);
    let mobile_override = mobile.diff_from(&tablet);
    let responsive = ResponsiveStyles {
        tablet: (!tablet_override.is_empty()).then_some(tablet_override),
        mobile: (!mobile_override.is_empty()).then_some(mobile_override),
    };

    ResolvedClasses {
        style: desktop,
        responsive_styles: (!responsive.is_empty()).then_some(responsive),
        unrecognized_classes: unrecognized.join(" "),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Mobile,
    Tablet,
    Desktop,
}

/// Routes a token into its breakpoint bucket by prefix. The smallest
/// breakpoint prefix folds into the mobile base; prefixes outside the
/// three-tier model (`xl:`, `hover:`, …) are left on the token so the whole
/// thing lands in the unrecognized output.
fn route_token(token: &str) -> (Bucket, &str) {
    if let Some(base) = token.strip_prefix("sm:") {
        (Bucket::Mobile, base)
    } else if let Some(base) = token.strip_prefix("md:") {
        (Bucket::Tablet, base)
    } else if let Some(base) = token.strip_prefix("lg:") {
        (Bucket::Desktop, base)
    } else {
        (Bucket::Mobile, token)
    }
}

/// Applies one breakpoint layer's declarations on top of a resolved base.
///
/// Spacing specificity ranks are tracked per side *within* the layer: a
/// single-side token beats an axis or all-sides shorthand regardless of token
/// order, while equally specific tokens resolve last-one-wins. A new layer
/// starts with fresh ranks — breakpoint layering beats specificity.
fn apply_layer(base: &StyleProps, decls: &[Declaration]) -> StyleProps {
    let mut out = base.clone();
    // [top, right, bottom, left]; None = untouched by this layer.
    let mut padding_ranks: [Option<u8>; 4] = [None; 4];
    let mut margin_ranks: [Option<u8>; 4] = [None; 4];

    for decl in decls {
        match decl {
            Declaration::Padding(s) => {
                apply_spacing(&mut out.padding, &mut padding_ranks, s);
            }
            Declaration::Margin(s) => {
                apply_spacing(&mut out.margin, &mut margin_ranks, s);
            }
            Declaration::Width(v) => out.width = Some(v.clone()),
            Declaration::Height(v) => out.height = Some(v.clone()),
            Declaration::TextColor(v) => out.color = Some(v.clone()),
            Declaration::BackgroundColor(v) => out.background_color = Some(v.clone()),
            Declaration::BackgroundImage(v) => out.background_image = Some(v.clone()),
            Declaration::FontSize(v) => out.font_size = Some(v.clone()),
            Declaration::FontWeight(v) => out.font_weight = Some(v.clone()),
            Declaration::TextAlign(v) => out.text_align = Some(*v),
            Declaration::TextDecoration(v) => out.text_decoration = Some(*v),
            Declaration::BorderWidth(v) => out.border_width = Some(v.clone()),
            Declaration::BorderStyle(v) => out.border_style = Some(*v),
            Declaration::BorderColor(v) => out.border_color = Some(v.clone()),
            Declaration::BorderRadius(v) => out.border_radius = Some(v.clone()),
            Declaration::BoxShadow(v) => out.box_shadow = Some(v.clone()),
        }
    }

    out
}

fn apply_spacing(slot: &mut Option<BoxSpacing>, ranks: &mut [Option<u8>; 4], decl: &SpacingDecl) {
    let spacing = slot.get_or_insert_with(BoxSpacing::default);
    let rank = decl.sides.rank();
    for &idx in decl.sides.indices() {
        if let Some(existing) = ranks[idx] {
            if rank < existing {
                continue;
            }
        }
        let side = match idx {
            0 => &mut spacing.top,
            1 => &mut spacing.right,
            2 => &mut spacing.bottom,
            _ => &mut spacing.left,
        };
        *side = Some(decl.value.clone());
        ranks[idx] = Some(rank);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::TextAlign;

    #[test]
    fn breakpoint_cascade_stores_desktop_first() {
        let resolved = resolve_classes("p-8 md:p-4 lg:p-2");

        assert_eq!(resolved.style.padding, Some(BoxSpacing::all("2")));
        let responsive = resolved.responsive_styles.unwrap();
        assert_eq!(responsive.tablet.unwrap().padding, Some(BoxSpacing::all("4")));
        assert_eq!(responsive.mobile.unwrap().padding, Some(BoxSpacing::all("8")));
    }

    #[test]
    fn single_breakpoint_emits_no_overrides() {
        let resolved = resolve_classes("p-8");
        assert_eq!(resolved.style.padding, Some(BoxSpacing::all("8")));
        assert!(resolved.responsive_styles.is_none());
    }

    #[test]
    fn side_specificity_beats_token_order() {
        for attr in ["p-8 pt-2", "pt-2 p-8"] {
            let resolved = resolve_classes(attr);
            let padding = resolved.style.padding.unwrap();
            assert_eq!(padding.top.as_deref(), Some("2"), "attr: {}", attr);
            assert_eq!(padding.right.as_deref(), Some("8"), "attr: {}", attr);
            assert_eq!(padding.bottom.as_deref(), Some("8"), "attr: {}", attr);
            assert_eq!(padding.left.as_deref(), Some("8"), "attr: {}", attr);
        }
    }

    #[test]
    fn axis_sits_between_all_and_side() {
        let resolved = resolve_classes("px-4 p-8 pl-2");
        let padding = resolved.style.padding.unwrap();
        assert_eq!(padding.left.as_deref(), Some("2"));
        assert_eq!(padding.right.as_deref(), Some("4"));
        assert_eq!(padding.top.as_deref(), Some("8"));
    }

    #[test]
    fn equal_specificity_is_last_one_wins() {
        let resolved = resolve_classes("p-2 p-8");
        assert_eq!(resolved.style.padding, Some(BoxSpacing::all("8")));
    }

    #[test]
    fn later_breakpoint_layer_beats_earlier_specificity() {
        // pt-2 is more specific than p-4, but md: is a fresh layer.
        let resolved = resolve_classes("pt-2 md:p-4");
        let padding = resolved.style.padding.unwrap();
        assert_eq!(padding.top.as_deref(), Some("4"));

        let mobile = resolved.responsive_styles.unwrap().mobile.unwrap();
        assert_eq!(mobile.padding.unwrap().top.as_deref(), Some("2"));
    }

    #[test]
    fn unrecognized_tokens_are_preserved_verbatim() {
        let resolved = resolve_classes("rotate-45 p-4");
        assert_eq!(resolved.style.padding, Some(BoxSpacing::all("4")));
        assert_eq!(resolved.unrecognized_classes, "rotate-45");
    }

    #[test]
    fn unrecognized_keeps_breakpoint_prefix() {
        let resolved = resolve_classes("md:rotate-2 xl:p-2 hover:underline");
        assert_eq!(
            resolved.unrecognized_classes,
            "md:rotate-2 xl:p-2 hover:underline"
        );
        assert!(resolved.style.is_empty());
    }

    #[test]
    fn smallest_prefix_folds_into_mobile() {
        let a = resolve_classes("sm:text-center");
        let b = resolve_classes("text-center");
        assert_eq!(a.style.text_align, Some(TextAlign::Center));
        assert_eq!(a.style, b.style);
        assert!(a.responsive_styles.is_none());
    }

    #[test]
    fn tablet_only_token_overrides_mobile_for_mobile_emission() {
        // Mobile has no alignment; tablet and desktop do. The mobile variant
        // differs from tablet (None vs Some) but carries no defined field,
        // so nothing is emitted for it.
        let resolved = resolve_classes("md:text-center");
        assert_eq!(resolved.style.text_align, Some(TextAlign::Center));
        assert!(resolved.responsive_styles.is_none());
    }

    #[test]
    fn empty_attribute_resolves_to_nothing() {
        let resolved = resolve_classes("   ");
        assert!(resolved.style.is_empty());
        assert!(resolved.responsive_styles.is_none());
        assert!(resolved.unrecognized_classes.is_empty());
    }
}
