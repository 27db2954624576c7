use pagetree::{
    classify_html, extract_single_document, resolve_classes, resolve_effective_style,
    segment_response, serialize_tree, Breakpoint, BoxSpacing, ComponentKind, ComponentNode,
    ComponentTree, Props, ROOT_ID,
};
use pretty_assertions::assert_eq;

/// Walks two trees in parallel and asserts the round-trip contract: same
/// kinds, same properties, same effective desktop styles. Ids are allowed to
/// differ between classification runs.
fn assert_trees_equivalent(a: &ComponentTree, b: &ComponentTree) {
    fn walk(a: &ComponentTree, aid: &str, b: &ComponentTree, bid: &str) {
        let na = a.get(aid).expect("node exists in first tree");
        let nb = b.get(bid).expect("node exists in second tree");
        assert_eq!(na.kind, nb.kind);
        assert_eq!(na.props, nb.props);
        assert_eq!(
            resolve_effective_style(na, Breakpoint::Desktop),
            resolve_effective_style(nb, Breakpoint::Desktop)
        );
        assert_eq!(na.unrecognized_classes, nb.unrecognized_classes);
        assert_eq!(na.children.len(), nb.children.len());
        for (ca, cb) in na.children.iter().zip(nb.children.iter()) {
            walk(a, ca, b, cb);
        }
    }
    walk(a, a.root_id(), b, b.root_id());
}

// ─── Pipeline A: classify → serialize → classify ────────────────────────────

#[test]
fn round_trip_preserves_structure_and_styles() {
    let html = r#"
<section class="p-8 md:p-4 lg:p-2 bg-black">
  <h1 class="text-xl font-bold text-white">Welcome</h1>
  <p>Build pages by describing them.</p>
  <a class="btn-primary" href="/start">Get started</a>
  <a href="/about"><span>About us</span></a>
  <img src="hero.png" alt="Hero">
  <input type="email" name="signup">
  <video src="demo.mp4"></video>
  <hr>
</section>
"#;

    let first = classify_html(html).unwrap();
    let markup = serialize_tree(&first).unwrap();
    let second = classify_html(&markup).unwrap();

    assert_trees_equivalent(&first, &second);
}

#[test]
fn round_trip_is_idempotent_after_one_pass() {
    let html = r#"<div class="p-4 rotate-45"><p class="text-center underline">Hi</p></div>"#;

    let first = classify_html(html).unwrap();
    let once = serialize_tree(&first).unwrap();
    let twice = serialize_tree(&classify_html(&once).unwrap()).unwrap();

    // After one pass the markup is a fixed point of the pipeline.
    assert_eq!(once, twice);
}

#[test]
fn responsive_classes_survive_the_round_trip() {
    let html = r#"<div class="p-8 md:p-4 lg:p-2"></div>"#;
    let first = classify_html(html).unwrap();
    let markup = serialize_tree(&first).unwrap();
    let second = classify_html(&markup).unwrap();

    let get_div = |tree: &ComponentTree| {
        let root = tree.get(ROOT_ID).unwrap();
        tree.get(&root.children[0]).unwrap().clone()
    };
    let (da, db) = (get_div(&first), get_div(&second));
    for bp in [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Desktop] {
        assert_eq!(
            resolve_effective_style(&da, bp),
            resolve_effective_style(&db, bp)
        );
    }
}

#[test]
fn input_element_is_never_decomposed() {
    let html = r#"<form><label>Email</label><input type="email" required></form>"#;
    let tree = classify_html(html).unwrap();
    let root = tree.get(ROOT_ID).unwrap();

    // The whole form is an escape-hatch leaf carrying its markup verbatim.
    let form = tree.get(&root.children[0]).unwrap();
    assert_eq!(form.kind, ComponentKind::RawMarkup);
    let Props::RawMarkup { html: raw } = &form.props else {
        panic!("expected raw markup");
    };
    assert!(raw.contains("<input"));
    assert!(raw.contains("required"));

    let markup = serialize_tree(&tree).unwrap();
    assert!(markup.contains("<input"));
}

#[test]
fn empty_input_is_rejected() {
    assert!(classify_html("").is_err());
    assert!(classify_html("   \n\t").is_err());
}

// ─── Cascade invariant shared between resolver and serializer ───────────────

/// The resolver parses mobile-first and stores desktop-first; the serializer
/// applies overrides desktop-down. The two directions must mirror each other
/// exactly, so the per-breakpoint effective values equal the values each
/// layer of the original class string resolves to.
#[test]
fn cascade_direction_and_override_application_mirror_each_other() {
    let resolved = resolve_classes("p-8 md:p-4 lg:p-2 text-white md:text-black");
    let mut node = ComponentNode::new("n-1".to_string(), Props::Container { tag: None });
    node.style = resolved.style;
    node.responsive_styles = resolved.responsive_styles;

    let desktop = resolve_effective_style(&node, Breakpoint::Desktop);
    assert_eq!(desktop.padding, Some(BoxSpacing::all("2")));
    assert_eq!(desktop.color.as_deref(), Some("black"));

    let tablet = resolve_effective_style(&node, Breakpoint::Tablet);
    assert_eq!(tablet.padding, Some(BoxSpacing::all("4")));
    assert_eq!(tablet.color.as_deref(), Some("black"));

    let mobile = resolve_effective_style(&node, Breakpoint::Mobile);
    assert_eq!(mobile.padding, Some(BoxSpacing::all("8")));
    assert_eq!(mobile.color.as_deref(), Some("white"));
}

#[test]
fn breakpoint_cascade_resolves_desktop_first() {
    let resolved = resolve_classes("p-8 md:p-4 lg:p-2");
    assert_eq!(resolved.style.padding, Some(BoxSpacing::all("2")));

    let responsive = resolved.responsive_styles.unwrap();
    assert_eq!(
        responsive.tablet.unwrap().padding,
        Some(BoxSpacing::all("4"))
    );
    assert_eq!(
        responsive.mobile.unwrap().padding,
        Some(BoxSpacing::all("8"))
    );

    // A single-breakpoint attribute emits no overrides at all.
    assert!(resolve_classes("p-8").responsive_styles.is_none());
}

#[test]
fn side_specific_token_wins_regardless_of_order() {
    for attr in ["p-8 pt-2", "pt-2 p-8"] {
        let padding = resolve_classes(attr).style.padding.unwrap();
        assert_eq!(padding.top.as_deref(), Some("2"));
        assert_eq!(padding.right.as_deref(), Some("8"));
        assert_eq!(padding.bottom.as_deref(), Some("8"));
        assert_eq!(padding.left.as_deref(), Some("8"));
    }
}

#[test]
fn unrecognized_tokens_are_kept_verbatim() {
    let resolved = resolve_classes("rotate-45 p-4");
    assert_eq!(resolved.style.padding, Some(BoxSpacing::all("4")));
    assert_eq!(resolved.unrecognized_classes, "rotate-45");
}

// ─── Pipeline B: segment → classify ─────────────────────────────────────────

#[test]
fn segmenter_splits_marked_responses() {
    let input = "<!-- page: about -->\n<p>A</p>\n<!-- page: contact.html -->\n<p>B</p>";
    let pages = segment_response(input);

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].path, "about.html");
    assert_eq!(pages[0].content, "<p>A</p>");
    assert_eq!(pages[1].path, "contact.html");
    assert_eq!(pages[1].content, "<p>B</p>");
}

#[test]
fn segmenter_returns_empty_without_markers() {
    assert!(segment_response("<p>loose markup</p>").is_empty());
}

#[test]
fn fences_are_stripped_from_page_bodies() {
    let input = "<!-- page: index -->\n```html\n<h1>Hi</h1>\n```";
    let pages = segment_response(input);
    assert_eq!(pages[0].content, "<h1>Hi</h1>");
}

#[test]
fn segmented_pages_feed_the_classifier() {
    let input = "<!-- page: home -->\n<h1>Home</h1>\n<!-- page: faq -->\n<p>Q&amp;A</p>";
    for page in segment_response(input) {
        let tree = classify_html(&page.content).unwrap();
        let root = tree.get(ROOT_ID).unwrap();
        assert_eq!(root.children.len(), 1);
        assert_eq!(
            tree.get(&root.children[0]).unwrap().kind,
            ComponentKind::Text
        );
    }
}

#[test]
fn single_document_fallback_scaffolds_fragments() {
    let doc = extract_single_document("```html\n<h1>Solo</h1>\n```").unwrap();
    assert!(doc.contains("<body>"));
    assert!(doc.contains("<h1>Solo</h1>"));

    // Full documents pass through untouched; prose yields nothing.
    let full = "<html><body><p>x</p></body></html>";
    assert_eq!(extract_single_document(full).unwrap(), full);
    assert!(extract_single_document("no markup here").is_none());
}

// ─── Editor contract ────────────────────────────────────────────────────────

#[test]
fn editor_mutations_round_trip_through_serialization() {
    let mut tree = classify_html("<section><p>keep</p><p>drop</p></section>").unwrap();
    let root = tree.get(ROOT_ID).unwrap();
    let section_id = root.children[0].clone();
    let drop_id = tree.get(&section_id).unwrap().children[1].clone();

    tree.remove(&drop_id).unwrap();
    let new_id = tree
        .insert(
            &section_id,
            Props::Button {
                text: "Buy".to_string(),
                href: Some("/buy".to_string()),
            },
        )
        .unwrap();
    assert_eq!(tree.parent_of(&new_id), Some(section_id.as_str()));

    let markup = serialize_tree(&tree).unwrap();
    assert!(markup.contains("keep"));
    assert!(!markup.contains("drop"));
    assert!(markup.contains("<a href=\"/buy\">Buy</a>"));
}

#[test]
fn tree_json_shape_uses_camel_case_and_kind_tags() {
    let tree = classify_html(r#"<a class="btn" href="/x">Go</a>"#).unwrap();
    let json = serde_json::to_value(&tree).unwrap();

    let nodes = json.get("nodes").unwrap().as_object().unwrap();
    let button = nodes
        .values()
        .find(|n| n["kind"] == "Button")
        .expect("button node present");
    assert_eq!(button["props"]["type"], "Button");
    assert_eq!(button["props"]["href"], "/x");
    assert_eq!(button["isContainer"], false);
    assert_eq!(button["unrecognizedClasses"], "btn");

    let restored: ComponentTree = serde_json::from_value(json).unwrap();
    assert_eq!(&restored, &tree);
}
