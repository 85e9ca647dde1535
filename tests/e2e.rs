use class_chain_suggest as ccs;

fn ctx() -> ccs::Context {
    ccs::Catalog::from_json(include_str!("fixtures/catalog.json"))
        .unwrap()
        .into_context(true)
        .unwrap()
}

fn values(out: &ccs::SuggestionList) -> Vec<&str> {
    out.classes.iter().map(|s| s.value.as_str()).collect()
}

#[test]
fn test_empty_query_lists_everything_in_order() {
    let out = ccs::suggest(&ctx(), "");
    assert_eq!(
        values(&out),
        vec![
            "hover:",
            "focus:",
            "md:",
            "dark:",
            "group:",
            "group:",
            "group-hover:",
            "group-focus:",
            "aria-[]:",
            "aria-busy:",
            "aria-checked:",
            "aria-sort-ascending:",
            "flex",
            "hidden",
            "bg-red-500",
            "bg-blue-500",
            "text-red-500",
            "underline",
        ]
    );
}

#[test]
fn test_prefix_filter_with_modifiers() {
    let out = ccs::suggest(&ctx(), "md:bg-r");
    assert_eq!(values(&out), vec!["md:bg-red-500"]);
    assert_eq!(out.classes[0].label, out.classes[0].value);
}

#[test]
fn test_dash_suffix_matches_values() {
    let out = ccs::suggest(&ctx(), "hov");
    assert_eq!(values(&out), vec!["hover:", "group-hover:"]);
}

#[test]
fn test_typed_variant_is_not_reoffered_and_blocklist_applies() {
    let out = ccs::suggest(&ctx(), "hover:");
    let got = values(&out);
    assert!(!got.contains(&"hover:hover:"));
    assert!(!got.contains(&"hover:hidden"));
    assert!(got.contains(&"hover:flex"));
    assert!(got.contains(&"hover:group-hover:"));
}

#[test]
fn test_arbitrary_variant_prefix_is_recognised() {
    // `data-open` is not declared, but it compiles against the catalog.
    let ctx = ctx();
    let prefix = ccs::variants_from_class_name(&ctx, "data-open:hover:fl");
    assert_eq!(prefix.variants, vec!["data-open", "hover"]);
    assert_eq!(prefix.offset, "data-open:hover:".len());

    let out = ccs::suggest(&ctx, "data-open:hover:fl");
    assert_eq!(values(&out), vec!["data-open:hover:flex"]);
}

#[test]
fn test_limit_is_respected() {
    let processor = ccs::ClassListProcessor::new().with_options(ccs::ProcessorOptions { limit: 3 });
    assert_eq!(processor.process(&ctx(), "").classes.len(), 3);
    assert_eq!(processor.process(&ctx(), "bg").classes.len(), 2);
}

#[test]
fn test_serializes_as_classes_list() {
    let out = ccs::suggest(&ctx(), "under");
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "classes": [{ "label": "underline", "value": "underline" }] })
    );
}
