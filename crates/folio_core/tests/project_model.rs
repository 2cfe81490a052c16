use folio_core::{catalog_from_json, default_catalog, ProjectPatch, ProjectRecord};

#[test]
fn record_serialization_uses_page_field_names() {
    let record = ProjectRecord::new("A", "d", "r1")
        .with_technologies(["X", "Y"])
        .with_live_link("l1")
        .with_icon("⚙️");

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["title"], "A");
    assert_eq!(json["repoLink"], "r1");
    assert_eq!(json["liveLink"], "l1");
    assert_eq!(json["technologies"], serde_json::json!(["X", "Y"]));
    assert_eq!(json["icon"], "⚙️");

    let decoded: ProjectRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn record_accepts_null_or_missing_live_link() {
    let with_null: ProjectRecord = serde_json::from_value(serde_json::json!({
        "title": "A",
        "description": "d",
        "technologies": [],
        "repoLink": "r1",
        "liveLink": null,
        "icon": "🔧"
    }))
    .unwrap();
    assert_eq!(with_null.live_link, None);

    let without_key: ProjectRecord = serde_json::from_value(serde_json::json!({
        "title": "A",
        "description": "d",
        "technologies": ["C"],
        "repoLink": "r1"
    }))
    .unwrap();
    assert_eq!(without_key.live_link, None);
    assert_eq!(without_key.icon, "");
}

#[test]
fn record_rejects_missing_required_fields() {
    for missing in ["title", "description", "technologies", "repoLink"] {
        let mut value = serde_json::json!({
            "title": "A",
            "description": "d",
            "technologies": ["C"],
            "repoLink": "r1"
        });
        value.as_object_mut().unwrap().remove(missing);

        let err = serde_json::from_value::<ProjectRecord>(value).unwrap_err();
        assert!(
            err.to_string().contains(missing),
            "unexpected error for `{missing}`: {err}"
        );
    }
}

#[test]
fn patch_distinguishes_null_from_absent_live_link() {
    let absent: ProjectPatch = serde_json::from_str(r#"{"title":"X"}"#).unwrap();
    assert_eq!(absent.live_link, None);

    let cleared: ProjectPatch = serde_json::from_str(r#"{"liveLink":null}"#).unwrap();
    assert_eq!(cleared.live_link, Some(None));

    let set: ProjectPatch = serde_json::from_str(r#"{"liveLink":"l2"}"#).unwrap();
    assert_eq!(set.live_link, Some(Some("l2".to_string())));
}

#[test]
fn patch_serialization_skips_absent_fields() {
    let json = serde_json::to_value(ProjectPatch::title("X")).unwrap();
    assert_eq!(json, serde_json::json!({ "title": "X" }));
}

#[test]
fn duplicate_technologies_are_kept_in_order() {
    let record = ProjectRecord::new("A", "d", "r1").with_technologies(["C", "Rust", "C"]);
    assert_eq!(record.technologies, vec!["C", "Rust", "C"]);
}

#[test]
fn catalog_json_roundtrips_as_plain_array() {
    let catalog = default_catalog();
    let json = serde_json::to_string(&catalog).unwrap();
    assert!(json.starts_with('['));

    let decoded = catalog_from_json(&json).unwrap();
    assert_eq!(decoded, catalog);
}

#[test]
fn default_catalog_keeps_original_order_and_links() {
    let catalog = default_catalog();
    let titles: Vec<&str> = catalog.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "C Interpreter",
            "Unix Shell",
            "Blib",
            "Cloud Project Phoenix",
            "Theatrix",
            "Silver Sync"
        ]
    );

    let with_live: Vec<&str> = catalog
        .iter()
        .filter(|p| p.has_live_link())
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(with_live, vec!["C Interpreter", "Theatrix", "Silver Sync"]);
}
