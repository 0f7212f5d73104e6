//! Integration tests for company-concept and snapshot parsing

use serde_json::json;
use sharestat_data::snapshot::parse_snapshot;
use sharestat_data::{ConceptDocument, UNKNOWN_ENTITY};

const AUTODESK: &str = include_str!("fixtures/companyconcept_autodesk.json");

#[test]
fn test_parse_companyconcept_response() {
    let doc: ConceptDocument = serde_json::from_str(AUTODESK).unwrap();

    assert_eq!(doc.entity_name(), Some("AUTODESK, INC."));
    assert_eq!(doc.taxonomy.as_deref(), Some("dei"));
    assert_eq!(doc.tag.as_deref(), Some("EntityCommonStockSharesOutstanding"));
    assert_eq!(doc.cik, Some(json!(769397)));

    let shares = doc.shares();
    assert_eq!(shares.len(), 8);
    assert_eq!(shares[0].fiscal_year_label().as_deref(), Some("2020"));
    assert_eq!(shares[0].value(), Some(219_436_089.0));
    assert_eq!(shares[7].fiscal_year_label().as_deref(), Some("2025"));
}

#[test]
fn test_parse_minimal_response() {
    let doc: ConceptDocument = serde_json::from_str("{}").unwrap();
    assert_eq!(doc.entity_name_or_default(), UNKNOWN_ENTITY);
    assert!(doc.shares().is_empty());
}

#[test]
fn test_parse_other_units_ignored() {
    let doc: ConceptDocument = serde_json::from_value(json!({
        "entityName": "Example Holdings",
        "units": {"USD": [{"fy": 2023, "val": 5}]}
    }))
    .unwrap();
    assert!(doc.shares().is_empty());
}

#[test]
fn test_parse_malformed_response() {
    assert!(serde_json::from_str::<ConceptDocument>("<html>busy</html>").is_err());
    assert!(serde_json::from_str::<ConceptDocument>("").is_err());
}

#[test]
fn test_snapshot_roundtrip_keys() {
    let summary = parse_snapshot(
        r#"{"entityName":"Acme Corp","max":{"val":150,"fy":"2021"},"min":{"val":90,"fy":"2022"}}"#,
    )
    .unwrap();

    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(
        value,
        json!({
            "entityName": "Acme Corp",
            "max": {"val": 150.0, "fy": "2021"},
            "min": {"val": 90.0, "fy": "2022"}
        })
    );
}
