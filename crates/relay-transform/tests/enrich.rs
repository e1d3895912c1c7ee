//! Behavioral tests for record enrichment: injected constants, attribution
//! derivation, and in-place date normalization.

use relay_model::{CellValue, RawTable, Record};
use relay_transform::{EnrichPolicy, enrich, enrich_table};

fn row(pairs: &[(&str, CellValue)]) -> Record {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}

#[test]
fn referral_row_gains_constants_attribution_and_canonical_date() {
    let raw = row(&[
        ("Ref", CellValue::Text("fb123".to_string())),
        ("RefDate", CellValue::Number(45000.0)),
    ]);

    let record = enrich(&raw, &EnrichPolicy::default());

    assert_eq!(record["ContactChannelID"], CellValue::Number(53.0));
    assert_eq!(record["FollowUpID"], CellValue::Number(42.0));
    assert_eq!(record["ContactTypeID"], CellValue::Number(75.0));
    assert_eq!(record["utm_source"], CellValue::Text("fb123".to_string()));
    assert_eq!(
        record["RefDate"],
        CellValue::Text("2023-03-15 00:00:00".to_string())
    );
}

#[test]
fn constants_hold_regardless_of_row_contents() {
    for raw in [
        Record::new(),
        row(&[("ContactChannelID", CellValue::Text("spoofed".to_string()))]),
        row(&[("FollowUpID", CellValue::Number(999.0))]),
    ] {
        let record = enrich(&raw, &EnrichPolicy::default());
        assert_eq!(record["ContactChannelID"], CellValue::Number(53.0));
        assert_eq!(record["FollowUpID"], CellValue::Number(42.0));
        assert_eq!(record["ContactTypeID"], CellValue::Number(75.0));
    }
}

#[test]
fn missing_referral_yields_null_attribution() {
    let record = enrich(
        &row(&[("Name", CellValue::Text("Anan".to_string()))]),
        &EnrichPolicy::default(),
    );
    assert_eq!(record["utm_source"], CellValue::Null);
}

#[test]
fn falsy_referrals_yield_null_attribution() {
    for referral in [
        CellValue::Null,
        CellValue::Text(String::new()),
        CellValue::Number(0.0),
    ] {
        let record = enrich(&row(&[("Ref", referral)]), &EnrichPolicy::default());
        assert_eq!(record["utm_source"], CellValue::Null);
    }
}

#[test]
fn missing_date_field_is_not_invented() {
    let record = enrich(
        &row(&[("Name", CellValue::Text("Anan".to_string()))]),
        &EnrichPolicy::default(),
    );
    assert!(!record.contains_key("RefDate"));
}

#[test]
fn unreadable_date_keeps_its_original_value() {
    let record = enrich(
        &row(&[("RefDate", CellValue::Text("soon".to_string()))]),
        &EnrichPolicy::default(),
    );
    assert_eq!(record["RefDate"], CellValue::Text("soon".to_string()));
}

#[test]
fn other_fields_carry_through_unmodified() {
    let raw = row(&[
        ("Name", CellValue::Text("Anan".to_string())),
        ("Phone", CellValue::Number(818000000.0)),
        ("Note", CellValue::Null),
    ]);

    let record = enrich(&raw, &EnrichPolicy::default());

    assert_eq!(record["Name"], CellValue::Text("Anan".to_string()));
    assert_eq!(record["Phone"], CellValue::Number(818000000.0));
    assert_eq!(record["Note"], CellValue::Null);
    // Key set is a superset of the raw row's.
    for key in raw.keys() {
        assert!(record.contains_key(key), "lost field {key}");
    }
}

#[test]
fn enrichment_does_not_mutate_the_raw_row() {
    let raw = row(&[("RefDate", CellValue::Number(45000.0))]);
    let before = raw.clone();
    let _ = enrich(&raw, &EnrichPolicy::default());
    assert_eq!(raw, before);
}

#[test]
fn tables_enrich_in_row_order() {
    let mut table = RawTable::new(vec!["Name".to_string()]);
    for name in ["first", "second", "third"] {
        table.push_row(row(&[("Name", CellValue::Text(name.to_string()))]));
    }

    let records = enrich_table(&table, &EnrichPolicy::default());

    assert_eq!(records.len(), 3);
    let names: Vec<_> = records
        .iter()
        .map(|record| record["Name"].clone())
        .collect();
    assert_eq!(
        names,
        vec![
            CellValue::Text("first".to_string()),
            CellValue::Text("second".to_string()),
            CellValue::Text("third".to_string()),
        ]
    );
}

#[test]
fn enriched_records_serialize_with_integer_constants() {
    let record = enrich(
        &row(&[("Ref", CellValue::Text("fb123".to_string()))]),
        &EnrichPolicy::default(),
    );
    let json = serde_json::to_value(&record).expect("serialize");
    assert_eq!(json["ContactChannelID"], serde_json::json!(53));
    assert_eq!(json["FollowUpID"], serde_json::json!(42));
    assert_eq!(json["ContactTypeID"], serde_json::json!(75));
    assert_eq!(json["utm_source"], serde_json::json!("fb123"));
}
