//! Record enrichment: injected CRM constants and derived attribution.
//!
//! Every outgoing record is derived from exactly one raw row by copying the
//! row's fields, normalizing the reference date in place when the field
//! exists, stamping three fixed CRM identifiers, and deriving the
//! `utm_source` attribution from the row's referral field. Enrichment is a
//! pure transform: raw rows are never mutated.

use tracing::trace;

use relay_model::{CellValue, RawTable, Record};

use crate::normalization::datetime::{DateOutcome, NormalizerOptions, normalize};

/// Field stamped with the contact channel identifier.
pub const CONTACT_CHANNEL_FIELD: &str = "ContactChannelID";
/// Field stamped with the follow-up identifier.
pub const FOLLOW_UP_FIELD: &str = "FollowUpID";
/// Field stamped with the contact type identifier.
pub const CONTACT_TYPE_FIELD: &str = "ContactTypeID";

/// Injected constants and field names applied to every record.
///
/// `Default` supplies the production values; the field names and constants
/// are policy, not structure, so alternate deployments can re-point them.
#[derive(Debug, Clone)]
pub struct EnrichPolicy {
    pub contact_channel_id: i64,
    pub follow_up_id: i64,
    pub contact_type_id: i64,
    /// Row field normalized in place when present.
    pub date_field: String,
    /// Row field feeding the attribution value.
    pub source_field: String,
    /// Name of the derived attribution field.
    pub attribution_field: String,
    /// Date normalizer tuning.
    pub normalizer: NormalizerOptions,
}

impl Default for EnrichPolicy {
    fn default() -> Self {
        Self {
            contact_channel_id: 53,
            follow_up_id: 42,
            contact_type_id: 75,
            date_field: "RefDate".to_string(),
            source_field: "Ref".to_string(),
            attribution_field: "utm_source".to_string(),
            normalizer: NormalizerOptions::default(),
        }
    }
}

/// Derive one enriched record from a raw row. Never fails: a date that
/// cannot be normalized keeps its original value, so the field survives
/// with *some* value.
///
/// The three identifier fields are stamped unconditionally; a same-named
/// field in the source row is overwritten (last writer wins).
pub fn enrich(row: &Record, policy: &EnrichPolicy) -> Record {
    let mut record = row.clone();
    if let Some(value) = record.get(&policy.date_field) {
        if let DateOutcome::Canonical(canonical) = normalize(value, &policy.normalizer) {
            trace!(field = %policy.date_field, %canonical, "normalized date field");
            record.insert(policy.date_field.clone(), CellValue::Text(canonical));
        }
    }
    record.insert(
        CONTACT_CHANNEL_FIELD.to_string(),
        CellValue::Number(policy.contact_channel_id as f64),
    );
    record.insert(
        FOLLOW_UP_FIELD.to_string(),
        CellValue::Number(policy.follow_up_id as f64),
    );
    record.insert(
        CONTACT_TYPE_FIELD.to_string(),
        CellValue::Number(policy.contact_type_id as f64),
    );
    let attribution = match row.get(&policy.source_field) {
        Some(value) if !value.is_falsy() => value.clone(),
        _ => CellValue::Null,
    };
    record.insert(policy.attribution_field.clone(), attribution);
    record
}

/// Enrich every row of a decoded table, in row order.
pub fn enrich_table(table: &RawTable, policy: &EnrichPolicy) -> Vec<Record> {
    table.rows.iter().map(|row| enrich(row, policy)).collect()
}
