#![deny(unsafe_code)]

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// A single decoded value from a tabular source, before normalization.
///
/// This is a closed variant: decoders must resolve every cell into one of
/// these four shapes at the boundary. Absent cells are `Null`, never omitted.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Number(f64),
    Text(String),
    DateTime(NaiveDateTime),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True for values the attribution derivation treats as absent:
    /// null, empty text, numeric zero, and NaN.
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Number(number) => *number == 0.0 || number.is_nan(),
            Self::Text(text) => text.is_empty(),
            Self::DateTime(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Number(number) => {
                // Integral cells round-trip as JSON integers, not 53.0.
                if number.fract() == 0.0 && number.is_finite() && number.abs() < i64::MAX as f64 {
                    serializer.serialize_i64(*number as i64)
                } else {
                    serializer.serialize_f64(*number)
                }
            }
            Self::Text(text) => serializer.serialize_str(text),
            Self::DateTime(datetime) => {
                serializer.collect_str(&datetime.format("%Y-%m-%d %H:%M:%S"))
            }
        }
    }
}

/// One row, keyed by header name. Raw rows are immutable once decoded;
/// enrichment derives a new record instead of mutating in place.
pub type Record = BTreeMap<String, CellValue>;
