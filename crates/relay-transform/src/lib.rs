pub mod enrich;
pub mod normalization;

pub use enrich::{EnrichPolicy, enrich, enrich_table};
pub use normalization::datetime::{
    DEFAULT_SERIAL_CUTOFF, DateOutcome, NormalizerOptions, is_canonical_timestamp, normalize,
};
