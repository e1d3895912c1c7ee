//! Date coercion to the canonical `YYYY-MM-DD HH:MM:SS` timestamp form.
//!
//! Cell values arrive loosely typed: 1900-epoch spreadsheet day serials
//! (`45787.19525462963`), delimiter-separated date strings with ambiguous
//! day/month order (`10/5/2025 13:23:55`), native date values, and strings
//! that are already canonical. `normalize` folds all of them into one
//! wall-clock format, and degrades to pass-through whenever a value cannot
//! be read as a real calendar instant.
//!
//! # Ordering of the coercion steps
//!
//! 1. Null passes through.
//! 2. An already-canonical string is returned verbatim (idempotence).
//! 3. Numbers (and fully-numeric strings) inside the serial range are read
//!    as 1900-epoch spreadsheet day serials; outside it, as milliseconds
//!    since the Unix epoch rendered as UTC wall clock.
//! 4. Remaining strings split into date and time segments; a date segment
//!    with three numeric components is built directly, with the frozen
//!    day/month tie-break below. Anything else runs through a fixed list
//!    of common formats.
//! 5. Native date values format directly.
//!
//! The day/month tie-break (first component greater than 12 means
//! DAY/MONTH/YEAR, otherwise MONTH/DAY/YEAR) is compatibility-frozen.
//! Downstream consumers depend on this exact rule; do not replace it with
//! locale detection.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use relay_model::CellValue;

use crate::normalization::numeric::parse_f64;

/// The single output format emitted on success.
const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Milliseconds in one day.
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// The last serial day the 1900 epoch miscounts: serials past the phantom
/// 1900-02-29 sit one day ahead and need a compensating offset.
const LEAP_BUG_SERIAL: i64 = 60;

/// Exclusive upper bound of the spreadsheet-serial heuristic range.
///
/// Day serial 50 000 lands in late 2036, so contemporary spreadsheet dates
/// sit comfortably below it while Unix-epoch-scale numbers sit far above.
/// This is a tunable policy value, not a law; see [`NormalizerOptions`].
pub const DEFAULT_SERIAL_CUTOFF: f64 = 50_000.0;

/// Tunable policy for the date normalizer.
#[derive(Debug, Clone, Copy)]
pub struct NormalizerOptions {
    /// Numbers in the open range `(0, serial_cutoff)` are read as
    /// spreadsheet day serials; everything else as epoch milliseconds.
    pub serial_cutoff: f64,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            serial_cutoff: DEFAULT_SERIAL_CUTOFF,
        }
    }
}

/// Result of normalizing one cell value.
///
/// There is no error arm: a value that cannot be normalized keeps its
/// original shape, so the record never loses the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateOutcome {
    /// The value was read as a date and rendered canonically.
    Canonical(String),
    /// The value could not be read as a date; the caller keeps the original.
    Unchanged,
}

/// Normalize one heterogeneous cell value to the canonical timestamp form.
///
/// Total over [`CellValue`]: never panics, never errors.
pub fn normalize(value: &CellValue, options: &NormalizerOptions) -> DateOutcome {
    match value {
        CellValue::Null => DateOutcome::Unchanged,
        CellValue::Text(text) if is_canonical_timestamp(text) => {
            DateOutcome::Canonical(text.clone())
        }
        CellValue::Number(number) => from_numeric(*number, options),
        CellValue::Text(text) => match parse_f64(text) {
            Some(number) => from_numeric(number, options),
            None => from_text(text),
        },
        CellValue::DateTime(datetime) => emit(*datetime),
    }
}

/// Check a string against the exact canonical pattern
/// `YYYY-MM-DD HH:MM:SS` (digits and separators only; no range checks,
/// mirroring the pattern-match the contract specifies).
pub fn is_canonical_timestamp(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 19 {
        return false;
    }
    bytes.iter().enumerate().all(|(index, byte)| match index {
        4 | 7 => *byte == b'-',
        10 => *byte == b' ',
        13 | 16 => *byte == b':',
        _ => byte.is_ascii_digit(),
    })
}

fn from_numeric(number: f64, options: &NormalizerOptions) -> DateOutcome {
    if number > 0.0 && number < options.serial_cutoff {
        return from_serial(number);
    }
    if !number.is_finite() {
        return DateOutcome::Unchanged;
    }
    // Outside the serial range the number is epoch milliseconds, rendered
    // as UTC wall clock.
    match chrono::DateTime::from_timestamp_millis(number as i64) {
        Some(datetime) => emit(datetime.naive_utc()),
        None => DateOutcome::Unchanged,
    }
}

/// Convert a 1900-epoch spreadsheet day serial.
///
/// The integer part counts days from 1900-01-01 (serial day 1); the
/// fractional part is the time of day. Serials past day 60 compensate for
/// the epoch's phantom 1900-02-29. The time fraction is rounded to the
/// millisecond and truncated to whole seconds; a fraction that lands on or
/// past midnight rolls into the next day.
fn from_serial(serial: f64) -> DateOutcome {
    let days = serial.floor() as i64;
    let time_fraction = serial - serial.floor();
    let adjusted_days = if days > LEAP_BUG_SERIAL { days - 1 } else { days };
    let Some(date) = Duration::try_days(adjusted_days - 1)
        .and_then(|offset| epoch_1900().checked_add_signed(offset))
    else {
        return DateOutcome::Unchanged;
    };
    let time_millis = (time_fraction * MILLIS_PER_DAY).round() as i64;
    match date
        .and_time(NaiveTime::MIN)
        .checked_add_signed(Duration::seconds(time_millis / 1_000))
    {
        Some(datetime) => emit(datetime),
        None => DateOutcome::Unchanged,
    }
}

fn epoch_1900() -> NaiveDate {
    // Valid by construction.
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn from_text(text: &str) -> DateOutcome {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return DateOutcome::Unchanged;
    }
    let mut segments = trimmed.split_whitespace();
    let Some(date_segment) = segments.next() else {
        return DateOutcome::Unchanged;
    };
    let time_segment = segments.next().unwrap_or("00:00:00");
    let date_parts: Vec<i64> = date_segment
        .split(['/', '-', '.'])
        .filter(|part| !part.is_empty())
        .map_while(|part| part.parse().ok())
        .collect();
    if date_parts.len() == 3 {
        match from_split_components(&date_parts, time_segment) {
            Some(datetime) => emit(datetime),
            None => DateOutcome::Unchanged,
        }
    } else {
        match fallback_parse(trimmed) {
            Some(datetime) => emit(datetime),
            None => DateOutcome::Unchanged,
        }
    }
}

/// Build a timestamp from three split date components plus a time segment.
///
/// Tie-break rule (frozen): first component > 12 reads as DAY/MONTH/YEAR,
/// otherwise MONTH/DAY/YEAR. Components are wall-clock values; no timezone
/// conversion is applied.
fn from_split_components(date_parts: &[i64], time_segment: &str) -> Option<NaiveDateTime> {
    let (first, second, year) = (date_parts[0], date_parts[1], date_parts[2]);
    let (month, day) = if first > 12 { (second, first) } else { (first, second) };

    let mut time_parts = time_segment.split(':');
    let hour = parse_time_part(time_parts.next())?;
    let minute = parse_time_part(time_parts.next())?;
    let second_of_minute = parse_time_part(time_parts.next())?;

    let date = NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )?;
    let time = NaiveTime::from_hms_opt(
        u32::try_from(hour).ok()?,
        u32::try_from(minute).ok()?,
        u32::try_from(second_of_minute).ok()?,
    )?;
    Some(NaiveDateTime::new(date, time))
}

fn parse_time_part(part: Option<&str>) -> Option<i64> {
    match part {
        None => Some(0),
        Some("") => Some(0),
        Some(text) => text.trim().parse().ok(),
    }
}

/// Fixed-format fallback for strings whose date segment does not split into
/// three numeric components (ISO `T`-joined timestamps, month-name forms).
fn fallback_parse(value: &str) -> Option<NaiveDateTime> {
    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%d-%b-%Y %H:%M:%S", // 15-Jan-2024 10:30:00
        "%d-%b-%Y %H:%M",
        "%B %d, %Y %H:%M:%S", // January 15, 2024 10:30:00
    ];
    const DATE_FORMATS: &[&str] = &["%d-%b-%Y", "%b %d, %Y", "%B %d, %Y"];

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }
    None
}

/// Format a candidate instant, re-checking the result against the canonical
/// pattern so out-of-range years (5-digit, negative) degrade to pass-through
/// instead of emitting a near-canonical string.
fn emit(datetime: NaiveDateTime) -> DateOutcome {
    let formatted = datetime.format(CANONICAL_FORMAT).to_string();
    if is_canonical_timestamp(&formatted) {
        DateOutcome::Canonical(formatted)
    } else {
        DateOutcome::Unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_pattern_is_exact() {
        assert!(is_canonical_timestamp("2025-05-05 04:41:10"));
        assert!(!is_canonical_timestamp("2025-05-05T04:41:10"));
        assert!(!is_canonical_timestamp("2025-05-05 04:41"));
        assert!(!is_canonical_timestamp("25-05-05 04:41:10"));
        assert!(!is_canonical_timestamp(""));
    }

    #[test]
    fn phantom_leap_day_offset_applies_past_serial_60() {
        // Serial 59 is 1900-02-28; serial 61 must land on 1900-03-01,
        // skipping the fictitious 1900-02-29.
        assert_eq!(
            normalize(&CellValue::Number(59.0), &NormalizerOptions::default()),
            DateOutcome::Canonical("1900-02-28 00:00:00".to_string())
        );
        assert_eq!(
            normalize(&CellValue::Number(61.0), &NormalizerOptions::default()),
            DateOutcome::Canonical("1900-03-01 00:00:00".to_string())
        );
    }

    #[test]
    fn serial_cutoff_is_configurable() {
        let narrow = NormalizerOptions { serial_cutoff: 100.0 };
        // 45000 now reads as epoch milliseconds (45 seconds past 1970).
        assert_eq!(
            normalize(&CellValue::Number(45_000.0), &narrow),
            DateOutcome::Canonical("1970-01-01 00:00:45".to_string())
        );
    }

    #[test]
    fn month_name_forms_use_the_fallback_formats() {
        assert_eq!(
            normalize(
                &CellValue::Text("15-Jan-2024 10:30:00".to_string()),
                &NormalizerOptions::default()
            ),
            DateOutcome::Canonical("2024-01-15 10:30:00".to_string())
        );
    }
}
