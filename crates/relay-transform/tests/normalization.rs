//! Behavioral tests for the date normalizer: serial conversion, string
//! disambiguation, pass-through laws, and totality properties.

use chrono::NaiveDate;
use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

use relay_model::CellValue;
use relay_transform::{DateOutcome, NormalizerOptions, is_canonical_timestamp, normalize};

fn defaults() -> NormalizerOptions {
    NormalizerOptions::default()
}

fn canonical(value: &CellValue) -> String {
    match normalize(value, &defaults()) {
        DateOutcome::Canonical(text) => text,
        DateOutcome::Unchanged => panic!("expected canonical output for {value:?}"),
    }
}

#[test]
fn spreadsheet_serial_with_time_fraction() {
    assert_eq!(
        canonical(&CellValue::Number(45787.19525462963)),
        "2025-05-10 04:41:10"
    );
    assert_eq!(
        canonical(&CellValue::Number(45782.19525462963)),
        "2025-05-05 04:41:10"
    );
}

#[test]
fn whole_day_serial_defaults_to_midnight() {
    assert_eq!(canonical(&CellValue::Number(45000.0)), "2023-03-15 00:00:00");
    assert_eq!(canonical(&CellValue::Number(1.0)), "1900-01-01 00:00:00");
}

#[test]
fn numeric_text_is_read_as_a_serial() {
    assert_eq!(
        canonical(&CellValue::Text("45000".to_string())),
        "2023-03-15 00:00:00"
    );
}

#[test]
fn ambiguous_first_component_reads_month_first() {
    // 10 could be a month, so the default MONTH/DAY/YEAR order applies.
    assert_eq!(
        canonical(&CellValue::Text("10/5/2025 13:23:55".to_string())),
        "2025-10-05 13:23:55"
    );
}

#[test]
fn first_component_past_twelve_reads_day_first() {
    assert_eq!(
        canonical(&CellValue::Text("25/12/2024".to_string())),
        "2024-12-25 00:00:00"
    );
}

#[test]
fn dash_and_dot_delimiters_parse_like_slashes() {
    assert_eq!(
        canonical(&CellValue::Text("25-12-2024".to_string())),
        "2024-12-25 00:00:00"
    );
    assert_eq!(
        canonical(&CellValue::Text("25.12.2024".to_string())),
        "2024-12-25 00:00:00"
    );
}

#[test]
fn partial_time_segments_default_to_zero() {
    assert_eq!(
        canonical(&CellValue::Text("12/25/2024 13".to_string())),
        "2024-12-25 13:00:00"
    );
    assert_eq!(
        canonical(&CellValue::Text("12/25/2024 13:23".to_string())),
        "2024-12-25 13:23:00"
    );
}

#[test]
fn numbers_past_the_serial_range_read_as_epoch_millis() {
    assert_eq!(
        canonical(&CellValue::Number(1_747_363_200_000.0)),
        "2025-05-16 02:40:00"
    );
}

#[test]
fn native_date_values_format_directly() {
    let datetime = NaiveDate::from_ymd_opt(2024, 12, 25)
        .and_then(|d| d.and_hms_opt(8, 30, 0))
        .expect("valid datetime");
    assert_eq!(
        canonical(&CellValue::DateTime(datetime)),
        "2024-12-25 08:30:00"
    );
}

#[test]
fn canonical_text_passes_through_verbatim() {
    let text = CellValue::Text("2025-05-05 04:41:10".to_string());
    assert_eq!(
        normalize(&text, &defaults()),
        DateOutcome::Canonical("2025-05-05 04:41:10".to_string())
    );
}

#[test]
fn nullish_input_stays_nullish() {
    assert_eq!(normalize(&CellValue::Null, &defaults()), DateOutcome::Unchanged);
}

#[test]
fn unreadable_values_degrade_to_pass_through() {
    for text in [
        "not a date",
        "13/13/2024",       // month 13 after the day-first tie-break
        "2/30/2024",        // February 30th is not a real instant
        "10/5",             // two components, no fallback format matches
        "",
        "   ",
    ] {
        assert_eq!(
            normalize(&CellValue::Text(text.to_string()), &defaults()),
            DateOutcome::Unchanged,
            "expected pass-through for {text:?}"
        );
    }
}

#[test]
fn iso_t_joined_timestamps_use_the_fallback_formats() {
    assert_eq!(
        canonical(&CellValue::Text("2025-10-05T13:23:55".to_string())),
        "2025-10-05 13:23:55"
    );
}

proptest! {
    #[test]
    fn serials_in_range_always_normalize_canonically(serial in 0.000_001f64..49_999.999) {
        match normalize(&CellValue::Number(serial), &defaults()) {
            DateOutcome::Canonical(text) => prop_assert!(is_canonical_timestamp(&text)),
            DateOutcome::Unchanged => prop_assert!(false, "serial {} fell through", serial),
        }
    }

    #[test]
    fn normalize_is_total_over_numbers(number in proptest::num::f64::ANY) {
        // Must never panic, whatever the number (NaN and infinities included).
        let _ = normalize(&CellValue::Number(number), &defaults());
    }

    #[test]
    fn normalize_is_total_over_text(text in ".*") {
        let _ = normalize(&CellValue::Text(text), &defaults());
    }

    #[test]
    fn canonical_outputs_are_idempotent(serial in 0.000_001f64..49_999.999) {
        if let DateOutcome::Canonical(text) = normalize(&CellValue::Number(serial), &defaults()) {
            prop_assert_eq!(
                normalize(&CellValue::Text(text.clone()), &defaults()),
                DateOutcome::Canonical(text)
            );
        }
    }
}
