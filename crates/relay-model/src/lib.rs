pub mod record;
pub mod table;

pub use record::{CellValue, Record};
pub use table::RawTable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_values_serialize_with_native_typing() {
        let mut record = Record::new();
        record.insert("Name".to_string(), CellValue::Text("Anan".to_string()));
        record.insert("Phone".to_string(), CellValue::Null);
        record.insert("RefDate".to_string(), CellValue::Number(45000.0));
        record.insert("Score".to_string(), CellValue::Number(0.5));
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(
            json,
            serde_json::json!({
                "Name": "Anan",
                "Phone": null,
                "RefDate": 45000,
                "Score": 0.5,
            })
        );
    }

    #[test]
    fn integral_numbers_serialize_without_fraction() {
        let json = serde_json::to_string(&CellValue::Number(53.0)).expect("serialize");
        assert_eq!(json, "53");
    }

    #[test]
    fn datetime_cells_serialize_as_wall_clock_strings() {
        let datetime = chrono::NaiveDate::from_ymd_opt(2025, 5, 5)
            .and_then(|d| d.and_hms_opt(4, 41, 10))
            .expect("valid datetime");
        let json = serde_json::to_string(&CellValue::DateTime(datetime)).expect("serialize");
        assert_eq!(json, "\"2025-05-05 04:41:10\"");
    }
}
