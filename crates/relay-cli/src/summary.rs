use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{ExportResult, InspectResult, SendResult};

pub fn print_send_summary(result: &SendResult) {
    println!("File: {}", result.file.display());
    if let Some(path) = &result.export {
        println!("Export: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Records"),
        header_cell("Sent"),
        header_cell("Failed"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(result.records),
        Cell::new(result.report.success).fg(Color::Green),
        failure_cell(result.report.failed),
    ]);
    println!("{table}");
    if result.dry_run {
        println!("Dry run: no records were sent.");
    }
    if !result.report.errors.is_empty() {
        println!("Failed items:");
        for error in &result.report.errors {
            println!("  {error}");
        }
    }
}

pub fn print_export_summary(result: &ExportResult) {
    println!("File: {}", result.file.display());
    println!("Records: {}", result.records);
    println!("Export: {}", result.path.display());
}

pub fn print_inspect_summary(result: &InspectResult) {
    println!("File: {}", result.file.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Header")]);
    apply_table_style(&mut table);
    for header in &result.headers {
        table.add_row(vec![Cell::new(header)]);
    }
    println!("{table}");
    println!("Rows: {}", result.rows);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn failure_cell(failed: usize) -> Cell {
    if failed > 0 {
        Cell::new(failed)
            .fg(Color::Red)
            .set_alignment(CellAlignment::Right)
    } else {
        Cell::new(failed).set_alignment(CellAlignment::Right)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
