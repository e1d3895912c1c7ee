use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, info_span, trace};

use relay_cli::logging::redact_value;
use relay_ingest::read_csv_table;
use relay_model::Record;
use relay_submit::{
    IngestClient, RelayReport, relay_records, write_json_export, write_json_export_to,
};
use relay_transform::{EnrichPolicy, NormalizerOptions, enrich_table};

use crate::cli::{ExportArgs, InspectArgs, SendArgs};
use crate::types::{ExportResult, InspectResult, SendResult};

pub fn run_send(args: &SendArgs) -> Result<SendResult> {
    let span = info_span!("send", file = %args.file.display());
    let _guard = span.enter();

    let records = load_records(&args.file, args.serial_cutoff)?;
    let export = if args.export {
        Some(write_json_export(&records, &args.file).context("write export artifact")?)
    } else {
        None
    };
    let report = if args.dry_run {
        info!(records = records.len(), "dry run: skipping relay");
        RelayReport::default()
    } else {
        let mut client = IngestClient::new(args.endpoint.clone(), args.auth.clone())
            .context("build ingestion client")?;
        info!(endpoint = %args.endpoint, records = records.len(), "relaying records");
        let bar = progress_bar(records.len());
        let report = relay_records(&mut client, &records, |processed, _total| {
            bar.set_position(processed as u64);
        });
        bar.finish_and_clear();
        report
    };
    Ok(SendResult {
        file: args.file.clone(),
        records: records.len(),
        report,
        export,
        dry_run: args.dry_run,
    })
}

pub fn run_export(args: &ExportArgs) -> Result<ExportResult> {
    let span = info_span!("export", file = %args.file.display());
    let _guard = span.enter();

    let records = load_records(&args.file, args.serial_cutoff)?;
    let path = match &args.output {
        Some(path) => {
            write_json_export_to(&records, path).context("write export artifact")?;
            path.clone()
        }
        None => write_json_export(&records, &args.file).context("write export artifact")?,
    };
    Ok(ExportResult {
        file: args.file.clone(),
        records: records.len(),
        path,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectResult> {
    let table = read_csv_table(&args.file).context("decode lead file")?;
    Ok(InspectResult {
        file: args.file.clone(),
        headers: table.headers.clone(),
        rows: table.len(),
    })
}

/// Decode a lead file and enrich every row under the given serial cutoff.
fn load_records(file: &Path, serial_cutoff: f64) -> Result<Vec<Record>> {
    let table = read_csv_table(file).context("decode lead file")?;
    info!(
        rows = table.len(),
        headers = table.headers.len(),
        "decoded lead file"
    );
    let policy = EnrichPolicy {
        normalizer: NormalizerOptions { serial_cutoff },
        ..EnrichPolicy::default()
    };
    let records = enrich_table(&table, &policy);
    for record in &records {
        if let Ok(json) = serde_json::to_string(record) {
            trace!(record = %redact_value(&json), "enriched record");
        }
    }
    Ok(records)
}

fn progress_bar(total: usize) -> ProgressBar {
    let bar = ProgressBar::new(total as u64);
    let style = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} sent")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar
}
