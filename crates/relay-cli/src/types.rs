use std::path::PathBuf;

use relay_submit::RelayReport;

#[derive(Debug)]
pub struct SendResult {
    pub file: PathBuf,
    pub records: usize,
    pub report: RelayReport,
    pub export: Option<PathBuf>,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct ExportResult {
    pub file: PathBuf,
    pub records: usize,
    pub path: PathBuf,
}

#[derive(Debug)]
pub struct InspectResult {
    pub file: PathBuf,
    pub headers: Vec<String>,
    pub rows: usize,
}
