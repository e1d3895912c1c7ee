//! JSON export artifact for the enriched record list.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use relay_model::Record;

use crate::error::SubmitError;

/// Derive the artifact path: the source file with its extension replaced by
/// `.json`.
pub fn export_path(source_path: &Path) -> PathBuf {
    source_path.with_extension("json")
}

/// Serialize the full record list as a JSON array with 2-space indentation
/// and write it next to the source file. Returns the path written.
pub fn write_json_export(records: &[Record], source_path: &Path) -> Result<PathBuf, SubmitError> {
    let output_path = export_path(source_path);
    write_json_export_to(records, &output_path)?;
    Ok(output_path)
}

/// Serialize the full record list to an explicit path.
pub fn write_json_export_to(records: &[Record], output_path: &Path) -> Result<(), SubmitError> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(output_path, json).map_err(|source| SubmitError::Export {
        path: output_path.to_path_buf(),
        source,
    })?;
    debug!(path = %output_path.display(), records = records.len(), "wrote export artifact");
    Ok(())
}
