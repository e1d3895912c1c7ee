//! Error types for record submission and export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building the HTTP client or writing the
/// export artifact.
///
/// Per-record delivery failures are NOT errors: the relay loop records them
/// and continues, so they surface only in the aggregate report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    /// The HTTP client could not be constructed.
    #[error("build http client: {0}")]
    Client(#[source] reqwest::Error),

    /// A record failed to serialize as JSON.
    #[error("serialize records: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The export artifact could not be written.
    #[error("write export {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
