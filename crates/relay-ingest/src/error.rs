use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while decoding a tabular file.
///
/// All of these are fatal to the current file load: the caller reports the
/// failure once and surfaces no partial data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    /// The file extension is not a supported tabular format.
    #[error("unsupported file extension {extension:?} (expected .csv): {}", path.display())]
    UnsupportedExtension { path: PathBuf, extension: String },

    /// The file could not be opened or a record could not be parsed.
    #[error("read csv {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file holds no data rows.
    #[error("the file appears to be empty: {}", path.display())]
    Empty { path: PathBuf },
}
