pub mod client;
pub mod error;
pub mod export;
pub mod relay;
pub mod sink;

pub use client::IngestClient;
pub use error::SubmitError;
pub use export::{export_path, write_json_export, write_json_export_to};
pub use relay::{RelayReport, relay_records};
pub use sink::RecordSink;
