//! The sequential relay loop.

use tracing::{info, warn};

use relay_model::Record;

use crate::sink::RecordSink;

/// Outcome of relaying a batch of records.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RelayReport {
    /// Records accepted by the sink.
    pub success: usize,
    /// Records the sink rejected.
    pub failed: usize,
    /// One `"Item N: <message>"` entry per rejected record, N being the
    /// record's 1-based position, ordered by position.
    pub errors: Vec<String>,
}

impl RelayReport {
    pub fn total(&self) -> usize {
        self.success + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Deliver records strictly in order, one attempt each, one in flight at a
/// time. A rejected record is recorded and the loop continues; nothing is
/// retried and the loop always runs to completion. `on_progress` fires
/// after every record with `(processed, total)`.
pub fn relay_records<S, F>(sink: &mut S, records: &[Record], mut on_progress: F) -> RelayReport
where
    S: RecordSink + ?Sized,
    F: FnMut(usize, usize),
{
    let total = records.len();
    let mut report = RelayReport::default();
    for (index, record) in records.iter().enumerate() {
        match sink.post(record) {
            Ok(()) => report.success += 1,
            Err(message) => {
                report.failed += 1;
                warn!(item = index + 1, %message, "record rejected");
                report.errors.push(format!("Item {}: {}", index + 1, message));
            }
        }
        on_progress(index + 1, total);
    }
    info!(
        success = report.success,
        failed = report.failed,
        "relay complete"
    );
    report
}
