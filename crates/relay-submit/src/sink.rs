use relay_model::Record;

/// A destination that accepts one enriched record at a time.
///
/// The relay loop drives any sink; [`crate::IngestClient`] is the
/// production implementation. A rejection carries only a human-readable
/// message: the loop records it against the record's position and moves
/// on, so there is nothing more structured to propagate.
pub trait RecordSink {
    /// Attempt to deliver one record. Exactly one attempt is made.
    fn post(&mut self, record: &Record) -> Result<(), String>;
}
