//! The transport seam between the list store and wherever records come from.

use crate::error::{FetchListError, Result, TransportErrorKind};
use crate::model::RawRecord;

/// Trait for record sources.
///
/// A source performs one blocking fetch per call and either returns the
/// full decoded list or fails. The list store calls it from its loader
/// thread, so implementations must be `Send + Sync`.
///
/// # Example
///
/// ```ignore
/// use fetchlist::source::{HttpRecordSource, RecordSource, StaticRecordSource};
///
/// let source: Box<dyn RecordSource> = if offline_fixture {
///     Box::new(StaticRecordSource::new(records))
/// } else {
///     Box::new(HttpRecordSource::new(config)?)
/// };
///
/// let records = source.fetch_raw_records()?;
/// ```
pub trait RecordSource: Send + Sync {
    /// Fetch and decode the full record list.
    ///
    /// Fails with a transport error (unreachable, timeout, non-2xx) or a
    /// decode error (malformed JSON, schema mismatch).
    fn fetch_raw_records(&self) -> Result<Vec<RawRecord>>;

    /// Get the name of this source (e.g., "HTTP").
    fn name(&self) -> &'static str;
}

impl<S: RecordSource + ?Sized> RecordSource for Box<S> {
    fn fetch_raw_records(&self) -> Result<Vec<RawRecord>> {
        (**self).fetch_raw_records()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// A source that returns a fixed list, or always fails.
///
/// Useful for demos and tests where the network is not wanted.
#[derive(Debug, Clone)]
pub struct StaticRecordSource {
    outcome: std::result::Result<Vec<RawRecord>, String>,
}

impl StaticRecordSource {
    /// A source that always returns `records`.
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self {
            outcome: Ok(records),
        }
    }

    /// A source whose every fetch fails with a transport error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

impl RecordSource for StaticRecordSource {
    fn fetch_raw_records(&self) -> Result<Vec<RawRecord>> {
        match &self.outcome {
            Ok(records) => Ok(records.clone()),
            Err(message) => Err(FetchListError::transport(
                "static source",
                TransportErrorKind::Simulated(message.clone()),
            )),
        }
    }

    fn name(&self) -> &'static str {
        "Static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source_returns_records() {
        let source = StaticRecordSource::new(vec![RawRecord::new(1, 1, Some("Item 1"))]);
        assert_eq!(source.name(), "Static");
        assert_eq!(source.fetch_raw_records().unwrap().len(), 1);
        // Repeatable
        assert_eq!(source.fetch_raw_records().unwrap().len(), 1);
    }

    #[test]
    fn test_static_source_failing() {
        let source = StaticRecordSource::failing("offline");
        let err = source.fetch_raw_records().unwrap_err();
        assert!(err.is_transport());
        assert!(err.to_string().contains("static source"));
    }

    #[test]
    fn test_boxed_source_delegates() {
        let source: Box<dyn RecordSource> = Box::new(StaticRecordSource::new(vec![]));
        assert_eq!(source.name(), "Static");
        assert!(source.fetch_raw_records().unwrap().is_empty());
    }
}
