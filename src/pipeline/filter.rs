//! Record filter stage: drop unnamed records, parse the rest.

use crate::model::{ParsedRecord, RawRecord};

/// Counts produced by a filter pass, used for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Records received from the source
    pub received: usize,
    /// Records that survived the filter
    pub kept: usize,
}

impl FilterStats {
    /// Records dropped for a missing or empty name.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.received - self.kept
    }
}

/// Drop records with a missing or empty name and parse the survivors.
///
/// Input order is preserved, which matters because the result feeds a
/// stable sort. Dropping is silent: an unnamed record is not an error.
#[must_use]
pub fn filter_records(records: &[RawRecord]) -> Vec<ParsedRecord> {
    records.iter().filter_map(ParsedRecord::from_raw).collect()
}

/// Like [`filter_records`], also reporting how many records were kept.
#[must_use]
pub fn filter_records_with_stats(records: &[RawRecord]) -> (Vec<ParsedRecord>, FilterStats) {
    let parsed = filter_records(records);
    let stats = FilterStats {
        received: records.len(),
        kept: parsed.len(),
    };
    (parsed, stats)
}
