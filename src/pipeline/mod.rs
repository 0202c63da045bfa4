//! Record processing pipeline.
//!
//! The load path is `source → filter → sort`. The filter stage lives here;
//! sorting is in [`crate::sort`] because the list store re-runs it on every
//! toggle without re-filtering.

mod filter;

pub use filter::{filter_records, filter_records_with_stats, FilterStats};

use crate::model::{ParsedRecord, RawRecord};
use crate::sort::{sort_records, SortSpec};

/// Filter raw records and sort the survivors with `spec`.
///
/// This is the full transform applied to a successful fetch before the
/// result is published.
#[must_use]
pub fn prepare_records(records: &[RawRecord], spec: SortSpec) -> (Vec<ParsedRecord>, FilterStats) {
    let (mut parsed, stats) = filter_records_with_stats(records);
    sort_records(&mut parsed, spec);
    (parsed, stats)
}

/// Exit codes for the non-interactive surface
pub mod exit_codes {
    /// The list loaded and was printed
    pub const SUCCESS: i32 = 0;
    /// The load failed
    pub const LOAD_FAILED: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_records_filters_then_sorts() {
        let input = vec![
            RawRecord::new(1, 200, Some("Item 1")),
            RawRecord::new(2, 100, Some("Item 2")),
            RawRecord::new(3, 100, None),
        ];
        let (items, stats) = prepare_records(&input, SortSpec::default());
        let ids: Vec<i64> = items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(stats.dropped(), 1);
    }
}
