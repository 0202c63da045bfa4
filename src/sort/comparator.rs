//! Building a total order over parsed records from a [`SortSpec`].

use super::spec::{SortDirection, SortSpec};
use crate::model::ParsedRecord;
use std::cmp::Ordering;

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Build the comparator for `spec`.
///
/// The group identifier is always the primary key, ordered by
/// `spec.group_direction`. Ties are broken by the name's text part and then
/// its number part, both ordered by `spec.name_direction`. Records equal on
/// all three keys compare equal; their relative order is left to the
/// stability of the sort.
pub fn build_comparator(spec: SortSpec) -> impl Fn(&ParsedRecord, &ParsedRecord) -> Ordering {
    move |a, b| {
        directed(a.group_id.cmp(&b.group_id), spec.group_direction).then_with(|| {
            directed(
                a.name_part
                    .cmp(&b.name_part)
                    .then_with(|| a.number_part.cmp(&b.number_part)),
                spec.name_direction,
            )
        })
    }
}

/// Stable-sort `records` in place with the comparator for `spec`.
pub fn sort_records(records: &mut [ParsedRecord], spec: SortSpec) {
    records.sort_by(build_comparator(spec));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawRecord;
    use SortDirection::{Ascending, Descending};

    fn rec(id: i64, group: i64, name: &str) -> ParsedRecord {
        ParsedRecord::from_raw(&RawRecord::new(id, group, Some(name))).unwrap()
    }

    fn names(records: &[ParsedRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_group_is_primary_key() {
        let mut items = vec![rec(1, 200, "Item 1"), rec(2, 100, "Item 2")];
        sort_records(&mut items, SortSpec::default());
        assert_eq!(names(&items), vec!["Item 2", "Item 1"]);

        sort_records(&mut items, SortSpec::new(Descending, Ascending));
        assert_eq!(names(&items), vec!["Item 1", "Item 2"]);
    }

    #[test]
    fn test_number_part_sorts_numerically() {
        let mut items = vec![rec(1, 1, "Item 10"), rec(2, 1, "Item 9"), rec(3, 1, "Item 100")];
        sort_records(&mut items, SortSpec::default());
        assert_eq!(names(&items), vec!["Item 9", "Item 10", "Item 100"]);
    }

    #[test]
    fn test_name_part_before_number_part() {
        let mut items = vec![rec(1, 1, "Beta 1"), rec(2, 1, "Alpha 5")];
        sort_records(&mut items, SortSpec::default());
        assert_eq!(names(&items), vec!["Alpha 5", "Beta 1"]);
    }

    #[test]
    fn test_name_descending_within_groups() {
        let mut items = vec![
            rec(1, 200, "Item 1"),
            rec(2, 100, "Item 2"),
            rec(3, 100, "Item 3"),
        ];
        sort_records(&mut items, SortSpec::new(Ascending, Descending));
        assert_eq!(names(&items), vec!["Item 3", "Item 2", "Item 1"]);

        sort_records(&mut items, SortSpec::new(Descending, Descending));
        assert_eq!(names(&items), vec!["Item 1", "Item 3", "Item 2"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let mut items = vec![rec(7, 1, "Item 1"), rec(3, 1, "Item 1"), rec(5, 1, "Item 01")];
        sort_records(&mut items, SortSpec::default());
        let ids: Vec<i64> = items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![7, 3, 5]);
    }

    #[test]
    fn test_comparator_is_reflexive() {
        let cmp = build_comparator(SortSpec::new(Descending, Ascending));
        let a = rec(1, 1, "Item 1");
        assert_eq!(cmp(&a, &a), Ordering::Equal);
    }
}
