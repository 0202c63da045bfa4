//! Table ordering: sort directions, the coupled toggles, and the comparator.

mod comparator;
mod spec;

pub use comparator::{build_comparator, sort_records};
pub use spec::{SortColumn, SortDirection, SortSpec};
