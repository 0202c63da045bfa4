//! The single value the presentation layer observes.

use crate::model::ParsedRecord;
use crate::sort::SortSpec;

/// Published state of the list store.
///
/// Starts as `Loading`, becomes `Failed` or `Ready` once the load settles,
/// and stays `Ready` across toggles (each toggle publishes a new `Ready`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Failed,
    Ready {
        items: Vec<ParsedRecord>,
        sort: SortSpec,
    },
}

impl ViewState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// Items in display order; empty unless `Ready`.
    #[must_use]
    pub fn items(&self) -> &[ParsedRecord] {
        match self {
            Self::Ready { items, .. } => items,
            Self::Loading | Self::Failed => &[],
        }
    }

    /// The sort spec, if `Ready`.
    #[must_use]
    pub const fn sort(&self) -> Option<SortSpec> {
        match self {
            Self::Ready { sort, .. } => Some(*sort),
            Self::Loading | Self::Failed => None,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Failed => "failed",
            Self::Ready { .. } => "ready",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawRecord;

    #[test]
    fn test_default_is_loading() {
        let state = ViewState::default();
        assert!(state.is_loading());
        assert!(state.items().is_empty());
        assert!(state.sort().is_none());
    }

    #[test]
    fn test_ready_accessors() {
        let item = ParsedRecord::from_raw(&RawRecord::new(1, 1, Some("Item 1"))).unwrap();
        let state = ViewState::Ready {
            items: vec![item],
            sort: SortSpec::default(),
        };
        assert!(state.is_ready());
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.sort(), Some(SortSpec::default()));
        assert_eq!(state.label(), "ready");
        assert!(ViewState::Failed.is_failed());
    }
}
