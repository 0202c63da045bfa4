//! Sort directions and the coupled toggle rule.

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    #[must_use]
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Descending)
    }
}

/// Which column a toggle or header refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Group,
    Name,
}

impl SortColumn {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Group => "List ID",
            Self::Name => "Name",
        }
    }
}

/// The pair of directions governing the table order.
///
/// The two directions are coupled: toggling one flips it and resets the
/// other to ascending, so at most one of them is ever descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub group_direction: SortDirection,
    pub name_direction: SortDirection,
}

impl SortSpec {
    pub const fn new(group_direction: SortDirection, name_direction: SortDirection) -> Self {
        Self {
            group_direction,
            name_direction,
        }
    }

    /// Flip the group direction and reset the name direction to ascending.
    #[must_use]
    pub const fn toggle_group(self) -> Self {
        Self {
            group_direction: self.group_direction.toggled(),
            name_direction: SortDirection::Ascending,
        }
    }

    /// Flip the name direction and reset the group direction to ascending.
    #[must_use]
    pub const fn toggle_name(self) -> Self {
        Self {
            group_direction: SortDirection::Ascending,
            name_direction: self.name_direction.toggled(),
        }
    }

    /// Apply the toggle for `column`.
    #[must_use]
    pub const fn toggle(self, column: SortColumn) -> Self {
        match column {
            SortColumn::Group => self.toggle_group(),
            SortColumn::Name => self.toggle_name(),
        }
    }

    pub const fn direction(self, column: SortColumn) -> SortDirection {
        match column {
            SortColumn::Group => self.group_direction,
            SortColumn::Name => self.name_direction,
        }
    }

    /// The column currently sorted descending, if any.
    #[must_use]
    pub const fn active_column(self) -> Option<SortColumn> {
        if self.group_direction.is_descending() {
            Some(SortColumn::Group)
        } else if self.name_direction.is_descending() {
            Some(SortColumn::Name)
        } else {
            None
        }
    }

    /// Column title followed by its direction arrow, e.g. `"List ID ↓"`.
    pub fn heading(self, column: SortColumn) -> String {
        format!("{} {}", column.title(), self.direction(column).indicator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SortDirection::{Ascending, Descending};

    #[test]
    fn test_default_is_ascending_both() {
        assert_eq!(SortSpec::default(), SortSpec::new(Ascending, Ascending));
        assert_eq!(SortSpec::default().active_column(), None);
    }

    #[test]
    fn test_toggle_group_then_name() {
        let spec = SortSpec::default().toggle_group();
        assert_eq!(spec, SortSpec::new(Descending, Ascending));
        assert_eq!(spec.active_column(), Some(SortColumn::Group));

        let spec = spec.toggle_name();
        assert_eq!(spec, SortSpec::new(Ascending, Descending));
        assert_eq!(spec.active_column(), Some(SortColumn::Name));
    }

    #[test]
    fn test_toggle_twice_returns_to_default() {
        assert_eq!(SortSpec::default().toggle_group().toggle_group(), SortSpec::default());
        assert_eq!(SortSpec::default().toggle_name().toggle_name(), SortSpec::default());
    }

    #[test]
    fn test_toggle_by_column() {
        let spec = SortSpec::default();
        assert_eq!(spec.toggle(SortColumn::Group), spec.toggle_group());
        assert_eq!(spec.toggle(SortColumn::Name), spec.toggle_name());
        assert_eq!(spec.toggle_name().direction(SortColumn::Name), Descending);
    }

    #[test]
    fn test_direction_helpers() {
        assert_eq!(Ascending.toggled(), Descending);
        assert_eq!(Descending.indicator(), "↓");
        assert_eq!(Ascending.label(), "ascending");
    }
}
