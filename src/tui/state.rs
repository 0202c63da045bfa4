//! Row selection state for the record table.

use super::constants::PAGE_SIZE;

/// Selection movement over a list of `total()` rows.
///
/// Implementors only expose the cursor; every movement is defined here
/// and never leaves the cursor outside `0..total` (or at 0 when empty).
pub trait ListNavigation {
    fn selected(&self) -> usize;

    fn set_selected(&mut self, idx: usize);

    fn total(&self) -> usize;

    /// Move one row down.
    fn select_next(&mut self) {
        let next = self.selected().saturating_add(1);
        if next < self.total() {
            self.set_selected(next);
        }
    }

    /// Move one row up.
    fn select_prev(&mut self) {
        self.set_selected(self.selected().saturating_sub(1));
    }

    fn page_up(&mut self) {
        self.set_selected(self.selected().saturating_sub(PAGE_SIZE));
    }

    fn page_down(&mut self) {
        let last = self.total().saturating_sub(1);
        self.set_selected(self.selected().saturating_add(PAGE_SIZE).min(last));
    }

    fn go_first(&mut self) {
        self.set_selected(0);
    }

    fn go_last(&mut self) {
        self.set_selected(self.total().saturating_sub(1));
    }
}

/// Cursor and scroll position of the record table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    pub selected: usize,
    pub total: usize,
    pub scroll_offset: usize,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_total(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Adopt a new row count, pulling the cursor back inside it.
    pub fn resize(&mut self, total: usize) {
        self.total = total;
        self.selected = self.selected.min(total.saturating_sub(1));
        self.scroll_offset = self.scroll_offset.min(self.selected);
    }

    /// First visible row for a viewport of `height` rows.
    ///
    /// Scrolls just enough to keep the cursor on screen and remembers the
    /// result so the view does not jump while the cursor moves inside it.
    pub fn visible_offset(&mut self, height: usize) -> usize {
        if height == 0 {
            return self.scroll_offset;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + height {
            self.scroll_offset = self.selected + 1 - height;
        }
        self.scroll_offset
    }
}

impl ListNavigation for ListState {
    fn selected(&self) -> usize {
        self.selected
    }

    fn set_selected(&mut self, idx: usize) {
        self.selected = idx;
    }

    fn total(&self) -> usize {
        self.total
    }
}
