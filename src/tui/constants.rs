//! Named constants for TUI layout and navigation.

/// Number of rows to scroll per page-up/page-down action.
pub(crate) const PAGE_SIZE: usize = 10;

/// Minimum terminal width for the list layout.
pub(crate) const MIN_WIDTH: u16 = 40;

/// Minimum terminal height for the list layout.
pub(crate) const MIN_HEIGHT: u16 = 10;

/// How long a status message stays in the footer, in ticks.
pub(crate) const STATUS_TICKS: u64 = 12;
