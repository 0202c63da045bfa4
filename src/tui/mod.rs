//! Interactive terminal browser using ratatui.
//!
//! The browser subscribes to a [`ListStore`](crate::store::ListStore) and
//! renders whatever state it publishes: a spinner while loading, an error
//! banner with a retry hint on failure, and the sortable record table once
//! ready. Sorting keys go straight to the store.

mod app;
pub(crate) mod constants;
mod events;
pub mod state;
pub mod theme;
mod ui;

// Theme exports
pub use theme::{colors, set_theme, toggle_theme, ColorScheme, FooterHints, Styles, Theme};

pub use state::{ListNavigation, ListState};

pub use app::App;
pub use events::{handle_key_event, Event, EventHandler};
pub use ui::run_tui;
