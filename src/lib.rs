//! **Fetch, clean and browse a sortable record list.**
//!
//! `fetchlist` downloads a JSON array of records, drops every record without
//! a usable name, splits each remaining name into a text part and a numeric
//! part, and keeps the result in a small state machine that re-sorts the
//! list whenever one of its two coupled sort toggles is flipped.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`RawRecord`] as decoded from the wire and [`ParsedRecord`]
//!   after the name has been split by [`parse_name`].
//! - **[`pipeline`]**: filtering of unnamed records and the combined
//!   filter-then-sort step used by every load.
//! - **[`sort`]**: [`SortSpec`] with the coupled toggle rule and the
//!   comparator derived from it.
//! - **[`source`]**: the [`RecordSource`] seam, an HTTP implementation and a
//!   static one for offline use.
//! - **[`store`]**: [`ListStore`], owner of the published [`ViewState`].
//! - **[`tui`]** and **[`cli`]**: the interactive browser and the
//!   non-interactive `print` surface.
//!
//! ## Getting Started
//!
//! ```no_run
//! use fetchlist::{HttpRecordSource, HttpSourceConfig, ListStore};
//! use std::time::Duration;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = HttpRecordSource::new(HttpSourceConfig::default())?;
//!     let store = ListStore::new(source);
//!
//!     let state = store.wait_settled(Duration::from_secs(30));
//!     for record in state.items() {
//!         println!("{} {}", record.group_id, record.name);
//!     }
//!
//!     store.toggle_group_sort();
//!     println!("now sorted by {:?}", store.state().sort());
//!     Ok(())
//! }
//! ```

#![warn(clippy::unwrap_used)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod sort;
pub mod source;
pub mod store;
pub mod tui;

// Re-export main types for convenience
pub use config::{AppConfig, ConfigError, ConfigOverrides, SourceConfig, TuiConfig, Validatable};
pub use error::{ErrorContext, FetchListError, Result};
pub use model::{parse_name, NameParts, ParsedRecord, RawRecord};
pub use pipeline::{filter_records, prepare_records, FilterStats};
pub use sort::{build_comparator, sort_records, SortColumn, SortDirection, SortSpec};
pub use source::{HttpRecordSource, HttpSourceConfig, RecordSource, StaticRecordSource};
pub use store::{ListStore, ViewState};
