//! Print command handler.
//!
//! Implements the `print` subcommand: wait for the load, apply any
//! requested sort toggle through the store, write the list and exit.

use crate::config::AppConfig;
use crate::model::ParsedRecord;
use crate::pipeline::exit_codes;
use crate::sort::{SortColumn, SortSpec};
use crate::source::{HttpRecordSource, HttpSourceConfig, RecordSource};
use crate::store::{ListStore, ViewState};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Output format for `print`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PrintFormat {
    /// Aligned plain-text table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Requested direction for one column
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DirectionArg {
    Asc,
    Desc,
}

/// Options for the print command.
#[derive(Debug, Clone)]
pub struct PrintOptions {
    pub format: PrintFormat,
    pub sort_group: Option<DirectionArg>,
    pub sort_name: Option<DirectionArg>,
    /// How long to wait for the load to settle
    pub wait: Duration,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            format: PrintFormat::Table,
            sort_group: None,
            sort_name: None,
            wait: Duration::from_secs(crate::config::DEFAULT_TIMEOUT_SECS + 5),
        }
    }
}

impl PrintOptions {
    /// Toggles that turn the default order into the requested one.
    ///
    /// Ascending is the loaded default, so only `desc` needs a toggle.
    fn toggles(&self) -> Vec<SortColumn> {
        let mut toggles = Vec::new();
        if self.sort_group == Some(DirectionArg::Desc) {
            toggles.push(SortColumn::Group);
        }
        if self.sort_name == Some(DirectionArg::Desc) {
            toggles.push(SortColumn::Name);
        }
        if toggles.len() > 1 {
            tracing::warn!("Only one column can sort descending; name order wins");
        }
        toggles
    }
}

/// Run the print command against the configured HTTP source.
pub fn run_print(config: &AppConfig, options: &PrintOptions) -> Result<i32> {
    let source = HttpRecordSource::new(HttpSourceConfig::from(&config.source))
        .context("failed to set up the record source")?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_print_with(source, options, &mut out)
}

/// Run the print command against any source, writing to `out`.
pub fn run_print_with<S, W>(source: S, options: &PrintOptions, out: &mut W) -> Result<i32>
where
    S: RecordSource + 'static,
    W: Write,
{
    let store = ListStore::new(source);
    let settled = store.wait_settled(options.wait);
    if let Some(message) = failure_message(&store, &settled, options.wait) {
        tracing::error!("{message}");
        eprintln!("{message}");
        return Ok(exit_codes::LOAD_FAILED);
    }

    for column in options.toggles() {
        store.toggle(column);
    }

    let ViewState::Ready { items, sort } = store.state() else {
        return Ok(exit_codes::LOAD_FAILED);
    };

    let rendered = match options.format {
        PrintFormat::Table => render_table(&items, sort),
        PrintFormat::Json => render_json(&items, sort).context("failed to serialize records")?,
    };
    writeln!(out, "{rendered}").context("failed to write output")?;

    Ok(exit_codes::SUCCESS)
}

/// The line reported when the load did not end `Ready`.
fn failure_message(store: &ListStore, state: &ViewState, wait: Duration) -> Option<String> {
    match state {
        ViewState::Ready { .. } => None,
        ViewState::Failed => Some(match store.last_error() {
            Some(cause) => format!("Failed to load the record list: {cause}"),
            None => "Failed to load the record list".to_string(),
        }),
        ViewState::Loading => Some(format!(
            "Record list did not load within {}s",
            wait.as_secs()
        )),
    }
}

/// Render the records as a two-column plain-text table.
pub fn render_table(items: &[ParsedRecord], sort: SortSpec) -> String {
    let group_heading = sort.heading(SortColumn::Group);
    let name_heading = sort.heading(SortColumn::Name);

    let group_cells: Vec<String> = items.iter().map(|r| r.group_id.to_string()).collect();
    let group_width = group_cells
        .iter()
        .map(|c| c.width())
        .chain(std::iter::once(group_heading.width()))
        .max()
        .unwrap_or(0);
    let name_width = items
        .iter()
        .map(|r| r.name.width())
        .chain(std::iter::once(name_heading.width()))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(items.len() + 2);
    lines.push(format!("{}  {}", pad(&group_heading, group_width), name_heading));
    lines.push(format!("{}  {}", "-".repeat(group_width), "-".repeat(name_width)));
    for (group, record) in group_cells.iter().zip(items) {
        lines.push(format!("{}  {}", pad(group, group_width), record.name));
    }
    lines.join("\n")
}

fn pad(text: &str, width: usize) -> String {
    format!("{text}{}", " ".repeat(width.saturating_sub(text.width())))
}

#[derive(Serialize)]
struct PrintedList<'a> {
    sort: SortSpec,
    count: usize,
    items: &'a [ParsedRecord],
}

/// Render the records and the active sort as pretty JSON.
pub fn render_json(items: &[ParsedRecord], sort: SortSpec) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&PrintedList {
        sort,
        count: items.len(),
        items,
    })
}
