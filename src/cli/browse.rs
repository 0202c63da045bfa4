//! Browse command handler.
//!
//! Implements the default `browse` subcommand: the interactive list view.

use crate::config::{AppConfig, TuiPreferences};
use crate::pipeline::exit_codes;
use crate::source::{HttpRecordSource, HttpSourceConfig};
use crate::store::ListStore;
use crate::tui::{run_tui, set_theme, App, Theme};
use anyhow::{Context, Result};

/// Run the browse command
pub fn run_browse(config: &AppConfig, theme_override: Option<&str>) -> Result<i32> {
    let source = HttpRecordSource::new(HttpSourceConfig::from(&config.source))
        .context("failed to set up the record source")?;
    let label = source.url().to_string();

    let theme = resolve_theme(theme_override, TuiPreferences::load(), config);
    set_theme(Theme::from_name(&theme));

    let store = ListStore::new(source);
    let mut app = App::new(store, label);
    run_tui(&mut app, config.tui.tick_rate_ms).context("terminal UI failed")?;

    Ok(exit_codes::SUCCESS)
}

/// Pick the theme: command line, then the saved preference, then config.
pub fn resolve_theme(
    flag: Option<&str>,
    saved: Option<TuiPreferences>,
    config: &AppConfig,
) -> String {
    flag.map(str::to_string)
        .or_else(|| saved.map(|prefs| prefs.theme))
        .unwrap_or_else(|| config.tui.theme.clone())
}
