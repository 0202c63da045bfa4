//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs. Each handler implements
//! the logic for one subcommand and returns the process exit code.

mod browse;
mod print;

pub use browse::{resolve_theme, run_browse};
pub use print::{
    render_json, render_table, run_print, run_print_with, DirectionArg, PrintFormat,
    PrintOptions,
};
