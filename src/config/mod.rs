//! Configuration for fetchlist.
//!
//! - Type-safe configuration structures with `serde` defaults
//! - Validation via [`Validatable`]
//! - YAML config file loading and discovery
//! - CLI override merging
//!
//! # Configuration File
//!
//! Place a `.fetchlist.yaml` file in the working directory or `~/.config/fetchlist/`:
//!
//! ```yaml
//! source:
//!   url: https://fetch-hiring.s3.amazonaws.com/hiring.json
//!   timeout_secs: 30
//! tui:
//!   theme: dark
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{AppConfig, SourceConfig, TuiConfig, TuiPreferences};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    search_dirs, ConfigFileError, ConfigOverrides,
};

/// Default request timeout for the record source, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default TUI event poll interval, in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it for validation and autocompletion of
/// `.fetchlist.yaml` files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_mentions_sections() {
        let schema = generate_json_schema();
        assert!(schema.contains("\"source\""));
        assert!(schema.contains("\"tui\""));
        assert!(schema.contains("timeout_secs"));
    }
}
