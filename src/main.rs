//! fetchlist: fetch, clean and browse a sortable record list.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use fetchlist::{
    cli::{self, DirectionArg, PrintFormat, PrintOptions},
    config::{self, AppConfig, ConfigOverrides},
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fetchlist")]
#[command(version)]
#[command(about = "Fetch, clean and browse a sortable record list", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    3  The record list could not be loaded

EXAMPLES:
    # Browse the list interactively
    fetchlist

    # Print the list grouped in descending order
    fetchlist print --sort-group desc

    # Export as JSON from another endpoint
    fetchlist --url http://localhost:8080/list.json print --format json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// URL of the record list (overrides the config file)
    #[arg(long, global = true, env = "FETCHLIST_URL")]
    url: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Arguments for the `browse` subcommand
#[derive(Parser, Default)]
struct BrowseArgs {
    /// Color theme: dark, light or high-contrast
    #[arg(long)]
    theme: Option<String>,
}

/// Arguments for the `print` subcommand
#[derive(Parser)]
struct PrintArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: PrintFormat,

    /// Sort direction for the List ID column
    #[arg(long, value_enum, conflicts_with = "sort_name")]
    sort_group: Option<DirectionArg>,

    /// Sort direction for the Name column
    #[arg(long, value_enum)]
    sort_name: Option<DirectionArg>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the list in an interactive terminal UI (default)
    Browse(BrowseArgs),

    /// Print the list once and exit
    Print(PrintArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (defaults + file + flags)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .fetchlist.yaml in the current directory
    Init,
    /// Print the JSON Schema of the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Browse(BrowseArgs::default()));

    // Initialize logging; the TUI owns the screen, so keep it quiet there
    let log_level = match (&command, cli.verbose, cli.quiet) {
        (_, true, _) => "debug",
        (_, _, true) | (Commands::Browse(_), _, _) => "warn",
        _ => "info",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let overrides = ConfigOverrides {
        url: cli.url,
        timeout_secs: cli.timeout,
        theme: match &command {
            Commands::Browse(args) => args.theme.clone(),
            _ => None,
        },
    };
    let (app_config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);

    match command {
        Commands::Browse(args) => {
            app_config.ensure_valid()?;
            let exit_code = cli::run_browse(&app_config, args.theme.as_deref())?;
            exit_with(exit_code)
        }

        Commands::Print(args) => {
            app_config.ensure_valid()?;
            let options = PrintOptions {
                format: args.format,
                sort_group: args.sort_group,
                sort_name: args.sort_name,
                wait: Duration::from_secs(app_config.source.timeout_secs + 5),
            };
            let exit_code = cli::run_print(&app_config, &options)?;
            exit_with(exit_code)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "fetchlist", &mut io::stdout());
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                for problem in fetchlist::Validatable::validate(&app_config) {
                    eprintln!("# Warning: {problem}");
                }
                let yaml =
                    serde_yaml::to_string(&app_config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in config::search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::file::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".fetchlist.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, config::generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
            ConfigAction::Schema { output } => {
                let schema = config::generate_json_schema();
                match output {
                    Some(path) => {
                        std::fs::write(&path, &schema)
                            .with_context(|| format!("failed to write {}", path.display()))?;
                        eprintln!("Schema written to {}", path.display());
                    }
                    None => println!("{schema}"),
                }
                Ok(())
            }
        },
    }
}

fn exit_with(code: i32) -> Result<()> {
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
