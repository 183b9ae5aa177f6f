//! Widget Dashboard - CLI entry point
//!
//! This binary launches the terminal dashboard, dumps the (optionally
//! filtered) dashboard for scripting, and manages the configuration file.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use widget_dashboard::{
    config::{default, xdg, Config, ConfigLoader},
    filter::filter_dashboard,
    logging::{self, LogTarget},
    seed,
    tui::{App, TuiSettings},
    Dashboard,
};

/// Categorized widget dashboard
#[derive(Parser)]
#[command(name = "wdash")]
#[command(version, about = "Categorized widget dashboard for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the wdash CLI
#[derive(Subcommand)]
enum Commands {
    /// Launch the terminal user interface
    Tui {
        /// Initial search query
        #[arg(long, default_value = "")]
        search: String,
        /// Configuration file (defaults to the XDG location)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the dashboard, filtered by an optional search query
    Dump {
        /// Search query applied to widget names and texts
        #[arg(long, default_value = "")]
        search: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = DumpFormat::Json)]
        format: DumpFormat,
        /// Configuration file (defaults to the XDG location)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate {
        /// File to validate instead of the default location
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Output formats for `dump`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DumpFormat {
    /// Pretty-printed JSON document in seed file shape
    Json,
    /// Indented category/widget listing
    Text,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tui { search, config } => run_tui_command(config.as_deref(), search),
        Commands::Dump {
            search,
            format,
            config,
        } => run_dump_command(config.as_deref(), &search, format),
        Commands::Config { action } => run_config_command(action),
    }
}

/// Loads and validates the configuration, then installs logging.
fn prepare(config_path: Option<&Path>, interactive: bool) -> Result<Config, String> {
    let config = ConfigLoader::load(config_path).map_err(|e| format!("Config error: {e}"))?;
    config.validate().map_err(|e| format!("Config error: {e}"))?;
    let target = LogTarget::for_command(&config.logging, interactive);
    logging::init(config.logging.level, target)
        .map_err(|e| format!("Failed to open log file: {e}"))?;
    Ok(config)
}

/// Resolves the seed dashboard configured in `[dashboard]`.
fn load_seed(config: &Config) -> Result<Dashboard, String> {
    seed::resolve_seed(config.dashboard.seed_path().as_deref()).map_err(|e| format!("Error: {e}"))
}

fn run_tui_command(config_path: Option<&Path>, search: String) -> ExitCode {
    let (config, seed) = match prepare(config_path, true).and_then(|c| {
        let seed = load_seed(&c)?;
        Ok((c, seed))
    }) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let settings = match TuiSettings::from_config(&config.tui) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        "Starting dashboard ({} categories, {} widgets)",
        seed.categories.len(),
        seed.widget_count()
    );
    if let Err(e) = rt.block_on(async {
        let mut app = App::new(seed, settings).with_search(search);
        app.run().await
    }) {
        eprintln!("TUI error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_dump_command(config_path: Option<&Path>, search: &str, format: DumpFormat) -> ExitCode {
    let dashboard = match prepare(config_path, false).and_then(|c| load_seed(&c)) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let view = filter_dashboard(&dashboard, search);
    tracing::debug!("Dumping {} widgets matching {:?}", view.widget_count(), search);

    match format {
        DumpFormat::Json => match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize dashboard: {e}");
                return ExitCode::FAILURE;
            }
        },
        DumpFormat::Text => print!("{}", format_text(&view)),
    }
    ExitCode::SUCCESS
}

/// Renders the dashboard as an indented listing, one widget per line.
fn format_text(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    for category in &dashboard.categories {
        out.push_str(&format!(
            "{} ({}) [{}]\n",
            category.name,
            category.widgets.len(),
            category.id
        ));
        for widget in &category.widgets {
            out.push_str(&format!("  {}  {} ({})\n", widget.id, widget.name, widget.kind));
        }
    }
    out
}

fn run_config_command(action: ConfigAction) -> ExitCode {
    let result = match action {
        ConfigAction::Init { force } => default::create_default_config(force).map(|path| {
            println!("Created configuration at {}", path.display());
        }),
        ConfigAction::Path => {
            println!("{}", xdg::config_path().display());
            Ok(())
        }
        ConfigAction::Validate { config } => ConfigLoader::load(config.as_deref())
            .and_then(|c| c.validate().map(|()| c))
            .map(|c| {
                println!("Configuration is valid");
                println!("{c:#?}");
            }),
    };
    if let Err(e) = result {
        eprintln!("Config error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_tui_defaults() {
        let cli = Cli::try_parse_from(["wdash", "tui"]).unwrap();
        match cli.command {
            Commands::Tui { search, config } => {
                assert!(search.is_empty());
                assert!(config.is_none());
            }
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_tui_with_search_and_config() {
        let cli = Cli::try_parse_from([
            "wdash",
            "tui",
            "--search",
            "alerts",
            "--config",
            "/tmp/wdash.toml",
        ])
        .unwrap();
        match cli.command {
            Commands::Tui { search, config } => {
                assert_eq!(search, "alerts");
                assert_eq!(config, Some(PathBuf::from("/tmp/wdash.toml")));
            }
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_dump_format_defaults_to_json() {
        let cli = Cli::try_parse_from(["wdash", "dump"]).unwrap();
        match cli.command {
            Commands::Dump { format, .. } => assert_eq!(format, DumpFormat::Json),
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_dump_text_format() {
        let cli = Cli::try_parse_from(["wdash", "dump", "--format", "text"]).unwrap();
        match cli.command {
            Commands::Dump { format, .. } => assert_eq!(format, DumpFormat::Text),
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_dump_rejects_unknown_format() {
        let result = Cli::try_parse_from(["wdash", "dump", "--format", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_init_force_flag() {
        let cli = Cli::try_parse_from(["wdash", "config", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Config {
                action: ConfigAction::Init { force },
            } => assert!(force),
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_config_without_action_fails() {
        let result = Cli::try_parse_from(["wdash", "config"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_text_lists_categories_and_widgets() {
        let text = format_text(&seed::initial_dashboard());
        assert!(text.starts_with("CSPM Executive Dashboard (2) [cspm-executive]\n"));
        assert!(text.contains("  widget-5  Image Risk Assessment (bar)\n"));
        assert_eq!(text.lines().count(), 9);
    }

    #[test]
    fn test_format_text_keeps_empty_categories() {
        let view = filter_dashboard(&seed::initial_dashboard(), "workload");
        let text = format_text(&view);
        assert!(text.contains("CSPM Executive Dashboard (0)"));
        assert!(text.contains("  widget-4  Workload Alerts (donut)\n"));
        assert_eq!(text.lines().count(), 4);
    }
}
