use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use schema_extractor_core::{ExtractorConfig, format_schema_with};
use schema_extractor_sqlite::SchemaReader;
use tracing::{debug, info};

mod clipboard;
mod logging;

use clipboard::Clipboard;

#[derive(Debug, Parser)]
#[command(name = "schema-extractor")]
#[command(about = "Extract the database schema from a SQLite database file")]
#[command(version)]
struct Cli {
    /// Path to the database file to extract the schema from.
    database_path: PathBuf,
    /// Copy the database schema to the clipboard instead of writing to stdout.
    #[arg(long, alias = "to_clipboard")]
    to_clipboard: bool,
    /// YAML configuration file (excluded tables, output layout).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Additional table to skip. May be given multiple times.
    #[arg(long = "exclude", value_name = "TABLE")]
    exclude: Vec<String>,
    /// Extract every table, including xp_proc and sqlite_sequence.
    #[arg(long)]
    include_reserved: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let clipboard = Clipboard::detect();

    let mut command = Cli::command();
    if clipboard.is_none() {
        command = command.mut_arg("to_clipboard", |arg| arg.hide(true));
    }
    let cli = Cli::from_arg_matches(&command.get_matches()).unwrap_or_else(|err| err.exit());

    logging::init(cli.verbose);

    if let Err(err) = run(cli, clipboard) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, clipboard: Option<Clipboard>) -> Result<(), String> {
    if !cli.database_path.exists() {
        return Err(format!(
            "No such database file: {}",
            cli.database_path.display()
        ));
    }

    let config = load_config(&cli)?;
    let reader = SchemaReader::new(config.exclude);

    let schema = reader
        .get_database_schema(&cli.database_path)
        .filter(|schema| !schema.is_empty())
        .ok_or_else(|| {
            format!(
                "Unable to determine schema from database file: {}",
                cli.database_path.display()
            )
        })?;

    let formatted = format_schema_with(&schema, &config.layout);

    match clipboard.filter(|_| cli.to_clipboard) {
        Some(clipboard) => {
            clipboard.copy(&formatted)?;
            info!(
                program = clipboard.program(),
                tables = schema.len(),
                "Copied schema to clipboard"
            );
        }
        None => {
            if cli.to_clipboard {
                debug!("Clipboard unavailable, writing schema to stdout");
            }
            println!("{formatted}");
        }
    }

    Ok(())
}

/// Loads the configuration file, if any, and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<ExtractorConfig, String> {
    let mut config = match &cli.config {
        Some(path) => ExtractorConfig::load(path)
            .map_err(|e| format!("Failed to load config '{}': {e}", path.display()))?,
        None => ExtractorConfig::default(),
    };

    if cli.include_reserved {
        config.exclude.clear();
    }
    config.exclude.extend(cli.exclude.iter().cloned());

    config
        .validate()
        .map_err(|e| format!("Invalid configuration: {e}"))?;
    debug!(exclude = ?config.exclude.names(), "Resolved configuration");

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_clipboard_alias() {
        assert!(parse(&["schema-extractor", "--to_clipboard", "db.sqlite"]).to_clipboard);
        assert!(parse(&["schema-extractor", "--to-clipboard", "db.sqlite"]).to_clipboard);
        assert!(!parse(&["schema-extractor", "db.sqlite"]).to_clipboard);
    }

    #[test]
    fn test_database_path_required() {
        assert!(Cli::try_parse_from(["schema-extractor"]).is_err());
    }

    #[test]
    fn test_exclude_overrides() {
        let cli = parse(&[
            "schema-extractor",
            "--exclude",
            "android_metadata",
            "--exclude",
            "meta",
            "db.sqlite",
        ]);
        let config = load_config(&cli).unwrap();

        assert_eq!(
            config.exclude.names(),
            ["xp_proc", "sqlite_sequence", "android_metadata", "meta"]
        );
    }

    #[test]
    fn test_include_reserved_clears_defaults() {
        let cli = parse(&[
            "schema-extractor",
            "--include-reserved",
            "--exclude",
            "meta",
            "db.sqlite",
        ]);
        let config = load_config(&cli).unwrap();

        assert_eq!(config.exclude.names(), ["meta"]);
    }

    #[test]
    fn test_invalid_exclude_rejected() {
        let cli = parse(&["schema-extractor", "--exclude", "bad name", "db.sqlite"]);
        let err = load_config(&cli).unwrap_err();
        assert!(err.starts_with("Invalid configuration"));
    }

    #[test]
    fn test_verbose_count() {
        assert_eq!(parse(&["schema-extractor", "-vv", "db.sqlite"]).verbose, 2);
    }
}
