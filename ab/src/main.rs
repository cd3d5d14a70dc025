//! ab - address book
//!
//! CLI entry point: the interactive menu by default, plus read-only
//! `list` and `search` commands for scripting.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use addressbook::cli::{Cli, Command, OutputFormat};
use addressbook::config::Config;
use addressbook::menu;
use addressbook::{Contact, ContactStore, SearchField};

fn parse_level(level: Option<&str>) -> tracing::Level {
    match level.map(|s| s.to_uppercase()).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") | None => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            tracing::Level::INFO
        }
    }
}

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("addressbook")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > INFO
    let level = parse_level(cli_log_level.or(config_log_level));
    let log_file = fs::File::create(log_dir.join("addressbook.log")).context("Failed to create log file")?;

    // The menu owns the terminal, so logs go to a file
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .with_overrides(cli.store.clone(), cli.capacity);

    info!(
        store = %config.store_path.display(),
        capacity = ?config.capacity,
        "addressbook loaded config"
    );

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        None | Some(Command::Menu) => cmd_menu(&config),
        Some(Command::List { format }) => cmd_list(&config, format),
        Some(Command::Search { query, field, format }) => cmd_search(&config, &query, field, format),
    }
}

/// Run the interactive menu
fn cmd_menu(config: &Config) -> Result<()> {
    menu::run_interactive(config)?;
    Ok(())
}

/// A contact with its one-based `#N` handle
#[derive(Serialize)]
struct Entry<'a> {
    position: usize,
    #[serde(flatten)]
    contact: &'a Contact,
}

fn print_entries(entries: &[Entry<'_>], format: OutputFormat, empty: &str) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(entries)?);
        }
        OutputFormat::Text => {
            if entries.is_empty() {
                println!("{}", empty);
            }
            for entry in entries {
                println!("{:>4}  {}", format!("#{}", entry.position).yellow(), entry.contact);
            }
        }
    }
    Ok(())
}

/// Print every contact
fn cmd_list(config: &Config, format: OutputFormat) -> Result<()> {
    let store = ContactStore::load(&config.store_path, config.capacity);
    debug!(count = store.len(), "cmd_list: loaded store");

    let entries: Vec<Entry<'_>> = store
        .iter()
        .enumerate()
        .map(|(i, contact)| Entry {
            position: i + 1,
            contact,
        })
        .collect();
    print_entries(&entries, format, "No contacts.")
}

/// Print contacts matching a query
fn cmd_search(config: &Config, query: &str, field: SearchField, format: OutputFormat) -> Result<()> {
    let store = ContactStore::load(&config.store_path, config.capacity);
    let hits = store.search_indexed(query, field);
    debug!(%query, %field, hits = hits.len(), "cmd_search: searched store");

    let entries: Vec<Entry<'_>> = hits
        .into_iter()
        .map(|(i, contact)| Entry {
            position: i + 1,
            contact,
        })
        .collect();
    print_entries(&entries, format, "No contacts found.")
}
