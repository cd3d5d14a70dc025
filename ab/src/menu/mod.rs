//! Interactive menu for the address book
//!
//! The menu owns the [`ContactStore`] for the whole session. Changes stay in
//! memory until the user picks "Save and Exit"; closing the input any other
//! way discards them.

mod session;

pub use session::{MenuChoice, MenuSession, SessionEnd};

use std::io;

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::info;

use crate::config::Config;
use crate::store::{ContactStore, LoadReport};

/// One read from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl+C
    Interrupted,
    /// Ctrl+D or closed stdin
    Eof,
}

/// Where the menu reads its input from
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Input>;
}

/// Readline-backed input: line editing and history on a terminal, plain
/// line reads when stdin is piped
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;
        Ok(Self { editor })
    }
}

impl LineSource for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(err) => Err(eyre::eyre!("Readline error: {}", err)),
        }
    }
}

/// Run the interactive menu
///
/// This is the entry point for `ab` and `ab menu`.
pub fn run_interactive(config: &Config) -> Result<SessionEnd> {
    let (store, report) = ContactStore::load_with_report(&config.store_path, config.capacity);
    print_load_notice(config, &report);

    let mut session = MenuSession::new(store, config.store_path.clone(), Terminal::new()?, io::stdout());
    let end = session.run()?;

    info!(?end, "Menu session finished");
    Ok(end)
}

fn print_load_notice(config: &Config, report: &LoadReport) {
    if report.missing {
        println!(
            "{}",
            format!("Starting a new address book at {}", config.store_path.display()).dimmed()
        );
        return;
    }

    println!("Loaded {} contact(s) from {}", report.loaded, config.store_path.display());
    for skipped in &report.skipped {
        println!("{} line {} skipped: {}", "!".yellow(), skipped.line_no, skipped.reason);
    }
    if report.truncated {
        println!("{} capacity reached; remaining lines were not loaded", "!".yellow());
    }
    if report.has_losses() {
        println!("{}", "Lines that were not loaded are dropped on save.".dimmed());
    }
}
