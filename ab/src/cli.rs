//! CLI argument parsing for the address book

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::SearchField;

/// ab - menu-driven address book
#[derive(Parser, Debug)]
#[command(
    name = "ab",
    author,
    version,
    about = "Menu-driven address book backed by a comma-delimited file",
    long_about = None,
    after_help = "Logs are written to: ~/.local/share/addressbook/logs/addressbook.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Contacts file to load and save (overrides config)
    #[arg(short, long, global = true)]
    pub store: Option<PathBuf>,

    /// Maximum number of contacts (overrides config)
    #[arg(long, global = true)]
    pub capacity: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to execute; the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive menu (default)
    Menu,

    /// Print all contacts and exit
    List {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print contacts matching a query and exit
    Search {
        /// Text to look for (case-sensitive substring)
        #[arg(required = true)]
        query: String,

        /// Field to match: name, phone, email, or any
        #[arg(long, default_value = "name")]
        field: SearchField,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Output format for list/search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["ab"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_global_overrides() {
        let cli = Cli::try_parse_from(["ab", "list", "--store", "book.csv", "--capacity", "5"]).unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("book.csv")));
        assert_eq!(cli.capacity, Some(5));
    }

    #[test]
    fn test_search_args() {
        let cli = Cli::try_parse_from(["ab", "search", "555", "--field", "phone", "-f", "json"]).unwrap();
        match cli.command {
            Some(Command::Search { query, field, format }) => {
                assert_eq!(query, "555");
                assert_eq!(field, SearchField::Phone);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_bad_format_rejected() {
        assert!(Cli::try_parse_from(["ab", "list", "-f", "xml"]).is_err());
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    }
}
