//! Loading and saving the contacts file

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use super::codec::{format_line, is_ambiguous, parse_line};
use super::{ContactStore, LineError, StoreError};

/// A line that was left out while loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// One-based line number in the file
    pub line_no: usize,
    pub reason: LineError,
}

/// What happened while loading a contacts file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// The file could not be opened; the store starts empty
    pub missing: bool,
    /// Number of contacts read into the store
    pub loaded: usize,
    /// Malformed lines, in file order
    pub skipped: Vec<SkippedLine>,
    /// Reading stopped at capacity with lines still unread
    pub truncated: bool,
}

impl LoadReport {
    /// Whether anything in the file was not loaded
    pub fn has_losses(&self) -> bool {
        !self.skipped.is_empty() || self.truncated
    }
}

impl ContactStore {
    /// Load a store from `path`.
    ///
    /// Never fails: a file that cannot be opened gives an empty store, and
    /// malformed lines are skipped.
    pub fn load(path: impl AsRef<Path>, capacity: Option<usize>) -> Self {
        Self::load_with_report(path, capacity).0
    }

    /// Load a store from `path` and describe what was read and skipped
    pub fn load_with_report(path: impl AsRef<Path>, capacity: Option<usize>) -> (Self, LoadReport) {
        let path = path.as_ref();
        let mut store = Self::with_capacity(capacity);
        let mut report = LoadReport::default();

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Contacts file not readable, starting empty");
                report.missing = true;
                return (store, report);
            }
        };

        let content = String::from_utf8_lossy(&bytes);
        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }
            if store.is_full() {
                warn!(path = %path.display(), line_no, "Capacity reached, ignoring remaining lines");
                report.truncated = true;
                break;
            }
            match parse_line(line) {
                Ok(contact) => store.contacts.push(contact),
                Err(reason) => {
                    warn!(path = %path.display(), line_no, %reason, "Skipping malformed line");
                    report.skipped.push(SkippedLine { line_no, reason });
                }
            }
        }

        report.loaded = store.len();
        info!(
            path = %path.display(),
            loaded = report.loaded,
            skipped = report.skipped.len(),
            "Loaded contacts"
        );
        (store, report)
    }

    /// Write every contact to `path`, replacing its previous content
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let write_err = |source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = fs::File::create(path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        for (position, contact) in self.contacts.iter().enumerate() {
            if is_ambiguous(contact) {
                warn!(position, name = %contact.name, "Contact contains a delimiter and will not reload intact");
            }
            writeln!(writer, "{}", format_line(contact)).map_err(write_err)?;
        }
        writer.flush().map_err(write_err)?;

        info!(path = %path.display(), count = self.len(), "Saved contacts");
        Ok(())
    }
}
