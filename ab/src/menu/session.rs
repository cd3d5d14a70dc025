//! Menu session: reads choices and dispatches to the store

use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;
use eyre::Result;
use tracing::{debug, warn};

use super::{Input, LineSource};
use crate::domain::{Contact, ContactUpdate, SearchField, Selector};
use crate::store::ContactStore;

/// The six menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    Search,
    Edit,
    Delete,
    List,
    SaveAndExit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        Self::Create,
        Self::Search,
        Self::Edit,
        Self::Delete,
        Self::List,
        Self::SaveAndExit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Create => "Create contact",
            Self::Search => "Search contact",
            Self::Edit => "Edit contact",
            Self::Delete => "Delete contact",
            Self::List => "List all contacts",
            Self::SaveAndExit => "Save and Exit",
        }
    }
}

impl std::str::FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Create),
            "2" => Ok(Self::Search),
            "3" => Ok(Self::Edit),
            "4" => Ok(Self::Delete),
            "5" => Ok(Self::List),
            "6" => Ok(Self::SaveAndExit),
            _ => Err(format!("Invalid choice: {}", s)),
        }
    }
}

/// How a session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The store was written by "Save and Exit"
    Saved,
    /// Input closed before saving; the file was not touched
    Abandoned,
}

/// Result of asking the user one question
enum Answer {
    Text(String),
    /// Ctrl+C: drop the current action
    Cancelled,
    Closed,
}

/// What the loop does after an action
enum Flow {
    Continue,
    Exit(SessionEnd),
}

/// Interactive session over a store, an input source and an output writer
pub struct MenuSession<S: LineSource, W: Write> {
    store: ContactStore,
    store_path: PathBuf,
    input: S,
    out: W,
    /// Mutations since load
    dirty: bool,
}

impl<S: LineSource, W: Write> MenuSession<S, W> {
    pub fn new(store: ContactStore, store_path: PathBuf, input: S, out: W) -> Self {
        Self {
            store,
            store_path,
            input,
            out,
            dirty: false,
        }
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Run the menu loop until save-and-exit or end of input
    pub fn run(&mut self) -> Result<SessionEnd> {
        loop {
            self.print_menu()?;

            let choice = match self.input.read_line("Enter your choice: ")? {
                Input::Line(line) => line,
                Input::Interrupted => {
                    writeln!(self.out, "^C")?;
                    continue;
                }
                Input::Eof => return self.abandon(),
            };
            if choice.trim().is_empty() {
                continue;
            }

            let flow = match choice.parse::<MenuChoice>() {
                Ok(choice) => {
                    debug!(?choice, "Menu choice");
                    self.dispatch(choice)?
                }
                Err(_) => {
                    writeln!(self.out, "{}", "Invalid choice. Please try again.".red())?;
                    Flow::Continue
                }
            };

            if let Flow::Exit(end) = flow {
                return Ok(end);
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Create => self.create(),
            MenuChoice::Search => self.search(),
            MenuChoice::Edit => self.edit(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::List => {
                self.list()?;
                Ok(Flow::Continue)
            }
            MenuChoice::SaveAndExit => self.save_and_exit(),
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "Address Book Menu:".bright_cyan().bold())?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Answer> {
        Ok(match self.input.read_line(prompt)? {
            Input::Line(line) => Answer::Text(line.trim().to_string()),
            Input::Interrupted => Answer::Cancelled,
            Input::Eof => Answer::Closed,
        })
    }

    fn create(&mut self) -> Result<Flow> {
        let mut fields = Vec::with_capacity(3);
        for prompt in ["Enter name: ", "Enter phone: ", "Enter email: "] {
            match self.ask(prompt)? {
                Answer::Text(value) => fields.push(value),
                Answer::Cancelled => return self.cancelled(),
                Answer::Closed => return self.abandon().map(Flow::Exit),
            }
        }
        let [name, phone, email]: [String; 3] = fields
            .try_into()
            .map_err(|_| eyre::eyre!("Expected three contact fields"))?;

        match self.store.create(name, phone, email) {
            Ok(()) => {
                self.dirty = true;
                writeln!(self.out, "{} Contact added ({} total)", "✓".green(), self.store.len())?;
            }
            Err(e) => writeln!(self.out, "{} {}", "Error:".red(), e)?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let field = match self.ask("Search by name, phone, email or any [name]: ")? {
            Answer::Text(text) if text.is_empty() => SearchField::Name,
            Answer::Text(text) => match text.parse::<SearchField>() {
                Ok(field) => field,
                Err(e) => {
                    writeln!(self.out, "{} {}", "Error:".red(), e)?;
                    return Ok(Flow::Continue);
                }
            },
            Answer::Cancelled => return self.cancelled(),
            Answer::Closed => return self.abandon().map(Flow::Exit),
        };
        let query = match self.ask(&format!("Enter {} to search: ", field))? {
            Answer::Text(text) => text,
            Answer::Cancelled => return self.cancelled(),
            Answer::Closed => return self.abandon().map(Flow::Exit),
        };

        let hits = self.store.search_indexed(&query, field);
        if hits.is_empty() {
            writeln!(self.out, "No contacts found.")?;
        } else {
            writeln!(self.out, "Found {} contact(s):", hits.len())?;
            for (position, contact) in hits {
                writeln!(self.out, "{:>4}  {}", format!("#{}", position + 1).yellow(), contact)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn edit(&mut self) -> Result<Flow> {
        let selector = match self.ask_selector("Contact to edit (name or #N): ")? {
            Ok(Some(selector)) => selector,
            Ok(None) => return Ok(Flow::Continue),
            Err(flow) => return Ok(flow),
        };
        let Some(position) = self.store.find(&selector) else {
            writeln!(self.out, "{} No contact matches {}", "Error:".red(), selector)?;
            return Ok(Flow::Continue);
        };
        let current: Contact = self.store.list()[position].clone();
        writeln!(self.out, "Editing #{}  {}", position + 1, current)?;

        let mut update = ContactUpdate::new();
        let prompts = [
            format!("New name [{}]: ", current.name),
            format!("New phone [{}]: ", current.phone),
            format!("New email [{}]: ", current.email),
        ];
        for (i, prompt) in prompts.iter().enumerate() {
            let value = match self.ask(prompt)? {
                Answer::Text(text) if text.is_empty() => continue,
                Answer::Text(text) => text,
                Answer::Cancelled => return self.cancelled(),
                Answer::Closed => return self.abandon().map(Flow::Exit),
            };
            update = match i {
                0 => update.name(value),
                1 => update.phone(value),
                _ => update.email(value),
            };
        }

        if update.is_empty() {
            writeln!(self.out, "Nothing changed.")?;
            return Ok(Flow::Continue);
        }

        match self.store.edit(&Selector::Position(position), &update) {
            Ok(contact) => {
                let shown = contact.to_string();
                self.dirty = true;
                writeln!(self.out, "{} Contact updated: {}", "✓".green(), shown)?;
            }
            Err(e) => writeln!(self.out, "{} {}", "Error:".red(), e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let selector = match self.ask_selector("Contact to delete (name or #N): ")? {
            Ok(Some(selector)) => selector,
            Ok(None) => return Ok(Flow::Continue),
            Err(flow) => return Ok(flow),
        };

        match self.store.delete(&selector) {
            Ok(removed) => {
                self.dirty = true;
                writeln!(self.out, "{} Deleted: {}", "✓".green(), removed)?;
            }
            Err(e) => writeln!(self.out, "{} {}", "Error:".red(), e)?,
        }
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> Result<()> {
        if self.store.is_empty() {
            writeln!(self.out, "No contacts.")?;
            return Ok(());
        }

        writeln!(self.out, "{:>4}  {:<20} {:<15} {}", "", "Name".bold(), "Phone".bold(), "Email".bold())?;
        for (i, contact) in self.store.iter().enumerate() {
            writeln!(self.out, "{:>4}  {}", format!("#{}", i + 1), contact)?;
        }
        match self.store.capacity() {
            Some(capacity) => writeln!(self.out, "{}", format!("{} of {} slots used", self.store.len(), capacity).dimmed())?,
            None => writeln!(self.out, "{}", format!("{} contact(s)", self.store.len()).dimmed())?,
        }
        Ok(())
    }

    fn save_and_exit(&mut self) -> Result<Flow> {
        match self.store.save(&self.store_path) {
            Ok(()) => {
                self.dirty = false;
                writeln!(self.out, "Saving and Exiting...")?;
                Ok(Flow::Exit(SessionEnd::Saved))
            }
            Err(e) => {
                warn!(error = %e, "Save failed");
                writeln!(self.out, "{} {}", "Save failed:".red(), e)?;
                writeln!(self.out, "Your contacts are still in memory. Choose 6 to try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Ask for a selector. `Ok(None)` means it was invalid and already
    /// reported; `Err(flow)` means the action was interrupted.
    fn ask_selector(&mut self, prompt: &str) -> Result<std::result::Result<Option<Selector>, Flow>> {
        let text = match self.ask(prompt)? {
            Answer::Text(text) => text,
            Answer::Cancelled => return Ok(Err(self.cancelled()?)),
            Answer::Closed => return Ok(Err(Flow::Exit(self.abandon()?))),
        };
        match text.parse::<Selector>() {
            Ok(selector) => Ok(Ok(Some(selector))),
            Err(e) => {
                writeln!(self.out, "{} {}", "Error:".red(), e)?;
                Ok(Ok(None))
            }
        }
    }

    fn cancelled(&mut self) -> Result<Flow> {
        writeln!(self.out, "{}", "Cancelled.".dimmed())?;
        Ok(Flow::Continue)
    }

    fn abandon(&mut self) -> Result<SessionEnd> {
        writeln!(self.out)?;
        if self.dirty {
            warn!("Input closed with unsaved changes");
            writeln!(self.out, "{}", "Input closed; unsaved changes were discarded.".yellow())?;
        } else {
            writeln!(self.out, "Input closed; nothing to save.")?;
        }
        Ok(SessionEnd::Abandoned)
    }
}
