//! Address book - menu-driven contact manager
//!
//! Keeps a bounded, ordered list of contacts in memory and persists it to a
//! flat comma-delimited file. The file is read once at startup and written
//! once, when the user chooses "Save and Exit".
//!
//! # File format
//!
//! ```text
//! Ann,555-1111,ann@x.com
//! Bob,555-2222,bob@x.com
//! ```
//!
//! No header and no quoting: a field containing a comma does not survive a
//! save and reload.
//!
//! # Example
//!
//! ```no_run
//! use addressbook::{ContactStore, SearchField};
//!
//! let mut store = ContactStore::load("contacts.csv", Some(addressbook::DEFAULT_CAPACITY));
//! store.create("Ann", "555-1111", "ann@x.com")?;
//! let hits = store.search("Ann", SearchField::Name);
//! assert_eq!(hits.len(), 1);
//! store.save("contacts.csv")?;
//! # Ok::<(), addressbook::StoreError>(())
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod menu;
pub mod store;

pub use config::Config;
pub use domain::{Contact, ContactUpdate, SearchField, Selector};
pub use menu::{MenuSession, SessionEnd};
pub use store::{ContactStore, LineError, LoadReport, SkippedLine, StoreError};

/// Default maximum number of contacts
pub const DEFAULT_CAPACITY: usize = 100;

/// Default contacts file, relative to the working directory
pub const DEFAULT_STORE_FILE: &str = "contacts.csv";
