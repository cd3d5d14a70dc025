//! ContactStore: the in-memory address book
//!
//! Contacts are kept in insertion order in a `Vec`. Deleting shifts later
//! contacts down one position, so order is always the order of creation
//! minus whatever was removed.
//!
//! Nothing here touches the disk except [`ContactStore::load`] and
//! [`ContactStore::save`]; callers decide when to persist.

pub mod codec;
mod error;
mod file;

pub use error::{LineError, StoreError};
pub use file::{LoadReport, SkippedLine};

use tracing::debug;

use crate::domain::{Contact, ContactUpdate, SearchField, Selector};

/// Ordered, optionally bounded collection of contacts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    /// Maximum number of contacts; `None` is unbounded
    capacity: Option<usize>,
}

impl ContactStore {
    /// Create an empty, unbounded store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store holding at most `capacity` contacts
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            contacts: Vec::with_capacity(capacity.unwrap_or_default().min(crate::DEFAULT_CAPACITY)),
            capacity,
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Whether another create would exceed capacity
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.contacts.len() >= cap)
    }

    /// Append a new contact at the end
    pub fn create(
        &mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.push(Contact::new(name, phone, email))
    }

    /// Append an already-built contact at the end
    pub fn push(&mut self, contact: Contact) -> Result<(), StoreError> {
        if let Some(capacity) = self.capacity
            && self.contacts.len() >= capacity
        {
            return Err(StoreError::CapacityExceeded { capacity });
        }
        if !contact.has_name() {
            return Err(StoreError::EmptyName);
        }

        debug!(name = %contact.name, position = self.contacts.len(), "Created contact");
        self.contacts.push(contact);
        Ok(())
    }

    /// All contacts whose `field` contains `query`, in store order
    pub fn search(&self, query: &str, field: SearchField) -> Vec<&Contact> {
        self.search_indexed(query, field).into_iter().map(|(_, c)| c).collect()
    }

    /// Like [`search`](Self::search), paired with each hit's position
    pub fn search_indexed(&self, query: &str, field: SearchField) -> Vec<(usize, &Contact)> {
        self.contacts
            .iter()
            .enumerate()
            .filter(|(_, contact)| field.matches(contact, query))
            .collect()
    }

    /// Position of the first contact the selector picks
    pub fn find(&self, selector: &Selector) -> Option<usize> {
        self.contacts
            .iter()
            .enumerate()
            .position(|(position, contact)| selector.accepts(position, contact))
    }

    /// Overwrite the supplied fields of the first matching contact in place
    pub fn edit(&mut self, selector: &Selector, update: &ContactUpdate) -> Result<&Contact, StoreError> {
        let position = self.find(selector).ok_or_else(|| StoreError::NotFound {
            selector: selector.clone(),
        })?;
        if !update.keeps_name() {
            return Err(StoreError::EmptyName);
        }

        let contact = &mut self.contacts[position];
        contact.apply(update);
        debug!(position, name = %contact.name, "Edited contact");
        Ok(contact)
    }

    /// Remove the first matching contact, shifting later ones down
    pub fn delete(&mut self, selector: &Selector) -> Result<Contact, StoreError> {
        let position = self.find(selector).ok_or_else(|| StoreError::NotFound {
            selector: selector.clone(),
        })?;

        let removed = self.contacts.remove(position);
        debug!(position, name = %removed.name, "Deleted contact");
        Ok(removed)
    }

    /// Every contact, in store order
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }
}

impl<'a> IntoIterator for &'a ContactStore {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
