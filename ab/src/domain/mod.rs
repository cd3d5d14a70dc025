//! Domain types for the address book
//!
//! A [`Contact`] has no identity beyond its position; [`Selector`] and
//! [`SearchField`] describe how callers find one.

mod contact;
mod selector;

pub use contact::{Contact, ContactUpdate};
pub use selector::{SearchField, Selector};

pub(crate) use contact::is_present;
