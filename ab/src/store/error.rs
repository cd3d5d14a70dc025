//! Store error types

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Selector;

/// Errors returned by [`ContactStore`](super::ContactStore) operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No contact matches {selector}")]
    NotFound { selector: Selector },

    #[error("Address book is full ({capacity} contacts)")]
    CapacityExceeded { capacity: usize },

    #[error("Contact name must not be empty")]
    EmptyName,

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a line of the contacts file was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected 3 fields, found {found}")]
    FieldCount { found: usize },

    #[error("name field is empty")]
    EmptyName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::NotFound {
            selector: Selector::name("Zed"),
        };
        assert!(err.to_string().contains("'Zed'"));

        let err = StoreError::NotFound {
            selector: Selector::Position(4),
        };
        assert!(err.to_string().contains("#5"));
    }

    #[test]
    fn test_capacity_message() {
        let err = StoreError::CapacityExceeded { capacity: 100 };
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn test_write_error_keeps_source() {
        let err = StoreError::Write {
            path: PathBuf::from("/nope/contacts.csv"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        let msg = err.to_string();
        assert!(msg.contains("/nope/contacts.csv"));
        assert!(msg.contains("denied"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_line_error_message() {
        assert_eq!(LineError::FieldCount { found: 2 }.to_string(), "expected 3 fields, found 2");
    }
}
