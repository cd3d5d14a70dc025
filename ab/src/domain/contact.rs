//! Contact record and partial updates

use serde::{Deserialize, Serialize};

/// A single address book entry
///
/// Contacts carry no identifier of their own; they are addressed by their
/// position in the store or by matching one of their fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Display name (required, non-blank)
    pub name: String,
    /// Phone number, free text
    pub phone: String,
    /// Email address, free text
    pub email: String,
}

impl Contact {
    /// Create a contact from its three fields, taken as-is
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Whether the name field is present
    pub fn has_name(&self) -> bool {
        is_present(&self.name)
    }

    /// Overwrite the fields supplied in `update`, leaving the rest alone
    pub fn apply(&mut self, update: &ContactUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(phone) = &update.phone {
            self.phone = phone.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
    }
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<20} {:<15} {}", self.name, self.phone, self.email)
    }
}

/// Field-level changes for an edit; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }

    /// False only when the update explicitly blanks the name
    pub fn keeps_name(&self) -> bool {
        self.name.as_deref().is_none_or(is_present)
    }
}

pub(crate) fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Contact {
        Contact::new("Ann", "555-1111", "ann@x.com")
    }

    #[test]
    fn test_apply_partial_update() {
        let mut contact = ann();
        contact.apply(&ContactUpdate::new().phone("555-9999"));

        assert_eq!(contact.name, "Ann");
        assert_eq!(contact.phone, "555-9999");
        assert_eq!(contact.email, "ann@x.com");
    }

    #[test]
    fn test_apply_empty_update_is_noop() {
        let mut contact = ann();
        let update = ContactUpdate::new();
        assert!(update.is_empty());

        contact.apply(&update);
        assert_eq!(contact, ann());
    }

    #[test]
    fn test_has_name() {
        assert!(ann().has_name());
        assert!(!Contact::new("", "1", "a@b").has_name());
        assert!(!Contact::new("   ", "1", "a@b").has_name());
    }

    #[test]
    fn test_keeps_name() {
        assert!(ContactUpdate::new().keeps_name());
        assert!(ContactUpdate::new().name("Bob").keeps_name());
        assert!(!ContactUpdate::new().name(" ").keeps_name());
    }

    #[test]
    fn test_display_contains_fields() {
        let shown = ann().to_string();
        assert!(shown.contains("Ann"));
        assert!(shown.contains("555-1111"));
        assert!(shown.contains("ann@x.com"));
    }

    #[test]
    fn test_contact_serde() {
        let json = serde_json::to_string(&ann()).unwrap();
        assert_eq!(json, r#"{"name":"Ann","phone":"555-1111","email":"ann@x.com"}"#);
    }
}
