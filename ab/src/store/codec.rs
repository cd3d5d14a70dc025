//! Line format of the contacts file
//!
//! One contact per line as `name,phone,email`. There is no header and no
//! quoting, so a field that itself contains a comma or a line break cannot
//! be read back faithfully.

use super::LineError;
use crate::domain::{Contact, is_present};

/// Field separator
pub const DELIMITER: char = ',';

/// Parse one line (without its terminator) into a contact
pub fn parse_line(line: &str) -> Result<Contact, LineError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let [name, phone, email] = fields.as_slice() else {
        return Err(LineError::FieldCount { found: fields.len() });
    };

    if !is_present(name) {
        return Err(LineError::EmptyName);
    }

    Ok(Contact::new(*name, *phone, *email))
}

/// Render a contact as a line, without the trailing newline
pub fn format_line(contact: &Contact) -> String {
    format!(
        "{}{d}{}{d}{}",
        contact.name,
        contact.phone,
        contact.email,
        d = DELIMITER
    )
}

/// Whether writing this contact would produce a line that reads back differently
pub fn is_ambiguous(contact: &Contact) -> bool {
    [&contact.name, &contact.phone, &contact.email]
        .iter()
        .any(|field| field.contains([DELIMITER, '\n', '\r']))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let contact = parse_line("Ann,555-1111,ann@x.com").unwrap();
        assert_eq!(contact, Contact::new("Ann", "555-1111", "ann@x.com"));
    }

    #[test]
    fn test_parse_line_keeps_fields_verbatim() {
        let contact = parse_line("Ann Lee , 555 1111,").unwrap();
        assert_eq!(contact.name, "Ann Lee ");
        assert_eq!(contact.phone, " 555 1111");
        assert_eq!(contact.email, "");
    }

    #[test]
    fn test_parse_line_wrong_field_count() {
        assert_eq!(parse_line("Ann,555-1111"), Err(LineError::FieldCount { found: 2 }));
        assert_eq!(parse_line("Ann,5,a@x,extra"), Err(LineError::FieldCount { found: 4 }));
        assert_eq!(parse_line("just a name"), Err(LineError::FieldCount { found: 1 }));
    }

    #[test]
    fn test_parse_line_empty_name() {
        assert_eq!(parse_line(",555-1111,ann@x.com"), Err(LineError::EmptyName));
        assert_eq!(parse_line("  ,555-1111,ann@x.com"), Err(LineError::EmptyName));
    }

    #[test]
    fn test_format_line() {
        let contact = Contact::new("Bob", "555-2222", "bob@x.com");
        assert_eq!(format_line(&contact), "Bob,555-2222,bob@x.com");
    }

    #[test]
    fn test_comma_in_field_misparses() {
        let contact = Contact::new("Smith, John", "1", "j@x.com");
        assert!(is_ambiguous(&contact));
        assert!(parse_line(&format_line(&contact)).is_err());
    }

    #[test]
    fn test_plain_contact_is_not_ambiguous() {
        assert!(!is_ambiguous(&Contact::new("Ann", "555-1111", "ann@x.com")));
        assert!(is_ambiguous(&Contact::new("Ann", "555\n1111", "ann@x.com")));
    }
}
