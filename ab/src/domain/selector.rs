//! Matching rules used by search, edit and delete

use super::Contact;

/// Which contact field a query is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Name,
    Phone,
    Email,
    /// Matches when any of the three fields matches
    Any,
}

impl SearchField {
    /// Case-sensitive substring match of `query` against this field.
    ///
    /// An empty query never matches.
    pub fn matches(&self, contact: &Contact, query: &str) -> bool {
        if query.is_empty() {
            return false;
        }
        match self {
            Self::Name => contact.name.contains(query),
            Self::Phone => contact.phone.contains(query),
            Self::Email => contact.email.contains(query),
            Self::Any => [&contact.name, &contact.phone, &contact.email]
                .iter()
                .any(|value| value.contains(query)),
        }
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Phone => write!(f, "phone"),
            Self::Email => write!(f, "email"),
            Self::Any => write!(f, "any"),
        }
    }
}

impl std::str::FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "n" => Ok(Self::Name),
            "phone" | "p" => Ok(Self::Phone),
            "email" | "e" => Ok(Self::Email),
            "any" | "a" => Ok(Self::Any),
            _ => Err(format!("Unknown field: {}. Use: name, phone, email, or any", s)),
        }
    }
}

/// Locates one contact for edit or delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Zero-based position in list order
    Position(usize),
    /// First contact whose `field` matches `query`
    Matching { field: SearchField, query: String },
}

impl Selector {
    /// Select by name substring
    pub fn name(query: impl Into<String>) -> Self {
        Self::Matching {
            field: SearchField::Name,
            query: query.into(),
        }
    }

    /// Whether the contact at `position` is the one this selector picks,
    /// given that no earlier contact matched
    pub fn accepts(&self, position: usize, contact: &Contact) -> bool {
        match self {
            Self::Position(p) => *p == position,
            Self::Matching { field, query } => field.matches(contact, query),
        }
    }
}

/// `#N` (one-based, as `list` prints it) selects a position; anything else
/// is a name match.
impl std::str::FromStr for Selector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Selector must not be empty".to_string());
        }
        if let Some(number) = s.strip_prefix('#') {
            let n: usize = number
                .trim()
                .parse()
                .map_err(|_| format!("Invalid position: {}", s))?;
            if n == 0 {
                return Err("Positions start at #1".to_string());
            }
            return Ok(Self::Position(n - 1));
        }
        Ok(Self::name(s))
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Position(p) => write!(f, "#{}", p + 1),
            Self::Matching { field, query } => write!(f, "{} containing '{}'", field, query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> Contact {
        Contact::new("Bob Stone", "555-2222", "bob@x.com")
    }

    #[test]
    fn test_field_matches_substring() {
        assert!(SearchField::Name.matches(&bob(), "Bob"));
        assert!(SearchField::Name.matches(&bob(), "Stone"));
        assert!(SearchField::Phone.matches(&bob(), "2222"));
        assert!(SearchField::Email.matches(&bob(), "@x."));
        assert!(!SearchField::Name.matches(&bob(), "555"));
    }

    #[test]
    fn test_field_matches_case_sensitive() {
        assert!(!SearchField::Name.matches(&bob(), "bob"));
        assert!(SearchField::Email.matches(&bob(), "bob"));
    }

    #[test]
    fn test_any_field() {
        assert!(SearchField::Any.matches(&bob(), "Stone"));
        assert!(SearchField::Any.matches(&bob(), "555"));
        assert!(SearchField::Any.matches(&bob(), "x.com"));
        assert!(!SearchField::Any.matches(&bob(), "Ann"));
    }

    #[test]
    fn test_empty_query_never_matches() {
        for field in [SearchField::Name, SearchField::Phone, SearchField::Email, SearchField::Any] {
            assert!(!field.matches(&bob(), ""));
        }
    }

    #[test]
    fn test_field_parse() {
        assert_eq!("name".parse::<SearchField>().unwrap(), SearchField::Name);
        assert_eq!("PHONE".parse::<SearchField>().unwrap(), SearchField::Phone);
        assert_eq!(" e ".parse::<SearchField>().unwrap(), SearchField::Email);
        assert_eq!("any".parse::<SearchField>().unwrap(), SearchField::Any);
        assert!("address".parse::<SearchField>().is_err());
    }

    #[test]
    fn test_selector_parse_position() {
        assert_eq!("#1".parse::<Selector>().unwrap(), Selector::Position(0));
        assert_eq!("# 12".parse::<Selector>().unwrap(), Selector::Position(11));
        assert!("#0".parse::<Selector>().is_err());
        assert!("#x".parse::<Selector>().is_err());
    }

    #[test]
    fn test_selector_parse_name() {
        assert_eq!(" Bob ".parse::<Selector>().unwrap(), Selector::name("Bob"));
        assert!("   ".parse::<Selector>().is_err());
    }

    #[test]
    fn test_selector_display() {
        assert_eq!(Selector::Position(2).to_string(), "#3");
        assert_eq!(Selector::name("Bob").to_string(), "name containing 'Bob'");
    }

    #[test]
    fn test_selector_accepts() {
        assert!(Selector::Position(1).accepts(1, &bob()));
        assert!(!Selector::Position(1).accepts(0, &bob()));
        assert!(Selector::name("Bob").accepts(7, &bob()));
        assert!(!Selector::name("Ann").accepts(0, &bob()));
    }
}
