use serde::{Deserialize, Serialize};

/// A single entry in the contact book.
///
/// Field order here is the field order on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    // Older files may omit the email entirely
    #[serde(default)]
    pub email: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// `term` must already be trimmed and lower-cased.
    pub fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term) || self.phone.contains(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_name_case_insensitively() {
        let contact = Contact::new("Alice Smith", "123-4567", "");
        assert!(contact.matches("smith"));
        assert!(contact.matches("alice s"));
        assert!(!contact.matches("bob"));
    }

    #[test]
    fn matches_phone_substring() {
        let contact = Contact::new("Alice", "555-0199", "");
        assert!(contact.matches("0199"));
        assert!(!contact.matches("0200"));
    }

    #[test]
    fn phone_is_compared_against_the_folded_term() {
        // Callers fold the term, so letters in a phone only match in lower case
        let contact = Contact::new("Taxi", "555-CALL", "");
        assert!(!contact.matches("call"));
        assert!(contact.matches("555-"));
        let lower = Contact::new("Taxi", "555-call", "");
        assert!(lower.matches("call"));
    }

    #[test]
    fn missing_email_deserializes_as_empty() {
        let contact: Contact = serde_json::from_str(r#"{"name":"A","phone":"1"}"#).unwrap();
        assert_eq!(contact, Contact::new("A", "1", ""));
    }

    #[test]
    fn missing_phone_is_rejected() {
        let parsed: Result<Contact, _> = serde_json::from_str(r#"{"name":"A"}"#);
        assert!(parsed.is_err());
    }
}
