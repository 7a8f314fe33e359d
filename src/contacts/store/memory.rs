use super::DataStore;
use crate::error::{ContactsError, Result};
use crate::model::Contact;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contacts: Option<Vec<Contact>>,
    corrupt: bool,
    fail_saves: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Some(contacts),
            ..Self::default()
        }
    }

    /// Number of successful `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn stored(&self) -> Option<&[Contact]> {
        self.contacts.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<Vec<Contact>>> {
        if self.corrupt {
            let err = <serde_json::Error as serde::de::Error>::custom("simulated corrupt data");
            return Err(ContactsError::Serialization(err));
        }
        Ok(self.contacts.clone())
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        if self.fail_saves {
            return Err(ContactsError::Store("simulated write failure".to_string()));
        }
        self.contacts = Some(contacts.to_vec());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            let mut contacts = self.store.contacts.take().unwrap_or_default();
            for i in 0..count {
                contacts.push(Contact::new(
                    format!("Contact {}", i + 1),
                    format!("555-{:04}", i + 1),
                    format!("contact{}@example.com", i + 1),
                ));
            }
            self.store.contacts = Some(contacts);
            self
        }

        pub fn with_contact(mut self, name: &str, phone: &str, email: &str) -> Self {
            let mut contacts = self.store.contacts.take().unwrap_or_default();
            contacts.push(Contact::new(name, phone, email));
            self.store.contacts = Some(contacts);
            self
        }

        pub fn corrupt(mut self) -> Self {
            self.store.corrupt = true;
            self
        }

        pub fn failing_saves(mut self) -> Self {
            self.store.fail_saves = true;
            self
        }
    }
}
