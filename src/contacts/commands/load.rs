use crate::commands::{CmdMessage, CmdResult};
use crate::error::ContactsError;
use crate::model::Contact;
use crate::store::DataStore;

/// Reads the stored collection. Never fails: every problem becomes a message
/// and an empty collection.
pub fn run<S: DataStore>(store: &S) -> (Vec<Contact>, CmdResult) {
    let mut result = CmdResult::default();
    let location = store.location();

    let contacts = match store.load() {
        Ok(Some(contacts)) => {
            result.add_message(CmdMessage::info(format!(
                "Loaded {} contacts.",
                contacts.len()
            )));
            contacts
        }
        Ok(None) => {
            result.add_message(CmdMessage::info(format!(
                "File '{}' not found or empty. Starting with no contacts.",
                location
            )));
            Vec::new()
        }
        Err(ContactsError::Serialization(_)) => {
            result.add_message(CmdMessage::warning(format!(
                "Could not read valid JSON from {}. Data might be corrupted.",
                location
            )));
            Vec::new()
        }
        Err(e) => {
            result.add_message(CmdMessage::error(format!(
                "An unexpected error occurred while loading: {}",
                e
            )));
            Vec::new()
        }
    };

    (contacts, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::fs::FileStore;
    use crate::store::memory::fixtures::StoreFixture;
    use std::fs;

    #[test]
    fn loads_stored_contacts_in_order() {
        let store = StoreFixture::new()
            .with_contact("Alice", "1", "")
            .with_contact("Bob", "2", "")
            .store;
        let (contacts, result) = run(&store);

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].name, "Alice");
        assert_eq!(contacts[1].name, "Bob");
        assert_eq!(result.messages[0].content, "Loaded 2 contacts.");
    }

    #[test]
    fn nothing_stored_is_informational() {
        let store = StoreFixture::new().store;
        let (contacts, result) = run(&store);

        assert!(contacts.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn corrupt_data_warns_and_starts_empty() {
        let store = StoreFixture::new().with_contacts(3).corrupt().store;
        let (contacts, result) = run(&store);

        assert!(contacts.is_empty());
        assert!(result.has_level(MessageLevel::Warning));
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("contacts.txt"));
        let (contacts, result) = run(&store);

        assert!(contacts.is_empty());
        assert!(result.messages[0].content.contains("not found or empty"));
    }

    #[test]
    fn unreadable_path_is_reported_as_error() {
        // A directory exists at the path but cannot be read as a file
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.txt");
        fs::create_dir(&path).unwrap();
        let store = FileStore::new(path);
        let (contacts, result) = run(&store);

        assert!(contacts.is_empty());
        assert!(result.has_level(MessageLevel::Error));
    }
}
