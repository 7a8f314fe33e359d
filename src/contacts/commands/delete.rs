use crate::commands::helpers::persist;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ContactsError, Result};
use crate::index::DeleteSelector;
use crate::model::Contact;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    store: &mut S,
    contacts: &mut Vec<Contact>,
    selector: DeleteSelector,
) -> Result<CmdResult> {
    let number = match selector {
        DeleteSelector::Cancel => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info("Deletion cancelled."));
            return Ok(result);
        }
        DeleteSelector::Index(n) => n,
    };

    let pos = selector
        .position(contacts.len())
        .ok_or_else(|| ContactsError::IndexOutOfRange(number.to_string()))?;

    let removed = contacts.remove(pos);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted contact: {}",
        removed.name
    )));
    persist(store, contacts, &mut result);
    Ok(result.with_affected_contacts(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::store::memory::fixtures::StoreFixture;

    fn names(contacts: &[Contact]) -> Vec<&str> {
        contacts.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn removes_the_contact_shown_at_that_index() {
        let mut store = StoreFixture::new().store;
        let mut contacts = vec![
            Contact::new("A", "1", ""),
            Contact::new("B", "2", ""),
            Contact::new("C", "3", ""),
        ];
        let shown = list::run(&contacts).listed_contacts[1].contact.clone();

        let result = run(&mut store, &mut contacts, DeleteSelector::Index(2)).unwrap();

        assert_eq!(result.affected_contacts, vec![shown]);
        assert_eq!(names(&contacts), vec!["A", "C"]);
        assert_eq!(result.messages[0].content, "Deleted contact: B");
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.stored(), Some(contacts.as_slice()));
    }

    #[test]
    fn out_of_range_leaves_book_unchanged() {
        let mut store = StoreFixture::new().store;
        let mut contacts = vec![Contact::new("A", "1", "")];

        for n in [0, 2, -1] {
            let err = run(&mut store, &mut contacts, DeleteSelector::Index(n)).unwrap_err();
            assert!(matches!(err, ContactsError::IndexOutOfRange(got) if got == n.to_string()));
        }
        assert_eq!(names(&contacts), vec!["A"]);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn cancel_leaves_book_unchanged() {
        let mut store = StoreFixture::new().store;
        let mut contacts = vec![Contact::new("A", "1", "")];
        let result = run(&mut store, &mut contacts, DeleteSelector::Cancel).unwrap();

        assert_eq!(result.messages[0].content, "Deletion cancelled.");
        assert_eq!(contacts.len(), 1);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn duplicates_delete_one_at_a_time() {
        let mut store = StoreFixture::new().store;
        let mut contacts = vec![Contact::new("A", "1", ""), Contact::new("A", "1", "")];
        run(&mut store, &mut contacts, DeleteSelector::Index(1)).unwrap();
        assert_eq!(contacts.len(), 1);
    }
}
