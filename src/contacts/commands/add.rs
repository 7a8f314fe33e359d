use crate::commands::helpers::persist;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ContactsError, Result};
use crate::model::Contact;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    store: &mut S,
    contacts: &mut Vec<Contact>,
    name: &str,
    phone: &str,
    email: &str,
) -> Result<CmdResult> {
    let (name, phone, email) = (name.trim(), phone.trim(), email.trim());

    if name.is_empty() || phone.is_empty() {
        return Err(ContactsError::Validation(
            "Name and Phone are required fields. Contact not added.".to_string(),
        ));
    }

    let contact = Contact::new(name, phone, email);
    contacts.push(contact.clone());

    let mut result = CmdResult::default().with_affected_contacts(vec![contact]);
    result.add_message(CmdMessage::success(format!("Contact added: {}", name)));
    persist(store, contacts, &mut result);
    Ok(result)
}
