use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ContactsError, Result};
use crate::index::index_contacts;
use crate::model::Contact;

/// Matches keep their position index from the full listing.
pub fn run(contacts: &[Contact], term: &str) -> Result<CmdResult> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Err(ContactsError::Validation(
            "Search term cannot be empty.".to_string(),
        ));
    }

    let matches: Vec<_> = index_contacts(contacts)
        .into_iter()
        .filter(|dc| dc.contact.matches(&term))
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No contacts found matching '{}'.",
            term
        )));
    }
    Ok(result.with_listed_contacts(matches))
}
