use crate::commands::{CmdMessage, CmdResult};
use crate::index::index_contacts;
use crate::model::Contact;

pub fn run(contacts: &[Contact]) -> CmdResult {
    let mut result = CmdResult::default().with_listed_contacts(index_contacts(contacts));
    if contacts.is_empty() {
        result.add_message(CmdMessage::info("The contact book is empty"));
    }
    result
}
