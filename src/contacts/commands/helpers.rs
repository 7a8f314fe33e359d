use crate::commands::{CmdMessage, CmdResult};
use crate::model::Contact;
use crate::store::DataStore;

/// Writes the full collection back and records the outcome on `result`.
///
/// A failed write is reported, not returned: the in-memory collection stays
/// as it is and the session carries on.
pub fn persist<S: DataStore>(store: &mut S, contacts: &[Contact], result: &mut CmdResult) {
    match store.save(contacts) {
        Ok(()) => result.add_message(CmdMessage::success("Contacts saved successfully.")),
        Err(e) => result.add_message(CmdMessage::error(format!(
            "Error saving contacts: {}",
            e
        ))),
    }
}
