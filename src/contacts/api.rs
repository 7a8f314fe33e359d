//! # API Facade
//!
//! [`ContactBook`] is the single entry point for contact operations. It owns
//! the in-memory collection and the storage backend, and hands both to the
//! command functions.
//!
//! ## Role and Responsibilities
//!
//! - **Owns state**: the collection lives here for the whole session; there is
//!   no global list
//! - **Loads once**: [`ContactBook::open`] is the only place that reads storage
//! - **Normalizes inputs**: raw prompt text is turned into a [`DeleteSelector`]
//!   before it reaches the delete command
//!
//! Like the commands beneath it, the facade never prints. Everything a UI needs
//! to show comes back in a [`CmdResult`].
//!
//! ## Generic Over DataStore
//!
//! - Production: `ContactBook<FileStore>`
//! - Testing: `ContactBook<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::index::DeleteSelector;
use crate::model::Contact;
use crate::store::DataStore;

pub struct ContactBook<S: DataStore> {
    store: S,
    contacts: Vec<Contact>,
}

impl<S: DataStore> ContactBook<S> {
    /// Builds the book from whatever `store` holds. Load problems are reported
    /// in the returned result and leave the book empty.
    pub fn open(store: S) -> (Self, commands::CmdResult) {
        let (contacts, result) = commands::load::run(&store);
        (Self { store, contacts }, result)
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        email: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &mut self.contacts, name, phone, email)
    }

    pub fn view_contacts(&self) -> commands::CmdResult {
        commands::list::run(&self.contacts)
    }

    pub fn search_contacts(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.contacts, term)
    }

    pub fn delete_contact(&mut self, input: &str) -> Result<commands::CmdResult> {
        let selector: DeleteSelector = input.parse()?;
        commands::delete::run(&mut self.store, &mut self.contacts, selector)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::index::{DisplayContact, CANCEL_SENTINEL};
