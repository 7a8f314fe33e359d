//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the contact collection lives between
//! runs. The book reads it once at startup and writes it back in full after
//! every change; there are no per-record operations.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single JSON file
//!   - Pretty-printed array, 4-space indentation
//!   - Written to a temp file and renamed over the target
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Counts saves so tests can assert that nothing was written
//!   - Can simulate corrupt data and failing writes
//!
//! ## Load outcomes
//!
//! `load` distinguishes three cases the book reports differently:
//! - `Ok(None)`: nothing stored yet (missing or zero-length file)
//! - `Err(ContactsError::Serialization(_))`: stored data is corrupt
//! - `Err(_)` otherwise: the storage itself failed

use crate::error::Result;
use crate::model::Contact;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Read the whole collection, or `None` if nothing has been stored.
    fn load(&self) -> Result<Option<Vec<Contact>>>;

    /// Replace the stored collection with `contacts`.
    fn save(&mut self, contacts: &[Contact]) -> Result<()>;

    /// Human readable location, used in messages.
    fn location(&self) -> String;
}
