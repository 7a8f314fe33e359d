//! # Display Indexing
//!
//! Contacts carry no stable identifier. The only way a user can point at one is
//! by the 1-based number printed next to it in the most recent listing, which is
//! simply its position in the collection plus one.
//!
//! Because the numbers are positional, they shift after every delete: removing
//! `[2]` turns the old `[3]` into the new `[2]`. Commands therefore resolve an
//! index against the collection as it is *now*, never against a cached listing.
//!
//! The delete prompt accepts either such a number or the cancel sentinel (`c`),
//! which is what [`DeleteSelector`] models.

use crate::error::{ContactsError, Result};
use crate::model::Contact;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

pub const CANCEL_SENTINEL: &str = "c";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayContact {
    pub index: usize,
    pub contact: Contact,
}

impl fmt::Display for DisplayContact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | {} | {}",
            self.index, self.contact.name, self.contact.phone, self.contact.email
        )
    }
}

pub fn index_contacts(contacts: &[Contact]) -> Vec<DisplayContact> {
    contacts
        .iter()
        .enumerate()
        .map(|(pos, contact)| DisplayContact {
            index: pos + 1,
            contact: contact.clone(),
        })
        .collect()
}

/// What the user typed at the delete prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteSelector {
    Cancel,
    /// Raw 1-based number; may be zero or negative, bounds are checked on use.
    Index(i64),
}

impl DeleteSelector {
    /// Converts to a 0-based position, or `None` when it falls outside `len`.
    pub fn position(&self, len: usize) -> Option<usize> {
        match self {
            DeleteSelector::Cancel => None,
            DeleteSelector::Index(n) => {
                let pos = n.checked_sub(1)?;
                usize::try_from(pos).ok().filter(|p| *p < len)
            }
        }
    }
}

impl FromStr for DeleteSelector {
    type Err = ContactsError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(CANCEL_SENTINEL) {
            return Ok(DeleteSelector::Cancel);
        }
        s.parse::<i64>().map(DeleteSelector::Index).map_err(|e| match e.kind() {
            // Well-formed but too large to be any position in the book
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                ContactsError::IndexOutOfRange(s.to_string())
            }
            _ => ContactsError::InvalidIndex(s.to_string()),
        })
    }
}
