use super::DataStore;
use crate::error::{ContactsError, Result};
use crate::model::Contact;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "contacts.txt";

const INDENT: &[u8] = b"    ";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        dir.join(format!(".contacts-{}.tmp", Uuid::new_v4()))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

pub fn to_json(contacts: &[Contact]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    contacts
        .serialize(&mut ser)
        .map_err(ContactsError::Serialization)?;
    Ok(buf)
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<Vec<Contact>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(ContactsError::Io)?;
        if content.is_empty() {
            return Ok(None);
        }
        let contacts: Vec<Contact> =
            serde_json::from_str(&content).map_err(ContactsError::Serialization)?;
        Ok(Some(contacts))
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        let content = to_json(contacts)?;

        // Atomic write; a failure at either step must not leave the tmp file behind
        let tmp_path = self.tmp_path();
        let written =
            fs::write(&tmp_path, content).and_then(|()| fs::rename(&tmp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(ContactsError::Io(e));
        }

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
