use super::*;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Read, Write};

pub const JSON_STORAGE_PATH: &str = "contacts.json";

const INDENT: &[u8] = b"    ";

pub struct JsonStore {
    pub medium: String,
    pub path: String,
}

impl JsonStore {
    pub fn new(path: &str) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.to_string(),
        }
    }
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new(JSON_STORAGE_PATH)
    }
}

impl ContactStore for JsonStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        // A missing file is an empty contact book
        let mut file = match OpenOptions::new().read(true).open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut data = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut data, PrettyFormatter::with_indent(INDENT));
        contacts.serialize(&mut serializer)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        file.write_all(&data)?;

        tracing::debug!(path = %self.path, count = contacts.len(), "saved contacts");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
