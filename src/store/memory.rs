use super::*;
use std::sync::RwLock;

/// Keeps the contact book in process memory. Nothing survives a restart.
pub struct MemStore {
    pub medium: String,
    data: RwLock<Vec<Contact>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::with_contacts(Vec::new())
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            medium: "mem".to_string(),
            data: RwLock::new(contacts),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.read()?.clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.write()? = contacts.to_vec();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
