use super::contact::{Contact, ContactPatch, first_match};
use crate::errors::AppError;
use crate::store::ContactStore;
use std::sync::{Mutex, MutexGuard};

/// Contact book operations over an injected [`ContactStore`].
///
/// Every operation reads the whole collection from the store, applies at
/// most one change and, for changes, writes the whole collection back.
/// The write lock is held for the full cycle so two requests in the same
/// process cannot overwrite each other's changes.
pub struct ContactBook {
    storage: Box<dyn ContactStore>,
    write_lock: Mutex<()>,
}

impl ContactBook {
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    pub fn medium(&self) -> &str {
        self.storage.get_medium()
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>, AppError> {
        Ok(self.write_lock.lock()?)
    }

    pub fn list(&self) -> Result<Vec<Contact>, AppError> {
        let _guard = self.lock()?;
        self.storage.load()
    }

    pub fn create(&self, contact: Contact) -> Result<Contact, AppError> {
        let _guard = self.lock()?;
        let mut contacts = self.storage.load()?;

        contacts.push(contact.clone());
        self.storage.save(&contacts)?;

        tracing::info!(name = %contact.name, "contact added");
        Ok(contact)
    }

    pub fn search(&self, name: &str) -> Result<Contact, AppError> {
        let _guard = self.lock()?;
        let contacts = self.storage.load()?;

        contacts
            .into_iter()
            .find(|c| c.name_matches(name))
            .ok_or_else(|| not_found(name))
    }

    /// Removes the first contact matching `name` and returns it.
    pub fn delete(&self, name: &str) -> Result<Contact, AppError> {
        let _guard = self.lock()?;
        let mut contacts = self.storage.load()?;

        let index = first_match(&contacts, name).ok_or_else(|| not_found(name))?;
        let removed = contacts.remove(index);
        self.storage.save(&contacts)?;

        tracing::info!(name = %removed.name, "contact deleted");
        Ok(removed)
    }

    /// Applies `patch` to the first contact matching `name` and returns the
    /// updated contact.
    pub fn update(&self, name: &str, patch: ContactPatch) -> Result<Contact, AppError> {
        let _guard = self.lock()?;
        let mut contacts = self.storage.load()?;

        let index = first_match(&contacts, name).ok_or_else(|| not_found(name))?;
        contacts[index].apply(patch);
        self.storage.save(&contacts)?;

        let updated = contacts.swap_remove(index);
        tracing::info!(name = %updated.name, "contact updated");
        Ok(updated)
    }
}

fn not_found(name: &str) -> AppError {
    AppError::NotFound(format!("Contact '{}'", name))
}
