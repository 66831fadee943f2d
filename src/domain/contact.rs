use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Partial update for a stored contact.
///
/// Fields left out of the request body (or sent as `null`) keep the
/// stored value.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Contact {
    pub fn new(name: String, phone: String, email: String) -> Self {
        Contact { name, phone, email }
    }

    /// Case-insensitive name comparison. Stored casing is left untouched.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn apply(&mut self, patch: ContactPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

/// Index of the first contact whose name matches, in stored order.
pub fn first_match(contacts: &[Contact], name: &str) -> Option<usize> {
    contacts.iter().position(|c| c.name_matches(name))
}
