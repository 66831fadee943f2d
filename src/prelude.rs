pub use crate::cli::{command, run_app};
pub use crate::domain::{
    ContactBook,
    contact::{self, Contact, ContactPatch},
};
pub use crate::errors::AppError;
pub use crate::server::{self, router, serve};
pub use crate::store::{self, ContactStore, JsonStore, MemStore, StorageMediums};
