use crate::index::{DisplayIndex, ListingKind};
use std::path::PathBuf;
use thiserror::Error;

pub const MESSAGE_EXECUTE_LIST: &str =
    "\nExecute list to update your AddressBook or to check if your AddressBook is empty.\n";

#[derive(Error, Debug)]
pub enum AddressBookError {
    #[error("This person already exists in the address book")]
    DuplicatePerson,

    #[error("Person could not be found in address book{}", MESSAGE_EXECUTE_LIST)]
    PersonNotFound,

    #[error("Tag could not be found in address book")]
    TagNotFound(String),

    #[error("{message}")]
    InvalidFieldValue {
        field: &'static str,
        message: String,
    },

    #[error("Invalid tag name! {0}")]
    InvalidTagName(String),

    #[error("The {listing} index provided is invalid")]
    IndexOutOfRange {
        listing: ListingKind,
        index: DisplayIndex,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage file should end with '.json': {}", .0.display())]
    InvalidStoragePath(PathBuf),

    #[error("Storage data is corrupt: {0}")]
    CorruptData(String),
}

impl AddressBookError {
    /// Domain errors are reported back to the user as command feedback.
    /// Everything else is a persistence failure and must reach the caller.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            AddressBookError::DuplicatePerson
                | AddressBookError::PersonNotFound
                | AddressBookError::TagNotFound(_)
                | AddressBookError::InvalidFieldValue { .. }
                | AddressBookError::InvalidTagName(_)
                | AddressBookError::IndexOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AddressBookError>;
