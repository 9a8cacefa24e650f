//! # Storage
//!
//! The address book is persisted as a whole: [`Storage::load`] once at
//! startup, [`Storage::save`] after every executed command. Implementations
//! only move whole books in and out; every invariant lives in
//! [`crate::book`].
//!
//! - [`fs::JsonFileStorage`]: a single JSON file on disk.
//! - [`memory::InMemoryStorage`]: keeps the last saved book in memory, for tests.

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait Storage {
    /// Reads the stored book. A store that has never been saved to yields an empty book.
    fn load(&self) -> Result<AddressBook>;

    fn save(&mut self, book: &AddressBook) -> Result<()>;

    /// Human-readable location, shown at startup.
    fn location(&self) -> String;
}
