//! # Session Controller
//!
//! [`Logic`] owns the session: the address book, the storage it is persisted
//! to and the listings last shown to the user.
//!
//! Each input line goes through the same steps:
//!
//! 1. parse the line into a [`Command`]
//! 2. execute it against the book and the last-shown listings
//! 3. save the book, whatever the command's outcome
//! 4. remember any listing the result carries, for later index lookups
//!
//! Domain errors from step 2 become feedback. A save failure from step 3 is
//! returned as `Err`; the book keeps the change that was just made.

use crate::book::AddressBook;
use crate::commands::{CmdResult, Command, CommandContext};
use crate::error::Result;
use crate::index::LastShown;
use crate::parser;
use crate::store::Storage;
use log::debug;

pub struct Logic<S: Storage> {
    storage: S,
    book: AddressBook,
    last_shown: LastShown,
}

impl<S: Storage> Logic<S> {
    /// Starts a session with whatever `storage` currently holds.
    pub fn new(storage: S) -> Result<Self> {
        let book = storage.load()?;
        Ok(Self::with_book(storage, book))
    }

    pub fn with_book(storage: S, book: AddressBook) -> Self {
        Self {
            storage,
            book,
            last_shown: LastShown::default(),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn last_shown(&self) -> &LastShown {
        &self.last_shown
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_location(&self) -> String {
        self.storage.location()
    }

    /// Runs one line of user input.
    pub fn execute(&mut self, input: &str) -> Result<CmdResult> {
        let command = parser::parse(input);
        debug!("executing {}", command.word());
        let result = self.run(&command)?;
        self.storage.save(&self.book)?;
        self.record_listings(&result);
        Ok(result)
    }

    fn run(&mut self, command: &Command) -> Result<CmdResult> {
        let ctx = CommandContext::new(&mut self.book, &self.last_shown);
        match command.execute(ctx) {
            Ok(result) => Ok(result),
            Err(err) if err.is_domain() => {
                debug!("{} failed: {}", command.word(), err);
                Ok(CmdResult::from_error(&err))
            }
            Err(err) => Err(err),
        }
    }

    fn record_listings(&mut self, result: &CmdResult) {
        if let Some(persons) = &result.listed_persons {
            self.last_shown.persons = persons.clone();
        }
        if let Some(tags) = &result.listed_tags {
            self.last_shown.tags = tags.clone();
        }
    }
}
