use super::Storage;
use crate::book::AddressBook;
use crate::error::{AddressBookError, Result};
use std::io;

/// Keeps the most recently saved book in memory.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    saved: Option<AddressBook>,
    fail_saves: bool,
    save_count: usize,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts out as if `book` had already been saved.
    pub fn with_book(book: AddressBook) -> Self {
        Self {
            saved: Some(book),
            ..Self::default()
        }
    }

    /// Makes every following save fail with an I/O error.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn saved(&self) -> Option<&AddressBook> {
        self.saved.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl Storage for InMemoryStorage {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.saved.clone().unwrap_or_default())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        if self.fail_saves {
            let err = io::Error::other("simulated save failure");
            return Err(AddressBookError::Io(err));
        }
        self.saved = Some(book.clone());
        self.save_count += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::book::AddressBook;
    use crate::model::{ContactDetail, Name, Person};
    use crate::tags::{Tag, TagSet};

    /// A person with fixed, valid, public contact details.
    pub fn person(name: &str) -> Person {
        person_with_tags(name, &[])
    }

    pub fn person_with_tags(name: &str, tags: &[&str]) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            ContactDetail::phone("12345678", false).unwrap(),
            ContactDetail::email("test@example.com", false).unwrap(),
            ContactDetail::address("1 Test Street", false).unwrap(),
            tags.iter()
                .map(|t| Tag::new(*t).unwrap())
                .collect::<TagSet>(),
        )
    }

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        pub fn with(mut self, person: Person) -> Self {
            self.book.add_person(person).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{person, BookFixture};
    use super::*;

    #[test]
    fn unsaved_store_loads_empty() {
        assert!(InMemoryStorage::new().load().unwrap().is_empty());
    }

    #[test]
    fn keeps_last_save() {
        let mut storage = InMemoryStorage::new();
        let book = BookFixture::new().with(person("Alice")).book;
        storage.save(&book).unwrap();
        assert_eq!(storage.load().unwrap(), book);
        assert_eq!(storage.save_count(), 1);
    }

    #[test]
    fn failing_saves_keep_previous_state() {
        let book = BookFixture::new().with(person("Alice")).book;
        let mut storage = InMemoryStorage::with_book(book.clone()).failing_saves();

        let err = storage.save(&AddressBook::new()).unwrap_err();
        assert!(!err.is_domain());
        assert_eq!(storage.saved(), Some(&book));
    }
}
