use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, LastShown};

pub const COMMAND_WORD: &str = "delete";

pub const USAGE: &str = "delete:\n\
    Deletes the person identified by the index number used in the last person listing.\n\t\
    Parameters: INDEX\n\t\
    Example: delete 1";

pub fn run(
    book: &mut AddressBook,
    last_shown: &LastShown,
    index: DisplayIndex,
) -> Result<CmdResult> {
    let target = last_shown.person(index)?;
    let removed = book.remove_person(target)?;
    let message = format!("Deleted Person: {}", removed);
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::find;
    use crate::error::AddressBookError;
    use crate::index::index_persons;
    use crate::store::memory::fixtures::{person, BookFixture};
    use std::collections::BTreeSet;

    #[test]
    fn deletes_from_the_last_listing_not_store_order() {
        let mut book = BookFixture::new()
            .with(person("Bob Lim"))
            .with(person("Carl Tan"))
            .with(person("Alice Tan"))
            .book;

        let keywords: BTreeSet<String> = ["alice".to_string()].into();
        let found = find::run(&book, &keywords).unwrap();
        let shown = LastShown {
            persons: found.listed_persons.unwrap(),
            tags: Vec::new(),
        };

        run(&mut book, &shown, DisplayIndex::new(1)).unwrap();
        let names: Vec<&str> = book.persons().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bob Lim", "Carl Tan"]);
    }

    #[test]
    fn out_of_range_index() {
        let mut book = BookFixture::new().with(person("Alice")).book;
        let shown = LastShown {
            persons: index_persons(book.persons().to_vec()),
            tags: Vec::new(),
        };
        let err = run(&mut book, &shown, DisplayIndex::new(2)).unwrap_err();
        assert!(matches!(err, AddressBookError::IndexOutOfRange { .. }));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn stale_listing_reports_missing_person() {
        let mut book = BookFixture::new().with(person("Alice")).book;
        let shown = LastShown {
            persons: index_persons(book.persons().to_vec()),
            tags: Vec::new(),
        };
        run(&mut book, &shown, DisplayIndex::new(1)).unwrap();

        let err = run(&mut book, &shown, DisplayIndex::new(1)).unwrap_err();
        assert!(matches!(err, AddressBookError::PersonNotFound));
    }
}
