use crate::book::AddressBook;
use crate::commands::{persons_listed_summary, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_persons;

pub const COMMAND_WORD: &str = "list";

pub const USAGE: &str = "list:\n\
    Displays all persons in the address book as a list with index numbers.\n\t\
    Example: list";

pub fn run(book: &AddressBook) -> Result<CmdResult> {
    let listed = index_persons(book.persons().to_vec());
    Ok(CmdResult::default()
        .with_message(CmdMessage::info(persons_listed_summary(listed.len())))
        .with_listed_persons(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{person, BookFixture};

    #[test]
    fn lists_in_store_order() {
        let book = BookFixture::new()
            .with(person("Charlie"))
            .with(person("Alice"))
            .book;
        let result = run(&book).unwrap();
        let listed = result.listed_persons.as_ref().unwrap();

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].index.get(), 1);
        assert_eq!(listed[0].person.name.as_str(), "Charlie");
        assert_eq!(listed[1].person.name.as_str(), "Alice");
        assert_eq!(result.feedback(), "2 persons listed!");
    }

    #[test]
    fn empty_book_still_produces_a_listing() {
        let result = run(&AddressBook::new()).unwrap();
        assert_eq!(result.listed_persons, Some(Vec::new()));
    }
}
