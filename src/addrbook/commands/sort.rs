use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub const COMMAND_WORD: &str = "sort";

pub const USAGE: &str = "sort:\n\
    Sorts the address book by name, ignoring case.\n\t\
    Example: sort";

pub fn run(book: &mut AddressBook) -> Result<CmdResult> {
    book.sort();
    Ok(CmdResult::default().with_message(CmdMessage::success("Address book has been sorted!")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{person, BookFixture};

    #[test]
    fn sorts_store_order() {
        let mut book = BookFixture::new()
            .with(person("bob"))
            .with(person("Alice"))
            .with(person("charlie"))
            .book;
        run(&mut book).unwrap();
        let names: Vec<&str> = book.persons().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "bob", "charlie"]);
    }

    #[test]
    fn equal_names_keep_their_relative_order() {
        let mut book = BookFixture::new()
            .with(person("Bob"))
            .with(person("alice"))
            .with(person("Alice"))
            .book;
        run(&mut book).unwrap();
        let names: Vec<&str> = book.persons().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alice", "Alice", "Bob"]);
    }
}
