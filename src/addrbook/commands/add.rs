use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Person;

pub const COMMAND_WORD: &str = "add";

pub const USAGE: &str = "add:\n\
    Adds a person to the address book. Contact details can be marked private by prepending 'p' to the prefix.\n\t\
    Parameters: NAME [p]p/PHONE [p]e/EMAIL [p]a/ADDRESS [t/TAG]...\n\t\
    Example: add John Doe p/98765432 e/johnd@gmail.com a/311, Clementi Ave 2, #02-25 t/friends t/owesMoney";

pub fn run(book: &mut AddressBook, person: Person) -> Result<CmdResult> {
    let message = format!("New person added: {}", person);
    book.add_person(person)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressBookError;
    use crate::store::memory::fixtures::person;

    #[test]
    fn adds_person_to_the_end() {
        let mut book = AddressBook::new();
        run(&mut book, person("Alice")).unwrap();
        let result = run(&mut book, person("Bob")).unwrap();

        assert_eq!(book.len(), 2);
        assert_eq!(book.persons()[1], person("Bob"));
        assert!(result.feedback().starts_with("New person added: Bob"));
    }

    #[test]
    fn rejects_duplicates_without_growing() {
        let mut book = AddressBook::new();
        run(&mut book, person("Alice")).unwrap();
        let err = run(&mut book, person("Alice")).unwrap_err();

        assert!(matches!(err, AddressBookError::DuplicatePerson));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn duplicate_check_ignores_privacy() {
        let mut book = AddressBook::new();
        run(&mut book, person("Alice")).unwrap();

        let mut private_twin = person("Alice");
        private_twin.email =
            crate::model::ContactDetail::email(private_twin.email.value(), true).unwrap();
        assert!(run(&mut book, private_twin).is_err());
    }
}
