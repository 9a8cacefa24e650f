//! # Address Book
//!
//! [`AddressBook`] is the aggregate every command mutates. It owns the
//! person store ([`UniquePersonList`]) and derives the tag store from it:
//! the tags in use are exactly the union of each person's tags, so the two
//! can never disagree.
//!
//! Mutations are all-or-nothing. Multi-step changes (`edit`, `rename_tag`)
//! are computed on a copy and swapped in only once they have fully
//! succeeded, so a domain error always leaves the book as it was.

pub mod person_list;

use crate::error::{AddressBookError, Result};
use crate::model::{Name, Person};
use crate::tags::{Tag, TagSet};
use log::debug;

pub use person_list::UniquePersonList;

/// One change requested by an `edit` command, applied in the order given.
///
/// Values are raw text: they are validated when the edit is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Name(String),
    Phone(String),
    Email(String),
    Address(String),
    AddTag(String),
    RemoveTag(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    persons: UniquePersonList,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_persons(persons: Vec<Person>) -> Result<Self> {
        Ok(Self {
            persons: UniquePersonList::from_persons(persons)?,
        })
    }

    pub fn persons(&self) -> &[Person] {
        self.persons.as_slice()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    /// Every distinct tag attached to at least one person, in name order.
    pub fn all_tags(&self) -> TagSet {
        let mut tags = TagSet::new();
        for person in &self.persons {
            tags.extend(&person.tags);
        }
        tags
    }

    pub fn add_person(&mut self, person: Person) -> Result<()> {
        self.persons.add(person)
    }

    pub fn remove_person(&mut self, person: &Person) -> Result<Person> {
        self.persons.remove(person)
    }

    /// Applies `ops` to `target` and stores the result in its place.
    ///
    /// `target` usually comes from an earlier listing, so it is checked
    /// against the store first.
    pub fn edit_person(&mut self, target: &Person, ops: &[EditOp]) -> Result<Person> {
        if !self.persons.contains(target) {
            return Err(AddressBookError::PersonNotFound);
        }

        let mut edited = target.clone();
        for op in ops {
            apply_edit(&mut edited, op)?;
        }

        self.persons.replace(target, edited.clone())?;
        debug!("edited person {}", edited.name);
        Ok(edited)
    }

    /// Renames `old` to `new_name` on every person holding it.
    pub fn rename_tag(&mut self, old: &Tag, new_name: &str) -> Result<usize> {
        let new =
            Tag::new(new_name).map_err(|e| AddressBookError::InvalidTagName(e.to_string()))?;
        let affected = self.persons.rename_tag(old, &new)?;
        debug!("renamed tag {} to {} on {} persons", old, new, affected);
        Ok(affected)
    }

    pub fn sort(&mut self) {
        self.persons.sort();
    }

    pub fn clear(&mut self) {
        self.persons.clear();
    }
}

fn apply_edit(person: &mut Person, op: &EditOp) -> Result<()> {
    match op {
        EditOp::Name(value) => person.name = Name::new(value.as_str())?,
        EditOp::Phone(value) => person.phone = person.phone.with_value(value)?,
        EditOp::Email(value) => person.email = person.email.with_value(value)?,
        EditOp::Address(value) => person.address = person.address.with_value(value)?,
        EditOp::AddTag(value) => {
            person.tags.insert(parse_tag(value)?);
        }
        EditOp::RemoveTag(value) => {
            let tag = parse_tag(value)?;
            if !person.tags.remove(&tag) {
                return Err(AddressBookError::TagNotFound(tag.name().to_string()));
            }
        }
    }
    Ok(())
}

fn parse_tag(value: &str) -> Result<Tag> {
    Tag::new(value).map_err(|e| AddressBookError::InvalidFieldValue {
        field: "tag",
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{person, person_with_tags, BookFixture};

    #[test]
    fn all_tags_is_the_union_of_person_tags() {
        let book = BookFixture::new()
            .with(person_with_tags("A", &["gym", "family"]))
            .with(person_with_tags("B", &["family", "work"]))
            .book;
        let tags = book.all_tags();
        let names: Vec<&str> = tags.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["family", "gym", "work"]);
    }

    #[test]
    fn clear_empties_persons_and_tags() {
        let mut book = BookFixture::new()
            .with(person_with_tags("A", &["gym"]))
            .book;
        book.clear();
        assert!(book.is_empty());
        assert!(book.all_tags().is_empty());
    }

    #[test]
    fn edit_applies_ops_in_order() {
        let mut book = BookFixture::new().with(person("Alice")).book;
        let edited = book
            .edit_person(
                &person("Alice"),
                &[
                    EditOp::Name("Alicia".into()),
                    EditOp::Phone("111".into()),
                    EditOp::Name("Alison".into()),
                    EditOp::AddTag("club".into()),
                ],
            )
            .unwrap();

        assert_eq!(edited.name.as_str(), "Alison");
        assert_eq!(edited.phone.value(), "111");
        assert!(edited.tags.contains(&Tag::new("club").unwrap()));
        assert_eq!(book.persons()[0], edited);
    }

    #[test]
    fn edit_keeps_privacy_flags() {
        let mut original = person("Alice");
        original.phone = crate::model::ContactDetail::phone("999", true).unwrap();
        let mut book = BookFixture::new().with(original.clone()).book;

        let edited = book
            .edit_person(&original, &[EditOp::Phone("123".into())])
            .unwrap();
        assert!(edited.phone.is_private());
    }

    #[test]
    fn edit_failure_leaves_book_untouched() {
        let mut book = BookFixture::new()
            .with(person_with_tags("Alice", &["gym"]))
            .book;
        let before = book.clone();

        let result = book.edit_person(
            &person_with_tags("Alice", &["gym"]),
            &[
                EditOp::Name("Alicia".into()),
                EditOp::RemoveTag("chess".into()),
            ],
        );
        assert!(matches!(result, Err(AddressBookError::TagNotFound(_))));
        assert_eq!(book, before);
    }

    #[test]
    fn edit_rejects_invalid_values() {
        let mut book = BookFixture::new().with(person("Alice")).book;
        let result = book.edit_person(&person("Alice"), &[EditOp::Phone("abc".into())]);
        assert!(matches!(
            result,
            Err(AddressBookError::InvalidFieldValue { field: "phone", .. })
        ));
    }

    #[test]
    fn edit_of_stale_record_fails() {
        let mut book = BookFixture::new().with(person("Alice")).book;
        let result = book.edit_person(&person("Bob"), &[EditOp::Name("Rob".into())]);
        assert!(matches!(result, Err(AddressBookError::PersonNotFound)));
    }

    #[test]
    fn rename_tag_validates_new_name() {
        let mut book = BookFixture::new()
            .with(person_with_tags("Alice", &["gym"]))
            .book;
        let result = book.rename_tag(&Tag::new("gym").unwrap(), "not valid");
        assert!(matches!(result, Err(AddressBookError::InvalidTagName(_))));
    }
}
