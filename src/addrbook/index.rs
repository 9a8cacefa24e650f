//! # Display Indexes
//!
//! Users refer to persons and tags by their position in the listing they
//! were most recently shown ("delete 3" deletes the third row of the last
//! `list` or `find`), never by position in the underlying store.
//!
//! Every listing-producing command numbers its rows `1..=N` with
//! [`index_persons`] / [`index_tags`]. The session controller keeps the most
//! recent person and tag listings in a [`LastShown`] and hands it to each
//! command, which resolves indexes against it with [`LastShown::person`] and
//! [`LastShown::tag`].
//!
//! A listing is a snapshot. The record it points to may since have been
//! edited or deleted, so commands re-check existence in the store after
//! resolving an index.

use crate::error::{AddressBookError, Result};
use crate::model::Person;
use crate::tags::Tag;
use std::fmt;
use std::str::FromStr;

/// A 1-based position in the most recently shown listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    pub fn new(n: usize) -> Self {
        Self(n)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("Invalid index format: {}", s));
        }
        s.parse()
            .map(DisplayIndex)
            .map_err(|_| format!("Invalid index format: {}", s))
    }
}

/// Which listing an index was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Person,
    Tag,
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingKind::Person => f.write_str("person"),
            ListingKind::Tag => f.write_str("tag"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPerson {
    pub index: DisplayIndex,
    pub person: Person,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTag {
    pub index: DisplayIndex,
    pub tag: Tag,
}

/// Numbers persons `1..=N` in the order given.
pub fn index_persons(persons: Vec<Person>) -> Vec<DisplayPerson> {
    persons
        .into_iter()
        .enumerate()
        .map(|(i, person)| DisplayPerson {
            index: DisplayIndex(i + 1),
            person,
        })
        .collect()
}

/// Numbers tags `1..=N` in the order given.
pub fn index_tags(tags: Vec<Tag>) -> Vec<DisplayTag> {
    tags.into_iter()
        .enumerate()
        .map(|(i, tag)| DisplayTag {
            index: DisplayIndex(i + 1),
            tag,
        })
        .collect()
}

/// The listings most recently shown to the user.
#[derive(Debug, Clone, Default)]
pub struct LastShown {
    pub persons: Vec<DisplayPerson>,
    pub tags: Vec<DisplayTag>,
}

impl LastShown {
    pub fn person(&self, index: DisplayIndex) -> Result<&Person> {
        self.persons
            .iter()
            .find(|dp| dp.index == index)
            .map(|dp| &dp.person)
            .ok_or(AddressBookError::IndexOutOfRange {
                listing: ListingKind::Person,
                index,
            })
    }

    pub fn tag(&self, index: DisplayIndex) -> Result<&Tag> {
        self.tags
            .iter()
            .find(|dt| dt.index == index)
            .map(|dt| &dt.tag)
            .ok_or(AddressBookError::IndexOutOfRange {
                listing: ListingKind::Tag,
                index,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::person;

    #[test]
    fn test_parsing() {
        assert_eq!(DisplayIndex::from_str("1"), Ok(DisplayIndex(1)));
        assert_eq!(DisplayIndex::from_str(" 42 "), Ok(DisplayIndex(42)));
        assert_eq!(DisplayIndex::from_str("0"), Ok(DisplayIndex(0)));

        assert!(DisplayIndex::from_str("").is_err());
        assert!(DisplayIndex::from_str("abc").is_err());
        assert!(DisplayIndex::from_str("-1").is_err());
        assert!(DisplayIndex::from_str("+1").is_err());
        assert!(DisplayIndex::from_str("1 2").is_err());
        assert!(DisplayIndex::from_str("12a").is_err());
        assert!(DisplayIndex::from_str("99999999999999999999999999").is_err());
    }

    #[test]
    fn test_indexing_is_one_based_in_given_order() {
        let listed = index_persons(vec![person("Bob"), person("Alice")]);
        assert_eq!(listed[0].index, DisplayIndex(1));
        assert_eq!(listed[0].person.name.as_str(), "Bob");
        assert_eq!(listed[1].index, DisplayIndex(2));
    }

    #[test]
    fn test_resolution_against_last_shown() {
        let shown = LastShown {
            persons: index_persons(vec![person("Bob"), person("Alice")]),
            tags: index_tags(vec![Tag::new("family").unwrap()]),
        };

        assert_eq!(
            shown.person(DisplayIndex(2)).unwrap().name.as_str(),
            "Alice"
        );
        assert_eq!(shown.tag(DisplayIndex(1)).unwrap().name(), "family");
    }

    #[test]
    fn test_out_of_range_indexes() {
        let shown = LastShown {
            persons: index_persons(vec![person("Bob")]),
            tags: Vec::new(),
        };

        assert!(matches!(
            shown.person(DisplayIndex(0)),
            Err(AddressBookError::IndexOutOfRange {
                listing: ListingKind::Person,
                ..
            })
        ));
        assert!(shown.person(DisplayIndex(2)).is_err());
        assert!(matches!(
            shown.tag(DisplayIndex(1)),
            Err(AddressBookError::IndexOutOfRange {
                listing: ListingKind::Tag,
                ..
            })
        ));
    }
}
