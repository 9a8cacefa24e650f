use crate::error::{AddressBookError, Result};
use crate::model::Person;
use crate::tags::Tag;

/// An ordered list of persons that never holds two equal records.
///
/// Order is insertion order until [`UniquePersonList::sort`] is called.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniquePersonList {
    persons: Vec<Person>,
}

impl UniquePersonList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from existing records, rejecting duplicates.
    pub fn from_persons(persons: Vec<Person>) -> Result<Self> {
        let mut list = Self::new();
        for person in persons {
            list.add(person)?;
        }
        Ok(list)
    }

    pub fn as_slice(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.persons.iter()
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    fn position(&self, person: &Person) -> Result<usize> {
        self.persons
            .iter()
            .position(|p| p == person)
            .ok_or(AddressBookError::PersonNotFound)
    }

    pub fn add(&mut self, person: Person) -> Result<()> {
        if self.contains(&person) {
            return Err(AddressBookError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    /// Puts `replacement` where `target` was.
    pub fn replace(&mut self, target: &Person, replacement: Person) -> Result<()> {
        let pos = self.position(target)?;
        let clashes = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, p)| i != pos && *p == replacement);
        if clashes {
            return Err(AddressBookError::DuplicatePerson);
        }
        self.persons[pos] = replacement;
        Ok(())
    }

    pub fn remove(&mut self, person: &Person) -> Result<Person> {
        let pos = self.position(person)?;
        Ok(self.persons.remove(pos))
    }

    pub fn clear(&mut self) {
        self.persons.clear();
    }

    /// Stable sort by name, ignoring case.
    pub fn sort(&mut self) {
        self.persons
            .sort_by_cached_key(|p| p.name.as_str().to_lowercase());
    }

    /// Replaces `old` with `new` on every person holding it.
    ///
    /// Works on a scratch copy that only replaces the list once every person
    /// has been rewritten and the result is still free of duplicates.
    /// Returns how many persons were updated.
    pub fn rename_tag(&mut self, old: &Tag, new: &Tag) -> Result<usize> {
        let mut renamed = self.persons.clone();
        let mut affected = 0;
        for person in renamed.iter_mut() {
            if person.tags.replace(old, new.clone()) {
                affected += 1;
            }
        }

        if affected == 0 {
            return Err(AddressBookError::TagNotFound(old.name().to_string()));
        }

        let rebuilt = Self::from_persons(renamed)?;
        *self = rebuilt;
        Ok(affected)
    }
}

impl<'a> IntoIterator for &'a UniquePersonList {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.persons.iter()
    }
}
