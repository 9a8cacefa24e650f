//! Tags attached to persons.
//!
//! A [`Tag`] is identified by its exact name: `Friends` and `friends` are two
//! distinct tags. Only `find` folds case, and it does so on both sides of
//! the comparison.
//!
//! There is no separate tag registry. The set of tags in use is the union of
//! every person's [`TagSet`], see [`crate::book::AddressBook::all_tags`].
//!
//! ## Tag Naming Rules
//!
//! See [`validation`]: letters and digits only, non-empty.

pub mod validation;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub use validation::{validate_tag_name, TagValidationError};

/// A validated tag name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(name: impl Into<String>) -> Result<Self, TagValidationError> {
        let name = name.into().trim().to_string();
        validate_tag_name(&name)?;
        Ok(Self(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Tag {
    type Error = TagValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Tag::new(value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// A set of unique tags, iterated in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<Tag>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.0.contains(tag)
    }

    /// Returns `false` when the tag was already present.
    pub fn insert(&mut self, tag: Tag) -> bool {
        self.0.insert(tag)
    }

    /// Returns `false` when the tag was not present.
    pub fn remove(&mut self, tag: &Tag) -> bool {
        self.0.remove(tag)
    }

    /// Swaps `old` for `new`, keeping every other tag. No-op when `old` is absent.
    pub fn replace(&mut self, old: &Tag, new: Tag) -> bool {
        if self.0.remove(old) {
            self.0.insert(new);
            true
        } else {
            false
        }
    }

    pub fn extend(&mut self, other: &TagSet) {
        self.0.extend(other.0.iter().cloned());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }

    pub fn to_vec(&self) -> Vec<Tag> {
        self.0.iter().cloned().collect()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.0 {
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}
