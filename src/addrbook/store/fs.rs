use super::Storage;
use crate::book::AddressBook;
use crate::error::{AddressBookError, Result};
use crate::model::{ContactDetail, DetailKind, Name, Person};
use crate::tags::{Tag, TagSet};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const STORAGE_EXTENSION: &str = "json";

/// Stores the whole book as one JSON document.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Fails with [`AddressBookError::InvalidStoragePath`] unless `path` ends in `.json`.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !has_storage_extension(&path) {
            return Err(AddressBookError::InvalidStoragePath(path));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn has_storage_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == STORAGE_EXTENSION)
        && path.file_stem().is_some()
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            info!("no storage file at {}, starting empty", self.path.display());
            return Ok(AddressBook::new());
        }

        let content = fs::read_to_string(&self.path).map_err(AddressBookError::Io)?;
        let stored: StoredBook =
            serde_json::from_str(&content).map_err(AddressBookError::Serialization)?;
        let book = stored.into_book()?;
        info!("loaded {} persons from {}", book.len(), self.path.display());
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AddressBookError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(&StoredBook::from_book(book))
            .map_err(AddressBookError::Serialization)?;
        fs::write(&self.path, content).map_err(AddressBookError::Io)?;
        info!("saved {} persons to {}", book.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

// --- On-disk format ---

#[derive(Debug, Serialize, Deserialize)]
struct StoredBook {
    persons: Vec<StoredPerson>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPerson {
    name: String,
    phone: StoredDetail,
    email: StoredDetail,
    address: StoredDetail,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredDetail {
    value: String,
    #[serde(default)]
    is_private: bool,
}

impl StoredBook {
    fn from_book(book: &AddressBook) -> Self {
        Self {
            persons: book.persons().iter().map(StoredPerson::from).collect(),
        }
    }

    /// Field values are validated again, since the file may have been edited by hand.
    fn into_book(self) -> Result<AddressBook> {
        let persons = self
            .persons
            .into_iter()
            .map(Person::try_from)
            .collect::<Result<Vec<_>>>()?;
        AddressBook::from_persons(persons).map_err(|_| {
            AddressBookError::CorruptData("duplicate persons in storage file".to_string())
        })
    }
}

impl From<&Person> for StoredPerson {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name.to_string(),
            phone: StoredDetail::from(&person.phone),
            email: StoredDetail::from(&person.email),
            address: StoredDetail::from(&person.address),
            tags: person.tags.iter().map(|t| t.name().to_string()).collect(),
        }
    }
}

impl From<&ContactDetail> for StoredDetail {
    fn from(detail: &ContactDetail) -> Self {
        Self {
            value: detail.value().to_string(),
            is_private: detail.is_private(),
        }
    }
}

impl StoredDetail {
    fn into_detail(self, kind: DetailKind) -> Result<ContactDetail> {
        ContactDetail::new(kind, self.value, self.is_private).map_err(corrupt)
    }
}

impl TryFrom<StoredPerson> for Person {
    type Error = AddressBookError;

    fn try_from(stored: StoredPerson) -> Result<Self> {
        let tags = stored
            .tags
            .into_iter()
            .map(stored_tag)
            .collect::<Result<TagSet>>()?;

        Ok(Person::new(
            Name::new(stored.name).map_err(corrupt)?,
            stored.phone.into_detail(DetailKind::Phone)?,
            stored.email.into_detail(DetailKind::Email)?,
            stored.address.into_detail(DetailKind::Address)?,
            tags,
        ))
    }
}

fn stored_tag(name: String) -> Result<Tag> {
    Tag::new(name).map_err(|e| AddressBookError::CorruptData(e.to_string()))
}

fn corrupt(err: AddressBookError) -> AddressBookError {
    AddressBookError::CorruptData(err.to_string())
}
