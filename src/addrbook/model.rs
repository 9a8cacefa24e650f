use crate::error::{AddressBookError, Result};
use crate::tags::TagSet;
use std::fmt;

const DETAIL_IS_PRIVATE: &str = "(private) ";

/// A person's name: letters, digits and spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub const CONSTRAINTS: &'static str =
        "Person names should be spaces or alphanumeric characters";

    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into().trim().to_string();
        let valid = !value.is_empty() && value.chars().all(|c| c.is_alphanumeric() || c == ' ');
        if !valid {
            return Err(AddressBookError::InvalidFieldValue {
                field: "name",
                message: Self::CONSTRAINTS.to_string(),
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The contact details that may be marked private.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailKind {
    Phone,
    Email,
    Address,
}

impl DetailKind {
    pub fn label(self) -> &'static str {
        match self {
            DetailKind::Phone => "Phone",
            DetailKind::Email => "Email",
            DetailKind::Address => "Address",
        }
    }

    fn field(self) -> &'static str {
        match self {
            DetailKind::Phone => "phone",
            DetailKind::Email => "email",
            DetailKind::Address => "address",
        }
    }

    pub fn constraints(self) -> &'static str {
        match self {
            DetailKind::Phone => "Person phone numbers should only contain numbers",
            DetailKind::Email => {
                "Person emails should be 2 alphanumeric/period strings separated by '@'"
            }
            DetailKind::Address => "Person addresses can be in any format",
        }
    }

    fn accepts(self, value: &str) -> bool {
        match self {
            DetailKind::Phone => !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()),
            DetailKind::Email => is_valid_email(value),
            DetailKind::Address => !value.is_empty() && !value.contains('/'),
        }
    }
}

fn is_valid_email(value: &str) -> bool {
    let is_part = |s: &str| {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == '.')
    };
    match value.split_once('@') {
        Some((local, domain)) => is_part(local) && is_part(domain),
        None => false,
    }
}

/// A phone, email or address value together with its privacy flag.
///
/// Equality looks at the value only: a detail marked private is the same
/// detail as its public twin.
#[derive(Debug, Clone, Eq)]
pub struct ContactDetail {
    kind: DetailKind,
    value: String,
    is_private: bool,
}

impl ContactDetail {
    pub fn new(kind: DetailKind, value: impl Into<String>, is_private: bool) -> Result<Self> {
        let value = value.into().trim().to_string();
        if !kind.accepts(&value) {
            return Err(AddressBookError::InvalidFieldValue {
                field: kind.field(),
                message: kind.constraints().to_string(),
            });
        }
        Ok(Self {
            kind,
            value,
            is_private,
        })
    }

    pub fn phone(value: impl Into<String>, is_private: bool) -> Result<Self> {
        Self::new(DetailKind::Phone, value, is_private)
    }

    pub fn email(value: impl Into<String>, is_private: bool) -> Result<Self> {
        Self::new(DetailKind::Email, value, is_private)
    }

    pub fn address(value: impl Into<String>, is_private: bool) -> Result<Self> {
        Self::new(DetailKind::Address, value, is_private)
    }

    pub fn kind(&self) -> DetailKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }

    /// Same privacy, new value.
    pub fn with_value(&self, value: &str) -> Result<Self> {
        Self::new(self.kind, value, self.is_private)
    }
}

impl PartialEq for ContactDetail {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl std::hash::Hash for ContactDetail {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.value.hash(state);
    }
}

impl fmt::Display for ContactDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A contact record.
///
/// Two persons are equal when their name, details and tags are equal.
/// Privacy flags do not take part (see [`ContactDetail`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: Name,
    pub phone: ContactDetail,
    pub email: ContactDetail,
    pub address: ContactDetail,
    pub tags: TagSet,
}

impl Person {
    pub fn new(
        name: Name,
        phone: ContactDetail,
        email: ContactDetail,
        address: ContactDetail,
        tags: TagSet,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    pub fn details(&self) -> [&ContactDetail; 3] {
        [&self.phone, &self.email, &self.address]
    }

    /// Every detail, private ones flagged.
    pub fn as_text_show_all(&self) -> String {
        let mut text = self.name.to_string();
        for detail in self.details() {
            text.push_str(&format!(" {}: ", detail.kind().label()));
            if detail.is_private() {
                text.push_str(DETAIL_IS_PRIVATE);
            }
            text.push_str(detail.value());
        }
        text.push_str(&format!(" Tags: {}", self.tags));
        text
    }

    /// Private details are left out entirely.
    pub fn as_text_hide_private(&self) -> String {
        let mut text = self.name.to_string();
        for detail in self.details().into_iter().filter(|d| !d.is_private()) {
            text.push_str(&format!(" {}: {}", detail.kind().label(), detail.value()));
        }
        text.push_str(&format!(" Tags: {}", self.tags));
        text
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text_show_all())
    }
}
