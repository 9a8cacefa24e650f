//! Tag name validation.
//!
//! Valid tags are a single run of letters and digits: no spaces, no
//! punctuation, and never the `/` delimiter the command grammar reserves.

/// Validates a tag name.
///
/// # Examples
/// ```
/// use addrbook::tags::validation::validate_tag_name;
///
/// assert!(validate_tag_name("friends").is_ok());
/// assert!(validate_tag_name("colleague2024").is_ok());
///
/// assert!(validate_tag_name("").is_err());
/// assert!(validate_tag_name("best friend").is_err());
/// assert!(validate_tag_name("a/b").is_err());
/// ```
pub fn validate_tag_name(name: &str) -> Result<(), TagValidationError> {
    if name.is_empty() {
        return Err(TagValidationError::Empty);
    }

    match name.chars().find(|ch| !ch.is_alphanumeric()) {
        Some(ch) => Err(TagValidationError::InvalidCharacter(ch)),
        None => Ok(()),
    }
}

/// Error type for tag name validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    /// Tag name is empty
    Empty,
    /// Tag name contains something other than a letter or digit
    InvalidCharacter(char),
}

impl std::fmt::Display for TagValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagValidationError::Empty => write!(f, "Tag names cannot be empty"),
            TagValidationError::InvalidCharacter(ch) => {
                write!(f, "Tag names should be alphanumeric, found '{}'", ch)
            }
        }
    }
}

impl std::error::Error for TagValidationError {}
