//! Book (catalog entry) model and related types

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;
use validator::{Validate, ValidationError};

/// Field separator of the backing file format
pub const FIELD_SEPARATOR: char = ';';

/// Position of a book in the catalog store.
/// Books are never removed, so an id stays valid for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(pub usize);

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub copies_available: u32,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        copies_available: u32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            copies_available,
        }
    }

    /// Case-insensitive title comparison
    pub fn matches_title(&self, title: &str) -> bool {
        title_key(&self.title) == title_key(title)
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Genre: {}, Quantity: {}",
            self.title, self.author, self.genre, self.copies_available
        )
    }
}

/// Normalized form used to compare titles
pub fn title_key(title: &str) -> String {
    title.nfc().collect::<String>().to_lowercase()
}

/// Register book request
#[derive(Debug, Clone, Validate)]
pub struct CreateBook {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[validate(custom(function = "validate_field"))]
    pub author: String,
    #[validate(custom(function = "validate_field"))]
    pub genre: String,
    pub quantity: u32,
}

impl From<CreateBook> for Book {
    fn from(req: CreateBook) -> Self {
        Book::new(req.title, req.author, req.genre, req.quantity)
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        let mut err = ValidationError::new("blank_title");
        err.message = Some(Cow::Borrowed("Title must not be empty"));
        return Err(err);
    }
    validate_field(title)
}

fn validate_field(value: &str) -> Result<(), ValidationError> {
    if value.contains(FIELD_SEPARATOR) {
        let mut err = ValidationError::new("separator");
        err.message = Some(Cow::Borrowed("Fields must not contain ';'"));
        return Err(err);
    }
    Ok(())
}
