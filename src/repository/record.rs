//! Line codec for the backing file.
//!
//! One book per line: `title;author;genre;copies_available`. There is no
//! escaping, so none of the fields may contain the separator.

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, FIELD_SEPARATOR},
};

/// Encode a book as a single line (without the trailing newline)
pub fn encode_record(book: &Book) -> String {
    format!(
        "{title}{sep}{author}{sep}{genre}{sep}{copies}",
        title = book.title,
        author = book.author,
        genre = book.genre,
        copies = book.copies_available,
        sep = FIELD_SEPARATOR,
    )
}

/// Decode one non-blank line
pub fn decode_record(line: &str) -> AppResult<Book> {
    let mut parts = line.splitn(4, FIELD_SEPARATOR);

    let (Some(title), Some(author), Some(genre), Some(copies)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed(format!(
            "expected 4 fields separated by '{}'",
            FIELD_SEPARATOR
        )));
    };

    let copies = copies.trim();
    if copies.is_empty() || !copies.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(format!("invalid copy count '{}'", copies)));
    }
    let copies_available = copies
        .parse::<u32>()
        .map_err(|e| malformed(format!("invalid copy count '{}': {}", copies, e)))?;

    Ok(Book::new(title, author, genre, copies_available))
}

fn malformed(reason: String) -> AppError {
    AppError::MalformedRecord { line: 0, reason }
}
