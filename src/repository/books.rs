//! Books repository backed by a flat text file.
//!
//! The whole catalog lives in memory; every mutation rewrites the file
//! before returning.

use std::{
    borrow::Cow,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    error::AppResult,
    models::book::{title_key, Book, BookId},
};

use super::record::{decode_record, encode_record};

/// UTF-8 byte order mark, as written by some editors
const BOM: char = '\u{feff}';

/// Read every record from `path`. A missing file is an empty catalog.
///
/// A leading byte order mark is skipped and invalid UTF-8 sequences are
/// replaced with U+FFFD rather than failing the load.
pub fn load(path: &Path) -> AppResult<Vec<Book>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("No catalog file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let decoded = String::from_utf8_lossy(&bytes);
    if matches!(decoded, Cow::Owned(_)) {
        tracing::warn!("{} contains invalid UTF-8, replacing bad bytes", path.display());
    }
    let content = decoded.strip_prefix(BOM).unwrap_or(&*decoded);

    let mut books = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let book = decode_record(line).map_err(|e| e.at_line(index + 1))?;
        books.push(book);
    }

    tracing::debug!("Loaded {} books from {}", books.len(), path.display());
    Ok(books)
}

/// Replace the content of `path` with one line per book, in order
pub fn save(path: &Path, books: &[Book]) -> AppResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for book in books {
        writeln!(writer, "{}", encode_record(book))?;
    }
    writer.flush()?;

    tracing::debug!("Saved {} books to {}", books.len(), path.display());
    Ok(())
}

#[derive(Debug)]
pub struct BooksRepository {
    path: PathBuf,
    books: Vec<Book>,
}

impl BooksRepository {
    /// Open the catalog stored at `path`
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let books = load(&path)?;
        Ok(Self { path, books })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush the in-memory catalog to the backing file
    pub fn save(&self) -> AppResult<()> {
        save(&self.path, &self.books)
    }

    /// Append a book and persist. Duplicate titles are not rejected;
    /// lookups return the first one registered.
    pub fn register(&mut self, book: Book) -> AppResult<BookId> {
        let id = BookId(self.books.len());
        self.books.push(book);

        if let Err(e) = self.save() {
            self.books.pop();
            return Err(e);
        }
        Ok(id)
    }

    /// First book whose title matches, ignoring case
    pub fn find_by_title(&self, title: &str) -> Option<BookId> {
        let key = title_key(title);
        self.books
            .iter()
            .position(|book| title_key(&book.title) == key)
            .map(BookId)
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.get_mut(id.0)
    }

    /// All books in registration order
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
