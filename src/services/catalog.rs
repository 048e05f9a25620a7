//! Catalog management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{Book, BookId, CreateBook},
    repository::books::BooksRepository,
};

#[derive(Debug, Clone, Default)]
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// Validate and register a new book.
    /// Administrator rights are checked by the caller.
    pub fn register_book(&self, books: &mut BooksRepository, request: CreateBook) -> AppResult<BookId> {
        request.validate()?;

        let book = Book::from(request);
        let title = book.title.clone();
        let copies = book.copies_available;
        let id = books.register(book)?;

        tracing::info!("Catalog: registered '{}' with {} copies as {}", title, copies, id);
        Ok(id)
    }

    /// Every book in registration order
    pub fn list_catalog<'a>(&self, books: &'a BooksRepository) -> &'a [Book] {
        books.list()
    }
}
