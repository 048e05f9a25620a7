//! Library catalog manager
//!
//! Tracks books and their available copies in a flat text file, and lends
//! them to borrowers subject to a per-borrower loan limit.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod shell;

pub use config::AppConfig;
pub use error::{AppError, AppResult, ErrorCode};

use models::{Book, BookId, BorrowOutcome, Borrower, CreateBook, Loan, ReturnOutcome};
use repository::Repository;
use services::Services;

/// Application state: configuration, the opened catalog and the services
/// operating on it
#[derive(Debug)]
pub struct Library {
    pub config: AppConfig,
    pub repository: Repository,
    pub services: Services,
}

impl Library {
    /// Load the catalog from the configured backing file
    pub fn open(config: AppConfig) -> AppResult<Self> {
        let repository = Repository::new(&config.catalog)?;
        let services = Services::new(&config);
        tracing::info!(
            "Catalog opened from {} ({} books)",
            repository.books.path().display(),
            repository.books.len()
        );
        Ok(Self {
            config,
            repository,
            services,
        })
    }

    pub fn register_book(&mut self, request: CreateBook) -> AppResult<BookId> {
        self.services
            .catalog
            .register_book(&mut self.repository.books, request)
    }

    pub fn list_catalog(&self) -> &[Book] {
        self.services.catalog.list_catalog(&self.repository.books)
    }

    pub fn borrow_book(&mut self, title: &str, borrower: &mut Borrower) -> AppResult<BorrowOutcome> {
        self.services
            .loans
            .borrow(&mut self.repository.books, title, borrower)
    }

    pub fn return_book(&mut self, title: &str, borrower: &mut Borrower) -> AppResult<ReturnOutcome> {
        self.services
            .loans
            .return_book(&mut self.repository.books, title, borrower)
    }

    pub fn held_books(&self, borrower: &Borrower) -> Vec<(Loan, &Book)> {
        self.services.loans.held_books(&self.repository.books, borrower)
    }
}
