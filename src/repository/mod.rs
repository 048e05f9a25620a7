//! Repository layer for catalog persistence

pub mod books;
pub mod record;

use crate::{config::CatalogConfig, error::AppResult};

/// Main repository struct holding the catalog store
#[derive(Debug)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Open the repository on the configured backing file
    pub fn new(config: &CatalogConfig) -> AppResult<Self> {
        Ok(Self {
            books: books::BooksRepository::open(&config.path)?,
        })
    }
}
