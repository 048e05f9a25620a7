//! Write-through persistence round trips

use std::fs;

use library_catalog::models::{Book, Borrower, CreateBook};
use library_catalog::repository::books::load;
use library_catalog::{AppConfig, AppError, Library};
use tempfile::TempDir;

use super::open_library;

fn dune() -> CreateBook {
    CreateBook {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        genre: "SciFi".to_string(),
        quantity: 2,
    }
}

#[test]
fn test_missing_file_opens_empty() {
    let (dir, library) = open_library();
    assert!(library.list_catalog().is_empty());
    assert!(!dir.path().join("books.txt").exists());
}

#[test]
fn test_register_then_load() {
    let (dir, mut library) = open_library();
    library.register_book(dune()).unwrap();

    let reloaded = load(&dir.path().join("books.txt")).unwrap();
    assert_eq!(reloaded, vec![Book::new("Dune", "Herbert", "SciFi", 2)]);
}

#[test]
fn test_borrow_survives_restart() {
    let (dir, mut library) = open_library();
    library.register_book(dune()).unwrap();
    let mut reader = Borrower::new("Reader", false);
    library.borrow_book("Dune", &mut reader).unwrap();
    drop(library);

    let path = dir.path().join("books.txt");
    assert_eq!(fs::read_to_string(&path).unwrap(), "Dune;Herbert;SciFi;1\n");

    // held items are not persisted, only the stock count
    let reopened = Library::open(AppConfig::from_path(&path)).unwrap();
    assert_eq!(reopened.list_catalog()[0].copies_available, 1);
}

#[test]
fn test_malformed_file_aborts_open() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("books.txt");
    fs::write(&path, "Dune;Herbert;SciFi;2\nEmma;Austen;Novel;many\n").unwrap();

    let result = Library::open(AppConfig::from_path(&path));
    assert!(matches!(result, Err(AppError::MalformedRecord { line: 2, .. })));
}

#[test]
fn test_duplicate_titles_are_kept() {
    let (dir, mut library) = open_library();
    library.register_book(dune()).unwrap();
    library.register_book(dune()).unwrap();

    let content = fs::read_to_string(dir.path().join("books.txt")).unwrap();
    assert_eq!(content.lines().count(), 2);

    let mut reader = Borrower::new("Reader", false);
    library.borrow_book("dune", &mut reader).unwrap();
    let stock: Vec<u32> = library.list_catalog().iter().map(|b| b.copies_available).collect();
    assert_eq!(stock, vec![1, 2]);
}
