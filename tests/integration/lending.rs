//! Borrow/return scenarios and invariants

use library_catalog::models::{Borrower, BorrowOutcome, CreateBook, ReturnOutcome};
use library_catalog::{ErrorCode, Library};
use proptest::prelude::*;

use super::open_library;

fn register(library: &mut Library, title: &str, quantity: u32) {
    library
        .register_book(CreateBook {
            title: title.to_string(),
            author: "Author".to_string(),
            genre: "Genre".to_string(),
            quantity,
        })
        .expect("Failed to register book");
}

fn copies(library: &Library, title: &str) -> u32 {
    let id = library.repository.books.find_by_title(title).expect("No such book");
    library.repository.books.get(id).unwrap().copies_available
}

fn snapshot(library: &Library) -> Vec<u32> {
    library.list_catalog().iter().map(|b| b.copies_available).collect()
}

#[test]
fn test_dune_scenario() {
    let (_dir, mut library) = open_library();
    library
        .register_book(CreateBook {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            genre: "SciFi".to_string(),
            quantity: 2,
        })
        .unwrap();

    let mut a = Borrower::new("A", false);
    let mut b = Borrower::new("B", false);
    let mut c = Borrower::new("C", false);

    assert!(library.borrow_book("Dune", &mut a).unwrap().is_success());
    assert_eq!(copies(&library, "Dune"), 1);
    assert_eq!(a.held_count(), 1);

    assert!(library.borrow_book("Dune", &mut b).unwrap().is_success());
    assert_eq!(copies(&library, "Dune"), 0);

    let outcome = library.borrow_book("Dune", &mut c).unwrap();
    assert_eq!(outcome, BorrowOutcome::OutOfStock);
    assert_eq!(copies(&library, "Dune"), 0);
    assert_eq!(c.held_count(), 0);

    match library.return_book("Dune", &mut a).unwrap() {
        ReturnOutcome::Returned(receipt) => {
            assert_eq!(receipt.title, "Dune");
            assert_eq!(receipt.borrower, "A");
            assert_eq!(receipt.copies_available, 1);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(copies(&library, "Dune"), 1);
    assert_eq!(a.held_count(), 0);
}

#[test]
fn test_missing_title_fails_like_empty_stock() {
    let (_dir, mut library) = open_library();
    register(&mut library, "Emma", 0);
    let mut reader = Borrower::new("Reader", false);

    let missing = library.borrow_book("Persuasion", &mut reader).unwrap();
    let empty = library.borrow_book("Emma", &mut reader).unwrap();

    assert!(!missing.is_success());
    assert!(!empty.is_success());
    assert_eq!(missing.is_success(), empty.is_success());
    assert_eq!(missing.code(), ErrorCode::NoSuchItem);
    assert_eq!(empty.code(), ErrorCode::ItemNotAvailable);
    assert_eq!(snapshot(&library), vec![0]);
    assert_eq!(reader.held_count(), 0);
}

#[test]
fn test_fourth_borrow_is_refused() {
    let (_dir, mut library) = open_library();
    for title in ["One", "Two", "Three", "Four"] {
        register(&mut library, title, 1);
    }
    let mut reader = Borrower::new("Reader", false);

    for title in ["One", "Two", "Three"] {
        assert!(library.borrow_book(title, &mut reader).unwrap().is_success());
    }
    let before = snapshot(&library);

    let outcome = library.borrow_book("Four", &mut reader).unwrap();
    assert_eq!(outcome, BorrowOutcome::LimitReached { held: 3, max: 3 });
    assert_eq!(reader.held_count(), 3);
    assert_eq!(snapshot(&library), before);
}

#[test]
fn test_return_of_unborrowed_title() {
    let (_dir, mut library) = open_library();
    register(&mut library, "Dune", 2);
    register(&mut library, "Emma", 1);
    let mut a = Borrower::new("A", false);
    let mut b = Borrower::new("B", false);

    assert!(library.borrow_book("Dune", &mut a).unwrap().is_success());
    let before = snapshot(&library);

    // B never borrowed Dune, even though A holds a copy
    assert_eq!(library.return_book("Dune", &mut b).unwrap(), ReturnOutcome::NotHeld);
    assert_eq!(library.return_book("Emma", &mut a).unwrap(), ReturnOutcome::NotHeld);
    assert_eq!(snapshot(&library), before);
    assert_eq!(a.held_count(), 1);
}

#[test]
fn test_copies_are_conserved() {
    let (_dir, mut library) = open_library();
    let totals = [("Dune", 2u32), ("Emma", 1), ("Walden", 3)];
    for (title, quantity) in totals {
        register(&mut library, title, quantity);
    }
    let mut borrowers = vec![
        Borrower::new("A", false),
        Borrower::new("B", false),
        Borrower::new("C", false),
    ];

    // deterministic walk over borrow/return combinations
    let steps = [
        (0, "Dune", true),
        (1, "dune", true),
        (2, "DUNE", true),
        (0, "Emma", true),
        (1, "Emma", true),
        (0, "Walden", true),
        (0, "Walden", true),
        (1, "Dune", false),
        (2, "Dune", true),
        (0, "Emma", false),
        (1, "Emma", true),
        (2, "Walden", true),
        (0, "Dune", false),
        (0, "Walden", false),
        (2, "Walden", true),
        (2, "Walden", true),
    ];

    for (who, title, borrow) in steps {
        if borrow {
            library.borrow_book(title, &mut borrowers[who]).unwrap();
        } else {
            library.return_book(title, &mut borrowers[who]).unwrap();
        }

        for (index, (book_title, total)) in totals.iter().enumerate() {
            let available = copies(&library, book_title);
            let held: usize = borrowers
                .iter()
                .map(|b| b.loans().iter().filter(|l| l.book_id.0 == index).count())
                .sum();
            assert!(available <= *total);
            assert_eq!(available as usize + held, *total as usize, "conservation for {book_title}");
        }
        assert!(borrowers.iter().all(|b| b.held_count() <= 3));
    }
}

const TITLES: [&str; 4] = ["Dune", "Emma", "Walden", "Ulysses"];

/// (borrower index, title index, borrow or return). Title index 4 names
/// a book that was never registered.
fn operation() -> impl Strategy<Value = (usize, usize, bool)> {
    (0..3usize, 0..=TITLES.len(), any::<bool>())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_any_sequence_conserves_copies(
        totals in prop::array::uniform4(0..4u32),
        operations in prop::collection::vec(operation(), 0..40),
    ) {
        let (_dir, mut library) = open_library();
        for (title, total) in TITLES.iter().zip(totals) {
            register(&mut library, title, total);
        }
        let mut borrowers: Vec<Borrower> =
            ["A", "B", "C"].iter().map(|name| Borrower::new(*name, false)).collect();

        for (who, title_index, borrow) in operations {
            let title = TITLES.get(title_index).copied().unwrap_or("Persuasion");
            let before = snapshot(&library);
            let held_before = borrowers[who].held_count();

            let changed = if borrow {
                library.borrow_book(title, &mut borrowers[who]).unwrap().is_success()
            } else {
                library.return_book(title, &mut borrowers[who]).unwrap().is_success()
            };
            if !changed {
                prop_assert_eq!(snapshot(&library), before);
                prop_assert_eq!(borrowers[who].held_count(), held_before);
            }

            for (index, total) in totals.iter().enumerate() {
                let available = library.list_catalog()[index].copies_available;
                let held: usize = borrowers
                    .iter()
                    .map(|b| b.loans().iter().filter(|l| l.book_id.0 == index).count())
                    .sum();
                prop_assert!(available <= *total);
                prop_assert_eq!(available as usize + held, *total as usize);
            }
            prop_assert!(borrowers.iter().all(|b| b.held_count() <= 3));
        }
    }
}
