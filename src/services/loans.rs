//! Loan management service

use crate::{
    config::LendingConfig,
    error::AppResult,
    models::{
        book::Book,
        borrower::Borrower,
        loan::{BorrowOutcome, Loan, LoanReceipt, ReturnOutcome},
    },
    repository::books::BooksRepository,
};

#[derive(Debug, Clone)]
pub struct LoansService {
    max_loans: usize,
}

impl LoansService {
    pub fn new(config: &LendingConfig) -> Self {
        Self {
            max_loans: config.max_loans,
        }
    }

    pub fn max_loans(&self) -> usize {
        self.max_loans
    }

    /// Borrow a book by title.
    ///
    /// Checks, in order, that the title exists, that the borrower is under
    /// the loan limit and that a copy is available. Nothing changes unless
    /// all three hold and the catalog was persisted.
    pub fn borrow(
        &self,
        books: &mut BooksRepository,
        title: &str,
        borrower: &mut Borrower,
    ) -> AppResult<BorrowOutcome> {
        let Some(book_id) = books.find_by_title(title) else {
            tracing::warn!("Borrow refused for {}: no book titled '{}'", borrower.name(), title);
            return Ok(BorrowOutcome::NotFound);
        };

        if !borrower.can_borrow(self.max_loans) {
            tracing::warn!(
                "Borrow refused for {}: loan limit reached ({}/{})",
                borrower.name(),
                borrower.held_count(),
                self.max_loans
            );
            return Ok(BorrowOutcome::LimitReached {
                held: borrower.held_count(),
                max: self.max_loans,
            });
        }

        let Some(book) = books.get_mut(book_id) else {
            return Ok(BorrowOutcome::NotFound);
        };
        if book.copies_available == 0 {
            tracing::warn!("Borrow refused for {}: '{}' is out of stock", borrower.name(), book.title);
            return Ok(BorrowOutcome::OutOfStock);
        }

        book.copies_available -= 1;
        let receipt = LoanReceipt {
            book_id,
            title: book.title.clone(),
            borrower: borrower.name().to_string(),
            copies_available: book.copies_available,
        };
        borrower.loans.push(Loan::new(book_id));

        if let Err(e) = books.save() {
            tracing::error!("Failed to persist loan of '{}': {}", receipt.title, e);
            borrower.loans.pop();
            if let Some(book) = books.get_mut(book_id) {
                book.copies_available += 1;
            }
            return Err(e);
        }

        tracing::info!(
            "'{}' borrowed by {} ({} left)",
            receipt.title,
            receipt.borrower,
            receipt.copies_available
        );
        Ok(BorrowOutcome::Borrowed(receipt))
    }

    /// Return a book the borrower holds, matched by title ignoring case
    pub fn return_book(
        &self,
        books: &mut BooksRepository,
        title: &str,
        borrower: &mut Borrower,
    ) -> AppResult<ReturnOutcome> {
        let position = borrower.loans.iter().position(|loan| {
            books
                .get(loan.book_id)
                .is_some_and(|book| book.matches_title(title))
        });

        let Some(position) = position else {
            tracing::warn!("Return refused: '{}' is not held by {}", title, borrower.name());
            return Ok(ReturnOutcome::NotHeld);
        };

        let loan = borrower.loans.remove(position);
        let Some(book) = books.get_mut(loan.book_id) else {
            borrower.loans.insert(position, loan);
            return Ok(ReturnOutcome::NotHeld);
        };

        book.copies_available += 1;
        let receipt = LoanReceipt {
            book_id: loan.book_id,
            title: book.title.clone(),
            borrower: borrower.name().to_string(),
            copies_available: book.copies_available,
        };

        if let Err(e) = books.save() {
            tracing::error!("Failed to persist return of '{}': {}", receipt.title, e);
            if let Some(book) = books.get_mut(loan.book_id) {
                book.copies_available -= 1;
            }
            borrower.loans.insert(position, loan);
            return Err(e);
        }

        tracing::info!(
            "'{}' returned by {} ({} available)",
            receipt.title,
            receipt.borrower,
            receipt.copies_available
        );
        Ok(ReturnOutcome::Returned(receipt))
    }

    /// Books currently held by a borrower, in borrow order
    pub fn held_books<'a>(
        &self,
        books: &'a BooksRepository,
        borrower: &Borrower,
    ) -> Vec<(Loan, &'a Book)> {
        borrower
            .loans()
            .iter()
            .filter_map(|loan| books.get(loan.book_id).map(|book| (loan.clone(), book)))
            .collect()
    }
}
