//! Borrower model

use super::book::BookId;
use super::loan::Loan;

/// Maximum number of books a borrower may hold at once
pub const DEFAULT_MAX_LOANS: usize = 3;

/// A session identity and the books it currently holds
#[derive(Debug, Clone)]
pub struct Borrower {
    name: String,
    is_admin: bool,
    pub(crate) loans: Vec<Loan>,
}

impl Borrower {
    pub fn new(name: impl Into<String>, is_admin: bool) -> Self {
        Self {
            name: name.into(),
            is_admin,
            loans: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fixed at construction
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Loans in borrow order
    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn held_count(&self) -> usize {
        self.loans.len()
    }

    pub fn holds(&self, book_id: BookId) -> bool {
        self.loans.iter().any(|loan| loan.book_id == book_id)
    }

    pub fn can_borrow(&self, max_loans: usize) -> bool {
        self.loans.len() < max_loans
    }

    pub fn can_borrow_default(&self) -> bool {
        self.can_borrow(DEFAULT_MAX_LOANS)
    }
}
