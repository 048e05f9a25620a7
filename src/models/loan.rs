//! Loan (borrow) model and lending outcomes

use chrono::{DateTime, Utc};

use super::book::BookId;
use crate::error::ErrorCode;

/// A book held by a borrower
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    pub book_id: BookId,
    pub borrowed_at: DateTime<Utc>,
}

impl Loan {
    pub fn new(book_id: BookId) -> Self {
        Self {
            book_id,
            borrowed_at: Utc::now(),
        }
    }
}

/// Summary of a completed borrow or return
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanReceipt {
    pub book_id: BookId,
    pub title: String,
    pub borrower: String,
    /// Stock left after the operation
    pub copies_available: u32,
}

/// Result of a borrow attempt, preconditions checked in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowOutcome {
    Borrowed(LoanReceipt),
    NotFound,
    LimitReached { held: usize, max: usize },
    OutOfStock,
}

impl BorrowOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BorrowOutcome::Borrowed(_))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            BorrowOutcome::Borrowed(_) => ErrorCode::Success,
            BorrowOutcome::NotFound => ErrorCode::NoSuchItem,
            BorrowOutcome::LimitReached { .. } => ErrorCode::MaxBorrowsReached,
            BorrowOutcome::OutOfStock => ErrorCode::ItemNotAvailable,
        }
    }
}

/// Result of a return attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnOutcome {
    Returned(LoanReceipt),
    NotHeld,
}

impl ReturnOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ReturnOutcome::Returned(_))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ReturnOutcome::Returned(_) => ErrorCode::Success,
            ReturnOutcome::NotHeld => ErrorCode::NotBorrowed,
        }
    }
}
