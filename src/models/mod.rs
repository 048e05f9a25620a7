//! Data models for the library catalog

pub mod book;
pub mod borrower;
pub mod loan;

// Re-export commonly used types
pub use book::{Book, BookId, CreateBook};
pub use borrower::Borrower;
pub use loan::{BorrowOutcome, Loan, LoanReceipt, ReturnOutcome};
