//! Error types for the library catalog

use thiserror::Error;

/// Outcome codes shared by every catalog and lending operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success,
    Failure,
    NoSuchItem,
    ItemNotAvailable,
    MaxBorrowsReached,
    NotBorrowed,
    BadValue,
    StorageFailure,
}

impl ErrorCode {
    pub fn is_success(self) -> bool {
        self == ErrorCode::Success
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// A persisted line does not decode into a catalog entry.
    /// `line` is 1-based; 0 means the line was decoded in isolation.
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::MalformedRecord { .. } | AppError::Io(_) => ErrorCode::StorageFailure,
            AppError::Validation(_) | AppError::InvalidInput(_) => ErrorCode::BadValue,
            AppError::Config(_) => ErrorCode::Failure,
        }
    }

    /// Attach a file line number to a record decoding failure
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            AppError::MalformedRecord { reason, .. } => AppError::MalformedRecord { line, reason },
            other => other,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
