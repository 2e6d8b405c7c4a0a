//! Error types for the hizuke library.

use thiserror::Error;

/// Error type for the fallible hizuke operations.
///
/// The lenient entry points (decode, encode, render) never fail; these
/// variants surface from date parsing, strict decoding, and edits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HizukeError {
    /// Text is not a `yyyy-MM-dd` date or names an impossible calendar day
    #[error("Invalid date '{text}': {reason}")]
    InvalidDate { text: String, reason: String },
    /// Calendar arithmetic left the representable date range
    #[error("Adding {days} days to {date} leaves the supported date range")]
    DateOutOfRange { date: String, days: i64 },
    /// A milestone index is missing from an otherwise populated query
    #[error("Milestone index {index} is missing from the query")]
    MilestoneGap { index: usize },
    /// An edit addressed a position that does not exist
    #[error("Milestone index {index} is out of range (milestones: {len})")]
    MilestoneIndexOutOfRange { index: usize, len: usize },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> HizukeError {
        HizukeError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl HizukeError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an invalid date error for the given text.
    pub fn invalid_date(text: impl Into<String>, reason: impl ToString) -> Self {
        HizukeError::InvalidDate {
            text: text.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for hizuke operations
pub type Result<T> = std::result::Result<T, HizukeError>;
