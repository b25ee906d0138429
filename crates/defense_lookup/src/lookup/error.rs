//! Error types for identity lookups.

use thiserror::Error;

/// Reasons a lookup can fail. Every failure is final for that query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Input was empty or contained something other than digits
    #[error("Identity number must be numeric")]
    InvalidInput,

    /// The dataset failed to load at startup
    #[error("Data not available: {reason}")]
    DataUnavailable { reason: String },

    /// Well-formed input that matches no row
    #[error("No student found with identity number {identity}")]
    NotFound { identity: String },
}

impl LookupError {
    /// Returns true if the user can fix this by correcting their input.
    pub fn is_user_error(&self) -> bool {
        matches!(self, LookupError::InvalidInput | LookupError::NotFound { .. })
    }

    /// Short machine-readable tag for API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::InvalidInput => "invalid_input",
            LookupError::DataUnavailable { .. } => "data_unavailable",
            LookupError::NotFound { .. } => "not_found",
        }
    }
}
