use std::fmt;

/// Error types for application operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The phone catalogue could not be fetched or decoded
    FetchFailed(String),
    /// Writing an export file failed
    Export(String),
    /// The newsletter email did not look like an address
    InvalidEmail(String),
    /// General error with a message
    General(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::FetchFailed(msg) => write!(f, "Fetch failed: {}", msg),
            AppError::Export(msg) => write!(f, "Export failed: {}", msg),
            AppError::InvalidEmail(email) => {
                write!(f, "Please enter a valid email address (got '{}')", email)
            }
            AppError::General(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
