//! Static index page errors.

/// Static index page could not be read.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Index Error: {} at line {} in {}", message, line, file)]
pub struct IndexError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl IndexError {
    /// Create a new IndexError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
