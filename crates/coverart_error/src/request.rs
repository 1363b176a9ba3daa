//! Client request errors.

/// Conditions under which a request is rejected before or during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RequestErrorKind {
    /// First path segment is neither `release` nor `release-group`
    #[display("Only release and release-group entities are currently supported")]
    UnsupportedEntity(String),
    /// Path segment does not decode to UTF-8
    #[display("path segment {} is not valid UTF-8", _0)]
    InvalidEncoding(String),
    /// Identifier segment is absent or empty
    #[display("no identifier specified")]
    MissingIdentifier,
    /// Identifier segment is not a UUID
    #[display("invalid identifier specified")]
    InvalidIdentifier(String),
    /// Filename hint does not begin with an image id
    #[display("id {} is not a valid cover image id", _0)]
    InvalidImageId(String),
    /// Filename other than `front*` requested for a release group
    #[display("{} not supported for release groups.", _0)]
    UnsupportedForReleaseGroup(String),
    /// Redirect assembly was handed an empty object name
    #[display("no filename specified")]
    MissingFilename,
}

/// Request error with source location tracking.
///
/// # Examples
///
/// ```
/// use coverart_error::{RequestError, RequestErrorKind};
///
/// let err = RequestError::new(RequestErrorKind::MissingIdentifier);
/// assert_eq!(err.kind.to_string(), "no identifier specified");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Request Error: {} at line {} in {}", kind, line, file)]
pub struct RequestError {
    /// The kind of error that occurred
    pub kind: RequestErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RequestError {
    /// Create a new RequestError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RequestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
