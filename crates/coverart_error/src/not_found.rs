//! Missing cover art errors.

/// Selection stage at which no cover art was found.
///
/// Identifiers are carried as their lower-cased text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum NotFoundErrorKind {
    /// Release has no cover art at all
    #[display("No cover art found for release {}", _0)]
    Release(String),
    /// No release in the group has a front image
    #[display("No cover art found for release group {}", _0)]
    ReleaseGroup(String),
    /// Release has no image of the requested side
    #[display("No {} cover image found for release with identifier {}", side, mbid)]
    Side {
        /// Lower-case side name (`front` or `back`)
        side: String,
        /// Release identifier
        mbid: String,
    },
    /// Image id does not belong to the release
    #[display("cover image with id {} not found", _0)]
    ImageId(i64),
}

/// Not-found error with source location tracking.
///
/// # Examples
///
/// ```
/// use coverart_error::{NotFoundError, NotFoundErrorKind};
///
/// let err = NotFoundError::new(NotFoundErrorKind::ImageId(42));
/// assert!(err.kind.to_string().contains("42"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Not Found: {} at line {} in {}", kind, line, file)]
pub struct NotFoundError {
    /// The kind of error that occurred
    pub kind: NotFoundErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl NotFoundError {
    /// Create a new NotFoundError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NotFoundErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
