//! Top-level error wrapper types.

use crate::{ConfigError, DatabaseError, IndexError, NotFoundError, RequestError};

/// Response class of an error, independent of any HTTP library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorClass {
    /// Malformed or unsupported request (400)
    BadRequest,
    /// No cover art for the resolved target (404)
    NotFound,
    /// Failure inside the service or its collaborators (500)
    Internal,
}

/// All error conditions of the redirect service.
///
/// # Examples
///
/// ```
/// use coverart_error::{CoverArtErrorKind, NotFoundError, NotFoundErrorKind};
///
/// let kind: CoverArtErrorKind = NotFoundError::new(NotFoundErrorKind::ImageId(7)).into();
/// assert!(format!("{}", kind).contains("Not Found"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CoverArtErrorKind {
    /// Malformed request
    #[from(RequestError)]
    Request(RequestError),
    /// Missing cover art
    #[from(NotFoundError)]
    NotFound(NotFoundError),
    /// Collaborator store failure
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Static index page unreadable
    #[from(IndexError)]
    Index(IndexError),
}

/// Cover art error with kind discrimination.
///
/// # Examples
///
/// ```
/// use coverart_error::{CoverArtError, CoverArtResult, ErrorClass, RequestError, RequestErrorKind};
///
/// fn might_fail() -> CoverArtResult<()> {
///     Err(RequestError::new(RequestErrorKind::MissingIdentifier))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert_eq!(err.class(), ErrorClass::BadRequest);
/// assert_eq!(err.message(), "no identifier specified");
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Cover Art Error: {}", _0)]
pub struct CoverArtError(Box<CoverArtErrorKind>);

impl CoverArtError {
    /// Create a new error from a kind.
    pub fn new(kind: CoverArtErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CoverArtErrorKind {
        &self.0
    }

    /// Response class used to pick the status code.
    pub fn class(&self) -> ErrorClass {
        match self.kind() {
            CoverArtErrorKind::Request(_) => ErrorClass::BadRequest,
            CoverArtErrorKind::NotFound(_) => ErrorClass::NotFound,
            CoverArtErrorKind::Database(_)
            | CoverArtErrorKind::Config(_)
            | CoverArtErrorKind::Index(_) => ErrorClass::Internal,
        }
    }

    /// Single-line diagnostic safe to show to a client.
    ///
    /// Internal failures collapse to a generic message so query text and
    /// source locations stay in the logs.
    pub fn message(&self) -> String {
        match self.kind() {
            CoverArtErrorKind::Request(e) => e.kind.to_string(),
            CoverArtErrorKind::NotFound(e) => e.kind.to_string(),
            _ => "Internal Server Error".to_string(),
        }
    }
}

// Generic From implementation for any type that converts to CoverArtErrorKind
impl<T> From<T> for CoverArtError
where
    T: Into<CoverArtErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for cover art operations.
pub type CoverArtResult<T> = std::result::Result<T, CoverArtError>;
