//! Error types for the cover art redirect service.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Every error maps onto one [`ErrorClass`], which the HTTP layer turns
//! into a status code. The client-facing text is [`CoverArtError::message`],
//! which never carries the source location.
//!
//! # Examples
//!
//! ```
//! use coverart_error::{CoverArtResult, ErrorClass, RequestError, RequestErrorKind};
//!
//! fn parse_entity(segment: &str) -> CoverArtResult<()> {
//!     Err(RequestError::new(RequestErrorKind::UnsupportedEntity(segment.to_string())))?
//! }
//!
//! let err = parse_entity("artist").unwrap_err();
//! assert_eq!(err.class(), ErrorClass::BadRequest);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod database;
mod error;
mod index;
mod not_found;
mod request;

pub use config::{ConfigError, ConfigErrorKind};
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{CoverArtError, CoverArtErrorKind, CoverArtResult, ErrorClass};
pub use index::IndexError;
pub use not_found::{NotFoundError, NotFoundErrorKind};
pub use request::{RequestError, RequestErrorKind};
