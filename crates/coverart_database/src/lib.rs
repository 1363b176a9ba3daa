//! PostgreSQL integration for the cover art redirect service.
//!
//! Answers [`CoverArtStore`](coverart_interface::CoverArtStore) lookups from
//! the `musicbrainz` and `cover_art_archive` schemas of a MusicBrainz
//! database replica. Queries are raw SQL run through diesel on a blocking
//! thread, one pooled connection per lookup.
//!
//! # Example
//!
//! ```rust,ignore
//! use coverart_database::{PostgresCoverArtStore, establish_pool};
//!
//! let pool = establish_pool("postgres://musicbrainz@localhost/musicbrainz_db", 4)?;
//! let store = PostgresCoverArtStore::new(pool);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod connection;
mod queries;
mod store;

pub use connection::{PgPool, establish_pool};
pub use store::PostgresCoverArtStore;

use coverart_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
