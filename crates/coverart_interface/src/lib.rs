//! Trait definitions for the cover art redirect service.
//!
//! The redirect engine never runs queries itself. It talks to a
//! [`CoverArtStore`], which exposes exactly the typed lookups the engine
//! needs. `PostgresCoverArtStore` in `coverart_database` answers them
//! from the MusicBrainz database; [`MemoryStore`] answers them from
//! in-process tables and backs the test suites.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod memory;
mod traits;

pub use memory::{MemoryImage, MemoryRelease, MemoryStore};
pub use traits::CoverArtStore;
