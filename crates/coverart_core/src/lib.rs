//! Core data types for the cover art redirect service.
//!
//! Everything in this crate is pure: parsing request path segments into
//! typed values, deriving the object name of a selected image, and
//! assembling the storage URL a client is redirected to.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod entity;
mod mbid;
mod selection;
mod target;

pub use entity::EntityKind;
pub use mbid::Mbid;
pub use selection::{CoverRequest, ImageId, Side, ThumbnailSize, object_name, thumbnail_suffix};
pub use target::{RedirectTarget, storage_object_name};
