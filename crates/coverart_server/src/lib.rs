//! HTTP front of the cover art redirect service.
//!
//! Requests name a release or release group by MBID plus an optional
//! filename hint (`front`, `back-250.jpg`, `1234.jpg`, ...). The
//! [`Dispatcher`] validates the MBID, follows merge redirects with the
//! [`Resolver`], picks the image with the [`CoverSelector`] and answers
//! with a `307 Temporary Redirect` into the object store.
//!
//! # Example
//!
//! ```rust,no_run
//! use coverart_interface::MemoryStore;
//! use coverart_server::{AppState, RedirectConfigBuilder, create_router};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RedirectConfigBuilder::default()
//!     .s3_prefix("//archive.org/download")
//!     .build()?;
//! let router = create_router(AppState::new(Arc::new(MemoryStore::new()), config));
//! # let _ = router;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod dispatcher;
mod resolver;
mod selector;
mod telemetry;

pub use api::{AppState, create_router};
pub use config::{RedirectConfig, RedirectConfigBuilder, RedirectConfigBuilderError};
pub use dispatcher::{Dispatcher, Outcome};
pub use resolver::Resolver;
pub use selector::CoverSelector;
pub use telemetry::init_telemetry;
