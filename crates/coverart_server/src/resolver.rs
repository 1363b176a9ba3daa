//! Merge redirect resolution.

use coverart_core::{EntityKind, Mbid};
use coverart_error::CoverArtResult;
use coverart_interface::CoverArtStore;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Maps an identifier to the one it was merged into.
#[derive(Clone)]
pub struct Resolver {
    store: Arc<dyn CoverArtStore>,
}

impl Resolver {
    /// Resolver over the given store.
    pub fn new(store: Arc<dyn CoverArtStore>) -> Self {
        Self { store }
    }

    /// Canonical identifier for `mbid`.
    ///
    /// One store lookup, one hop. An identifier that was never merged
    /// comes back unchanged.
    #[instrument(skip(self), fields(kind = %kind, mbid = %mbid))]
    pub async fn resolve(&self, kind: EntityKind, mbid: Mbid) -> CoverArtResult<Mbid> {
        match self.store.find_redirect(kind, &mbid).await? {
            Some(canonical) => {
                debug!(canonical = %canonical, "Following merge redirect");
                Ok(canonical)
            }
            None => Ok(mbid),
        }
    }
}
