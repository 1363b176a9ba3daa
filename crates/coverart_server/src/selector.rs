//! Cover image selection against the store.

use coverart_core::{ImageId, Mbid, Side, ThumbnailSize, object_name};
use coverart_error::{CoverArtResult, NotFoundError, NotFoundErrorKind};
use coverart_interface::CoverArtStore;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Picks the image object that answers a request.
///
/// Image-returning methods yield the object file name (`{id}{suffix}.jpg`),
/// ready for [`RedirectTarget::image`](coverart_core::RedirectTarget::image).
#[derive(Clone)]
pub struct CoverSelector {
    store: Arc<dyn CoverArtStore>,
}

impl CoverSelector {
    /// Selector over the given store.
    pub fn new(store: Arc<dyn CoverArtStore>) -> Self {
        Self { store }
    }

    /// Confirm the release has any cover art, for index listings.
    #[instrument(skip(self), fields(release = %release))]
    pub async fn index(&self, release: &Mbid) -> CoverArtResult<Mbid> {
        if self.store.has_cover_art(release).await? {
            Ok(release.clone())
        } else {
            let kind = NotFoundErrorKind::Release(release.to_string());
            Err(NotFoundError::new(kind).into())
        }
    }

    /// Lowest-ordered image of a side.
    #[instrument(skip(self), fields(release = %release, side = %side))]
    pub async fn by_side(
        &self,
        release: &Mbid,
        side: Side,
        thumbnail: ThumbnailSize,
    ) -> CoverArtResult<String> {
        match self.store.cover_by_side(release, side).await? {
            Some(id) => {
                debug!(image = %id, "Selected image by side");
                Ok(object_name(id, thumbnail))
            }
            None => {
                let kind = NotFoundErrorKind::Side {
                    side: side.to_string(),
                    mbid: release.to_string(),
                };
                Err(NotFoundError::new(kind).into())
            }
        }
    }

    /// Image named by the leading digits of `token`.
    #[instrument(skip(self), fields(release = %release))]
    pub async fn by_image_id(
        &self,
        release: &Mbid,
        token: &str,
        thumbnail: ThumbnailSize,
    ) -> CoverArtResult<String> {
        let id = ImageId::parse(token)?;
        if self.store.has_image(release, id).await? {
            Ok(object_name(id, thumbnail))
        } else {
            let kind = NotFoundErrorKind::ImageId(id.0);
            Err(NotFoundError::new(kind).into())
        }
    }

    /// Release whose front cover stands for a release group.
    #[instrument(skip(self), fields(group = %group))]
    pub async fn group_front(&self, group: &Mbid) -> CoverArtResult<Mbid> {
        match self.store.group_front_release(group).await? {
            Some(release) => {
                debug!(release = %release, "Selected representative release");
                Ok(release)
            }
            None => {
                let kind = NotFoundErrorKind::ReleaseGroup(group.to_string());
                Err(NotFoundError::new(kind).into())
            }
        }
    }
}
