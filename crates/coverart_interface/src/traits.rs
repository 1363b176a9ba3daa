//! Collaborator store capability.

use async_trait::async_trait;
use coverart_core::{EntityKind, ImageId, Mbid, Side};
use coverart_error::CoverArtResult;

/// Read-only view of merge history and cover art metadata.
///
/// Every method is a single round trip. Absence is reported as `None` or
/// `false`; errors are reserved for the store itself failing.
#[async_trait]
pub trait CoverArtStore: Send + Sync + 'static {
    /// Identifier that `mbid` was merged into, if any.
    async fn find_redirect(&self, kind: EntityKind, mbid: &Mbid) -> CoverArtResult<Option<Mbid>>;

    /// Whether the release has any cover art at all.
    async fn has_cover_art(&self, release: &Mbid) -> CoverArtResult<bool>;

    /// Lowest-ordered image of the given side.
    async fn cover_by_side(&self, release: &Mbid, side: Side) -> CoverArtResult<Option<ImageId>>;

    /// Whether `image` belongs to the release.
    async fn has_image(&self, release: &Mbid, image: ImageId) -> CoverArtResult<bool>;

    /// Release supplying the front cover of a release group.
    ///
    /// The group's designated cover art release wins when it has a front
    /// image; otherwise the earliest release with a front image.
    async fn group_front_release(&self, group: &Mbid) -> CoverArtResult<Option<Mbid>>;
}
