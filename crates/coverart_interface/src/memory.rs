//! In-memory store.

use crate::CoverArtStore;
use async_trait::async_trait;
use coverart_core::{EntityKind, ImageId, Mbid, Side};
use coverart_error::CoverArtResult;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, instrument};

/// One stored image of a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryImage {
    id: ImageId,
    ordering: i32,
    sides: Vec<Side>,
}

impl MemoryImage {
    /// Image with the given id and position within its release.
    pub fn new(id: i64, ordering: i32) -> Self {
        Self {
            id: ImageId(id),
            ordering,
            sides: Vec::new(),
        }
    }

    /// Tag the image with a side.
    pub fn side(mut self, side: Side) -> Self {
        self.sides.push(side);
        self
    }
}

/// A release and its cover art.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRelease {
    group: Option<Mbid>,
    date: (Option<i16>, Option<i16>, Option<i16>),
    images: Vec<MemoryImage>,
}

impl MemoryRelease {
    /// Release with no group, no date and no images.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the release in a release group.
    pub fn group(mut self, group: Mbid) -> Self {
        self.group = Some(group);
        self
    }

    /// Set the (possibly partial) release date.
    pub fn date(mut self, year: Option<i16>, month: Option<i16>, day: Option<i16>) -> Self {
        self.date = (year, month, day);
        self
    }

    /// Attach an image.
    pub fn image(mut self, image: MemoryImage) -> Self {
        self.images.push(image);
        self
    }

    fn front_image(&self) -> Option<&MemoryImage> {
        self.images_of(Side::Front).next()
    }

    fn images_of(&self, side: Side) -> impl Iterator<Item = &MemoryImage> {
        let mut matching: Vec<&MemoryImage> = self
            .images
            .iter()
            .filter(|image| image.sides.contains(&side))
            .collect();
        matching.sort_by_key(|image| image.ordering);
        matching.into_iter()
    }

    // Ascending by year, month, day with unknown parts after known ones.
    fn date_key(&self) -> (bool, Option<i16>, bool, Option<i16>, bool, Option<i16>) {
        let (y, m, d) = self.date;
        (y.is_none(), y, m.is_none(), m, d.is_none(), d)
    }
}

/// [`CoverArtStore`] backed by in-process tables.
///
/// Counts every lookup so tests can assert how many round trips a
/// request made.
///
/// # Examples
///
/// ```
/// use coverart_core::{Mbid, Side};
/// use coverart_interface::{MemoryImage, MemoryRelease, MemoryStore};
///
/// let release = Mbid::parse("76df3287-6cda-33eb-8e9a-044b5e15ffdd").unwrap();
/// let store = MemoryStore::new().release(
///     release,
///     MemoryRelease::new().image(MemoryImage::new(100, 1).side(Side::Front)),
/// );
/// assert_eq!(store.lookups(), 0);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    redirects: HashMap<(EntityKind, Mbid), Mbid>,
    releases: BTreeMap<Mbid, MemoryRelease>,
    group_covers: HashMap<Mbid, Mbid>,
    lookups: AtomicUsize,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `old` was merged into `new`.
    pub fn redirect(mut self, kind: EntityKind, old: Mbid, new: Mbid) -> Self {
        self.redirects.insert((kind, old), new);
        self
    }

    /// Add a release.
    pub fn release(mut self, mbid: Mbid, release: MemoryRelease) -> Self {
        self.releases.insert(mbid, release);
        self
    }

    /// Designate the release whose art represents a release group.
    pub fn group_cover(mut self, group: Mbid, release: Mbid) -> Self {
        self.group_covers.insert(group, release);
        self
    }

    /// Number of store lookups served so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn count(&self) {
        self.lookups.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl CoverArtStore for MemoryStore {
    #[instrument(skip(self), fields(mbid = %mbid))]
    async fn find_redirect(&self, kind: EntityKind, mbid: &Mbid) -> CoverArtResult<Option<Mbid>> {
        self.count();
        Ok(self.redirects.get(&(kind, mbid.clone())).cloned())
    }

    #[instrument(skip(self), fields(release = %release))]
    async fn has_cover_art(&self, release: &Mbid) -> CoverArtResult<bool> {
        self.count();
        Ok(self
            .releases
            .get(release)
            .is_some_and(|r| !r.images.is_empty()))
    }

    #[instrument(skip(self), fields(release = %release))]
    async fn cover_by_side(&self, release: &Mbid, side: Side) -> CoverArtResult<Option<ImageId>> {
        self.count();
        Ok(self
            .releases
            .get(release)
            .and_then(|r| r.images_of(side).next())
            .map(|image| image.id))
    }

    #[instrument(skip(self), fields(release = %release, image = %image))]
    async fn has_image(&self, release: &Mbid, image: ImageId) -> CoverArtResult<bool> {
        self.count();
        Ok(self
            .releases
            .get(release)
            .is_some_and(|r| r.images.iter().any(|i| i.id == image)))
    }

    #[instrument(skip(self), fields(group = %group))]
    async fn group_front_release(&self, group: &Mbid) -> CoverArtResult<Option<Mbid>> {
        self.count();
        let members = || {
            self.releases
                .iter()
                .filter(|(_, r)| r.group.as_ref() == Some(group) && r.front_image().is_some())
        };

        if let Some(designated) = self.group_covers.get(group) {
            if members().any(|(mbid, _)| mbid == designated) {
                debug!(release = %designated, "Using designated group cover release");
                return Ok(Some(designated.clone()));
            }
        }

        Ok(members()
            .min_by_key(|(_, r)| r.date_key())
            .map(|(mbid, _)| mbid.clone()))
    }
}
