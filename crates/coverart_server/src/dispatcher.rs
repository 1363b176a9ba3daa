//! Request path dispatch.

use crate::{CoverSelector, RedirectConfig, Resolver};
use coverart_core::{CoverRequest, EntityKind, Mbid, RedirectTarget, Side};
use coverart_error::{CoverArtResult, RequestError, RequestErrorKind};
use coverart_interface::CoverArtStore;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, instrument};

/// What a request resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Serve the static index page
    Index,
    /// Temporary redirect into the object store
    Redirect(RedirectTarget),
}

/// Turns `/{entity}/{mbid}[/{filename}]` into an [`Outcome`].
///
/// Each step is a gate: entity kind, identifier presence, identifier
/// format, merge resolution, then cover selection. The first failing
/// step ends the request.
#[derive(Clone)]
pub struct Dispatcher {
    config: Arc<RedirectConfig>,
    resolver: Resolver,
    selector: CoverSelector,
}

impl Dispatcher {
    /// Dispatcher over the given store and configuration.
    pub fn new(store: Arc<dyn CoverArtStore>, config: Arc<RedirectConfig>) -> Self {
        Self {
            config,
            resolver: Resolver::new(store.clone()),
            selector: CoverSelector::new(store),
        }
    }

    /// Resolve a request path.
    #[instrument(skip(self))]
    pub async fn dispatch(&self, path: &str) -> CoverArtResult<Outcome> {
        let decoded = path
            .trim_start_matches('/')
            .split('/')
            .take(3)
            .map(decode_segment)
            .collect::<Result<Vec<_>, _>>()?;
        let mut segments = decoded.iter().map(|s| &**s);

        let entity = match segments.next() {
            None | Some("") => return Ok(Outcome::Index),
            Some(entity) => entity,
        };
        let kind: EntityKind = entity.parse().map_err(|_| {
            RequestError::new(RequestErrorKind::UnsupportedEntity(entity.to_string()))
        })?;

        let mbid = Mbid::parse(segments.next().unwrap_or_default())?;
        let mbid = self.resolver.resolve(kind, mbid).await?;

        let filename = segments.next().filter(|f| !f.is_empty());
        let request = CoverRequest::parse(filename);
        debug!(kind = %kind, request = ?request, "Dispatching cover request");

        match kind {
            EntityKind::Release => self.release(mbid, request).await,
            EntityKind::ReleaseGroup => {
                self.release_group(mbid, request, filename.unwrap_or_default())
                    .await
            }
        }
    }

    async fn release(&self, mbid: Mbid, request: CoverRequest) -> CoverArtResult<Outcome> {
        match request {
            CoverRequest::Index => {
                let mbid = self.selector.index(&mbid).await?;
                Ok(self.index(&mbid))
            }
            CoverRequest::Side(side, thumbnail) => {
                let file_name = self.selector.by_side(&mbid, side, thumbnail).await?;
                self.image(&mbid, &file_name)
            }
            CoverRequest::ImageId(token, thumbnail) => {
                let file_name = self.selector.by_image_id(&mbid, &token, thumbnail).await?;
                self.image(&mbid, &file_name)
            }
        }
    }

    // Release groups answer with the art of one of their releases and only
    // know about the front cover.
    async fn release_group(
        &self,
        group: Mbid,
        request: CoverRequest,
        filename: &str,
    ) -> CoverArtResult<Outcome> {
        match request {
            CoverRequest::Index => {
                let release = self.selector.group_front(&group).await?;
                Ok(self.index(&release))
            }
            CoverRequest::Side(Side::Front, thumbnail) => {
                let release = self.selector.group_front(&group).await?;
                let file_name = self
                    .selector
                    .by_side(&release, Side::Front, thumbnail)
                    .await?;
                self.image(&release, &file_name)
            }
            CoverRequest::Side(Side::Back, _) | CoverRequest::ImageId(..) => {
                let kind = RequestErrorKind::UnsupportedForReleaseGroup(filename.to_string());
                Err(RequestError::new(kind).into())
            }
        }
    }

    fn index(&self, release: &Mbid) -> Outcome {
        Outcome::Redirect(RedirectTarget::index(self.config.s3_prefix(), release))
    }

    fn image(&self, release: &Mbid, file_name: &str) -> CoverArtResult<Outcome> {
        let target = RedirectTarget::image(self.config.s3_prefix(), release, file_name)?;
        Ok(Outcome::Redirect(target))
    }
}

// Segments are split before decoding, so an escaped `/` stays inside its segment.
fn decode_segment(segment: &str) -> Result<Cow<'_, str>, RequestError> {
    urlencoding::decode(segment).map_err(|_| {
        let kind = RequestErrorKind::InvalidEncoding(segment.to_string());
        RequestError::new(kind)
    })
}
