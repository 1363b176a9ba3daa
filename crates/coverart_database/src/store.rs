//! [`CoverArtStore`] backed by PostgreSQL.

use crate::queries::{
    COVER_BY_ID, COVER_BY_SIDE, COVER_PRESENCE, GROUP_FRONT_RELEASE, GidRow, ImageIdRow,
    RELEASE_GROUP_REDIRECT, RELEASE_REDIRECT,
};
use crate::{DatabaseResult, PgPool};
use async_trait::async_trait;
use coverart_core::{EntityKind, ImageId, Mbid, Side};
use coverart_error::{CoverArtResult, DatabaseError, DatabaseErrorKind};
use coverart_interface::CoverArtStore;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text};
use tracing::{debug, instrument};

/// Database-backed cover art store.
#[derive(Clone)]
pub struct PostgresCoverArtStore {
    pool: PgPool,
}

impl std::fmt::Debug for PostgresCoverArtStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresCoverArtStore")
            .field("pool", &self.pool.state())
            .finish()
    }
}

impl PostgresCoverArtStore {
    /// Create a store over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run a query on a pooled connection off the async runtime.
    async fn run<T, F>(&self, query: F) -> DatabaseResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> DatabaseResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            query(&mut conn)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Task(e.to_string())))?
    }
}

fn to_mbid(row: GidRow) -> DatabaseResult<Mbid> {
    Mbid::parse(&row.gid).map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::Query(format!(
            "store returned malformed gid {}",
            row.gid
        )))
    })
}

#[async_trait]
impl CoverArtStore for PostgresCoverArtStore {
    #[instrument(skip(self), fields(mbid = %mbid))]
    async fn find_redirect(&self, kind: EntityKind, mbid: &Mbid) -> CoverArtResult<Option<Mbid>> {
        let sql = match kind {
            EntityKind::Release => RELEASE_REDIRECT,
            EntityKind::ReleaseGroup => RELEASE_GROUP_REDIRECT,
        };
        let gid = mbid.as_str().to_owned();
        let row = self
            .run(move |conn| {
                Ok(diesel::sql_query(sql)
                    .bind::<Text, _>(gid)
                    .get_result::<GidRow>(conn)
                    .optional()?)
            })
            .await?;
        debug!(merged = row.is_some(), "Merge lookup finished");
        Ok(row.map(to_mbid).transpose()?)
    }

    #[instrument(skip(self), fields(release = %release))]
    async fn has_cover_art(&self, release: &Mbid) -> CoverArtResult<bool> {
        let gid = release.as_str().to_owned();
        let row = self
            .run(move |conn| {
                Ok(diesel::sql_query(COVER_PRESENCE)
                    .bind::<Text, _>(gid)
                    .get_result::<GidRow>(conn)
                    .optional()?)
            })
            .await?;
        Ok(row.is_some())
    }

    #[instrument(skip(self), fields(release = %release, side = %side))]
    async fn cover_by_side(&self, release: &Mbid, side: Side) -> CoverArtResult<Option<ImageId>> {
        let gid = release.as_str().to_owned();
        let row = self
            .run(move |conn| {
                Ok(diesel::sql_query(COVER_BY_SIDE)
                    .bind::<Text, _>(gid)
                    .bind::<Text, _>(side.art_type_name())
                    .get_result::<ImageIdRow>(conn)
                    .optional()?)
            })
            .await?;
        Ok(row.map(|r| ImageId(r.id)))
    }

    #[instrument(skip(self), fields(release = %release, image = %image))]
    async fn has_image(&self, release: &Mbid, image: ImageId) -> CoverArtResult<bool> {
        let gid = release.as_str().to_owned();
        let row = self
            .run(move |conn| {
                Ok(diesel::sql_query(COVER_BY_ID)
                    .bind::<Text, _>(gid)
                    .bind::<BigInt, _>(image.0)
                    .get_result::<ImageIdRow>(conn)
                    .optional()?)
            })
            .await?;
        Ok(row.is_some())
    }

    #[instrument(skip(self), fields(group = %group))]
    async fn group_front_release(&self, group: &Mbid) -> CoverArtResult<Option<Mbid>> {
        let gid = group.as_str().to_owned();
        let row = self
            .run(move |conn| {
                Ok(diesel::sql_query(GROUP_FRONT_RELEASE)
                    .bind::<Text, _>(gid)
                    .get_result::<GidRow>(conn)
                    .optional()?)
            })
            .await?;
        Ok(row.map(to_mbid).transpose()?)
    }
}
