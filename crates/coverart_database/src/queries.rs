//! SQL text and row shapes.
//!
//! Identifiers are bound as text and cast to `uuid`; `gid` columns are
//! returned as text so they can be re-validated into [`Mbid`](coverart_core::Mbid).

use diesel::QueryableByName;
use diesel::sql_types::{BigInt, Text};

pub(crate) const RELEASE_REDIRECT: &str = "
    SELECT release.gid::text AS gid
      FROM musicbrainz.release
      JOIN musicbrainz.release_gid_redirect
        ON release_gid_redirect.new_id = release.id
     WHERE release_gid_redirect.gid = $1::uuid";

pub(crate) const RELEASE_GROUP_REDIRECT: &str = "
    SELECT release_group.gid::text AS gid
      FROM musicbrainz.release_group
      JOIN musicbrainz.release_group_gid_redirect
        ON release_group_gid_redirect.new_id = release_group.id
     WHERE release_group_gid_redirect.gid = $1::uuid";

pub(crate) const COVER_PRESENCE: &str = "
    SELECT release.gid::text AS gid
      FROM musicbrainz.release
      JOIN cover_art_archive.cover_art ON cover_art.release = release.id
     WHERE release.gid = $1::uuid
     LIMIT 1";

pub(crate) const COVER_BY_SIDE: &str = "
    SELECT cover_art.id AS id
      FROM cover_art_archive.cover_art
      JOIN musicbrainz.release ON cover_art.release = release.id
      JOIN cover_art_archive.cover_art_type ON cover_art.id = cover_art_type.id
      JOIN cover_art_archive.art_type ON cover_art_type.type_id = art_type.id
     WHERE release.gid = $1::uuid
       AND art_type.name = $2
  ORDER BY cover_art.ordering ASC
     LIMIT 1";

pub(crate) const COVER_BY_ID: &str = "
    SELECT cover_art.id AS id
      FROM cover_art_archive.cover_art
      JOIN musicbrainz.release ON cover_art.release = release.id
     WHERE release.gid = $1::uuid
       AND cover_art.id = $2
     LIMIT 1";

// Designated release first (non-null sorts before null), then by date.
pub(crate) const GROUP_FRONT_RELEASE: &str = "
    SELECT DISTINCT ON (release.release_group)
           release.gid::text AS gid
      FROM cover_art_archive.index_listing
      JOIN musicbrainz.release
        ON release.id = index_listing.release
 FULL OUTER JOIN cover_art_archive.release_group_cover_art
        ON release_group_cover_art.release = release.id
      JOIN musicbrainz.release_group
        ON release_group.id = release.release_group
     WHERE release_group.gid = $1::uuid
       AND index_listing.is_front = true
  ORDER BY release.release_group, release_group_cover_art.release,
           release.date_year, release.date_month, release.date_day";

#[derive(Debug, QueryableByName)]
pub(crate) struct GidRow {
    #[diesel(sql_type = Text)]
    pub gid: String,
}

#[derive(Debug, QueryableByName)]
pub(crate) struct ImageIdRow {
    #[diesel(sql_type = BigInt)]
    pub id: i64,
}
