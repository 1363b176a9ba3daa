//! Dispatcher scenarios against the in-memory store.

use async_trait::async_trait;
use coverart_core::{EntityKind, ImageId, Mbid, RedirectTarget, Side};
use coverart_error::{
    CoverArtErrorKind, CoverArtResult, DatabaseError, DatabaseErrorKind, ErrorClass,
};
use coverart_interface::{CoverArtStore, MemoryImage, MemoryRelease, MemoryStore};
use coverart_server::{Dispatcher, Outcome, RedirectConfigBuilder};
use std::sync::Arc;

const PREFIX: &str = "//archive.org/download";
const RELEASE: &str = "76df3287-6cda-33eb-8e9a-044b5e15ffdd";
const MERGED: &str = "4e304316-386d-3409-af2e-78857eec5cfe";
const GROUP: &str = "a6a1aa8d-3a6a-4a0f-bc2c-8d0a1f3d2f11";
const OTHER: &str = "c0c0c0c0-1111-2222-3333-444455556666";
const OLD_GROUP: &str = "5b11f4ce-a62d-471e-81fc-a69a8278c7da";

fn mbid(raw: &str) -> Mbid {
    Mbid::parse(raw).unwrap()
}

fn dispatcher(store: Arc<MemoryStore>) -> Dispatcher {
    let config = RedirectConfigBuilder::default()
        .s3_prefix(PREFIX)
        .build()
        .unwrap();
    Dispatcher::new(store, Arc::new(config))
}

fn sample_store() -> MemoryStore {
    MemoryStore::new()
        .release(
            mbid(RELEASE),
            MemoryRelease::new()
                .group(mbid(GROUP))
                .date(Some(1994), Some(10), Some(3))
                .image(MemoryImage::new(100, 1).side(Side::Front))
                .image(MemoryImage::new(101, 2).side(Side::Back))
                .image(MemoryImage::new(102, 3)),
        )
        .release(mbid(OTHER), MemoryRelease::new())
        .redirect(EntityKind::Release, mbid(MERGED), mbid(RELEASE))
}

fn redirect_to(outcome: Outcome) -> String {
    match outcome {
        Outcome::Redirect(target) => target.to_string(),
        Outcome::Index => panic!("expected a redirect"),
    }
}

#[tokio::test]
async fn front_thumbnail_redirects_to_storage_name() {
    let store = Arc::new(sample_store());
    let outcome = dispatcher(store)
        .dispatch(&format!("/release/{RELEASE}/front-250.jpg"))
        .await
        .unwrap();

    assert_eq!(
        redirect_to(outcome),
        format!("{PREFIX}/mbid-{RELEASE}/mbid-{RELEASE}-100_thumb250.jpg")
    );
}

#[tokio::test]
async fn back_and_full_size() {
    let store = Arc::new(sample_store());
    let outcome = dispatcher(store)
        .dispatch(&format!("/release/{RELEASE}/back.jpg"))
        .await
        .unwrap();

    assert_eq!(
        redirect_to(outcome),
        format!("{PREFIX}/mbid-{RELEASE}/mbid-{RELEASE}-101.jpg")
    );
}

#[tokio::test]
async fn explicit_image_id_with_large_thumbnail() {
    let store = Arc::new(sample_store());
    let outcome = dispatcher(store)
        .dispatch(&format!("/release/{RELEASE}/102-500.jpg"))
        .await
        .unwrap();

    assert_eq!(
        redirect_to(outcome),
        format!("{PREFIX}/mbid-{RELEASE}/mbid-{RELEASE}-102_thumb500.jpg")
    );
}

#[tokio::test]
async fn unknown_image_id_is_not_found() {
    let store = Arc::new(sample_store());
    let err = dispatcher(store)
        .dispatch(&format!("/release/{RELEASE}/999.jpg"))
        .await
        .unwrap_err();

    assert_eq!(err.class(), ErrorClass::NotFound);
    assert_eq!(err.message(), "cover image with id 999 not found");
}

#[tokio::test]
async fn non_numeric_image_id_is_bad_request() {
    let store = Arc::new(sample_store());
    let err = dispatcher(store)
        .dispatch(&format!("/release/{RELEASE}/abc.jpg"))
        .await
        .unwrap_err();

    assert_eq!(err.class(), ErrorClass::BadRequest);
    assert_eq!(err.message(), "id abc.jpg is not a valid cover image id");
}

#[tokio::test]
async fn directory_request_redirects_to_index_listing() {
    let store = Arc::new(sample_store());
    let outcome = dispatcher(store)
        .dispatch(&format!("/release/{RELEASE}"))
        .await
        .unwrap();

    assert_eq!(
        redirect_to(outcome),
        format!("{PREFIX}/mbid-{RELEASE}/index.json")
    );
}

#[tokio::test]
async fn trailing_slash_is_a_directory_request() {
    let store = Arc::new(sample_store());
    let outcome = dispatcher(store)
        .dispatch(&format!("/release/{RELEASE}/"))
        .await
        .unwrap();

    assert_eq!(
        redirect_to(outcome),
        format!("{PREFIX}/mbid-{RELEASE}/index.json")
    );
}

#[tokio::test]
async fn release_without_cover_art_names_the_identifier() {
    let store = Arc::new(sample_store());
    let err = dispatcher(store)
        .dispatch(&format!("/release/{OTHER}"))
        .await
        .unwrap_err();

    assert_eq!(err.class(), ErrorClass::NotFound);
    assert_eq!(
        err.message(),
        format!("No cover art found for release {OTHER}")
    );
}

#[tokio::test]
async fn missing_side_names_side_and_identifier() {
    let store = Arc::new(sample_store());
    let err = dispatcher(store)
        .dispatch(&format!("/release/{OTHER}/back"))
        .await
        .unwrap_err();

    assert_eq!(err.class(), ErrorClass::NotFound);
    assert_eq!(
        err.message(),
        format!("No back cover image found for release with identifier {OTHER}")
    );
}

#[tokio::test]
async fn merged_identifier_redirects_to_canonical() {
    let store = Arc::new(sample_store());
    let outcome = dispatcher(store)
        .dispatch(&format!("/release/{MERGED}/front.jpg"))
        .await
        .unwrap();

    let location = redirect_to(outcome);
    assert_eq!(
        location,
        format!("{PREFIX}/mbid-{RELEASE}/mbid-{RELEASE}-100.jpg")
    );
    assert!(!location.contains(MERGED));
}

#[tokio::test]
async fn upper_case_identifier_is_normalized() {
    let store = Arc::new(sample_store());
    let outcome = dispatcher(store)
        .dispatch(&format!("/release/{}/front", RELEASE.to_uppercase()))
        .await
        .unwrap();

    assert_eq!(
        redirect_to(outcome),
        format!("{PREFIX}/mbid-{RELEASE}/mbid-{RELEASE}-100.jpg")
    );
}

#[tokio::test]
async fn malformed_identifier_never_reaches_the_store() {
    let store = Arc::new(sample_store());
    let err = dispatcher(store.clone())
        .dispatch("/release/not-a-uuid")
        .await
        .unwrap_err();

    assert_eq!(err.class(), ErrorClass::BadRequest);
    assert_eq!(err.message(), "invalid identifier specified");
    assert_eq!(store.lookups(), 0);
}

#[tokio::test]
async fn missing_identifier() {
    let store = Arc::new(sample_store());
    for path in ["/release", "/release/", "/release-group//front"] {
        let err = dispatcher(store.clone()).dispatch(path).await.unwrap_err();
        assert_eq!(err.class(), ErrorClass::BadRequest, "{path}");
        assert_eq!(err.message(), "no identifier specified", "{path}");
    }
    assert_eq!(store.lookups(), 0);
}

#[tokio::test]
async fn unsupported_entity() {
    let store = Arc::new(sample_store());
    let err = dispatcher(store.clone())
        .dispatch(&format!("/artist/{RELEASE}"))
        .await
        .unwrap_err();

    assert_eq!(err.class(), ErrorClass::BadRequest);
    assert_eq!(
        err.message(),
        "Only release and release-group entities are currently supported"
    );
    assert_eq!(store.lookups(), 0);
}

#[tokio::test]
async fn root_is_the_index_page() {
    let store = Arc::new(sample_store());
    let outcome = dispatcher(store).dispatch("/").await.unwrap();
    assert_eq!(outcome, Outcome::Index);
}

#[tokio::test]
async fn release_group_front_uses_representative_release() {
    let store = Arc::new(sample_store());
    let outcome = dispatcher(store.clone())
        .dispatch(&format!("/release-group/{GROUP}/front-500"))
        .await
        .unwrap();

    assert_eq!(
        redirect_to(outcome),
        format!("{PREFIX}/mbid-{RELEASE}/mbid-{RELEASE}-100_thumb500.jpg")
    );
    // merge lookup, group selection, side selection
    assert_eq!(store.lookups(), 3);
}

#[tokio::test]
async fn release_group_directory_lists_representative_release() {
    let store = Arc::new(sample_store());
    let outcome = dispatcher(store)
        .dispatch(&format!("/release-group/{GROUP}"))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Redirect(RedirectTarget::index(PREFIX, &mbid(RELEASE)))
    );
}

#[tokio::test]
async fn release_group_rejects_back_before_any_selection() {
    let store = Arc::new(MemoryStore::new());
    let err = dispatcher(store.clone())
        .dispatch(&format!("/release-group/{GROUP}/back.jpg"))
        .await
        .unwrap_err();

    assert_eq!(err.class(), ErrorClass::BadRequest);
    assert_eq!(err.message(), "back.jpg not supported for release groups.");
    // only the merge lookup ran
    assert_eq!(store.lookups(), 1);
}

#[tokio::test]
async fn release_group_rejects_image_ids() {
    let store = Arc::new(sample_store());
    let err = dispatcher(store)
        .dispatch(&format!("/release-group/{GROUP}/100.jpg"))
        .await
        .unwrap_err();

    assert_eq!(err.class(), ErrorClass::BadRequest);
}

#[tokio::test]
async fn release_group_without_art_is_not_found() {
    let store = Arc::new(sample_store());
    let err = dispatcher(store)
        .dispatch(&format!("/release-group/{OTHER}"))
        .await
        .unwrap_err();

    assert_eq!(err.class(), ErrorClass::NotFound);
    assert_eq!(
        err.message(),
        format!("No cover art found for release group {OTHER}")
    );
}

#[tokio::test]
async fn percent_encoded_filename_is_decoded() {
    let store = Arc::new(sample_store());
    let outcome = dispatcher(store)
        .dispatch(&format!("/release/{RELEASE}/front%2D250.jpg"))
        .await
        .unwrap();

    assert_eq!(
        redirect_to(outcome),
        format!("{PREFIX}/mbid-{RELEASE}/mbid-{RELEASE}-100_thumb250.jpg")
    );
}

#[tokio::test]
async fn percent_encoded_entity_and_identifier_are_decoded() {
    let store = Arc::new(sample_store());
    let outcome = dispatcher(store)
        .dispatch(&format!("/release%2Dgroup/{}", GROUP.replace('-', "%2d")))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Redirect(RedirectTarget::index(PREFIX, &mbid(RELEASE)))
    );
}

#[tokio::test]
async fn non_utf8_segment_is_bad_request() {
    let store = Arc::new(sample_store());
    let err = dispatcher(store.clone())
        .dispatch(&format!("/release/{RELEASE}/%FF.jpg"))
        .await
        .unwrap_err();

    assert_eq!(err.class(), ErrorClass::BadRequest);
    assert_eq!(err.message(), "path segment %FF.jpg is not valid UTF-8");
    assert_eq!(store.lookups(), 0);
}

#[tokio::test]
async fn release_group_rejection_echoes_decoded_filename() {
    let store = Arc::new(sample_store());
    let err = dispatcher(store)
        .dispatch(&format!("/release-group/{GROUP}/back%2Ejpg"))
        .await
        .unwrap_err();

    assert_eq!(err.class(), ErrorClass::BadRequest);
    assert_eq!(err.message(), "back.jpg not supported for release groups.");
}

#[tokio::test]
async fn merged_release_group_uses_canonical_group() {
    let store = Arc::new(sample_store().redirect(
        EntityKind::ReleaseGroup,
        mbid(OLD_GROUP),
        mbid(GROUP),
    ));
    let outcome = dispatcher(store)
        .dispatch(&format!("/release-group/{OLD_GROUP}/front"))
        .await
        .unwrap();

    assert_eq!(
        redirect_to(outcome),
        format!("{PREFIX}/mbid-{RELEASE}/mbid-{RELEASE}-100.jpg")
    );
}

#[tokio::test]
async fn release_redirect_does_not_apply_to_release_groups() {
    let store = Arc::new(sample_store().redirect(
        EntityKind::Release,
        mbid(OLD_GROUP),
        mbid(GROUP),
    ));
    let err = dispatcher(store)
        .dispatch(&format!("/release-group/{OLD_GROUP}/front"))
        .await
        .unwrap_err();

    assert_eq!(err.class(), ErrorClass::NotFound);
    assert_eq!(
        err.message(),
        format!("No cover art found for release group {OLD_GROUP}")
    );
}

/// Store whose every lookup fails.
struct BrokenStore;

#[async_trait]
impl CoverArtStore for BrokenStore {
    async fn find_redirect(&self, _: EntityKind, _: &Mbid) -> CoverArtResult<Option<Mbid>> {
        let kind = DatabaseErrorKind::Connection("refused".into());
        Err(DatabaseError::new(kind).into())
    }

    async fn has_cover_art(&self, _: &Mbid) -> CoverArtResult<bool> {
        unreachable!("merge lookup fails first")
    }

    async fn cover_by_side(&self, _: &Mbid, _: Side) -> CoverArtResult<Option<ImageId>> {
        unreachable!("merge lookup fails first")
    }

    async fn has_image(&self, _: &Mbid, _: ImageId) -> CoverArtResult<bool> {
        unreachable!("merge lookup fails first")
    }

    async fn group_front_release(&self, _: &Mbid) -> CoverArtResult<Option<Mbid>> {
        unreachable!("merge lookup fails first")
    }
}

#[tokio::test]
async fn store_failures_propagate_as_internal() {
    let config = RedirectConfigBuilder::default()
        .s3_prefix(PREFIX)
        .build()
        .unwrap();
    let err = Dispatcher::new(Arc::new(BrokenStore), Arc::new(config))
        .dispatch(&format!("/release/{RELEASE}/front"))
        .await
        .unwrap_err();

    assert_eq!(err.class(), ErrorClass::Internal);
    assert!(matches!(err.kind(), CoverArtErrorKind::Database(_)));
    assert_eq!(err.message(), "Internal Server Error");
}
