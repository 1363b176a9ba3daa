use coverart_error::{ConfigErrorKind, CoverArtErrorKind};
use coverart_server::{RedirectConfig, RedirectConfigBuilder};
use std::net::SocketAddr;
use std::path::PathBuf;

#[test]
fn builder_fills_defaults_and_trims_prefix() {
    let config = RedirectConfigBuilder::default()
        .s3_prefix("//archive.org/download//")
        .build()
        .unwrap();

    assert_eq!(config.s3_prefix(), "//archive.org/download");
    assert_eq!(*config.listen(), SocketAddr::from(([127, 0, 0, 1], 8080)));
    assert_eq!(*config.pool_size(), 4);
    assert_eq!(config.static_path(), &PathBuf::from("./static"));
    assert!(!*config.json_logs());
}

#[test]
fn builder_requires_prefix() {
    assert!(RedirectConfigBuilder::default().build().is_err());
    let root_only = RedirectConfigBuilder::default().s3_prefix("/").build();
    assert_eq!(root_only.unwrap_err().to_string(), "s3_prefix is required");
}

#[test]
fn load_reads_file_over_bundled_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("coverart-redirect.toml");
    std::fs::write(
        &path,
        r#"
database_url = "postgres://musicbrainz@localhost/musicbrainz_db"
s3_prefix = "http://s3.example/"
pool_size = 8
"#,
    )
    .unwrap();

    let config = RedirectConfig::load(Some(&path)).unwrap();

    assert_eq!(
        config.database_url(),
        "postgres://musicbrainz@localhost/musicbrainz_db"
    );
    assert_eq!(config.s3_prefix(), "http://s3.example");
    assert_eq!(*config.pool_size(), 8);
    assert_eq!(config.static_path(), &PathBuf::from("./static"));
}

#[test]
fn load_requires_database_url() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("coverart-redirect.toml");
    std::fs::write(&path, "s3_prefix = \"http://s3.example\"\n")
        .unwrap();

    let err = RedirectConfig::load(Some(&path)).unwrap_err();
    match err.kind() {
        CoverArtErrorKind::Config(config) => {
            assert_eq!(config.kind, ConfigErrorKind::MissingKey("database_url"));
        }
        other => panic!("expected a configuration error, got {other:?}"),
    }
}

#[test]
fn load_fails_for_missing_file() {
    let path = std::path::Path::new("/nonexistent/coverart.toml");
    assert!(RedirectConfig::load(Some(path)).is_err());
}
