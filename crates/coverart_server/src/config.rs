//! Service configuration.

use ::config::{Config, Environment, File, FileFormat};
use coverart_error::{ConfigError, ConfigErrorKind, CoverArtResult};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Immutable service configuration, built once at startup.
///
/// # Examples
///
/// ```
/// use coverart_server::RedirectConfigBuilder;
///
/// let config = RedirectConfigBuilder::default()
///     .s3_prefix("//archive.org/download/")
///     .build()
///     .unwrap();
/// assert_eq!(config.s3_prefix(), "//archive.org/download");
/// assert_eq!(*config.pool_size(), 4);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Deserialize, derive_getters::Getters, derive_builder::Builder,
)]
#[builder(setter(into), build_fn(private, name = "build_unchecked"))]
pub struct RedirectConfig {
    /// Address the HTTP server binds to
    #[builder(default = "default_listen()")]
    listen: SocketAddr,

    /// PostgreSQL connection string of the MusicBrainz database
    #[builder(default)]
    #[serde(default)]
    database_url: String,

    /// Maximum pooled database connections
    #[builder(default = "4")]
    pool_size: u32,

    /// Storage prefix that object keys are appended to
    s3_prefix: String,

    /// Directory holding the static `index` page
    #[builder(default = "PathBuf::from(\"./static\")")]
    static_path: PathBuf,

    /// Emit logs as JSON lines
    #[builder(default)]
    json_logs: bool,
}

fn default_listen() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

impl RedirectConfigBuilder {
    /// Build the configuration, normalizing the storage prefix.
    pub fn build(&self) -> Result<RedirectConfig, RedirectConfigBuilderError> {
        self.build_unchecked()?
            .normalized()
            .map_err(|e| RedirectConfigBuilderError::ValidationError(e.kind.to_string()))
    }
}

impl RedirectConfig {
    /// Load configuration with precedence: environment > file > bundled default.
    ///
    /// Sources in order (later sources override earlier):
    /// 1. Bundled defaults (`coverart-redirect.toml` shipped with the crate)
    /// 2. The given file, or `./coverart-redirect.toml` if present
    /// 3. `COVERART_*` environment variables (e.g. `COVERART_S3_PREFIX`)
    pub fn load(path: Option<&Path>) -> CoverArtResult<Self> {
        const DEFAULT_CONFIG: &str = include_str!("../coverart-redirect.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("coverart-redirect").required(false)),
        };

        builder = builder.add_source(Environment::with_prefix("COVERART"));

        let config: RedirectConfig = builder
            .build()
            .map_err(|e| {
                ConfigError::new(ConfigErrorKind::Sources(e.to_string()))
            })?
            .try_deserialize()
            .map_err(|e| {
                ConfigError::new(ConfigErrorKind::Deserialize(e.to_string()))
            })?;

        let config = config.normalized()?;
        if config.database_url.is_empty() {
            let kind = ConfigErrorKind::MissingKey("database_url");
            return Err(ConfigError::new(kind).into());
        }
        debug!(listen = %config.listen, prefix = %config.s3_prefix, "Configuration loaded");
        Ok(config)
    }

    /// Replace the listen address.
    pub fn with_listen(mut self, listen: SocketAddr) -> Self {
        self.listen = listen;
        self
    }

    fn normalized(mut self) -> Result<Self, ConfigError> {
        let trimmed = self.s3_prefix.trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::new(ConfigErrorKind::MissingKey("s3_prefix")));
        }
        self.s3_prefix = trimmed.to_string();
        Ok(self)
    }
}
