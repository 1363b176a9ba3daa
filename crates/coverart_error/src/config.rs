//! Configuration errors raised while loading `coverart-redirect.toml`.

/// Why the service configuration could not be assembled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A key without a usable default is absent or empty
    /// (`database_url`, or an `s3_prefix` that is only slashes)
    #[display("{} is required", _0)]
    MissingKey(&'static str),
    /// Layered sources could not be read or merged
    #[display("Failed to build configuration: {}", _0)]
    Sources(String),
    /// Merged values do not fit the configuration shape
    #[display("Failed to parse configuration: {}", _0)]
    Deserialize(String),
}

/// Configuration error with source location tracking.
///
/// Startup aborts on any of these, so they are never shown to HTTP clients.
///
/// # Examples
///
/// ```
/// use coverart_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::MissingKey("database_url"));
/// assert_eq!(err.kind.to_string(), "database_url is required");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// What went wrong
    pub kind: ConfigErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
