//! MusicBrainz identifiers.

use coverart_error::{RequestError, RequestErrorKind};
use regex::Regex;
use std::sync::LazyLock;

static MBID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}$")
        .expect("MBID pattern is a valid regex")
});

/// A validated, lower-cased MusicBrainz identifier.
///
/// The only way to build one is [`Mbid::parse`], so every `Mbid` that
/// reaches a store query is a well-formed UUID in canonical text form.
///
/// # Examples
///
/// ```
/// use coverart_core::Mbid;
///
/// let mbid = Mbid::parse("76DF3287-6CDA-33EB-8E9A-044B5E15FFDD").unwrap();
/// assert_eq!(mbid.as_str(), "76df3287-6cda-33eb-8e9a-044b5e15ffdd");
/// assert!(Mbid::parse("not-a-uuid").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{}", _0)]
pub struct Mbid(String);

impl Mbid {
    /// Validate a path segment as an identifier.
    ///
    /// Letter case is normalized before the 8-4-4-4-12 hex shape is checked.
    pub fn parse(raw: &str) -> Result<Self, RequestError> {
        if raw.is_empty() {
            return Err(RequestError::new(RequestErrorKind::MissingIdentifier));
        }
        let lowered = raw.to_ascii_lowercase();
        if MBID_PATTERN.is_match(&lowered) {
            Ok(Self(lowered))
        } else {
            Err(RequestError::new(RequestErrorKind::InvalidIdentifier(
                raw.to_string(),
            )))
        }
    }

    /// Canonical text form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
