//! Entity kinds addressable by the redirect service.

/// Kind of MusicBrainz entity named by the first path segment.
///
/// # Examples
///
/// ```
/// use coverart_core::EntityKind;
///
/// let kind: EntityKind = "release-group".parse().unwrap();
/// assert_eq!(kind, EntityKind::ReleaseGroup);
/// assert_eq!(kind.to_string(), "release-group");
/// assert!("artist".parse::<EntityKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
pub enum EntityKind {
    /// A single release
    #[strum(serialize = "release")]
    Release,
    /// A release group, answered by one of its releases
    #[strum(serialize = "release-group")]
    ReleaseGroup,
}
