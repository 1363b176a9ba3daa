//! Redirect targets in the object store.

use crate::Mbid;
use coverart_error::{RequestError, RequestErrorKind};

/// Rewrite an image file name to the storage naming convention.
///
/// Thumbnails are stored as `{id}_thumb250.jpg` / `{id}_thumb500.jpg`.
///
/// # Examples
///
/// ```
/// use coverart_core::storage_object_name;
///
/// assert_eq!(storage_object_name("100-250.jpg"), "100_thumb250.jpg");
/// assert_eq!(storage_object_name("100-500.jpg"), "100_thumb500.jpg");
/// assert_eq!(storage_object_name("100.jpg"), "100.jpg");
/// ```
pub fn storage_object_name(file_name: &str) -> String {
    if let Some(stem) = file_name.strip_suffix("-250.jpg") {
        format!("{stem}_thumb250.jpg")
    } else if let Some(stem) = file_name.strip_suffix("-500.jpg") {
        format!("{stem}_thumb500.jpg")
    } else {
        file_name.to_string()
    }
}

/// Absolute location a client is redirected to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}", _0)]
pub struct RedirectTarget(String);

impl RedirectTarget {
    /// Bucket index listing for a release.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverart_core::{Mbid, RedirectTarget};
    ///
    /// let mbid = Mbid::parse("76df3287-6cda-33eb-8e9a-044b5e15ffdd").unwrap();
    /// let target = RedirectTarget::index("//archive.org/download", &mbid);
    /// assert_eq!(
    ///     target.as_str(),
    ///     "//archive.org/download/mbid-76df3287-6cda-33eb-8e9a-044b5e15ffdd/index.json"
    /// );
    /// ```
    pub fn index(prefix: &str, mbid: &Mbid) -> Self {
        Self(format!("{prefix}/mbid-{mbid}/index.json"))
    }

    /// A single image object of a release.
    ///
    /// `file_name` is the selected image name (`{id}{suffix}.jpg`); it is
    /// rewritten with [`storage_object_name`] before concatenation.
    pub fn image(prefix: &str, mbid: &Mbid, file_name: &str) -> Result<Self, RequestError> {
        if file_name.is_empty() {
            return Err(RequestError::new(RequestErrorKind::MissingFilename));
        }
        let object = storage_object_name(file_name);
        Ok(Self(format!("{prefix}/mbid-{mbid}/mbid-{mbid}-{object}")))
    }

    /// URL text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
