//! Cover image selection requests.
//!
//! The optional third path segment (the "filename hint") is turned into a
//! [`CoverRequest`] in one step. Prefix matching on `front`/`back` happens
//! here and nowhere else.

use coverart_error::{RequestError, RequestErrorKind};

/// Side of the packaging an image shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
pub enum Side {
    /// Front cover
    #[strum(serialize = "front")]
    Front,
    /// Back cover
    #[strum(serialize = "back")]
    Back,
}

impl Side {
    /// Name of the matching row in `cover_art_archive.art_type`.
    pub fn art_type_name(self) -> &'static str {
        match self {
            Side::Front => "Front",
            Side::Back => "Back",
        }
    }
}

/// Rendition of an image encoded in the filename hint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThumbnailSize {
    /// Original upload
    #[default]
    Full,
    /// 250px thumbnail
    Small,
    /// 500px thumbnail
    Large,
}

impl ThumbnailSize {
    /// Derive the rendition from a filename hint.
    ///
    /// Only the text after the first `-` is inspected, so `front-250.jpg`
    /// and `1234-250x250` are small thumbnails while `front` is full size.
    pub fn from_hint(hint: &str) -> Self {
        match hint.split_once('-') {
            Some((_, size)) if size.starts_with("250") => ThumbnailSize::Small,
            Some((_, size)) if size.starts_with("500") => ThumbnailSize::Large,
            _ => ThumbnailSize::Full,
        }
    }

    /// Suffix appended to the image id in the object name.
    pub fn suffix(self) -> &'static str {
        match self {
            ThumbnailSize::Full => "",
            ThumbnailSize::Small => "-250",
            ThumbnailSize::Large => "-500",
        }
    }
}

/// Thumbnail suffix (`""`, `"-250"` or `"-500"`) for a filename hint.
///
/// # Examples
///
/// ```
/// use coverart_core::thumbnail_suffix;
///
/// assert_eq!(thumbnail_suffix("1234-250x250"), "-250");
/// assert_eq!(thumbnail_suffix("1234-500"), "-500");
/// assert_eq!(thumbnail_suffix("1234-300"), "");
/// assert_eq!(thumbnail_suffix("front"), "");
/// ```
pub fn thumbnail_suffix(hint: &str) -> &'static str {
    ThumbnailSize::from_hint(hint).suffix()
}

/// Numeric id of a stored cover image.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::From,
)]
pub struct ImageId(pub i64);

impl ImageId {
    /// Parse the leading run of ASCII digits of a filename hint.
    ///
    /// Whatever follows the digits (thumbnail marker, extension) is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverart_core::ImageId;
    ///
    /// assert_eq!(ImageId::parse("42.jpg").unwrap(), ImageId(42));
    /// assert_eq!(ImageId::parse("42-250.jpg").unwrap(), ImageId(42));
    /// assert!(ImageId::parse("abc.jpg").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, RequestError> {
        let end = token
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(token.len());
        match token[..end].parse::<i64>() {
            Ok(id) => Ok(ImageId(id)),
            Err(_) => {
                let kind = RequestErrorKind::InvalidImageId(token.to_string());
                Err(RequestError::new(kind))
            }
        }
    }
}

/// What the filename hint asks for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CoverRequest {
    /// No filename: the bucket index listing
    Index,
    /// Lowest-ordered image of a side
    Side(Side, ThumbnailSize),
    /// A specific image, by the raw filename token
    ImageId(String, ThumbnailSize),
}

impl CoverRequest {
    /// Classify the optional filename segment.
    ///
    /// An empty segment (trailing slash) counts as absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use coverart_core::{CoverRequest, Side, ThumbnailSize};
    ///
    /// assert_eq!(CoverRequest::parse(None), CoverRequest::Index);
    /// assert_eq!(
    ///     CoverRequest::parse(Some("front-250.jpg")),
    ///     CoverRequest::Side(Side::Front, ThumbnailSize::Small)
    /// );
    /// assert_eq!(
    ///     CoverRequest::parse(Some("Front.jpg")),
    ///     CoverRequest::ImageId("Front.jpg".into(), ThumbnailSize::Full)
    /// );
    /// ```
    pub fn parse(filename: Option<&str>) -> Self {
        let Some(filename) = filename.filter(|f| !f.is_empty()) else {
            return CoverRequest::Index;
        };
        let thumbnail = ThumbnailSize::from_hint(filename);
        if filename.starts_with("front") {
            CoverRequest::Side(Side::Front, thumbnail)
        } else if filename.starts_with("back") {
            CoverRequest::Side(Side::Back, thumbnail)
        } else {
            CoverRequest::ImageId(filename.to_string(), thumbnail)
        }
    }
}

/// Object file name of an image: `{id}{suffix}.jpg`.
pub fn object_name(id: ImageId, thumbnail: ThumbnailSize) -> String {
    format!("{}{}.jpg", id, thumbnail.suffix())
}
