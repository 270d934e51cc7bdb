//! Index type enum
//!
//! Index types are stored in their canonical uppercase spelling. Parsing is
//! case-insensitive so `"unique"`, `"Unique"` and `"UNIQUE"` all resolve to
//! [`IndexType::Unique`].

/// The kind of an index
///
/// # Examples
///
/// ```
/// use ddlkit_types::IndexType;
///
/// assert_eq!(IndexType::parse("unique"), Some(IndexType::Unique));
/// assert_eq!(IndexType::parse("full_text"), Some(IndexType::FullText));
/// assert_eq!(IndexType::parse("bogus"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum IndexType {
    /// Entries are unique across the indexed fields
    Unique,
    /// Plain lookup index
    #[default]
    Normal,
    /// Full-text index, `FULLTEXT` spelling
    Fulltext,
    /// Full-text index, `FULL_TEXT` spelling
    FullText,
    /// Spatial (geometry) index
    Spatial,
}

impl IndexType {
    /// Every recognized index type, in declaration order
    pub const ALL: [IndexType; 5] = [
        IndexType::Unique,
        IndexType::Normal,
        IndexType::Fulltext,
        IndexType::FullText,
        IndexType::Spatial,
    ];

    /// Parse an index type from a string (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s))
    }

    /// Get the canonical uppercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IndexType::Unique => "UNIQUE",
            IndexType::Normal => "NORMAL",
            IndexType::Fulltext => "FULLTEXT",
            IndexType::FullText => "FULL_TEXT",
            IndexType::Spatial => "SPATIAL",
        }
    }

    /// Returns `true` for either full-text spelling
    #[inline]
    #[must_use]
    pub const fn is_full_text(&self) -> bool {
        matches!(self, IndexType::Fulltext | IndexType::FullText)
    }
}

impl core::fmt::Display for IndexType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for IndexType {
    type Err = IndexTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndexType::parse(s).ok_or_else(|| IndexTypeParseError {
            value: s.to_string(),
        })
    }
}

/// Error returned when parsing an unknown index type string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexTypeParseError {
    /// The rejected input, as given
    pub value: String,
}

impl core::fmt::Display for IndexTypeParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid index type '{}'", self.value)
    }
}

impl std::error::Error for IndexTypeParseError {}
