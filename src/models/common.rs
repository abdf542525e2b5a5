//! Common types shared across catalog models.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// CDN template for cover images addressed by `md5_image`.
const COVER_URL_TEMPLATE: &str =
    "https://e-cdns-images.dzcdn.net/images/cover/{md5}/{size}-000000-80-0-0.jpg";

/// Build a cover image URL from an image checksum and a size such as `"1000x1000"`.
pub fn image_url(md5_image: &str, size: &str) -> String {
    COVER_URL_TEMPLATE
        .replace("{md5}", md5_image)
        .replace("{size}", size)
}

/// The `type` tag carried by every catalog record.
///
/// Values outside the known vocabulary are kept verbatim in
/// [`RecordType::Other`] so they survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordType {
    Track,
    Album,
    Artist,
    Playlist,
    User,
    Radio,
    Other(String),
}

impl RecordType {
    pub fn as_str(&self) -> &str {
        match self {
            RecordType::Track => "track",
            RecordType::Album => "album",
            RecordType::Artist => "artist",
            RecordType::Playlist => "playlist",
            RecordType::User => "user",
            RecordType::Radio => "radio",
            RecordType::Other(tag) => tag,
        }
    }

    /// Whether the tag is outside the known vocabulary.
    pub fn is_unknown(&self) -> bool {
        matches!(self, RecordType::Other(_))
    }
}

impl From<String> for RecordType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "track" => RecordType::Track,
            "album" => RecordType::Album,
            "artist" => RecordType::Artist,
            "playlist" => RecordType::Playlist,
            "user" => RecordType::User,
            "radio" => RecordType::Radio,
            _ => RecordType::Other(tag),
        }
    }
}

impl From<&str> for RecordType {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<RecordType> for String {
    fn from(tag: RecordType) -> Self {
        match tag {
            RecordType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credit role of a contributor on a track.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContributorRole {
    Main,
    Featured,
    Other(String),
}

impl ContributorRole {
    pub fn as_str(&self) -> &str {
        match self {
            ContributorRole::Main => "Main",
            ContributorRole::Featured => "Featured",
            ContributorRole::Other(role) => role,
        }
    }
}

impl From<String> for ContributorRole {
    fn from(role: String) -> Self {
        match role.as_str() {
            "Main" => ContributorRole::Main,
            "Featured" => ContributorRole::Featured,
            _ => ContributorRole::Other(role),
        }
    }
}

impl From<&str> for ContributorRole {
    fn from(role: &str) -> Self {
        Self::from(role.to_string())
    }
}

impl From<ContributorRole> for String {
    fn from(role: ContributorRole) -> Self {
        match role {
            ContributorRole::Other(role) => role,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ContributorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A nested record that upstream may omit or send as `null`.
///
/// Both cases are kept apart so a record serializes back to the payload it
/// was parsed from. Fields of this type should be skipped when absent.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Absent,
    Null,
    Present(T),
}

impl<T> Nested<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Nested::Absent)
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Nested::Present(value) => Some(value),
            Nested::Absent | Nested::Null => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Nested::Present(value) => Some(value),
            Nested::Absent | Nested::Null => None,
        }
    }
}

impl<T: Serialize> Serialize for Nested<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nested::Present(value) => value.serialize(serializer),
            Nested::Absent | Nested::Null => serializer.serialize_none(),
        }
    }
}

/// Decoded explicit-content rating code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplicitContent {
    NotExplicit,
    Explicit,
    Unknown,
    Edited,
    PartiallyExplicit,
    PartiallyUnknown,
    NoAdviceAvailable,
    PartiallyNoAdviceAvailable,
    Other(u32),
}

impl From<u32> for ExplicitContent {
    fn from(code: u32) -> Self {
        match code {
            0 => ExplicitContent::NotExplicit,
            1 => ExplicitContent::Explicit,
            2 => ExplicitContent::Unknown,
            3 => ExplicitContent::Edited,
            4 => ExplicitContent::PartiallyExplicit,
            5 => ExplicitContent::PartiallyUnknown,
            6 => ExplicitContent::NoAdviceAvailable,
            7 => ExplicitContent::PartiallyNoAdviceAvailable,
            other => ExplicitContent::Other(other),
        }
    }
}

/// Release date broken into parts.
///
/// Not all fields may be available; year is always present when known,
/// but month and day may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReleaseDate {
    /// Year of release, `0` when unknown.
    pub year: i32,

    /// Month of release (1-12), if known.
    pub month: Option<u32>,

    /// Day of release (1-31), if known.
    pub day: Option<u32>,
}

impl ReleaseDate {
    /// Parse a date string in "YYYY-MM-DD" format.
    ///
    /// Lenient: unparseable parts are dropped instead of failing.
    pub fn parse(date_str: &str) -> Self {
        if date_str.is_empty() {
            return Self::default();
        }

        let parts: Vec<&str> = date_str.split('-').collect();

        Self {
            year: parts.first().and_then(|s| s.parse().ok()).unwrap_or(0),
            month: parts
                .get(1)
                .and_then(|s| s.parse().ok())
                .filter(|m| (1..=12).contains(m)),
            day: parts
                .get(2)
                .and_then(|s| s.parse().ok())
                .filter(|d| (1..=31).contains(d)),
        }
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.month, self.day) {
            (Some(m), Some(d)) => write!(f, "{:04}-{:02}-{:02}", self.year, m, d),
            (Some(m), None) => write!(f, "{:04}-{:02}", self.year, m),
            _ => write!(f, "{:04}", self.year),
        }
    }
}

/// Pick the largest non-empty picture URL, walking down from `xl`.
pub(crate) fn largest_of<'a>(ladder: [&'a str; 5]) -> Option<&'a str> {
    ladder.into_iter().find(|url| !url.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_release_date_full() {
        let date = ReleaseDate::parse("2023-05-15");
        assert_eq!(date.year, 2023);
        assert_eq!(date.month, Some(5));
        assert_eq!(date.day, Some(15));
        assert_eq!(date.to_string(), "2023-05-15");
    }

    #[test]
    fn test_parse_release_date_year_only() {
        let date = ReleaseDate::parse("2020");
        assert_eq!(date.year, 2020);
        assert_eq!(date.month, None);
        assert_eq!(date.day, None);
    }

    #[test]
    fn test_parse_release_date_placeholder() {
        let date = ReleaseDate::parse("0000-00-00");
        assert_eq!(date.year, 0);
        assert_eq!(date.month, None);
        assert_eq!(date.to_string(), "0000");
    }

    #[test]
    fn test_record_type_fallback() {
        assert_eq!(RecordType::from("track"), RecordType::Track);
        let odd = RecordType::from("podcast");
        assert!(odd.is_unknown());
        assert_eq!(String::from(odd), "podcast");
    }

    #[test]
    fn test_record_type_serde() {
        let tag: RecordType = serde_json::from_str("\"episode\"").unwrap();
        assert_eq!(tag, RecordType::Other("episode".to_string()));
        assert_eq!(serde_json::to_string(&RecordType::Album).unwrap(), "\"album\"");
    }

    #[test]
    fn test_contributor_role() {
        assert_eq!(ContributorRole::from("Main"), ContributorRole::Main);
        assert_eq!(
            ContributorRole::from("Composer"),
            ContributorRole::Other("Composer".to_string())
        );
        assert_eq!(ContributorRole::from("Featured").to_string(), "Featured");
    }

    #[test]
    fn test_explicit_content_codes() {
        assert_eq!(ExplicitContent::from(0), ExplicitContent::NotExplicit);
        assert_eq!(ExplicitContent::from(6), ExplicitContent::NoAdviceAvailable);
        assert_eq!(ExplicitContent::from(42), ExplicitContent::Other(42));
    }

    #[test]
    fn test_nested_serializes_null_and_value() {
        let null: Nested<u32> = Nested::Null;
        assert_eq!(serde_json::to_string(&null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Nested::Present(7)).unwrap(), "7");
        assert!(Nested::<u32>::Absent.is_absent());
        assert_eq!(Nested::Present(7).get(), Some(&7));
        assert_eq!(null.into_option(), None);
    }

    #[test]
    fn test_image_url_generation() {
        let url = image_url("abcd1234", "1000x1000");
        assert_eq!(
            url,
            "https://e-cdns-images.dzcdn.net/images/cover/abcd1234/1000x1000-000000-80-0-0.jpg"
        );
    }

    #[test]
    fn test_largest_of_skips_empty() {
        assert_eq!(largest_of(["", "big", "medium", "", ""]), Some("big"));
        assert_eq!(largest_of(["", "", "", "", ""]), None);
    }
}
