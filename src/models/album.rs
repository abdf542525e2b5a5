//! Album model.

use serde::Serialize;

use super::common::{image_url, largest_of, Nested, RecordType, ReleaseDate};
use super::track::Track;

/// An album record.
///
/// `tracks` holds a single embedded [`Track`], not a list. It is the one
/// optional field in the model: a track embeds its album and an album embeds
/// a track, so requiring both would admit no finite payload. Albums nested
/// inside a track carry no `tracks` key; an explicit `null` is kept as
/// [`Nested::Null`] and written back as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Album {
    pub id: u64,

    pub title: String,

    pub link: String,

    pub cover: String,
    pub cover_small: String,
    pub cover_medium: String,
    pub cover_big: String,
    pub cover_xl: String,

    /// Checksum addressing the cover on the image CDN.
    pub md5_image: String,

    /// Release date as sent upstream; not validated.
    pub release_date: String,

    pub tracklist: String,

    #[serde(rename = "type")]
    pub type_: RecordType,

    #[serde(skip_serializing_if = "Nested::is_absent")]
    pub tracks: Nested<Box<Track>>,
}

impl Album {
    /// The embedded track, if the payload carried one.
    pub fn track(&self) -> Option<&Track> {
        self.tracks.get().map(|track| &**track)
    }

    /// Release date broken into parts.
    pub fn release_date(&self) -> ReleaseDate {
        ReleaseDate::parse(&self.release_date)
    }

    /// Cover URL at an arbitrary size, built from `md5_image`.
    pub fn cover_url(&self, size: &str) -> String {
        image_url(&self.md5_image, size)
    }

    /// Largest available cover URL.
    pub fn largest_cover(&self) -> Option<&str> {
        largest_of([
            self.cover_xl.as_str(),
            self.cover_big.as_str(),
            self.cover_medium.as_str(),
            self.cover_small.as_str(),
            self.cover.as_str(),
        ])
    }
}
