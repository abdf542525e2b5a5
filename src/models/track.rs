//! Track model.
//!
//! A track embeds its full [`Artist`], [`Album`] and credited
//! [`Contributor`]s by value.

use serde::Serialize;
use serde_json::{Number, Value};

use super::album::Album;
use super::artist::Artist;
use super::common::{image_url, ExplicitContent, RecordType, ReleaseDate};
use super::contributor::Contributor;

/// A full track record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    /// Track ID. Unlike the other records this is textual upstream.
    pub id: String,

    /// Unmodelled upstream payload, passed through untouched.
    pub data: Value,

    /// Whether the track can be streamed.
    pub readable: bool,

    pub title: String,
    pub title_short: String,
    pub title_version: String,

    pub isrc: String,

    pub link: String,

    pub share: String,

    /// Duration in seconds.
    pub duration: u32,

    /// Position on the disc (1-indexed).
    pub track_position: u32,

    /// Disc number (1-indexed).
    pub disk_number: u32,

    /// Popularity rank.
    pub rank: u64,

    /// Release date as sent upstream; not validated.
    pub release_date: String,

    pub explicit_lyrics: bool,

    /// Rating code for the lyrics, see [`ExplicitContent`].
    pub explicit_content_lyrics: u32,

    /// Rating code for the cover art, see [`ExplicitContent`].
    pub explicit_content_cover: u32,

    /// 30 second preview URL.
    pub preview: String,

    /// Tempo in beats per minute, as sent (`0` and `0.0` stay distinct).
    pub bpm: Number,

    /// Loudness offset in dB, as sent.
    pub gain: Number,

    /// Country codes where the track is available. Empty means unknown.
    pub available_countries: Vec<String>,

    pub contributors: Vec<Contributor>,

    pub md5_image: String,

    pub artist: Artist,

    pub album: Album,

    #[serde(rename = "type")]
    pub type_: RecordType,
}

impl Track {
    /// Get the primary artist name.
    pub fn primary_artist(&self) -> &str {
        &self.artist.name
    }

    /// Contributors credited with the `Main` role, in credit order.
    pub fn main_contributors(&self) -> impl Iterator<Item = &Contributor> {
        self.contributors.iter().filter(|c| c.is_main())
    }

    /// Get all contributor names joined by a separator.
    ///
    /// Falls back to the embedded artist when no contributors are listed.
    pub fn contributors_string(&self, separator: &str) -> String {
        if self.contributors.is_empty() {
            return self.artist.name.clone();
        }

        self.contributors
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Tempo in beats per minute.
    pub fn bpm(&self) -> f64 {
        self.bpm.as_f64().unwrap_or_default()
    }

    /// Loudness offset in dB.
    pub fn gain(&self) -> f64 {
        self.gain.as_f64().unwrap_or_default()
    }

    /// Get duration formatted as MM:SS.
    pub fn duration_formatted(&self) -> String {
        let minutes = self.duration / 60;
        let seconds = self.duration % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }

    /// Release date broken into parts.
    pub fn release_date(&self) -> ReleaseDate {
        ReleaseDate::parse(&self.release_date)
    }

    /// Whether the track is available in the given country.
    ///
    /// Returns `None` when no availability data was sent.
    pub fn is_available_in(&self, country: &str) -> Option<bool> {
        if self.available_countries.is_empty() {
            return None;
        }

        Some(
            self.available_countries
                .iter()
                .any(|c| c.eq_ignore_ascii_case(country)),
        )
    }

    /// Whether the lyrics are flagged explicit, by flag or rating code.
    pub fn is_explicit(&self) -> bool {
        self.explicit_lyrics || self.lyrics_rating() == ExplicitContent::Explicit
    }

    pub fn lyrics_rating(&self) -> ExplicitContent {
        ExplicitContent::from(self.explicit_content_lyrics)
    }

    pub fn cover_rating(&self) -> ExplicitContent {
        ExplicitContent::from(self.explicit_content_cover)
    }

    /// Cover URL at an arbitrary size, built from `md5_image`.
    pub fn cover_url(&self, size: &str) -> String {
        image_url(&self.md5_image, size)
    }
}
