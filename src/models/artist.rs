//! Artist model.

use serde::Serialize;
use serde_json::Value;

use super::common::{largest_of, RecordType};

/// An artist record, as embedded in a track or returned by the artist endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artist {
    /// Unmodelled upstream payload, passed through untouched.
    pub data: Value,

    pub id: u64,

    pub name: String,

    pub link: String,

    pub share: String,

    pub picture: String,
    pub picture_small: String,
    pub picture_medium: String,
    pub picture_big: String,
    pub picture_xl: String,

    pub radio: bool,

    pub tracklist: String,

    #[serde(rename = "type")]
    pub type_: RecordType,
}

impl Artist {
    /// Largest available picture URL.
    pub fn largest_picture(&self) -> Option<&str> {
        largest_of([
            self.picture_xl.as_str(),
            self.picture_big.as_str(),
            self.picture_medium.as_str(),
            self.picture_small.as_str(),
            self.picture.as_str(),
        ])
    }
}
