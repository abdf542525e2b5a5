//! Contributor model: a person or entity credited on a track.

use serde::Serialize;

use super::common::{largest_of, ContributorRole, RecordType};

/// A credited contributor, as listed in a track's `contributors` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contributor {
    pub id: u64,

    pub name: String,

    /// Canonical web link.
    pub link: String,

    /// Royalty share. Kept as text since upstream formatting is not guaranteed numeric.
    pub share: String,

    pub picture: String,
    pub picture_small: String,
    pub picture_medium: String,
    pub picture_big: String,
    pub picture_xl: String,

    /// Whether an artist radio is available.
    pub radio: bool,

    pub tracklist: String,

    /// Type marker, `artist` in practice.
    #[serde(rename = "type")]
    pub type_: RecordType,

    /// Credit role, e.g. `Main` or `Featured`.
    pub role: ContributorRole,
}

impl Contributor {
    /// Whether this contributor is credited as a main artist.
    pub fn is_main(&self) -> bool {
        self.role == ContributorRole::Main
    }

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
