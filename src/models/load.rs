//! Load outcome classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Result kind of an attempt to resolve playable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadOutcome {
    /// A single track was resolved.
    Track,
    /// An ordered collection of tracks was resolved.
    Playlist,
    /// Search results were returned.
    Search,
    /// Nothing matched.
    Empty,
    /// Resolution failed.
    Error,
}

impl LoadOutcome {
    /// All outcomes, in declaration order.
    pub const ALL: [LoadOutcome; 5] = [
        LoadOutcome::Track,
        LoadOutcome::Playlist,
        LoadOutcome::Search,
        LoadOutcome::Empty,
        LoadOutcome::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadOutcome::Track => "track",
            LoadOutcome::Playlist => "playlist",
            LoadOutcome::Search => "search",
            LoadOutcome::Empty => "empty",
            LoadOutcome::Error => "error",
        }
    }
}

impl FromStr for LoadOutcome {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LoadOutcome::ALL
            .into_iter()
            .find(|outcome| outcome.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownLoadOutcome(s.to_string()))
    }
}

impl fmt::Display for LoadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
