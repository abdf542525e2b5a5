//! Data models for Deezer catalog entities.
//!
//! Records mirror the JSON objects returned by the public API field for
//! field. They serialize back to the wire format but are only built by the
//! parsers in [`crate::converters`], which report precise schema errors.

pub mod album;
pub mod artist;
pub mod common;
pub mod contributor;
pub mod load;
pub mod track;

pub use album::Album;
pub use artist::Artist;
pub use common::{image_url, ContributorRole, ExplicitContent, Nested, RecordType, ReleaseDate};
pub use contributor::Contributor;
pub use load::LoadOutcome;
pub use track::Track;
