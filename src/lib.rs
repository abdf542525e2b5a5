//! # Deezer Catalog
//!
//! Typed records for the JSON returned by the Deezer public catalog API,
//! with strict structural validation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use deezer_catalog::{CatalogRecord, Track};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let body = std::fs::read_to_string("track.json")?;
//!     let track = Track::from_json_str(&body)?;
//!     println!("{} by {} ({})", track.title, track.primary_artist(), track.duration_formatted());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Records** for tracks, albums, artists and contributors, mirroring the wire format
//! - **Schema errors** naming the missing or mistyped field by path
//! - **Load outcomes** classifying fetched responses as track, playlist, search, empty or error
//!
//! Fetching is left to the caller; this crate performs no I/O.

pub mod converters;
pub mod error;
pub mod models;
pub mod resolver;

pub use converters::CatalogRecord;
pub use error::{CatalogError, JsonType, Result, SchemaError};
pub use models::{Album, Artist, Contributor, LoadOutcome, Track};
pub use resolver::{resolve, ApiFailure, LoadResult, RequestKind};
