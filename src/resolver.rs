//! Classification of fetched API responses into load outcomes.
//!
//! Works on response bodies that were already fetched by some client; no
//! I/O happens here. Deezer reports failures in-band as
//! `{"error": {"type", "message", "code"}}`, and list endpoints wrap their
//! items as `{"data": [...], "total": n}`.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::converters::{parse_album, parse_track};
use crate::error::{JsonType, Result, SchemaError};
use crate::models::{LoadOutcome, Track};

/// Deezer error code for "no data", i.e. the requested object does not exist.
const NO_DATA_CODE: u64 = 800;

/// What the response body was fetched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// `track/{id}`
    Track,
    /// `album/{id}`
    Album,
    /// `playlist/{id}`
    Playlist,
    /// `search/track`
    Search,
}

/// Error reported in-band by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiFailure {
    /// Exception class, e.g. `DataException`.
    #[serde(rename = "type")]
    pub kind: String,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u64>,
}

impl ApiFailure {
    fn from_json(json: &Value) -> Self {
        Self {
            kind: json
                .get("type")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            message: json
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string(),
            code: json.get("code").and_then(|v| v.as_u64()),
        }
    }
}

/// A classified response with its parsed payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "loadType", content = "data", rename_all = "lowercase")]
pub enum LoadResult {
    Track(Box<Track>),
    Playlist(Vec<Track>),
    Search(Vec<Track>),
    Empty,
    Error(ApiFailure),
}

impl LoadResult {
    pub fn outcome(&self) -> LoadOutcome {
        match self {
            LoadResult::Track(_) => LoadOutcome::Track,
            LoadResult::Playlist(_) => LoadOutcome::Playlist,
            LoadResult::Search(_) => LoadOutcome::Search,
            LoadResult::Empty => LoadOutcome::Empty,
            LoadResult::Error(_) => LoadOutcome::Error,
        }
    }

    /// Tracks carried by the result, in order.
    pub fn tracks(&self) -> &[Track] {
        match self {
            LoadResult::Track(track) => std::slice::from_ref(&**track),
            LoadResult::Playlist(tracks) | LoadResult::Search(tracks) => tracks,
            LoadResult::Empty | LoadResult::Error(_) => &[],
        }
    }
}

/// Classify a response body fetched for `kind`.
///
/// Single-object requests fail with the schema error of their payload.
/// List requests skip items that do not match the track schema.
pub fn resolve(kind: RequestKind, json: &Value) -> Result<LoadResult> {
    if let Some(error) = json.get("error") {
        let failure = ApiFailure::from_json(error);
        if failure.code == Some(NO_DATA_CODE) {
            debug!("No data for {:?} request: {}", kind, failure.message);
            return Ok(LoadResult::Empty);
        }
        warn!("Deezer API error: {}", failure.message);
        return Ok(LoadResult::Error(failure));
    }

    let result = match kind {
        RequestKind::Track => LoadResult::Track(Box::new(parse_track(json)?)),
        RequestKind::Album => match parse_album(json)?.tracks.into_option() {
            Some(track) => LoadResult::Playlist(vec![*track]),
            None => LoadResult::Empty,
        },
        RequestKind::Playlist => match json.get("tracks") {
            None | Some(Value::Null) => LoadResult::Empty,
            Some(tracks) => {
                let items = list_items(tracks).map_err(|e| e.within("tracks"))?;
                non_empty(parse_items(items), LoadResult::Playlist)
            }
        },
        RequestKind::Search => {
            let total = json.get("total").and_then(|t| t.as_u64());
            if total == Some(0) {
                LoadResult::Empty
            } else {
                non_empty(parse_items(list_items(json)?), LoadResult::Search)
            }
        }
    };

    debug!(
        "Resolved {:?} request as {} ({} tracks)",
        kind,
        result.outcome(),
        result.tracks().len()
    );
    Ok(result)
}

/// The `data` array of a list envelope. An absent array is an empty list.
fn list_items(envelope: &Value) -> std::result::Result<&[Value], SchemaError> {
    let envelope = envelope
        .as_object()
        .ok_or_else(|| SchemaError::mismatch("$", JsonType::Object, envelope))?;

    match envelope.get("data") {
        None | Some(Value::Null) => Ok(&[][..]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(SchemaError::mismatch("data", JsonType::Array, other)),
    }
}

fn parse_items(items: &[Value]) -> Vec<Track> {
    items
        .iter()
        .enumerate()
        .filter_map(|(idx, item)| match parse_track(item) {
            Ok(track) => Some(track),
            Err(e) => {
                warn!("Skipping item {}: {}", idx, e);
                None
            }
        })
        .collect()
}

fn non_empty(tracks: Vec<Track>, wrap: fn(Vec<Track>) -> LoadResult) -> LoadResult {
    if tracks.is_empty() {
        LoadResult::Empty
    } else {
        wrap(tracks)
    }
}
