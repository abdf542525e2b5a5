//! JSON to model converters.
//!
//! Strict structural parsing of raw Deezer API payloads. Every field a record
//! declares is required; unknown keys are ignored. The first failing field
//! is reported, with a dotted path for nested records.

use std::str::FromStr;

use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::error::{CatalogError, JsonType, Result, SchemaError};
use crate::models::{Album, Artist, Contributor, LoadOutcome, Nested, Track};

type Object = Map<String, Value>;
type Parsed<T> = std::result::Result<T, SchemaError>;

/// Records that can be parsed from a raw API payload.
pub trait CatalogRecord: Sized {
    /// Human-readable record kind, used in logs.
    const KIND: &'static str;

    /// Parse from an already-decoded JSON value.
    fn from_json(json: &Value) -> Parsed<Self>;

    /// Parse from JSON text.
    fn from_json_str(text: &str) -> Result<Self> {
        let json: Value = serde_json::from_str(text)?;
        Ok(Self::from_json(&json)?)
    }
}

/// View a payload as an object.
fn as_object(json: &Value) -> Parsed<&Object> {
    json.as_object()
        .ok_or_else(|| SchemaError::mismatch("$", JsonType::Object, json))
}

/// Get a required field.
fn get<'a>(obj: &'a Object, key: &str) -> Parsed<&'a Value> {
    obj.get(key)
        .ok_or_else(|| SchemaError::MissingField(key.to_string()))
}

/// Get a required field holding any JSON value, including `null`.
fn get_any(obj: &Object, key: &str) -> Parsed<Value> {
    get(obj, key).cloned()
}

/// Get a required string.
fn get_str(obj: &Object, key: &str) -> Parsed<String> {
    let value = get(obj, key)?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| SchemaError::mismatch(key, JsonType::String, value))
}

/// Get a required boolean.
fn get_bool(obj: &Object, key: &str) -> Parsed<bool> {
    let value = get(obj, key)?;
    value
        .as_bool()
        .ok_or_else(|| SchemaError::mismatch(key, JsonType::Boolean, value))
}

/// Get a required non-negative integer.
fn get_u64(obj: &Object, key: &str) -> Parsed<u64> {
    let value = get(obj, key)?;
    value
        .as_u64()
        .ok_or_else(|| SchemaError::mismatch(key, JsonType::Integer, value))
}

/// Get a required non-negative integer that fits in 32 bits.
fn get_u32(obj: &Object, key: &str) -> Parsed<u32> {
    let value = get(obj, key)?;
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| SchemaError::mismatch(key, JsonType::Integer, value))
}

/// Get a required number, integral or not, keeping its written form.
fn get_number(obj: &Object, key: &str) -> Parsed<Number> {
    match get(obj, key)? {
        Value::Number(n) => Ok(n.clone()),
        other => Err(SchemaError::mismatch(key, JsonType::Number, other)),
    }
}

/// Get a required string tag, mapped into an open enumeration.
fn get_tag<T: From<String>>(obj: &Object, key: &str) -> Parsed<T> {
    get_str(obj, key).map(T::from)
}

/// Get a required array of strings.
fn get_str_list(obj: &Object, key: &str) -> Parsed<Vec<String>> {
    get_list(obj, key, |item| {
        item.as_str()
            .map(str::to_string)
            .ok_or_else(|| SchemaError::mismatch("$", JsonType::String, item))
    })
}

/// Get a required nested record.
fn get_record<T>(obj: &Object, key: &str, parse: fn(&Value) -> Parsed<T>) -> Parsed<T> {
    parse(get(obj, key)?).map_err(|e| e.within(key))
}

/// Get an optional nested record, telling an absent key from `null`.
fn get_nested<T>(
    obj: &Object,
    key: &str,
    parse: fn(&Value) -> Parsed<T>,
) -> Parsed<Nested<T>> {
    match obj.get(key) {
        None => Ok(Nested::Absent),
        Some(Value::Null) => Ok(Nested::Null),
        Some(value) => parse(value).map(Nested::Present).map_err(|e| e.within(key)),
    }
}

/// Get a required array, parsing each item in order.
fn get_list<T, F>(obj: &Object, key: &str, parse: F) -> Parsed<Vec<T>>
where
    F: Fn(&Value) -> Parsed<T>,
{
    let value = get(obj, key)?;
    let items = value
        .as_array()
        .ok_or_else(|| SchemaError::mismatch(key, JsonType::Array, value))?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| parse(item).map_err(|e| e.within(&format!("[{idx}]")).within(key)))
        .collect()
}

/// Parse a contributor from raw JSON.
pub fn parse_contributor(json: &Value) -> Parsed<Contributor> {
    let obj = as_object(json)?;

    Ok(Contributor {
        id: get_u64(obj, "id")?,
        name: get_str(obj, "name")?,
        link: get_str(obj, "link")?,
        share: get_str(obj, "share")?,
        picture: get_str(obj, "picture")?,
        picture_small: get_str(obj, "picture_small")?,
        picture_medium: get_str(obj, "picture_medium")?,
        picture_big: get_str(obj, "picture_big")?,
        picture_xl: get_str(obj, "picture_xl")?,
        radio: get_bool(obj, "radio")?,
        tracklist: get_str(obj, "tracklist")?,
        type_: get_tag(obj, "type")?,
        role: get_tag(obj, "role")?,
    })
}

/// Parse an artist from raw JSON.
pub fn parse_artist(json: &Value) -> Parsed<Artist> {
    let obj = as_object(json)?;

    Ok(Artist {
        data: get_any(obj, "data")?,
        id: get_u64(obj, "id")?,
        name: get_str(obj, "name")?,
        link: get_str(obj, "link")?,
        share: get_str(obj, "share")?,
        picture: get_str(obj, "picture")?,
        picture_small: get_str(obj, "picture_small")?,
        picture_medium: get_str(obj, "picture_medium")?,
        picture_big: get_str(obj, "picture_big")?,
        picture_xl: get_str(obj, "picture_xl")?,
        radio: get_bool(obj, "radio")?,
        tracklist: get_str(obj, "tracklist")?,
        type_: get_tag(obj, "type")?,
    })
}

/// Parse an album from raw JSON.
pub fn parse_album(json: &Value) -> Parsed<Album> {
    let obj = as_object(json)?;

    Ok(Album {
        id: get_u64(obj, "id")?,
        title: get_str(obj, "title")?,
        link: get_str(obj, "link")?,
        cover: get_str(obj, "cover")?,
        cover_small: get_str(obj, "cover_small")?,
        cover_medium: get_str(obj, "cover_medium")?,
        cover_big: get_str(obj, "cover_big")?,
        cover_xl: get_str(obj, "cover_xl")?,
        md5_image: get_str(obj, "md5_image")?,
        release_date: get_str(obj, "release_date")?,
        tracklist: get_str(obj, "tracklist")?,
        type_: get_tag(obj, "type")?,
        tracks: match get_nested(obj, "tracks", parse_track)? {
            Nested::Present(track) => Nested::Present(Box::new(track)),
            Nested::Null => Nested::Null,
            Nested::Absent => Nested::Absent,
        },
    })
}

/// Parse a track from raw JSON.
pub fn parse_track(json: &Value) -> Parsed<Track> {
    let obj = as_object(json)?;

    let track = Track {
        id: get_str(obj, "id")?,
        data: get_any(obj, "data")?,
        readable: get_bool(obj, "readable")?,
        title: get_str(obj, "title")?,
        title_short: get_str(obj, "title_short")?,
        title_version: get_str(obj, "title_version")?,
        isrc: get_str(obj, "isrc")?,
        link: get_str(obj, "link")?,
        share: get_str(obj, "share")?,
        duration: get_u32(obj, "duration")?,
        track_position: get_u32(obj, "track_position")?,
        disk_number: get_u32(obj, "disk_number")?,
        rank: get_u64(obj, "rank")?,
        release_date: get_str(obj, "release_date")?,
        explicit_lyrics: get_bool(obj, "explicit_lyrics")?,
        explicit_content_lyrics: get_u32(obj, "explicit_content_lyrics")?,
        explicit_content_cover: get_u32(obj, "explicit_content_cover")?,
        preview: get_str(obj, "preview")?,
        bpm: get_number(obj, "bpm")?,
        gain: get_number(obj, "gain")?,
        available_countries: get_str_list(obj, "available_countries")?,
        contributors: get_list(obj, "contributors", parse_contributor)?,
        md5_image: get_str(obj, "md5_image")?,
        artist: get_record(obj, "artist", parse_artist)?,
        album: get_record(obj, "album", parse_album)?,
        type_: get_tag(obj, "type")?,
    };

    debug!(
        "Parsed track {} ({} contributors)",
        track.id,
        track.contributors.len()
    );
    Ok(track)
}

/// Parse a load outcome tag.
pub fn parse_load_outcome(json: &Value) -> Result<LoadOutcome> {
    let tag = json
        .as_str()
        .ok_or_else(|| SchemaError::mismatch("$", JsonType::String, json))?;
    tag.parse()
}

impl CatalogRecord for Contributor {
    const KIND: &'static str = "contributor";

    fn from_json(json: &Value) -> Parsed<Self> {
        parse_contributor(json)
    }
}

impl CatalogRecord for Artist {
    const KIND: &'static str = "artist";

    fn from_json(json: &Value) -> Parsed<Self> {
        parse_artist(json)
    }
}

impl CatalogRecord for Album {
    const KIND: &'static str = "album";

    fn from_json(json: &Value) -> Parsed<Self> {
        parse_album(json)
    }
}

impl CatalogRecord for Track {
    const KIND: &'static str = "track";

    fn from_json(json: &Value) -> Parsed<Self> {
        parse_track(json)
    }
}

impl FromStr for Contributor {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_str(s)
    }
}

impl FromStr for Artist {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_str(s)
    }
}

impl FromStr for Album {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_str(s)
    }
}

impl FromStr for Track {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_str(s)
    }
}
