use deezer_catalog::models::{ContributorRole, ExplicitContent, RecordType};
use deezer_catalog::{
    resolve, Album, Artist, CatalogError, CatalogRecord, Contributor, JsonType, LoadOutcome,
    RequestKind, SchemaError, Track,
};
use serde_json::{json, Value};

const TRACK: &str = include_str!("fixtures/track.json");
const ALBUM: &str = include_str!("fixtures/album.json");
const ARTIST: &str = include_str!("fixtures/artist.json");
const CONTRIBUTOR: &str = include_str!("fixtures/contributor.json");
const TRACK_INTEGRAL_AUDIO: &str = include_str!("fixtures/track_integral_audio.json");

fn round_trip<T: CatalogRecord + serde::Serialize>(text: &str) {
    let input: Value = serde_json::from_str(text).unwrap();
    let record = T::from_json(&input).unwrap();
    assert_eq!(serde_json::to_value(&record).unwrap(), input, "{}", T::KIND);
}

#[test]
fn test_records_round_trip() {
    round_trip::<Track>(TRACK);
    round_trip::<Track>(TRACK_INTEGRAL_AUDIO);
    round_trip::<Album>(ALBUM);
    round_trip::<Artist>(ARTIST);
    round_trip::<Contributor>(CONTRIBUTOR);
}

#[test]
fn test_from_str_matches_from_json() {
    let via_text: Track = TRACK.parse().unwrap();
    let json: Value = serde_json::from_str(TRACK).unwrap();
    let via_value = Track::from_json(&json).unwrap();
    assert_eq!(via_text, via_value);
}

#[test]
fn test_album_with_embedded_track() {
    let album: Album = ALBUM.parse().unwrap();
    let track: Track = TRACK.parse().unwrap();
    assert_eq!(album.title, "Discovery");
    assert_eq!(album.track(), Some(&track));
    assert_eq!(album.release_date().year, 2001);
    assert_eq!(
        album.largest_cover(),
        Some("https://e-cdns-images.dzcdn.net/images/cover/5718f7c81c27e0b2417e2a4c45224f8a/1000x1000-000000-80-0-0.jpg")
    );
}

#[test]
fn test_contributor_share_number_is_rejected() {
    let mut json: Value = serde_json::from_str(CONTRIBUTOR).unwrap();
    json["share"] = json!(0.5);

    let err = Contributor::from_json(&json).unwrap_err();
    assert_eq!(
        err,
        SchemaError::TypeMismatch {
            field: "share".to_string(),
            expected: JsonType::String,
            actual: JsonType::Number,
        }
    );
}

#[test]
fn test_track_accessors() {
    let track: Track = TRACK.parse().unwrap();

    assert_eq!(track.duration_formatted(), "03:44");
    assert_eq!(track.primary_artist(), "Daft Punk");
    assert_eq!(track.contributors_string(", "), "Daft Punk, Edwin Birdsong");
    assert_eq!(track.main_contributors().count(), 1);
    assert_eq!(track.is_available_in("fr"), Some(true));
    assert_eq!(track.is_available_in("US"), Some(false));
    assert!(!track.is_explicit());
    assert_eq!(track.lyrics_rating(), ExplicitContent::NotExplicit);
    assert_eq!(track.cover_rating(), ExplicitContent::Unknown);
    assert!(track.cover_url("250x250").contains("5718f7c81c27e0b2417e2a4c45224f8a/250x250"));
    assert_eq!(
        track.contributors[1].largest_picture(),
        Some("https://e-cdns-images.dzcdn.net/images/artist/0b5d1c1e7fd3a7f0b47c7cbbd84c2f46/500x500-000000-80-0-0.jpg")
    );
    assert_eq!(track.contributors[1].role, ContributorRole::Featured);
    assert_eq!(track.album.type_, RecordType::Album);
}

#[test]
fn test_unknown_availability_is_not_unavailability() {
    let mut json: Value = serde_json::from_str(TRACK).unwrap();
    json["available_countries"] = json!([]);
    let track = Track::from_json(&json).unwrap();
    assert_eq!(track.is_available_in("FR"), None);
}

#[test]
fn test_load_outcome_literals() {
    let accepted: Vec<LoadOutcome> = ["track", "playlist", "search", "empty", "error"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    assert_eq!(accepted, LoadOutcome::ALL.to_vec());

    assert!(matches!(
        "LOAD_FAILED".parse::<LoadOutcome>(),
        Err(CatalogError::UnknownLoadOutcome(_))
    ));
}

#[test]
fn test_resolve_search_response() {
    let track: Value = serde_json::from_str(TRACK).unwrap();
    let body = json!({ "data": [track], "total": 1, "next": null });

    let result = resolve(RequestKind::Search, &body).unwrap();
    assert_eq!(result.outcome(), LoadOutcome::Search);
    assert_eq!(result.tracks()[0].isrc, "GBDUW0000059");
}

#[test]
fn test_parse_concurrently() {
    let json: Value = serde_json::from_str(TRACK).unwrap();
    let expected = Track::from_json(&json).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| Track::from_json(&json).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
