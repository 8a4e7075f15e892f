//! File-based tests for catalog/script loading and replay

use ascendion_cli::{replay, AppConfig, CliError};
use ascendion_playback::{Page, PlaybackEvent, TrackResolver};
use std::io::Write;
use tempfile::NamedTempFile;

const CATALOG: &str = r#"{
    "collections": [
        {
            "name": "tracks",
            "artwork_url": "https://picsum.photos/seed/albumA/300/300",
            "items": [
                {"type": "song", "id": "trackA1", "title": "Intro",
                 "artist": "The Midnight", "duration": "3:12"},
                {"type": "song", "id": "trackA2", "title": "Vampires",
                 "artist": "The Midnight", "duration": "4:30"}
            ]
        },
        {
            "name": "playlists",
            "items": [
                {"type": "media", "id": "pl1", "title": "Late Night Drive",
                 "image_url": "https://picsum.photos/seed/pl1/200/200", "kind": "playlist"}
            ]
        }
    ]
}"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_resolve_from_catalog_file() {
    let file = write_temp(CATALOG);
    let catalog = replay::load_catalog(file.path()).unwrap();

    let track = replay::resolve("trackA2", &catalog, &AppConfig::default().playback).unwrap();
    assert_eq!(track.duration_secs, 270);
    assert_eq!(
        track.album_art_url,
        "https://picsum.photos/seed/albumA/300/300"
    );

    let card = replay::resolve("pl1", &catalog, &AppConfig::default().playback).unwrap();
    assert_eq!(card.artist, "Various Artists");
}

#[test]
fn test_replay_script_file() {
    let catalog_file = write_temp(CATALOG);
    let script_file = write_temp(
        r#"[
            {"gesture": "play_track", "id": "trackA2"},
            {"gesture": "seek", "percent": 50},
            {"gesture": "set_volume", "level": 0},
            {"gesture": "toggle_mute"},
            {"gesture": "play_track", "id": "missing"},
            {"gesture": "navigate", "page": "library"}
        ]"#,
    );

    let config = AppConfig::default();
    let catalog = replay::load_catalog(catalog_file.path()).unwrap();
    let gestures = replay::load_script(script_file.path()).unwrap();
    let mut resolver = TrackResolver::seeded(&config.playback, 3);

    let report = replay::replay(&catalog, &gestures, Page::Home, &mut resolver, &config.playback);

    assert_eq!(report.page, Page::Library);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].step, 4);
    assert_eq!(report.snapshot.elapsed, "2:15");
    assert_eq!(report.snapshot.volume, 70);
    assert!(report.snapshot.is_playing);
    assert!(report.events.contains(&PlaybackEvent::Navigated {
        page: "library".to_string(),
        session_reset: false,
    }));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["snapshot"]["current_track"]["id"], "trackA2");
    assert_eq!(json["errors"][0]["gesture"]["gesture"], "play_track");
}

#[test]
fn test_missing_file_is_read_error() {
    let err = replay::load_catalog(std::path::Path::new("/nonexistent/catalog.json")).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
}

#[test]
fn test_bad_script_is_reported() {
    let file = write_temp(r#"[{"gesture": "rewind"}]"#);
    let err = replay::load_script(file.path()).unwrap_err();
    assert!(matches!(err, CliError::Script(_)));
}

#[test]
fn test_bad_catalog_is_reported() {
    let file = write_temp(r#"{"collections": [{"name": "x", "items": [{"type": "video"}]}]}"#);
    let err = replay::load_catalog(file.path()).unwrap_err();
    assert!(matches!(err, CliError::Catalog(_)));
}

#[test]
fn test_out_of_range_volume_in_script_is_clamped() {
    let catalog_file = write_temp(CATALOG);
    let script_file = write_temp(
        r#"[
            {"gesture": "set_volume", "level": 300},
            {"gesture": "seek", "percent": 300}
        ]"#,
    );

    let config = AppConfig::default();
    let catalog = replay::load_catalog(catalog_file.path()).unwrap();
    let gestures = replay::load_script(script_file.path()).unwrap();
    let mut resolver = TrackResolver::seeded(&config.playback, 3);

    let report = replay::replay(&catalog, &gestures, Page::Home, &mut resolver, &config.playback);

    assert!(report.is_clean());
    assert_eq!(report.snapshot.volume, 100);
    assert_eq!(report.snapshot.progress, 100.0);
}
