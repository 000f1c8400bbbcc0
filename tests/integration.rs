// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use std::fs;
use story_lens::app::{Screen, StoriesApp};
use story_lens::config::{self, defaults, Config};
use story_lens::error::{Error, SessionError};
use story_lens::story::{catalog, StoryId};
use tempfile::tempdir;

const CATALOG: &str = r#"
[[stories]]
id = 1
owner = "John Doe"
created_at = "2025-06-01T12:00:00Z"
media = { kind = "image", url = "https://picsum.photos/800/1200?random=1" }

[[stories]]
id = 2
owner = "Jane Smith"
created_at = "2025-06-01T11:00:00Z"
media = { kind = "image", url = "https://picsum.photos/800/1200?random=2" }

[[stories]]
id = 3
owner = "John Doe"
created_at = "2025-06-01T13:00:00Z"
media = { kind = "video", url = "clips/john.mp4" }
"#;

#[test]
fn test_playback_settings_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        segment_duration_ms: Some(3_000),
        progress_tick_ms: Some(5),
        edge_zone_percent: Some(25.0),
        activity_log_capacity: None,
    };
    config::save_to_path(&config, &config_path).expect("Failed to write config file");

    let settings = config::load_from_path(&config_path)
        .expect("Failed to load config from path")
        .playback_settings();
    assert_eq!(settings.segment_duration.as_millis(), 3_000);
    assert_eq!(
        settings.tick_interval.as_millis(),
        defaults::MIN_PROGRESS_TICK_MS
    );
    assert_abs_diff_eq!(settings.edge_zone.value(), 0.25);
    assert_eq!(
        settings.activity_log_capacity,
        defaults::DEFAULT_ACTIVITY_LOG_CAPACITY
    );

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_catalog_groups_by_owner() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let catalog_path = dir.path().join("stories.toml");
    fs::write(&catalog_path, CATALOG).expect("Failed to write catalog");

    let stories = catalog::load_from_path(&catalog_path).expect("Failed to load catalog");
    let app = StoriesApp::new(stories);

    let groups = app.groups();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].owner().as_str(), "John Doe");
    assert_eq!(groups[0].indices(), &[0, 2]);
    assert_eq!(groups[0].most_recent().id, StoryId(3));
    assert!(groups[0].has_unviewed(app.viewed()));
    assert_eq!(app.select_group(1), Some(1));
}

#[test]
fn test_missing_catalog_is_io_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let err = catalog::load_from_path(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_empty_catalog_cannot_open_viewer() {
    let mut app = StoriesApp::new(catalog::parse("").expect("empty catalog parses"));
    let err = app
        .open_viewer(0, &config::PlaybackSettings::default())
        .unwrap_err();
    assert_eq!(err, SessionError::EmptyStories);
    assert_eq!(app.screen(), Screen::List);
}
