// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Every field is optional; missing values fall back to [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use story_lens::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Slow the viewer down
//! config.segment_duration_ms = Some(8_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.segment_duration_ms, Some(8_000));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::domain::playback::{EdgeZoneFraction, SegmentDuration, TickInterval};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "StoryLens";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub segment_duration_ms: Option<u64>,
    #[serde(default)]
    pub progress_tick_ms: Option<u64>,
    #[serde(default)]
    pub edge_zone_percent: Option<f32>,
    #[serde(default)]
    pub activity_log_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            segment_duration_ms: Some(defaults::DEFAULT_SEGMENT_DURATION_MS),
            progress_tick_ms: Some(defaults::DEFAULT_PROGRESS_TICK_MS),
            edge_zone_percent: Some(defaults::DEFAULT_EDGE_ZONE_PERCENT),
            activity_log_capacity: Some(defaults::DEFAULT_ACTIVITY_LOG_CAPACITY),
        }
    }
}

/// Validated settings a viewing session runs with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSettings {
    pub segment_duration: SegmentDuration,
    pub tick_interval: TickInterval,
    pub edge_zone: EdgeZoneFraction,
    pub activity_log_capacity: usize,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Config::default().playback_settings()
    }
}

impl Config {
    /// Resolves optional fields into clamped values, filling gaps with defaults.
    #[must_use]
    pub fn playback_settings(&self) -> PlaybackSettings {
        PlaybackSettings {
            segment_duration: self
                .segment_duration_ms
                .map(SegmentDuration::new)
                .unwrap_or_default(),
            tick_interval: self
                .progress_tick_ms
                .map(TickInterval::new)
                .unwrap_or_default(),
            edge_zone: self
                .edge_zone_percent
                .map(EdgeZoneFraction::from_percent)
                .unwrap_or_default(),
            activity_log_capacity: self
                .activity_log_capacity
                .unwrap_or(defaults::DEFAULT_ACTIVITY_LOG_CAPACITY)
                .clamp(
                    defaults::MIN_ACTIVITY_LOG_CAPACITY,
                    defaults::MAX_ACTIVITY_LOG_CAPACITY,
                ),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!("Ignoring malformed config {}: {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            segment_duration_ms: Some(3_000),
            progress_tick_ms: Some(100),
            edge_zone_percent: Some(30.0),
            activity_log_capacity: Some(64),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "segment_duration_ms = 2500\n").expect("failed to write toml");

        let settings = load_from_path(&config_path)
            .expect("load should not error")
            .playback_settings();
        assert_eq!(settings.segment_duration.as_millis(), 2_500);
        assert_eq!(
            settings.tick_interval.as_millis(),
            defaults::DEFAULT_PROGRESS_TICK_MS
        );
        assert_abs_diff_eq!(settings.edge_zone.value(), 0.4);
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn playback_settings_clamp_out_of_range_values() {
        let config = Config {
            segment_duration_ms: Some(1),
            progress_tick_ms: Some(1_000_000),
            edge_zone_percent: Some(75.0),
            activity_log_capacity: Some(0),
        };
        let settings = config.playback_settings();
        assert_eq!(
            settings.segment_duration.as_millis(),
            defaults::MIN_SEGMENT_DURATION_MS
        );
        assert_eq!(
            settings.tick_interval.as_millis(),
            defaults::MAX_PROGRESS_TICK_MS
        );
        assert_abs_diff_eq!(settings.edge_zone.value(), 0.5);
        assert_eq!(
            settings.activity_log_capacity,
            defaults::MIN_ACTIVITY_LOG_CAPACITY
        );
    }

    #[test]
    fn default_config_matches_default_settings() {
        let settings = Config::default().playback_settings();
        assert_eq!(settings.segment_duration, SegmentDuration::default());
        assert_eq!(settings.tick_interval, TickInterval::default());
        assert_eq!(settings, PlaybackSettings::default());
    }
}
