// SPDX-License-Identifier: MPL-2.0
//! Story catalog files.
//!
//! A catalog is a TOML document with one `[[stories]]` table per story:
//!
//! ```toml
//! [[stories]]
//! id = 1
//! owner = "John Doe"
//! created_at = "2025-06-01T12:00:00Z"
//! media = { kind = "image", url = "https://picsum.photos/800/1200?random=1" }
//! ```
//!
//! Timestamps are quoted RFC 3339 strings.

use super::{Story, StoryId};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    stories: Vec<Story>,
}

/// Parses a catalog document.
///
/// # Errors
///
/// Returns [`Error::Catalog`] if the document is not valid TOML, a story is
/// missing a field, or two stories share an id.
pub fn parse(content: &str) -> Result<Vec<Story>> {
    let file: CatalogFile =
        toml::from_str(content).map_err(|err| Error::Catalog(err.to_string()))?;

    let mut seen: HashSet<StoryId> = HashSet::with_capacity(file.stories.len());
    for story in &file.stories {
        if !seen.insert(story.id) {
            return Err(Error::Catalog(format!("duplicate story id {}", story.id)));
        }
    }
    Ok(file.stories)
}

/// Reads and parses the catalog at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, otherwise see [`parse`].
pub fn load_from_path(path: &Path) -> Result<Vec<Story>> {
    let content = fs::read_to_string(path)?;
    let stories = parse(&content)?;
    tracing::debug!("Loaded {} stories from {}", stories.len(), path.display());
    Ok(stories)
}
