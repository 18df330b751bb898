//! Loader for level JSON and tuning RON files at startup.

use std::fs;
use std::path::Path;

use ron::Options;
use thiserror::Error;

use super::data::{LevelCatalog, LevelData, level_file_name};
use crate::core::GameTuning;

/// Error type for content loading failures.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid level data in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid tuning in {path}: {source}")]
    Ron {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentError> {
    fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.display().to_string(),
        source,
    })
}

pub fn parse_level(json: &str) -> Result<LevelData, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn parse_tuning(text: &str) -> Result<GameTuning, ron::error::SpannedError> {
    ron_options().from_str(text)
}

/// Load a single level descriptor.
pub fn load_level_file(path: &Path) -> Result<LevelData, ContentError> {
    let contents = read_file(path)?;
    parse_level(&contents).map_err(|source| ContentError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Load tuning overrides. A missing file is not an error.
pub fn load_tuning_file(path: &Path) -> Result<Option<GameTuning>, ContentError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = read_file(path)?;
    parse_tuning(&contents)
        .map(Some)
        .map_err(|source| ContentError::Ron {
            path: path.display().to_string(),
            source,
        })
}

/// Load `level00.json` .. for every level index from `base_path`.
/// Levels that fail to load are left out of the catalog and reported.
pub fn load_level_catalog(
    base_path: &Path,
    level_count: usize,
) -> (LevelCatalog, Vec<ContentError>) {
    let mut catalog = LevelCatalog::default();
    let mut errors = Vec::new();

    for index in 0..level_count {
        let path = base_path.join(level_file_name(index));
        match load_level_file(&path) {
            Ok(level) => {
                catalog.levels.insert(index, level);
            }
            Err(e) => errors.push(e),
        }
    }

    (catalog, errors)
}
