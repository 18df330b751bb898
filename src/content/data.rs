//! Data definitions for the level JSON files.
//!
//! Coordinates are in screen space of the 960x600 level layout: origin
//! top-left, y pointing down. `level::to_world` converts them.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PointDef {
    pub x: f32,
    pub y: f32,
}

impl From<PointDef> for Vec2 {
    fn from(p: PointDef) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// A platform placed by its top-left corner.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlatformDef {
    pub x: f32,
    pub y: f32,
    /// Image key, e.g. `ground` or `grass:4x1`
    pub image: String,
}

impl PlatformDef {
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// One hand-authored level.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelData {
    pub platforms: Vec<PlatformDef>,
    #[serde(default)]
    pub coins: Vec<PointDef>,
    #[serde(default)]
    pub spiders: Vec<PointDef>,
    pub hero: PointDef,
    pub key: PointDef,
    pub door: PointDef,
}

/// All levels the session can enter, keyed by index.
#[derive(Resource, Debug, Default)]
pub struct LevelCatalog {
    pub levels: std::collections::HashMap<usize, LevelData>,
}

impl LevelCatalog {
    pub fn get(&self, index: usize) -> Option<&LevelData> {
        self.levels.get(&index)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Path of a level file relative to the data directory
pub fn level_file_name(index: usize) -> String {
    format!("level{:02}.json", index)
}
