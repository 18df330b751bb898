//! Core domain: session progress and gameplay tuning.

use bevy::prelude::*;
use serde::Deserialize;

/// Progress of the running play session.
///
/// Rebuilt by [`PlaySession::init`] every time a level is entered, whether
/// through the start control, a death or a door.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct PlaySession {
    /// Coins picked up in this level instance
    pub coin_count: u32,
    /// Set once the key is collected, cleared on every transition
    pub has_key: bool,
    /// Always in `0..level_count`
    pub level: usize,
    /// Total number of levels the session cycles through
    pub level_count: usize,
}

impl PlaySession {
    /// Reset progress and select the level, wrapping the index into range.
    /// A missing index selects the first level.
    pub fn init(&mut self, level: Option<usize>, level_count: usize) {
        let level_count = level_count.max(1);
        self.coin_count = 0;
        self.has_key = false;
        self.level_count = level_count;
        self.level = level.unwrap_or(0) % level_count;
    }

    pub fn collect_coin(&mut self) {
        self.coin_count += 1;
    }

    pub fn collect_key(&mut self) {
        self.has_key = true;
    }

    pub fn is_last_level(&self) -> bool {
        self.level + 1 == self.level_count
    }

    /// Index of the level the door leads to (wraps past the last level)
    pub fn next_level(&self) -> usize {
        (self.level + 1) % self.level_count.max(1)
    }
}

/// Gameplay constants. Defaults match the shipped levels and can be
/// overridden from `assets/data/tuning.ron`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameTuning {
    pub hero_speed: f32,
    pub hero_jump_speed: f32,
    pub hero_bounce_speed: f32,
    pub spider_speed: f32,
    pub gravity: f32,
    pub level_count: usize,
    /// Half of the key's vertical travel, in pixels
    pub key_bob_amplitude: f32,
    /// Seconds for one sweep of the key's bob
    pub key_bob_half_period: f32,
    pub world_width: f32,
    pub world_height: f32,
}

impl Default for GameTuning {
    fn default() -> Self {
        Self {
            hero_speed: 200.0,
            hero_jump_speed: 580.0,
            hero_bounce_speed: 200.0,
            spider_speed: 200.0,
            gravity: 1200.0,
            level_count: 3,
            key_bob_amplitude: 3.0,
            key_bob_half_period: 0.8,
            world_width: 960.0,
            world_height: 600.0,
        }
    }
}

impl GameTuning {
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.world_width, self.world_height)
    }
}
