//! Level domain: markers for everything a level instance spawns.

use bevy::prelude::*;

/// Owned by the running level; despawned on restart, advance and victory
#[derive(Component, Debug)]
pub struct LevelEntity;

#[derive(Component, Debug)]
pub struct Background;

#[derive(Component, Debug)]
pub struct Platform;

/// Invisible wall at a platform edge that turns spiders around
#[derive(Component, Debug)]
pub struct EnemyWall;

/// One of the four world edges
#[derive(Component, Debug)]
pub struct WorldBound;

/// The bottom world edge; resting on it means the hero fell out of the level
#[derive(Component, Debug)]
pub struct WorldFloor;

#[derive(Component, Debug)]
pub struct Coin;

#[derive(Component, Debug)]
pub struct Key;

#[derive(Component, Debug)]
pub struct Door;
