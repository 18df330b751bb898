//! Level domain: turns a level descriptor into live entities.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{GameAssets, LevelData, PlatformDef, PointDef};
use crate::core::GameTuning;
use crate::hero::spawn_hero;
use crate::interactions::{
    bounds_layers, enemy_wall_layers, platform_layers, trigger_layers,
};
use crate::level::components::{
    Background, Coin, Door, EnemyWall, Key, LevelEntity, Platform, WorldBound, WorldFloor,
};
use crate::level::geometry::{
    BOUND_THICKNESS, ENEMY_WALL_SIZE, TILE, center_from_bottom, center_from_top_left,
    enemy_wall_centers, platform_size, to_world,
};
use crate::spider::spawn_spider;
use crate::sprites::{AnimationClip, Animator, Bob};

// Draw order, back to front
const Z_BACKGROUND: f32 = -10.0;
const Z_DECORATION: f32 = -1.0;
const Z_PLATFORM: f32 = 0.0;
const Z_COIN: f32 = 1.0;

const COIN_SIZE: Vec2 = Vec2::new(22.0, 22.0);
const DOOR_SIZE: Vec2 = Vec2::new(42.0, 66.0);
const KEY_SIZE: Vec2 = Vec2::new(24.0, 30.0);

/// Spawn every entity of one level instance. The caller owns teardown
/// through [`LevelEntity`].
pub fn load_level(
    commands: &mut Commands,
    data: &LevelData,
    assets: &GameAssets,
    tuning: &GameTuning,
) {
    let world_size = tuning.world_size();

    spawn_world_bounds(commands, world_size);

    for platform in &data.platforms {
        spawn_platform(commands, platform, assets, world_size);
    }

    spawn_hero(commands, to_world(data.hero.into(), world_size), assets);
    for spider in &data.spiders {
        spawn_spider(
            commands,
            to_world((*spider).into(), world_size),
            assets,
            tuning.spider_speed,
        );
    }

    for coin in &data.coins {
        spawn_coin(commands, *coin, assets, world_size);
    }
    spawn_door(commands, data.door, assets, world_size);
    spawn_key(commands, data.key, assets, tuning);

    commands.insert_resource(Gravity(Vec2::NEG_Y * tuning.gravity));

    info!(
        "Level spawned: {} platforms, {} coins, {} spiders",
        data.platforms.len(),
        data.coins.len(),
        data.spiders.len()
    );
}

pub fn spawn_background(commands: &mut Commands, assets: &GameAssets) {
    commands.spawn((
        Background,
        LevelEntity,
        Sprite::from_image(assets.image("background")),
        Transform::from_xyz(0.0, 0.0, Z_BACKGROUND),
    ));
}

/// Four static walls just outside the visible world.
fn spawn_world_bounds(commands: &mut Commands, world_size: Vec2) {
    let half = world_size / 2.0;
    let t = BOUND_THICKNESS;
    let horizontal = Vec2::new(world_size.x + 2.0 * t, t);
    let vertical = Vec2::new(t, world_size.y + 2.0 * t);

    let mut bound = |center: Vec2, size: Vec2| {
        commands
            .spawn((
                WorldBound,
                LevelEntity,
                Transform::from_xyz(center.x, center.y, 0.0),
                RigidBody::Static,
                Collider::rectangle(size.x, size.y),
                bounds_layers(),
            ))
            .id()
    };

    let floor = bound(Vec2::new(0.0, -half.y - t / 2.0), horizontal);
    bound(Vec2::new(0.0, half.y + t / 2.0), horizontal);
    bound(Vec2::new(-half.x - t / 2.0, 0.0), vertical);
    bound(Vec2::new(half.x + t / 2.0, 0.0), vertical);

    commands.entity(floor).insert(WorldFloor);
}

fn spawn_platform(
    commands: &mut Commands,
    platform: &PlatformDef,
    assets: &GameAssets,
    world_size: Vec2,
) {
    let size = platform_size(&platform.image, world_size.x).unwrap_or_else(|| {
        warn!(
            "Unknown platform image '{}', using a single tile",
            platform.image
        );
        Vec2::splat(TILE)
    });
    let top_left = platform.top_left();
    let center = to_world(center_from_top_left(top_left, size), world_size);

    commands.spawn((
        Platform,
        LevelEntity,
        Sprite::from_image(assets.image(&platform.image)),
        Transform::from_xyz(center.x, center.y, Z_PLATFORM),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        platform_layers(),
    ));

    for wall in enemy_wall_centers(top_left, size.x, ENEMY_WALL_SIZE) {
        spawn_enemy_wall(commands, to_world(wall, world_size));
    }
}

/// Invisible: no sprite, and only the enemy layer collides with it.
fn spawn_enemy_wall(commands: &mut Commands, center: Vec2) {
    commands.spawn((
        EnemyWall,
        LevelEntity,
        Transform::from_xyz(center.x, center.y, Z_PLATFORM),
        RigidBody::Static,
        Collider::rectangle(ENEMY_WALL_SIZE.x, ENEMY_WALL_SIZE.y),
        enemy_wall_layers(),
    ));
}

fn spawn_coin(commands: &mut Commands, coin: PointDef, assets: &GameAssets, world_size: Vec2) {
    let center = to_world(coin.into(), world_size);
    let mut animator =
        Animator::new().with_clip("rotate", AnimationClip::new(&[0, 1, 2, 1], 6.0, true));
    animator.play("rotate");

    commands.spawn((
        Coin,
        LevelEntity,
        animator,
        assets.sheet("coin").sprite(0),
        Transform::from_xyz(center.x, center.y, Z_COIN),
        RigidBody::Static,
        Collider::rectangle(COIN_SIZE.x, COIN_SIZE.y),
        Sensor,
        trigger_layers(),
    ));
}

/// The door stands on its bottom-centre point.
fn spawn_door(commands: &mut Commands, door: PointDef, assets: &GameAssets, world_size: Vec2) {
    let center = to_world(center_from_bottom(door.into(), DOOR_SIZE), world_size);

    commands.spawn((
        Door,
        LevelEntity,
        assets.sheet("door").sprite(0),
        Transform::from_xyz(center.x, center.y, Z_DECORATION),
        RigidBody::Static,
        Collider::rectangle(DOOR_SIZE.x, DOOR_SIZE.y),
        Sensor,
        trigger_layers(),
    ));
}

fn spawn_key(commands: &mut Commands, key: PointDef, assets: &GameAssets, tuning: &GameTuning) {
    let center = to_world(key.into(), tuning.world_size());
    let bob = Bob::new(
        center.y,
        tuning.key_bob_amplitude,
        tuning.key_bob_half_period,
    );
    let start_y = bob.current_y();

    commands.spawn((
        Key,
        LevelEntity,
        bob,
        Sprite::from_image(assets.image("key")),
        Transform::from_xyz(center.x, start_y, Z_DECORATION),
        RigidBody::Static,
        Collider::rectangle(KEY_SIZE.x, KEY_SIZE.y),
        Sensor,
        trigger_layers(),
    ));
}
