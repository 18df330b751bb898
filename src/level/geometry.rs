//! Level domain: conversion from level-file coordinates to world space.
//!
//! Level files place things on a screen with the origin at the top-left and
//! y pointing down. The world is y-up with the origin at its centre.

use bevy::prelude::*;

/// Edge length of one grass tile in pixels
pub const TILE: f32 = 42.0;

/// Size of the invisible walls bounding spider patrols
pub const ENEMY_WALL_SIZE: Vec2 = Vec2::new(8.0, TILE);

/// Thickness of the colliders along the world edges
pub const BOUND_THICKNESS: f32 = 40.0;

pub fn to_world(screen: Vec2, world_size: Vec2) -> Vec2 {
    Vec2::new(screen.x - world_size.x / 2.0, world_size.y / 2.0 - screen.y)
}

/// Platform size from its image key: `ground` spans the whole screen,
/// `grass:WxH` is W by H tiles.
pub fn platform_size(image: &str, world_width: f32) -> Option<Vec2> {
    if image == "ground" {
        return Some(Vec2::new(world_width, TILE));
    }

    let dims = image.strip_prefix("grass:")?;
    let (w, h) = dims.split_once('x')?;
    let w: u32 = w.parse().ok()?;
    let h: u32 = h.parse().ok()?;
    if w == 0 || h == 0 {
        return None;
    }
    Some(Vec2::new(w as f32 * TILE, h as f32 * TILE))
}

/// Screen-space centre of a box placed by its top-left corner
pub fn center_from_top_left(top_left: Vec2, size: Vec2) -> Vec2 {
    top_left + size / 2.0
}

/// Screen-space centre of a box placed by its bottom-centre point
pub fn center_from_bottom(bottom_center: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(bottom_center.x, bottom_center.y - size.y / 2.0)
}

/// Screen-space centres of the two walls standing on a platform's top
/// edge, just outside its left and right ends.
pub fn enemy_wall_centers(top_left: Vec2, platform_width: f32, wall: Vec2) -> [Vec2; 2] {
    let y = top_left.y - wall.y / 2.0;
    [
        Vec2::new(top_left.x - wall.x / 2.0, y),
        Vec2::new(top_left.x + platform_width + wall.x / 2.0, y),
    ]
}
