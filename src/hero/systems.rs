//! Hero domain: ground sensing and per-frame animation.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::hero::behavior::resolve_animation;
use crate::hero::spawn::HERO_SIZE;
use crate::hero::{Facing, Hero, MovementState};
use crate::interactions::ground_ray_mask;
use crate::level::WorldFloor;
use crate::sprites::Animator;

/// How far below the feet a surface still counts as ground
const GROUND_RAY_DISTANCE: f32 = 4.0;

/// Rays start this far inside the body edges so walls do not count as ground
const GROUND_RAY_INSET: f32 = 2.0;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    floors: Query<(), With<WorldFloor>>,
    mut query: Query<(&Transform, &Collider, &Hero, &mut MovementState)>,
) {
    // Only platforms and world edges hold the hero up
    let ground_filter = SpatialQueryFilter::from_mask(ground_ray_mask());

    for (transform, collider, hero, mut state) in &mut query {
        // A dead hero's body is frozen; keep the last contact state
        if !hero.alive {
            continue;
        }

        let half_extents = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
            None => HERO_SIZE / 2.0,
        };

        let feet = transform.translation.truncate() - Vec2::new(0.0, half_extents.y);
        let reach = half_extents.x - GROUND_RAY_INSET;
        let was_on_ground = state.on_ground;

        let mut on_ground = false;
        let mut on_world_floor = false;
        for dx in [-reach, 0.0, reach] {
            let hit = spatial_query.cast_ray(
                feet + Vec2::new(dx, 0.0),
                Dir2::NEG_Y,
                GROUND_RAY_DISTANCE,
                true,
                &ground_filter,
            );
            if let Some(hit) = hit {
                on_ground = true;
                on_world_floor |= floors.contains(hit.entity);
            }
        }

        state.on_ground = on_ground;
        state.on_world_floor = on_world_floor;

        if state.on_ground && !was_on_ground {
            debug!("Landed: on_world_floor={}", state.on_world_floor);
        }
    }
}

pub(crate) fn update_hero_animation(
    mut query: Query<(
        &Hero,
        &MovementState,
        &LinearVelocity,
        &mut Animator,
        &mut Sprite,
    )>,
) {
    for (hero, state, velocity, mut animator, mut sprite) in &mut query {
        let animation = resolve_animation(hero.alive, velocity.0, state.on_ground);
        animator.play_if_changed(animation.clip_name());

        let flip = state.facing == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
