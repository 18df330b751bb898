//! Hero domain: movement, jump and death rules.
//!
//! Velocities are y-up: a jump sets a positive vertical velocity and a
//! falling hero has `velocity.y < 0`.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::hero::{Facing, Hero, HeroAnimation, MovementState};
use crate::sprites::{Animator, start_dying};

/// Set horizontal velocity from a direction in `{-1, 0, 1}` and face the
/// way the velocity points (zero faces right).
///
/// Returns true when the hero rests on the world floor and has to die.
pub fn move_hero(
    direction: i8,
    velocity: &mut LinearVelocity,
    state: &mut MovementState,
    speed: f32,
) -> bool {
    velocity.x = f32::from(direction.signum()) * speed;

    state.facing = if velocity.x < 0.0 {
        Facing::Left
    } else {
        Facing::Right
    };

    state.on_world_floor
}

/// Launch upward when grounded. Returns whether the jump happened.
pub fn jump(grounded: bool, velocity: &mut LinearVelocity, jump_speed: f32) -> bool {
    if grounded {
        velocity.y = jump_speed;
    }
    grounded
}

/// Kick upward after stomping an enemy, regardless of ground contact.
pub fn bounce(velocity: &mut LinearVelocity, bounce_speed: f32) {
    velocity.y = bounce_speed;
}

/// Vertical speed below which a body counts as neither rising nor falling.
/// A resting contact leaves solver noise in `LinearVelocity`, never an exact zero.
pub const VERTICAL_REST_EPSILON: f32 = 1.0;

/// Pick the animation for the current frame in fixed priority order.
pub fn resolve_animation(alive: bool, velocity: Vec2, grounded: bool) -> HeroAnimation {
    if !alive {
        HeroAnimation::Die
    } else if velocity.y > VERTICAL_REST_EPSILON {
        HeroAnimation::Jump
    } else if !grounded {
        HeroAnimation::Fall
    } else if velocity.x != 0.0 {
        HeroAnimation::Run
    } else {
        HeroAnimation::Stop
    }
}

/// Switch the hero to the dead state and start its death clip.
///
/// Returns false if the hero was already dead, so callers can register
/// follow-up work exactly once.
pub fn die(
    commands: &mut Commands,
    entity: Entity,
    hero: &mut Hero,
    animator: &mut Animator,
) -> bool {
    if !hero.alive {
        return false;
    }
    hero.alive = false;
    start_dying(commands, entity, animator);
    debug!("Hero died");
    true
}
