//! Hero domain: spawning the player character.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::GameAssets;
use crate::hero::{Hero, MovementState};
use crate::interactions::hero_layers;
use crate::level::LevelEntity;
use crate::sprites::{AnimationClip, Animator, DIE_CLIP, KillListeners};

/// Size of one hero frame, also used as the body
pub const HERO_SIZE: Vec2 = Vec2::new(36.0, 42.0);

const Z_HERO: f32 = 3.0;

pub fn hero_animator() -> Animator {
    Animator::new()
        .with_clip("stop", AnimationClip::still(0))
        .with_clip("run", AnimationClip::new(&[1, 2], 8.0, true))
        .with_clip("jump", AnimationClip::still(3))
        .with_clip("fall", AnimationClip::still(4))
        .with_clip(DIE_CLIP, AnimationClip::new(&[5, 6, 5, 6, 5, 6], 10.0, false))
}

/// Spawn the hero centred on `position` (world space).
pub fn spawn_hero(commands: &mut Commands, position: Vec2, assets: &GameAssets) -> Entity {
    commands
        .spawn((
            // Identity & behaviour
            (
                Hero::default(),
                MovementState::default(),
                KillListeners::default(),
                hero_animator(),
                LevelEntity,
            ),
            // Rendering
            assets.sheet("hero").sprite(0),
            Transform::from_xyz(position.x, position.y, Z_HERO),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(HERO_SIZE.x, HERO_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::ZERO.with_combine_rule(CoefficientCombine::Min),
                hero_layers(),
            ),
        ))
        .id()
}
