//! Spider domain: spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::GameAssets;
use crate::interactions::spider_layers;
use crate::level::LevelEntity;
use crate::spider::{PatrolSensors, Spider};
use crate::sprites::{AnimationClip, Animator, DIE_CLIP};

pub const SPIDER_SIZE: Vec2 = Vec2::new(42.0, 32.0);

const Z_SPIDER: f32 = 2.0;

pub fn spider_animator() -> Animator {
    let mut animator = Animator::new()
        .with_clip("crawl", AnimationClip::new(&[0, 1, 2], 7.0, true))
        .with_clip(
            DIE_CLIP,
            AnimationClip::new(&[0, 4, 0, 4, 0, 4, 3, 3, 3, 3, 3, 3], 10.0, false),
        );
    animator.play("crawl");
    animator
}

/// Spawn a spider centred on `position`, already crawling right.
pub fn spawn_spider(
    commands: &mut Commands,
    position: Vec2,
    assets: &GameAssets,
    speed: f32,
) -> Entity {
    commands
        .spawn((
            (
                Spider::default(),
                PatrolSensors::default(),
                spider_animator(),
                LevelEntity,
            ),
            assets.sheet("spider").sprite(0),
            Transform::from_xyz(position.x, position.y, Z_SPIDER),
            (
                RigidBody::Dynamic,
                Collider::rectangle(SPIDER_SIZE.x, SPIDER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity(Vec2::new(speed, 0.0)),
                Friction::ZERO.with_combine_rule(CoefficientCombine::Min),
                spider_layers(),
            ),
        ))
        .id()
}
