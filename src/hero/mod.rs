//! Hero domain: the player character's state, rules and per-frame systems.

pub mod behavior;
mod components;
pub(crate) mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use behavior::{VERTICAL_REST_EPSILON, bounce, die, jump, move_hero, resolve_animation};
pub use components::{Facing, Hero, HeroAnimation, MovementState};
pub use spawn::spawn_hero;

use bevy::prelude::*;

use crate::core::PlaySet;
use crate::hero::systems::{detect_ground, update_hero_animation};

pub struct HeroPlugin;

impl Plugin for HeroPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, detect_ground.in_set(PlaySet::Sense))
            .add_systems(Update, update_hero_animation.in_set(PlaySet::Behave));
    }
}
