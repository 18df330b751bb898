//! Sprites domain: clip playback, death sequences and decoration tweens.

pub mod animation;
pub mod bob;
pub mod lifecycle;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;
pub use animation::AnimationClip;
pub use bob::Bob;
pub use lifecycle::{DIE_CLIP, Dying, KillAction, KillListeners, start_dying};

use crate::core::PlaySet;
use crate::sprites::bob::animate_bobs;
use crate::sprites::lifecycle::remove_killed_entities;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationFinished>()
            .add_systems(Update, animate_bobs.in_set(PlaySet::Behave))
            .add_systems(
                Update,
                (update_animations, remove_killed_entities)
                    .chain()
                    .in_set(PlaySet::Animate),
            );
    }
}
