//! Spider domain: the patrolling enemy.

pub mod behavior;
mod components;
pub(crate) mod spawn;
mod systems;


pub use behavior::{die, patrol_velocity};
pub use components::{PatrolSensors, Spider};
pub use spawn::spawn_spider;

use bevy::prelude::*;

use crate::core::PlaySet;
use crate::spider::systems::{detect_patrol_contacts, patrol};

pub struct SpiderPlugin;

impl Plugin for SpiderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, detect_patrol_contacts.in_set(PlaySet::Sense))
            .add_systems(Update, patrol.in_set(PlaySet::Behave));
    }
}
