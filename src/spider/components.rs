//! Spider domain: components for the patrolling enemy.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Spider {
    pub alive: bool,
}

impl Default for Spider {
    fn default() -> Self {
        Self { alive: true }
    }
}

/// Side contacts sampled from the physics world every frame.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PatrolSensors {
    pub touching_left: bool,
    pub touching_right: bool,
}
