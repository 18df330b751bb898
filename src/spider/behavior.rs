//! Spider domain: patrol and death rules.

use bevy::prelude::*;

use crate::spider::{PatrolSensors, Spider};
use crate::sprites::{Animator, start_dying};

/// Horizontal velocity for the next frame. A right contact wins over a left
/// one; with no contact the spider keeps going.
pub fn patrol_velocity(sensors: PatrolSensors, current: f32, speed: f32) -> f32 {
    if sensors.touching_right {
        -speed
    } else if sensors.touching_left {
        speed
    } else {
        current
    }
}

/// Switch the spider to its death sequence. Returns false if it was
/// already dying.
pub fn die(
    commands: &mut Commands,
    entity: Entity,
    spider: &mut Spider,
    animator: &mut Animator,
) -> bool {
    if !spider.alive {
        return false;
    }
    spider.alive = false;
    start_dying(commands, entity, animator);
    true
}
