//! Looping vertical yo-yo used on static decorations.

use std::f32::consts::PI;

use bevy::prelude::*;

/// Sinusoidal in-out bob around a resting height.
#[derive(Component, Debug, Clone)]
pub struct Bob {
    /// Resting y the offset is applied to
    pub origin_y: f32,
    pub amplitude: f32,
    /// Seconds for one sweep from top to bottom
    pub half_period: f32,
    pub elapsed: f32,
}

impl Bob {
    pub fn new(origin_y: f32, amplitude: f32, half_period: f32) -> Self {
        Self {
            origin_y,
            amplitude,
            half_period,
            elapsed: 0.0,
        }
    }

    pub fn current_y(&self) -> f32 {
        self.origin_y + bob_offset(self.elapsed, self.amplitude, self.half_period)
    }
}

/// Offset at `elapsed` seconds: starts at `+amplitude`, eases down to
/// `-amplitude` over `half_period`, then eases back up.
pub fn bob_offset(elapsed: f32, amplitude: f32, half_period: f32) -> f32 {
    if half_period <= 0.0 {
        return amplitude;
    }

    let cycle = elapsed.rem_euclid(2.0 * half_period);
    let progress = if cycle < half_period {
        cycle / half_period
    } else {
        2.0 - cycle / half_period
    };
    let eased = 0.5 * (1.0 - (PI * progress).cos());

    amplitude * (1.0 - 2.0 * eased)
}

pub(crate) fn animate_bobs(time: Res<Time>, mut query: Query<(&mut Bob, &mut Transform)>) {
    let dt = time.delta_secs();

    for (mut bob, mut transform) in &mut query {
        bob.elapsed += dt;
        transform.translation.y = bob.current_y();
    }
}
