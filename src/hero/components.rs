//! Hero domain: components for the player character.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Hero {
    pub alive: bool,
}

impl Default for Hero {
    fn default() -> Self {
        Self { alive: true }
    }
}

/// Contact state sampled from the physics world every frame.
#[derive(Component, Debug, Default)]
pub struct MovementState {
    /// Standing on a platform or the world floor
    pub on_ground: bool,
    /// Standing on the bottom world boundary, i.e. fell out of the level
    pub on_world_floor: bool,
    pub facing: Facing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Animation the hero shows, resolved every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroAnimation {
    Die,
    Jump,
    Fall,
    Run,
    Stop,
}

impl HeroAnimation {
    pub fn clip_name(self) -> &'static str {
        match self {
            HeroAnimation::Die => "die",
            HeroAnimation::Jump => "jump",
            HeroAnimation::Fall => "fall",
            HeroAnimation::Run => "run",
            HeroAnimation::Stop => "stop",
        }
    }
}
