//! Core domain: keyboard directives for the hero.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{GameAssets, play_sfx};
use crate::core::GameTuning;
use crate::hero::{self, Hero, MovementState};
use crate::sprites::{Animator, KillAction, KillListeners};

/// Left wins when both directions are held.
pub fn input_direction(left: bool, right: bool) -> i8 {
    if left {
        -1
    } else if right {
        1
    } else {
        0
    }
}

pub(crate) fn handle_input(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<GameTuning>,
    assets: Res<GameAssets>,
    mut heroes: Query<(
        Entity,
        &mut Hero,
        &mut MovementState,
        &mut LinearVelocity,
        &mut Animator,
        &mut KillListeners,
    )>,
) {
    let Ok((entity, mut hero, mut state, mut velocity, mut animator, mut listeners)) =
        heroes.single_mut()
    else {
        return;
    };
    if !hero.alive {
        return;
    }

    let direction = input_direction(
        keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA),
        keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD),
    );

    // Resting on the world floor means the hero fell out of the level
    if hero::move_hero(direction, &mut velocity, &mut state, tuning.hero_speed) {
        if hero::die(&mut commands, entity, &mut hero, &mut animator) {
            listeners.add_once(KillAction::RestartCurrentLevel);
        }
        return;
    }

    let jump_pressed =
        keyboard.just_pressed(KeyCode::ArrowUp) || keyboard.just_pressed(KeyCode::KeyW);
    if jump_pressed && hero::jump(state.on_ground, &mut velocity, tuning.hero_jump_speed) {
        play_sfx(&mut commands, &assets.sfx.jump);
    }
}
