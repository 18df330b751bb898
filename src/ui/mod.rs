//! UI domain: in-level HUD, start control and victory screen.

mod hud;
mod menu;


pub use hud::{hud_coin_label, key_icon_frame, spawn_hud};

use bevy::prelude::*;

use crate::core::{GameState, PlaySet};
use crate::ui::hud::refresh_hud;
use crate::ui::menu::{handle_start_button, spawn_start_screen, spawn_victory_screen};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::MainMenu), spawn_start_screen)
            .add_systems(OnEnter(GameState::Victory), spawn_victory_screen)
            .add_systems(
                Update,
                handle_start_button
                    .run_if(in_state(GameState::MainMenu).or(in_state(GameState::Victory))),
            )
            .add_systems(Update, refresh_hud.in_set(PlaySet::Hud));
    }
}
