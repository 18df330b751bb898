//! Dev-tools: collider outlines, level warps and a hero info overlay.
//!
//! Hotkeys:
//! - F1 toggles collider outlines
//! - F2 restarts the current level
//! - F3 warps to the next level
//! - F4 toggles the hero info overlay

mod systems;


use bevy::prelude::*;

use crate::core::{GameState, PlaySession};
use crate::debug::systems::{
    draw_collider_gizmos, handle_debug_hotkeys, update_debug_info_overlay,
};

/// Resource tracking dev-tools state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub gizmos_visible: bool,
}

/// Marker for the hero info overlay text
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarpAction {
    RestartLevel,
    NextLevel,
}

/// Level a warp lands on. The session wraps the index on init.
pub fn warp_target(action: WarpAction, session: &PlaySession) -> usize {
    match action {
        WarpAction::RestartLevel => session.level,
        WarpAction::NextLevel => session.next_level(),
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (
                    handle_debug_hotkeys,
                    update_debug_info_overlay,
                    draw_collider_gizmos.run_if(|state: Res<DebugState>| state.gizmos_visible),
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
