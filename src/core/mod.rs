//! Core domain: session flow, gameplay tuning and the per-frame schedule.

mod events;
mod input;
mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{RestartSession, SessionVictoryEvent};
pub use input::input_direction;
pub use resources::{GameTuning, PlaySession};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::input::handle_input;
use crate::core::systems::{begin_session, setup_camera, teardown_level};

/// Frame order while playing. Sensing feeds the resolver, the resolver runs
/// before input, and the HUD reflects both.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaySet {
    /// Apply pending restarts
    Session,
    /// Ground and wall contacts
    Sense,
    /// Hero overlaps
    Resolve,
    Input,
    Hud,
    /// Autonomous per-entity updates
    Behave,
    /// Clip playback and death completion
    Animate,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameTuning>()
            .init_resource::<PlaySession>()
            .add_message::<RestartSession>()
            .add_message::<SessionVictoryEvent>()
            .configure_sets(
                Update,
                (
                    PlaySet::Session,
                    PlaySet::Sense,
                    PlaySet::Resolve,
                    PlaySet::Input,
                    PlaySet::Hud,
                    PlaySet::Behave,
                    PlaySet::Animate,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(Update, begin_session.in_set(PlaySet::Session))
            .add_systems(Update, handle_input.in_set(PlaySet::Input))
            .add_systems(OnExit(GameState::Playing), teardown_level);
    }
}
