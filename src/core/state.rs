//! Core domain: game state definitions for the session flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Declared assets are still being fetched
    #[default]
    Boot,
    /// Start control visible, no session running
    MainMenu,
    Playing,
    /// Last door passed; acknowledgement and start control visible
    Victory,
}
