//! Core domain: session start, restart and teardown.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::{GameAssets, LevelCatalog};
use crate::core::{GameState, GameTuning, PlaySession, RestartSession};
use crate::level::{LevelEntity, load_level, spawn_background};
use crate::ui::spawn_hud;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Tear down the running level and build the requested one.
///
/// Several requests in one frame collapse into the last.
#[allow(clippy::too_many_arguments)]
pub(crate) fn begin_session(
    mut commands: Commands,
    mut restarts: MessageReader<RestartSession>,
    catalog: Res<LevelCatalog>,
    assets: Res<GameAssets>,
    tuning: Res<GameTuning>,
    mut session: ResMut<PlaySession>,
    level_entities: Query<Entity, With<LevelEntity>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(request) = restarts.read().last().copied() else {
        return;
    };

    for entity in &level_entities {
        commands.entity(entity).despawn();
    }

    session.init(Some(request.level), tuning.level_count);

    let Some(data) = catalog.get(session.level) else {
        error!("Level {} is not in the catalog", session.level);
        next_state.set(GameState::MainMenu);
        return;
    };

    spawn_background(&mut commands, &assets);
    load_level(&mut commands, data, &assets, &tuning);
    spawn_hud(&mut commands, &assets);

    info!(
        "Session started on level {} of {}",
        session.level + 1,
        session.level_count
    );
}

pub(crate) fn teardown_level(
    mut commands: Commands,
    level_entities: Query<Entity, With<LevelEntity>>,
) {
    for entity in &level_entities {
        commands.entity(entity).despawn();
    }
    debug!("Level torn down");
}
