use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use super::systems::begin_session;
use super::*;
use crate::content::{GameAssets, LevelCatalog};
use crate::level::LevelEntity;

// -----------------------------------------------------------------------------
// Session init
// -----------------------------------------------------------------------------

#[test]
fn test_init_defaults_to_first_level() {
    let mut session = PlaySession::default();
    session.init(None, 3);
    assert_eq!(session.level, 0);
    assert_eq!(session.level_count, 3);
}

#[test]
fn test_init_wraps_level_index() {
    let mut session = PlaySession::default();
    session.init(Some(5), 3);
    assert_eq!(session.level, 2);

    session.init(Some(3), 3);
    assert_eq!(session.level, 0);
}

#[test]
fn test_init_resets_progress() {
    let mut session = PlaySession::default();
    session.init(Some(1), 3);
    session.collect_coin();
    session.collect_coin();
    session.collect_key();

    session.init(Some(1), 3);
    assert_eq!(session.coin_count, 0);
    assert!(!session.has_key);
    assert_eq!(session.level, 1);
}

#[test]
fn test_init_with_zero_levels_stays_in_range() {
    let mut session = PlaySession::default();
    session.init(Some(4), 0);
    assert_eq!(session.level, 0);
    assert_eq!(session.level_count, 1);
}

// -----------------------------------------------------------------------------
// Progress
// -----------------------------------------------------------------------------

#[test]
fn test_coin_count_increments_by_one() {
    let mut session = PlaySession::default();
    session.init(None, 3);
    for expected in 1..=5 {
        session.collect_coin();
        assert_eq!(session.coin_count, expected);
    }
}

#[test]
fn test_key_stays_held() {
    let mut session = PlaySession::default();
    session.init(None, 3);
    session.collect_key();
    session.collect_coin();
    assert!(session.has_key);
}

#[test]
fn test_next_level_wraps() {
    let mut session = PlaySession::default();
    session.init(Some(0), 3);
    assert_eq!(session.next_level(), 1);
    assert!(!session.is_last_level());

    session.init(Some(2), 3);
    assert_eq!(session.next_level(), 0);
    assert!(session.is_last_level());
}

// -----------------------------------------------------------------------------
// Input
// -----------------------------------------------------------------------------

#[test]
fn test_input_direction_left_wins() {
    assert_eq!(input_direction(true, true), -1);
    assert_eq!(input_direction(true, false), -1);
    assert_eq!(input_direction(false, true), 1);
    assert_eq!(input_direction(false, false), 0);
}

// -----------------------------------------------------------------------------
// Tuning
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_world_size() {
    let tuning = GameTuning::default();
    assert_eq!(tuning.world_size(), bevy::prelude::Vec2::new(960.0, 600.0));
    assert_eq!(tuning.level_count, 3);
}

// -----------------------------------------------------------------------------
// Session start system
// -----------------------------------------------------------------------------

fn session_app(session: PlaySession) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .init_state::<GameState>()
        .add_message::<RestartSession>()
        .insert_resource(session)
        .init_resource::<LevelCatalog>()
        .init_resource::<GameAssets>()
        .init_resource::<GameTuning>()
        .add_systems(Update, begin_session);
    app
}

fn session_in_progress() -> PlaySession {
    let mut session = PlaySession::default();
    session.init(Some(1), 3);
    session.collect_coin();
    session.collect_coin();
    session.collect_key();
    session
}

fn level_entity_count(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, With<LevelEntity>>()
        .iter(app.world())
        .count()
}

#[test]
fn test_restart_request_tears_down_and_resets_session() {
    let mut app = session_app(session_in_progress());
    for _ in 0..3 {
        app.world_mut().spawn(LevelEntity);
    }
    let unrelated = app.world_mut().spawn(Name::new("unrelated")).id();

    // Level 5 wraps to 2, which the empty catalog does not hold
    app.world_mut().write_message(RestartSession { level: 5 });
    app.update();

    assert_eq!(level_entity_count(&mut app), 0);
    assert!(app.world().get_entity(unrelated).is_ok());
    let session = app.world().resource::<PlaySession>();
    assert_eq!(session.level, 2);
    assert_eq!(session.coin_count, 0);
    assert!(!session.has_key);

    app.update();
    assert_eq!(
        app.world().resource::<State<GameState>>().get(),
        &GameState::MainMenu
    );
}

#[test]
fn test_no_restart_request_keeps_running_level() {
    let mut app = session_app(session_in_progress());
    for _ in 0..3 {
        app.world_mut().spawn(LevelEntity);
    }

    app.update();
    assert_eq!(level_entity_count(&mut app), 3);
    assert_eq!(app.world().resource::<PlaySession>(), &session_in_progress());
}
