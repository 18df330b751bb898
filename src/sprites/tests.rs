//! Sprites domain: tests for clip playback, kill listeners and bob easing.

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::bob::bob_offset;
use super::lifecycle::remove_killed_entities;
use super::{
    AnimationClip, AnimationFinished, Animator, Bob, DIE_CLIP, Dying, KillAction, KillListeners,
};
use crate::core::{PlaySession, RestartSession};

fn test_animator() -> Animator {
    Animator::new()
        .with_clip("stop", AnimationClip::still(0))
        .with_clip("run", AnimationClip::new(&[1, 2], 8.0, true))
        .with_clip("die", AnimationClip::new(&[5, 6, 5, 6, 5, 6], 10.0, false))
}

// -----------------------------------------------------------------------------
// Animator tests
// -----------------------------------------------------------------------------

#[test]
fn test_animator_starts_without_clip() {
    let animator = test_animator();
    assert!(animator.current().is_none());
    assert!(animator.frame().is_none());
}

#[test]
fn test_animator_play_unknown_clip_is_rejected() {
    let mut animator = test_animator();
    assert!(!animator.play("swim"));
    assert!(animator.current().is_none());
}

#[test]
fn test_play_if_changed_is_idempotent() {
    let mut animator = test_animator();
    assert!(animator.play_if_changed("run"));
    animator.advance(0.13);
    assert_eq!(animator.frame(), Some(2));

    // Same clip again keeps the cursor where it was
    assert!(!animator.play_if_changed("run"));
    assert_eq!(animator.frame(), Some(2));

    assert!(animator.play_if_changed("stop"));
    assert_eq!(animator.frame(), Some(0));
}

#[test]
fn test_looping_clip_wraps() {
    let mut animator = test_animator();
    animator.play("run");

    assert_eq!(animator.frame(), Some(1));
    assert!(!animator.advance(0.125));
    assert_eq!(animator.frame(), Some(2));
    assert!(!animator.advance(0.125));
    assert_eq!(animator.frame(), Some(1));
    assert!(!animator.is_finished());
}

#[test]
fn test_non_looping_clip_finishes_once() {
    let mut animator = test_animator();
    animator.play("die");

    // Five steps walk the remaining frames
    for _ in 0..5 {
        assert!(!animator.advance(0.1001));
    }
    assert_eq!(animator.frame(), Some(6));

    // Sixth step runs past the end
    assert!(animator.advance(0.1001));
    assert!(animator.is_finished());
    assert_eq!(animator.frame(), Some(6));

    // No further completions
    assert!(!animator.advance(1.0));
}

#[test]
fn test_large_step_completes_clip() {
    let mut animator = test_animator();
    animator.play("die");
    assert!(animator.advance(5.0));
    assert!(animator.is_finished());
}

#[test]
fn test_replay_resets_finished_clip() {
    let mut animator = test_animator();
    animator.play("die");
    animator.advance(5.0);

    animator.play("die");
    assert!(!animator.is_finished());
    assert_eq!(animator.frame(), Some(5));
}

// -----------------------------------------------------------------------------
// KillListeners tests
// -----------------------------------------------------------------------------

#[test]
fn test_kill_listeners_drain_once() {
    let mut listeners = KillListeners::default();
    assert!(listeners.is_empty());

    listeners.add_once(KillAction::RestartCurrentLevel);
    assert!(!listeners.is_empty());

    assert_eq!(listeners.drain(), vec![KillAction::RestartCurrentLevel]);
    assert!(listeners.is_empty());
    assert!(listeners.drain().is_empty());
}

// -----------------------------------------------------------------------------
// Bob tests
// -----------------------------------------------------------------------------

#[test]
fn test_bob_offset_endpoints() {
    assert!((bob_offset(0.0, 3.0, 0.8) - 3.0).abs() < 1e-4);
    assert!((bob_offset(0.8, 3.0, 0.8) + 3.0).abs() < 1e-4);
    assert!((bob_offset(1.6, 3.0, 0.8) - 3.0).abs() < 1e-4);
}

#[test]
fn test_bob_offset_midpoint_is_rest() {
    assert!(bob_offset(0.4, 3.0, 0.8).abs() < 1e-4);
    assert!(bob_offset(1.2, 3.0, 0.8).abs() < 1e-4);
}

#[test]
fn test_bob_offset_stays_within_amplitude() {
    for step in 0..100 {
        let offset = bob_offset(step as f32 * 0.037, 3.0, 0.8);
        assert!(offset.abs() <= 3.0 + 1e-4);
    }
}

#[test]
fn test_bob_current_y_tracks_origin() {
    let mut bob = Bob::new(100.0, 3.0, 0.8);
    assert!((bob.current_y() - 103.0).abs() < 1e-4);
    bob.elapsed = 0.8;
    assert!((bob.current_y() - 97.0).abs() < 1e-4);
}

// -----------------------------------------------------------------------------
// Killed entity removal
// -----------------------------------------------------------------------------

fn lifecycle_app(level: usize) -> App {
    let mut session = PlaySession::default();
    session.init(Some(level), 3);

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_message::<AnimationFinished>()
        .add_message::<RestartSession>()
        .insert_resource(session)
        .add_systems(Update, remove_killed_entities);
    app
}

fn spawn_dying_hero(app: &mut App) -> Entity {
    let mut listeners = KillListeners::default();
    listeners.add_once(KillAction::RestartCurrentLevel);
    app.world_mut().spawn((Dying, listeners)).id()
}

fn finish_clip(app: &mut App, entity: Entity, clip: &'static str) {
    app.world_mut()
        .write_message(AnimationFinished { entity, clip });
}

#[test]
fn test_finished_death_despawns_and_restarts_current_level_once() {
    let mut app = lifecycle_app(2);
    let hero = spawn_dying_hero(&mut app);
    let mut cursor = app
        .world()
        .resource::<Messages<RestartSession>>()
        .get_cursor();

    finish_clip(&mut app, hero, DIE_CLIP);
    app.update();
    assert!(app.world().get_entity(hero).is_err());

    // A late duplicate finish for the same entity fires nothing
    finish_clip(&mut app, hero, DIE_CLIP);
    app.update();

    let messages = app.world().resource::<Messages<RestartSession>>();
    let levels: Vec<usize> = cursor.read(messages).map(|m| m.level).collect();
    assert_eq!(levels, vec![2]);
}

#[test]
fn test_other_finished_clips_leave_dying_entity() {
    let mut app = lifecycle_app(0);
    let hero = spawn_dying_hero(&mut app);

    finish_clip(&mut app, hero, "jump");
    app.update();
    assert!(app.world().get_entity(hero).is_ok());
}

#[test]
fn test_finished_death_without_listeners_only_despawns() {
    let mut app = lifecycle_app(1);
    let spider = app.world_mut().spawn(Dying).id();

    finish_clip(&mut app, spider, DIE_CLIP);
    app.update();
    assert!(app.world().get_entity(spider).is_err());

    let messages = app.world().resource::<Messages<RestartSession>>();
    assert_eq!(messages.get_cursor().read(messages).count(), 0);
}
