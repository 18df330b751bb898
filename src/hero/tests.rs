use avian2d::prelude::*;
use bevy::prelude::*;

use super::spawn::hero_animator;
use super::*;

const SPEED: f32 = 200.0;
const JUMP_SPEED: f32 = 580.0;

// -----------------------------------------------------------------------------
// Move
// -----------------------------------------------------------------------------

#[test]
fn test_move_sets_speed_and_sign() {
    for direction in [-1i8, 1] {
        let mut velocity = LinearVelocity::default();
        let mut state = MovementState::default();
        move_hero(direction, &mut velocity, &mut state, SPEED);

        assert_eq!(velocity.x.abs(), SPEED);
        assert_eq!(velocity.x.signum(), f32::from(direction));
    }
}

#[test]
fn test_move_zero_stops() {
    let mut velocity = LinearVelocity(Vec2::new(SPEED, 0.0));
    let mut state = MovementState::default();
    move_hero(0, &mut velocity, &mut state, SPEED);
    assert_eq!(velocity.x, 0.0);
}

#[test]
fn test_move_keeps_vertical_velocity() {
    let mut velocity = LinearVelocity(Vec2::new(0.0, -300.0));
    let mut state = MovementState::default();
    move_hero(1, &mut velocity, &mut state, SPEED);
    assert_eq!(velocity.y, -300.0);
}

#[test]
fn test_move_facing_follows_velocity() {
    let mut velocity = LinearVelocity::default();
    let mut state = MovementState::default();

    move_hero(-1, &mut velocity, &mut state, SPEED);
    assert_eq!(state.facing, Facing::Left);

    move_hero(1, &mut velocity, &mut state, SPEED);
    assert_eq!(state.facing, Facing::Right);

    // Standing still resolves to facing right
    move_hero(-1, &mut velocity, &mut state, SPEED);
    move_hero(0, &mut velocity, &mut state, SPEED);
    assert_eq!(state.facing, Facing::Right);
}

#[test]
fn test_move_reports_world_floor() {
    let mut velocity = LinearVelocity::default();
    let mut state = MovementState {
        on_ground: true,
        on_world_floor: false,
        ..default()
    };
    assert!(!move_hero(1, &mut velocity, &mut state, SPEED));

    state.on_world_floor = true;
    assert!(move_hero(0, &mut velocity, &mut state, SPEED));
}

// -----------------------------------------------------------------------------
// Jump and bounce
// -----------------------------------------------------------------------------

#[test]
fn test_jump_when_grounded() {
    let mut velocity = LinearVelocity(Vec2::new(SPEED, 0.0));
    assert!(jump(true, &mut velocity, JUMP_SPEED));
    assert_eq!(velocity.y, JUMP_SPEED);
    assert_eq!(velocity.x, SPEED);
}

#[test]
fn test_jump_in_air_is_noop() {
    let mut velocity = LinearVelocity(Vec2::new(SPEED, -120.0));
    assert!(!jump(false, &mut velocity, JUMP_SPEED));
    assert_eq!(velocity.0, Vec2::new(SPEED, -120.0));
}

#[test]
fn test_bounce_ignores_ground_contact() {
    let mut velocity = LinearVelocity(Vec2::new(-SPEED, -400.0));
    bounce(&mut velocity, 200.0);
    assert_eq!(velocity.0, Vec2::new(-SPEED, 200.0));
}

// -----------------------------------------------------------------------------
// Animation resolution
// -----------------------------------------------------------------------------

#[test]
fn test_dead_hero_always_dies() {
    for velocity in [Vec2::ZERO, Vec2::new(SPEED, 100.0), Vec2::new(0.0, -50.0)] {
        for grounded in [false, true] {
            assert_eq!(
                resolve_animation(false, velocity, grounded),
                HeroAnimation::Die
            );
        }
    }
}

#[test]
fn test_rising_hero_jumps() {
    assert_eq!(
        resolve_animation(true, Vec2::new(0.0, 10.0), true),
        HeroAnimation::Jump
    );
    assert_eq!(
        resolve_animation(true, Vec2::new(SPEED, 10.0), false),
        HeroAnimation::Jump
    );
}

#[test]
fn test_airborne_hero_falls() {
    assert_eq!(
        resolve_animation(true, Vec2::new(0.0, -10.0), false),
        HeroAnimation::Fall
    );
    assert_eq!(
        resolve_animation(true, Vec2::new(SPEED, 0.0), false),
        HeroAnimation::Fall
    );
}

#[test]
fn test_grounded_hero_runs_or_stops() {
    assert_eq!(
        resolve_animation(true, Vec2::new(-SPEED, 0.0), true),
        HeroAnimation::Run
    );
    assert_eq!(resolve_animation(true, Vec2::ZERO, true), HeroAnimation::Stop);
}

#[test]
fn test_resting_contact_residue_is_not_rising() {
    // Velocity left on a body at rest after the contact solver runs
    assert_eq!(
        resolve_animation(true, Vec2::new(SPEED, 4.2e-8), true),
        HeroAnimation::Run
    );
    assert_eq!(
        resolve_animation(true, Vec2::new(0.0, 4.2e-8), true),
        HeroAnimation::Stop
    );
    assert_eq!(
        resolve_animation(true, Vec2::new(0.0, -3.0e-8), true),
        HeroAnimation::Stop
    );
}

#[test]
fn test_resolved_names_are_hero_clips() {
    let animator = hero_animator();
    for animation in [
        HeroAnimation::Die,
        HeroAnimation::Jump,
        HeroAnimation::Fall,
        HeroAnimation::Run,
        HeroAnimation::Stop,
    ] {
        let mut animator = animator.clone();
        assert!(animator.play(animation.clip_name()));
    }
}

#[test]
fn test_hero_default_is_alive() {
    assert!(Hero::default().alive);
}
