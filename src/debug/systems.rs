//! Dev-tools systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::{GameState, PlaySession, RestartSession};
use crate::debug::{DebugInfoOverlay, DebugState, WarpAction, warp_target};
use crate::hero::{Hero, MovementState};

pub(crate) fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    session: Res<PlaySession>,
    mut restarts: MessageWriter<RestartSession>,
    overlays: Query<Entity, With<DebugInfoOverlay>>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.gizmos_visible = !debug_state.gizmos_visible;
        info!("[DEBUG] Collider outlines {}", on_off(debug_state.gizmos_visible));
    }

    let warp = if keyboard.just_pressed(KeyCode::F2) {
        Some(WarpAction::RestartLevel)
    } else if keyboard.just_pressed(KeyCode::F3) {
        Some(WarpAction::NextLevel)
    } else {
        None
    };
    if let Some(action) = warp {
        let level = warp_target(action, &session);
        info!("[DEBUG] {:?} -> level {}", action, level);
        restarts.write(RestartSession { level });
    }

    if keyboard.just_pressed(KeyCode::F4) {
        if overlays.is_empty() {
            commands.spawn((
                DebugInfoOverlay,
                DespawnOnExit(GameState::Playing),
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 1.0, 0.8)),
                Node {
                    position_type: PositionType::Absolute,
                    right: Val::Px(10.0),
                    top: Val::Px(10.0),
                    ..default()
                },
                ZIndex(150),
            ));
        } else {
            for entity in &overlays {
                commands.entity(entity).despawn();
            }
        }
    }
}

pub(crate) fn update_debug_info_overlay(
    session: Res<PlaySession>,
    heroes: Query<(&Transform, &LinearVelocity, &Hero, &MovementState)>,
    mut overlays: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    let hero_line = match heroes.single() {
        Ok((transform, velocity, hero, state)) => format!(
            "hero ({:.0}, {:.0}) v=({:.0}, {:.0})\nalive={} ground={} floor={}",
            transform.translation.x,
            transform.translation.y,
            velocity.x,
            velocity.y,
            hero.alive,
            state.on_ground,
            state.on_world_floor,
        ),
        Err(_) => "hero: none".to_string(),
    };
    let info = format!(
        "level {}/{}  coins {}  key {}\n{}",
        session.level + 1,
        session.level_count,
        session.coin_count,
        session.has_key,
        hero_line
    );

    for mut text in &mut overlays {
        **text = info.clone();
    }
}

/// Outline every enabled box collider: solids in green, sensors in yellow.
pub(crate) fn draw_collider_gizmos(
    mut gizmos: Gizmos,
    colliders: Query<(&Transform, &Collider, Has<Sensor>), Without<ColliderDisabled>>,
) {
    for (transform, collider, is_sensor) in &colliders {
        let Some(cuboid) = collider.shape_scaled().as_cuboid() else {
            continue;
        };
        let size = Vec2::new(cuboid.half_extents.x, cuboid.half_extents.y) * 2.0;
        let color = if is_sensor {
            Color::srgb(1.0, 0.9, 0.2)
        } else {
            Color::srgb(0.2, 1.0, 0.4)
        };
        gizmos.rect_2d(
            Isometry2d::from_translation(transform.translation.truncate()),
            size,
            color,
        );
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "ON" } else { "OFF" }
}
