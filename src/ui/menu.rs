//! UI domain: start control and victory acknowledgement.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::LevelCatalog;
use crate::core::{GameState, RestartSession, SessionVictoryEvent};

pub const VICTORY_TITLE: &str = "Well Done!";
pub const VICTORY_MESSAGE: &str = "You have played through our game.";

/// Marker for the start button on the menu and victory screens
#[derive(Component, Debug)]
pub struct StartButton;

pub(crate) fn spawn_start_screen(mut commands: Commands) {
    commands
        .spawn((
            DespawnOnExit(GameState::MainMenu),
            screen_root(Color::srgb(0.05, 0.08, 0.12)),
        ))
        .with_children(|parent| {
            parent.spawn(title("Hero Platformer", Color::srgb(0.95, 0.85, 0.3)));
            spawn_start_button(parent);
        });
}

pub(crate) fn spawn_victory_screen(
    mut commands: Commands,
    mut victories: MessageReader<SessionVictoryEvent>,
) {
    let coins = victories.read().last().map(|v| v.coins_collected);

    commands
        .spawn((
            DespawnOnExit(GameState::Victory),
            screen_root(Color::srgba(0.02, 0.05, 0.1, 0.98)),
        ))
        .with_children(|parent| {
            parent.spawn(title(VICTORY_TITLE, Color::srgb(0.95, 0.85, 0.3)));

            parent.spawn((
                Text::new(VICTORY_MESSAGE),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            if let Some(coins) = coins {
                parent.spawn((
                    Text::new(format!("Coins on the final level: {}", coins)),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.6, 0.6, 0.7)),
                    Node {
                        margin: UiRect::bottom(Val::Px(40.0)),
                        ..default()
                    },
                ));
            }

            spawn_start_button(parent);
        });
}

fn screen_root(background: Color) -> impl Bundle {
    (
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            position_type: PositionType::Absolute,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(background),
        ZIndex(100),
    )
}

fn title(text: &str, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: 64.0,
            ..default()
        },
        TextColor(color),
        Node {
            margin: UiRect::bottom(Val::Px(30.0)),
            ..default()
        },
    )
}

fn spawn_start_button(parent: &mut ChildSpawnerCommands) {
    parent
        .spawn((
            StartButton,
            Button,
            Node {
                padding: UiRect::axes(Val::Px(40.0), Val::Px(16.0)),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgb(0.2, 0.2, 0.25)),
            BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
        ))
        .with_child((
            Text::new("START"),
            TextFont {
                font_size: 28.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.9, 0.9)),
        ));

    parent.spawn((
        Text::new("Press [Enter] or click to start"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.4, 0.4, 0.45)),
        Node {
            margin: UiRect::top(Val::Px(20.0)),
            ..default()
        },
    ));
}

/// Start a fresh session on the first level.
pub(crate) fn handle_start_button(
    keyboard: Res<ButtonInput<KeyCode>>,
    buttons: Query<&Interaction, (With<StartButton>, Changed<Interaction>)>,
    catalog: Res<LevelCatalog>,
    mut restarts: MessageWriter<RestartSession>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let start = keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::NumpadEnter)
        || buttons
            .iter()
            .any(|interaction| *interaction == Interaction::Pressed);

    if !start {
        return;
    }

    if catalog.get(0).is_none() {
        error!("Cannot start: the first level failed to load");
        return;
    }

    info!("Starting new session");
    restarts.write(RestartSession { level: 0 });
    next_state.set(GameState::Playing);
}
