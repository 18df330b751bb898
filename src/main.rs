mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod hero;
mod interactions;
mod level;
mod spider;
mod sprites;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

/// Pixels per metre: one grass tile
const PHYSICS_LENGTH_UNIT: f32 = 42.0;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hero Platformer".to_string(),
            resolution: (960, 600).into(),
            resizable: false,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default().with_length_unit(PHYSICS_LENGTH_UNIT))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        sprites::SpritesPlugin,
        hero::HeroPlugin,
        spider::SpiderPlugin,
        interactions::InteractionsPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
