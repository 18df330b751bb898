//! Content domain: level descriptors, tuning overrides and the asset manifest.
//!
//! Everything here is read or declared once at startup; the session only
//! ever reads the resulting resources.

mod assets;
mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use assets::{GameAssets, play_sfx};
pub use data::{LevelCatalog, LevelData, PlatformDef, PointDef};

use std::path::Path;

use bevy::prelude::*;

use crate::content::assets::preload_assets;
use crate::content::loader::{load_level_catalog, load_tuning_file};
use crate::core::{GameState, GameTuning};

/// Directory holding level and tuning files
pub const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelCatalog>()
            .init_resource::<GameAssets>()
            .add_systems(
                Startup,
                (load_tuning, load_levels, preload_assets).chain(),
            )
            .add_systems(Update, finish_boot.run_if(in_state(GameState::Boot)));
    }
}

fn load_tuning(mut tuning: ResMut<GameTuning>) {
    let path = Path::new(DATA_DIR).join("tuning.ron");
    match load_tuning_file(&path) {
        Ok(Some(loaded)) => {
            info!("Loaded tuning overrides from {}", path.display());
            *tuning = loaded;
        }
        Ok(None) => info!("No tuning file at {}, using defaults", path.display()),
        Err(e) => warn!("{}; using default tuning", e),
    }
}

fn load_levels(mut catalog: ResMut<LevelCatalog>, tuning: Res<GameTuning>) {
    let (loaded, errors) = load_level_catalog(Path::new(DATA_DIR), tuning.level_count);
    for e in &errors {
        error!("{}", e);
    }
    info!(
        "Level catalog: {} of {} levels loaded",
        loaded.len(),
        tuning.level_count
    );
    *catalog = loaded;
}

/// Leave Boot once every declared asset has either loaded or failed.
fn finish_boot(
    assets: Res<GameAssets>,
    asset_server: Res<AssetServer>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if assets.pending_count(&asset_server) > 0 {
        return;
    }

    let failed = assets.failed_count(&asset_server);
    if failed > 0 {
        warn!("{} declared assets failed to load", failed);
    }
    info!("Assets ready");
    next_state.set(GameState::MainMenu);
}
