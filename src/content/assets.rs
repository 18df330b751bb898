//! Asset manifest: every image, spritesheet, sound and font the game
//! declares up front, and the handles they resolve to.

use std::collections::HashMap;

use bevy::asset::{LoadState, UntypedAssetId};
use bevy::prelude::*;

/// Static images, keyed the way level files and spawners refer to them.
pub const IMAGES: &[(&str, &str)] = &[
    ("background", "images/background.png"),
    ("ground", "images/ground.png"),
    ("grass:8x1", "images/grass_8x1.png"),
    ("grass:6x1", "images/grass_6x1.png"),
    ("grass:4x1", "images/grass_4x1.png"),
    ("grass:2x1", "images/grass_2x1.png"),
    ("grass:1x1", "images/grass_1x1.png"),
    ("icon:coin", "images/coin_icon.png"),
    ("key", "images/key.png"),
];

/// Spritesheet layout: uniform frames in a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetDef {
    pub key: &'static str,
    pub path: &'static str,
    pub frame_size: UVec2,
    pub columns: u32,
}

pub const SHEETS: &[SheetDef] = &[
    SheetDef {
        key: "icon:key",
        path: "images/key_icon.png",
        frame_size: UVec2::new(34, 30),
        columns: 2,
    },
    SheetDef {
        key: "door",
        path: "images/door.png",
        frame_size: UVec2::new(42, 66),
        columns: 2,
    },
    SheetDef {
        key: "hero",
        path: "images/hero.png",
        frame_size: UVec2::new(36, 42),
        columns: 7,
    },
    SheetDef {
        key: "coin",
        path: "images/coin_animated.png",
        frame_size: UVec2::new(22, 22),
        columns: 4,
    },
    SheetDef {
        key: "spider",
        path: "images/spider.png",
        frame_size: UVec2::new(42, 32),
        columns: 5,
    },
];

pub const SOUNDS: &[(&str, &str)] = &[
    ("sfx:jump", "audio/jump.wav"),
    ("sfx:coin", "audio/coin.wav"),
    ("sfx:stomp", "audio/stomp.wav"),
    ("sfx:key", "audio/key.wav"),
    ("sfx:door", "audio/door.wav"),
];

/// Vector stand-in for the bitmap digit sheet the HUD art was drawn with
pub const HUD_FONT: &str = "fonts/numbers.ttf";

/// Image handle plus the atlas layout slicing it into frames.
#[derive(Debug, Clone, Default)]
pub struct SpriteSheet {
    pub image: Handle<Image>,
    pub layout: Handle<TextureAtlasLayout>,
}

impl SpriteSheet {
    /// Sprite showing `index` of this sheet
    pub fn sprite(&self, index: usize) -> Sprite {
        Sprite::from_atlas_image(
            self.image.clone(),
            TextureAtlas {
                layout: self.layout.clone(),
                index,
            },
        )
    }

    pub fn image_node(&self, index: usize) -> ImageNode {
        ImageNode::from_atlas_image(
            self.image.clone(),
            TextureAtlas {
                layout: self.layout.clone(),
                index,
            },
        )
    }
}

/// Audio handles, loaded once at startup by [`preload_assets`].
#[derive(Debug, Clone, Default)]
pub struct SoundEffects {
    pub jump: Handle<AudioSource>,
    pub coin: Handle<AudioSource>,
    pub stomp: Handle<AudioSource>,
    pub key: Handle<AudioSource>,
    pub door: Handle<AudioSource>,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct GameAssets {
    pub images: HashMap<&'static str, Handle<Image>>,
    pub sheets: HashMap<&'static str, SpriteSheet>,
    pub sfx: SoundEffects,
    pub hud_font: Handle<Font>,
}

impl GameAssets {
    pub fn image(&self, key: &str) -> Handle<Image> {
        match self.images.get(key) {
            Some(handle) => handle.clone(),
            None => {
                warn!("No image declared for '{}'", key);
                Handle::default()
            }
        }
    }

    pub fn sheet(&self, key: &str) -> SpriteSheet {
        match self.sheets.get(key) {
            Some(sheet) => sheet.clone(),
            None => {
                warn!("No spritesheet declared for '{}'", key);
                SpriteSheet::default()
            }
        }
    }

    fn untyped_ids(&self) -> Vec<UntypedAssetId> {
        let mut ids: Vec<UntypedAssetId> =
            self.images.values().map(|h| h.id().untyped()).collect();
        ids.extend(self.sheets.values().map(|s| s.image.id().untyped()));
        ids.extend(
            [
                &self.sfx.jump,
                &self.sfx.coin,
                &self.sfx.stomp,
                &self.sfx.key,
                &self.sfx.door,
            ]
            .into_iter()
            .map(|h| h.id().untyped()),
        );
        ids.push(self.hud_font.id().untyped());
        ids
    }

    /// Number of declared assets still in flight
    pub fn pending_count(&self, asset_server: &AssetServer) -> usize {
        self.untyped_ids()
            .into_iter()
            .filter(|id| {
                !matches!(
                    asset_server.get_load_state(*id),
                    Some(LoadState::Loaded) | Some(LoadState::Failed(_))
                )
            })
            .count()
    }

    pub fn failed_count(&self, asset_server: &AssetServer) -> usize {
        self.untyped_ids()
            .into_iter()
            .filter(|id| matches!(asset_server.get_load_state(*id), Some(LoadState::Failed(_))))
            .count()
    }
}

/// Declare every asset for the asset server to fetch.
pub(crate) fn preload_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let images = IMAGES
        .iter()
        .map(|(key, path)| (*key, asset_server.load(*path)))
        .collect();

    let sheets = SHEETS
        .iter()
        .map(|def| {
            let layout = layouts.add(TextureAtlasLayout::from_grid(
                def.frame_size,
                def.columns,
                1,
                None,
                None,
            ));
            let sheet = SpriteSheet {
                image: asset_server.load(def.path),
                layout,
            };
            (def.key, sheet)
        })
        .collect();

    let sound = |key: &str| -> Handle<AudioSource> {
        SOUNDS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, path)| asset_server.load(*path))
            .unwrap_or_default()
    };

    let sfx = SoundEffects {
        jump: sound("sfx:jump"),
        coin: sound("sfx:coin"),
        stomp: sound("sfx:stomp"),
        key: sound("sfx:key"),
        door: sound("sfx:door"),
    };

    commands.insert_resource(GameAssets {
        images,
        sheets,
        sfx,
        hud_font: asset_server.load(HUD_FONT),
    });

    info!(
        "Declared {} images, {} spritesheets, {} sounds",
        IMAGES.len(),
        SHEETS.len(),
        SOUNDS.len()
    );
}

/// Fire-and-forget sound effect.
pub fn play_sfx(commands: &mut Commands, audio: &Handle<AudioSource>) {
    commands.spawn((AudioPlayer::new(audio.clone()), PlaybackSettings::DESPAWN));
}
