//! UI domain: key and coin HUD for the running level.

use bevy::prelude::*;

use crate::content::GameAssets;
use crate::core::PlaySession;
use crate::level::LevelEntity;

const HUD_PADDING: f32 = 10.0;
const HUD_FONT_SIZE: f32 = 26.0;

/// Marker for the HUD root
#[derive(Component, Debug)]
pub struct HudUI;

#[derive(Component, Debug)]
pub struct KeyIcon;

#[derive(Component, Debug)]
pub struct CoinCountText;

pub fn hud_coin_label(coin_count: u32) -> String {
    format!("x{}", coin_count)
}

/// Key icon sheet: frame 0 is the empty slot, frame 1 the held key
pub fn key_icon_frame(has_key: bool) -> usize {
    if has_key { 1 } else { 0 }
}

/// Build the HUD for a fresh level. Despawned with the level.
pub fn spawn_hud(commands: &mut Commands, assets: &GameAssets) {
    commands
        .spawn((
            HudUI,
            LevelEntity,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(7.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((KeyIcon, assets.sheet("icon:key").image_node(key_icon_frame(false))));

            parent.spawn(ImageNode::new(assets.image("icon:coin")));

            parent.spawn((
                CoinCountText,
                Text::new(hud_coin_label(0)),
                TextFont {
                    font: assets.hud_font.clone(),
                    font_size: HUD_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

/// Mirror coin count and key state every frame.
pub(crate) fn refresh_hud(
    session: Res<PlaySession>,
    mut texts: Query<&mut Text, With<CoinCountText>>,
    mut icons: Query<&mut ImageNode, With<KeyIcon>>,
) {
    let label = hud_coin_label(session.coin_count);
    for mut text in &mut texts {
        if **text != label {
            **text = label.clone();
        }
    }

    let frame = key_icon_frame(session.has_key);
    for mut icon in &mut icons {
        if let Some(atlas) = icon.texture_atlas.as_mut() {
            if atlas.index != frame {
                atlas.index = frame;
            }
        }
    }
}
