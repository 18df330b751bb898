//! Interactions domain: per-frame overlap dispatch for the hero.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::{GameAssets, play_sfx};
use crate::core::{GameState, GameTuning, PlaySession, RestartSession, SessionVictoryEvent};
use crate::hero::{self, Hero, MovementState};
use crate::interactions::rules::{DoorOutcome, SpiderContact, door_outcome, spider_contact};
use crate::interactions::sensing::HeroOverlaps;
use crate::level::{Coin, Door, Key};
use crate::spider::{self, Spider};
use crate::sprites::{Animator, KillAction, KillListeners};

type HeroQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static mut Hero,
        &'static MovementState,
        &'static mut LinearVelocity,
        &'static mut Animator,
        &'static mut KillListeners,
    ),
    Without<Spider>,
>;

/// React to everything the hero overlaps in a fixed order:
/// coins, spiders, key, door.
#[allow(clippy::too_many_arguments)]
pub(crate) fn resolve_interactions(
    mut commands: Commands,
    overlaps: Res<HeroOverlaps>,
    assets: Res<GameAssets>,
    tuning: Res<GameTuning>,
    mut session: ResMut<PlaySession>,
    mut heroes: HeroQuery,
    mut spiders: Query<(&mut Spider, &mut Animator), Without<Hero>>,
    coins: Query<(), With<Coin>>,
    keys: Query<(), With<Key>>,
    doors: Query<(), With<Door>>,
    mut restarts: MessageWriter<RestartSession>,
    mut victories: MessageWriter<SessionVictoryEvent>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Ok((
        hero_entity,
        mut hero,
        state,
        mut velocity,
        mut animator,
        mut listeners,
    )) = heroes.single_mut()
    else {
        return;
    };
    if !hero.alive {
        return;
    }

    let overlaps = &overlaps.entities;

    // Coins
    for &entity in overlaps.iter().filter(|e| coins.contains(**e)) {
        play_sfx(&mut commands, &assets.sfx.coin);
        commands.entity(entity).despawn();
        session.collect_coin();
        debug!("Coin collected, total {}", session.coin_count);
    }

    // Spiders
    for &entity in overlaps {
        let Ok((mut spider, mut spider_animator)) = spiders.get_mut(entity) else {
            continue;
        };
        if !spider.alive {
            continue;
        }

        play_sfx(&mut commands, &assets.sfx.stomp);
        match spider_contact(velocity.y) {
            SpiderContact::Stomp => {
                hero::bounce(&mut velocity, tuning.hero_bounce_speed);
                spider::die(&mut commands, entity, &mut spider, &mut spider_animator);
                debug!("Spider {:?} stomped", entity);
            }
            SpiderContact::HeroKilled => {
                if hero::die(&mut commands, hero_entity, &mut hero, &mut animator) {
                    listeners.add_once(KillAction::RestartCurrentLevel);
                }
                // The hero's body is gone; nothing else can touch it
                return;
            }
        }
    }

    // Key
    for &entity in overlaps.iter().filter(|e| keys.contains(**e)) {
        play_sfx(&mut commands, &assets.sfx.key);
        commands.entity(entity).despawn();
        session.collect_key();
        debug!("Key collected");
    }

    // Door
    if !overlaps.iter().any(|e| doors.contains(*e)) {
        return;
    }
    match door_outcome(&session, state.on_ground) {
        DoorOutcome::Locked => {}
        DoorOutcome::Advance(next) => {
            play_sfx(&mut commands, &assets.sfx.door);
            info!("Door opened on level {}, advancing to {}", session.level, next);
            restarts.write(RestartSession { level: next });
        }
        DoorOutcome::Victory => {
            info!(
                "Final door reached with {} coins, session complete",
                session.coin_count
            );
            victories.write(SessionVictoryEvent {
                coins_collected: session.coin_count,
            });
            next_state.set(GameState::Victory);
        }
    }
}
