//! Death sequence and one-shot kill listeners.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{PlaySession, RestartSession};
use crate::sprites::animation::{AnimationFinished, Animator};

/// Clip name every mortal entity registers for its death sequence.
pub const DIE_CLIP: &str = "die";

/// Deferred work to run once an entity has left play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillAction {
    /// Restart the session at whatever level is current when the kill lands
    RestartCurrentLevel,
}

/// One-shot subscriptions fired when the owning entity is killed.
///
/// Actions are drained on the kill, so each runs at most once.
#[derive(Component, Debug, Default)]
pub struct KillListeners {
    once: Vec<KillAction>,
}

impl KillListeners {
    pub fn add_once(&mut self, action: KillAction) {
        self.once.push(action);
    }

    pub fn is_empty(&self) -> bool {
        self.once.is_empty()
    }

    pub fn drain(&mut self) -> Vec<KillAction> {
        std::mem::take(&mut self.once)
    }
}

/// Marker for an entity playing its death clip
#[derive(Component, Debug)]
pub struct Dying;

/// Take an entity out of the simulation and start its death clip.
pub fn start_dying(commands: &mut Commands, entity: Entity, animator: &mut Animator) {
    commands
        .entity(entity)
        .insert((Dying, RigidBodyDisabled, ColliderDisabled));
    animator.play(DIE_CLIP);
}

/// Remove entities whose death clip has finished and fire their listeners.
pub(crate) fn remove_killed_entities(
    mut commands: Commands,
    mut finished: MessageReader<AnimationFinished>,
    mut dying: Query<Option<&mut KillListeners>, With<Dying>>,
    session: Res<PlaySession>,
    mut restarts: MessageWriter<RestartSession>,
) {
    for event in finished.read() {
        if event.clip != DIE_CLIP {
            continue;
        }
        let Ok(listeners) = dying.get_mut(event.entity) else {
            continue;
        };

        commands.entity(event.entity).despawn();
        debug!("Entity {:?} killed", event.entity);

        let Some(mut listeners) = listeners else {
            continue;
        };
        for action in listeners.drain() {
            match action {
                KillAction::RestartCurrentLevel => {
                    info!("Restarting level {} after death", session.level);
                    restarts.write(RestartSession {
                        level: session.level,
                    });
                }
            }
        }
    }
}
