//! Interactions domain: outcome rules for hero overlaps.

use crate::core::PlaySession;
use crate::hero::VERTICAL_REST_EPSILON;

/// What happens when the hero touches a live spider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiderContact {
    /// Hero came down on top: spider dies, hero bounces
    Stomp,
    HeroKilled,
}

/// Only a hero moving downward stomps; any other contact kills the hero.
pub fn spider_contact(hero_velocity_y: f32) -> SpiderContact {
    if hero_velocity_y < -VERTICAL_REST_EPSILON {
        SpiderContact::Stomp
    } else {
        SpiderContact::HeroKilled
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorOutcome {
    /// Key missing or hero not standing; nothing happens
    Locked,
    /// Restart the session at this level
    Advance(usize),
    /// Last level passed
    Victory,
}

/// The door opens only for a grounded hero holding the key.
pub fn door_outcome(session: &PlaySession, grounded: bool) -> DoorOutcome {
    if !(session.has_key && grounded) {
        DoorOutcome::Locked
    } else if session.is_last_level() {
        DoorOutcome::Victory
    } else {
        DoorOutcome::Advance(session.next_level())
    }
}
