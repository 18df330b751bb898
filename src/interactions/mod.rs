//! Interactions domain: which bodies block each other and what happens when
//! the hero overlaps something.

mod layers;
mod resolver;
pub mod rules;
mod sensing;


pub use layers::*;
pub use rules::{DoorOutcome, SpiderContact, door_outcome, spider_contact};
pub use sensing::HeroOverlaps;

use bevy::prelude::*;

use crate::core::PlaySet;
use crate::interactions::resolver::resolve_interactions;
use crate::interactions::sensing::detect_hero_overlaps;

pub struct InteractionsPlugin;

impl Plugin for InteractionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HeroOverlaps>()
            .add_systems(Update, detect_hero_overlaps.in_set(PlaySet::Sense))
            .add_systems(Update, resolve_interactions.in_set(PlaySet::Resolve));
    }
}
