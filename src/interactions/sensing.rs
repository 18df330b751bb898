//! Interactions domain: what the hero's body overlaps this frame.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::hero::Hero;
use crate::interactions::hero_overlap_mask;

/// Triggers and enemies intersecting the live hero, refreshed every frame.
#[derive(Resource, Debug, Default)]
pub struct HeroOverlaps {
    pub entities: Vec<Entity>,
}

pub(crate) fn detect_hero_overlaps(
    spatial_query: SpatialQuery,
    heroes: Query<(Entity, &Transform, &Collider, &Hero)>,
    mut overlaps: ResMut<HeroOverlaps>,
) {
    overlaps.entities.clear();

    let Ok((entity, transform, collider, hero)) = heroes.single() else {
        return;
    };
    if !hero.alive {
        return;
    }

    let filter =
        SpatialQueryFilter::from_mask(hero_overlap_mask()).with_excluded_entities([entity]);
    overlaps.entities = spatial_query.shape_intersections(
        collider,
        transform.translation.truncate(),
        0.0,
        &filter,
    );
}
