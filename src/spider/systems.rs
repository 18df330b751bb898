//! Spider domain: wall sensing and patrol.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::GameTuning;
use crate::interactions::patrol_ray_mask;
use crate::spider::behavior::patrol_velocity;
use crate::spider::spawn::SPIDER_SIZE;
use crate::spider::{PatrolSensors, Spider};

/// Gap at which a wall beside the spider counts as touching
const WALL_RAY_DISTANCE: f32 = 2.0;

pub(crate) fn detect_patrol_contacts(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &Spider, &mut PatrolSensors)>,
) {
    let wall_filter = SpatialQueryFilter::from_mask(patrol_ray_mask());

    for (transform, collider, spider, mut sensors) in &mut query {
        if !spider.alive {
            continue;
        }

        let half_width = collider
            .shape_scaled()
            .as_cuboid()
            .map(|c| c.half_extents.x)
            .unwrap_or(SPIDER_SIZE.x / 2.0);
        let origin = transform.translation.truncate();
        let reach = half_width + WALL_RAY_DISTANCE;

        let touching = |direction: Dir2| {
            spatial_query
                .cast_ray(origin, direction, reach, true, &wall_filter)
                .is_some()
        };

        let sensed = PatrolSensors {
            touching_left: touching(Dir2::NEG_X),
            touching_right: touching(Dir2::X),
        };
        if *sensors != sensed {
            *sensors = sensed;
        }
    }
}

pub(crate) fn patrol(
    tuning: Res<GameTuning>,
    mut query: Query<(&Spider, &PatrolSensors, &mut LinearVelocity)>,
) {
    for (spider, sensors, mut velocity) in &mut query {
        if spider.alive {
            velocity.x = patrol_velocity(*sensors, velocity.x, tuning.spider_speed);
        }
    }
}
