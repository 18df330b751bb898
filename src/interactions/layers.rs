//! Interactions domain: physics layers and the solid pairs between them.

use avian2d::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Platforms
    Ground,
    /// Invisible walls at platform edges, only block enemies
    EnemyWall,
    /// Edges of the world
    Bounds,
    Hero,
    Enemy,
    /// Coins, key and door - overlap only, never block
    Trigger,
}

/// Hero collides with platforms and world bounds.
pub fn hero_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::Hero, [GameLayer::Ground, GameLayer::Bounds])
}

/// Spiders collide with platforms, enemy walls and world bounds.
pub fn spider_layers() -> CollisionLayers {
    CollisionLayers::new(
        GameLayer::Enemy,
        [GameLayer::Ground, GameLayer::EnemyWall, GameLayer::Bounds],
    )
}

pub fn platform_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::Ground, [GameLayer::Hero, GameLayer::Enemy])
}

pub fn enemy_wall_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::EnemyWall, [GameLayer::Enemy])
}

pub fn bounds_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::Bounds, [GameLayer::Hero, GameLayer::Enemy])
}

/// Triggers accept no solid contacts; they are found by overlap queries.
pub fn trigger_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::Trigger, LayerMask::NONE)
}

/// Layers the hero's overlap query looks at every frame.
pub fn hero_overlap_mask() -> LayerMask {
    LayerMask::from([GameLayer::Trigger, GameLayer::Enemy])
}

/// Surfaces that count as ground under the hero's feet.
pub fn ground_ray_mask() -> LayerMask {
    LayerMask::from([GameLayer::Ground, GameLayer::Bounds])
}

/// Surfaces that turn a patrolling spider around.
pub fn patrol_ray_mask() -> LayerMask {
    LayerMask::from([GameLayer::Ground, GameLayer::EnemyWall, GameLayer::Bounds])
}
