//! Level domain: the loader that builds a level instance from its descriptor.

mod components;
mod geometry;
mod spawn;


pub use components::{Coin, Door, Key, LevelEntity, WorldFloor};
pub use geometry::to_world;
pub use spawn::{load_level, spawn_background};
