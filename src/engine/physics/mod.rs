// Arcade physics: gravity, integration, arena bounds and AABB overlap

pub mod body;
pub mod collision;
mod world;

pub use body::{BodyShape, KinematicBody};
pub use collision::{place_hitbox, Rect};
pub use world::{Contacts, PhysicsWorld};
