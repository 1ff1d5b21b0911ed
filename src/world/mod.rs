//! 2D entities and segment hit-scans
//!
//! Entities here are independent values: nothing keeps a back-pointer to a
//! containing world, and scanning never mutates an entity. Results depend
//! only on the entity's current state and the segment.

pub mod entity;
pub mod hit;
pub mod point;
pub mod rect;

pub use entity::Entity;
pub use hit::{DistancedHit, Hit, nearest_hit};
pub use point::{Point, StaticPoint};
pub use rect::RectEntity;
