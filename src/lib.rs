//! Flatworld - a small toolkit for 2D world simulations
//!
//! Core modules:
//! - `math`: Dense matrices and vectors with explicit, deterministic arithmetic
//! - `world`: Points, the entity contract, and segment hit-scans
//! - `draw`: Renderer-neutral drawing seam
//! - `settings`: Geometry conventions (y-axis orientation, contact slack)
//! - `error`: Error taxonomy shared by the above
//!
//! Everything is synchronous and allocation-owned: no operation returns a view
//! into another value's storage, so read-only use from several threads needs
//! no locking.

pub mod draw;
pub mod error;
pub mod math;
pub mod settings;
pub mod world;

pub use error::{Error, ErrorKind, Result};
pub use math::{Matrix, Vector};
pub use settings::{Settings, YAxis};
pub use world::{DistancedHit, Entity, Hit, Point, RectEntity, StaticPoint, nearest_hit};
