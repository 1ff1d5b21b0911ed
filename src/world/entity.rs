//! The entity contract
//!
//! An entity is anchored at a [`Point`] it owns, reports an axis-aligned
//! bounding box through four corners, and answers segment hit-scans.
//!
//! Every implementation must uphold:
//! - `TL.x == BL.x <= TR.x == BR.x`, `TL.y == TR.y`, `BL.y == BR.y`
//! - `width() == TR.x - TL.x` and `height() == |TL.y - BL.y|`
//! - `hit_scan` clips against the bounded segment, never the infinite ray
//! - a hit's distance is the Euclidean distance from the segment origin
//! - an origin inside the geometry hits at distance 0, at the origin itself
//! - a zero-length segment misses unless its origin touches the geometry
//! - a hit names `self` as its entity
//!
//! Which way `y` grows is a per-entity convention, see
//! [`YAxis`](crate::settings::YAxis).
//!
//! Drawing lives in [`Draw`](crate::draw::Draw), keyed by surface type. Every
//! `dyn Entity` draws its bounding box onto a
//! [`LineList`](crate::draw::LineList).

use std::fmt;

use super::hit::DistancedHit;
use super::point::{Point, StaticPoint};

pub trait Entity: fmt::Debug {
    /// The anchor point
    fn position(&self) -> &Point;

    fn position_mut(&mut self) -> &mut Point;

    /// Bounding box width, `>= 0`
    fn width(&self) -> f64;

    /// Bounding box height, `>= 0`
    fn height(&self) -> f64;

    fn top_left_corner(&self) -> StaticPoint;

    fn top_right_corner(&self) -> StaticPoint;

    fn bottom_left_corner(&self) -> StaticPoint;

    fn bottom_right_corner(&self) -> StaticPoint;

    /// Nearest intersection of the segment `(x1, y1) -> (x2, y2)` with this
    /// entity, or [`DistancedHit::miss`]
    fn hit_scan(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> DistancedHit<'_>;

    fn hit_scan_between(&self, from: StaticPoint, to: StaticPoint) -> DistancedHit<'_> {
        self.hit_scan(from.x(), from.y(), to.x(), to.y())
    }

    /// Bounding box as `(min, max)` corners
    fn bounds(&self) -> (StaticPoint, StaticPoint) {
        let tl = self.top_left_corner();
        let br = self.bottom_right_corner();
        (
            StaticPoint::new(tl.x().min(br.x()), tl.y().min(br.y())),
            StaticPoint::new(tl.x().max(br.x()), tl.y().max(br.y())),
        )
    }
}
