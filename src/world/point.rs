//! 2D points
//!
//! [`Point`] is the mutable anchor every entity owns. [`StaticPoint`] is the
//! read-only value handed out by corner queries and hit records.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Mutable 2D coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Move by `(dx, dy)`
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Read-only snapshot of the current coordinates
    pub fn to_static(&self) -> StaticPoint {
        StaticPoint::new(self.x, self.y)
    }

    #[inline]
    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Read-only 2D coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StaticPoint {
    x: f64,
    y: f64,
}

impl StaticPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: &StaticPoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    #[inline]
    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<Point> for StaticPoint {
    fn from(p: Point) -> Self {
        p.to_static()
    }
}

impl From<&Point> for StaticPoint {
    fn from(p: &Point) -> Self {
        p.to_static()
    }
}

impl From<StaticPoint> for Point {
    fn from(p: StaticPoint) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<DVec2> for StaticPoint {
    fn from(v: DVec2) -> Self {
        StaticPoint::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for StaticPoint {
    fn from((x, y): (f64, f64)) -> Self {
        StaticPoint::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_setters() {
        let mut p = Point::new(1.0, 2.0);
        p.set_x(5.0);
        assert_eq!((p.x(), p.y()), (5.0, 2.0));
        p.set_y(-1.0);
        assert_eq!((p.x(), p.y()), (5.0, -1.0));
        p.set(0.5, 0.25);
        p.translate(1.0, 1.0);
        assert_eq!(p, Point::new(1.5, 1.25));
    }

    #[test]
    fn test_static_snapshot_is_detached() {
        let mut p = Point::new(3.0, 4.0);
        let snap = p.to_static();
        p.set(0.0, 0.0);
        assert_eq!(snap, StaticPoint::new(3.0, 4.0));
        assert_eq!(snap.distance(&p.into()), 5.0);
    }

    #[test]
    fn test_equality_is_ieee() {
        assert_ne!(
            StaticPoint::new(f64::NAN, 0.0),
            StaticPoint::new(f64::NAN, 0.0)
        );
        assert_eq!(Point::new(0.0, -0.0), Point::new(-0.0, 0.0));
    }

    #[test]
    fn test_json_roundtrip() {
        let p = Point::new(1.5, -2.0);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
        assert_eq!(serde_json::from_str::<Point>(&json).unwrap(), p);

        let s: StaticPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(s, p.to_static());
    }

    #[test]
    fn test_distance_does_not_overflow() {
        let a = StaticPoint::new(-1e308, 0.0);
        let b = StaticPoint::new(0.0, 0.0);
        assert_eq!(a.distance(&b), 1e308);
    }

    #[test]
    fn test_conversions() {
        let s: StaticPoint = (1.0, 2.0).into();
        assert_eq!(s.as_dvec2(), DVec2::new(1.0, 2.0));
        assert_eq!(StaticPoint::from(DVec2::new(1.0, 2.0)), s);
        assert_eq!(Point::from(s), Point::new(1.0, 2.0));
    }
}
