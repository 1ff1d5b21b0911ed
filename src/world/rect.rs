//! Axis-aligned rectangle entity
//!
//! The anchor is the top-left corner. With [`YAxis::Down`] the box covers
//! `[y, y + height]`; with [`YAxis::Up`] it covers `[y - height, y]`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::hit::DistancedHit;
use super::point::{Point, StaticPoint};
use crate::error::{Error, Result};
use crate::settings::{Settings, YAxis};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RectFields")]
pub struct RectEntity {
    position: Point,
    width: f64,
    height: f64,
    y_axis: YAxis,
    contact_epsilon: f64,
}

/// Unvalidated serde form, checked through [`RectEntity::with_settings`]
#[derive(Deserialize)]
struct RectFields {
    position: Point,
    width: f64,
    height: f64,
    #[serde(default)]
    y_axis: YAxis,
    #[serde(default = "default_contact_epsilon")]
    contact_epsilon: f64,
}

fn default_contact_epsilon() -> f64 {
    Settings::default().contact_epsilon
}

impl TryFrom<RectFields> for RectEntity {
    type Error = Error;

    fn try_from(f: RectFields) -> Result<Self> {
        let settings = Settings {
            y_axis: f.y_axis,
            contact_epsilon: f.contact_epsilon,
        };
        Self::with_settings(f.position.x(), f.position.y(), f.width, f.height, &settings)
    }
}

fn check_extent(width: f64, height: f64) -> Result<()> {
    let valid = |v: f64| v.is_finite() && v >= 0.0;
    if !valid(width) || !valid(height) {
        return Err(Error::InvalidExtent { width, height });
    }
    Ok(())
}

impl RectEntity {
    /// Rectangle using [`Settings::default`]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        Self::with_settings(x, y, width, height, &Settings::default())
    }

    pub fn with_settings(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        settings: &Settings,
    ) -> Result<Self> {
        check_extent(width, height)?;
        Ok(Self {
            position: Point::new(x, y),
            width,
            height,
            y_axis: settings.y_axis,
            contact_epsilon: settings.contact_epsilon,
        })
    }

    pub fn y_axis(&self) -> YAxis {
        self.y_axis
    }

    /// Requested `(width, height)`. [`Entity::width`] and [`Entity::height`]
    /// are measured between the corners instead, which can differ after
    /// rounding.
    pub fn extent(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Resize, keeping the anchor fixed
    pub fn set_extent(&mut self, width: f64, height: f64) -> Result<()> {
        check_extent(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn bottom_y(&self) -> f64 {
        self.position.y() + self.height * self.y_axis.downward()
    }

    fn min_max(&self) -> (DVec2, DVec2) {
        let (min, max) = self.bounds();
        (min.as_dvec2(), max.as_dvec2())
    }

    /// Whether `p` lies in the box grown by `slack` on every side
    fn contains(&self, p: DVec2, slack: f64) -> bool {
        let (min, max) = self.min_max();
        p.x >= min.x - slack && p.x <= max.x + slack && p.y >= min.y - slack && p.y <= max.y + slack
    }
}

/// Where a segment enters a box: the segment parameter and, if the origin is
/// not already inside, the axis and face coordinate it crosses.
struct Entry {
    t: f64,
    face: Option<(usize, f64)>,
}

/// Clip `origin + t * dir`, `t` in `[0, 1]`, against the box `[min, max]`
fn clip_segment(origin: DVec2, dir: DVec2, min: DVec2, max: DVec2) -> Option<Entry> {
    let mut entry = Entry { t: 0.0, face: None };
    let mut t_exit = 1.0_f64;

    for axis in 0..2 {
        let (o, d, lo, hi) = (origin[axis], dir[axis], min[axis], max[axis]);
        if d == 0.0 {
            // parallel to this slab
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let t_lo = (lo - o) / d;
        let t_hi = (hi - o) / d;
        // entering face follows the direction, even when t_lo and t_hi round together
        let (near, far, face) = if d > 0.0 {
            (t_lo, t_hi, lo)
        } else {
            (t_hi, t_lo, hi)
        };
        if near > entry.t {
            entry = Entry {
                t: near,
                face: Some((axis, face)),
            };
        }
        t_exit = t_exit.min(far);
    }

    // also rejects NaN
    if entry.t <= t_exit { Some(entry) } else { None }
}

impl Entity for RectEntity {
    fn position(&self) -> &Point {
        &self.position
    }

    fn position_mut(&mut self) -> &mut Point {
        &mut self.position
    }

    fn width(&self) -> f64 {
        self.top_right_corner().x() - self.top_left_corner().x()
    }

    fn height(&self) -> f64 {
        (self.top_left_corner().y() - self.bottom_left_corner().y()).abs()
    }

    fn top_left_corner(&self) -> StaticPoint {
        self.position.to_static()
    }

    fn top_right_corner(&self) -> StaticPoint {
        StaticPoint::new(self.position.x() + self.width, self.position.y())
    }

    fn bottom_left_corner(&self) -> StaticPoint {
        StaticPoint::new(self.position.x(), self.bottom_y())
    }

    fn bottom_right_corner(&self) -> StaticPoint {
        StaticPoint::new(self.position.x() + self.width, self.bottom_y())
    }

    fn hit_scan(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> DistancedHit<'_> {
        let origin = DVec2::new(x1, y1);
        let end = DVec2::new(x2, y2);

        if !origin.is_finite() || !end.is_finite() {
            return DistancedHit::miss();
        }
        if self.contains(origin, 0.0) {
            return DistancedHit::new(origin.into(), self, 0.0);
        }
        if origin == end {
            if self.contains(origin, self.contact_epsilon) {
                return DistancedHit::new(origin.into(), self, 0.0);
            }
            return DistancedHit::miss();
        }

        // Far-apart endpoints can overflow `end - origin`. Segment parameters
        // are scale invariant, so clip in a halved frame when that happens.
        let scale = if (end - origin).is_finite() { 1.0 } else { 0.5 };
        let (o, dir) = (origin * scale, end * scale - origin * scale);

        let (min, max) = self.min_max();
        let Some(entry) = clip_segment(o, dir, min * scale, max * scale) else {
            return DistancedHit::miss();
        };

        let mut point = ((o + dir * entry.t) / scale).clamp(min, max);
        if let Some((axis, face)) = entry.face {
            point[axis] = face / scale;
        }
        let delta = point * scale - o;
        let distance = delta.x.hypot(delta.y) / scale;
        DistancedHit::new(point.into(), self, distance)
    }
}
