//! Hit records produced by hit-scans
//!
//! A [`DistancedHit`] is either a real hit (point, entity, distance) or the
//! miss sentinel from [`DistancedHit::miss`], which sits at infinite
//! distance so any real hit ranks ahead of it.

use std::cmp::Ordering;
use std::fmt;

use super::entity::Entity;
use super::point::StaticPoint;

/// Where a scan touched an entity, and which entity it was
#[derive(Clone, Copy)]
pub struct Hit<'a> {
    point: StaticPoint,
    entity: Option<&'a dyn Entity>,
}

impl<'a> Hit<'a> {
    pub fn new(point: StaticPoint, entity: &'a dyn Entity) -> Self {
        Self {
            point,
            entity: Some(entity),
        }
    }

    #[inline]
    pub fn point(&self) -> StaticPoint {
        self.point
    }

    /// The entity that was hit; `None` only on a miss
    #[inline]
    pub fn entity(&self) -> Option<&'a dyn Entity> {
        self.entity
    }
}

impl fmt::Debug for Hit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hit")
            .field("point", &self.point)
            .field("entity", &self.entity)
            .finish()
    }
}

/// A [`Hit`] plus its Euclidean distance from the scan origin
#[derive(Debug, Clone, Copy)]
pub struct DistancedHit<'a> {
    hit: Hit<'a>,
    distance: f64,
}

impl<'a> DistancedHit<'a> {
    /// A real hit.
    ///
    /// A negative `distance` is stored as `0.0` and NaN as `+inf`.
    pub fn new(point: StaticPoint, entity: &'a dyn Entity, distance: f64) -> Self {
        let distance = if distance.is_nan() {
            f64::INFINITY
        } else {
            distance.max(0.0)
        };
        Self {
            hit: Hit::new(point, entity),
            distance,
        }
    }

    /// The no-intersection result
    pub const fn miss() -> Self {
        Self {
            hit: Hit {
                point: StaticPoint::new(f64::INFINITY, f64::INFINITY),
                entity: None,
            },
            distance: f64::INFINITY,
        }
    }

    #[inline]
    pub fn is_miss(&self) -> bool {
        self.hit.entity.is_none()
    }

    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    #[inline]
    pub fn hit(&self) -> Hit<'a> {
        self.hit
    }

    #[inline]
    pub fn point(&self) -> StaticPoint {
        self.hit.point
    }

    #[inline]
    pub fn entity(&self) -> Option<&'a dyn Entity> {
        self.hit.entity
    }

    /// Nearer hits order first; a miss orders after every real hit
    pub fn cmp_distance(&self, other: &DistancedHit<'_>) -> Ordering {
        self.distance.total_cmp(&other.distance)
    }
}

/// Scan every entity with the segment `from -> to` and keep the nearest hit.
///
/// Entities are scanned in iteration order; on equal distances the entity
/// seen first wins. No entities, or no intersections, gives a miss.
pub fn nearest_hit<'a>(
    entities: impl IntoIterator<Item = &'a dyn Entity>,
    from: StaticPoint,
    to: StaticPoint,
) -> DistancedHit<'a> {
    let mut best = DistancedHit::miss();
    for (i, entity) in entities.into_iter().enumerate() {
        let hit = entity.hit_scan_between(from, to);
        if hit.is_miss() {
            log::trace!("nearest_hit: entity #{} missed", i);
            continue;
        }
        log::trace!("nearest_hit: entity #{} hit at distance {}", i, hit.distance());
        if hit.cmp_distance(&best) == Ordering::Less {
            best = hit;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::RectEntity;

    fn same_entity(a: &dyn Entity, b: &dyn Entity) -> bool {
        std::ptr::addr_eq(a, b)
    }

    #[test]
    fn test_miss_sentinel() {
        let miss = DistancedHit::miss();
        assert!(miss.is_miss());
        assert_eq!(miss.distance(), f64::INFINITY);
        assert!(miss.entity().is_none());
        assert!(miss.point().x().is_infinite());
    }

    #[test]
    fn test_real_hit_ranks_before_miss() {
        let rect = RectEntity::new(0.0, 0.0, 1.0, 1.0).unwrap();
        let far = DistancedHit::new(StaticPoint::new(0.0, 0.0), &rect, 1e300);
        assert!(!far.is_miss());
        assert_eq!(far.cmp_distance(&DistancedHit::miss()), Ordering::Less);
        assert_eq!(DistancedHit::miss().cmp_distance(&far), Ordering::Greater);
    }

    #[test]
    fn test_bad_distances_are_normalised() {
        let rect = RectEntity::new(0.0, 0.0, 1.0, 1.0).unwrap();
        let p = StaticPoint::new(0.0, 0.0);
        let real = DistancedHit::new(p, &rect, 0.5);

        let negative = DistancedHit::new(p, &rect, -3.0);
        assert_eq!(negative.distance(), 0.0);
        assert!(!negative.is_miss());

        let nan = DistancedHit::new(p, &rect, f64::NAN);
        assert_eq!(nan.distance(), f64::INFINITY);
        assert!(!nan.is_miss());
        assert_eq!(real.cmp_distance(&nan), Ordering::Less);
    }

    #[test]
    fn test_zero_distance_hit_is_not_miss() {
        let rect = RectEntity::new(0.0, 0.0, 1.0, 1.0).unwrap();
        let hit = DistancedHit::new(StaticPoint::new(0.5, 0.5), &rect, 0.0);
        assert!(!hit.is_miss());
        assert!(same_entity(hit.entity().unwrap(), &rect));
        assert_eq!(hit.hit().point(), StaticPoint::new(0.5, 0.5));
    }

    #[test]
    fn test_nearest_hit_picks_closest() {
        let near = RectEntity::new(2.0, -1.0, 1.0, 2.0).unwrap();
        let far = RectEntity::new(5.0, -1.0, 1.0, 2.0).unwrap();
        let entities: [&dyn Entity; 2] = [&far, &near];
        let hit = nearest_hit(
            entities,
            StaticPoint::new(0.0, 0.0),
            StaticPoint::new(10.0, 0.0),
        );
        assert_eq!(hit.distance(), 2.0);
        assert!(same_entity(hit.entity().unwrap(), &near));
    }

    #[test]
    fn test_nearest_hit_tie_keeps_first() {
        let a = RectEntity::new(2.0, -1.0, 1.0, 2.0).unwrap();
        let b = RectEntity::new(2.0, -3.0, 1.0, 4.0).unwrap();
        let entities: Vec<&dyn Entity> = vec![&a, &b];
        let hit = nearest_hit(
            entities.iter().copied(),
            StaticPoint::new(0.0, 0.0),
            StaticPoint::new(10.0, 0.0),
        );
        assert!(same_entity(hit.entity().unwrap(), &a));

        let reversed: Vec<&dyn Entity> = vec![&b, &a];
        let hit = nearest_hit(
            reversed,
            StaticPoint::new(0.0, 0.0),
            StaticPoint::new(10.0, 0.0),
        );
        assert!(same_entity(hit.entity().unwrap(), &b));
    }

    #[test]
    fn test_nearest_hit_empty_or_all_miss() {
        let none: Vec<&dyn Entity> = Vec::new();
        let from = StaticPoint::new(0.0, 0.0);
        let to = StaticPoint::new(1.0, 0.0);
        assert!(nearest_hit(none, from, to).is_miss());

        let away = RectEntity::new(0.0, 5.0, 1.0, 1.0).unwrap();
        assert!(nearest_hit([&away as &dyn Entity], from, to).is_miss());
    }
}
