//! Drawing seam between entities and a host renderer
//!
//! The core has no rendering dependency. A host picks its own surface type
//! `S` and entities implement [`Draw<S>`] for the surfaces they understand.
//! [`LineList`] is a renderer-neutral surface shipped for tooling and tests.

use crate::world::{Entity, RectEntity, StaticPoint};

/// Render onto an opaque surface. Takes `&self`: drawing never mutates the
/// entity.
pub trait Draw<S: ?Sized> {
    fn draw(&self, surface: &mut S);
}

/// Line segment in world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: StaticPoint,
    pub to: StaticPoint,
}

/// Surface that records line segments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineList {
    lines: Vec<Line>,
}

impl LineList {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn push(&mut self, from: StaticPoint, to: StaticPoint) {
        self.lines.push(Line { from, to });
    }

    /// Closed outline through `points`, last point joined back to the first
    pub fn push_loop(&mut self, points: &[StaticPoint]) {
        for (i, &from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            self.push(from, to);
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Bounding-box outline in TL, TR, BR, BL order
fn outline(entity: &dyn Entity, surface: &mut LineList) {
    surface.push_loop(&[
        entity.top_left_corner(),
        entity.top_right_corner(),
        entity.bottom_right_corner(),
        entity.bottom_left_corner(),
    ]);
}

/// Any entity can be drawn as its bounding box
impl Draw<LineList> for dyn Entity + '_ {
    fn draw(&self, surface: &mut LineList) {
        outline(self, surface);
    }
}

impl Draw<LineList> for RectEntity {
    fn draw(&self, surface: &mut LineList) {
        outline(self, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_outline() {
        let rect = RectEntity::new(1.0, 2.0, 3.0, 4.0).unwrap();
        let before = rect.clone();
        let mut surface = LineList::new();
        rect.draw(&mut surface);

        assert_eq!(surface.len(), 4);
        let lines = surface.lines();
        assert_eq!(lines[0].from, StaticPoint::new(1.0, 2.0));
        assert_eq!(lines[0].to, StaticPoint::new(4.0, 2.0));
        assert_eq!(lines[2].to, StaticPoint::new(1.0, 6.0));
        assert_eq!(lines[3].to, lines[0].from);
        assert_eq!(rect, before);
    }

    #[test]
    fn test_draw_through_trait_object() {
        let a = RectEntity::new(0.0, 0.0, 1.0, 1.0).unwrap();
        let b = RectEntity::new(5.0, 5.0, 2.0, 0.0).unwrap();
        let drawables: [&dyn Draw<LineList>; 2] = [&a, &b];

        let mut surface = LineList::default();
        for d in drawables {
            d.draw(&mut surface);
        }
        assert_eq!(surface.len(), 8);

        surface.clear();
        assert!(surface.is_empty());
    }

    #[test]
    fn test_draw_entity_trait_object() {
        let a = RectEntity::new(0.0, 0.0, 2.0, 1.0).unwrap();
        let b = RectEntity::new(3.0, 3.0, 1.0, 1.0).unwrap();
        let world: Vec<&dyn Entity> = vec![&a, &b];

        let mut surface = LineList::new();
        for entity in &world {
            entity.draw(&mut surface);
        }
        assert_eq!(surface.len(), 8);

        let mut direct = LineList::new();
        a.draw(&mut direct);
        b.draw(&mut direct);
        assert_eq!(surface, direct);
    }

    #[test]
    fn test_push_loop_empty() {
        let mut surface = LineList::new();
        surface.push_loop(&[]);
        assert!(surface.is_empty());
    }
}
