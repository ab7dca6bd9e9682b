use crate::geometry::Point;
use crate::geometry::geo_traits::{CollidesWith, Surrounds};

///Axis-aligned rectangle, y grows downwards (top-left origin)
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Returns a new rectangle with the same centroid but scaled by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        let dx = (self.x_max - self.x_min) * (factor - 1.0) / 2.0;
        let dy = (self.y_max - self.y_min) * (factor - 1.0) / 2.0;
        self.resize_by(dx, dy)
            .expect("scaling should not lead to invalid rectangle")
    }

    /// Returns a new rectangle with the same centroid as `self` but expanded by `dx` in both x-directions and by `dy` in both y-directions.
    /// If the new rectangle is invalid (x_min >= x_max or y_min >= y_max), returns None.
    pub fn resize_by(mut self, dx: f64, dy: f64) -> Option<Self> {
        self.x_min -= dx;
        self.y_min -= dy;
        self.x_max += dx;
        self.y_max += dy;

        if self.x_min < self.x_max && self.y_min < self.y_max {
            Some(self)
        } else {
            None
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }
}

impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        f64::max(self.x_min, other.x_min) < f64::min(self.x_max, other.x_max)
            && f64::max(self.y_min, other.y_min) < f64::min(self.y_max, other.y_max)
    }
}

impl Surrounds<Rect> for Rect {
    #[inline(always)]
    fn surrounds(&self, other: &Rect) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Rect {
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    #[test]
    fn touching_rectangles_do_not_collide() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(10.0, 0.0, 20.0, 10.0);
        let c = rect(0.0, 10.0, 10.0, 20.0);
        assert!(!a.collides_with(&b));
        assert!(!a.collides_with(&c));
        assert!(!b.collides_with(&c));
    }

    #[test]
    fn overlapping_rectangles_collide() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(9.5, 9.5, 20.0, 20.0);
        assert!(a.collides_with(&b));
        assert!(b.collides_with(&a));
    }

    #[test]
    fn scaling_keeps_the_centroid() {
        let r = rect(0.0, 0.0, 100.0, 50.0).scale(1.1);
        assert!((r.centroid().x() - 50.0).abs() < 1e-9);
        assert!((r.centroid().y() - 25.0).abs() < 1e-9);
        assert!((r.width() - 110.0).abs() < 1e-9);
        assert!(rect(0.0, 0.0, 10.0, 10.0).resize_by(-5.0, 0.0).is_none());
    }

    #[test]
    fn surrounds_includes_shared_edges() {
        let sheet = rect(0.0, 0.0, 100.0, 50.0);
        let part = rect(60.0, 0.0, 100.0, 50.0);
        assert!(sheet.surrounds(&part));
        assert!(!part.surrounds(&sheet));
        assert_eq!(part.centroid(), Point(80.0, 25.0));
    }
}
