use crate::geometry::Rect;

/// A unit of stock material onto which components are placed.
/// Identified by its index in the [`Instance`](crate::entities::Instance).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sheet {
    /// Extent along the y-axis
    pub length: f64,
    /// Extent along the x-axis
    pub width: f64,
    /// Informational only, never used during placement
    pub thickness: f64,
}

impl Sheet {
    pub fn new(length: f64, width: f64, thickness: f64) -> Self {
        Sheet {
            length,
            width,
            thickness,
        }
    }

    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// The sheet's extent in its own coordinate space, with the origin at its top-left corner
    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.width,
            y_max: self.length,
        }
    }
}
