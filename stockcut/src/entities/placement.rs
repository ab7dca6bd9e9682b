use crate::entities::Component;
use crate::geometry::Rect;

/// The resolved location of a single component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Index of the component in the instance
    pub component_idx: usize,
    /// Index of the sheet the component was assigned to
    pub sheet_idx: usize,
    /// x-coordinate of the component's top-left corner, within the sheet
    pub x: f64,
    /// y-coordinate of the component's top-left corner, within the sheet
    pub y: f64,
}

impl Placement {
    /// Bounding box of the placed component, without tolerance margin
    pub fn bbox(&self, component: &Component) -> Rect {
        Rect {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x + component.width,
            y_max: self.y + component.length,
        }
    }

    /// Bounding box including the tolerance margin on the right and bottom side.
    /// Summed in the same order as the shelf cursor so both agree on the sheet border.
    pub fn footprint(&self, component: &Component, tolerance: f64) -> Rect {
        Rect {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x + component.width + tolerance,
            y_max: self.y + component.length + tolerance,
        }
    }
}
