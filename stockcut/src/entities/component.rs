/// A rectangular piece to be cut from a [`Sheet`](crate::entities::Sheet).
/// Components are never rotated: `width` always runs along the sheet's width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Component {
    pub length: f64,
    pub width: f64,
}

impl Component {
    pub fn new(length: f64, width: f64) -> Self {
        Component { length, width }
    }

    pub fn area(&self) -> f64 {
        self.length * self.width
    }
}
