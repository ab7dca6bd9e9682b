/// Trait for types that can detect collisions between `Self` and `T`.
///
/// Rectangles only collide when their interiors overlap, so two components placed edge to edge
/// (tolerance `0`) do not collide.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can detect whether `T` lies entirely within `Self`.
pub trait Surrounds<T> {
    fn surrounds(&self, other: &T) -> bool;
}
