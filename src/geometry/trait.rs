use std::fmt::Debug;

use crate::r#type::IndexableNum;

/// An axis-aligned bounding volume the tree can cache per node and test during traversal.
pub trait BoundingBox: Clone + Debug {
    /// The coordinate type of this box.
    type Scalar: IndexableNum;

    /// The type squared distances are measured in.
    type Distance: PartialOrd + Copy + Debug;

    /// The point type used for distance and containment queries.
    type Point;

    /// A box enclosing nothing.
    ///
    /// An empty box must never intersect another box nor contain any point, so that a leaf built
    /// from zero items is never matched by a query.
    fn empty() -> Self;

    /// Returns `true` if this box encloses nothing.
    fn is_empty(&self) -> bool;

    /// The axis with the largest extent. Ties resolve to the lowest axis index.
    fn major_axis(&self) -> usize;

    /// Squared distance from `point` to the closest point of this box, or zero if `point` lies
    /// inside it.
    fn squared_exterior_distance(&self, point: &Self::Point) -> Self::Distance;

    /// Returns `true` if the two boxes share at least one point.
    fn intersects(&self, other: &Self) -> bool;

    /// Returns `true` if `point` lies inside this box, boundary included.
    fn contains(&self, point: &Self::Point) -> bool;
}

/// Grow a bounding box so that it encloses an element, either a point or another box.
pub trait Enclose<E> {
    /// Extend `self` to the smallest box enclosing both `self` and `element`.
    fn enclose(&mut self, element: &E);
}

/// A point-like value with a sortable coordinate per axis.
pub trait Coordinates {
    /// The coordinate type.
    type Scalar: PartialOrd;

    /// The coordinate along `axis`.
    fn coord(&self, axis: usize) -> Self::Scalar;
}

impl<T: IndexableNum, const N: usize> Coordinates for [T; N] {
    type Scalar = T;

    #[inline]
    fn coord(&self, axis: usize) -> T {
        self[axis]
    }
}
