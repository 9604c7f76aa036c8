use num_traits::{Bounded, Zero};

use crate::error::{KdTreeError, Result};
use crate::geometry::{BoundingBox, Enclose, Point};
use crate::r#type::IndexableNum;

/// An axis-aligned box in `N`-dimensional space.
///
/// The empty box is represented as the inverted range `[max_value, min_value]` on every axis, so
/// that enclosing any element replaces both corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb<T: IndexableNum, const N: usize> {
    min: Point<T, N>,
    max: Point<T, N>,
}

impl<T: IndexableNum, const N: usize> Aabb<T, N> {
    /// Create a new box from its minimum and maximum corners.
    ///
    /// Fails if `min` is greater than `max` on any axis.
    pub fn try_new(min: impl Into<Point<T, N>>, max: impl Into<Point<T, N>>) -> Result<Self> {
        let min = min.into();
        let max = max.into();
        for axis in 0..N {
            if min[axis] > max[axis] {
                return Err(KdTreeError::InvalidBounds { axis });
            }
        }
        Ok(Self { min, max })
    }

    /// Create the box spanned by two opposite corners, in any order.
    pub fn from_corners(a: impl Into<Point<T, N>>, b: impl Into<Point<T, N>>) -> Self {
        let a: Point<T, N> = a.into();
        let b: Point<T, N> = b.into();
        let mut out = Self::empty();
        out.enclose(&a);
        out.enclose(&b);
        out
    }

    /// The minimum corner.
    pub fn min(&self) -> &Point<T, N> {
        &self.min
    }

    /// The maximum corner.
    pub fn max(&self) -> &Point<T, N> {
        &self.max
    }

    /// The extent of this box along each axis, as `f64`.
    ///
    /// Extents are computed in `f64` so that wide integer boxes (e.g. `i8` from `-100` to `100`)
    /// don't overflow. An empty box has negative extents.
    pub fn extents(&self) -> [f64; N] {
        let mut out = [0.0; N];
        for (axis, extent) in out.iter_mut().enumerate() {
            let lo = self.min[axis].to_f64().unwrap_or(f64::NAN);
            let hi = self.max[axis].to_f64().unwrap_or(f64::NAN);
            *extent = hi - lo;
        }
        out
    }
}

impl<T: IndexableNum, const N: usize> BoundingBox for Aabb<T, N> {
    type Scalar = T;
    type Distance = T::Distance;
    type Point = Point<T, N>;

    fn empty() -> Self {
        Self {
            min: Point([T::max_value(); N]),
            max: Point([T::min_value(); N]),
        }
    }

    fn is_empty(&self) -> bool {
        (0..N).any(|axis| !(self.min[axis] <= self.max[axis]))
    }

    fn major_axis(&self) -> usize {
        let mut major_axis = 0;
        let mut max_extent = f64::NEG_INFINITY;
        for (axis, extent) in self.extents().into_iter().enumerate() {
            if extent > max_extent {
                max_extent = extent;
                major_axis = axis;
            }
        }
        major_axis
    }

    /// Returns the largest distance value for an empty box.
    fn squared_exterior_distance(&self, point: &Point<T, N>) -> T::Distance {
        if self.is_empty() {
            return <T::Distance as Bounded>::max_value();
        }

        let mut sum = <T::Distance as Zero>::zero();
        for axis in 0..N {
            sum = sum + squared_axis_dist(point[axis], self.min[axis], self.max[axis]);
        }
        sum
    }

    fn intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        for axis in 0..N {
            if self.max[axis] < other.min[axis] {
                return false;
            }
            if self.min[axis] > other.max[axis] {
                return false;
            }
        }

        true
    }

    fn contains(&self, point: &Point<T, N>) -> bool {
        (0..N).all(|axis| self.min[axis] <= point[axis] && point[axis] <= self.max[axis])
    }
}

impl<T: IndexableNum, const N: usize> Enclose<Point<T, N>> for Aabb<T, N> {
    #[inline]
    fn enclose(&mut self, point: &Point<T, N>) {
        for axis in 0..N {
            let value = point[axis];
            if value < self.min[axis] {
                self.min[axis] = value;
            }
            if value > self.max[axis] {
                self.max[axis] = value;
            }
        }
    }
}

impl<T: IndexableNum, const N: usize> Enclose<[T; N]> for Aabb<T, N> {
    #[inline]
    fn enclose(&mut self, point: &[T; N]) {
        self.enclose(&Point(*point));
    }
}

impl<T: IndexableNum, const N: usize> Enclose<Aabb<T, N>> for Aabb<T, N> {
    #[inline]
    fn enclose(&mut self, other: &Aabb<T, N>) {
        if other.is_empty() {
            return;
        }
        self.enclose(&other.min);
        self.enclose(&other.max);
    }
}

/// Squared 1D distance from a value to a range.
#[inline]
fn squared_axis_dist<T: IndexableNum>(k: T, min: T, max: T) -> T::Distance {
    if k < min {
        k.squared_delta(min)
    } else if k <= max {
        <T::Distance as Zero>::zero()
    } else {
        k.squared_delta(max)
    }
}
