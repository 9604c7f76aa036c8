use std::ops::{Index, IndexMut};

use num_traits::Zero;

use crate::error::{KdTreeError, Result};
use crate::geometry::Coordinates;
use crate::r#type::IndexableNum;

/// A point in `N`-dimensional space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T: IndexableNum, const N: usize>(pub(crate) [T; N]);

impl<T: IndexableNum, const N: usize> Point<T, N> {
    /// Create a new point from its coordinates.
    pub fn new(coords: [T; N]) -> Self {
        Self(coords)
    }

    /// Create a new point from a slice of coordinates.
    ///
    /// Fails if the slice does not hold exactly `N` values or if any of them is NaN.
    pub fn try_from_slice(coords: &[T]) -> Result<Self> {
        if coords.len() != N {
            return Err(KdTreeError::DimensionMismatch {
                expected: N,
                actual: coords.len(),
            });
        }
        if let Some(axis) = coords.iter().position(|c| c.is_nan()) {
            return Err(KdTreeError::NonFiniteCoordinate { axis });
        }

        let mut out = [T::zero(); N];
        out.copy_from_slice(coords);
        Ok(Self(out))
    }

    /// The coordinates of this point.
    pub fn coords(&self) -> &[T; N] {
        &self.0
    }

    /// Squared euclidean distance to another point, in the widened [`IndexableNum::Distance`]
    /// type.
    #[inline]
    pub fn squared_distance(&self, other: &Self) -> T::Distance {
        let mut sum = <T::Distance as Zero>::zero();
        for axis in 0..N {
            sum = sum + self.0[axis].squared_delta(other.0[axis]);
        }
        sum
    }
}

impl<T: IndexableNum, const N: usize> Default for Point<T, N> {
    fn default() -> Self {
        Self([T::zero(); N])
    }
}

impl<T: IndexableNum, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Self(coords)
    }
}

impl<T: IndexableNum, const N: usize> From<Point<T, N>> for [T; N] {
    fn from(point: Point<T, N>) -> Self {
        point.0
    }
}

impl<T: IndexableNum, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;

    fn index(&self, axis: usize) -> &T {
        &self.0[axis]
    }
}

impl<T: IndexableNum, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, axis: usize) -> &mut T {
        &mut self.0[axis]
    }
}

impl<T: IndexableNum, const N: usize> Coordinates for Point<T, N> {
    type Scalar = T;

    #[inline]
    fn coord(&self, axis: usize) -> T {
        self.0[axis]
    }
}
