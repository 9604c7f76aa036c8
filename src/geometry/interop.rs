//! Conversions between the bundled geometry and [`geo_traits`].

use geo_traits::{CoordTrait, Dimensions, RectTrait};

use crate::error::{KdTreeError, Result};
use crate::geometry::{Aabb, Point};
use crate::r#type::IndexableNum;

impl<T: IndexableNum, const N: usize> Point<T, N> {
    /// Create a point from any [`CoordTrait`] with at least `N` dimensions.
    ///
    /// Extra dimensions (e.g. `z` when `N == 2`) are dropped.
    pub fn try_from_coord(coord: &impl CoordTrait<T = T>) -> Result<Self> {
        let available = coord.dim().size();
        if available < N {
            return Err(KdTreeError::DimensionMismatch {
                expected: N,
                actual: available,
            });
        }

        let mut out = [T::zero(); N];
        for (axis, value) in out.iter_mut().enumerate() {
            *value = coord.nth_or_panic(axis);
        }
        Self::try_from_slice(&out)
    }
}

impl<T: IndexableNum, const N: usize> Aabb<T, N> {
    /// Create a box from its minimum and maximum corners given as [`CoordTrait`]s.
    pub fn try_from_coords(
        min: &impl CoordTrait<T = T>,
        max: &impl CoordTrait<T = T>,
    ) -> Result<Self> {
        Self::try_new(Point::try_from_coord(min)?, Point::try_from_coord(max)?)
    }

    /// Create a box from any [`RectTrait`] with at least `N` dimensions.
    pub fn try_from_rect(rect: &impl RectTrait<T = T>) -> Result<Self> {
        Self::try_from_coords(&rect.min(), &rect.max())
    }
}

impl<T: IndexableNum> CoordTrait for Point<T, 2> {
    type T = T;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.0[0]
    }

    fn y(&self) -> Self::T {
        self.0[1]
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 | 1 => self.0[n],
            _ => panic!("Invalid index of coord"),
        }
    }
}

impl<T: IndexableNum> CoordTrait for Point<T, 3> {
    type T = T;

    fn dim(&self) -> Dimensions {
        Dimensions::Xyz
    }

    fn x(&self) -> Self::T {
        self.0[0]
    }

    fn y(&self) -> Self::T {
        self.0[1]
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0..=2 => self.0[n],
            _ => panic!("Invalid index of coord"),
        }
    }
}
