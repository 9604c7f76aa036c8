use thiserror::Error;

/// Enum with all errors in this crate.
///
/// Building and traversing a tree never fails. These errors only come from the fallible
/// constructors of the bundled geometry types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KdTreeError {
    #[error("Expected {expected} coordinates, got {actual}.")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Box minimum is greater than its maximum on axis {axis}.")]
    InvalidBounds { axis: usize },

    #[error("Coordinate on axis {axis} is NaN.")]
    NonFiniteCoordinate { axis: usize },
}

pub type Result<T> = std::result::Result<T, KdTreeError>;
