//! Geometry capabilities the k-d tree is generic over, plus a default const-generic
//! implementation.
//!
//! The tree itself only talks to [`BoundingBox`], [`Enclose`] and [`Coordinates`]. [`Point`] and
//! [`Aabb`] are provided for convenience and can be swapped for any other types implementing
//! those traits.

mod aabb;
mod interop;
mod point;
mod r#trait;

pub use aabb::Aabb;
pub use point::Point;
pub use r#trait::{BoundingBox, Coordinates, Enclose};
