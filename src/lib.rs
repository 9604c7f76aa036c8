#![doc = include_str!("../README.md")]

mod error;
pub mod geometry;
pub mod kdtree;
mod r#type;

pub use error::{KdTreeError, Result};
pub use r#type::IndexableNum;

#[cfg(test)]
pub(crate) mod test;
