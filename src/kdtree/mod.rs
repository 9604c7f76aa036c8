//! A k-d tree over a borrowed, in-place partitioned slice of items.
//!
//! Build a tree with [`KdTreeBuilder`], then query it with the pruned visitor protocol of
//! [`Node::visit`] or with the ready-made queries built on top of it.

#![warn(missing_docs)]

mod builder;
pub(crate) mod constants;
mod node;
mod query;
mod select;
mod traversal;

pub use builder::{BuildOptions, KdTreeBuilder};
pub use constants::{DEFAULT_MAX_PER_LEAF, DEFAULT_MAX_SUBDIVISIONS};
pub use node::{Body, Leaves, Node};
