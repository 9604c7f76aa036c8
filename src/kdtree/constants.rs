/// The default maximum number of items held by a leaf.
pub const DEFAULT_MAX_PER_LEAF: usize = 8;

/// The default maximum number of times the item slice is split.
pub const DEFAULT_MAX_SUBDIVISIONS: usize = 16;

/// Below this many items, parallel construction recurses on the current thread.
#[cfg(feature = "rayon")]
pub(crate) const PARALLEL_BUILD_THRESHOLD: usize = 4096;
