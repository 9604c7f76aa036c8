use std::marker::PhantomData;

use log::{debug, log_enabled, trace, Level};

use crate::geometry::{BoundingBox, Coordinates, Enclose};
use crate::kdtree::constants::{DEFAULT_MAX_PER_LEAF, DEFAULT_MAX_SUBDIVISIONS};
use crate::kdtree::select::select;
use crate::kdtree::Node;

/// Limits applied while subdividing the item slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// A range with at most this many items becomes a leaf.
    pub max_per_leaf: usize,
    /// The maximum number of times a range is split. Once exhausted, a range becomes a leaf no
    /// matter how many items it holds.
    pub max_subdivisions: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_per_leaf: DEFAULT_MAX_PER_LEAF,
            max_subdivisions: DEFAULT_MAX_SUBDIVISIONS,
        }
    }
}

/// A builder to create a k-d tree of [`Node`]s over a mutable slice of items.
///
/// The box type `B` fixes the scalar type and dimensionality of the tree.
///
/// ```
/// use kdvisit::geometry::{Aabb, Point};
/// use kdvisit::kdtree::KdTreeBuilder;
///
/// let mut points = vec![
///     Point::new([0.0, 0.0]),
///     Point::new([1.0, 1.0]),
///     Point::new([2.0, 2.0]),
/// ];
/// let tree = KdTreeBuilder::<Aabb<f64, 2>>::new()
///     .max_per_leaf(1)
///     .build(&mut points, |p| *p, |p| *p);
/// assert_eq!(tree.len(), 3);
/// ```
///
/// Construction reorders the slice in place. It never fails: an empty slice produces a single
/// leaf with an empty bounding box, and the subdivision limit guarantees termination even when
/// every item shares the same coordinates.
#[derive(Debug, Clone, Copy)]
pub struct KdTreeBuilder<B> {
    options: BuildOptions,
    phantom: PhantomData<B>,
}

impl<B: BoundingBox> Default for KdTreeBuilder<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: BoundingBox> KdTreeBuilder<B> {
    /// Create a new builder with the default options.
    pub fn new() -> Self {
        Self::with_options(BuildOptions::default())
    }

    /// Create a new builder with the provided options.
    pub fn with_options(options: BuildOptions) -> Self {
        Self {
            options,
            phantom: PhantomData,
        }
    }

    /// Set the maximum number of items per leaf.
    pub fn max_per_leaf(mut self, max_per_leaf: usize) -> Self {
        self.options.max_per_leaf = max_per_leaf;
        self
    }

    /// Set the maximum subdivision depth.
    pub fn max_subdivisions(mut self, max_subdivisions: usize) -> Self {
        self.options.max_subdivisions = max_subdivisions;
        self
    }

    /// Access the options of this builder.
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build a tree over `items`.
    ///
    /// - `sort_point` projects an item onto the point used to order it along the split axis
    ///   (usually its centroid).
    /// - `bounds_element` projects an item onto the point or box used to grow node bounds.
    pub fn build<'a, I, P, E, SP, BE>(
        &self,
        items: &'a mut [I],
        sort_point: SP,
        bounds_element: BE,
    ) -> Node<'a, I, B>
    where
        B: Enclose<E>,
        P: Coordinates,
        SP: Fn(&I) -> P,
        BE: Fn(&I) -> E,
    {
        let num_items = items.len();
        let node = build_node(
            items,
            &sort_point,
            &bounds_element,
            self.options.max_per_leaf,
            self.options.max_subdivisions,
        );
        log_summary(&node, num_items);
        node
    }

    /// Build a tree over a slice of point-like items, using each item as both its sort point and
    /// its bounds element.
    pub fn build_points<'a, I>(&self, items: &'a mut [I]) -> Node<'a, I, B>
    where
        I: Coordinates + Copy,
        B: Enclose<I>,
    {
        self.build(items, |item| *item, |item| *item)
    }

    /// Build a tree over `items`, constructing the two halves of every large enough split on the
    /// rayon thread pool.
    ///
    /// The result is identical to [`build`][Self::build] for the same input.
    #[cfg(feature = "rayon")]
    pub fn build_par<'a, I, P, E, SP, BE>(
        &self,
        items: &'a mut [I],
        sort_point: SP,
        bounds_element: BE,
    ) -> Node<'a, I, B>
    where
        I: Send,
        B: Enclose<E> + Send,
        P: Coordinates,
        SP: Fn(&I) -> P + Sync,
        BE: Fn(&I) -> E + Sync,
    {
        let num_items = items.len();
        let node = par::build_node_par(
            items,
            &sort_point,
            &bounds_element,
            self.options.max_per_leaf,
            self.options.max_subdivisions,
        );
        log_summary(&node, num_items);
        node
    }
}

/// Compute the minimal box enclosing the bounds element of every item.
pub(crate) fn compute_bounds<I, E, B, BE>(items: &[I], bounds_element: &BE) -> B
where
    B: BoundingBox + Enclose<E>,
    BE: Fn(&I) -> E,
{
    let mut bounds = B::empty();
    for item in items {
        bounds.enclose(&bounds_element(item));
    }
    bounds
}

/// Returns the bounds of `items` and, if the range must be split, the split axis.
fn plan_split<I, E, B, BE>(
    items: &[I],
    bounds_element: &BE,
    max_per_leaf: usize,
    max_subdivisions: usize,
) -> (B, Option<usize>)
where
    B: BoundingBox + Enclose<E>,
    BE: Fn(&I) -> E,
{
    let bounds: B = compute_bounds(items, bounds_element);

    if items.len() <= max_per_leaf {
        return (bounds, None);
    }
    if max_subdivisions == 0 {
        trace!(
            "Subdivision limit reached, leaf holds {} items (max {})",
            items.len(),
            max_per_leaf
        );
        return (bounds, None);
    }

    let axis = bounds.major_axis();
    (bounds, Some(axis))
}

/// Median-partition `items` in place along `axis` and return the split position.
fn partition<I, P, SP>(items: &mut [I], sort_point: &SP, axis: usize) -> usize
where
    P: Coordinates,
    SP: Fn(&I) -> P,
{
    let mid = items.len() / 2;
    select(items, mid, |item| sort_point(item).coord(axis));
    mid
}

fn build_node<'a, I, P, E, B, SP, BE>(
    items: &'a mut [I],
    sort_point: &SP,
    bounds_element: &BE,
    max_per_leaf: usize,
    max_subdivisions: usize,
) -> Node<'a, I, B>
where
    B: BoundingBox + Enclose<E>,
    P: Coordinates,
    SP: Fn(&I) -> P,
    BE: Fn(&I) -> E,
{
    let (bounds, split_axis) = plan_split(items, bounds_element, max_per_leaf, max_subdivisions);
    let Some(axis) = split_axis else {
        return Node::leaf(bounds, items);
    };

    let mid = partition(items, sort_point, axis);
    let (left, right) = items.split_at_mut(mid);
    let left = build_node(
        left,
        sort_point,
        bounds_element,
        max_per_leaf,
        max_subdivisions - 1,
    );
    let right = build_node(
        right,
        sort_point,
        bounds_element,
        max_per_leaf,
        max_subdivisions - 1,
    );
    Node::branch(bounds, left, right)
}

#[cfg(feature = "rayon")]
mod par {
    use super::*;
    use crate::kdtree::constants::PARALLEL_BUILD_THRESHOLD;

    pub(super) fn build_node_par<'a, I, P, E, B, SP, BE>(
        items: &'a mut [I],
        sort_point: &SP,
        bounds_element: &BE,
        max_per_leaf: usize,
        max_subdivisions: usize,
    ) -> Node<'a, I, B>
    where
        I: Send,
        B: BoundingBox + Enclose<E> + Send,
        P: Coordinates,
        SP: Fn(&I) -> P + Sync,
        BE: Fn(&I) -> E + Sync,
    {
        if items.len() < PARALLEL_BUILD_THRESHOLD {
            return build_node(
                items,
                sort_point,
                bounds_element,
                max_per_leaf,
                max_subdivisions,
            );
        }

        let (bounds, split_axis) =
            plan_split(items, bounds_element, max_per_leaf, max_subdivisions);
        let Some(axis) = split_axis else {
            return Node::leaf(bounds, items);
        };

        let mid = partition(items, sort_point, axis);
        let (left, right) = items.split_at_mut(mid);
        let (left, right) = rayon::join(
            || {
                build_node_par(
                    left,
                    sort_point,
                    bounds_element,
                    max_per_leaf,
                    max_subdivisions - 1,
                )
            },
            || {
                build_node_par(
                    right,
                    sort_point,
                    bounds_element,
                    max_per_leaf,
                    max_subdivisions - 1,
                )
            },
        );
        Node::branch(bounds, left, right)
    }
}

fn log_summary<I, B>(node: &Node<'_, I, B>, num_items: usize) {
    if log_enabled!(Level::Debug) {
        debug!(
            "Built k-d tree over {} items: depth {}, {} leaves, {} branches",
            num_items,
            node.depth(),
            node.num_leaves(),
            node.num_branches()
        );
    }
}
