//! Pruned depth-first traversal of a k-d tree.

use crate::kdtree::{Body, Node};

impl<'a, I, B> Node<'a, I, B> {
    /// Recursively visit every item in this node and its children, provided the bounding box of
    /// each node passes `bounds_test`.
    ///
    /// - `bounds_test` is called with the bounds of every node reached, parents before children.
    ///   Returning `false` skips that node and its entire subtree.
    /// - `visitor` is called once for every item of every accepted leaf, in slice order.
    ///
    /// Branches are visited left then right; no other ordering is made. Nearest-neighbor searches
    /// are expected to shrink their own search radius from within `visitor` and reject boxes
    /// beyond it in `bounds_test`:
    ///
    /// ```
    /// use std::cell::Cell;
    ///
    /// use kdvisit::geometry::{Aabb, BoundingBox, Point};
    /// use kdvisit::kdtree::KdTreeBuilder;
    ///
    /// let mut points: Vec<Point<f64, 2>> = (0..100)
    ///     .map(|i| Point::new([i as f64, (i * 7 % 100) as f64]))
    ///     .collect();
    /// let tree = KdTreeBuilder::<Aabb<f64, 2>>::new().build_points(&mut points);
    ///
    /// let query = Point::new([50.2, 50.9]);
    /// let best = Cell::new(f64::INFINITY);
    /// tree.visit(
    ///     |bounds| bounds.squared_exterior_distance(&query) < best.get(),
    ///     |p| best.set(best.get().min(p.squared_distance(&query))),
    /// );
    /// assert!(best.get() < 100.0);
    /// ```
    pub fn visit<'s, F, V>(&'s self, mut bounds_test: F, mut visitor: V)
    where
        F: FnMut(&B) -> bool,
        V: FnMut(&'s I),
    {
        self.visit_inner(&mut bounds_test, &mut visitor);
    }

    fn visit_inner<'s, F, V>(&'s self, bounds_test: &mut F, visitor: &mut V)
    where
        F: FnMut(&B) -> bool,
        V: FnMut(&'s I),
    {
        if !bounds_test(&self.bounds) {
            return;
        }

        match &self.body {
            Body::Leaf(items) => {
                for item in items.iter() {
                    visitor(item);
                }
            }
            Body::Branch { left, right } => {
                left.visit_inner(bounds_test, visitor);
                right.visit_inner(bounds_test, visitor);
            }
        }
    }

    /// Like [`visit`][Self::visit], but hands out mutable access to each visited item.
    ///
    /// Items stay in place. Changing the values an item's bounds element is derived from makes
    /// the cached bounds of every ancestor stale, so later pruned traversals may skip it.
    pub fn visit_mut<F, V>(&mut self, mut bounds_test: F, mut visitor: V)
    where
        F: FnMut(&B) -> bool,
        V: FnMut(&mut I),
    {
        self.visit_mut_inner(&mut bounds_test, &mut visitor);
    }

    fn visit_mut_inner<F, V>(&mut self, bounds_test: &mut F, visitor: &mut V)
    where
        F: FnMut(&B) -> bool,
        V: FnMut(&mut I),
    {
        if !bounds_test(&self.bounds) {
            return;
        }

        match &mut self.body {
            Body::Leaf(items) => {
                for item in items.iter_mut() {
                    visitor(item);
                }
            }
            Body::Branch { left, right } => {
                left.visit_mut_inner(bounds_test, visitor);
                right.visit_mut_inner(bounds_test, visitor);
            }
        }
    }

    /// A read-only [`visit`][Self::visit] that descends into the two children of every branch in
    /// parallel on the rayon thread pool.
    ///
    /// Both callbacks may run concurrently, so they are `Fn + Sync` and any state they share must
    /// be synchronized. The order of calls is unspecified.
    #[cfg(feature = "rayon")]
    pub fn par_visit<F, V>(&self, bounds_test: F, visitor: V)
    where
        I: Sync,
        B: Sync,
        F: Fn(&B) -> bool + Sync,
        V: Fn(&I) + Sync,
    {
        self.par_visit_inner(&bounds_test, &visitor);
    }

    #[cfg(feature = "rayon")]
    fn par_visit_inner<F, V>(&self, bounds_test: &F, visitor: &V)
    where
        I: Sync,
        B: Sync,
        F: Fn(&B) -> bool + Sync,
        V: Fn(&I) + Sync,
    {
        if !bounds_test(&self.bounds) {
            return;
        }

        match &self.body {
            Body::Leaf(items) => items.iter().for_each(visitor),
            Body::Branch { left, right } => {
                rayon::join(
                    || left.par_visit_inner(bounds_test, visitor),
                    || right.par_visit_inner(bounds_test, visitor),
                );
            }
        }
    }
}
