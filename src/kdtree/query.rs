//! Common queries implemented on top of [`Node::visit`].

use std::cell::Cell;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::geometry::{Aabb, BoundingBox, Point};
use crate::kdtree::Node;
use crate::r#type::IndexableNum;

impl<'a, I, B: BoundingBox> Node<'a, I, B> {
    /// Find the item closest to `query`.
    ///
    /// `item_distance` returns the squared distance from an item to `query`; it must never be
    /// smaller than the squared exterior distance from `query` to the item's bounds element, or
    /// the search may prune the true nearest item.
    ///
    /// Returns the item and its squared distance, or `None` if the tree is empty. Ties resolve to
    /// the item visited first.
    pub fn nearest<D>(
        &self,
        query: &B::Point,
        mut item_distance: D,
    ) -> Option<(&I, B::Distance)>
    where
        D: FnMut(&I) -> B::Distance,
    {
        let best_dist: Cell<Option<B::Distance>> = Cell::new(None);
        let mut best = None;

        self.visit(
            |bounds| match best_dist.get() {
                Some(best_dist) => bounds.squared_exterior_distance(query) < best_dist,
                None => true,
            },
            |item| {
                let dist = item_distance(item);
                if best_dist.get().map_or(true, |best_dist| dist < best_dist) {
                    best_dist.set(Some(dist));
                    best = Some(item);
                }
            },
        );

        best.zip(best_dist.get())
    }

    /// Find up to `k` items closest to `query`, sorted by increasing squared distance.
    ///
    /// See [`nearest`][Self::nearest] for the contract of `item_distance`.
    pub fn nearest_k<D>(
        &self,
        query: &B::Point,
        k: usize,
        mut item_distance: D,
    ) -> Vec<(&I, B::Distance)>
    where
        D: FnMut(&I) -> B::Distance,
    {
        if k == 0 {
            return vec![];
        }

        // the k-th best distance, once k candidates have been found
        let cutoff: Cell<Option<B::Distance>> = Cell::new(None);
        let mut heap: BinaryHeap<Candidate<'_, I, B::Distance>> =
            BinaryHeap::with_capacity(k + 1);

        self.visit(
            |bounds| match cutoff.get() {
                Some(cutoff) => bounds.squared_exterior_distance(query) < cutoff,
                None => true,
            },
            |item| {
                let dist = item_distance(item);
                if cutoff.get().is_some_and(|cutoff| !(dist < cutoff)) {
                    return;
                }
                heap.push(Candidate { dist, item });
                if heap.len() > k {
                    heap.pop();
                }
                if heap.len() == k {
                    cutoff.set(heap.peek().map(|c| c.dist));
                }
            },
        );

        heap.into_sorted_vec()
            .into_iter()
            .map(|c| (c.item, c.dist))
            .collect()
    }

    /// Collect every item whose squared distance to `query` is at most `max_distance_sq`.
    ///
    /// Items are returned in traversal order. See [`nearest`][Self::nearest] for the contract of
    /// `item_distance`.
    pub fn within_distance<D>(
        &self,
        query: &B::Point,
        max_distance_sq: B::Distance,
        mut item_distance: D,
    ) -> Vec<&I>
    where
        D: FnMut(&I) -> B::Distance,
    {
        let mut result = vec![];
        self.visit(
            |bounds| bounds.squared_exterior_distance(query) <= max_distance_sq,
            |item| {
                if item_distance(item) <= max_distance_sq {
                    result.push(item);
                }
            },
        );
        result
    }

    /// Collect every item accepted by `item_test` from the leaves whose bounds intersect
    /// `query`.
    ///
    /// `item_test` decides the exact match, e.g. point containment or box intersection.
    pub fn search_box<T>(&self, query: &B, mut item_test: T) -> Vec<&I>
    where
        T: FnMut(&I) -> bool,
    {
        let mut result = vec![];
        self.visit(
            |bounds| query.intersects(bounds),
            |item| {
                if item_test(item) {
                    result.push(item);
                }
            },
        );
        result
    }

    /// Count the items accepted by `item_test` from the leaves whose bounds intersect `query`.
    pub fn count_in_box<T>(&self, query: &B, mut item_test: T) -> usize
    where
        T: FnMut(&I) -> bool,
    {
        let mut count = 0;
        self.visit(
            |bounds| query.intersects(bounds),
            |item| {
                if item_test(item) {
                    count += 1;
                }
            },
        );
        count
    }
}

impl<'a, I, T: IndexableNum, const N: usize> Node<'a, I, Aabb<T, N>> {
    /// Find the item closest to `query`, where each item is a point given by `point_of`.
    pub fn nearest_point<F>(
        &self,
        query: &Point<T, N>,
        point_of: F,
    ) -> Option<(&I, T::Distance)>
    where
        F: Fn(&I) -> Point<T, N>,
    {
        self.nearest(query, |item| point_of(item).squared_distance(query))
    }

    /// Collect every item whose point, given by `point_of`, lies inside `query`.
    pub fn points_in_box<F>(&self, query: &Aabb<T, N>, point_of: F) -> Vec<&I>
    where
        F: Fn(&I) -> Point<T, N>,
    {
        self.search_box(query, |item| query.contains(&point_of(item)))
    }
}

/// A candidate of a k-nearest search, ordered by distance.
struct Candidate<'s, I, S> {
    dist: S,
    item: &'s I,
}

impl<I, S: PartialOrd> PartialEq for Candidate<'_, I, S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<I, S: PartialOrd> Eq for Candidate<'_, I, S> {}

impl<I, S: PartialOrd> PartialOrd for Candidate<'_, I, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I, S: PartialOrd> Ord for Candidate<'_, I, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // incomparable (NaN) distances are treated as equal
        self.dist
            .partial_cmp(&other.dist)
            .unwrap_or(Ordering::Equal)
    }
}
