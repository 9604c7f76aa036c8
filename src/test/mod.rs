//! Shared fixtures for the test suites.

mod integration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::Point;

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A point drawn uniformly from `[-half_side, half_side)` on every axis.
pub(crate) fn random_point<const N: usize>(rng: &mut StdRng, half_side: f64) -> Point<f64, N> {
    let mut coords = [0.0; N];
    for c in coords.iter_mut() {
        *c = rng.gen_range(-half_side..half_side);
    }
    Point::new(coords)
}

pub(crate) fn random_points<const N: usize>(
    rng: &mut StdRng,
    count: usize,
    half_side: f64,
) -> Vec<Point<f64, N>> {
    (0..count).map(|_| random_point(rng, half_side)).collect()
}

/// Exhaustive nearest neighbor, the oracle for tree searches.
pub(crate) fn brute_force_nearest<'a, const N: usize>(
    points: &'a [Point<f64, N>],
    query: &Point<f64, N>,
) -> Option<(&'a Point<f64, N>, f64)> {
    let mut best: Option<(&Point<f64, N>, f64)> = None;
    for point in points {
        let dist = point.squared_distance(query);
        if best.map_or(true, |(_, best_dist)| dist < best_dist) {
            best = Some((point, dist));
        }
    }
    best
}
