//! End-to-end checks against an independent spatial index and across scalar types.

use geo_traits::CoordTrait;
use rand::Rng;
use rstar::RTree;

use crate::geometry::{Aabb, BoundingBox, Point};
use crate::kdtree::KdTreeBuilder;
use crate::test::{init_logging, random_point, random_points, rng};

#[test]
fn nearest_agrees_with_rstar() {
    init_logging();

    let mut rng = rng(100);
    let original = random_points::<3>(&mut rng, 5000, 1000.0);
    let rstar_tree = RTree::bulk_load(original.iter().map(|p| *p.coords()).collect());

    let mut points = original.clone();
    let tree = KdTreeBuilder::<Aabb<f64, 3>>::new().build_points(&mut points);

    for _ in 0..200 {
        let query = random_point::<3>(&mut rng, 1100.0);
        let expected = rstar_tree.nearest_neighbor(query.coords()).unwrap();
        let (found, _) = tree.nearest_point(&query, |p| *p).unwrap();
        assert_eq!(found.coords(), expected);
    }
}

#[test]
fn box_search_agrees_with_rstar() {
    let mut rng = rng(101);
    let original = random_points::<2>(&mut rng, 5000, 1000.0);
    let rstar_tree = RTree::bulk_load(original.iter().map(|p| *p.coords()).collect());

    let mut points = original.clone();
    let tree = KdTreeBuilder::<Aabb<f64, 2>>::new()
        .max_per_leaf(16)
        .build_points(&mut points);

    for _ in 0..50 {
        let query = Aabb::from_corners(
            random_point::<2>(&mut rng, 1000.0),
            random_point::<2>(&mut rng, 1000.0),
        );
        let envelope =
            rstar::AABB::from_corners(*query.min().coords(), *query.max().coords());

        let mut expected: Vec<[f64; 2]> = rstar_tree
            .locate_in_envelope(&envelope)
            .copied()
            .collect();
        let mut found: Vec<[f64; 2]> = tree
            .points_in_box(&query, |p| *p)
            .into_iter()
            .map(|p| *p.coords())
            .collect();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        found.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(found, expected);
    }
}

#[test]
fn single_precision_points() {
    let mut rng = rng(102);
    let mut points: Vec<Point<f32, 3>> = (0..3000)
        .map(|_| {
            Point::new([
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            ])
        })
        .collect();
    let original = points.clone();
    let tree = KdTreeBuilder::<Aabb<f32, 3>>::new().build_points(&mut points);

    let query = Point::new([0.25_f32, -0.5, 0.0]);
    let expected = original
        .iter()
        .map(|p| p.squared_distance(&query))
        .fold(f32::INFINITY, f32::min);
    let (_, dist) = tree.nearest_point(&query, |p| *p).unwrap();
    assert_eq!(dist, expected);
}

#[test]
fn unsigned_grid() {
    let mut points: Vec<Point<u16, 2>> = (0..16u16)
        .flat_map(|x| (0..16u16).map(move |y| Point::new([x * 4, y * 4])))
        .collect();
    let tree = KdTreeBuilder::<Aabb<u16, 2>>::new().build_points(&mut points);

    // Queries left of and below the grid must not underflow
    let (nearest, dist) = tree.nearest_point(&Point::new([0, 0]), |p| *p).unwrap();
    assert_eq!(nearest, &Point::new([0, 0]));
    assert_eq!(dist, 0);

    let (nearest, dist) = tree.nearest_point(&Point::new([9, 59]), |p| *p).unwrap();
    assert_eq!(nearest, &Point::new([8, 60]));
    assert_eq!(dist, 2);

    let query = Aabb::<u16, 2>::try_new([10, 10], [20, 20]).unwrap();
    // x and y each in {12, 16, 20}
    assert_eq!(tree.points_in_box(&query, |p| *p).len(), 9);
}

#[test]
fn root_bounds_through_geo_coords() {
    let mut rng = rng(103);
    let mut points = random_points::<2>(&mut rng, 100, 50.0);
    let tree = KdTreeBuilder::<Aabb<f64, 2>>::new().build_points(&mut points);

    let bounds = tree.bounds();
    assert!(!bounds.is_empty());
    assert!(bounds.min().x() <= bounds.max().x());
    assert!(bounds.min().y() <= bounds.max().y());

    let rebuilt = Aabb::<f64, 2>::try_from_coords(bounds.min(), bounds.max()).unwrap();
    assert_eq!(&rebuilt, bounds);
}

#[test]
fn narrow_integer_nearest() {
    let mut rng = rng(104);
    let original: Vec<Point<i8, 2>> = (0..40)
        .map(|_| Point::new([rng.gen_range(-100..=100), rng.gen_range(-100..=100)]))
        .collect();
    let mut points = original.clone();
    let tree = KdTreeBuilder::<Aabb<i8, 2>>::new().build_points(&mut points);

    for query in [[0, 0], [-128, -128], [127, 127], [127, -128]] {
        let query = Point::new(query);
        let expected = original
            .iter()
            .map(|p| p.squared_distance(&query))
            .min()
            .unwrap();
        let (_, dist) = tree.nearest_point(&query, |p| *p).unwrap();
        assert_eq!(dist, expected);
    }
}

#[test]
fn full_range_i32_nearest() {
    let mut points = vec![
        Point::new([i32::MIN, i32::MIN]),
        Point::new([i32::MAX, i32::MAX]),
        Point::new([0, 0]),
    ];
    let tree = KdTreeBuilder::<Aabb<i32, 2>>::new()
        .max_per_leaf(1)
        .build_points(&mut points);

    let query = Point::new([i32::MAX, i32::MIN]);
    let (nearest, dist) = tree.nearest_point(&query, |p| *p).unwrap();
    assert_eq!(nearest, &Point::new([0, 0]));
    let max = i32::MAX as i128;
    let min = i32::MIN as i128;
    assert_eq!(dist, max * max + min * min);

    let within = tree.within_distance(&query, i128::MAX, |p| p.squared_distance(&query));
    assert_eq!(within.len(), 3);
}
