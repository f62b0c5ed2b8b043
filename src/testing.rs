// This module contains strategies for:
//  * single points
//  * point sets with ids numbered by position
//  * point sets on a small grid, full of duplicates and colinear triples
//  * float point sets hugging a line far from the origin
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Point, PointId};

use core::ops::Range;
use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;

/// A single point with id zero.
pub fn any_point<T>() -> impl Strategy<Value = Point<T>>
where
  T: Arbitrary + Copy,
{
  any::<[T; 2]>().prop_map(|array| Point::new(array, PointId(0)))
}

/// Point sets of the given size range with ids `0..n`.
pub fn any_points<T>(size: Range<usize>) -> impl Strategy<Value = Vec<Point<T>>>
where
  T: Arbitrary + Copy,
{
  vec(any::<[T; 2]>(), size).prop_map(Point::from_coords)
}

/// Point sets with coordinates in `-4..=4`.
pub fn grid_points(size: Range<usize>) -> impl Strategy<Value = Vec<Point<i32>>> {
  vec(prop::array::uniform2(-4i32..=4), size).prop_map(Point::from_coords)
}

/// Point sets with float coordinates in `-1e6..1e6`.
pub fn float_points(size: Range<usize>) -> impl Strategy<Value = Vec<Point<f64>>> {
  vec(prop::array::uniform2(-1.0e6..1.0e6), size).prop_map(Point::from_coords)
}

/// Float point sets within a few ulps of `y = 0.1x + 12345.678`, `x` in `0..1e6`.
///
/// Rounded cross products of such points disagree with each other.
pub fn near_line_points(size: Range<usize>) -> impl Strategy<Value = Vec<Point<f64>>> {
  vec((0.0..1.0e6, -1.0..1.0), size).prop_map(|samples: Vec<(f64, f64)>| {
    Point::from_coords(
      samples
        .into_iter()
        .map(|(t, noise)| [t, 0.1 * t + 12345.678 + noise * 1.0e-9]),
    )
  })
}
