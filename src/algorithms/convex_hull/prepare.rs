use std::cmp::Ordering;
use tracing::debug;

use crate::data::Point;
use crate::{Error, HullScalar, Orientation, WideScalar};

/// Smallest input size accepted by [`prepare_and_sort`].
pub const MIN_POINTS: usize = 4;

/// Points ready for the scan.
#[derive(Debug, Clone, PartialEq)]
pub struct Prepared<T: HullScalar> {
  /// The selected pivot in input coordinates.
  pub pivot: Point<T>,
  /// Every other point as an offset from the pivot, sorted by angle.
  pub points: Vec<Point<T::Wide>>,
}

/// $O(n)$ The point with the smallest y coordinate, ties broken by the smallest x.
///
/// If several points share the minimum, the first one in input order wins.
///
/// # Errors
/// Returns [`Error::EmptyInput`] if `pts` is empty.
pub fn select_pivot<T>(pts: &[Point<T>]) -> Result<&Point<T>, Error>
where
  T: HullScalar,
{
  pivot_index(pts)
    .map(|idx| &pts[idx])
    .ok_or(Error::EmptyInput)
}

fn pivot_index<T>(pts: &[Point<T>]) -> Option<usize>
where
  T: HullScalar,
{
  let mut best: Option<usize> = None;
  for (idx, pt) in pts.iter().enumerate() {
    match best {
      Some(b) if !is_lower(pt, &pts[b]) => {}
      _ => best = Some(idx),
    }
  }
  best
}

fn is_lower<T: HullScalar>(a: &Point<T>, b: &Point<T>) -> bool {
  a.y_coord() < b.y_coord() || (a.y_coord() == b.y_coord() && a.x_coord() < b.x_coord())
}

/// $O(n)$ Every point translated so that `pivot` becomes the origin.
///
/// The pivot itself is included and maps to `(0,0)`. Ids and order are kept.
pub fn center_on_pivot<T>(pts: &[Point<T>], pivot: &Point<T>) -> Vec<Point<T::Wide>>
where
  T: HullScalar,
{
  pts.iter().map(|pt| pt.offset_from(pivot)).collect()
}

/// $O(n \log n)$ Sort pivot offsets counter-clockwise around the origin.
///
/// Points on the same ray are ordered by increasing distance from the origin and
/// coincident points by id. Offsets of points that coincide with the pivot sort
/// first.
pub fn sort_by_angle<W>(pts: &mut [Point<W>])
where
  W: WideScalar,
{
  pts.sort_unstable_by(|a, b| cmp_around_origin(a, b));
}

fn cmp_around_origin<W: WideScalar>(a: &Point<W>, b: &Point<W>) -> Ordering {
  let (u, v) = (a.as_vec(), b.as_vec());
  Orientation::ccw_cmp(&u, &v)
    .then_with(|| u.cmp_magnitude(&v))
    .then_with(|| a.id.cmp(&b.id))
}

/// $O(n \log n)$ Select the pivot, center on it, and sort the remaining points by angle.
///
/// The input is not modified.
///
/// # Errors
/// * [`Error::EmptyInput`] if `pts` is empty.
/// * [`Error::InsufficientPoints`] if `pts` has fewer than four points.
/// * [`Error::NonFiniteCoordinate`] if a floating-point coordinate is NaN or infinite.
///
/// # Examples
///
/// ```rust
/// # use graham_hull::algorithms::convex_hull::prepare_and_sort;
/// # use graham_hull::data::{Point, PointId};
/// let pts = Point::from_coords([[2, 2], [0, 2], [1, 0], [3, 0]]);
/// let prepared = prepare_and_sort(&pts).unwrap();
/// assert_eq!(prepared.pivot.id, PointId(2));
/// let order: Vec<usize> = prepared.points.iter().map(|pt| pt.id.usize()).collect();
/// assert_eq!(order, vec![3, 0, 1]);
/// ```
pub fn prepare_and_sort<T>(pts: &[Point<T>]) -> Result<Prepared<T>, Error>
where
  T: HullScalar,
{
  prepare_with_min(pts, MIN_POINTS)
}

pub(crate) fn prepare_with_min<T>(pts: &[Point<T>], min_points: usize) -> Result<Prepared<T>, Error>
where
  T: HullScalar,
{
  if pts.is_empty() {
    return Err(Error::EmptyInput);
  }
  if pts.len() < min_points {
    return Err(Error::InsufficientPoints {
      expected: min_points,
      actual: pts.len(),
    });
  }
  if let Some(bad) = pts.iter().find(|pt| !pt.is_finite()) {
    return Err(Error::NonFiniteCoordinate { id: bad.id });
  }
  let pivot_idx = pivot_index(pts).ok_or(Error::EmptyInput)?;
  let pivot = pts[pivot_idx];
  debug!(pivot = %pivot.id, x = ?pivot.x_coord(), y = ?pivot.y_coord(), "selected pivot");

  let mut points = center_on_pivot(pts, &pivot);
  points.swap_remove(pivot_idx);
  sort_by_angle(&mut points);
  Ok(Prepared { pivot, points })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::PointId;
  use crate::testing::*;

  use claims::{assert_err_eq, assert_ok};
  use proptest::prelude::*;

  fn ids<W>(pts: &[Point<W>]) -> Vec<usize> {
    pts.iter().map(|pt| pt.id.usize()).collect()
  }

  #[test]
  fn pivot_lowest_then_leftmost() {
    let pts = Point::from_coords([[3, 1], [5, 0], [2, 0], [2, 4]]);
    assert_eq!(assert_ok!(select_pivot(&pts)).id, PointId(2));
  }

  #[test]
  fn pivot_first_of_duplicates() {
    let pts = Point::from_coords([[1, 1], [0, 0], [0, 0], [0, 0]]);
    assert_eq!(assert_ok!(select_pivot(&pts)).id, PointId(1));
  }

  #[test]
  fn pivot_of_nothing() {
    let pts: Vec<Point<i32>> = vec![];
    assert_err_eq!(select_pivot(&pts), Error::EmptyInput);
  }

  #[test]
  fn center_includes_pivot() {
    let pts = Point::from_coords([[4_i16, 7], [1, 2], [-3, 9]]);
    let centered = center_on_pivot(&pts, &pts[1]);
    assert_eq!(centered[1], Point::origin(PointId(1)));
    assert_eq!(centered[0].array, [3_i64, 5]);
    assert_eq!(centered[2].array, [-4_i64, 7]);
    assert_eq!(ids(&centered), vec![0, 1, 2]);
  }

  #[test]
  fn sort_colinear_by_distance() {
    let mut pts = Point::from_coords([[3, 3], [0, 5], [1, 1], [4, 0], [2, 2], [2, 0]]);
    sort_by_angle(&mut pts);
    assert_eq!(ids(&pts), vec![5, 3, 2, 4, 0, 1]);
  }

  #[test]
  fn sort_pivot_duplicates_first() {
    let mut pts = Point::from_coords([[1, 1], [0, 0], [-1, 1], [0, 0]]);
    sort_by_angle(&mut pts);
    assert_eq!(ids(&pts), vec![1, 3, 0, 2]);
  }

  #[test]
  fn prepare_rejects_small_sets() {
    assert_err_eq!(prepare_and_sort::<i32>(&[]), Error::EmptyInput);
    let pts = Point::from_coords([[0, 0], [1, 0], [0, 1]]);
    assert_err_eq!(
      prepare_and_sort(&pts),
      Error::InsufficientPoints {
        expected: 4,
        actual: 3
      }
    );
  }

  #[test]
  fn prepare_rejects_nan() {
    let pts = Point::from_coords([[0.0, 0.0], [1.0, 0.0], [f64::NAN, 1.0], [0.0, 1.0]]);
    assert_err_eq!(
      prepare_and_sort(&pts),
      Error::NonFiniteCoordinate { id: PointId(2) }
    );
  }

  #[test]
  fn prepare_leaves_input_alone() {
    let pts = Point::from_coords([[5, 5], [0, 0], [5, 0], [0, 5]]);
    let before = pts.clone();
    let prepared = assert_ok!(prepare_and_sort(&pts));
    assert_eq!(pts, before);
    assert_eq!(prepared.pivot, pts[1]);
    assert_eq!(ids(&prepared.points), vec![2, 0, 3]);
  }

  proptest! {
    #[test]
    fn prepared_is_sorted(pts in any_points::<i32>(4..64)) {
      let prepared = prepare_and_sort(&pts).unwrap();
      prop_assert_eq!(prepared.points.len(), pts.len() - 1);
      prop_assert!(prepared.points.iter().all(|pt| pt.id != prepared.pivot.id));
      for pair in prepared.points.windows(2) {
        prop_assert_ne!(cmp_around_origin(&pair[0], &pair[1]), Ordering::Greater);
      }
    }

    #[test]
    fn near_line_sort_is_total(pts in near_line_points(4..64)) {
      let prepared = prepare_and_sort(&pts).unwrap();
      for pair in prepared.points.windows(2) {
        prop_assert_eq!(cmp_around_origin(&pair[0], &pair[1]), Ordering::Less);
      }
      for pt in prepared.points.iter() {
        let [x, y] = pt.array;
        prop_assert!(y > 0.0 || (y == 0.0 && x >= 0.0));
      }
    }

    #[test]
    fn offsets_in_upper_half_plane(pts in grid_points(4..64)) {
      let prepared = prepare_and_sort(&pts).unwrap();
      for pt in prepared.points.iter() {
        let [x, y] = pt.array;
        prop_assert!(y > 0 || (y == 0 && x >= 0));
      }
    }
  }
}
