use claims::debug_assert_ok;
use tracing::{debug, instrument, trace};

use super::prepare::{prepare_with_min, Prepared, MIN_POINTS};
use crate::data::{Hull, Point, PointId, Traversal};
use crate::validate::check_strictly_convex;
use crate::{Error, HullScalar, Orientation, WideScalar};

// https://en.wikipedia.org/wiki/Graham_scan

/// Settings for a Graham scan.
///
/// ```rust
/// # use graham_hull::GrahamScan;
/// # use graham_hull::data::{Point, Traversal};
/// let pts = Point::from_coords([[0, 0], [0, 2], [2, 2], [2, 0]]);
/// let hull = GrahamScan::new()
///   .traversal(Traversal::ClockWise)
///   .run(&pts)
///   .unwrap();
/// assert_eq!(hull.as_usizes(), vec![1, 2, 3, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrahamScan {
  traversal: Traversal,
  min_points: usize,
}

impl Default for GrahamScan {
  fn default() -> Self {
    GrahamScan {
      traversal: Traversal::default(),
      min_points: MIN_POINTS,
    }
  }
}

impl GrahamScan {
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn traversal(mut self, traversal: Traversal) -> Self {
    self.traversal = traversal;
    self
  }

  /// Smallest accepted input. Values below three are raised to three.
  #[must_use]
  pub fn min_points(mut self, min_points: usize) -> Self {
    self.min_points = min_points.max(3);
    self
  }

  pub fn get_traversal(&self) -> Traversal {
    self.traversal
  }

  pub fn get_min_points(&self) -> usize {
    self.min_points
  }

  /// See [`prepare_and_sort`](super::prepare_and_sort).
  pub fn prepare<T>(&self, pts: &[Point<T>]) -> Result<Prepared<T>, Error>
  where
    T: HullScalar,
  {
    prepare_with_min(pts, self.min_points)
  }

  /// See [`scan_hull`].
  pub fn scan<T>(&self, prepared: &Prepared<T>) -> Result<Hull, Error>
  where
    T: HullScalar,
  {
    scan(
      &prepared.points,
      prepared.pivot.id,
      self.traversal,
      self.min_points - 1,
    )
  }

  /// $O(n \log n)$ Convex hull of `pts`.
  #[instrument(level = "debug", skip_all, fields(n = pts.len(), traversal = ?self.traversal))]
  pub fn run<T>(&self, pts: &[Point<T>]) -> Result<Hull, Error>
  where
    T: HullScalar,
  {
    let prepared = self.prepare(pts)?;
    let hull = self.scan(&prepared)?;
    debug_assert_ok!(hull.validate(pts));
    Ok(hull)
  }
}

/// $O(n \log n)$ Convex hull of a set of identified points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. The hull starts at the pivot (the lowest, then
/// leftmost point) and runs counter-clockwise.
///
/// # Errors
/// * [`Error::EmptyInput`] if `pts` is empty.
/// * [`Error::InsufficientPoints`] if `pts` has fewer than four points.
/// * [`Error::HullDegenerate`] if all points lie on one line.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * Points inside the hull or in the middle of a hull edge are not vertices.
/// * All vertices are from the input set, none repeated.
///
/// # Examples
///
/// ```rust
/// # use graham_hull::convex_hull;
/// # use graham_hull::data::Point;
/// # use graham_hull::Error;
/// let colinear = Point::from_coords([[0, 0], [1, 1], [2, 2], [3, 3]]);
/// assert_eq!(convex_hull(&colinear).err(), Some(Error::HullDegenerate));
///
/// let triangle = Point::from_coords([[0, 0], [4, 0], [2, 0], [2, 4]]);
/// assert_eq!(convex_hull(&triangle).unwrap().as_usizes(), vec![0, 1, 3]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<T>(pts: &[Point<T>]) -> Result<Hull, Error>
where
  T: HullScalar,
{
  GrahamScan::default().run(pts)
}

/// $O(n)$ Scan points sorted by [`prepare_and_sort`](super::prepare_and_sort).
///
/// `points` are pivot offsets in angular order, without the pivot itself.
///
/// # Errors
/// * [`Error::InsufficientPoints`] if fewer than three points are given.
/// * [`Error::HullDegenerate`] if the stack runs dry or fewer than three vertices
///   remain, which happens when every point is colinear with the pivot.
pub fn scan_hull<T>(points: &[Point<T::Wide>], pivot: &Point<T>) -> Result<Hull, Error>
where
  T: HullScalar,
{
  scan(points, pivot.id, Traversal::default(), MIN_POINTS - 1)
}

fn scan<W>(
  points: &[Point<W>],
  pivot: PointId,
  traversal: Traversal,
  min_points: usize,
) -> Result<Hull, Error>
where
  W: WideScalar,
{
  if points.len() < min_points {
    return Err(Error::InsufficientPoints {
      expected: min_points,
      actual: points.len(),
    });
  }
  let anchor = Point::origin(pivot);
  let (first, rest) = points.split_first().ok_or(Error::HullDegenerate)?;

  let mut stack: Vec<&Point<W>> = Vec::with_capacity(points.len() + 1);
  stack.push(&anchor);
  stack.push(first);
  let mut pops = 0usize;
  for next in rest {
    loop {
      let top1 = stack.pop().ok_or(Error::HullDegenerate)?;
      let top2 = *stack.last().ok_or(Error::HullDegenerate)?;
      let turn = Orientation::of_points(top2, top1, next);
      if turn.is_ccw() {
        stack.push(top1);
        break;
      }
      pops += 1;
      trace!(dropped = %top1.id, next = %next.id, ?turn, "pop");
      // The stack starts as pivot plus one point instead of pivot plus two. Points
      // sharing the first ray arrive nearest first, so a colinear turn with only the
      // pivot left means `next` is farther out on that ray and replaces `top1`.
      // Seeding with two points would keep a nearer point of that ray as a vertex.
      if turn.is_colinear() && stack.len() == 1 {
        break;
      }
    }
    stack.push(next);
  }

  if stack.len() < 3 {
    debug!(remaining = stack.len(), "all points colinear with the pivot");
    return Err(Error::HullDegenerate);
  }
  debug_assert_ok!(check_strictly_convex(&stack, Traversal::CounterClockWise));
  debug!(vertices = stack.len(), pops, "scan finished");

  let mut ids: Vec<PointId> = stack.iter().map(|pt| pt.id).collect();
  if traversal == Traversal::ClockWise {
    ids.reverse();
  }
  Ok(Hull::new_unchecked(ids, traversal))
}
