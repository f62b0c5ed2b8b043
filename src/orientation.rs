use std::cmp::Ordering;

use crate::data::{Point, Vector};
use crate::WideScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you look along `u` and then
  /// along `v`, both taken from a common origin.
  ///
  /// Only the sign of the cross product `u.x*v.y - u.y*v.x` is inspected, and that sign
  /// is exact: floating-point values go through an adaptive-precision predicate rather
  /// than a rounded product.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use graham_hull::data::Vector;
  /// # use graham_hull::Orientation;
  /// let east = Vector([1, 0]);
  /// assert!(Orientation::new(&east, &Vector([3, 1])).is_ccw());
  /// assert!(Orientation::new(&east, &Vector([3, -1])).is_cw());
  /// assert!(Orientation::new(&east, &Vector([-7, 0])).is_colinear());
  /// ```
  pub fn new<T>(u: &Vector<T>, v: &Vector<T>) -> Orientation
  where
    T: WideScalar,
  {
    Orientation::from_slope(T::cmp_slope(&[T::zero(); 2], &u.0, &v.0))
  }

  fn from_slope(ord: Ordering) -> Orientation {
    match ord {
      Ordering::Less => ClockWise,
      Ordering::Equal => CoLinear,
      Ordering::Greater => CounterClockWise,
    }
  }

  /// Direction of the turn `p1 -> p2 -> p3`.
  ///
  /// ```rust
  /// # use graham_hull::data::{Point, PointId};
  /// # use graham_hull::Orientation;
  /// let [a, b, c, d] = [[0, 0], [0, 1], [0, 2], [-1, 2]].map(|xy| Point::new(xy, PointId(0)));
  /// assert!(Orientation::of_points(&a, &b, &c).is_colinear());
  /// assert!(Orientation::of_points(&a, &b, &d).is_ccw());
  /// ```
  pub fn of_points<T>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Orientation
  where
    T: WideScalar,
  {
    Orientation::from_slope(T::cmp_slope(&p1.array, &p2.array, &p3.array))
  }

  /// Angular order of two vectors that share the half-plane `y > 0 || (y == 0 && x > 0)`.
  ///
  /// `u` is less than `v` iff turning from `u` to `v` is counter-clockwise. Vectors
  /// on the same ray compare equal.
  pub fn ccw_cmp<T>(u: &Vector<T>, v: &Vector<T>) -> Ordering
  where
    T: WideScalar,
  {
    match Orientation::new(u, v) {
      CounterClockWise => Ordering::Less,
      ClockWise => Ordering::Greater,
      CoLinear => Ordering::Equal,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}
