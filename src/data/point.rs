use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;
use std::ops::Deref;
use std::ops::Index;

use super::Vector;
use crate::{HullScalar, WideScalar};

/// Stable identifier of a point: its position in the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub usize);

impl PointId {
  pub fn usize(self) -> usize {
    self.0
  }
}

impl From<usize> for PointId {
  fn from(id: usize) -> PointId {
    PointId(id)
  }
}

impl fmt::Display for PointId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<T> {
  pub array: [T; 2],
  pub id: PointId,
}

// Methods on points of any coordinate type.
impl<T> Point<T> {
  pub const fn new(array: [T; 2], id: PointId) -> Point<T> {
    Point { array, id }
  }

  /// Points numbered by their position in `coords`.
  ///
  /// ```rust
  /// # use graham_hull::data::{Point, PointId};
  /// let pts = Point::from_coords([[1, 2], [3, 4]]);
  /// assert_eq!(pts[1].id, PointId(1));
  /// assert_eq!(*pts[1].y_coord(), 4);
  /// ```
  pub fn from_coords<I>(coords: I) -> Vec<Point<T>>
  where
    I: IntoIterator<Item = [T; 2]>,
  {
    coords
      .into_iter()
      .enumerate()
      .map(|(idx, array)| Point::new(array, PointId(idx)))
      .collect()
  }

  /// `n` uniformly sampled points with ids `0..n`.
  pub fn random_set<R>(n: usize, rng: &mut R) -> Vec<Point<T>>
  where
    R: Rng + ?Sized,
    Standard: Distribution<T>,
  {
    Point::from_coords((0..n).map(|_| [rng.gen(), rng.gen()]))
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: [f(self.array[0].clone()), f(self.array[1].clone())],
      id: self.id,
    }
  }
}

impl<T: HullScalar> Point<T> {
  pub fn widen(&self) -> Point<T::Wide> {
    self.cast(T::widen)
  }

  /// Translate into the frame where `origin` sits at `(0,0)`. The id is kept.
  pub fn offset_from(&self, origin: &Point<T>) -> Point<T::Wide> {
    let [x, y] = self.array;
    let [ox, oy] = origin.array;
    Point::new([x.widen() - ox.widen(), y.widen() - oy.widen()], self.id)
  }

  pub fn is_finite(&self) -> bool {
    self.array.iter().all(HullScalar::is_finite)
  }
}

impl<T: WideScalar> Point<T> {
  pub fn origin(id: PointId) -> Point<T> {
    Point::new([T::zero(), T::zero()], id)
  }

  pub fn as_vec(&self) -> Vector<T> {
    Vector(self.array)
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}
