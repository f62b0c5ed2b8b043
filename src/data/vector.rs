use std::cmp::Ordering;
use std::ops::Index;

use crate::WideScalar;

/// Displacement between two points, or a point relative to the pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<T>(pub [T; 2]);

impl<T: WideScalar> Vector<T> {
  /// `u.x*v.y - u.y*v.x`
  pub fn cross(&self, rhs: &Vector<T>) -> T {
    let [ux, uy] = self.0;
    let [vx, vy] = rhs.0;
    ux * vy - uy * vx
  }

  pub fn squared_magnitude(&self) -> T {
    let [x, y] = self.0;
    x * x + y * y
  }

  pub fn cmp_magnitude(&self, rhs: &Vector<T>) -> Ordering {
    self
      .squared_magnitude()
      .partial_cmp(&rhs.squared_magnitude())
      .unwrap_or(Ordering::Equal)
  }

  pub fn is_zero(&self) -> bool {
    self.0.iter().all(|c| c.is_zero())
  }
}

impl<T> Index<usize> for Vector<T> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cross_sign() {
    assert_eq!(Vector([1, 0]).cross(&Vector([0, 1])), 1);
    assert_eq!(Vector([0, 1]).cross(&Vector([1, 0])), -1);
    assert_eq!(Vector([2, 2]).cross(&Vector([3, 3])), 0);
  }

  #[test]
  fn cross_wide() {
    let max = i128::from(u32::MAX);
    assert_eq!(
      Vector([max, -max]).cross(&Vector([max, max])),
      2 * max * max
    );
  }

  #[test]
  fn magnitude() {
    assert_eq!(Vector([3, -4]).squared_magnitude(), 25);
    assert_eq!(
      Vector([1.0, 1.0]).cmp_magnitude(&Vector([0.0, 2.0])),
      Ordering::Less
    );
    assert!(Vector([0, 0]).is_zero());
    assert!(!Vector([0, -1]).is_zero());
  }
}
