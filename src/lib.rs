// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex hulls of planar point sets by [Graham scan][wiki].
//!
//! Every input [`Point`](data::Point) carries a stable [`PointId`](data::PointId) and the
//! resulting [`Hull`](data::Hull) is the sequence of ids on the hull boundary.
//!
//! ```rust
//! # use graham_hull::data::Point;
//! # use graham_hull::convex_hull;
//! let square = Point::from_coords([[0, 0], [0, 2], [2, 2], [2, 0], [1, 1]]);
//! let hull = convex_hull(&square).unwrap();
//! assert_eq!(hull.as_usizes(), vec![0, 3, 2, 1]);
//! ```
//!
//! [wiki]: https://en.wikipedia.org/wiki/Graham_scan
use num_traits::{NumOps, Zero};
use ordered_float::{NotNan, OrderedFloat};
use std::cmp::Ordering;
use std::fmt::Debug;

pub mod algorithms;
pub mod data;
pub mod io;
mod orientation;
pub mod validate;

#[cfg(test)]
pub mod testing;

pub use orientation::Orientation;

#[doc(inline)]
pub use algorithms::convex_hull::{convex_hull, GrahamScan};

use data::{PointId, Vector};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  #[error("No points supplied")]
  EmptyInput,
  #[error("Insufficient points: expected at least {expected}, got {actual}")]
  InsufficientPoints { expected: usize, actual: usize },
  /// The scan ran out of stack, or every point lies on a single line.
  #[error("Degenerate point set: no convex polygon spans the points")]
  HullDegenerate,
  #[error("Point {id} has a coordinate that is NaN or infinite")]
  NonFiniteCoordinate { id: PointId },
  #[error(transparent)]
  Parse(#[from] io::ParseError),
}

/// Arithmetic used for pivot offsets, turn tests and squared distances.
///
/// Implementations must be wide enough that none of these overflow for any
/// pair of coordinates of the [`HullScalar`] that widens into them.
pub trait WideScalar: Debug + Copy + PartialOrd + Zero + NumOps {
  /// Exact direction of the turn `p -> q -> r`: `Greater` for counter-clockwise,
  /// `Less` for clockwise and `Equal` for colinear.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
}

macro_rules! exact_wide {
  ( $( $ty:ty ),* ) => {
    $(
      impl WideScalar for $ty {
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let u = Vector([q[0] - p[0], q[1] - p[1]]);
          let v = Vector([r[0] - p[0], r[1] - p[1]]);
          u.cross(&v).cmp(&0)
        }
      }
    )*
  };
}

exact_wide!(i32, i64, i128);

impl WideScalar for f64 {
  // Adaptive precision: the sign is that of the exact determinant for finite input.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
    let orient = geometry_predicates::predicates::orient2d(*p, *q, *r);
    if orient > 0.0 {
      Ordering::Greater
    } else if orient < 0.0 {
      Ordering::Less
    } else {
      Ordering::Equal
    }
  }
}

/// Coordinate type of input points.
///
/// Fixed-precision coordinates are promoted to a signed integer wide enough to hold
/// the cross product of two pivot offsets. Floating-point coordinates are promoted to
/// `f64` and compared against zero exactly.
pub trait HullScalar: Debug + Copy + PartialOrd {
  type Wide: WideScalar;

  fn widen(self) -> Self::Wide;

  fn is_finite(&self) -> bool {
    true
  }
}

macro_rules! fixed_precision {
  ( $( $ty:ty => $wide:ty ),* ) => {
    $(
      impl HullScalar for $ty {
        type Wide = $wide;
        fn widen(self) -> $wide {
          <$wide>::from(self)
        }
      }
    )*
  };
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl HullScalar for $ty {
        type Wide = f64;
        fn widen(self) -> f64 {
          f64::from(self)
        }
        fn is_finite(&self) -> bool {
          <$ty>::is_finite(*self)
        }
      }
    )*
  };
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl HullScalar for $ty {
        type Wide = f64;
        fn widen(self) -> f64 {
          f64::from(self.into_inner())
        }
        fn is_finite(&self) -> bool {
          self.into_inner().is_finite()
        }
      }
    )*
  };
}

// Offsets span 2^bits, their differences 2^(bits+1), cross products 2^(2*bits+3).
fixed_precision!(
  i8 => i32,
  u8 => i32,
  i16 => i64,
  u16 => i64,
  i32 => i128,
  u32 => i128
);
floating_precision!(f32, f64);
wrapped_floating_precision!(NotNan<f32>, NotNan<f64>, OrderedFloat<f32>, OrderedFloat<f64>);
