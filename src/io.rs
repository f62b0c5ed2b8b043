//! Plain-text point sets.
//!
//! The first line holds the number of points. Each following line holds one point
//! as `x,y`. Blank lines are ignored. Points are numbered in file order starting
//! at zero.
//!
//! Coordinates are parsed straight into the target type. Reading into an integer type
//! therefore rejects fractional text such as `1.5` with [`ParseError::InvalidNumber`]
//! instead of truncating it; read as `f64` to accept such files.
//!
//! ```text
//! 4
//! 0,0
//! 0,2
//! 2,2
//! 2,0
//! ```
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::algorithms::convex_hull::prepare::MIN_POINTS;
use crate::data::{Point, PointId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
  #[error("Cannot read point set: {0}")]
  Io(String),
  #[error("Missing point count on the first line")]
  MissingHeader,
  #[error("Line {line}: invalid point count {text:?}")]
  InvalidCount { line: usize, text: String },
  #[error("Line {line}: expected `x,y`")]
  MissingComma { line: usize },
  #[error("Line {line}: invalid number {text:?}")]
  InvalidNumber { line: usize, text: String },
  #[error("Header declares {declared} points but {actual} were found")]
  CountMismatch { declared: usize, actual: usize },
  #[error("Header declares {declared} points, at least four are required")]
  TooFewPoints { declared: usize },
}

impl From<std::io::Error> for ParseError {
  fn from(err: std::io::Error) -> Self {
    ParseError::Io(err.to_string())
  }
}

/// Parse a point set from its text form.
///
/// # Errors
/// Fails if the header is missing or below four, if any line is not a pair of
/// numbers of type `T`, or if the number of points differs from the header.
///
/// ```rust
/// # use graham_hull::io::parse_points;
/// # use graham_hull::data::Point;
/// let pts = parse_points::<i32>("4\n0,0\n0,2\n2,2\n2,0\n").unwrap();
/// assert_eq!(pts, Point::from_coords([[0, 0], [0, 2], [2, 2], [2, 0]]));
/// ```
pub fn parse_points<T>(text: &str) -> Result<Vec<Point<T>>, ParseError>
where
  T: FromStr,
{
  let mut lines = text
    .lines()
    .enumerate()
    .map(|(idx, line)| (idx + 1, line.trim()))
    .filter(|(_, line)| !line.is_empty());

  let (line, header) = lines.next().ok_or(ParseError::MissingHeader)?;
  let declared: usize = header.parse().map_err(|_| ParseError::InvalidCount {
    line,
    text: header.to_owned(),
  })?;
  if declared < MIN_POINTS {
    return Err(ParseError::TooFewPoints { declared });
  }

  let mut points = Vec::with_capacity(declared);
  for (line, body) in lines {
    let (x, y) = body
      .split_once(',')
      .ok_or(ParseError::MissingComma { line })?;
    let array = [parse_number(x, line)?, parse_number(y, line)?];
    points.push(Point::new(array, PointId(points.len())));
  }

  if points.len() != declared {
    return Err(ParseError::CountMismatch {
      declared,
      actual: points.len(),
    });
  }
  Ok(points)
}

fn parse_number<T: FromStr>(text: &str, line: usize) -> Result<T, ParseError> {
  let text = text.trim();
  text.parse().map_err(|_| ParseError::InvalidNumber {
    line,
    text: text.to_owned(),
  })
}

/// Read and parse a point set file. See [`parse_points`].
pub fn read_points<T, P>(path: P) -> Result<Vec<Point<T>>, ParseError>
where
  T: FromStr,
  P: AsRef<Path>,
{
  let path = path.as_ref();
  let text = fs::read_to_string(path)?;
  let points = parse_points(&text)?;
  debug!(path = %path.display(), n = points.len(), "read point set");
  Ok(points)
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_err_eq, assert_ok};

  #[test]
  fn floats_and_spaces() {
    let pts = assert_ok!(parse_points::<f64>("4\n 0.5, -1\n\n2,3e1\n-0.25 ,0\n1,1\n\n"));
    assert_eq!(pts[0].array, [0.5, -1.0]);
    assert_eq!(pts[1].array, [2.0, 30.0]);
    assert_eq!(pts[3].id, PointId(3));
  }

  #[test]
  fn empty_text() {
    assert_err_eq!(parse_points::<i32>(""), ParseError::MissingHeader);
    assert_err_eq!(parse_points::<i32>("\n  \n"), ParseError::MissingHeader);
  }

  #[test]
  fn bad_header() {
    assert_err_eq!(
      parse_points::<i32>("four\n0,0"),
      ParseError::InvalidCount {
        line: 1,
        text: "four".to_owned()
      }
    );
    assert_err_eq!(
      parse_points::<i32>("3\n0,0\n1,0\n0,1"),
      ParseError::TooFewPoints { declared: 3 }
    );
  }

  #[test]
  fn bad_lines() {
    assert_err_eq!(
      parse_points::<i32>("4\n0,0\n1 0\n"),
      ParseError::MissingComma { line: 3 }
    );
    assert_err_eq!(
      parse_points::<i32>("4\n0,0\n1.5,0\n"),
      ParseError::InvalidNumber {
        line: 3,
        text: "1.5".to_owned()
      }
    );
    assert_err_eq!(
      parse_points::<i8>("4\n0,300\n"),
      ParseError::InvalidNumber {
        line: 2,
        text: "300".to_owned()
      }
    );
  }

  #[test]
  fn count_mismatch() {
    assert_err_eq!(
      parse_points::<i32>("5\n0,0\n1,0\n1,1\n0,1\n"),
      ParseError::CountMismatch {
        declared: 5,
        actual: 4
      }
    );
    assert_err_eq!(
      parse_points::<i32>("4\n0,0\n1,0\n1,1\n0,1\n2,2\n"),
      ParseError::CountMismatch {
        declared: 4,
        actual: 5
      }
    );
  }

  #[test]
  fn missing_file() {
    let dir = assert_ok!(tempfile::tempdir());
    let err = read_points::<i32, _>(dir.path().join("nope.in")).unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
  }
}
