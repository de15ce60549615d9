//! Reading points from text.
//!
//! The format is a whitespace-separated token stream: a point count `n`
//! followed by `n` pairs of coordinates. Line breaks carry no meaning beyond
//! error reporting.
//!
//! ```text
//! 3
//! 0.5 0.5
//! 0.25 0.25
//! 0.75 0.75
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::{KdError, Point2D, PointIndex, ReadError};

/// Parses a count followed by that many coordinate pairs.
///
/// Tokens after the last declared pair are ignored.
///
/// # Errors
/// [`ReadError::MissingCount`] on empty input, [`ReadError::InvalidNumber`]
/// for a token that does not parse, [`ReadError::NonFinite`] for NaN or
/// infinite coordinates, [`ReadError::Truncated`] when the input ends early,
/// and [`ReadError::Io`] if reading fails.
///
/// # Example
/// ```
/// use kdtree2d::{input, Point2D};
/// let points = input::read_points("2\n0.1 0.2\n0.3 0.4\n".as_bytes()).unwrap();
/// assert_eq!(points, vec![Point2D::new(0.1, 0.2), Point2D::new(0.3, 0.4)]);
/// ```
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point2D>, ReadError> {
    let mut tokens = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        tokens.extend(line.split_whitespace().map(|token| (index + 1, token.to_owned())));
    }
    let mut tokens = tokens.into_iter();

    let (line, count_token) = tokens.next().ok_or(ReadError::MissingCount)?;
    let expected: usize = count_token
        .parse()
        .map_err(|_| ReadError::InvalidNumber { token: count_token.clone(), line })?;

    let mut points = Vec::with_capacity(expected.min(tokens.len() / 2));
    while points.len() < expected {
        let (Some(x), Some(y)) = (tokens.next(), tokens.next()) else {
            return Err(ReadError::Truncated { expected, found: points.len() });
        };
        points.push(Point2D::new(parse_coordinate(x)?, parse_coordinate(y)?));
    }

    let trailing = tokens.len();
    if trailing > 0 {
        warn!(trailing, "ignoring tokens after the last declared point");
    }
    debug!(count = points.len(), "read points");
    Ok(points)
}

/// Opens `path` and reads points from it with [`read_points`].
///
/// # Errors
/// Same as [`read_points`], plus [`ReadError::Io`] if the file cannot be opened.
pub fn read_points_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Point2D>, ReadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening point file");
    let file = File::open(path)?;
    read_points(BufReader::new(file))
}

/// Inserts `points` into `index` in order and returns how many were new.
///
/// # Errors
/// Stops at the first point the index rejects.
pub fn load_into<I>(index: &mut I, points: &[Point2D]) -> Result<usize, KdError>
where
    I: PointIndex + ?Sized,
{
    let mut added = 0;
    for &point in points {
        if index.insert(point)? {
            added += 1;
        }
    }
    debug!(offered = points.len(), added, "loaded points");
    Ok(added)
}

fn parse_coordinate((line, token): (usize, String)) -> Result<f64, ReadError> {
    let value: f64 = token.parse().map_err(|_| ReadError::InvalidNumber { token, line })?;
    if !value.is_finite() {
        return Err(ReadError::NonFinite { line });
    }
    Ok(value)
}
