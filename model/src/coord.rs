use std::num::ParseIntError;

use thiserror::Error;

pub type Coord = u32;

pub type Point = (Coord, Coord);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    #[error("'{token}' is not an integer: {source}")]
    NotAnInteger {
        token: String,
        source: ParseIntError,
    },

    #[error("{0} cannot address a grid cell")]
    OutOfRange(i64),
}

/// Parses a base-10 coordinate token.
///
/// Anything the integer parser accepts is read first (including a sign), and
/// only then checked against the addressable range, so `-1` fails with
/// [CoordError::OutOfRange] rather than as a syntax error.
pub fn parse_coord(token: &str) -> Result<Coord, CoordError> {
    let value: i64 = token.parse().map_err(|source| CoordError::NotAnInteger {
        token: token.to_string(),
        source,
    })?;

    Coord::try_from(value).map_err(|_| CoordError::OutOfRange(value))
}
