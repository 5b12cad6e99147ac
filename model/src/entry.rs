use std::str::FromStr;

use thiserror::Error;

use crate::coord::{parse_coord, Coord, CoordError, Point};

/// A single `<token> <x> <y>` line of the input document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateEntry {
    /// Cell content. Kept whole, even when it is longer than one character
    pub token: String,
    pub x: Coord,
    pub y: Coord,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("expected 3 tokens, found {0}")]
    TokenCount(usize),

    #[error("invalid x coordinate: {0}")]
    X(CoordError),

    #[error("invalid y coordinate: {0}")]
    Y(CoordError),
}

impl CoordinateEntry {
    pub fn new(token: impl Into<String>, x: Coord, y: Coord) -> Self {
        CoordinateEntry {
            token: token.into(),
            x,
            y,
        }
    }

    pub fn point(&self) -> Point {
        (self.x, self.y)
    }
}

impl FromStr for CoordinateEntry {
    type Err = EntryError;

    /// Parses one line. Surrounding whitespace is ignored.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split(is_space).filter(|t| !t.is_empty()).collect();

        let &[token, x, y] = tokens.as_slice() else {
            return Err(EntryError::TokenCount(tokens.len()));
        };

        Ok(CoordinateEntry {
            token: token.to_string(),
            x: parse_coord(x).map_err(EntryError::X)?,
            y: parse_coord(y).map_err(EntryError::Y)?,
        })
    }
}

/// Whitespace as understood by the document format.
///
/// Unicode whitespace plus the ASCII information separators `\x1c`..=`\x1f`.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
