//! Parsing and rendering of coordinate documents.
//!
//! A coordinate document has one `<token> <x> <y>` entry per line. Rendering
//! places every token on a grid and prints the grid row by row, which turns
//! the document into the message it encodes.

pub mod coord;
pub mod entry;
pub mod grid;
pub mod input;

use grid::Grid;

/// Renders a coordinate document into its message.
///
/// Malformed lines are ignored. A document without a single valid entry, or
/// one whose grid would exceed [grid::MAX_CELLS], renders to the empty string.
pub fn render(text: &str) -> String {
    let entries = input::parse_entries(text);
    Grid::from_entries(&entries)
        .map(|grid| grid.to_string())
        .unwrap_or_default()
}
