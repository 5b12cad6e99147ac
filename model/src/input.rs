use std::{
    io::Read,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::entry::{is_space, CoordinateEntry};

#[derive(Error, Debug)]
pub enum InputError {
    #[error("could not read from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("cannot read input from file {}: {source}", .path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub fn read_input_from_stdin() -> Result<String, InputError> {
    let mut input_string = String::new();
    std::io::stdin()
        .lock()
        .read_to_string(&mut input_string)
        .map_err(InputError::Stdin)?;

    Ok(input_string)
}

pub fn read_input_from_file(file_path: impl AsRef<Path>) -> Result<String, InputError> {
    let path = file_path.as_ref();
    std::fs::read_to_string(path).map_err(|source| InputError::File {
        path: path.to_path_buf(),
        source,
    })
}

/// Splits a document into trimmed, non-empty lines.
///
/// Besides `\n` and `\r`, vertical tab, form feed, the file/group/record
/// separators, NEL and the Unicode line/paragraph separators end a line too.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_line_boundary)
        .map(|line| line.trim_matches(is_space))
        .filter(|line| !line.is_empty())
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Parses all valid entries of a document, in input order.
///
/// Lines that are not `<token> <x> <y>` with non-negative integer coordinates
/// are skipped.
pub fn parse_entries(text: &str) -> Vec<CoordinateEntry> {
    let mut skipped = 0;
    let entries: Vec<CoordinateEntry> = lines(text)
        .filter_map(|line| match line.parse::<CoordinateEntry>() {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::trace!("skipping line '{}': {}", line, e);
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        log::debug!("skipped {} malformed lines", skipped);
    }

    entries
}
