use std::{fmt::Display, path::PathBuf};

/// Where a document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Url(String),
    File(PathBuf),
    Stdin,
    /// The built-in offline document
    Sample,
}

impl Locator {
    /// Resolves a command line source.
    ///
    /// `-` is stdin, an existing path is a file, everything else is a URL.
    pub fn resolve(source: &str) -> Self {
        if source == "-" {
            Locator::Stdin
        } else if std::path::Path::new(source).exists() {
            Locator::File(PathBuf::from(source))
        } else {
            Locator::Url(String::from(source))
        }
    }
}

impl Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locator::Url(url) => f.write_str(url),
            Locator::File(path) => write!(f, "{}", path.display()),
            Locator::Stdin => f.write_str("-"),
            Locator::Sample => f.write_str("sample"),
        }
    }
}
