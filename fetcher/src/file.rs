use model::input::{read_input_from_file, read_input_from_stdin};

use crate::{FetchError, Fetcher};

/// Reads documents from the local file system
#[derive(Debug, Default, Clone, Copy)]
pub struct FileFetcher;

impl Fetcher for FileFetcher {
    fn fetch(&self, path: &str) -> Result<String, FetchError> {
        log::debug!("reading {}", path);
        Ok(read_input_from_file(path)?)
    }
}

/// Reads the whole of stdin, ignoring the locator
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinFetcher;

impl Fetcher for StdinFetcher {
    fn fetch(&self, _: &str) -> Result<String, FetchError> {
        log::debug!("reading stdin");
        Ok(read_input_from_stdin()?)
    }
}

/// Serves a fixed document for every locator
#[derive(Debug, Clone, Copy)]
pub struct StaticFetcher(pub &'static str);

impl Fetcher for StaticFetcher {
    fn fetch(&self, _: &str) -> Result<String, FetchError> {
        Ok(String::from(self.0))
    }
}
