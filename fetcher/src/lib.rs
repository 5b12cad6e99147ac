//! Retrieval of coordinate documents.
//!
//! Every source a document can come from is a [Fetcher]. The implementation is
//! picked once per run from the [Locator], see [for_locator].

mod error;
mod file;
#[cfg(feature = "http")]
mod http;
mod locator;

use common::{config::Config, constants::SAMPLE};

pub use error::FetchError;
pub use file::{FileFetcher, StaticFetcher, StdinFetcher};
#[cfg(feature = "http")]
pub use http::HttpFetcher;
pub use locator::Locator;

pub trait Fetcher {
    /// Returns the decoded text found at `locator`
    fn fetch(&self, locator: &str) -> Result<String, FetchError>;
}

/// Chooses the fetcher able to read `locator`
pub fn for_locator(locator: &Locator, config: &Config) -> Result<Box<dyn Fetcher>, FetchError> {
    let fetcher: Box<dyn Fetcher> = match locator {
        Locator::File(_) => Box::new(FileFetcher),
        Locator::Stdin => Box::new(StdinFetcher),
        Locator::Sample => Box::new(StaticFetcher(SAMPLE)),
        Locator::Url(url) => url_fetcher(url, config)?,
    };

    Ok(fetcher)
}

#[cfg(feature = "http")]
fn url_fetcher(_url: &str, config: &Config) -> Result<Box<dyn Fetcher>, FetchError> {
    let fetcher = HttpFetcher::new(config.timeout())?;
    Ok(Box::new(fetcher) as Box<dyn Fetcher>)
}

#[cfg(not(feature = "http"))]
fn url_fetcher(url: &str, _config: &Config) -> Result<Box<dyn Fetcher>, FetchError> {
    Err(FetchError::Unsupported(String::from(url)))
}

/// Fetches the document at `locator` with the matching fetcher
pub fn fetch(locator: &Locator, config: &Config) -> Result<String, FetchError> {
    for_locator(locator, config)?.fetch(&locator.to_string())
}
