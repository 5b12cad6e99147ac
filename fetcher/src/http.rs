use std::time::Duration;

use reqwest::blocking::Client;

use crate::{FetchError, Fetcher};

/// Fetches documents over http(s) with a blocking client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(HttpFetcher { client })
    }
}

impl Fetcher for HttpFetcher {
    /// Non-2xx responses are errors. The body is decoded using the charset of
    /// the response, UTF-8 if there is none.
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        log::debug!("fetching {}", url);
        self.client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|source| FetchError::Http {
                url: String::from(url),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_url_is_an_http_error() {
        let fetcher = HttpFetcher::new(Duration::from_secs(1)).unwrap();
        let err = fetcher.fetch("not a url").unwrap_err();
        assert!(matches!(err, FetchError::Http { .. }));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn refused_connection_is_an_http_error() {
        // nothing listens on the discard port
        let fetcher = HttpFetcher::new(Duration::from_secs(2)).unwrap();
        let err = fetcher.fetch("http://127.0.0.1:9/secret").unwrap_err();
        assert!(matches!(err, FetchError::Http { .. }));
    }
}
