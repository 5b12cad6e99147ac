use model::input::InputError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[cfg(feature = "http")]
    #[error("cannot set up http client: {0}")]
    Client(#[source] reqwest::Error),

    #[cfg(feature = "http")]
    #[error("request to {url} failed: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("cannot fetch '{0}': built without http support")]
    Unsupported(String),
}
