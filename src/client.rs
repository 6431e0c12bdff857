//! Book source used by the fetch effect.

use thiserror::Error;
use url::Url;

use crate::app::Book;

/// Resource fetched for the data table, relative to the app base URL.
pub const BOOKS_RESOURCE: &str = "books.json";

/// Why a books fetch failed.
///
/// Only the `Display` text reaches the model, so a transport failure
/// reported as "network down" is shown as exactly that.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("{0}")]
    Decode(String),
}

/// Loads the book list. Injected into [`SpaApp`](crate::app::SpaApp).
#[async_trait::async_trait]
pub trait BookClient: Send + Sync {
    async fn fetch_books(&self) -> Result<Vec<Book>, FetchError>;
}

/// [`BookClient`] that issues `GET <base>/books.json`.
///
/// No retries and no timeout: a request that hangs leaves the table in its
/// loading state.
#[derive(Debug, Clone)]
pub struct HttpBookClient {
    client: reqwest::Client,
    url: Url,
}

impl HttpBookClient {
    /// `url` is the fully resolved books location, see
    /// [`AppConfig::books_url`](crate::config::AppConfig::books_url).
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait::async_trait]
impl BookClient for HttpBookClient {
    async fn fetch_books(&self) -> Result<Vec<Book>, FetchError> {
        log::info!("GET {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let books: Vec<Book> =
            serde_json::from_slice(&body).map_err(|err| FetchError::Decode(err.to_string()))?;
        log::info!("fetched {} books from {}", books.len(), self.url);
        Ok(books)
    }
}
