//! Where search results come from.

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::{Car, Catalog};
use crate::filter::{FilterService, SearchFilters};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("response decode failed: {0}")]
    Decode(String),
}

/// Answers one search query with the matching cars.
#[async_trait]
pub trait CarSource: Send + Sync {
    async fn fetch(&self, filters: &SearchFilters) -> Result<Vec<Car>, FetchError>;
}

/// In-process source that filters a catalog directly.
#[derive(Debug, Clone, Default)]
pub struct CatalogCarSource {
    service: FilterService,
}

impl CatalogCarSource {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            service: FilterService::new(catalog),
        }
    }
}

#[async_trait]
impl CarSource for CatalogCarSource {
    async fn fetch(&self, filters: &SearchFilters) -> Result<Vec<Car>, FetchError> {
        Ok(self.service.search(filters))
    }
}

#[cfg(feature = "client")]
pub use http::HttpCarSource;

#[cfg(feature = "client")]
mod http {
    use async_trait::async_trait;

    use super::{CarSource, FetchError};
    use crate::catalog::Car;
    use crate::filter::SearchFilters;
    use crate::query::CarQuery;

    /// Source that calls `GET {base_url}/api/cars` over HTTP.
    #[derive(Debug, Clone)]
    pub struct HttpCarSource {
        client: reqwest::Client,
        base_url: String,
    }

    impl HttpCarSource {
        pub fn new(base_url: impl Into<String>) -> Self {
            Self::with_client(reqwest::Client::new(), base_url)
        }

        pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
            let base_url = base_url.into().trim_end_matches('/').to_string();
            Self { client, base_url }
        }

        pub fn url(&self) -> String {
            format!("{}/api/cars", self.base_url)
        }
    }

    #[async_trait]
    impl CarSource for HttpCarSource {
        async fn fetch(&self, filters: &SearchFilters) -> Result<Vec<Car>, FetchError> {
            let response = self
                .client
                .get(self.url())
                .query(&CarQuery::from(filters))
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            response
                .json::<Vec<Car>>()
                .await
                .map_err(|e| FetchError::Decode(e.to_string()))
        }
    }
}
