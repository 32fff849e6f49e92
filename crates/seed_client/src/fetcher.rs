//! Seed fetcher trait and HTTP implementation

use async_trait::async_trait;
use reqwest::Client;
use todo_core::TodoItem;

use crate::config::SeedConfig;
use crate::error::{Result, SeedError};

/// One-shot paginated read of seed items.
///
/// `page` is 1-based; the response carries at most `limit` items and a
/// short page signals the end of the collection.
#[async_trait]
pub trait SeedFetcher: Send + Sync {
    async fn fetch_page(&self, page: u32, limit: usize) -> Result<Vec<TodoItem>>;
}

/// HTTP seed fetcher against a jsonplaceholder-style collection.
#[derive(Clone, Debug)]
pub struct HttpSeedFetcher {
    client: Client,
    config: SeedConfig,
}

impl HttpSeedFetcher {
    pub fn new(config: SeedConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

impl Default for HttpSeedFetcher {
    fn default() -> Self {
        Self::new(SeedConfig::default())
    }
}

#[async_trait]
impl SeedFetcher for HttpSeedFetcher {
    async fn fetch_page(&self, page: u32, limit: usize) -> Result<Vec<TodoItem>> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("_page", page.to_string()), ("_limit", limit.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "seed endpoint returned error");
            return Err(SeedError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let items = response
            .json::<Vec<TodoItem>>()
            .await
            .map_err(|e| SeedError::Decode(e.to_string()))?;

        tracing::debug!(page, limit, count = items.len(), "seed page fetched");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn seed_body(count: usize) -> serde_json::Value {
        let items: Vec<_> = (1..=count)
            .map(|i| {
                json!({
                    "userId": 1,
                    "id": i,
                    "title": format!("seed item {}", i),
                    "completed": i % 2 == 0
                })
            })
            .collect();
        json!(items)
    }

    #[tokio::test]
    async fn test_fetch_page_decodes_items() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .and(query_param("_page", "1"))
            .and(query_param("_limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(seed_body(5)))
            .mount(&server)
            .await;

        let fetcher =
            HttpSeedFetcher::new(SeedConfig::with_base_url(format!("{}/todos", server.uri())));
        let items = fetcher.fetch_page(1, 5).await.unwrap();

        assert_eq!(items.len(), 5);
        assert_eq!(items[0].title, "seed item 1");
        assert!(!items[0].completed);
        assert!(items[1].completed);
    }

    #[tokio::test]
    async fn test_fetch_page_short_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .and(query_param("_page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(seed_body(3)))
            .mount(&server)
            .await;

        let fetcher =
            HttpSeedFetcher::new(SeedConfig::with_base_url(format!("{}/todos", server.uri())));
        let items = fetcher.fetch_page(3, 5).await.unwrap();

        assert_eq!(items.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_page_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let fetcher =
            HttpSeedFetcher::new(SeedConfig::with_base_url(format!("{}/todos", server.uri())));
        let err = fetcher.fetch_page(1, 5).await.unwrap_err();

        assert!(matches!(err, SeedError::UnexpectedStatus { status: 500 }));
    }

    #[tokio::test]
    async fn test_fetch_page_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let fetcher =
            HttpSeedFetcher::new(SeedConfig::with_base_url(format!("{}/todos", server.uri())));
        let err = fetcher.fetch_page(1, 5).await.unwrap_err();

        assert!(matches!(err, SeedError::Decode(_)));
    }
}
