//! OpenAlex API client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Retry middleware with exponential backoff for transient failures
//! - Per-endpoint request timeouts
//! - Polite-pool `mailto` parameter when configured
//!
//! The analysis pipeline only sees the [`WorksSource`] trait, so tests can
//! substitute synthetic sources.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::config::{CONCEPT_SELECT, Config, WORKS_SELECT, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{Author, AuthorId, AuthorSearchPage, Work, WorksPage};

/// Read access to a bibliographic source.
#[async_trait::async_trait]
pub trait WorksSource: Send + Sync {
    /// Fetch one page of works matching `filter`, starting at `cursor`.
    async fn works_page(&self, filter: &str, cursor: &str, per_page: u32)
    -> ClientResult<WorksPage>;

    /// Fetch an author's most-cited works, best first.
    async fn most_cited_works(&self, author: &AuthorId, limit: u32) -> ClientResult<Vec<Work>>;

    /// Search authors by free-text name.
    async fn search_authors(&self, name: &str, per_page: u32) -> ClientResult<Vec<Author>>;
}

/// OpenAlex API client.
#[derive(Clone)]
pub struct OpenAlexClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// API base URL.
    api_url: String,

    /// Polite-pool e-mail (optional).
    mailto: Option<String>,

    /// Timeout for works pagination.
    works_timeout: Duration,

    /// Timeout for author search.
    search_timeout: Duration,

    /// Timeout for concept lookups.
    concept_timeout: Duration,
}

impl OpenAlexClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let user_agent = match config.mailto {
            Some(ref mailto) => format!("{} (mailto:{mailto})", api::USER_AGENT),
            None => api::USER_AGENT.to_string(),
        };

        let client = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
            .build_with_max_retries(config.max_retries);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            mailto: config.mailto.clone(),
            works_timeout: config.works_timeout,
            search_timeout: config.search_timeout,
            concept_timeout: config.concept_timeout,
        })
    }

    /// Check if a polite-pool e-mail is configured.
    #[must_use]
    pub fn has_mailto(&self) -> bool {
        self.mailto.is_some()
    }

    /// Make a GET request and decode the JSON body.
    async fn get<T>(&self, url: &str, params: &[(&str, String)], timeout: Duration) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut params = params.to_vec();
        if let Some(ref mailto) = self.mailto {
            params.push(("mailto", mailto.clone()));
        }

        let response = self
            .client
            .get(url)
            .query(&params)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| send_error(e, timeout))?;

        let status = response.status();
        if status != StatusCode::OK {
            let text = response.text().await.unwrap_or_default();
            tracing::debug!(url, status = status.as_u16(), "OpenAlex returned non-success status");
            return Err(ClientError::status(status.as_u16(), &text));
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() { ClientError::Timeout(timeout) } else { ClientError::from(e) }
        })?;

        serde_json::from_slice(&body).map_err(ClientError::from)
    }
}

/// Classify a failed send. The retry middleware wraps transport errors, so
/// timeouts are searched for along the whole source chain.
fn send_error(err: reqwest_middleware::Error, timeout: Duration) -> ClientError {
    let timed_out = match &err {
        reqwest_middleware::Error::Reqwest(e) => e.is_timeout(),
        reqwest_middleware::Error::Middleware(e) => e.chain().any(|cause| {
            cause.downcast_ref::<reqwest::Error>().is_some_and(reqwest::Error::is_timeout)
        }),
    };

    if timed_out { ClientError::Timeout(timeout) } else { ClientError::from(err) }
}

#[async_trait::async_trait]
impl WorksSource for OpenAlexClient {
    async fn works_page(
        &self,
        filter: &str,
        cursor: &str,
        per_page: u32,
    ) -> ClientResult<WorksPage> {
        let url = format!("{}/works", self.api_url);
        let params = [
            ("filter", filter.to_string()),
            ("per-page", per_page.to_string()),
            ("cursor", cursor.to_string()),
            ("select", WORKS_SELECT.to_string()),
        ];

        self.get(&url, &params, self.works_timeout).await
    }

    async fn most_cited_works(&self, author: &AuthorId, limit: u32) -> ClientResult<Vec<Work>> {
        let url = format!("{}/works", self.api_url);
        let params = [
            ("filter", author.works_filter()),
            ("per-page", limit.clamp(1, 200).to_string()),
            ("sort", "cited_by_count:desc".to_string()),
            ("select", CONCEPT_SELECT.to_string()),
        ];

        let page: WorksPage = self.get(&url, &params, self.concept_timeout).await?;
        Ok(page.into_results())
    }

    async fn search_authors(&self, name: &str, per_page: u32) -> ClientResult<Vec<Author>> {
        let url = format!("{}/authors", self.api_url);
        let params = [("search", name.to_string()), ("per-page", per_page.to_string())];

        let page: AuthorSearchPage = self.get(&url, &params, self.search_timeout).await?;
        Ok(page.into_results())
    }
}

impl std::fmt::Debug for OpenAlexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAlexClient")
            .field("api_url", &self.api_url)
            .field("has_mailto", &self.has_mailto())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_succeeds() {
        let client = OpenAlexClient::new(&Config::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_non_timeout_middleware_error_kept() {
        let err = reqwest_middleware::Error::Middleware(anyhow::anyhow!("retry budget exhausted"));
        let mapped = send_error(err, Duration::from_secs(1));
        assert!(!mapped.is_timeout());
        assert!(matches!(mapped, ClientError::Middleware(_)));
    }

    #[test]
    fn test_debug_hides_mailto() {
        let config = Config::new(Some("me@example.org".to_string()));
        let client = OpenAlexClient::new(&config).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("has_mailto: true"));
        assert!(!debug.contains("me@example.org"));
    }
}
