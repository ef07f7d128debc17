//! Configuration for the author profile service.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the OpenAlex API.
    pub const OPENALEX_API: &str = "https://api.openalex.org";

    /// Prefix of canonical OpenAlex entity identifiers.
    pub const ENTITY_PREFIX: &str = "https://openalex.org/";

    /// User agent sent with every request.
    pub const USER_AGENT: &str = concat!("author-profile/", env!("CARGO_PKG_VERSION"));

    /// Timeout for works pagination requests.
    pub const WORKS_TIMEOUT: Duration = Duration::from_secs(50);

    /// Timeout for author search requests.
    pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(30);

    /// Timeout for per-candidate concept lookups.
    pub const CONCEPT_TIMEOUT: Duration = Duration::from_secs(40);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Transient-failure retries performed by the transport.
    pub const MAX_RETRIES: u32 = 2;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Result-size limits used by the analysis pipeline.
pub mod limits {
    /// Works per page (OpenAlex maximum).
    pub const PER_PAGE: u32 = 200;

    /// Stop paginating once more than this many works were accumulated.
    pub const FETCH_CAP: usize = 15_000;

    /// Papers kept in the citation-rate ranking.
    pub const TOP_PAPERS: usize = 30;

    /// Co-authors kept in the co-author ranking.
    pub const TOP_COAUTHORS: usize = 30;

    /// Author names shown before the list is cut with "et al.".
    pub const MAX_AUTHORS_DISPLAY: usize = 12;

    /// Most-cited works inspected per search candidate.
    pub const CONCEPT_TOP_WORKS: u32 = 20;

    /// Concept tags attached to each search candidate.
    pub const CONCEPT_TOP_TAGS: usize = 3;

    /// Default number of author search results.
    pub const SEARCH_PER_PAGE: u32 = 8;

    /// Largest accepted author search page.
    pub const SEARCH_MAX_PER_PAGE: u32 = 25;
}

/// Works fields requested when paginating an author's record.
pub const WORKS_SELECT: &str =
    "id,doi,title,publication_year,cited_by_count,type,authorships,primary_location";

/// Works fields requested for concept aggregation.
pub const CONCEPT_SELECT: &str = "id,cited_by_count,concepts";

/// Tunables of the ranking pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSettings {
    /// Works per page while paginating.
    pub per_page: u32,

    /// Accumulation cap for a single fetch.
    pub fetch_cap: usize,

    /// Length of the paper ranking.
    pub top_papers: usize,

    /// Length of the co-author ranking.
    pub top_coauthors: usize,

    /// Author names kept in the compact author list.
    pub max_authors_display: usize,

    /// Most-cited works inspected per search candidate.
    pub concept_top_works: u32,

    /// Concept tags kept per search candidate.
    pub concept_top_tags: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            per_page: limits::PER_PAGE,
            fetch_cap: limits::FETCH_CAP,
            top_papers: limits::TOP_PAPERS,
            top_coauthors: limits::TOP_COAUTHORS,
            max_authors_display: limits::MAX_AUTHORS_DISPLAY,
            concept_top_works: limits::CONCEPT_TOP_WORKS,
            concept_top_tags: limits::CONCEPT_TOP_TAGS,
        }
    }
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contact e-mail for the OpenAlex polite pool (optional).
    pub mailto: Option<String>,

    /// Base URL for the OpenAlex API (for testing with mock servers).
    pub api_url: String,

    /// Timeout for works pagination requests.
    pub works_timeout: Duration,

    /// Timeout for author search requests.
    pub search_timeout: Duration,

    /// Timeout for concept lookups.
    pub concept_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Transient-failure retries.
    pub max_retries: u32,

    /// Ranking pipeline tunables.
    pub analysis: AnalysisSettings,
}

impl Config {
    /// Create a new configuration with an optional polite-pool e-mail.
    #[must_use]
    pub fn new(mailto: Option<String>) -> Self {
        Self {
            mailto,
            api_url: api::OPENALEX_API.to_string(),
            works_timeout: api::WORKS_TIMEOUT,
            search_timeout: api::SEARCH_TIMEOUT,
            concept_timeout: api::CONCEPT_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            max_retries: api::MAX_RETRIES,
            analysis: AnalysisSettings::default(),
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            mailto: None,
            api_url: base_url.trim_end_matches('/').to_string(),
            works_timeout: Duration::from_secs(5),
            search_timeout: Duration::from_secs(5),
            concept_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            max_retries: 0, // Fail fast in tests
            analysis: AnalysisSettings::default(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let mailto = std::env::var("OPENALEX_MAILTO").ok().filter(|m| !m.trim().is_empty());
        let mut config = Self::new(mailto);

        if let Ok(url) = std::env::var("OPENALEX_API_URL") {
            config.api_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(retries) = std::env::var("OPENALEX_MAX_RETRIES") {
            config.max_retries = retries
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid OPENALEX_MAX_RETRIES '{retries}': {e}"))?;
        }

        Ok(config)
    }

    /// Override the API base URL.
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Check if a polite-pool e-mail is configured.
    #[must_use]
    pub const fn has_mailto(&self) -> bool {
        self.mailto.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.has_mailto());
        assert_eq!(config.api_url, api::OPENALEX_API);
        assert_eq!(config.analysis.fetch_cap, 15_000);
        assert_eq!(config.analysis.top_papers, 30);
        assert_eq!(config.analysis.top_coauthors, 30);
    }

    #[test]
    fn test_for_testing_disables_retries() {
        let config = Config::for_testing("http://127.0.0.1:9999/");
        assert_eq!(config.api_url, "http://127.0.0.1:9999");
        assert_eq!(config.max_retries, 0);
    }

    #[test]
    fn test_with_api_url_trims_slash() {
        let config = Config::new(Some("me@example.org".to_string())).with_api_url("http://x/");
        assert!(config.has_mailto());
        assert_eq!(config.api_url, "http://x");
    }
}
