//! Ranking and search operations exposed to the CLI and HTTP layers.

use std::sync::Arc;

use chrono::{Datelike, Utc};

use crate::analysis::{
    self, ARTICLE_SCOPE, FORMULA, FetchedWorks, fetch_author_works, rank_by_citation_rate,
    rank_coauthors,
};
use crate::client::{OpenAlexClient, WorksSource};
use crate::config::{AnalysisSettings, Config, limits};
use crate::error::{ProfileError, ProfileResult};
use crate::models::{
    AuthorId, AuthorSearchResponse, CandidateIdentity, CoauthorRanking, PaperRanking,
    ProfileReport, SOURCE_NAME,
};

/// Minimum characters in an author search query.
pub const MIN_SEARCH_CHARS: usize = 2;

/// Current calendar year (UTC).
#[must_use]
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Author profile analysis over a bibliographic source.
#[derive(Clone)]
pub struct ProfileService {
    /// Bibliographic source.
    source: Arc<dyn WorksSource>,

    /// Pipeline tunables.
    settings: AnalysisSettings,
}

impl ProfileService {
    /// Create a service over any source.
    #[must_use]
    pub fn new(source: Arc<dyn WorksSource>, settings: AnalysisSettings) -> Self {
        Self { source, settings }
    }

    /// Create a service backed by the OpenAlex API.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = OpenAlexClient::new(config)?;
        Ok(Self::new(Arc::new(client), config.analysis.clone()))
    }

    /// Pipeline tunables in use.
    #[must_use]
    pub const fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Fetch an author's works and rank papers and co-authors.
    ///
    /// `author_id` may be a bare OpenAlex suffix or a full URL.
    pub async fn ranking(&self, author_id: &str) -> ProfileResult<ProfileReport> {
        let author: AuthorId = author_id.parse()?;
        self.ranking_for(&author, current_year()).await
    }

    /// Same as [`Self::ranking`] with an explicit reference year.
    pub async fn ranking_for(
        &self,
        author: &AuthorId,
        current_year: i32,
    ) -> ProfileResult<ProfileReport> {
        let fetched = fetch_author_works(
            self.source.as_ref(),
            author,
            self.settings.per_page,
            self.settings.fetch_cap,
        )
        .await
        .map_err(|e| {
            tracing::error!(author = %author, error = %e, "Works fetch failed");
            ProfileError::from(e)
        })?;

        Ok(self.build_report(author, &fetched, current_year))
    }

    /// Rank an already fetched snapshot.
    #[must_use]
    pub fn build_report(
        &self,
        author: &AuthorId,
        fetched: &FetchedWorks,
        current_year: i32,
    ) -> ProfileReport {
        let normalized =
            analysis::normalize_works(&fetched.works, self.settings.max_authors_display);
        let papers = rank_by_citation_rate(&normalized, current_year, self.settings.top_papers);
        let coauthors = rank_coauthors(&fetched.works, author, self.settings.top_coauthors);

        tracing::info!(
            author = %author,
            works = fetched.works.len(),
            with_year = normalized.len(),
            articles = coauthors.counted_articles,
            "Profile ranking computed"
        );

        ProfileReport {
            source: SOURCE_NAME.to_string(),
            author_id: author.clone(),
            count_works_total: fetched.works.len(),
            count_works_with_year: normalized.len(),
            current_year,
            truncated: fetched.truncated,
            paper_ranking: PaperRanking {
                top_n: self.settings.top_papers,
                formula: FORMULA.to_string(),
                items: papers,
            },
            coauthor_ranking: CoauthorRanking {
                top_n: self.settings.top_coauthors,
                scope: ARTICLE_SCOPE.to_string(),
                counted_article_works: coauthors.counted_articles,
                items: coauthors.items,
            },
        }
    }

    /// Search authors by name and tag each candidate with concepts.
    pub async fn search_authors(
        &self,
        name: &str,
        per_page: u32,
    ) -> ProfileResult<AuthorSearchResponse> {
        let query = name.trim();
        if query.chars().count() < MIN_SEARCH_CHARS {
            return Err(ProfileError::validation(
                "name",
                format!("must have at least {MIN_SEARCH_CHARS} characters"),
            ));
        }
        if !(1..=limits::SEARCH_MAX_PER_PAGE).contains(&per_page) {
            return Err(ProfileError::validation(
                "per_page",
                format!("must be between 1 and {}", limits::SEARCH_MAX_PER_PAGE),
            ));
        }

        let authors = self.source.search_authors(query, per_page).await.map_err(|e| {
            tracing::error!(query, error = %e, "Author search failed");
            ProfileError::from(e)
        })?;

        let candidates: Vec<CandidateIdentity> = authors
            .into_iter()
            .map(|a| CandidateIdentity {
                orcid: a.orcid(),
                last_known_institution: a.institution().map(str::to_string),
                id: a.id,
                display_name: a.display_name,
                works_count: a.works_count,
                cited_by_count: a.cited_by_count,
                concepts: Vec::new(),
            })
            .collect();

        let results = analysis::enrich_candidates(
            self.source.as_ref(),
            candidates,
            self.settings.concept_top_works,
            self.settings.concept_top_tags,
        )
        .await;

        tracing::info!(query, candidates = results.len(), "Author search complete");

        Ok(AuthorSearchResponse {
            query: name.to_string(),
            source: SOURCE_NAME.to_string(),
            results,
        })
    }
}

impl std::fmt::Debug for ProfileService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileService").field("settings", &self.settings).finish()
    }
}
