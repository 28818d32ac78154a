//! Upstream provider abstraction
//!
//! The metadata provider supplies catalog data (discovery, search, listings, details).
//! The LLM provider is only used by the generative recommender. Both are traits so the
//! router can be wired to fakes in tests.

use serde_json::Value;

use crate::{
    error::AppResult,
    models::{
        CandidateItem, CastMember, GeneratedPicks, ListingCategory, MediaKind, Paginated, Video,
    },
};

pub mod llm;
pub mod tmdb;

pub use llm::OpenAiCompatibleProvider;
pub use tmdb::TmdbProvider;

/// Sort orders used when discovering movies by genre
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoverSort {
    /// Best rated first, restricted to well-voted titles
    TopRated,
    /// Most popular first, with a looser vote floor
    Popular,
}

impl DiscoverSort {
    pub fn sort_by(&self) -> &'static str {
        match self {
            DiscoverSort::TopRated => "vote_average.desc",
            DiscoverSort::Popular => "popularity.desc",
        }
    }

    pub fn min_vote_count(&self) -> u32 {
        match self {
            DiscoverSort::TopRated => 1000,
            DiscoverSort::Popular => 500,
        }
    }
}

/// Movie/TV metadata source
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Fails with a configuration error when the credential is missing.
    /// Callers check this before fanning out so the error is not swallowed.
    fn ensure_configured(&self) -> AppResult<()>;

    /// Page 1 of movies having all of `genre_ids`
    async fn discover_movies(
        &self,
        genre_ids: &[u32],
        sort: DiscoverSort,
    ) -> AppResult<Vec<CandidateItem>>;

    /// Best match for a movie title, `None` when the search is empty
    async fn find_movie(&self, title: &str) -> AppResult<Option<CandidateItem>>;

    async fn list(
        &self,
        kind: MediaKind,
        category: ListingCategory,
        page: u32,
    ) -> AppResult<Paginated>;

    async fn search_movies(&self, query: &str, page: u32) -> AppResult<Paginated>;

    /// Raw detail document for a movie or show
    async fn details(&self, kind: MediaKind, id: u64) -> AppResult<Value>;

    async fn videos(&self, kind: MediaKind, id: u64) -> AppResult<Vec<Video>>;

    async fn cast(&self, kind: MediaKind, id: u64) -> AppResult<Vec<CastMember>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Language model that proposes titles for a mood
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LlmProvider: Send + Sync {
    fn ensure_configured(&self) -> AppResult<()>;

    async fn suggest_titles(&self, mood: &str) -> AppResult<GeneratedPicks>;

    fn name(&self) -> &'static str;
}
