use std::sync::Arc;

use tokio::task::JoinSet;

use crate::{
    error::AppResult,
    models::{CandidateItem, MoodMatch, MoodQuery, TitlePick},
    services::{
        mood_analyzer,
        providers::{DiscoverSort, LlmProvider, MetadataProvider},
        ranker,
    },
};

/// Turns a mood into an ordered list of recommendations.
///
/// Two strategies exist: genre inference over a keyword lexicon, and title
/// generation by a language model. The router only sees this trait.
#[async_trait::async_trait]
pub trait MoodRecommender: Send + Sync {
    async fn recommend(&self, query: &MoodQuery) -> AppResult<MoodMatch>;

    /// Strategy name for logging
    fn name(&self) -> &'static str;
}

/// Lexicon analysis followed by genre discovery
pub struct HeuristicRecommender {
    metadata: Arc<dyn MetadataProvider>,
    max_results: usize,
}

impl HeuristicRecommender {
    pub fn new(metadata: Arc<dyn MetadataProvider>, max_results: usize) -> Self {
        Self {
            metadata,
            max_results,
        }
    }
}

#[async_trait::async_trait]
impl MoodRecommender for HeuristicRecommender {
    async fn recommend(&self, query: &MoodQuery) -> AppResult<MoodMatch> {
        self.metadata.ensure_configured()?;

        let analysis = mood_analyzer::analyze(query);
        tracing::info!(
            genres = ?analysis.genre_ids,
            strategy = self.name(),
            "Mood analyzed"
        );

        let pools = fetch_by_genres(self.metadata.as_ref(), &analysis.genre_ids).await?;
        let movies = ranker::rank(pools, &analysis.genre_ids, self.max_results);

        Ok(MoodMatch {
            movies,
            explanation: analysis.explanation,
        })
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// LLM picks titles, the metadata provider resolves them
pub struct GenerativeRecommender {
    llm: Arc<dyn LlmProvider>,
    metadata: Arc<dyn MetadataProvider>,
    max_results: usize,
}

impl GenerativeRecommender {
    pub fn new(
        llm: Arc<dyn LlmProvider>,
        metadata: Arc<dyn MetadataProvider>,
        max_results: usize,
    ) -> Self {
        Self {
            llm,
            metadata,
            max_results,
        }
    }
}

#[async_trait::async_trait]
impl MoodRecommender for GenerativeRecommender {
    async fn recommend(&self, query: &MoodQuery) -> AppResult<MoodMatch> {
        self.metadata.ensure_configured()?;
        self.llm.ensure_configured()?;

        let picks = self.llm.suggest_titles(query.as_str()).await?;
        tracing::info!(
            picks = picks.recommendations.len(),
            strategy = self.name(),
            "Titles generated"
        );

        let resolved = fetch_by_titles(Arc::clone(&self.metadata), picks.recommendations).await;
        let movies = ranker::rank_generated(resolved, self.max_results);

        Ok(MoodMatch {
            movies,
            explanation: picks.explanation,
        })
    }

    fn name(&self) -> &'static str {
        "generative"
    }
}

/// Runs the rating-sorted and popularity-sorted discovery queries concurrently.
///
/// Returns the pools in that order. A failed query contributes an empty pool; only when
/// both fail is there nothing to rank, and the first error is returned.
pub async fn fetch_by_genres(
    metadata: &dyn MetadataProvider,
    genre_ids: &[u32],
) -> AppResult<Vec<Vec<CandidateItem>>> {
    let (top_rated, popular) = tokio::join!(
        metadata.discover_movies(genre_ids, DiscoverSort::TopRated),
        metadata.discover_movies(genre_ids, DiscoverSort::Popular),
    );

    match (top_rated, popular) {
        (Err(e), Err(other)) => {
            tracing::error!(
                error = %e,
                other_error = %other,
                genres = ?genre_ids,
                "All discovery queries failed"
            );
            Err(e)
        }
        (top_rated, popular) => Ok(vec![
            pool_or_empty(top_rated, DiscoverSort::TopRated, genre_ids),
            pool_or_empty(popular, DiscoverSort::Popular, genre_ids),
        ]),
    }
}

fn pool_or_empty(
    result: AppResult<Vec<CandidateItem>>,
    sort: DiscoverSort,
    genre_ids: &[u32],
) -> Vec<CandidateItem> {
    result.unwrap_or_else(|e| {
        tracing::warn!(
            error = %e,
            sort = sort.sort_by(),
            genres = ?genre_ids,
            "Discovery query failed, continuing without it"
        );
        Vec::new()
    })
}

/// Looks up every pick concurrently and keeps the ones that resolve, in pick order.
///
/// A failed or empty lookup is logged and treated as no match.
pub async fn fetch_by_titles(
    metadata: Arc<dyn MetadataProvider>,
    picks: Vec<TitlePick>,
) -> Vec<(CandidateItem, String)> {
    let mut lookups = JoinSet::new();
    let count = picks.len();

    for (index, pick) in picks.into_iter().enumerate() {
        let metadata = Arc::clone(&metadata);
        lookups.spawn(async move {
            let found = metadata.find_movie(&pick.title).await;
            (index, pick, found)
        });
    }

    let mut slots: Vec<Option<(CandidateItem, String)>> = vec![None; count];

    while let Some(joined) = lookups.join_next().await {
        match joined {
            Ok((index, pick, Ok(Some(item)))) => slots[index] = Some((item, pick.reason)),
            Ok((_, pick, Ok(None))) => {
                tracing::debug!(title = %pick.title, "No metadata match for generated title");
            }
            Ok((_, pick, Err(e))) => {
                tracing::warn!(error = %e, title = %pick.title, "Title lookup failed");
            }
            Err(e) => {
                tracing::error!(error = %e, "Title lookup task failed");
            }
        }
    }

    slots.into_iter().flatten().collect()
}
