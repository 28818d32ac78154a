use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, AppResult};

/// Free-text mood as typed by the user, trimmed and known to be non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodQuery(String);

impl MoodQuery {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidInput(
                "Please provide a mood description".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Genres inferred from a mood plus the sentence shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodAnalysis {
    /// Up to three unique genre ids, most relevant first
    pub genre_ids: Vec<u32>,
    pub explanation: String,
}

/// A movie returned by a discovery or title query, before ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateItem {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing)]
    pub genre_ids: Vec<u32>,
}

/// A candidate with the sentence explaining why it was picked
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRecommendation {
    #[serde(flatten)]
    pub item: CandidateItem,
    pub reason: String,
}

/// Final answer of a mood match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodMatch {
    pub movies: Vec<RankedRecommendation>,
    pub explanation: String,
}

/// Body of `POST /api/mood-match`
#[derive(Debug, Deserialize)]
pub struct MoodMatchRequest {
    pub mood: Option<String>,
}

/// A title proposed by the LLM, not yet resolved against the metadata provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitlePick {
    pub title: String,
    pub reason: String,
}

/// Structured output of the generative strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPicks {
    pub recommendations: Vec<TitlePick>,
    pub explanation: String,
}

/// TMDB sends `null` for some scalar fields; treat those like absent ones.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
