//! TMDB v3 provider
//!
//! All requests are plain GETs authenticated with the `api_key` query parameter.
//! Result items are parsed one by one so a single malformed entry never sinks a page.
use crate::{
    error::{AppError, AppResult},
    models::{
        tmdb::{TmdbCredits, TmdbPage, TmdbStatus, TmdbVideoList},
        CandidateItem, CastMember, ListingCategory, MediaKind, Paginated, Video,
    },
    services::providers::{DiscoverSort, MetadataProvider},
};
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

const LANGUAGE: &str = "en-US";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
}

impl TmdbProvider {
    pub fn new(http_client: HttpClient, api_key: Option<String>, api_url: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| AppError::Configuration("TMDB_API_KEY not configured".to_string()))
    }

    /// GET `{api_url}/{path}` and decode the body. Any non-2xx status is an upstream failure.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> AppResult<T> {
        self.fetch(path, params, false).await
    }

    /// Like `get_json`, but a 404 means the addressed title does not exist
    async fn get_resource<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.fetch(path, &[], true).await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        missing_is_not_found: bool,
    ) -> AppResult<T> {
        let api_key = self.api_key()?;
        let url = format!("{}/{}", self.api_url, path);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", api_key), ("language", LANGUAGE)])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let tmdb_status = serde_json::from_str::<TmdbStatus>(&body).ok();
            let mut message = tmdb_status
                .as_ref()
                .and_then(|s| s.status_message.clone())
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
            if let Some(code) = tmdb_status.and_then(|s| s.status_code) {
                message = format!("{} (TMDB code {})", message, code);
            }

            tracing::warn!(
                path = %path,
                status = %status,
                message = %message,
                provider = "tmdb",
                "TMDB request failed"
            );

            if missing_is_not_found && status == StatusCode::NOT_FOUND {
                return Err(AppError::NotFound(format!("TMDB resource {} not found", path)));
            }
            return Err(AppError::ExternalApi(format!(
                "TMDB returned status {}: {}",
                status, message
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                path = %path,
                body_len = body.len(),
                "Failed to deserialize TMDB response"
            );
            AppError::ExternalApi(format!("Failed to parse TMDB response: {}", e))
        })
    }
}

/// Keeps the entries that look like movies, dropping the rest
fn parse_candidates(results: Vec<Value>) -> Vec<CandidateItem> {
    let total = results.len();
    let candidates: Vec<CandidateItem> = results
        .into_iter()
        .filter_map(|result| serde_json::from_value(result).ok())
        .collect();

    if candidates.len() < total {
        tracing::debug!(
            skipped = total - candidates.len(),
            "Dropped malformed TMDB result entries"
        );
    }

    candidates
}

fn parse_entries<T: DeserializeOwned>(entries: Vec<Value>) -> Vec<T> {
    entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect()
}

fn into_paginated(page: TmdbPage<Value>, current_page: Option<u32>) -> Paginated {
    Paginated {
        current_page: current_page.or(page.page).unwrap_or(1),
        total_pages: page.total_pages.unwrap_or(1),
        total_results: page.total_results.unwrap_or(0),
        results: page.results,
    }
}

fn join_genres(genre_ids: &[u32]) -> String {
    genre_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[async_trait::async_trait]
impl MetadataProvider for TmdbProvider {
    fn ensure_configured(&self) -> AppResult<()> {
        self.api_key().map(|_| ())
    }

    async fn discover_movies(
        &self,
        genre_ids: &[u32],
        sort: DiscoverSort,
    ) -> AppResult<Vec<CandidateItem>> {
        let page: TmdbPage<Value> = self
            .get_json(
                "discover/movie",
                &[
                    ("with_genres", join_genres(genre_ids)),
                    ("sort_by", sort.sort_by().to_string()),
                    ("vote_count.gte", sort.min_vote_count().to_string()),
                    ("page", "1".to_string()),
                ],
            )
            .await?;

        let candidates = parse_candidates(page.results);

        tracing::info!(
            genres = ?genre_ids,
            sort = sort.sort_by(),
            results = candidates.len(),
            provider = "tmdb",
            "Discover completed"
        );

        Ok(candidates)
    }

    async fn find_movie(&self, title: &str) -> AppResult<Option<CandidateItem>> {
        let page: TmdbPage<Value> = self
            .get_json(
                "search/movie",
                &[("query", title.to_string()), ("page", "1".to_string())],
            )
            .await?;

        let found = parse_candidates(page.results).into_iter().next();

        tracing::debug!(
            title = %title,
            found = ?found.as_ref().map(|c| c.id),
            provider = "tmdb",
            "Title lookup completed"
        );

        Ok(found)
    }

    async fn list(
        &self,
        kind: MediaKind,
        category: ListingCategory,
        page: u32,
    ) -> AppResult<Paginated> {
        let path = format!("{}/{}", kind.path_segment(), category.path_segment());
        let data: TmdbPage<Value> = self.get_json(&path, &[("page", page.to_string())]).await?;

        Ok(into_paginated(data, None))
    }

    async fn search_movies(&self, query: &str, page: u32) -> AppResult<Paginated> {
        let data: TmdbPage<Value> = self
            .get_json(
                "search/movie",
                &[("query", query.to_string()), ("page", page.to_string())],
            )
            .await?;

        tracing::info!(
            query = %query,
            page = page,
            results = data.results.len(),
            total_results = data.total_results.unwrap_or(0),
            provider = "tmdb",
            "Search completed"
        );

        Ok(into_paginated(data, Some(page)))
    }

    async fn details(&self, kind: MediaKind, id: u64) -> AppResult<Value> {
        let path = format!("{}/{}", kind.path_segment(), id);
        self.get_resource(&path).await
    }

    async fn videos(&self, kind: MediaKind, id: u64) -> AppResult<Vec<Video>> {
        let path = format!("{}/{}/videos", kind.path_segment(), id);
        let data: TmdbVideoList = self.get_json(&path, &[]).await?;
        Ok(parse_entries(data.results))
    }

    async fn cast(&self, kind: MediaKind, id: u64) -> AppResult<Vec<CastMember>> {
        let path = format!("{}/{}/{}", kind.path_segment(), id, kind.credits_segment());
        let data: TmdbCredits = self.get_json(&path, &[]).await?;
        Ok(parse_entries(data.cast))
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_provider(api_key: Option<&str>) -> TmdbProvider {
        TmdbProvider::new(
            reqwest::Client::new(),
            api_key.map(str::to_string),
            "http://test.local/3/".to_string(),
        )
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let provider = create_test_provider(Some("key"));
        assert_eq!(provider.api_url, "http://test.local/3");
    }

    #[test]
    fn test_ensure_configured() {
        assert!(create_test_provider(Some("key")).ensure_configured().is_ok());
        assert!(matches!(
            create_test_provider(None).ensure_configured(),
            Err(AppError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        // test.local is never resolved: the key check comes first
        let provider = create_test_provider(None);
        let result = provider.discover_movies(&[18], DiscoverSort::TopRated).await;
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_join_genres() {
        assert_eq!(join_genres(&[18, 10749, 35]), "18,10749,35");
        assert_eq!(join_genres(&[]), "");
    }

    #[test]
    fn test_parse_candidates_skips_malformed_entries() {
        let results = vec![
            json!({ "id": 550, "title": "Fight Club", "vote_average": 8.4, "genre_ids": [18] }),
            json!({ "title": "No id" }),
            json!("not an object"),
            json!({ "id": 13, "title": "Forrest Gump" }),
        ];

        let candidates = parse_candidates(results);
        let ids: Vec<u64> = candidates.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![550, 13]);
        assert_eq!(candidates[0].genre_ids, vec![18]);
    }

    #[test]
    fn test_into_paginated_defaults() {
        let page: TmdbPage<Value> = serde_json::from_value(json!({})).unwrap();
        let paginated = into_paginated(page, None);
        assert_eq!(paginated.current_page, 1);
        assert_eq!(paginated.total_pages, 1);
        assert_eq!(paginated.total_results, 0);
        assert!(paginated.results.is_empty());
    }

    #[test]
    fn test_into_paginated_prefers_requested_page() {
        let page: TmdbPage<Value> = serde_json::from_value(json!({
            "page": 1,
            "results": [{ "id": 1 }],
            "total_pages": 40,
            "total_results": 800
        }))
        .unwrap();

        let paginated = into_paginated(page, Some(3));
        assert_eq!(paginated.current_page, 3);
        assert_eq!(paginated.total_pages, 40);
        assert_eq!(paginated.total_results, 800);
    }
}
